//! Drawables: visible instances created from thing templates

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use super::RenderObjId;
use crate::foundation::math::Vec3;
use crate::physics::collision::{AABox, CollisionType};
use crate::thing::TemplateId;

bitflags! {
    /// Creation-time status bits of a drawable
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct DrawableStatus: u32 {
        /// Rendered into reflections
        const DRAWS_IN_MIRROR = 1 << 0;
        /// Casts shadows
        const SHADOWS = 1 << 1;
        /// Tint color can't be changed by game logic
        const TINT_COLOR_LOCKED = 1 << 2;
        /// No particle systems for state changes
        const NO_STATE_PARTICLES = 1 << 3;
        /// Not written to save games
        const NO_SAVE = 1 << 4;
    }
}

/// A visible instance of a thing template
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    /// Template this drawable was created from
    pub template: TemplateId,
    /// Status bits given at creation
    pub status: DrawableStatus,
    /// World position of the geometry center
    pub position: Vec3,
    /// Half-size of the geometry (zero for templates without geometry)
    pub extent: Vec3,
    /// Collision categories the geometry responds to
    pub collision_type: CollisionType,
}

impl Drawable {
    /// World-space axis-aligned bounds
    pub fn bounds(&self) -> AABox {
        AABox::new(self.position, self.extent)
    }
}

/// Owner of all live drawables; hands out [`RenderObjId`] handles
#[derive(Debug, Default)]
pub struct DrawableStore {
    drawables: SlotMap<RenderObjId, Drawable>,
}

impl DrawableStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a drawable and return its handle
    pub fn insert(&mut self, drawable: Drawable) -> RenderObjId {
        self.drawables.insert(drawable)
    }

    /// Remove a drawable, invalidating its handle
    pub fn remove(&mut self, id: RenderObjId) -> Option<Drawable> {
        self.drawables.remove(id)
    }

    /// Look up a drawable
    pub fn get(&self, id: RenderObjId) -> Option<&Drawable> {
        self.drawables.get(id)
    }

    /// Look up a drawable mutably
    pub fn get_mut(&mut self, id: RenderObjId) -> Option<&mut Drawable> {
        self.drawables.get_mut(id)
    }

    /// Number of live drawables
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Iterate over all drawables with their handles
    pub fn iter(&self) -> impl Iterator<Item = (RenderObjId, &Drawable)> {
        self.drawables.iter()
    }
}
