//! Outcome record of a single swept collision query

use crate::foundation::math::Vec3;

/// Result of casting a volume along its move vector.
///
/// Owned by the caller of a collision query. Tests borrow it as a
/// `&Cell<CastResult>` for the duration of the query, so a result can't be
/// shared between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastResult {
    /// Fraction of the move completed before impact, in `[0, 1]`
    pub fraction: f32,
    /// Surface normal at the impact
    pub normal: Vec3,
    /// The volume was already intersecting at the start of the move
    pub start_bad: bool,
    /// Surface type of the struck geometry
    pub surface_type: u32,
    /// Ask the intersection routines to fill in `contact_point`
    pub compute_contact_point: bool,
    /// Point of contact, valid only when `compute_contact_point` was set
    pub contact_point: Vec3,
}

impl CastResult {
    /// A fresh result: full move, no hit
    pub fn new() -> Self {
        Self {
            fraction: 1.0,
            normal: Vec3::zeros(),
            start_bad: false,
            surface_type: 0,
            compute_contact_point: false,
            contact_point: Vec3::zeros(),
        }
    }

    /// Fresh result that also requests the contact point
    pub fn with_contact_point() -> Self {
        Self {
            compute_contact_point: true,
            ..Self::new()
        }
    }

    /// Clear the outcome for the next query, keeping the contact point request
    pub fn reset(&mut self) {
        *self = Self {
            compute_contact_point: self.compute_contact_point,
            ..Self::new()
        };
    }

    /// Whether anything stopped the move
    pub fn is_hit(&self) -> bool {
        self.start_bad || self.fraction < 1.0
    }
}

impl Default for CastResult {
    fn default() -> Self {
        Self::new()
    }
}
