//! Thing template data and override chains

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;
use crate::physics::collision::{AABox, CollisionType};

/// Registry id of a thing template. Ids start at 1; 0 is never handed out
/// until the counter wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct TemplateId(pub u16);

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Collision geometry of a template
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryInfo {
    /// Half-size of the bounding box
    pub extent: Vec3,
    /// Collision categories the geometry responds to
    pub collision_type: CollisionType,
}

impl GeometryInfo {
    /// Create geometry info
    pub fn new(extent: Vec3, collision_type: CollisionType) -> Self {
        Self { extent, collision_type }
    }

    /// Bounds of the geometry placed at `position`
    pub fn bounds_at(&self, position: Vec3) -> AABox {
        AABox::new(position, self.extent)
    }
}

/// A named template plus the overrides layered on top of it.
///
/// Overrides are full copies of the previous layer; the last one is the
/// effective data ([`final_override`](Self::final_override)).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThingTemplate {
    id: TemplateId,
    name: String,
    copied_from_default: bool,
    geometry: Option<GeometryInfo>,
    overrides: Vec<ThingTemplate>,
}

impl ThingTemplate {
    pub(crate) fn new(id: TemplateId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Copy of this layer's data with no overrides attached
    pub(crate) fn detached_copy(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            copied_from_default: true,
            geometry: self.geometry,
            overrides: Vec::new(),
        }
    }

    pub(crate) fn set_identity(&mut self, id: TemplateId, name: impl Into<String>) {
        self.id = id;
        self.name = name.into();
    }

    /// Registry id
    pub fn id(&self) -> TemplateId {
        self.id
    }

    /// Template name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this template started as a copy of another one
    pub fn is_copied_from_default(&self) -> bool {
        self.copied_from_default
    }

    /// Collision geometry, if the template has any
    pub fn geometry(&self) -> Option<&GeometryInfo> {
        self.geometry.as_ref()
    }

    /// Set the collision geometry
    pub fn set_geometry(&mut self, geometry: GeometryInfo) -> &mut Self {
        self.geometry = Some(geometry);
        self
    }

    /// Remove the collision geometry
    pub fn clear_geometry(&mut self) -> &mut Self {
        self.geometry = None;
        self
    }

    /// Effective data: the last override, or the template itself
    pub fn final_override(&self) -> &ThingTemplate {
        self.overrides.last().unwrap_or(self)
    }

    /// Number of override layers
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Append a copy of the final override and return it for editing
    pub(crate) fn push_override(&mut self) -> &mut ThingTemplate {
        let layer = self.final_override().detached_copy();
        self.overrides.push(layer);
        let last = self.overrides.len() - 1;
        &mut self.overrides[last]
    }

    /// Drop every override layer, returning how many were removed
    pub(crate) fn delete_overrides(&mut self) -> usize {
        let count = self.overrides.len();
        self.overrides.clear();
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crate_template() -> ThingTemplate {
        let mut template = ThingTemplate::new(TemplateId(3), "Crate");
        template.set_geometry(GeometryInfo::new(Vec3::new(0.5, 0.5, 0.5), CollisionType::PHYSICAL));
        template
    }

    #[test]
    fn test_final_override_without_layers_is_self() {
        let template = crate_template();
        assert_eq!(template.final_override(), &template);
        assert_eq!(template.override_count(), 0);
    }

    #[test]
    fn test_override_copies_previous_layer() {
        let mut template = crate_template();
        template
            .push_override()
            .set_geometry(GeometryInfo::new(Vec3::new(1.0, 1.0, 1.0), CollisionType::VEHICLE));
        let second = template.push_override();
        assert_eq!(second.geometry().map(|g| g.collision_type), Some(CollisionType::VEHICLE));
        assert!(second.is_copied_from_default());
        second.clear_geometry();

        assert_eq!(template.override_count(), 2);
        assert!(template.final_override().geometry().is_none());
        assert_eq!(template.final_override().id(), TemplateId(3));
        assert_eq!(template.geometry().map(|g| g.collision_type), Some(CollisionType::PHYSICAL));
    }

    #[test]
    fn test_delete_overrides() {
        let mut template = crate_template();
        template.push_override();
        template.push_override();
        assert_eq!(template.delete_overrides(), 2);
        assert_eq!(template.final_override().name(), "Crate");
    }

    #[test]
    fn test_geometry_bounds() {
        let geometry = GeometryInfo::new(Vec3::new(1.0, 2.0, 3.0), CollisionType::ALL);
        let bounds = geometry.bounds_at(Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(bounds.min(), Vec3::new(0.0, -1.0, -2.0));
        assert_eq!(bounds.max(), Vec3::new(2.0, 3.0, 4.0));
    }
}
