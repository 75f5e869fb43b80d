//! Template registry and drawable creation

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::{debug, warn};

use super::{TemplateId, ThingError, ThingTemplate};
use crate::foundation::math::Vec3;
use crate::physics::collision::CollisionType;
use crate::render::{Drawable, DrawableStatus, DrawableStore, RenderObjId};

/// Name of the template every new template is copied from, when registered
pub const DEFAULT_TEMPLATE_NAME: &str = "DefaultThingTemplate";

/// Names with this prefix get a template created on first lookup
pub const TESTING_TEMPLATE_PREFIX: &str = "***TESTING";

/// Owner of all thing templates
#[derive(Debug)]
pub struct ThingFactory {
    templates: HashMap<String, ThingTemplate>,
    // Templates displaced by a duplicate name; still reachable by id
    shadowed: Vec<ThingTemplate>,
    next_template_id: u16,
}

impl ThingFactory {
    /// Create an empty factory. The first template gets id 1.
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
            shadowed: Vec::new(),
            next_template_id: 1,
        }
    }

    /// Register a new template named `name` and return it for editing.
    ///
    /// The template starts as a copy of [`DEFAULT_TEMPLATE_NAME`] when that
    /// exists. A template already registered under `name` is replaced for
    /// name lookups but stays reachable through
    /// [`find_template_by_id`](Self::find_template_by_id).
    pub fn new_template(&mut self, name: &str) -> &mut ThingTemplate {
        let id = TemplateId(self.next_template_id);
        let template = match self.templates.get(DEFAULT_TEMPLATE_NAME) {
            Some(default_template) => {
                let mut template = default_template.detached_copy();
                template.set_identity(id, name);
                template
            }
            None => ThingTemplate::new(id, name),
        };

        self.next_template_id = self.next_template_id.wrapping_add(1);
        if self.next_template_id == 0 {
            warn!("Thing template id counter wrapped to zero");
        }

        self.add_template(template)
    }

    fn add_template(&mut self, template: ThingTemplate) -> &mut ThingTemplate {
        match self.templates.entry(template.name().to_string()) {
            Entry::Occupied(mut entry) => {
                warn!("Duplicate thing template name found: {}", template.name());
                let previous = entry.insert(template);
                self.shadowed.push(previous);
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                debug!("Registered thing template {} (id {})", template.name(), template.id());
                entry.insert(template)
            }
        }
    }

    /// Layer a new override on top of the template named `name`.
    ///
    /// The override starts as a copy of the current final override.
    pub fn new_override(&mut self, name: &str) -> Result<&mut ThingTemplate, ThingError> {
        let template = self
            .templates
            .get_mut(name)
            .ok_or_else(|| ThingError::MissingTemplate(name.to_string()))?;
        debug!("Adding override {} to thing template {name}", template.override_count() + 1);
        Ok(template.push_override())
    }

    /// Look up a template by name
    pub fn find_template(&self, name: &str) -> Option<&ThingTemplate> {
        self.templates.get(name)
    }

    /// Look up a template by name, creating it for names starting with
    /// [`TESTING_TEMPLATE_PREFIX`]. Other misses are logged.
    pub fn resolve_template(&mut self, name: &str) -> Option<&ThingTemplate> {
        if !self.templates.contains_key(name) {
            if !name.starts_with(TESTING_TEMPLATE_PREFIX) {
                if !name.is_empty() {
                    warn!("Failed to find thing template {name} (case sensitive)");
                }
                return None;
            }
            debug!("Creating testing thing template {name}");
            self.new_template(name);
        }
        self.templates.get(name)
    }

    /// Look up a template by id
    pub fn find_template_by_id(&self, id: TemplateId) -> Result<&ThingTemplate, ThingError> {
        self.templates
            .values()
            .chain(self.shadowed.iter())
            .find(|template| template.id() == id)
            .ok_or(ThingError::UnknownTemplateId(id))
    }

    /// Effective data of the template named `name`
    pub fn final_override(&self, name: &str) -> Option<&ThingTemplate> {
        self.find_template(name).map(ThingTemplate::final_override)
    }

    /// Drop every override, leaving the base templates
    pub fn reset(&mut self) {
        let removed: usize = self
            .templates
            .values_mut()
            .chain(self.shadowed.iter_mut())
            .map(ThingTemplate::delete_overrides)
            .sum();
        debug!("Reset thing factory, dropped {removed} overrides");
    }

    /// Remove every template
    pub fn free_database(&mut self) {
        debug!("Freeing {} thing templates", self.templates.len() + self.shadowed.len());
        self.templates.clear();
        self.shadowed.clear();
    }

    /// Number of registered templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether no template is registered
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Create a drawable from the template named `name` at the origin.
    ///
    /// Geometry comes from the template's final override; templates without
    /// geometry produce a point-sized drawable that matches no collision type
    /// except [`CollisionType::ALL`].
    pub fn new_drawable(
        &self,
        name: &str,
        status: DrawableStatus,
        store: &mut DrawableStore,
    ) -> Result<RenderObjId, ThingError> {
        let template = self
            .find_template(name)
            .ok_or_else(|| ThingError::MissingTemplate(name.to_string()))?;
        let effective = template.final_override();
        let (extent, collision_type) = effective
            .geometry()
            .map_or((Vec3::zeros(), CollisionType::empty()), |g| (g.extent, g.collision_type));

        Ok(store.insert(Drawable {
            template: template.id(),
            status,
            position: Vec3::zeros(),
            extent,
            collision_type,
        }))
    }
}

impl Default for ThingFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thing::GeometryInfo;

    fn crate_geometry() -> GeometryInfo {
        GeometryInfo::new(Vec3::new(0.5, 0.5, 0.5), CollisionType::PHYSICAL)
    }

    #[test]
    fn test_ids_start_at_one() {
        let mut factory = ThingFactory::new();
        assert_eq!(factory.new_template("Tank").id(), TemplateId(1));
        assert_eq!(factory.new_template("Jeep").id(), TemplateId(2));
        assert_eq!(factory.len(), 2);
    }

    #[test]
    fn test_new_template_copies_default() {
        let mut factory = ThingFactory::new();
        factory.new_template(DEFAULT_TEMPLATE_NAME).set_geometry(crate_geometry());
        let tank = factory.new_template("Tank");
        assert!(tank.is_copied_from_default());
        assert_eq!(tank.name(), "Tank");
        assert_eq!(tank.id(), TemplateId(2));
        assert_eq!(tank.geometry(), Some(&crate_geometry()));
    }

    #[test]
    fn test_template_without_default_is_fresh() {
        let mut factory = ThingFactory::new();
        let tank = factory.new_template("Tank");
        assert!(!tank.is_copied_from_default());
        assert!(tank.geometry().is_none());
    }

    #[test]
    fn test_duplicate_name_replaces() {
        let mut factory = ThingFactory::new();
        factory.new_template("Tank");
        factory.new_template("Tank");
        assert_eq!(factory.len(), 1);
        assert_eq!(factory.find_template("Tank").map(ThingTemplate::id), Some(TemplateId(2)));
    }

    #[test]
    fn test_duplicate_name_keeps_old_template_by_id() {
        let mut factory = ThingFactory::new();
        factory.new_template("Tank").set_geometry(crate_geometry());
        factory.new_template("Tank");

        let old = factory.find_template_by_id(TemplateId(1)).unwrap();
        assert_eq!(old.name(), "Tank");
        assert_eq!(old.geometry(), Some(&crate_geometry()));
        assert!(factory.find_template("Tank").unwrap().geometry().is_none());

        factory.free_database();
        assert!(factory.find_template_by_id(TemplateId(1)).is_err());
    }

    #[test]
    fn test_resolve_creates_testing_templates_only() {
        let mut factory = ThingFactory::new();
        let created = factory.resolve_template("***TESTING tank").map(ThingTemplate::id);
        assert_eq!(created, Some(TemplateId(1)));
        assert_eq!(factory.resolve_template("***TESTING tank").map(ThingTemplate::id), Some(TemplateId(1)));

        assert!(factory.resolve_template("Ghost").is_none());
        assert!(factory.resolve_template("").is_none());
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn test_id_counter_wraps() {
        let mut factory = ThingFactory::new();
        factory.next_template_id = u16::MAX;
        assert_eq!(factory.new_template("Last").id(), TemplateId(u16::MAX));
        assert_eq!(factory.new_template("Wrapped").id(), TemplateId(0));
    }

    #[test]
    fn test_find_by_id() {
        let mut factory = ThingFactory::new();
        factory.new_template("Tank");
        factory.new_template("Jeep");
        assert_eq!(factory.find_template_by_id(TemplateId(2)).map(ThingTemplate::name), Ok("Jeep"));
        assert_eq!(
            factory.find_template_by_id(TemplateId(9)),
            Err(ThingError::UnknownTemplateId(TemplateId(9)))
        );
    }

    #[test]
    fn test_overrides_and_reset() {
        let mut factory = ThingFactory::new();
        factory.new_template("Tank").set_geometry(crate_geometry());
        factory
            .new_override("Tank")
            .unwrap()
            .set_geometry(GeometryInfo::new(Vec3::new(2.0, 1.0, 1.0), CollisionType::VEHICLE));

        let effective = factory.final_override("Tank").unwrap();
        assert_eq!(effective.geometry().map(|g| g.collision_type), Some(CollisionType::VEHICLE));
        assert_eq!(effective.id(), TemplateId(1));

        factory.reset();
        let effective = factory.final_override("Tank").unwrap();
        assert_eq!(effective.geometry(), Some(&crate_geometry()));
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn test_override_of_unknown_template() {
        let mut factory = ThingFactory::new();
        assert_eq!(
            factory.new_override("Ghost").unwrap_err(),
            ThingError::MissingTemplate("Ghost".to_string())
        );
    }

    #[test]
    fn test_free_database() {
        let mut factory = ThingFactory::new();
        factory.new_template("Tank");
        factory.free_database();
        assert!(factory.is_empty());
        assert!(factory.find_template("Tank").is_none());
    }

    #[test]
    fn test_new_drawable_uses_final_override() {
        let mut factory = ThingFactory::new();
        factory.new_template("Crate").set_geometry(crate_geometry());
        factory
            .new_override("Crate")
            .unwrap()
            .set_geometry(GeometryInfo::new(Vec3::new(1.0, 1.0, 1.0), CollisionType::PROJECTILE));

        let mut store = DrawableStore::new();
        let id = factory.new_drawable("Crate", DrawableStatus::SHADOWS, &mut store).unwrap();
        let drawable = store.get(id).unwrap();
        assert_eq!(drawable.template, TemplateId(1));
        assert_eq!(drawable.status, DrawableStatus::SHADOWS);
        assert_eq!(drawable.extent, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(drawable.collision_type, CollisionType::PROJECTILE);
    }

    #[test]
    fn test_new_drawable_without_geometry() {
        let mut factory = ThingFactory::new();
        factory.new_template("Marker");
        let mut store = DrawableStore::new();
        let id = factory.new_drawable("Marker", DrawableStatus::empty(), &mut store).unwrap();
        let drawable = store.get(id).unwrap();
        assert_eq!(drawable.extent, Vec3::zeros());
        assert!(drawable.collision_type.is_empty());
    }

    #[test]
    fn test_new_drawable_missing_template() {
        let factory = ThingFactory::new();
        let mut store = DrawableStore::new();
        let err = factory.new_drawable("Ghost", DrawableStatus::empty(), &mut store).unwrap_err();
        assert_eq!(err, ThingError::MissingTemplate("Ghost".to_string()));
        assert!(store.is_empty());
    }
}
