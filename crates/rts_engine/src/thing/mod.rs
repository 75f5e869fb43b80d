//! # Thing Templates
//!
//! Named templates describe the kinds of things that can be placed in the
//! world. The [`ThingFactory`] owns the template registry, hands out template
//! ids and creates drawables from templates.
//!
//! ```rust,ignore
//! let mut factory = ThingFactory::new();
//! factory.new_template("Crate").set_geometry(GeometryInfo::new(
//!     Vec3::new(0.5, 0.5, 0.5),
//!     CollisionType::PHYSICAL,
//! ));
//! let id = factory.new_drawable("Crate", DrawableStatus::SHADOWS, &mut store)?;
//! ```

mod factory;
mod template;

pub use factory::{ThingFactory, DEFAULT_TEMPLATE_NAME, TESTING_TEMPLATE_PREFIX};
pub use template::{GeometryInfo, TemplateId, ThingTemplate};

use thiserror::Error;

/// Thing factory errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThingError {
    /// No template is registered under this name
    #[error("Thing template not found: {0}")]
    MissingTemplate(String),

    /// No template carries this id
    #[error("Thing template id not found: {0}")]
    UnknownTemplateId(TemplateId),
}
