//! # RTS Engine
//!
//! Simulation-side building blocks of a real-time strategy engine.
//!
//! ## Features
//!
//! - **Swept Collision Tests**: Axis-aligned and oriented box sweeps with
//!   conservative broad-phase culling
//! - **Broad Phase**: Category filtering and cull statistics over scene drawables
//! - **Thing Templates**: Template registry with override layers
//! - **Configuration**: TOML/RON configuration files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::cell::Cell;
//! use rts_engine::prelude::*;
//!
//! let mut store = DrawableStore::new();
//! let mut factory = ThingFactory::new();
//! factory
//!     .new_template("Wall")
//!     .set_geometry(GeometryInfo::new(Vec3::new(1.0, 1.0, 1.0), CollisionType::PHYSICAL));
//! let wall = factory.new_drawable("Wall", DrawableStatus::empty(), &mut store)?;
//!
//! let result = Cell::new(CastResult::new());
//! let test = AABoxCollisionTest::new(
//!     AABox::new(Vec3::new(-4.0, 0.0, 0.0), Vec3::new(0.5, 0.5, 0.5)),
//!     Vec3::new(8.0, 0.0, 0.0),
//!     Some(&result),
//! );
//! if let Some(drawable) = store.get(wall) {
//!     assert!(!test.cull(&drawable.bounds()));
//! }
//! # Ok::<(), ThingError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;
pub mod config;

pub mod foundation;
pub mod physics;
pub mod render;
pub mod thing;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::{ApplicationConfig, CollisionConfig, Config, ConfigError, EngineConfig},
        foundation::math::{Mat3, Mat4, Mat4Ext, Transform, Vec3},
        physics::{
            AABox, AABoxCollisionTest, BoxCollisionTest, BroadPhase, CastResult, CollisionTest,
            CollisionType, CullStats, OBBox, OBBoxCollisionTest, RotationType, SweptVolume,
        },
        render::{Drawable, DrawableStatus, DrawableStore, RenderObjId},
        thing::{GeometryInfo, TemplateId, ThingError, ThingFactory, ThingTemplate},
    };
}
