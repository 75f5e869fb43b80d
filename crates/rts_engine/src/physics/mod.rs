//! Physics module for swept collision queries
//!
//! Provides the swept box tests a movement step uses to resolve motion
//! against the world, and a broad-phase driver that culls candidate geometry
//! before the exact intersection routines run.

pub mod collision;
pub mod broad_phase;

pub use collision::{
    AABox,
    OBBox,
    CastResult,
    CollisionType,
    CollisionTest,
    AABoxCollisionTest,
    OBBoxCollisionTest,
    RotationType,
};
pub use broad_phase::{BroadPhase, BoxCollisionTest, Candidate, CullStats, SweptVolume};
