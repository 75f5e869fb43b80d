//! Swept-volume collision tests
//!
//! A movement step builds one test per moving object per tick from the
//! object's current bound and intended displacement. The broad phase asks
//! the test to [`cull`](AABoxCollisionTest::cull) each candidate; only the
//! survivors reach the exact intersection routines, which write their
//! outcome into the caller's [`CastResult`] through the test.
//!
//! # Module Organization
//!
//! - [`bounds`] - Axis-aligned and oriented boxes
//! - [`cast_result`] - Outcome record of a query
//! - [`collision_type`] - Geometry category filter
//! - [`collision_test`] - Query context shared by the box tests
//! - [`aabox_test`] / [`obbox_test`] - The swept box tests

pub mod bounds;
pub mod cast_result;
pub mod collision_type;

// Re-export commonly used types
pub use bounds::{AABox, OBBox};
pub use cast_result::CastResult;
pub use collision_type::CollisionType;
pub use collision_test::CollisionTest;
pub use aabox_test::{AABoxCollisionTest, RotationType};
pub use obbox_test::OBBoxCollisionTest;
