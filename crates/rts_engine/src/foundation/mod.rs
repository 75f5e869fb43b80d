//! Foundation module - math types and logging setup shared by every subsystem

pub mod math;
pub mod logging;
