//! Render-side objects seen by the collision system
//!
//! The scene graph itself lives elsewhere; collision queries only need a
//! stable handle to report which object they struck, and the drawables the
//! thing factory creates provide broad-phase geometry.

mod drawable;

pub use drawable::{Drawable, DrawableStatus, DrawableStore};

slotmap::new_key_type! {
    /// Stable handle to a render object owned by a [`DrawableStore`]
    pub struct RenderObjId;
}
