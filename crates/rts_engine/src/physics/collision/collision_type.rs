//! Collision type tags for filtering which geometry takes part in a query
//!
//! Every collision test carries a [`CollisionType`] and every piece of scene
//! geometry declares the types it responds to. A query only considers
//! geometry whose types match its own.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Geometry categories a collision query participates in
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct CollisionType: u8 {
        /// Matches every category
        const ALL = 0x01;
        /// Category 0
        const TYPE_0 = 0x02;
        /// Category 1
        const TYPE_1 = 0x04;
        /// Category 2
        const TYPE_2 = 0x08;
        /// Category 3
        const TYPE_3 = 0x10;
        /// Category 4
        const TYPE_4 = 0x20;
        /// Category 5
        const TYPE_5 = 0x40;
        /// Category 6
        const TYPE_6 = 0x80;

        /// Solid geometry units move against
        const PHYSICAL = Self::TYPE_0.bits();
        /// Geometry that stops projectiles
        const PROJECTILE = Self::TYPE_1.bits();
        /// Geometry used for visibility tests
        const VIS = Self::TYPE_2.bits();
        /// Geometry the camera collides with
        const CAMERA = Self::TYPE_3.bits();
        /// Geometry vehicles collide with
        const VEHICLE = Self::TYPE_4.bits();
    }
}

impl CollisionType {
    /// Check if a query of type `self` should consider geometry of type `other`.
    ///
    /// `ALL` on either side matches anything; otherwise the sets must share a
    /// category.
    #[inline]
    pub fn matches(self, other: Self) -> bool {
        self.contains(Self::ALL) || other.contains(Self::ALL) || self.intersects(other)
    }
}

impl Default for CollisionType {
    fn default() -> Self {
        Self::TYPE_0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_shared_category() {
        let query = CollisionType::PHYSICAL;
        let geometry = CollisionType::PHYSICAL | CollisionType::CAMERA;
        assert!(query.matches(geometry));
        assert!(geometry.matches(query));
    }

    #[test]
    fn test_disjoint_categories_do_not_match() {
        assert!(!CollisionType::PROJECTILE.matches(CollisionType::VIS));
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(CollisionType::ALL.matches(CollisionType::TYPE_6));
        assert!(CollisionType::VEHICLE.matches(CollisionType::ALL));
    }

    #[test]
    fn test_empty_matches_nothing_but_all() {
        assert!(!CollisionType::empty().matches(CollisionType::PHYSICAL));
        assert!(CollisionType::empty().matches(CollisionType::ALL));
    }

    #[test]
    fn test_default_is_physical() {
        assert_eq!(CollisionType::default(), CollisionType::TYPE_0);
        assert_eq!(CollisionType::default(), CollisionType::PHYSICAL);
    }
}
