//! Box bounding volumes used by the swept collision tests
//!
//! Both boxes are stored as center + half-extents. The oriented box adds a
//! rotation basis whose columns are the box's local axes in world space.

use crate::foundation::math::{Mat3, Mat4, Mat4Ext, Vec3};

/// Sign pattern of the 8 box corners, in the same order for both box types
const CORNER_SIGNS: [(f32, f32, f32); 8] = [
    (-1.0, -1.0, -1.0),
    (1.0, -1.0, -1.0),
    (-1.0, 1.0, -1.0),
    (1.0, 1.0, -1.0),
    (-1.0, -1.0, 1.0),
    (1.0, -1.0, 1.0),
    (-1.0, 1.0, 1.0),
    (1.0, 1.0, 1.0),
];

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABox {
    /// Center of the box
    pub center: Vec3,
    /// Half-size along each world axis
    pub extent: Vec3,
}

impl AABox {
    /// Create a box from its center and half-extents
    pub fn new(center: Vec3, extent: Vec3) -> Self {
        Self { center, extent }
    }

    /// Create the box spanning `min..max`
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self {
            center: (min + max) * 0.5,
            extent: (max - min) * 0.5,
        }
    }

    /// Minimum corner
    #[inline]
    pub fn min(&self) -> Vec3 {
        self.center - self.extent
    }

    /// Maximum corner
    #[inline]
    pub fn max(&self) -> Vec3 {
        self.center + self.extent
    }

    /// The 8 corners of the box
    pub fn corners(&self) -> [Vec3; 8] {
        CORNER_SIGNS.map(|(sx, sy, sz)| {
            self.center + Vec3::new(sx * self.extent.x, sy * self.extent.y, sz * self.extent.z)
        })
    }

    /// Check if this box contains a point (faces inclusive)
    pub fn contains_point(&self, point: &Vec3) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x &&
        point.y >= min.y && point.y <= max.y &&
        point.z >= min.z && point.z <= max.z
    }

    /// Check if this box overlaps another box (touching counts as overlap)
    pub fn intersects(&self, other: &AABox) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x <= b_max.x && a_max.x >= b_min.x &&
        a_min.y <= b_max.y && a_max.y >= b_min.y &&
        a_min.z <= b_max.z && a_max.z >= b_min.z
    }

    /// The same box moved by `offset`
    pub fn translated(&self, offset: &Vec3) -> Self {
        Self::new(self.center + offset, self.extent)
    }

    /// Axis-aligned box enclosing this box after transformation by `tm`
    pub fn transformed(&self, tm: &Mat4) -> Self {
        Self {
            center: tm.transform_position(&self.center),
            extent: tm.rotation_part().abs() * self.extent,
        }
    }
}

/// Oriented bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OBBox {
    /// Center of the box
    pub center: Vec3,
    /// Orthonormal basis; column `i` is the box's local axis `i`
    pub basis: Mat3,
    /// Half-size along each local axis
    pub extent: Vec3,
}

impl OBBox {
    /// Create an oriented box
    pub fn new(center: Vec3, basis: Mat3, extent: Vec3) -> Self {
        Self { center, basis, extent }
    }

    /// Oriented box equal to an axis-aligned box (identity basis)
    pub fn from_aabox(aabox: &AABox) -> Self {
        Self::new(aabox.center, Mat3::identity(), aabox.extent)
    }

    /// Oriented box equal to `aabox` after transformation by `tm`
    pub fn from_transformed_aabox(aabox: &AABox, tm: &Mat4) -> Self {
        Self {
            center: tm.transform_position(&aabox.center),
            basis: tm.rotation_part(),
            extent: aabox.extent,
        }
    }

    /// The 8 corners of the box, ordered like [`AABox::corners`]
    pub fn corners(&self) -> [Vec3; 8] {
        CORNER_SIGNS.map(|(sx, sy, sz)| {
            self.center
                + self.basis * Vec3::new(sx * self.extent.x, sy * self.extent.y, sz * self.extent.z)
        })
    }

    /// Half-extents of the world axis-aligned box enclosing this box.
    ///
    /// Equal to the axis-aligned envelope of the projected corners.
    #[inline]
    pub fn axis_aligned_extent(&self) -> Vec3 {
        self.basis.abs() * self.extent
    }

    /// Smallest axis-aligned box enclosing this box
    pub fn axis_aligned_bounds(&self) -> AABox {
        AABox::new(self.center, self.axis_aligned_extent())
    }

    /// This box after transformation by the rigid transform `tm`
    pub fn transformed(&self, tm: &Mat4) -> Self {
        Self {
            center: tm.transform_position(&self.center),
            basis: tm.rotation_part() * self.basis,
            extent: self.extent,
        }
    }
}
