//! Math utilities and types
//!
//! Provides fundamental math types for the simulation and collision code.
//! The world is Z-up: yaw rotations turn about the Z axis.

pub use nalgebra::{
    Vector3,
    Matrix3, Matrix4,
    Quaternion,
    Unit,
};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Rigid transform representing position and rotation, with optional scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Create a transform at `position` facing `yaw` radians about the up axis
    pub fn from_position_yaw(position: Vec3, yaw: f32) -> Self {
        Self::from_position_rotation(position, Quat::from_axis_angle(&Vec3::z_axis(), yaw))
    }

    /// Convert to a transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a direction (translation ignored)
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.to_matrix().transform_vector(&vector)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;
}

/// Extension trait for rigid-transform matrices
pub trait Mat4Ext {
    /// Create a rotation matrix around the Z (up) axis
    fn rotation_z(angle: f32) -> Mat4;

    /// Upper-left 3x3 block of the matrix (its rotation when rigid)
    fn rotation_part(&self) -> Mat3;

    /// Transform a position stored as a vector
    fn transform_position(&self, position: &Vec3) -> Vec3;
}

impl Mat4Ext for Mat4 {
    fn rotation_z(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::z_axis(), angle)
    }

    fn rotation_part(&self) -> Mat3 {
        self.fixed_view::<3, 3>(0, 0).into_owned()
    }

    fn transform_position(&self, position: &Vec3) -> Vec3 {
        self.transform_point(&Point3::from(*position)).coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_rotation_part_of_translation_is_identity() {
        let tm = Mat4::new_translation(&Vec3::new(4.0, -2.0, 9.0));
        assert_eq!(tm.rotation_part(), Mat3::identity());
    }

    #[test]
    fn test_yaw_turns_x_into_y() {
        let transform = Transform::from_position_yaw(Vec3::zeros(), constants::HALF_PI);
        let rotated = transform.transform_vector(Vec3::x());
        assert_relative_eq!(rotated, Vec3::y(), epsilon = EPSILON);
    }

    #[test]
    fn test_transform_position_applies_translation() {
        let tm = Transform::from_position_yaw(Vec3::new(1.0, 2.0, 3.0), constants::PI).to_matrix();
        let moved = tm.transform_position(&Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(moved, Vec3::new(0.0, 2.0, 3.0), epsilon = EPSILON);
    }

    #[test]
    fn test_yaw_matrix_matches_rotation_z() {
        let tm = Transform::from_position_yaw(Vec3::zeros(), 0.7).to_matrix();
        assert_relative_eq!(tm, Mat4::rotation_z(0.7), epsilon = EPSILON);
    }
}
