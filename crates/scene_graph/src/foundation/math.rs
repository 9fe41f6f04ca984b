//! Math utilities and types
//!
//! Provides the nalgebra aliases used by the scene graph together with the
//! translate / rotate / scale composition that produces a node's local matrix.

pub use nalgebra::{Matrix4, Rotation3, Unit, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Rotation packed as `(axis.x, axis.y, axis.z, angle)`, angle in radians
pub type AxisAngle = Vec4;

/// Pack an axis and an angle into an [`AxisAngle`]
pub fn axis_angle(axis: Vec3, angle: f32) -> AxisAngle {
    Vec4::new(axis.x, axis.y, axis.z, angle)
}

/// Homogeneous rotation matrix for an axis-angle value.
///
/// The axis does not need to be normalized. A zero-length axis has no
/// direction to rotate around and yields the identity.
pub fn rotation_matrix(rotation: &AxisAngle) -> Mat4 {
    match Unit::try_new(rotation.xyz(), f32::EPSILON) {
        Some(axis) => Rotation3::from_axis_angle(&axis, rotation.w).to_homogeneous(),
        None => Mat4::identity(),
    }
}

/// Local transform of a scene node: position, axis-angle rotation and scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    /// Translation relative to the parent
    pub position: Vec3,

    /// Axis-angle rotation relative to the parent
    pub rotation: AxisAngle,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: axis_angle(Vec3::y(), 0.0),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl LocalTransform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Convert to a transformation matrix.
    ///
    /// Composition is `T * R * S`: a point is scaled first, then rotated,
    /// then translated.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * rotation_matrix(&self.rotation)
            * Mat4::new_nonuniform_scaling(&self.scale)
    }
}

/// Translation column of an affine matrix
pub fn translation_of(matrix: &Mat4) -> Vec3 {
    Vec3::new(matrix.m14, matrix.m24, matrix.m34)
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Wrap an angle into `[0, TAU)`
    pub fn wrap_angle(radians: f32) -> f32 {
        radians.rem_euclid(constants::TAU)
    }
}
