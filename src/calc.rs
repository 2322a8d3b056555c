//! Small math helpers shared by the shape generators and the camera.
//!
//! Matrices are `cgmath::Matrix4<f32>` in column-major order and follow the
//! OpenGL clip-space convention (depth in `[-1, 1]`).

use cgmath::{InnerSpace, Matrix4, Rad, SquareMatrix, Vector3, Zero};

pub const TAU: f32 = std::f32::consts::TAU;

/// Integer modulo whose result is never negative for a positive `b`.
pub fn modulo_i32(a: i32, b: i32) -> i32 {
    a.rem_euclid(b)
}

/// Floating point remainder with the sign of `a` (C `fmod` semantics).
pub fn modulo_f32(a: f32, b: f32) -> f32 {
    a % b
}

pub fn clamp(x: f32, min_value: f32, max_value: f32) -> f32 {
    x.clamp(min_value, max_value)
}

pub fn to_radians(degrees: f32) -> f32 {
    degrees * TAU / 360.0
}

pub fn mat4_identity() -> Matrix4<f32> {
    Matrix4::identity()
}

pub fn mat4_scale(s: f32) -> Matrix4<f32> {
    Matrix4::from_scale(s)
}

pub fn mat4_translate(t: Vector3<f32>) -> Matrix4<f32> {
    Matrix4::from_translation(t)
}

pub fn mat4_rotate_x(radians: f32) -> Matrix4<f32> {
    Matrix4::from_angle_x(Rad(radians))
}

pub fn mat4_rotate_y(radians: f32) -> Matrix4<f32> {
    Matrix4::from_angle_y(Rad(radians))
}

/// Right-handed perspective projection.
///
/// `y_fov` is the full vertical field of view in radians.
pub fn mat4_perspective(y_fov: f32, aspect: f32, near: f32, far: f32) -> Matrix4<f32> {
    cgmath::perspective(Rad(y_fov), aspect, near, far)
}

pub fn midpoint(a: Vector3<f32>, b: Vector3<f32>) -> Vector3<f32> {
    (a + b) * 0.5
}

/// Unit vector in the direction of `v`, or zero when `v` has no length.
pub fn normalize_or_zero(v: Vector3<f32>) -> Vector3<f32> {
    let len = v.magnitude();
    if len > f32::EPSILON {
        v / len
    } else {
        Vector3::zero()
    }
}
