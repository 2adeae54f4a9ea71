//! Model-view-projection building blocks on top of `glam`.
//!
//! `Mat4` wraps `glam::Mat4` with the handful of constructors the demos compose their MVP matrices
//! from. Storage is column-major, the same way OpenGL expects it, so `to_cols_array` can go
//! straight to `glUniformMatrix4fv` without transposing.

use std::ops::{Mul, MulAssign};

use glam::{Vec3, Vec4};

/// Converts an angle from degrees to radians.
pub fn radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mat4(pub glam::Mat4);

impl Mat4 {
    pub fn identity() -> Self {
        Mat4(glam::Mat4::IDENTITY)
    }

    /// Element at `row`, `col`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0.col(col)[row]
    }

    pub fn to_cols_array(&self) -> [f32; 16] {
        self.0.to_cols_array()
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4(glam::Mat4::from_translation(Vec3::new(x, y, z)))
    }

    /// Counter-clockwise rotation of `angle` radians around the axis `(x, y, z)`, looking down the
    /// axis towards the origin. The axis doesn't need to be normalized, but a zero-length axis
    /// gives back the identity.
    pub fn rotation(angle: f32, x: f32, y: f32, z: f32) -> Self {
        let axis = Vec3::new(x, y, z).normalize_or_zero();
        if axis == Vec3::ZERO {
            return Self::identity();
        }

        Mat4(glam::Mat4::from_axis_angle(axis, angle))
    }

    /// Right-handed perspective projection with a vertical field of view given in degrees.
    /// `z = -near` lands on -1 in normalized device coordinates and `z = -far` on +1.
    pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Mat4(glam::Mat4::perspective_rh_gl(radians(fov), aspect, near, far))
    }

    pub fn multiply(a: &Mat4, b: &Mat4) -> Mat4 {
        Mat4(a.0 * b.0)
    }

    /// Post-multiplies a translation onto this matrix.
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        *self *= Self::translation(x, y, z);
    }

    /// Post-multiplies a rotation onto this matrix.
    pub fn rotate(&mut self, angle: f32, x: f32, y: f32, z: f32) {
        *self *= Self::rotation(angle, x, y, z);
    }

    pub fn transform(&self, v: [f32; 4]) -> [f32; 4] {
        (self.0 * Vec4::from(v)).to_array()
    }

    pub fn abs_diff_eq(&self, other: &Mat4, max_abs_diff: f32) -> bool {
        self.0.abs_diff_eq(other.0, max_abs_diff)
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        Mat4::multiply(&self, &rhs)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Mat4) {
        *self = Mat4::multiply(self, &rhs);
    }
}
