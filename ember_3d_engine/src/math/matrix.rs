/// 4x4 float matrix with a single, fixed multiplication convention.
///
/// Storage is column-major and vectors are columns: `a.dot(b)` equals
/// `a * b`, and `a.dot(b).transform_point(p)` equals
/// `a.transform_point(b.transform_point(p))`. Builders are right-handed
/// with a `[0, 1]` depth range.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};
use crate::engine_bail;
use crate::error::{Error, Result};
use super::vector::normalize;

/// `|w|` below this is treated as a point at infinity
pub const HOMOGENEOUS_EPSILON: f32 = 1e-7;

/// Pure value 4x4 transform. Upload-ready (`Pod`, 64 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(transparent)]
pub struct Matrix(Mat4);

impl Matrix {
    pub const IDENTITY: Self = Self(Mat4::IDENTITY);
    pub const ZERO: Self = Self(Mat4::ZERO);

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Build from 16 floats in column-major order.
    pub fn from_cols_array(values: &[f32; 16]) -> Self {
        Self(Mat4::from_cols_array(values))
    }

    /// Build from 16 floats in row-major order (`values[row * 4 + col]`).
    pub fn from_rows_array(values: &[f32; 16]) -> Self {
        Self(Mat4::from_cols_array(values).transpose())
    }

    pub fn to_cols_array(&self) -> [f32; 16] {
        self.0.to_cols_array()
    }

    pub fn to_rows_array(&self) -> [f32; 16] {
        self.0.transpose().to_cols_array()
    }

    pub fn as_mat4(&self) -> &Mat4 {
        &self.0
    }

    /// Element at `row`, `col`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0.col(col)[row]
    }

    // ===== ARITHMETIC =====

    /// Component-wise sum.
    pub fn add(&self, other: &Matrix) -> Matrix {
        Self(self.0 + other.0)
    }

    /// Matrix product `self * other` (`other` is applied first).
    pub fn dot(&self, other: &Matrix) -> Matrix {
        Self(self.0 * other.0)
    }

    pub fn transpose(&self) -> Matrix {
        Self(self.0.transpose())
    }

    pub fn determinant(&self) -> f32 {
        self.0.determinant()
    }

    /// Inverse, or `None` for a singular matrix.
    pub fn inverse(&self) -> Option<Matrix> {
        let det = self.0.determinant();
        if !det.is_finite() || det.abs() < f32::EPSILON * f32::EPSILON {
            return None;
        }
        Some(Self(self.0.inverse()))
    }

    pub fn approx_eq(&self, other: &Matrix, epsilon: f32) -> bool {
        self.0.abs_diff_eq(other.0, epsilon)
    }

    // ===== VECTOR TRANSFORMS =====

    /// Transform a point (`w = 1`) and apply the homogeneous divide.
    ///
    /// # Errors
    ///
    /// `DegenerateVector` when the resulting `w` is (close to) zero.
    pub fn transform_point(&self, point: Vec3) -> Result<Vec3> {
        let v = self.transform_vec4(point.extend(1.0));
        if !(v.w.abs() > HOMOGENEOUS_EPSILON) {
            return Err(Error::DegenerateVector(format!(
                "homogeneous w = {} for point {:?}", v.w, point
            )));
        }
        Ok(v.truncate() / v.w)
    }

    /// Transform a direction (`w = 0`): translation is ignored, no divide.
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.0.transform_vector3(vector)
    }

    pub fn transform_vec4(&self, v: Vec4) -> Vec4 {
        self.0 * v
    }

    // ===== BUILDERS =====

    pub fn translation(offset: Vec3) -> Matrix {
        Self(Mat4::from_translation(offset))
    }

    pub fn scale(factors: Vec3) -> Matrix {
        Self(Mat4::from_scale(factors))
    }

    pub fn uniform_scale(factor: f32) -> Matrix {
        Self(Mat4::from_scale(Vec3::splat(factor)))
    }

    pub fn rotation_x(angle: f32) -> Matrix {
        Self(Mat4::from_rotation_x(angle))
    }

    pub fn rotation_y(angle: f32) -> Matrix {
        Self(Mat4::from_rotation_y(angle))
    }

    pub fn rotation_z(angle: f32) -> Matrix {
        Self(Mat4::from_rotation_z(angle))
    }

    /// Rotation of `angle` radians around `axis` (normalized here).
    pub fn rotation(axis: Vec3, angle: f32) -> Result<Matrix> {
        let axis = normalize(axis)?;
        Ok(Self(Mat4::from_axis_angle(axis, angle)))
    }

    /// Right-handed perspective projection, depth `[0, 1]`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless `0 < fov_y < π`, `aspect > 0` and `0 < near < far`.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Result<Matrix> {
        if !(fov_y > 0.0 && fov_y < std::f32::consts::PI) {
            engine_bail!("ember3d::Matrix", "fov_y must be in (0, pi), got {}", fov_y);
        }
        if !(aspect > 0.0 && aspect.is_finite()) {
            engine_bail!("ember3d::Matrix", "aspect must be positive, got {}", aspect);
        }
        if !(near > 0.0 && far > near && far.is_finite()) {
            engine_bail!("ember3d::Matrix", "expected 0 < near < far, got near={} far={}", near, far);
        }
        Ok(Self(Mat4::perspective_rh(fov_y, aspect, near, far)))
    }

    /// Right-handed orthographic projection, depth `[0, 1]`.
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<Matrix> {
        if !(right > left && top > bottom) {
            engine_bail!(
                "ember3d::Matrix",
                "empty orthographic extents: left={} right={} bottom={} top={}",
                left, right, bottom, top
            );
        }
        if !(far > near) {
            engine_bail!("ember3d::Matrix", "expected near < far, got near={} far={}", near, far);
        }
        Ok(Self(Mat4::orthographic_rh(left, right, bottom, top, near, far)))
    }

    /// Right-handed view matrix looking from `eye` toward `target`.
    ///
    /// # Errors
    ///
    /// `DegenerateVector` if `eye == target` or the view direction is parallel to `up`.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Result<Matrix> {
        let forward = normalize(target - eye)?;
        normalize(forward.cross(up)).map_err(|_| {
            Error::DegenerateVector(format!("view direction {:?} is parallel to up {:?}", forward, up))
        })?;
        Ok(Self(Mat4::look_at_rh(eye, target, up)))
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Mat4> for Matrix {
    fn from(mat: Mat4) -> Self {
        Self(mat)
    }
}

impl From<Matrix> for Mat4 {
    fn from(matrix: Matrix) -> Self {
        matrix.0
    }
}

impl std::ops::Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Matrix) -> Matrix {
        Matrix::add(&self, &rhs)
    }
}

impl std::ops::Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        self.dot(&rhs)
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
