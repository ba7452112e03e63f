/*

    Decimal precision 3D vector.

    Host poses and interchange data are both converted to this
    type at the edges, so that camera positions survive repeated
    round trips without visible drift. Equality is exact, callers
    that need a tolerance have to compare explicitly.

    Arithmetic saturates at the decimal range instead of panicking,
    the bounds double as the INFINITE sentinels anyway.

    @date: 14 Nov, 2025
    @author: bartu
*/

use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use bevy_math::{DVec3, Vec3};

use crate::error::{GeometryError, GeometryResult};
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn unit(self) -> Vector3 {
        match self {
            Axis::X => Vector3::UNIT_X,
            Axis::Y => Vector3::UNIT_Y,
            Axis::Z => Vector3::UNIT_Z,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub struct Vector3 {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

impl Vector3 {
    pub const ZERO: Self = Self::splat(Scalar::ZERO);
    pub const UNIT_X: Self = Self::new(Scalar::ONE, Scalar::ZERO, Scalar::ZERO);
    pub const UNIT_Y: Self = Self::new(Scalar::ZERO, Scalar::ONE, Scalar::ZERO);
    pub const UNIT_Z: Self = Self::new(Scalar::ZERO, Scalar::ZERO, Scalar::ONE);

    /// Sentinel for "unbounded below". Never a real coordinate.
    pub const INFINITE_MIN: Self = Self::splat(Scalar::MIN);

    /// Sentinel for "unbounded above". Never a real coordinate.
    pub const INFINITE_MAX: Self = Self::splat(Scalar::MAX);

    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: Scalar) -> Self {
        Self { x: v, y: v, z: v }
    }

    pub fn from_dvec3(v: DVec3) -> Self {
        Self::new(scalar_from_float(v.x), scalar_from_float(v.y), scalar_from_float(v.z))
    }

    pub fn from_vec3(v: Vec3) -> Self {
        Self::new(scalar_from_float32(v.x), scalar_from_float32(v.y), scalar_from_float32(v.z))
    }

    pub fn to_dvec3(&self) -> DVec3 {
        DVec3::new(float_from_scalar(self.x), float_from_scalar(self.y), float_from_scalar(self.z))
    }

    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(float32_from_scalar(self.x), float32_from_scalar(self.y), float32_from_scalar(self.z))
    }

    /// Returns a copy with the component on `axis` replaced.
    pub fn with(&self, axis: Axis, value: Scalar) -> Self {
        let mut v = *self;
        match axis {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
            Axis::Z => v.z = value,
        }
        v
    }

    pub fn dot(&self, other: &Vector3) -> Scalar {
        self.x.saturating_mul(other.x)
            .saturating_add(self.y.saturating_mul(other.y))
            .saturating_add(self.z.saturating_mul(other.z))
    }

    pub fn cross(&self, other: &Vector3) -> Vector3 {
        let det = |a: Scalar, b: Scalar, c: Scalar, d: Scalar| a.saturating_mul(b).saturating_sub(c.saturating_mul(d));
        Vector3::new(
            det(self.y, other.z, self.z, other.y),
            det(self.z, other.x, self.x, other.z),
            det(self.x, other.y, self.y, other.x),
        )
    }

    pub fn magnitude_squared(&self) -> Scalar {
        self.dot(self)
    }

    /// Evaluated on f64, the squared length of a decimal vector
    /// can fall below decimal resolution or beyond its range.
    pub fn magnitude(&self) -> Scalar {
        scalar_from_float(self.to_dvec3().length())
    }

    pub fn distance(&self, other: &Vector3) -> Scalar {
        (*self - *other).magnitude()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Angle in radians, in [0, pi]. Fails for a vector without length.
    pub fn angle_between(&self, other: &Vector3) -> GeometryResult<Scalar> {
        if self.magnitude().is_zero() || other.magnitude().is_zero() {
            return Err(GeometryError::Domain { operation: "angle between vectors" });
        }
        Ok(acos(self.normalize().dot(&other.normalize())))
    }

    /// Unit vector in the same direction. The zero vector has no
    /// direction and is returned unchanged.
    pub fn normalize(&self) -> Vector3 {
        let length = self.magnitude();
        if length.is_zero() {
            return *self;
        }
        *self / length
    }

    /// Component-wise minimum.
    pub fn min(&self, other: &Vector3) -> Vector3 {
        Vector3::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Vector3) -> Vector3 {
        Vector3::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    pub fn map(&self, f: impl Fn(Scalar) -> Scalar) -> Vector3 {
        Vector3::new(f(self.x), f(self.y), f(self.z))
    }
}

impl Index<Axis> for Vector3 {
    type Output = Scalar;

    fn index(&self, axis: Axis) -> &Self::Output {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y), self.z.saturating_add(rhs.z))
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y), self.z.saturating_sub(rhs.z))
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<Scalar> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: Scalar) -> Vector3 {
        self.map(|c| c.saturating_mul(rhs))
    }
}

impl Div<Scalar> for Vector3 {
    type Output = Vector3;
    fn div(self, rhs: Scalar) -> Vector3 {
        self.map(|c| saturating_div(c, rhs))
    }
}
