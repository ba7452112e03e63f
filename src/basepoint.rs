/*

    Conversion between the host's internal coordinate system
    and the world coordinate system of the interchange format.

    The host document stores a basepoint offset: a translation
    and a rotation about Z that move its internal origin to the
    true world origin. Going to world space is one affine map,
    rotate then translate. Coming back is its inverse, translate
    by the negated offset then rotate by the negated angle. Do
    not reorder these steps, round trips depend on it.

    Points are translated, directions (view and up) are only
    rotated.

    @date: 16 Nov, 2025
    @author: bartu
*/

use crate::camera::CameraPose;
use crate::prelude::*;
use crate::vector::Vector3;

/// Offset of the host's internal origin, read from the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BasepointOffset {
    /// In host internal units.
    pub translation: Vector3,
    /// Rotation about Z in radians.
    pub angle: Scalar,
}

impl BasepointOffset {
    pub fn new(translation: Vector3, angle: Scalar) -> Self {
        Self { translation, angle }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasepointDirection {
    /// Host internal to world (export).
    HostToWorld,
    /// World to host internal (import).
    WorldToHost,
}

// Standard 2D rotation on X/Y, Z untouched
fn rotate_about_z(v: &Vector3, sin: Scalar, cos: Scalar) -> Vector3 {
    Vector3::new(
        v.x.saturating_mul(cos).saturating_sub(v.y.saturating_mul(sin)),
        v.x.saturating_mul(sin).saturating_add(v.y.saturating_mul(cos)),
        v.z,
    )
}

pub fn convert_basepoint(offset: &BasepointOffset, pose: &CameraPose, direction: BasepointDirection) -> CameraPose {
    match direction {
        BasepointDirection::HostToWorld => {
            let (sin, cos) = sin_cos(offset.angle);
            CameraPose::new(
                rotate_about_z(&pose.viewpoint, sin, cos) + offset.translation,
                rotate_about_z(&pose.direction, sin, cos),
                rotate_about_z(&pose.up_vector, sin, cos),
            )
        }
        BasepointDirection::WorldToHost => {
            let (sin, cos) = sin_cos(-offset.angle);
            CameraPose::new(
                rotate_about_z(&(pose.viewpoint - offset.translation), sin, cos),
                rotate_about_z(&pose.direction, sin, cos),
                rotate_about_z(&pose.up_vector, sin, cos),
            )
        }
    }
}

/// Linear scale between host internal length units and meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct UnitScale {
    pub meters_per_internal_unit: Scalar,
}

impl UnitScale {
    /// The host's internal unit is the foot.
    pub const FEET: Self = Self {
        meters_per_internal_unit: Scalar::from_parts(3048, 0, 0, false, 4),
    };

    pub fn new(meters_per_internal_unit: Scalar) -> Self {
        Self { meters_per_internal_unit }
    }

    /// Lengths past the decimal range clamp to its bounds.
    pub fn to_meters(&self, internal: Scalar) -> Scalar {
        internal.saturating_mul(self.meters_per_internal_unit)
    }

    pub fn to_internal(&self, meters: Scalar) -> Scalar {
        saturating_div(meters, self.meters_per_internal_unit)
    }

    pub fn point_to_meters(&self, internal: &Vector3) -> Vector3 {
        internal.map(|c| self.to_meters(c))
    }

    pub fn point_to_internal(&self, meters: &Vector3) -> Vector3 {
        meters.map(|c| self.to_internal(c))
    }

    /// Only the viewpoint is a length, direction and up stay unit free.
    pub fn pose_to_meters(&self, pose: &CameraPose) -> CameraPose {
        CameraPose::new(self.point_to_meters(&pose.viewpoint), pose.direction, pose.up_vector)
    }

    pub fn pose_to_internal(&self, pose: &CameraPose) -> CameraPose {
        CameraPose::new(self.point_to_internal(&pose.viewpoint), pose.direction, pose.up_vector)
    }
}

impl Default for UnitScale {
    fn default() -> Self {
        Self::FEET
    }
}
