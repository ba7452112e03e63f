/*

    Declare Camera and its related structs like CameraPose

    A camera is either orthogonal or perspective. A viewpoint
    without any camera data is Camera::None, which is never
    the same thing as a camera with zero vectors.

    @date: Oct, 2025
    @author: bartu
*/


use crate::prelude::*;
use crate::vector::{Axis, Vector3};

/// Eye position and orientation shared by every camera type.
/// `direction` is the forward vector and need not be unit length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct CameraPose {
    pub viewpoint: Vector3,
    pub direction: Vector3,
    pub up_vector: Vector3,
}

impl CameraPose {
    pub fn new(viewpoint: Vector3, direction: Vector3, up_vector: Vector3) -> Self {
        Self {
            viewpoint,
            direction,
            up_vector,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct OrthogonalCamera {
    pub pose: CameraPose,
    /// Maps view space units to world units, positive.
    pub view_to_world_scale: Scalar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PerspectiveCamera {
    pub pose: CameraPose,
    /// In degrees.
    pub field_of_view: Scalar,
}

impl PerspectiveCamera {
    /// Returns a copy whose up vector is orthogonal to the view direction.
    ///
    /// One component of the up vector is solved for so that the dot product
    /// with the direction vanishes. The component is the first non-zero one of
    /// the direction, checked in X, Y, Z order. Existing interchange data relies
    /// on this exact order. A zero direction leaves the camera unchanged.
    pub fn ensure_up_vector_orthogonal(&self) -> Self {
        let d = self.pose.direction;
        let u = self.pose.up_vector;

        // Sum of the two products that stay fixed
        let rest = |a: Axis, b: Axis| d[a].saturating_mul(u[a]).saturating_add(d[b].saturating_mul(u[b]));

        let solved = if !d.x.is_zero() {
            solve_component(rest(Axis::Y, Axis::Z), d.x).map(|x| u.with(Axis::X, x))
        } else if !d.y.is_zero() {
            solve_component(rest(Axis::X, Axis::Z), d.y).map(|y| u.with(Axis::Y, y))
        } else if !d.z.is_zero() {
            solve_component(rest(Axis::X, Axis::Y), d.z).map(|z| u.with(Axis::Z, z))
        } else {
            debug!("Perspective camera has zero direction, up vector left as is");
            None
        };

        let mut camera = *self;
        if let Some(up_vector) = solved {
            camera.pose.up_vector = up_vector;
        }
        camera
    }
}

// -rest / pivot, or None when the quotient leaves the decimal range
fn solve_component(rest: Scalar, pivot: Scalar) -> Option<Scalar> {
    let solved = (-rest).checked_div(pivot);
    if solved.is_none() {
        warn!("Up vector correction overflowed (pivot {pivot}), up vector left as is");
    }
    solved
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum Camera {
    #[default]
    None,
    Orthogonal(OrthogonalCamera),
    Perspective(PerspectiveCamera),
}

impl Camera {
    pub fn orthogonal(pose: CameraPose, view_to_world_scale: Scalar) -> Self {
        Camera::Orthogonal(OrthogonalCamera { pose, view_to_world_scale })
    }

    pub fn perspective(pose: CameraPose, field_of_view: Scalar) -> Self {
        Camera::Perspective(PerspectiveCamera { pose, field_of_view })
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Camera::None)
    }

    pub fn pose(&self) -> Option<&CameraPose> {
        match self {
            Camera::None => None,
            Camera::Orthogonal(cam) => Some(&cam.pose),
            Camera::Perspective(cam) => Some(&cam.pose),
        }
    }

    /// Same camera type and parameters with a different pose.
    /// `Camera::None` stays `None`.
    pub fn with_pose(&self, pose: CameraPose) -> Self {
        match self {
            Camera::None => Camera::None,
            Camera::Orthogonal(cam) => Camera::orthogonal(pose, cam.view_to_world_scale),
            Camera::Perspective(cam) => Camera::perspective(pose, cam.field_of_view),
        }
    }

    /// Applies the perspective up vector correction, other cameras pass through.
    pub fn ensure_up_vector_orthogonal(&self) -> Self {
        match self {
            Camera::Perspective(cam) => Camera::Perspective(cam.ensure_up_vector_orthogonal()),
            other => *other,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pose(direction: Vector3, up_vector: Vector3) -> CameraPose {
        CameraPose::new(Vector3::new(dec!(1), dec!(2), dec!(3)), direction, up_vector)
    }

    fn perspective(direction: Vector3, up_vector: Vector3) -> PerspectiveCamera {
        PerspectiveCamera { pose: pose(direction, up_vector), field_of_view: dec!(60) }
    }

    #[test]
    fn test_default_camera_is_none() {
        let cam = Camera::default();
        assert!(cam.is_none());
        assert!(cam.pose().is_none());
        assert_ne!(cam, Camera::orthogonal(CameraPose::default(), dec!(0)));
    }

    #[test]
    fn test_equality_compares_type_and_parameters() {
        let p = pose(Vector3::UNIT_X, Vector3::UNIT_Z);
        assert_eq!(Camera::orthogonal(p, dec!(2)), Camera::orthogonal(p, dec!(2)));
        assert_ne!(Camera::orthogonal(p, dec!(2)), Camera::orthogonal(p, dec!(3)));
        assert_ne!(Camera::orthogonal(p, dec!(2)), Camera::perspective(p, dec!(2)));
        assert_ne!(
            Camera::perspective(p, dec!(60)),
            Camera::perspective(pose(Vector3::UNIT_Y, Vector3::UNIT_Z), dec!(60))
        );
    }

    #[test]
    fn test_with_pose_keeps_camera_type() {
        let p = pose(Vector3::UNIT_X, Vector3::UNIT_Z);
        let q = pose(Vector3::UNIT_Y, Vector3::UNIT_Z);
        assert_eq!(Camera::orthogonal(p, dec!(5)).with_pose(q), Camera::orthogonal(q, dec!(5)));
        assert_eq!(Camera::None.with_pose(q), Camera::None);
    }

    #[test]
    fn test_up_vector_correction_solves_first_nonzero_direction_component() {
        // Direction has X, so X of the up vector is solved
        let cam = perspective(
            Vector3::new(dec!(2), dec!(1), dec!(0)),
            Vector3::new(dec!(5), dec!(4), dec!(1)),
        ).ensure_up_vector_orthogonal();
        assert_eq!(cam.pose.up_vector, Vector3::new(dec!(-2), dec!(4), dec!(1)));

        // X is zero, so Y is solved
        let cam = perspective(
            Vector3::new(dec!(0), dec!(-1), dec!(1)),
            Vector3::new(dec!(7), dec!(0.5), dec!(1)),
        ).ensure_up_vector_orthogonal();
        assert_eq!(cam.pose.up_vector, Vector3::new(dec!(7), dec!(1), dec!(1)));

        // Only Z left
        let cam = perspective(
            Vector3::new(dec!(0), dec!(0), dec!(-4)),
            Vector3::new(dec!(0), dec!(1), dec!(0.2)),
        ).ensure_up_vector_orthogonal();
        assert_eq!(cam.pose.up_vector, Vector3::UNIT_Y);
    }

    #[test]
    fn test_up_vector_correction_is_idempotent() {
        let cam = perspective(
            Vector3::new(dec!(-0.7071), dec!(0.7071), dec!(-0.1)),
            Vector3::new(dec!(0.05), dec!(0.02), dec!(1)),
        );
        let once = cam.ensure_up_vector_orthogonal();
        let twice = once.ensure_up_vector_orthogonal();
        assert_eq!(once, twice);
        assert!(approx_eq(once.pose.direction.dot(&once.pose.up_vector), Scalar::ZERO, 1e-20));
        assert_eq!(once.pose.viewpoint, cam.pose.viewpoint);
        assert_eq!(once.pose.direction, cam.pose.direction);
    }

    #[test]
    fn test_up_vector_correction_out_of_range_keeps_up_vector() {
        let up = Vector3::new(dec!(0), Scalar::MAX, dec!(1));
        let cam = perspective(Vector3::new(dec!(0.5), Scalar::MAX, dec!(0)), up);
        assert_eq!(cam.ensure_up_vector_orthogonal().pose.up_vector, up);
    }

    #[test]
    fn test_up_vector_correction_ignores_zero_direction() {
        let cam = perspective(Vector3::ZERO, Vector3::new(dec!(0.3), dec!(0.4), dec!(1)));
        assert_eq!(cam.ensure_up_vector_orthogonal(), cam);
    }

    #[test]
    fn test_orthogonal_cameras_are_not_corrected() {
        let cam = Camera::orthogonal(
            pose(Vector3::UNIT_X, Vector3::new(dec!(1), dec!(0), dec!(1))),
            dec!(10),
        );
        assert_eq!(cam.ensure_up_vector_orthogonal(), cam);
    }
}
