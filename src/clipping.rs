/*

    Clipping planes and the reconstruction of a cutaway box
    from them.

    A plane is a location and a normal. The normal points to
    the side that is cut away, so a plane facing +X bounds the
    visible region from above on X. Six such planes describe a
    cuboid, but producers other than the host give no guarantee
    about count or exact alignment.

    Instead of intersecting every triple of planes, each plane
    is classified against the coordinate axes on its own and the
    resulting half-open boxes are merged. The host always emits
    near axis aligned planes, the angle threshold is what "near"
    means.

    @date: 15 Nov, 2025
    @author: bartu
*/

use crate::aabb::AxisAlignedBoundingBox;
use crate::error::GeometryResult;
use crate::prelude::*;
use crate::vector::{Axis, Vector3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClippingPlane {
    pub location: Vector3,
    pub direction: Vector3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Positive,
    Negative,
}

impl ClippingPlane {
    pub fn new(location: Vector3, direction: Vector3) -> Self {
        Self { location, direction }
    }

    /// Converts this plane into the half-open box it bounds.
    ///
    /// If the normal is within `angle_threshold` (radians) of one of the six
    /// signed axes, the box is bounded on that side of that axis at the plane
    /// location and unbounded everywhere else. A plane that is not close to
    /// any axis, or has no direction at all, yields INFINITE and so adds no
    /// constraint when merged.
    pub fn to_axis_aligned_bounding_box(&self, angle_threshold: Scalar) -> AxisAlignedBoundingBox {
        let normal = self.direction.normalize();

        let (axis, sign, angle) = match closest_axis(&normal) {
            Ok(found) => found,
            Err(e) => {
                warn!("Clipping plane {:?} cannot be classified: {}", self, e);
                return AxisAlignedBoundingBox::INFINITE;
            }
        };

        if angle > angle_threshold {
            debug!("Clipping plane {:?} is {} rad off the closest axis, ignoring it", self, angle);
            return AxisAlignedBoundingBox::INFINITE;
        }

        let bound = self.location[axis];
        match sign {
            Sign::Positive => AxisAlignedBoundingBox::new(
                Vector3::INFINITE_MIN,
                Vector3::INFINITE_MAX.with(axis, bound),
            ),
            Sign::Negative => AxisAlignedBoundingBox::new(
                Vector3::INFINITE_MIN.with(axis, bound),
                Vector3::INFINITE_MAX,
            ),
        }
    }
}

// Signed axis with the smallest angle to `normal`, first one wins on ties
fn closest_axis(normal: &Vector3) -> GeometryResult<(Axis, Sign, Scalar)> {
    let mut best: Option<(Axis, Sign, Scalar)> = None;
    for axis in Axis::ALL {
        for (sign, target) in [(Sign::Positive, axis.unit()), (Sign::Negative, -axis.unit())] {
            let angle = normal.angle_between(&target)?;
            if best.is_none_or(|(_, _, smallest)| angle < smallest) {
                best = Some((axis, sign, angle));
            }
        }
    }
    // Always set once the loop has run
    Ok(best.unwrap_or((Axis::X, Sign::Positive, Scalar::MAX)))
}

/// Reduces a set of clipping planes to a single cutaway box.
///
/// Every plane is classified and the results are merged. Returns
/// INFINITE when the planes contradict each other or do not close
/// the box on all six sides, meaning no cutaway should be applied.
pub fn reconstruct_cuboid(planes: &[ClippingPlane], angle_threshold: Scalar) -> AxisAlignedBoundingBox {
    let merged = AxisAlignedBoundingBox::reduce_all(
        planes.iter().map(|plane| plane.to_axis_aligned_bounding_box(angle_threshold)),
    );

    if merged.is_infinite() {
        if !planes.is_empty() {
            warn!("{} clipping planes do not enclose any volume", planes.len());
        }
        return merged;
    }
    if !merged.is_bounded() {
        warn!("Clipping planes leave the cutaway box open on some side, {:?}", merged);
        return AxisAlignedBoundingBox::INFINITE;
    }
    merged
}


#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn threshold() -> Scalar {
        to_radians(5.0)
    }

    fn v(x: Scalar, y: Scalar, z: Scalar) -> Vector3 {
        Vector3::new(x, y, z)
    }

    fn unit_cube_planes() -> Vec<ClippingPlane> {
        AxisAlignedBoundingBox::new(Vector3::splat(dec!(-1)), Vector3::splat(dec!(1))).to_clipping_planes()
    }

    #[test]
    fn test_positive_normal_bounds_from_above() {
        let plane = ClippingPlane::new(v(dec!(3), dec!(4), dec!(5)), Vector3::UNIT_Y);
        let b = plane.to_axis_aligned_bounding_box(threshold());
        assert_eq!(b.min, Vector3::INFINITE_MIN);
        assert_eq!(b.max, v(Scalar::MAX, dec!(4), Scalar::MAX));
    }

    #[test]
    fn test_negative_normal_bounds_from_below() {
        let plane = ClippingPlane::new(v(dec!(3), dec!(4), dec!(5)), v(dec!(0), dec!(0), dec!(-2)));
        let b = plane.to_axis_aligned_bounding_box(threshold());
        assert_eq!(b.min, v(Scalar::MIN, Scalar::MIN, dec!(5)));
        assert_eq!(b.max, Vector3::INFINITE_MAX);
    }

    #[test]
    fn test_slightly_tilted_plane_is_classified() {
        // About 2.9 degrees off +X
        let plane = ClippingPlane::new(v(dec!(7), dec!(0), dec!(0)), v(dec!(1), dec!(0.05), dec!(0)));
        let b = plane.to_axis_aligned_bounding_box(threshold());
        assert_eq!(b.max.x, dec!(7));
    }

    #[test]
    fn test_extreme_normal_lengths_are_classified() {
        let tiny = ClippingPlane::new(v(dec!(7), dec!(0), dec!(0)), v(dec!(0.000000000000001), dec!(0), dec!(0)));
        assert_eq!(tiny.to_axis_aligned_bounding_box(threshold()).max.x, dec!(7));

        let large = ClippingPlane::new(v(dec!(0), dec!(-3), dec!(0)), v(dec!(0), dec!(-1000000000000000), dec!(0)));
        assert_eq!(large.to_axis_aligned_bounding_box(threshold()).min.y, dec!(-3));
    }

    #[test]
    fn test_diagonal_plane_is_not_classified() {
        let plane = ClippingPlane::new(v(dec!(1), dec!(1), dec!(0)), v(dec!(1), dec!(1), dec!(0)));
        assert!(plane.to_axis_aligned_bounding_box(threshold()).is_infinite());
    }

    #[test]
    fn test_zero_direction_is_not_classified() {
        let plane = ClippingPlane::new(v(dec!(1), dec!(1), dec!(0)), Vector3::ZERO);
        assert!(plane.to_axis_aligned_bounding_box(threshold()).is_infinite());
    }

    #[test]
    fn test_six_axis_aligned_planes_reconstruct_the_cube() {
        let result = reconstruct_cuboid(&unit_cube_planes(), threshold());
        assert_eq!(result, AxisAlignedBoundingBox::new(Vector3::splat(dec!(-1)), Vector3::splat(dec!(1))));
    }

    #[test]
    fn test_plane_order_does_not_matter() {
        let mut planes = unit_cube_planes();
        planes.reverse();
        planes.swap(0, 3);
        let result = reconstruct_cuboid(&planes, threshold());
        assert_eq!(result, AxisAlignedBoundingBox::new(Vector3::splat(dec!(-1)), Vector3::splat(dec!(1))));
    }

    #[test]
    fn test_plane_rotated_out_of_alignment_gives_infinite() {
        // +X face turned by 90 degrees about Y, now facing -Z from the max corner
        let mut planes = unit_cube_planes();
        planes[3] = ClippingPlane::new(planes[3].location, -Vector3::UNIT_Z);
        assert!(reconstruct_cuboid(&planes, threshold()).is_infinite());
    }

    #[test]
    fn test_missing_face_gives_infinite() {
        let mut planes = unit_cube_planes();
        planes.remove(4);
        assert!(reconstruct_cuboid(&planes, threshold()).is_infinite());

        // An unclassifiable plane counts as missing
        let mut planes = unit_cube_planes();
        planes[0] = ClippingPlane::new(planes[0].location, v(dec!(-1), dec!(-1), dec!(0)));
        assert!(reconstruct_cuboid(&planes, threshold()).is_infinite());
    }

    #[test]
    fn test_no_planes_gives_infinite() {
        assert!(reconstruct_cuboid(&[], threshold()).is_infinite());
    }

    #[test]
    fn test_redundant_planes_tighten_the_box() {
        let mut planes = unit_cube_planes();
        planes.push(ClippingPlane::new(v(dec!(0.5), dec!(0), dec!(0)), Vector3::UNIT_X));
        let result = reconstruct_cuboid(&planes, threshold());
        assert_eq!(result.max, v(dec!(0.5), dec!(1), dec!(1)));
        assert_eq!(result.min, Vector3::splat(dec!(-1)));
    }
}
