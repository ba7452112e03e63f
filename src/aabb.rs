/*

    Axis Aligned Bounding Box used as a cutaway region.

    A box is either a real cuboid or INFINITE, the sentinel
    made from the INFINITE_MIN/INFINITE_MAX corners. INFINITE
    plays two roles in merge_reduce:

    - identity: "no constraint yet", merging it with a box
      returns that box unchanged.
    - absorbing result: "constraints contradict each other",
      returned when two boxes do not overlap with positive volume.

    The two can only be told apart by the caller, who knows
    whether a real box was ever merged in. Either way the
    answer at the boundary is "apply no cutaway".

    Boxes are never mutated, every operation returns a new one.

    @author: bartu
    @date: 9 Nov, 2025
*/


use crate::clipping::ClippingPlane;
use crate::prelude::*;
use crate::vector::{Axis, Vector3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct AxisAlignedBoundingBox {
    pub min: Vector3,
    pub max: Vector3,
}

impl Default for AxisAlignedBoundingBox {
    fn default() -> Self {
        Self::INFINITE
    }
}

impl AxisAlignedBoundingBox {

    pub const INFINITE: Self = Self {
        min: Vector3::INFINITE_MIN,
        max: Vector3::INFINITE_MAX,
    };

    pub fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    pub fn is_infinite(&self) -> bool {
        *self == Self::INFINITE
    }

    /// True when no component of either corner is a sentinel, i.e. the
    /// box is closed on all six sides.
    pub fn is_bounded(&self) -> bool {
        let finite = |c: Scalar| c != Scalar::MIN && c != Scalar::MAX;
        Axis::ALL.iter().all(|&axis| finite(self.min[axis]) && finite(self.max[axis]))
    }

    /// Intersection of two boxes. See the module header for how
    /// INFINITE behaves on either side of this operation.
    pub fn merge_reduce(&self, other: &AxisAlignedBoundingBox) -> AxisAlignedBoundingBox {
        if self.is_infinite() {
            return *other;
        }
        if other.is_infinite() {
            return *self;
        }

        let min = self.min.max(&other.min);
        let max = self.max.min(&other.max);

        // Touching faces or edges have no volume, that is not a box
        if Axis::ALL.iter().any(|&axis| min[axis] >= max[axis]) {
            debug!("Boxes {:?} and {:?} do not overlap, reducing to infinite", self, other);
            return Self::INFINITE;
        }

        Self::new(min, max)
    }

    /// Left fold of merge_reduce starting from INFINITE.
    pub fn reduce_all<I>(boxes: I) -> AxisAlignedBoundingBox
    where
        I: IntoIterator<Item = AxisAlignedBoundingBox>,
    {
        boxes
            .into_iter()
            .fold(Self::INFINITE, |acc, b| acc.merge_reduce(&b))
    }

    /// Scales both corners, e.g. for unit conversion. Sentinel
    /// components are kept as they are, INFINITE stays INFINITE.
    pub fn scale(&self, factor: Scalar) -> AxisAlignedBoundingBox {
        let scale_bound = |c: Scalar| {
            if c == Scalar::MIN || c == Scalar::MAX {
                c
            } else {
                c.checked_mul(factor).unwrap_or(if c.is_sign_negative() { Scalar::MIN } else { Scalar::MAX })
            }
        };
        Self::new(self.min.map(scale_bound), self.max.map(scale_bound))
    }

    /// The six faces as clipping planes, each with its outward normal.
    /// The min corner carries the -X, -Y, -Z faces and the max corner
    /// the +X, +Y, +Z faces. An INFINITE box has no faces.
    pub fn to_clipping_planes(&self) -> Vec<ClippingPlane> {
        if self.is_infinite() {
            return vec![];
        }

        let mut planes = Vec::with_capacity(6);
        for axis in Axis::ALL {
            planes.push(ClippingPlane::new(self.min, -axis.unit()));
        }
        for axis in Axis::ALL {
            planes.push(ClippingPlane::new(self.max, axis.unit()));
        }
        planes
    }
}
