/*

    Boundary between interchange viewpoints and host views.

    Import: decode the record, repair perspective up vectors,
    meters to host units, world to host coordinates, and reduce
    the clipping planes to a single section box.

    Export: the reverse, host coordinates to world, host units
    to meters, and the six faces of the section box as planes.

    Host values are f64, the host applies them inside its own
    transaction. Nothing here touches the host.

    @date: 18 Nov, 2025
    @author: bartu
*/

use bevy_math::DVec3;

use crate::aabb::AxisAlignedBoundingBox;
use crate::basepoint::{convert_basepoint, BasepointDirection, BasepointOffset, UnitScale};
use crate::camera::{Camera, CameraPose};
use crate::clipping::{reconstruct_cuboid, ClippingPlane};
use crate::error::GeometryResult;
use crate::interchange::ViewpointRecord;
use crate::prelude::*;
use crate::settings::ConversionSettings;
use crate::vector::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostProjection {
    /// Scale in host internal units.
    Orthogonal { view_to_world_scale: Float },
    /// Degrees.
    Perspective { field_of_view: Float },
}

/// Camera pose in host internal units and coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct HostCamera {
    pub projection: HostProjection,
    pub eye_position: DVec3,
    pub forward_direction: DVec3,
    pub up_direction: DVec3,
}

impl HostCamera {
    fn pose(&self) -> CameraPose {
        CameraPose::new(
            Vector3::from_dvec3(self.eye_position),
            Vector3::from_dvec3(self.forward_direction),
            Vector3::from_dvec3(self.up_direction),
        )
    }
}

/// Cutaway cuboid in host internal units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SectionBox {
    pub min: DVec3,
    pub max: DVec3,
}

impl SectionBox {
    fn to_aabb(&self) -> AxisAlignedBoundingBox {
        AxisAlignedBoundingBox::new(Vector3::from_dvec3(self.min), Vector3::from_dvec3(self.max))
    }
}

/// What the host should show. `None` camera means there is nothing to
/// display, `None` cutaway means no section box is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct HostView {
    pub camera: Option<HostCamera>,
    pub cutaway: Option<SectionBox>,
}

fn to_host_camera(world: &CameraPose, projection: HostProjection, offset: &BasepointOffset, units: &UnitScale) -> HostCamera {
    let pose = convert_basepoint(offset, &units.pose_to_internal(world), BasepointDirection::WorldToHost);
    HostCamera {
        projection,
        eye_position: pose.viewpoint.to_dvec3(),
        forward_direction: pose.direction.to_dvec3(),
        up_direction: pose.up_vector.to_dvec3(),
    }
}

pub fn import_viewpoint(record: &ViewpointRecord, offset: &BasepointOffset, settings: &ConversionSettings) -> HostView {
    let units = settings.unit_scale();

    let host_camera = match record.camera().ensure_up_vector_orthogonal() {
        Camera::None => {
            info!("Viewpoint has no camera, nothing to display");
            None
        }
        Camera::Orthogonal(cam) => {
            let projection = HostProjection::Orthogonal {
                view_to_world_scale: float_from_scalar(units.to_internal(cam.view_to_world_scale)),
            };
            Some(to_host_camera(&cam.pose, projection, offset, &units))
        }
        Camera::Perspective(cam) => {
            let projection = HostProjection::Perspective {
                field_of_view: float_from_scalar(cam.field_of_view),
            };
            Some(to_host_camera(&cam.pose, projection, offset, &units))
        }
    };

    let planes: Vec<ClippingPlane> = record
        .clipping_planes()
        .iter()
        .map(|p| ClippingPlane::new(units.point_to_internal(&p.location), p.direction))
        .collect();
    let cuboid = reconstruct_cuboid(&planes, settings.angle_threshold());
    let cutaway = if cuboid.is_infinite() {
        None
    } else {
        debug!("Cutaway box {:?} from {} clipping planes", cuboid, planes.len());
        Some(SectionBox { min: cuboid.min.to_dvec3(), max: cuboid.max.to_dvec3() })
    };

    HostView { camera: host_camera, cutaway }
}

pub fn export_viewpoint(
    camera: Option<&HostCamera>,
    section_box: Option<&SectionBox>,
    offset: &BasepointOffset,
    settings: &ConversionSettings,
) -> ViewpointRecord {
    let units = settings.unit_scale();

    let world_camera = match camera {
        None => Camera::None,
        Some(host) => {
            let pose = units.pose_to_meters(&convert_basepoint(offset, &host.pose(), BasepointDirection::HostToWorld));
            match host.projection {
                HostProjection::Orthogonal { view_to_world_scale } => {
                    Camera::orthogonal(pose, units.to_meters(scalar_from_float(view_to_world_scale)))
                }
                HostProjection::Perspective { field_of_view } => {
                    Camera::perspective(pose, scalar_from_float(field_of_view))
                }
            }
        }
    };

    let planes = section_box
        .map(|b| b.to_aabb().scale(units.meters_per_internal_unit).to_clipping_planes())
        .unwrap_or_default();

    ViewpointRecord::encode(&world_camera, &planes)
}

/// Height and width of a view box given two opposite corners and the
/// view's right direction, all in host coordinates.
pub fn view_box_values(top_right: DVec3, bottom_left: DVec3, right_direction: DVec3) -> GeometryResult<(Float, Float)> {
    let top_right = Vector3::from_dvec3(top_right);
    let bottom_left = Vector3::from_dvec3(bottom_left);
    let diagonal = top_right - bottom_left;
    let distance = float_from_scalar(top_right.distance(&bottom_left));
    let angle = float_from_scalar(diagonal.angle_between(&Vector3::from_dvec3(right_direction))?);

    Ok((distance * angle.sin(), distance * angle.cos()))
}

/// Orthogonal view to world scale (host units) from the zoom corners of a
/// host view: the view box height.
pub fn view_to_world_scale(top_left: DVec3, bottom_right: DVec3, right_direction: DVec3) -> GeometryResult<Float> {
    view_box_values(top_left, bottom_right, right_direction).map(|(height, _)| height)
}
