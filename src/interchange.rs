/*

    Viewpoint records as exchanged with other tools.

    These mirror the viewpoint object of the interchange API:
    single precision floats, lengths in meters, world coordinates.
    They are decoded into decimal core types on the way in and
    encoded back on the way out, nowhere else.

    @date: 17 Nov, 2025
    @author: bartu
*/

use bevy_math::Vec3;

use crate::camera::{Camera, CameraPose};
use crate::clipping::ClippingPlane;
use crate::json_parser::{deser_float32, deser_vec3, ser_vec3};
use crate::prelude::*;
use crate::vector::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct OrthogonalCameraRecord {
    #[serde(deserialize_with = "deser_vec3", serialize_with = "ser_vec3")]
    pub camera_view_point: Vec3,
    #[serde(deserialize_with = "deser_vec3", serialize_with = "ser_vec3")]
    pub camera_direction: Vec3,
    #[serde(deserialize_with = "deser_vec3", serialize_with = "ser_vec3")]
    pub camera_up_vector: Vec3,
    #[serde(deserialize_with = "deser_float32")]
    pub view_to_world_scale: Float32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct PerspectiveCameraRecord {
    #[serde(deserialize_with = "deser_vec3", serialize_with = "ser_vec3")]
    pub camera_view_point: Vec3,
    #[serde(deserialize_with = "deser_vec3", serialize_with = "ser_vec3")]
    pub camera_direction: Vec3,
    #[serde(deserialize_with = "deser_vec3", serialize_with = "ser_vec3")]
    pub camera_up_vector: Vec3,
    #[serde(deserialize_with = "deser_float32")]
    pub field_of_view: Float32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct ClippingPlaneRecord {
    #[serde(deserialize_with = "deser_vec3", serialize_with = "ser_vec3")]
    pub location: Vec3,
    #[serde(deserialize_with = "deser_vec3", serialize_with = "ser_vec3")]
    pub direction: Vec3,
}

impl ClippingPlaneRecord {
    pub fn decode(&self) -> ClippingPlane {
        ClippingPlane::new(Vector3::from_vec3(self.location), Vector3::from_vec3(self.direction))
    }

    pub fn encode(plane: &ClippingPlane) -> Self {
        Self {
            location: plane.location.to_vec3(),
            direction: plane.direction.to_vec3(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewpointRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orthogonal_camera: Option<OrthogonalCameraRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perspective_camera: Option<PerspectiveCameraRecord>,
    pub clipping_planes: Vec<ClippingPlaneRecord>,
}

fn decode_pose(view_point: Vec3, direction: Vec3, up_vector: Vec3) -> CameraPose {
    CameraPose::new(
        Vector3::from_vec3(view_point),
        Vector3::from_vec3(direction),
        Vector3::from_vec3(up_vector),
    )
}

impl ViewpointRecord {
    /// Decodes the camera. An orthogonal camera takes precedence when a
    /// record carries both, a record with neither has no camera at all.
    pub fn camera(&self) -> Camera {
        if let Some(cam) = &self.orthogonal_camera {
            if self.perspective_camera.is_some() {
                warn!("Viewpoint has both camera types, using the orthogonal one");
            }
            let pose = decode_pose(cam.camera_view_point, cam.camera_direction, cam.camera_up_vector);
            return Camera::orthogonal(pose, scalar_from_float32(cam.view_to_world_scale));
        }
        if let Some(cam) = &self.perspective_camera {
            let pose = decode_pose(cam.camera_view_point, cam.camera_direction, cam.camera_up_vector);
            return Camera::perspective(pose, scalar_from_float32(cam.field_of_view));
        }
        Camera::None
    }

    pub fn clipping_planes(&self) -> Vec<ClippingPlane> {
        self.clipping_planes.iter().map(|p| p.decode()).collect()
    }

    /// Encodes a world space camera (meters) and clipping planes.
    pub fn encode(camera: &Camera, planes: &[ClippingPlane]) -> Self {
        let mut record = ViewpointRecord {
            clipping_planes: planes.iter().map(ClippingPlaneRecord::encode).collect(),
            ..Default::default()
        };
        match camera {
            Camera::None => {}
            Camera::Orthogonal(cam) => {
                record.orthogonal_camera = Some(OrthogonalCameraRecord {
                    camera_view_point: cam.pose.viewpoint.to_vec3(),
                    camera_direction: cam.pose.direction.to_vec3(),
                    camera_up_vector: cam.pose.up_vector.to_vec3(),
                    view_to_world_scale: float32_from_scalar(cam.view_to_world_scale),
                });
            }
            Camera::Perspective(cam) => {
                record.perspective_camera = Some(PerspectiveCameraRecord {
                    camera_view_point: cam.pose.viewpoint.to_vec3(),
                    camera_direction: cam.pose.direction.to_vec3(),
                    camera_up_vector: cam.pose.up_vector.to_vec3(),
                    field_of_view: float32_from_scalar(cam.field_of_view),
                });
            }
        }
        record
    }
}
