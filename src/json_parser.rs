/*

    Provide utilities to parse conversion requests from JSON.

    A request file holds the conversion settings, the host's
    basepoint offset and one interchange viewpoint.

    The parser is somewhat robust, floats can be given as
    numbers or in quotes, and vectors in any of these forms:

    e.g.
    "camera_direction": {"x": 0, "y": 1, "z": 0}
    "camera_direction": [0, 1, 0]
    "camera_direction": "0 1 0"

    Vectors are always written back in the {x, y, z} form the
    interchange format uses.

    @date: 2 Oct, 2025
    @author: bartu
*/

use std::fmt::{self};
use std::fs::File;
use std::io::BufReader;

use bevy_math::Vec3;
use serde::{Deserialize, Deserializer, Serializer};
use serde::de::{self, Visitor, SeqAccess, MapAccess};
use serde::ser::SerializeStruct;
use serde_json::{self, Value};

use crate::basepoint::BasepointOffset;
use crate::interchange::ViewpointRecord;
use crate::prelude::*;
use crate::settings::ConversionSettings;
use crate::viewpoint::{HostCamera, SectionBox};

/// Host state to encode as an interchange viewpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ExportRequest {
    pub camera: Option<HostCamera>,
    pub section_box: Option<SectionBox>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ConversionRequest {
    pub settings: ConversionSettings,
    pub basepoint: BasepointOffset,
    pub viewpoint: ViewpointRecord,
    /// When present the request is an export instead of an import.
    pub export: Option<ExportRequest>,
}

pub fn parse_request(path: &str) -> Result<ConversionRequest, Box<dyn std::error::Error>> {

    let span = tracing::span!(tracing::Level::INFO, "load_request");
    let _enter = span.enter();

    // Open file
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    debug!("Reading file from {}", path);

    let request: ConversionRequest = serde_json::from_reader(reader)?;
    Ok(request)
}

pub fn parse_request_str(json: &str) -> Result<ConversionRequest, serde_json::Error> {
    serde_json::from_str(json)
}

pub(crate) fn deser_float<'de, D>(deserializer: D) -> Result<Float, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => n.as_f64()
            .ok_or_else(|| de::Error::custom("Invalid float")),
        Value::String(s) => s.trim().parse::<Float>()
            .map_err(|_| de::Error::custom("Failed to parse float from string")),
        t => Err(de::Error::custom(format!("Expected float or string, found {t}"))),
    }
}

pub(crate) fn deser_float32<'de, D>(deserializer: D) -> Result<Float32, D::Error>
where
    D: Deserializer<'de>,
{
    deser_float(deserializer).map(|x| x as Float32)
}

pub(crate) fn parse_vec3_str(s: &str) -> Result<Vec3, String> {
    let parts: Vec<Float32> = s
        .split_whitespace()
        .map(|p| p.parse::<Float32>().map_err(|e| format!("Invalid component '{p}': {e}")))
        .collect::<Result<_, _>>()?;

    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(format!("Expected 3 components in '{s}', found {}", parts.len())),
    }
}

pub(crate) fn deser_vec3<'de, D>(deserializer: D) -> Result<Vec3, D::Error>
where
    D: Deserializer<'de>,
{
    struct Vec3Visitor;

    impl<'de> Visitor<'de> for Vec3Visitor {
        type Value = Vec3;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string \"x y z\", an array [x, y, z] or an object {x, y, z}")
        }

        fn visit_str<E>(self, value: &str) -> Result<Vec3, E>
        where
            E: de::Error,
        {
            parse_vec3_str(value).map_err(de::Error::custom)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Vec3, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut next = || -> Result<Float32, A::Error> {
                seq.next_element::<Float32>()?
                    .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))
            };
            let (x, y, z) = (next()?, next()?, next()?);
            if seq.next_element::<Value>()?.is_some() {
                return Err(de::Error::custom("Expected only 3 elements in Vec3 array"));
            }
            Ok(Vec3::new(x, y, z))
        }

        fn visit_map<A>(self, mut map: A) -> Result<Vec3, A::Error>
        where
            A: MapAccess<'de>,
        {
            let (mut x, mut y, mut z) = (None, None, None);
            while let Some(key) = map.next_key::<String>()? {
                match key.to_ascii_lowercase().as_str() {
                    "x" => x = Some(map.next_value::<Float32>()?),
                    "y" => y = Some(map.next_value::<Float32>()?),
                    "z" => z = Some(map.next_value::<Float32>()?),
                    other => {
                        warn!("Ignoring unknown vector component '{other}'");
                        map.next_value::<Value>()?;
                    }
                }
            }
            match (x, y, z) {
                (Some(x), Some(y), Some(z)) => Ok(Vec3::new(x, y, z)),
                _ => Err(de::Error::custom("Expected x, y and z in Vec3 object")),
            }
        }
    }

    deserializer.deserialize_any(Vec3Visitor)
}

pub(crate) fn ser_vec3<S>(v: &Vec3, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut s = serializer.serialize_struct("Vec3", 3)?;
    s.serialize_field("x", &v.x)?;
    s.serialize_field("y", &v.y)?;
    s.serialize_field("z", &v.z)?;
    s.end()
}
