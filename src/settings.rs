/*

    Conversion settings, read from the "settings" object of a
    request. Every field is optional in JSON.

    @date: 17 Nov, 2025
    @author: bartu
*/

use crate::basepoint::UnitScale;
use crate::json_parser::deser_float;
use crate::prelude::*;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[derive(SmartDefault)]
#[serde(default)]
pub struct ConversionSettings {
    /// How far (degrees) a clipping plane normal may lean away from an
    /// axis and still count as axis aligned.
    #[default = 5.0]
    #[serde(deserialize_with = "deser_float")]
    pub angle_threshold_degrees: Float,

    /// Host internal length unit in meters, feet by default.
    #[default = 0.3048]
    #[serde(deserialize_with = "deser_float")]
    pub meters_per_internal_unit: Float,
}

impl ConversionSettings {
    pub fn angle_threshold(&self) -> Scalar {
        to_radians(self.angle_threshold_degrees)
    }

    pub fn unit_scale(&self) -> UnitScale {
        let meters = scalar_from_float(self.meters_per_internal_unit);
        if meters <= Scalar::ZERO {
            warn!("Invalid unit scale {}, falling back to feet", self.meters_per_internal_unit);
            return UnitScale::FEET;
        }
        UnitScale::new(meters)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let settings = ConversionSettings::default();
        assert_eq!(settings.angle_threshold_degrees, 5.0);
        assert_eq!(settings.unit_scale(), UnitScale::FEET);
        assert!(approx_eq(settings.angle_threshold(), dec!(0.0872664625997165), 1e-12));
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let settings: ConversionSettings = serde_json::from_str(r#"{"meters_per_internal_unit": "1"}"#).unwrap();
        assert_eq!(settings.unit_scale(), UnitScale::new(dec!(1)));
        assert_eq!(settings.angle_threshold_degrees, 5.0);
    }

    #[test]
    fn test_non_positive_unit_scale_falls_back_to_feet() {
        let settings = ConversionSettings { meters_per_internal_unit: 0.0, ..Default::default() };
        assert_eq!(settings.unit_scale(), UnitScale::FEET);
    }
}
