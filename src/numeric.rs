/*

    Declare numeric types used throughout this repo.

    All geometry is computed in decimal (Scalar). Floats only
    appear at the two edges: f64 on the host side and f32 in
    the interchange records. Convert at the edges, never in
    the middle of a computation.

    WARNING: vector lengths and the trigonometric functions are evaluated
    on f64 and converted back, so they carry f64 precision.

    @date: 2 Oct, 2025
    @author: Bartu
*/

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use tracing::warn;

pub type Scalar = Decimal;
pub type Float = f64;
pub type Float32 = f32;

pub fn approx_zero(x: Float) -> bool {
    x.abs() < 1e-8
}

pub fn approx_eq(a: Scalar, b: Scalar, tolerance: Float) -> bool {
    float_from_scalar(a.saturating_sub(b)).abs() <= tolerance
}

// Finite floats beyond the decimal range clamp to MIN/MAX, NaN and infinities become zero
fn scalar_or_clamped(x: Float, converted: Option<Scalar>) -> Scalar {
    if let Some(value) = converted {
        return value;
    }
    if !x.is_finite() {
        warn!("Non-finite float {x} replaced by zero");
        return Decimal::ZERO;
    }
    warn!("Float {x} is out of decimal range, clamping");
    if x.is_sign_negative() { Decimal::MIN } else { Decimal::MAX }
}

pub fn scalar_from_float(x: Float) -> Scalar {
    scalar_or_clamped(x, Decimal::from_f64(x))
}

pub fn scalar_from_float32(x: Float32) -> Scalar {
    // Rounds to the digits an f32 actually carries, so 0.1f32 becomes 0.1
    scalar_or_clamped(x as Float, Decimal::from_f32(x))
}

pub fn float_from_scalar(x: Scalar) -> Float {
    x.to_f64().unwrap_or_else(|| {
        warn!("Decimal {x} has no f64 value, using zero");
        0.0
    })
}

pub fn float32_from_scalar(x: Scalar) -> Float32 {
    x.to_f32().unwrap_or_else(|| {
        warn!("Decimal {x} has no f32 value, using zero");
        0.0
    })
}

/// Division that clamps to MIN/MAX instead of panicking. A zero divisor
/// clamps by the sign of the dividend, 0 / 0 is zero.
pub fn saturating_div(a: Scalar, b: Scalar) -> Scalar {
    a.checked_div(b).unwrap_or_else(|| {
        if a.is_zero() {
            Decimal::ZERO
        } else if a.is_sign_negative() != b.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

/// Arc cosine in radians. The argument is clamped to [-1, 1] first,
/// rounding can push a cosine of two parallel vectors slightly past 1.
pub fn acos(x: Scalar) -> Scalar {
    scalar_from_float(float_from_scalar(x).clamp(-1.0, 1.0).acos())
}

pub fn sin_cos(angle: Scalar) -> (Scalar, Scalar) {
    let (s, c) = float_from_scalar(angle).sin_cos();
    (scalar_from_float(s), scalar_from_float(c))
}

pub fn to_radians(degrees: Float) -> Scalar {
    scalar_from_float(degrees.to_radians())
}
