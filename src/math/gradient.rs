//! Evenly spaced ranges between two endpoints
//!
//! Numbers interpolate directly, pairs interpolate per component and colors
//! interpolate in linear RGB before being converted back to hex strings.

use num_traits::{Float, cast};

use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::math::color::Rgb;
use crate::sequence::value::FeatureValue;

/// Typed gradient endpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientEndpoint {
    /// Numeric endpoint (size, orientation, ...)
    Number(f64),
    /// Color endpoint
    Color(Rgb),
    /// Two-component endpoint (width, height)
    Pair(f64, f64),
}

impl GradientEndpoint {
    /// Interpret a feature value as a gradient endpoint
    ///
    /// Text values must name a color.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if text cannot be parsed as a color
    pub fn from_value(value: &FeatureValue) -> Result<Self> {
        match value {
            FeatureValue::Int(number) => Ok(Self::Number(*number as f64)),
            FeatureValue::Float(number) => Ok(Self::Number(*number)),
            FeatureValue::Text(text) => Rgb::parse(text).map(Self::Color),
            FeatureValue::Pair(a, b) => Ok(Self::Pair(*a, *b)),
        }
    }

    const fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Color(_) => "color",
            Self::Pair(..) => "pair",
        }
    }
}

/// `n` evenly spaced values from `start` to `end`, both included
///
/// Value `i` is `start + i * (end - start) / (n - 1)`.
///
/// # Errors
///
/// Returns `InvalidParameter` if `n < 2`
pub fn linear_range<F: Float>(start: F, end: F, n: usize) -> Result<Vec<F>> {
    if n < 2 {
        return Err(invalid_parameter(
            "n_elements",
            &n,
            &"a range needs at least 2 values",
        ));
    }
    let steps = cast::<usize, F>(n - 1)
        .ok_or_else(|| computation_error("linear_range", &"step count not representable"))?;

    (0..n)
        .map(|i| {
            if i == n - 1 {
                return Ok(end);
            }
            cast::<usize, F>(i)
                .map(|step| start + (end - start) * step / steps)
                .ok_or_else(|| computation_error("linear_range", &"index not representable"))
        })
        .collect()
}

/// Component-wise [`linear_range`] over pairs
///
/// # Errors
///
/// Returns `InvalidParameter` if `n < 2`
pub fn tuple_range<F: Float>(start: (F, F), end: (F, F), n: usize) -> Result<Vec<(F, F)>> {
    let first = linear_range(start.0, end.0, n)?;
    let second = linear_range(start.1, end.1, n)?;
    Ok(first.into_iter().zip(second).collect())
}

/// `n` colors from `start` to `end` as `#rrggbb` strings
///
/// # Errors
///
/// Returns `InvalidParameter` if `n < 2`
pub fn color_range(start: Rgb, end: Rgb, n: usize) -> Result<Vec<String>> {
    let [r0, g0, b0] = start.to_linear();
    let [r1, g1, b1] = end.to_linear();
    let reds = linear_range(r0, r1, n)?;
    let greens = linear_range(g0, g1, n)?;
    let blues = linear_range(b0, b1, n)?;

    Ok(reds
        .into_iter()
        .zip(greens)
        .zip(blues)
        .map(|((r, g), b)| Rgb::from_linear([r, g, b]).to_hex())
        .collect())
}

/// Gradient of `n` feature values, dispatched on the endpoint type
///
/// # Errors
///
/// Returns `InvalidParameter` if the endpoints have different types, a text
/// endpoint is not a color, or `n < 2`
pub fn make(start: &FeatureValue, end: &FeatureValue, n: usize) -> Result<Vec<FeatureValue>> {
    let from = GradientEndpoint::from_value(start)?;
    let to = GradientEndpoint::from_value(end)?;

    match (from, to) {
        (GradientEndpoint::Number(a), GradientEndpoint::Number(b)) => Ok(linear_range(a, b, n)?
            .into_iter()
            .map(FeatureValue::Float)
            .collect()),
        (GradientEndpoint::Color(a), GradientEndpoint::Color(b)) => Ok(color_range(a, b, n)?
            .into_iter()
            .map(FeatureValue::Text)
            .collect()),
        (GradientEndpoint::Pair(a0, a1), GradientEndpoint::Pair(b0, b1)) => {
            Ok(tuple_range((a0, a1), (b0, b1), n)?
                .into_iter()
                .map(|(a, b)| FeatureValue::Pair(a, b))
                .collect())
        }
        (from, to) => Err(invalid_parameter(
            "end",
            &to.kind(),
            &format!("gradient endpoints must share a type, start is a {}", from.kind()),
        )),
    }
}
