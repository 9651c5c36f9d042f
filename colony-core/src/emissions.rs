//! Carbon emission estimates for optimised routes.

/// Grams of CO₂ emitted per kilometre travelled.
pub const CO2_GRAMS_PER_KM: f64 = 120.0;

/// Estimate the grams of CO₂ emitted over `distance_km`.
///
/// The estimate is linear in distance and is not part of optimisation.
///
/// # Examples
/// ```
/// use colony_core::emissions_grams;
///
/// assert_eq!(emissions_grams(2.5), 300.0);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "linear emission factor")]
pub fn emissions_grams(distance_km: f64) -> f64 {
    distance_km * CO2_GRAMS_PER_KM
}
