//! Polynomial bands: Horner evaluation and the fit-space → (0,1) root map.

use super::coeffs::BandFit;
use super::RawRule;
use crate::types::NROOTS;

/// Nested multiply-add over `coeffs` (highest degree first) at `x`.
#[inline]
pub fn horner(coeffs: &[f64], x: f64) -> f64 {
    match coeffs.split_first() {
        Some((&lead, rest)) => rest.iter().fold(lead, |acc, &c| acc * x + c),
        None => 0.0,
    }
}

/// Map a fit-space root u ∈ (0, ∞) to the canonical root u/(1+u) ∈ (0, 1).
#[inline]
pub fn to_unit_interval(u: f64) -> f64 {
    u / (u + 1.0)
}

/// Evaluate all ten fits of a band at T.
///
/// Roots come back already mapped to (0,1); weights are the factors that
/// multiply the caller's seed weights.
#[inline]
pub fn eval_band(fit: &BandFit, t: f64) -> RawRule {
    let x = t - fit.shift;
    let mut rule = RawRule::default();
    for k in 0..NROOTS {
        rule.roots[k] = to_unit_interval(horner(fit.roots[k], x));
        rule.weights[k] = horner(fit.weights[k], x);
    }
    rule
}
