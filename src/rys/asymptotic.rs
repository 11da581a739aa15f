//! Large-T rules (T >= 25).
//!
//! All three regimes share the leading behaviour
//!   root_k   → C_k / T
//!   weight   → w1 · (1 − Σρ, ρ2, ρ3, ρ4, ρ5),  w1 = sqrt(π / 4T)
//! where w1 is the total weight mass F0(T) ~ sqrt(π/4T). Below T = 59 a
//! damped polynomial correction is added; the fits produce fit-space roots
//! `C/(T − C) + correction`, which the r/(1+r) map turns into `C/T + ...`.

use super::coeffs::{AsymFit, ASYM_25_40, ASYM_40_59};
use super::poly::{horner, to_unit_interval};
use super::RawRule;
use crate::types::{ASYM_25_40_W1_DAMP, ASYM_ROOTS, ASYM_WEIGHT_RATIOS, NROOTS, PIE4};

/// Slot 1 carries the remainder so the five weights add up to w1.
#[inline]
fn partition_weights(w1: f64, tail: [f64; NROOTS - 1], rule: &mut RawRule) {
    rule.weights[0] = w1 - tail[0] - tail[1] - tail[2] - tail[3];
    rule.weights[1..].copy_from_slice(&tail);
}

/// Fit-space roots `P_k(T)·damp + C_k/(T − C_k)`, mapped to (0,1).
#[inline]
fn corrected_roots(fit: &AsymFit, t: f64, damp: f64, rule: &mut RawRule) {
    for k in 0..NROOTS {
        let c = ASYM_ROOTS[k];
        let u = horner(fit.roots[k], t) * damp + c / (t - c);
        rule.roots[k] = to_unit_interval(u);
    }
}

#[inline]
fn corrected_weights(fit: &AsymFit, t: f64, damp: f64, w1: f64) -> [f64; NROOTS - 1] {
    let mut tail = [0.0_f64; NROOTS - 1];
    for (k, w) in tail.iter_mut().enumerate() {
        *w = horner(fit.weights[k], t) * damp + w1 * ASYM_WEIGHT_RATIOS[k];
    }
    tail
}

/// 25 <= T < 40: corrections damped by e^{-T}.
pub fn eval_25_40(t: f64) -> RawRule {
    let e = (-t).exp();
    let w1 = e * ASYM_25_40_W1_DAMP + (PIE4 / t).sqrt();
    let mut rule = RawRule::default();
    let tail = corrected_weights(&ASYM_25_40, t, e, w1);
    partition_weights(w1, tail, &mut rule);
    corrected_roots(&ASYM_25_40, t, e, &mut rule);
    rule
}

/// 40 <= T < 59: roots damped by T³e^{-T}, weights by T⁶e^{-T}.
pub fn eval_40_59(t: f64) -> RawRule {
    let t3 = t * t * t;
    let mut e = (-t).exp() * t3;
    let mut rule = RawRule::default();
    corrected_roots(&ASYM_40_59, t, e, &mut rule);
    e *= t3;
    let w1 = (PIE4 / t).sqrt();
    let tail = corrected_weights(&ASYM_40_59, t, e, w1);
    partition_weights(w1, tail, &mut rule);
    rule
}

/// T >= 59: closed form, no correction.
pub fn eval_large(t: f64) -> RawRule {
    let w1 = (PIE4 / t).sqrt();
    let mut rule = RawRule::default();
    let tail = ASYM_WEIGHT_RATIOS.map(|rho| w1 * rho);
    partition_weights(w1, tail, &mut rule);
    for (r, c) in rule.roots.iter_mut().zip(ASYM_ROOTS) {
        *r = c / t;
    }
    rule
}

// ──────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn total(rule: &RawRule) -> f64 { rule.weights.iter().sum() }

    #[test]
    fn large_t_is_exact_closed_form() {
        let t = 250.0;
        let rule = eval_large(t);
        for k in 0..NROOTS {
            assert_eq!(rule.roots[k], ASYM_ROOTS[k] / t);
        }
        let w1 = (PIE4 / t).sqrt();
        assert_relative_eq!(total(&rule), w1, max_relative = 1e-14);
        for k in 1..NROOTS {
            assert_eq!(rule.weights[k], w1 * ASYM_WEIGHT_RATIOS[k - 1]);
        }
    }

    /// Damped corrections vanish smoothly into the closed form at T = 59.
    #[test]
    fn corrected_band_meets_closed_form() {
        let a = eval_40_59(59.0);
        let b = eval_large(59.0);
        for k in 0..NROOTS {
            assert_relative_eq!(a.roots[k], b.roots[k], max_relative = 1e-13);
            assert_relative_eq!(a.weights[k], b.weights[k], max_relative = 1e-12);
        }
    }

    #[test]
    fn corrected_bands_meet_at_forty() {
        let a = eval_25_40(40.0);
        let b = eval_40_59(40.0);
        for k in 0..NROOTS {
            assert_relative_eq!(a.roots[k], b.roots[k], max_relative = 1e-12);
            assert_relative_eq!(a.weights[k], b.weights[k], max_relative = 1e-12);
        }
    }

    #[test]
    fn weights_partition_leading_mass() {
        for &t in &[26.0, 33.3, 41.0, 55.5] {
            let rule = if t < 40.0 { eval_25_40(t) } else { eval_40_59(t) };
            let mass = if t < 40.0 {
                (-t).exp() * ASYM_25_40_W1_DAMP + (PIE4 / t).sqrt()
            } else {
                (PIE4 / t).sqrt()
            };
            assert_relative_eq!(total(&rule), mass, max_relative = 1e-14);
        }
    }
}
