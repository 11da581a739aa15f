//! Five-point Rys quadrature roots and weights.
//!
//! For a T-exponent t the rule approximates
//!   ∫₀¹ f(s²) e^{-t·s²} ds ≈ Σᵢ wᵢ · f(rᵢ),   rᵢ ∈ (0,1),  r₁ < … < r₅
//! using piecewise minimax fits: `Regime::classify` picks the band,
//! `evaluate_regime` evaluates its fit, and the per-element entry points
//! write roots and fold the weight factors into caller-seeded weights.

pub mod asymptotic;
pub mod boys;
pub mod coeffs;
pub mod poly;
pub mod regime;

pub use regime::Regime;

use crate::types::NROOTS;

/// Canonical roots and weight factors for one T, before seeding.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawRule {
    /// Roots in (0,1), increasing.
    pub roots: [f64; NROOTS],
    /// Factors that multiply the seed weights.
    pub weights: [f64; NROOTS],
}

/// Evaluate the fit owned by `regime` at `t`.
///
/// `regime` must be `Regime::classify(t)` for production use; passing a
/// neighbouring regime extrapolates that fit, which is how boundary
/// continuity is checked.
#[inline]
pub fn evaluate_regime(regime: Regime, t: f64) -> RawRule {
    use coeffs::*;
    match regime {
        Regime::NearZero   => poly::eval_band(&NEAR_ZERO, t),
        Regime::Band0To1   => poly::eval_band(&BAND_0_1, t),
        Regime::Band1To5   => poly::eval_band(&BAND_1_5, t),
        Regime::Band5To10  => poly::eval_band(&BAND_5_10, t),
        Regime::Band10To15 => poly::eval_band(&BAND_10_15, t),
        Regime::Band15To20 => poly::eval_band(&BAND_15_20, t),
        Regime::Band20To25 => poly::eval_band(&BAND_20_25, t),
        Regime::Asym25To40 => asymptotic::eval_25_40(t),
        Regime::Asym40To59 => asymptotic::eval_40_59(t),
        Regime::Asymptotic => asymptotic::eval_large(t),
    }
}

/// Compute the rule for one T-exponent into a five-slot block.
///
/// In/out contract: `rts` is overwritten with the five roots; `wts` must hold
/// the caller's seed weights (1.0 for none) and each slot is multiplied in
/// place by its computed factor.
///
/// Preconditions (checked in debug builds only): `t >= 0` and both slices
/// hold exactly `NROOTS` values.
#[inline]
pub fn rys5_seeded(t: f64, rts: &mut [f64], wts: &mut [f64]) {
    debug_assert!(t >= 0.0, "rys5: T-exponent must be non-negative, got {t}");
    debug_assert_eq!(rts.len(), NROOTS);
    debug_assert_eq!(wts.len(), NROOTS);
    let rule = evaluate_regime(Regime::classify(t), t);
    rts.copy_from_slice(&rule.roots);
    for (w, f) in wts.iter_mut().zip(rule.weights) {
        *w *= f;
    }
}

/// Five-point rule with unit seed weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rys5 {
    pub roots: [f64; NROOTS],
    pub weights: [f64; NROOTS],
}

impl Rys5 {
    /// Σwᵢ, which approximates F₀(T).
    pub fn total_weight(&self) -> f64 { self.weights.iter().sum() }
}

/// Roots and unit-seeded weights for a single T-exponent.
pub fn rys5(t: f64) -> Rys5 {
    let mut roots = [0.0_f64; NROOTS];
    let mut weights = [1.0_f64; NROOTS];
    rys5_seeded(t, &mut roots, &mut weights);
    Rys5 { roots, weights }
}

// ──────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use super::boys::{boys_fn, quadrature_error};
    use approx::assert_relative_eq;

    fn check_rule(t: f64, q: &Rys5) {
        assert!(q.roots[0] > 0.0, "T={t}: r1={}", q.roots[0]);
        assert!(q.roots[4] < 1.0, "T={t}: r5={}", q.roots[4]);
        for k in 1..NROOTS {
            assert!(q.roots[k - 1] < q.roots[k], "T={t}: roots not increasing {:?}", q.roots);
        }
        assert!(q.weights.iter().all(|&w| w > 0.0), "T={t}: weights {:?}", q.weights);
    }

    #[test]
    fn t_zero_limit() {
        let q = rys5(0.0);
        let raw = [0.0226659266316985, 0.231271692140903, 0.857346024118836,
                   2.97353038120346, 18.4151859759051];
        let w0 = [0.295524224714752, 0.269266719309995, 0.219086362515981,
                  0.14945134915058, 0.0666713443086877];
        for k in 0..NROOTS {
            assert_relative_eq!(q.roots[k], raw[k] / (1.0 + raw[k]), max_relative = 1e-15);
            assert_relative_eq!(q.weights[k], w0[k], max_relative = 1e-15);
        }
        assert_relative_eq!(q.total_weight(), 1.0, max_relative = 1e-13);
    }

    #[test]
    fn roots_ordered_weights_positive_everywhere() {
        let mut t = 0.0_f64;
        while t <= 120.0 {
            check_rule(t, &rys5(t));
            t += 0.0625;
        }
        for &t in &[1e-12, 1e-7, 3e-7, 1e3, 1e6, 1e12] {
            check_rule(t, &rys5(t));
        }
    }

    /// A five-point Rys rule integrates r^k exactly for k <= 9.
    #[test]
    fn rys5_moments() {
        let mut t = 0.0_f64;
        while t < 80.0 {
            let q = rys5(t);
            let err = quadrature_error(t, &q.roots, &q.weights);
            assert!(err < 1e-11, "T={t}: max moment error {err:e}");
            t += 0.37;
        }
    }

    #[test]
    fn total_weight_is_f0() {
        for &t in &[0.5_f64, 3.0, 12.0, 27.0, 45.0, 300.0] {
            let mut f = [0.0_f64; 1];
            boys_fn(&mut f, t, 0);
            assert_relative_eq!(rys5(t).total_weight(), f[0], max_relative = 1e-12);
        }
    }

    #[test]
    fn seeds_are_multiplied_not_overwritten() {
        let t = 6.3;
        let unit = rys5(t);
        let seed = [2.0, 0.5, -1.0, 3.25, 1e-3];
        let mut rts = [0.0_f64; NROOTS];
        let mut wts = seed;
        rys5_seeded(t, &mut rts, &mut wts);
        assert_eq!(rts, unit.roots);
        for k in 0..NROOTS {
            assert_eq!(wts[k], seed[k] * unit.weights[k]);
        }
    }

    /// Adjacent fits evaluated at their shared edge agree to fit accuracy.
    #[test]
    fn boundary_continuity() {
        let edges = [
            (3e-7, Regime::NearZero, Regime::Band0To1),
            (1.0, Regime::Band0To1, Regime::Band1To5),
            (5.0, Regime::Band1To5, Regime::Band5To10),
            (10.0, Regime::Band5To10, Regime::Band10To15),
            (15.0, Regime::Band10To15, Regime::Band15To20),
            (20.0, Regime::Band15To20, Regime::Band20To25),
            (25.0, Regime::Band20To25, Regime::Asym25To40),
            (40.0, Regime::Asym25To40, Regime::Asym40To59),
            (59.0, Regime::Asym40To59, Regime::Asymptotic),
        ];
        for (t, lo, hi) in edges {
            let a = evaluate_regime(lo, t);
            let b = evaluate_regime(hi, t);
            for k in 0..NROOTS {
                assert_relative_eq!(a.roots[k], b.roots[k], max_relative = 5e-12);
                assert_relative_eq!(a.weights[k], b.weights[k], max_relative = 5e-12);
            }
        }
    }

    #[test]
    fn evaluate_regime_dispatch_matches_classify() {
        for &t in &[0.0, 0.4, 2.0, 8.0, 11.0, 16.0, 21.0, 30.0, 50.0, 70.0] {
            let q = rys5(t);
            let raw = evaluate_regime(Regime::classify(t), t);
            assert_eq!(q.roots, raw.roots);
            assert_eq!(q.weights, raw.weights);
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "non-negative")]
    fn negative_t_is_a_contract_violation() {
        let _ = rys5(-1.0);
    }
}
