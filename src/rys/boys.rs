//! Boys function and moment check for five-point Rys rules.
//!
//! Boys function:  F_m(t) = ∫₀¹ s^{2m} e^{-t·s²} ds
//! A Rys rule with canonical roots rᵢ = sᵢ² and weights wᵢ integrates
//! polynomials of degree ≤ 2n−1 in r exactly:  Σᵢ wᵢ rᵢᵏ = F_k(t),  k < 2n.

use crate::types::NROOTS;

pub const SQRTPIE4: f64 = 0.8862269254527580;

/// Highest moment a five-point rule reproduces exactly.
pub const MAX_EXACT_MOMENT: usize = 2 * NROOTS - 1;

extern "C" { fn erf(x: f64) -> f64; }

/// Series/recursion crossover: for `t <= SERIES_CROSSOVER[m]` the series for
/// F_m converges fast and downward recursion is stable.
const SERIES_CROSSOVER: [f64; 40] = [
    0., 0., 0.866, 1.295, 1.705, 2.106, 2.501, 2.892, 3.280, 3.666,
    4.050, 4.433, 4.814, 5.194, 5.573, 5.951, 6.328, 6.704, 7.079, 7.454,
    7.827, 8.200, 8.572, 8.944, 9.315, 9.685, 10.054, 10.423, 10.791, 11.159,
    11.526, 11.893, 12.259, 12.624, 12.989, 13.354, 13.718, 14.082, 14.445, 14.808,
];

const SERIES_EPS: f64 = 1e-15;

/// Fills `f[0..=mmax]` with F_0(t)..F_mmax(t).
///
/// Small `t` sums the power series for F_mmax and recurses downward;
/// otherwise F_0 comes from `erf` and the rest from upward recursion.
pub fn boys_fn(f: &mut [f64], t: f64, mmax: usize) {
    assert!(f.len() > mmax, "boys_fn: buffer holds {} values, need {}", f.len(), mmax + 1);
    let f = &mut f[..=mmax];

    if t < SERIES_EPS {
        // F_m(0) = 1/(2m+1)
        for (m, fm) in f.iter_mut().enumerate() {
            *fm = 1.0 / (2 * m + 1) as f64;
        }
        return;
    }

    let crossover = SERIES_CROSSOVER
        .get(mmax)
        .copied()
        .unwrap_or(4.0 + mmax as f64 * 0.378);
    if t <= crossover {
        boys_series_down(f, t);
    } else {
        boys_erf_up(f, t);
    }
}

/// F_m = e^{-t}/(2m+1) · Σ_k t^k / ((m+3/2)(m+5/2)…(m+k+1/2)) for the top
/// order, then F_{m-1} = (2t·F_m + e^{-t}) / (2m-1).
fn boys_series_down(f: &mut [f64], t: f64) {
    let mmax = f.len() - 1;
    let half_e = 0.5 * (-t).exp();

    let mut denom = mmax as f64 + 1.5;
    let mut term = half_e;
    let mut sum = half_e;
    while term > SERIES_EPS * half_e {
        term *= t / denom;
        sum += term;
        denom += 1.0;
    }
    f[mmax] = sum / (mmax as f64 + 0.5);

    for m in (0..mmax).rev() {
        f[m] = (half_e + t * f[m + 1]) / (m as f64 + 0.5);
    }
}

/// F_0 = sqrt(π/4t)·erf(sqrt t), then F_m = ((2m-1)·F_{m-1} − e^{-t}) / 2t.
fn boys_erf_up(f: &mut [f64], t: f64) {
    let st = t.sqrt();
    f[0] = SQRTPIE4 / st * unsafe { erf(st) };
    let e = (-t).exp();
    let inv_2t = 0.5 / t;
    for m in 1..f.len() {
        f[m] = inv_2t * ((2 * m - 1) as f64 * f[m - 1] - e);
    }
}

/// Largest relative moment error of a five-point rule at `t`:
/// `max_k |Σᵢ wᵢ rᵢᵏ − F_k(t)| / F_k(t)` for k = 0..=9.
///
/// `roots` are canonical (0,1) roots and `weights` must be unit-seeded.
pub fn quadrature_error(t: f64, roots: &[f64], weights: &[f64]) -> f64 {
    assert!(roots.len() == NROOTS && weights.len() == NROOTS);
    let mut f = [0.0_f64; MAX_EXACT_MOMENT + 1];
    boys_fn(&mut f, t, MAX_EXACT_MOMENT);
    let mut worst = 0.0_f64;
    for (k, &fk) in f.iter().enumerate() {
        let m: f64 = roots.iter().zip(weights)
            .map(|(&r, &w)| w * r.powi(k as i32))
            .sum();
        worst = worst.max((m - fk).abs() / fk);
    }
    worst
}

// ──────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boys_f0_zero() {
        let mut f = [0.0_f64; 1];
        boys_fn(&mut f, 0.0, 0);
        assert!((f[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn boys_recurrence() {
        // F_{m-1}(x) = (2x·F_m(x) + exp(-x)) / (2m-1)
        for &x in &[0.3_f64, 2.5, 7.0] {
            let mut f = [0.0_f64; 5];
            boys_fn(&mut f, x, 4);
            let e = (-x).exp();
            for m in 1..=4_usize {
                let lhs = f[m - 1];
                let rhs = (2.0 * x * f[m] + e) / (2 * m - 1) as f64;
                assert!((lhs - rhs).abs() < 1e-12, "x={} m={}: lhs={} rhs={}", x, m, lhs, rhs);
            }
        }
    }

    /// Series branch against the closed form F_0(t) = sqrt(π/4t)·erf(sqrt t).
    #[test]
    fn boys_series_matches_erf_form() {
        for &x in &[0.05_f64, 0.3, 1.0, 3.0] {
            let mut f = [0.0_f64; 10];
            boys_fn(&mut f, x, 9);
            let exact = SQRTPIE4 / x.sqrt() * unsafe { erf(x.sqrt()) };
            assert!((f[0] - exact).abs() < 1e-14 * exact, "x={} F0={} exact={}", x, f[0], exact);
        }
    }

    #[test]
    fn boys_branches_agree() {
        // At these t, mmax = 9 takes the series branch and mmax = 5 the
        // erf + upward-recursion branch.
        for &t in &[2.5_f64, 3.0, 3.6] {
            let mut a = [0.0_f64; 10];
            let mut b = [0.0_f64; 6];
            boys_fn(&mut a, t, 9);
            boys_fn(&mut b, t, 5);
            for m in 0..6 {
                assert!((a[m] - b[m]).abs() < 1e-13 * a[m], "t={} m={}: {} vs {}", t, m, a[m], b[m]);
            }
        }
    }

    #[test]
    fn boys_large_t_asymptote() {
        let t = 200.0_f64;
        let mut f = [0.0_f64; 1];
        boys_fn(&mut f, t, 0);
        assert!((f[0] - (std::f64::consts::PI / (4.0 * t)).sqrt()).abs() < 1e-15);
    }
}
