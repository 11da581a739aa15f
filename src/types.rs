/// Shared constants for the five-point Rys quadrature engine.
///
/// Output layout: for the k-th T-exponent of a batch, roots and weights occupy
/// slots `[NROOTS*k, NROOTS*k + NROOTS)` of the caller's flat buffers.

// ─── Rule size ───────────────────────────────────────────────────────────────
pub const NROOTS: usize = 5;

// ─── Regime dispatch ─────────────────────────────────────────────────────────
/// T at or below this value is treated as the T = 0 limit plus a linear term.
pub const T_NEAR_ZERO: f64 = 3e-7;
/// Length of the integer lookup table; `tcase = floor(min(T + 1, JUMP_LEN))`.
pub const JUMP_LEN: usize = 60;

// ─── Asymptotic (large-T) rule ───────────────────────────────────────────────
/// π/4 as carried by the asymptotic fits; w1 = sqrt(PIE4 / T).
pub const PIE4: f64 = 0.785398163397448;

/// Large-T root constants: canonical root k tends to `ASYM_ROOTS[k] / T`.
pub const ASYM_ROOTS: [f64; NROOTS] = [
    0.117581320211778,
    1.0745620124369,
    3.08593744371754,
    6.41472973366203,
    11.8071894899717,
];

/// Large-T weight ratios w2/w1 .. w5/w1.
pub const ASYM_WEIGHT_RATIOS: [f64; NROOTS - 1] = [
    0.270967405960535,
    0.0382231610015404,
    0.00151614186862443,
    8.62130526143657e-6,
];

/// Coefficient of e^{-T} in the leading weight for 25 <= T < 40.
pub const ASYM_25_40_W1_DAMP: f64 = -0.01962;

/// Number of output slots for a batch of `nt` T-exponents.
#[inline]
pub fn nslots(nt: usize) -> usize { NROOTS * nt }
