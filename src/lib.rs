//! rys5: five-point Rys quadrature roots and weights.
//!
//! Given T-exponents arising from Gaussian electron-repulsion integrals, this
//! crate returns, for each T, five roots in (0,1) and five weights of the Rys
//! quadrature rule, accurate to near machine precision on T ∈ [0, ∞).
//!
//! ```
//! let q = rys5::rys5(2.5);
//! assert!(q.roots.windows(2).all(|w| w[0] < w[1]));
//! ```
//!
//! # ABI
//! A batch entry point with the legacy ERD calling convention is exported:
//! ```c
//! int erd_rys5_roots_weights(int nt, const double *tval,
//!                            double *rts, double *wts);
//! ```
//! `wts` must be pre-seeded by the caller; it is multiplied in place.

#![allow(clippy::missing_safety_doc)]

pub mod types;
pub mod error;
pub mod config;
pub mod rys;
pub mod driver;

// Re-export commonly used items
pub use config::BatchConfig;
pub use error::{Error, Result};
pub use rys::{evaluate_regime, rys5, rys5_seeded, RawRule, Regime, Rys5};
pub use rys::boys::quadrature_error;
pub use driver::{par_rys5_roots_weights, rys5_roots_weights, try_rys5_roots_weights};
pub use types::NROOTS;

// ─────────────────────────────────────────────────────────────────
// C-ABI exports
// ─────────────────────────────────────────────────────────────────

/// Rys roots and weights for `nt` T-exponents (5 per T).
///
/// Returns 0 on success, -1 if `nt < 0` or a pointer is null (nothing is
/// written in that case).
///
/// # Safety
/// `tval` must be valid for `nt` reads; `rts` and `wts` for `5*nt` reads and
/// writes, with `wts` initialised to the seed weights. The buffers must not
/// overlap.
#[no_mangle]
pub unsafe extern "C" fn erd_rys5_roots_weights(
    nt:   i32,
    tval: *const f64,
    rts:  *mut f64,
    wts:  *mut f64,
) -> i32 {
    if nt < 0 {
        tracing::warn!(nt, "erd_rys5_roots_weights: negative batch size");
        return -1;
    }
    if nt == 0 { return 0; }
    if tval.is_null() || rts.is_null() || wts.is_null() {
        tracing::warn!(nt, "erd_rys5_roots_weights: null buffer");
        return -1;
    }
    let n = nt as usize;
    let t = std::slice::from_raw_parts(tval, n);
    let r = std::slice::from_raw_parts_mut(rts, types::nslots(n));
    let w = std::slice::from_raw_parts_mut(wts, types::nslots(n));
    driver::rys5_roots_weights(t, r, w);
    0
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
