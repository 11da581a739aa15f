//! Batch drivers: evaluate the five-point rule for every T of a batch.
//!
//! This module provides three public functions on top of the per-element
//! `rys5_seeded` primitive:
//!
//! * `rys5_roots_weights`: sequential, unchecked hot path.
//! * `try_rys5_roots_weights`: validates the batch first, then runs the
//!   hot path.
//! * `par_rys5_roots_weights`: splits large batches across the `rayon` pool.
//!
//! # Buffer layout
//! For batch index n, roots and weights live in slots `[5n, 5n+5)`. The
//! weights buffer is in/out: it must be pre-seeded by the caller and each
//! slot is multiplied by the computed factor.
//!
//! # Parallelism safety
//! T chunk c of length L maps to output slots `[5cL, 5(c+1)L)`. Chunks are
//! disjoint, the coefficient tables are immutable statics, and no element
//! reads another element's output, so zipped `par_chunks_mut` needs no
//! synchronisation and yields results bit-identical to the sequential path.

use rayon::prelude::*;
use crate::config::BatchConfig;
use crate::error::{Error, Result};
use crate::rys::rys5_seeded;
use crate::types::{nslots, NROOTS};

// ─────────────────────────────────────────────────────────────────
// Sequential hot path
// ─────────────────────────────────────────────────────────────────

/// Compute roots and weights for every T in `tval`.
///
/// `rts` and `wts` must each hold `5 * tval.len()` values; `wts` must be
/// pre-seeded (1.0 for plain weights). Every T must be non-negative. These
/// preconditions are asserted in debug builds only.
pub fn rys5_roots_weights(tval: &[f64], rts: &mut [f64], wts: &mut [f64]) {
    debug_assert_eq!(rts.len(), nslots(tval.len()), "roots buffer must hold 5 × nt values");
    debug_assert_eq!(wts.len(), nslots(tval.len()), "weights buffer must hold 5 × nt values");
    for ((&t, r), w) in tval
        .iter()
        .zip(rts.chunks_exact_mut(NROOTS))
        .zip(wts.chunks_exact_mut(NROOTS))
    {
        rys5_seeded(t, r, w);
    }
}

// ─────────────────────────────────────────────────────────────────
// Checked entry
// ─────────────────────────────────────────────────────────────────

/// Check buffer lengths and T values without touching the buffers.
pub fn validate_batch(tval: &[f64], rts: &[f64], wts: &[f64]) -> Result<()> {
    let expected = nslots(tval.len());
    if rts.len() != expected {
        return Err(Error::BufferLength { buffer: "roots", expected, got: rts.len() });
    }
    if wts.len() != expected {
        return Err(Error::BufferLength { buffer: "weights", expected, got: wts.len() });
    }
    for (index, &value) in tval.iter().enumerate() {
        if !value.is_finite() {
            return Err(Error::NonFiniteExponent { index, value });
        }
        if value < 0.0 {
            return Err(Error::NegativeExponent { index, value });
        }
    }
    Ok(())
}

/// Like `rys5_roots_weights`, but reports precondition violations instead of
/// relying on the caller. On error nothing is written.
pub fn try_rys5_roots_weights(tval: &[f64], rts: &mut [f64], wts: &mut [f64]) -> Result<()> {
    if let Err(e) = validate_batch(tval, rts, wts) {
        tracing::warn!(nt = tval.len(), error = %e, "rys5: rejected batch");
        return Err(e);
    }
    rys5_roots_weights(tval, rts, wts);
    Ok(())
}

// ─────────────────────────────────────────────────────────────────
// Parallel batch
// ─────────────────────────────────────────────────────────────────

/// Same contract as `rys5_roots_weights`; batches of at least
/// `cfg.parallel_threshold` T values are split into chunks of
/// `cfg.chunk_len` and evaluated on the rayon pool.
pub fn par_rys5_roots_weights(
    tval: &[f64],
    rts:  &mut [f64],
    wts:  &mut [f64],
    cfg:  &BatchConfig,
) {
    let nt = tval.len();
    if !cfg.runs_parallel(nt) {
        tracing::debug!(nt, "rys5: sequential batch");
        rys5_roots_weights(tval, rts, wts);
        return;
    }
    debug_assert_eq!(rts.len(), nslots(nt), "roots buffer must hold 5 × nt values");
    debug_assert_eq!(wts.len(), nslots(nt), "weights buffer must hold 5 × nt values");

    // No chunk is longer than the batch, which also keeps `chunk * NROOTS` in range.
    let chunk = cfg.effective_chunk_len().min(nt.max(1));
    tracing::debug!(nt, chunk, tasks = nt.div_ceil(chunk), "rys5: parallel batch");

    tval.par_chunks(chunk)
        .zip(rts.par_chunks_mut(chunk * NROOTS))
        .zip(wts.par_chunks_mut(chunk * NROOTS))
        .for_each(|((t, r), w)| rys5_roots_weights(t, r, w));
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rys::rys5;

    fn grid(n: usize) -> Vec<f64> {
        // Walk every regime, including the T = 0 limit.
        (0..n).map(|i| if i % 97 == 0 { 0.0 } else { (i as f64 * 0.731) % 75.0 }).collect()
    }

    #[test]
    fn batch_matches_single_calls() {
        let t = grid(300);
        let mut rts = vec![0.0_f64; 5 * t.len()];
        let mut wts = vec![1.0_f64; 5 * t.len()];
        rys5_roots_weights(&t, &mut rts, &mut wts);
        for (n, &tn) in t.iter().enumerate() {
            let q = rys5(tn);
            assert_eq!(&rts[5 * n..5 * n + 5], &q.roots[..], "roots differ at n={}", n);
            assert_eq!(&wts[5 * n..5 * n + 5], &q.weights[..], "weights differ at n={}", n);
        }
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let mut rts: Vec<f64> = Vec::new();
        let mut wts: Vec<f64> = Vec::new();
        rys5_roots_weights(&[], &mut rts, &mut wts);
        assert!(try_rys5_roots_weights(&[], &mut rts, &mut wts).is_ok());
    }

    #[test]
    fn parallel_is_bit_identical() {
        let t = grid(5000);
        let seed: Vec<f64> = (0..5 * t.len()).map(|i| 1.0 + (i % 7) as f64 * 0.125).collect();

        let mut rts_s = vec![0.0_f64; 5 * t.len()];
        let mut wts_s = seed.clone();
        rys5_roots_weights(&t, &mut rts_s, &mut wts_s);

        // Odd chunk length so the last chunk is short.
        let cfg = BatchConfig::default().with_parallel_threshold(1).with_chunk_len(333);
        let mut rts_p = vec![0.0_f64; 5 * t.len()];
        let mut wts_p = seed;
        par_rys5_roots_weights(&t, &mut rts_p, &mut wts_p, &cfg);

        assert_eq!(rts_s, rts_p);
        assert_eq!(wts_s, wts_p);
    }

    #[test]
    fn parallel_oversized_chunk_is_one_task() {
        let t = grid(8);
        let mut rts_s = vec![0.0_f64; 40];
        let mut wts_s = vec![1.0_f64; 40];
        rys5_roots_weights(&t, &mut rts_s, &mut wts_s);

        let cfg = BatchConfig::default().with_parallel_threshold(1).with_chunk_len(usize::MAX);
        let mut rts_p = vec![0.0_f64; 40];
        let mut wts_p = vec![1.0_f64; 40];
        par_rys5_roots_weights(&t, &mut rts_p, &mut wts_p, &cfg);

        assert_eq!(rts_s, rts_p);
        assert_eq!(wts_s, wts_p);
    }

    #[test]
    fn parallel_below_threshold_runs_sequentially() {
        let t = grid(10);
        let mut rts = vec![0.0_f64; 50];
        let mut wts = vec![1.0_f64; 50];
        par_rys5_roots_weights(&t, &mut rts, &mut wts, &BatchConfig::sequential());
        assert_eq!(&rts[..5], &rys5(t[0]).roots[..]);
    }

    #[test]
    fn checked_rejects_bad_buffers() {
        let t = [1.0, 2.0];
        let mut rts = vec![0.0_f64; 9];
        let mut wts = vec![1.0_f64; 10];
        assert_eq!(
            try_rys5_roots_weights(&t, &mut rts, &mut wts),
            Err(Error::BufferLength { buffer: "roots", expected: 10, got: 9 }),
        );
        let mut rts = vec![0.0_f64; 10];
        let mut wts = vec![1.0_f64; 11];
        assert_eq!(
            try_rys5_roots_weights(&t, &mut rts, &mut wts),
            Err(Error::BufferLength { buffer: "weights", expected: 10, got: 11 }),
        );
    }

    #[test]
    fn checked_rejects_bad_exponents_and_writes_nothing() {
        let mut rts = vec![0.0_f64; 15];
        let mut wts = vec![1.0_f64; 15];
        let err = try_rys5_roots_weights(&[0.5, -2.0, 3.0], &mut rts, &mut wts).unwrap_err();
        assert_eq!(err, Error::NegativeExponent { index: 1, value: -2.0 });
        assert!(rts.iter().all(|&r| r == 0.0));
        assert!(wts.iter().all(|&w| w == 1.0));

        let err = try_rys5_roots_weights(&[0.5, 1.0, f64::NAN], &mut rts, &mut wts).unwrap_err();
        assert!(matches!(err, Error::NonFiniteExponent { index: 2, .. }));
        let err = try_rys5_roots_weights(&[f64::INFINITY, 1.0, 2.0], &mut rts, &mut wts).unwrap_err();
        assert!(matches!(err, Error::NonFiniteExponent { index: 0, .. }));
    }

    #[test]
    fn error_messages() {
        let e = Error::BufferLength { buffer: "weights", expected: 10, got: 4 };
        assert_eq!(e.to_string(), "weights buffer holds 4 values, expected 10");
        let e = Error::NegativeExponent { index: 3, value: -0.5 };
        assert_eq!(e.to_string(), "T-exponent -0.5 at index 3 is negative");
    }
}
