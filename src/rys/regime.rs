//! Regime classification: which fit evaluates a given T.
//!
//! The ten regimes partition [0, ∞). Above the near-zero cutoff the choice is
//! made by an integer lookup on `floor(min(T + 1, 60))`, generated at build
//! time from the band edges.

use crate::types::{JUMP_LEN, T_NEAR_ZERO};

/// One of the ten mutually exclusive T intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// T <= 3e-7
    NearZero,
    /// 3e-7 < T < 1
    Band0To1,
    /// 1 <= T < 5
    Band1To5,
    /// 5 <= T < 10
    Band5To10,
    /// 10 <= T < 15
    Band10To15,
    /// 15 <= T < 20
    Band15To20,
    /// 20 <= T < 25
    Band20To25,
    /// 25 <= T < 40
    Asym25To40,
    /// 40 <= T < 59
    Asym40To59,
    /// T >= 59
    Asymptotic,
}

include!(concat!(env!("OUT_DIR"), "/rys5_jump.rs"));

impl Regime {
    pub const ALL: [Regime; 10] = [
        Regime::NearZero,
        Regime::Band0To1,
        Regime::Band1To5,
        Regime::Band5To10,
        Regime::Band10To15,
        Regime::Band15To20,
        Regime::Band20To25,
        Regime::Asym25To40,
        Regime::Asym40To59,
        Regime::Asymptotic,
    ];

    /// Classify a T-exponent. T must be non-negative.
    ///
    /// Negative T lands in `NearZero` and NaN in `Asymptotic`; neither is
    /// meaningful, but neither panics.
    #[inline]
    pub fn classify(t: f64) -> Regime {
        if t <= T_NEAR_ZERO {
            return Regime::NearZero;
        }
        // t + 1 > 1 here, so the truncated index is in 1..=JUMP_LEN.
        let tcase = (t + 1.0).min(JUMP_LEN as f64) as usize;
        JUMP5[tcase - 1]
    }

    /// Half-open T interval `[lo, hi)` covered by this regime.
    /// `NearZero` is reported as `[0, 3e-7)` although it includes 3e-7 itself.
    pub fn interval(self) -> (f64, f64) {
        match self {
            Regime::NearZero   => (0.0, T_NEAR_ZERO),
            Regime::Band0To1   => (T_NEAR_ZERO, 1.0),
            Regime::Band1To5   => (1.0, 5.0),
            Regime::Band5To10  => (5.0, 10.0),
            Regime::Band10To15 => (10.0, 15.0),
            Regime::Band15To20 => (15.0, 20.0),
            Regime::Band20To25 => (20.0, 25.0),
            Regime::Asym25To40 => (25.0, 40.0),
            Regime::Asym40To59 => (40.0, 59.0),
            Regime::Asymptotic => (59.0, f64::INFINITY),
        }
    }

    /// Centre subtracted from T before the band polynomial is evaluated.
    /// `None` for the asymptotic regimes, which evaluate in T directly.
    pub fn shift(self) -> Option<f64> {
        match self {
            Regime::NearZero | Regime::Band0To1 => Some(0.0),
            Regime::Band1To5   => Some(3.0),
            Regime::Band5To10  => Some(7.5),
            Regime::Band10To15 => Some(12.5),
            Regime::Band15To20 => Some(17.5),
            Regime::Band20To25 => Some(22.5),
            Regime::Asym25To40 | Regime::Asym40To59 | Regime::Asymptotic => None,
        }
    }

    /// True for the three large-T regimes driven by the asymptotic closed form.
    #[inline]
    pub fn is_asymptotic(self) -> bool {
        matches!(self, Regime::Asym25To40 | Regime::Asym40To59 | Regime::Asymptotic)
    }
}
