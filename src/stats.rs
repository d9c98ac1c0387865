//! Running statistics across rounds, and the coupon-collector reference
//! values they converge to.
//!
//! Shooting uniformly with replacement until all `n` cans are down takes on
//! average `n × H(n)` shots, `H(n)` being the n-th harmonic number. For a
//! 2×16 display that is `32 × 4.058 ≈ 130`, for a 4×20 display
//! `80 × 4.965 ≈ 397`.

use core::fmt;

use crate::round::RoundResult;

/// Euler-Mascheroni constant.
pub const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Totals over every round recorded since start-up.
///
/// Only [`SessionStats::record`] mutates it; the totals never go down.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SessionStats {
    total_shots: u64,
    total_rounds: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finished round to the totals and return its report.
    pub fn record(&mut self, result: RoundResult) -> RoundReport {
        self.total_shots += u64::from(result.shots_taken);
        self.total_rounds += 1;
        RoundReport {
            shots: result.shots_taken,
            rounds: self.total_rounds,
            total_shots: self.total_shots,
            mean: self.total_shots / u64::from(self.total_rounds),
        }
    }

    pub fn total_shots(&self) -> u64 {
        self.total_shots
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    /// Mean shots per round, rounded down. `None` before the first round.
    pub fn mean_shots_per_round(&self) -> Option<u64> {
        if self.total_rounds == 0 {
            return None;
        }
        Some(self.total_shots / u64::from(self.total_rounds))
    }

    /// Exact mean shots per round. `None` before the first round.
    pub fn mean_shots_f64(&self) -> Option<f64> {
        if self.total_rounds == 0 {
            return None;
        }
        Some(self.total_shots as f64 / f64::from(self.total_rounds))
    }
}

/// Figures shown after a round.
///
/// `Display` renders the diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct RoundReport {
    /// Shots taken in this round.
    pub shots: u32,
    /// Rounds played so far, this one included.
    pub rounds: u32,
    /// Shots over all rounds so far.
    pub total_shots: u64,
    /// `total_shots / rounds`, rounded down.
    pub mean: u64,
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shots = {}, Rounds = {}, Total = {}, Mean = {}",
            self.shots, self.rounds, self.total_shots, self.mean
        )
    }
}

/// `H(n) = 1 + 1/2 + ... + 1/n`. `H(0)` is 0.
pub fn harmonic(n: usize) -> f64 {
    (1..=n).map(|k| 1.0 / k as f64).sum()
}

/// Expected shots to knock over `cans` cans: `cans × H(cans)`.
pub fn expected_shots(cans: usize) -> f64 {
    cans as f64 * harmonic(cans)
}

/// `cans × (ln(cans) + γ)`, the asymptotic form of [`expected_shots`].
pub fn approx_expected_shots(cans: usize) -> f64 {
    if cans == 0 {
        return 0.0;
    }
    let n = cans as f64;
    n * (libm::log(n) + EULER_GAMMA)
}
