use alloc::format;

use crate::{
    common::GridError,
    config::{SessionConfig, GREETING},
    grid::CanGrid,
    intro,
    lcd::{Ack, AckSource, DiagnosticSink, Glyph, Lcd},
    round::RoundEngine,
    sampler::ShotSampler,
    stats::{expected_shots, RoundReport, SessionStats},
};

/// Figures for one batch of rounds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BatchSummary {
    pub rows: usize,
    pub columns: usize,
    pub rounds: u32,
    pub total_shots: u64,
    pub mean_shots: f64,
    /// Coupon-collector expectation for this grid.
    pub expected_shots: f64,
    pub min_shots: u32,
    pub max_shots: u32,
}

/// Plays batches of rounds on an `R×C` grid and keeps the running totals.
pub struct Session<L, D, const R: usize, const C: usize> {
    grid: CanGrid<R, C>,
    stats: SessionStats,
    config: SessionConfig,
    lcd: L,
    diagnostics: D,
}

impl<L, D, const R: usize, const C: usize> Session<L, D, R, C>
where
    L: Lcd,
    D: DiagnosticSink,
{
    pub fn new(config: SessionConfig, lcd: L, diagnostics: D) -> Result<Self, GridError> {
        Ok(Self {
            grid: CanGrid::new()?,
            stats: SessionStats::new(),
            config,
            lcd,
            diagnostics,
        })
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn lcd(&self) -> &L {
        &self.lcd
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (SessionStats, L, D) {
        (self.stats, self.lcd, self.diagnostics)
    }

    /// Load the custom glyphs and play the greeting animation.
    pub fn greet(&mut self) {
        intro::load_glyphs(&mut self.lcd);
        intro::greet(&mut self.lcd, C, GREETING);
    }

    /// Set up the cans, shoot until they are all down and report the round.
    pub fn play_round<S>(&mut self, sampler: &mut S) -> anyhow::Result<RoundReport>
    where
        S: ShotSampler<R, C> + ?Sized,
    {
        self.place_cans();
        let result = RoundEngine::new(&mut self.grid, self.config.shot_hold_ms)
            .run(sampler, &mut self.lcd)
            .map_err(|e| anyhow::anyhow!(e))?;
        let report = self.stats.record(result);
        self.show_report(&report);
        self.diagnostics.round_completed(&report);
        self.lcd.hold(self.config.report_hold_ms);
        Ok(report)
    }

    /// Play `rounds_per_batch` rounds back to back.
    pub fn run_batch<S>(&mut self, sampler: &mut S) -> anyhow::Result<BatchSummary>
    where
        S: ShotSampler<R, C> + ?Sized,
    {
        let rounds = self.config.rounds_per_batch;
        let mut total_shots = 0u64;
        let mut min_shots = u32::MAX;
        let mut max_shots = 0u32;
        for _ in 0..rounds {
            let report = self.play_round(sampler)?;
            total_shots += u64::from(report.shots);
            min_shots = min_shots.min(report.shots);
            max_shots = max_shots.max(report.shots);
        }
        if rounds == 0 {
            min_shots = 0;
        }
        let mean_shots = if rounds == 0 {
            0.0
        } else {
            total_shots as f64 / f64::from(rounds)
        };
        log::debug!(
            "batch of {} rounds done: mean {:.1} shots, range {}..={}",
            rounds,
            mean_shots,
            min_shots,
            max_shots
        );
        Ok(BatchSummary {
            rows: R,
            columns: C,
            rounds,
            total_shots,
            mean_shots,
            expected_shots: expected_shots(R * C),
            min_shots,
            max_shots,
        })
    }

    /// Play batches until the acknowledgment source closes.
    ///
    /// After each batch the restart prompt is shown and the session blocks
    /// on `ack`.
    pub fn run<S, A>(&mut self, sampler: &mut S, ack: &mut A) -> anyhow::Result<()>
    where
        S: ShotSampler<R, C> + ?Sized,
        A: AckSource + ?Sized,
    {
        loop {
            self.run_batch(sampler)?;
            intro::prompt_restart(&mut self.lcd, R);
            match ack.wait_for_ack()? {
                Ack::Restart => log::debug!("restart acknowledged"),
                Ack::Closed => {
                    log::info!(
                        "input closed after {} rounds, {} shots",
                        self.stats.total_rounds(),
                        self.stats.total_shots()
                    );
                    return Ok(());
                }
            }
        }
    }

    fn place_cans(&mut self) {
        self.grid.reset();
        for (row, col) in self.grid.alive_cells() {
            self.lcd.show(row, col, Glyph::Can);
        }
    }

    fn show_report(&mut self, report: &RoundReport) {
        self.lcd.clear();
        self.lcd
            .print(0, 0, &format!("S: {:5} R: {:3}", report.shots, report.rounds));
        self.lcd.print(
            1,
            0,
            &format!("\u{03a3}: {:5} M: {:3}", report.total_shots, report.mean),
        );
    }
}
