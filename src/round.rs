use crate::{
    common::{GridError, ShotOutcome},
    grid::CanGrid,
    lcd::{Glyph, Lcd, SHOT_FRAME},
    sampler::ShotSampler,
};

/// Progress of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Complete,
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct RoundResult {
    /// Every shot fired, repeats on fallen cans included. At least the number
    /// of cans standing when the round began, so never below `R*C` for a grid
    /// that was reset first.
    pub shots_taken: u32,
}

/// Fires at the grid until every can is down.
///
/// The engine holds the grid exclusively for the length of the round. It
/// does not reset it; a grid that is already empty completes immediately.
pub struct RoundEngine<'g, const R: usize, const C: usize> {
    grid: &'g mut CanGrid<R, C>,
    shots: u32,
    status: RoundStatus,
    shot_hold_ms: u32,
}

impl<'g, const R: usize, const C: usize> RoundEngine<'g, R, C> {
    pub fn new(grid: &'g mut CanGrid<R, C>, shot_hold_ms: u32) -> Self {
        let status = if grid.all_dead() {
            RoundStatus::Complete
        } else {
            RoundStatus::InProgress
        };
        Self {
            grid,
            shots: 0,
            status,
            shot_hold_ms,
        }
    }

    /// Shots fired so far.
    pub fn shots(&self) -> u32 {
        self.shots
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn grid(&self) -> &CanGrid<R, C> {
        self.grid
    }

    /// Fire a single shot. Does nothing once the round is complete.
    pub fn step<S, L>(&mut self, sampler: &mut S, lcd: &mut L) -> Result<RoundStatus, GridError>
    where
        S: ShotSampler<R, C> + ?Sized,
        L: Lcd + ?Sized,
    {
        if self.status == RoundStatus::Complete {
            return Ok(self.status);
        }

        let (row, col) = sampler.next_shot();
        lcd.show(row, col, Glyph::Ball(SHOT_FRAME));
        lcd.hold(self.shot_hold_ms);
        lcd.clear_cell(row, col);

        // Misses on fallen cans count too.
        self.shots += 1;
        let outcome = self.grid.hit(row, col)?;
        log::trace!(
            "shot {} at ({}, {}): {:?}, {} left",
            self.shots,
            row,
            col,
            outcome,
            self.grid.alive_count()
        );

        if outcome == ShotOutcome::NewHit && self.grid.all_dead() {
            self.status = RoundStatus::Complete;
        }
        Ok(self.status)
    }

    /// Keep firing until the round is complete.
    pub fn run<S, L>(mut self, sampler: &mut S, lcd: &mut L) -> Result<RoundResult, GridError>
    where
        S: ShotSampler<R, C> + ?Sized,
        L: Lcd + ?Sized,
    {
        while self.step(sampler, lcd)? == RoundStatus::InProgress {}
        log::debug!("round complete after {} shots", self.shots);
        Ok(RoundResult {
            shots_taken: self.shots,
        })
    }
}
