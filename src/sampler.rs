//! Shot selection.
//!
//! Shots are drawn with replacement: a sampler never looks at the grid, so it
//! keeps firing at cells whose can is already down.

use crate::common::Coord;
use rand::Rng;

/// Source of shot coordinates for an `R×C` grid.
pub trait ShotSampler<const R: usize, const C: usize> {
    /// Next coordinate to fire at. Must satisfy `row < R` and `col < C`.
    fn next_shot(&mut self) -> Coord;
}

/// Draws every coordinate independently and uniformly from the full grid.
pub struct UniformSampler<G> {
    rng: G,
}

impl<G: Rng> UniformSampler<G> {
    pub fn new(rng: G) -> Self {
        Self { rng }
    }
}

impl<G: Rng, const R: usize, const C: usize> ShotSampler<R, C> for UniformSampler<G> {
    fn next_shot(&mut self) -> Coord {
        let row = self.rng.random_range(0..R);
        let col = self.rng.random_range(0..C);
        (row, col)
    }
}

/// Replays a fixed list of shots, cycling back to the start when exhausted.
///
/// Useful for reproducing a specific round.
pub struct ScriptedSampler<'a> {
    shots: &'a [Coord],
    pos: usize,
}

impl<'a> ScriptedSampler<'a> {
    /// # Panics
    ///
    /// Panics if `shots` is empty.
    pub fn new(shots: &'a [Coord]) -> Self {
        assert!(!shots.is_empty(), "scripted sampler needs at least one shot");
        Self { shots, pos: 0 }
    }

    /// Number of shots handed out so far.
    pub fn drawn(&self) -> usize {
        self.pos
    }
}

impl<'a, const R: usize, const C: usize> ShotSampler<R, C> for ScriptedSampler<'a> {
    fn next_shot(&mut self) -> Coord {
        let shot = self.shots[self.pos % self.shots.len()];
        self.pos += 1;
        shot
    }
}
