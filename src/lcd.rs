//! Collaborators the game talks to: the character display, the restart
//! button and the diagnostic line sink.

use crate::stats::RoundReport;

/// Bitmaps of the three falling-ball frames, one row per byte (5×8 cells).
pub const BALL_GLYPHS: [[u8; 8]; 3] = [
    [
        0b01110, 0b10001, 0b10001, 0b01110, 0b00000, 0b00000, 0b00000, 0b00000,
    ],
    [
        0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b01110, 0b00000, 0b00000,
    ],
    [
        0b00000, 0b00000, 0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b01110,
    ],
];

/// Ball frame used to mark a shot.
pub const SHOT_FRAME: u8 = 1;

/// HD44780 ROM characters shown on the greeting screen.
pub const SPECIAL_CHARS: &str = "°αäβεμσρ√öΩüΣπ";

/// Something drawn into a single display cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// A standing can.
    Can,
    /// One of the [`BALL_GLYPHS`] frames, stored in custom character slot `frame`.
    Ball(u8),
    /// Empty cell.
    Blank,
}

impl Glyph {
    /// Closest plain character, for displays without custom glyphs.
    pub fn as_char(self) -> char {
        match self {
            Glyph::Can => 'x',
            Glyph::Ball(0) => '°',
            Glyph::Ball(1) => 'o',
            Glyph::Ball(_) => '.',
            Glyph::Blank => ' ',
        }
    }
}

/// A character display addressed by `(row, col)`.
///
/// Calls are synchronous and fire-and-forget: nothing is reported back.
pub trait Lcd {
    /// Blank the whole display.
    fn clear(&mut self);

    /// Draw `glyph` at `(row, col)`.
    fn show(&mut self, row: usize, col: usize, glyph: Glyph);

    /// Print `text` starting at `(row, col)`.
    fn print(&mut self, row: usize, col: usize, text: &str);

    /// Keep the current picture for `ms` milliseconds.
    fn hold(&mut self, ms: u32);

    /// Blank the cell at `(row, col)`.
    fn clear_cell(&mut self, row: usize, col: usize) {
        self.show(row, col, Glyph::Blank);
    }

    /// Load a custom character bitmap into `slot`.
    fn create_char(&mut self, _slot: u8, _bitmap: &[u8; 8]) {}
}

/// What the operator answered to the restart prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    /// Start another batch.
    Restart,
    /// The input is gone; no further acknowledgment will ever arrive.
    Closed,
}

/// Blocking source of operator acknowledgments.
pub trait AckSource {
    /// Block until the operator acknowledges or the source closes.
    fn wait_for_ack(&mut self) -> anyhow::Result<Ack>;
}

/// Write-only sink for one report line per completed round.
pub trait DiagnosticSink {
    fn round_completed(&mut self, report: &RoundReport);
}

/// [`Lcd`] that draws nothing and never waits.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLcd;

impl Lcd for NullLcd {
    fn clear(&mut self) {}
    fn show(&mut self, _row: usize, _col: usize, _glyph: Glyph) {}
    fn print(&mut self, _row: usize, _col: usize, _text: &str) {}
    fn hold(&mut self, _ms: u32) {}
}

/// [`DiagnosticSink`] that discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl DiagnosticSink for NullDiagnostics {
    fn round_completed(&mut self, _report: &RoundReport) {}
}

/// [`DiagnosticSink`] that writes each report line through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn round_completed(&mut self, report: &RoundReport) {
        log::info!("{}", report);
    }
}
