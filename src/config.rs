//! Build-time configuration of the shooting gallery.

/// Rows of the default character display.
pub const LCD_ROWS: usize = 4;
/// Columns of the default character display.
pub const LCD_COLUMNS: usize = 20;

/// Rounds played per batch before the operator is asked to restart.
pub const NBR_OF_ROUNDS: u32 = 10;

/// How long a shot marker stays visible.
pub const SHOT_HOLD_MS: u32 = 250;
/// How long the per-round report stays on the display.
pub const REPORT_HOLD_MS: u32 = 4000;

pub const GREETING: &str = "Tin Can Alley";
pub const GREETING_HOLD_MS: u32 = 2000;
pub const SCROLL_STEP_MS: u32 = 150;
pub const SCROLL_TAIL_MS: u32 = 500;
pub const BALL_FRAME_MS: u32 = 250;

/// Supported display geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum LcdPreset {
    /// 4 rows by 20 columns, 80 cans.
    #[cfg_attr(feature = "std", value(name = "4x20"))]
    Lcd4x20,
    /// 2 rows by 16 columns, 32 cans.
    #[cfg_attr(feature = "std", value(name = "2x16"))]
    Lcd2x16,
}

impl LcdPreset {
    /// `(rows, columns)` of the preset.
    pub const fn dimensions(self) -> (usize, usize) {
        match self {
            LcdPreset::Lcd4x20 => (4, 20),
            LcdPreset::Lcd2x16 => (2, 16),
        }
    }
}

impl Default for LcdPreset {
    fn default() -> Self {
        LcdPreset::Lcd4x20
    }
}

/// Session parameters, fixed once at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub rounds_per_batch: u32,
    pub shot_hold_ms: u32,
    pub report_hold_ms: u32,
}

impl SessionConfig {
    /// Same batch size with every presentation hold set to zero.
    pub fn without_holds(self) -> Self {
        Self {
            shot_hold_ms: 0,
            report_hold_ms: 0,
            ..self
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rounds_per_batch: NBR_OF_ROUNDS,
            shot_hold_ms: SHOT_HOLD_MS,
            report_hold_ms: REPORT_HOLD_MS,
        }
    }
}
