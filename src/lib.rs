#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod common;
mod config;
mod grid;
pub mod intro;
pub mod lcd;
#[cfg(feature = "std")]
mod logging;
mod round;
mod sampler;
mod session;
pub mod stats;
#[cfg(feature = "std")]
pub mod terminal;
pub mod prelude;

pub use bitboard::{BitBoard, BitBoardError};
pub use common::*;
pub use config::*;
pub use grid::*;
pub use lcd::{Ack, AckSource, DiagnosticSink, Glyph, Lcd, LogDiagnostics, NullDiagnostics, NullLcd};
#[cfg(feature = "std")]
pub use logging::{
    init_logging, level_from, LOG_ENV, PLAY_LOG_DEFAULT, SIMULATE_LOG_DEFAULT,
};
pub use round::*;
pub use sampler::*;
pub use session::*;
pub use stats::{RoundReport, SessionStats};
#[cfg(feature = "std")]
pub use terminal::{ChannelAck, TerminalLcd};
