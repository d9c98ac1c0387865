//! Commonly used types and utilities for ease of import.

pub use crate::{
    CanGrid, Lcd, LcdPreset, RoundEngine, RoundResult, Session, SessionConfig, SessionStats,
    ShotSampler, UniformSampler,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ChannelAck, TerminalLcd};
