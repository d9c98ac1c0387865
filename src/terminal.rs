#![cfg(feature = "std")]

//! Terminal stand-ins for the character display and the restart button.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::lcd::{Ack, AckSource, Glyph, Lcd};

/// Draws the display into a terminal region using ANSI cursor addressing.
///
/// Row `r`, column `c` of the display maps to terminal line `r + 1`,
/// column `c + 1`. After every write the cursor is parked on the first line
/// below a `rows`-line display, so anything else written to the terminal
/// lands under the picture. Holds sleep the calling thread.
pub struct TerminalLcd<W: Write> {
    out: W,
    rows: usize,
}

impl TerminalLcd<io::Stdout> {
    pub fn stdout(rows: usize) -> Self {
        Self::new(io::stdout(), rows)
    }
}

impl<W: Write> TerminalLcd<W> {
    pub fn new(out: W, rows: usize) -> Self {
        Self { out, rows }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_at(&mut self, row: usize, col: usize, text: &str) {
        // The display has no error channel; a broken terminal just stops updating.
        let _ = write!(self.out, "\x1b[{};{}H{}", row + 1, col + 1, text);
        self.park();
    }

    fn park(&mut self) {
        let _ = write!(self.out, "\x1b[{};1H", self.rows + 1);
        let _ = self.out.flush();
    }
}

impl<W: Write> Lcd for TerminalLcd<W> {
    fn clear(&mut self) {
        let _ = write!(self.out, "\x1b[2J");
        self.park();
    }

    fn show(&mut self, row: usize, col: usize, glyph: Glyph) {
        let mut buf = [0u8; 4];
        let text = glyph.as_char().encode_utf8(&mut buf);
        self.write_at(row, col, text);
    }

    fn print(&mut self, row: usize, col: usize, text: &str) {
        self.write_at(row, col, text);
    }

    fn hold(&mut self, ms: u32) {
        if ms > 0 {
            thread::sleep(Duration::from_millis(u64::from(ms)));
        }
    }
}

/// Acknowledgments delivered over a channel.
///
/// Every message on the channel is one button press; a dropped sender
/// means the button is gone. Only presses made while waiting count: anything
/// queued before [`AckSource::wait_for_ack`] is called is discarded.
pub struct ChannelAck {
    rx: UnboundedReceiver<()>,
}

impl ChannelAck {
    pub fn new() -> (UnboundedSender<()>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }

    /// Treat every line typed on stdin as a button press.
    ///
    /// A reader thread forwards lines until stdin reaches end of file.
    pub fn stdin() -> Self {
        let (tx, ack) = Self::new();
        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                if line.is_err() || tx.send(()).is_err() {
                    break;
                }
            }
            log::debug!("stdin closed, no further restarts");
        });
        ack
    }
}

impl AckSource for ChannelAck {
    fn wait_for_ack(&mut self) -> anyhow::Result<Ack> {
        let mut stale = 0usize;
        while self.rx.try_recv().is_ok() {
            stale += 1;
        }
        if stale > 0 {
            log::debug!("discarded {} press(es) made before the prompt", stale);
        }
        Ok(match self.rx.blocking_recv() {
            Some(()) => Ack::Restart,
            None => Ack::Closed,
        })
    }
}
