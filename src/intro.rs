//! Start-up greeting and the restart prompt.

use crate::{
    config::{BALL_FRAME_MS, GREETING_HOLD_MS, SCROLL_STEP_MS, SCROLL_TAIL_MS},
    lcd::{Glyph, Lcd, BALL_GLYPHS, SPECIAL_CHARS},
};

/// Column where the ball starts bouncing on the top row.
const BOUNCE_START_COL: usize = 14;

/// Load the ball frames into the display's custom character slots.
pub fn load_glyphs<L: Lcd + ?Sized>(lcd: &mut L) {
    for (slot, bitmap) in BALL_GLYPHS.iter().enumerate() {
        lcd.create_char(slot as u8, bitmap);
    }
}

/// Show `text` with a line of special characters, bounce a ball across the
/// first two rows, then scroll `text` out to the left.
pub fn greet<L: Lcd + ?Sized>(lcd: &mut L, columns: usize, text: &str) {
    lcd.clear();
    lcd.print(0, 0, text);
    lcd.print(1, 0, SPECIAL_CHARS);
    bounce(lcd, columns);
    lcd.hold(GREETING_HOLD_MS);
    scroll_out(lcd, text);
    lcd.hold(SCROLL_TAIL_MS);
}

/// Roll a ball along row 0 from [`BOUNCE_START_COL`] to the right edge, then
/// back along row 1 to column 0.
pub fn bounce<L: Lcd + ?Sized>(lcd: &mut L, columns: usize) {
    for col in BOUNCE_START_COL..columns {
        bouncing_ball(lcd, 0, col);
        lcd.clear_cell(0, col);
    }
    for col in (0..columns).rev() {
        bouncing_ball(lcd, 1, col);
        lcd.clear_cell(1, col);
    }
}

fn bouncing_ball<L: Lcd + ?Sized>(lcd: &mut L, row: usize, col: usize) {
    for frame in 0..BALL_GLYPHS.len() as u8 {
        lcd.show(row, col, Glyph::Ball(frame));
        lcd.hold(BALL_FRAME_MS);
    }
}

/// Shift `text` left one character per step until row 0 is empty.
fn scroll_out<L: Lcd + ?Sized>(lcd: &mut L, text: &str) {
    let len = text.chars().count();
    if len == 0 {
        return;
    }
    let tails = text
        .char_indices()
        .skip(1)
        .map(|(i, _)| i)
        .chain(core::iter::once(text.len()));
    for (step, start) in tails.enumerate() {
        let tail = &text[start..];
        lcd.print(0, 0, tail);
        lcd.print(0, len - step - 1, " ");
        lcd.hold(SCROLL_STEP_MS);
    }
}

/// Row of the first prompt line: below the report on 4-row displays, over it
/// on 2-row ones.
pub fn prompt_row(rows: usize) -> usize {
    if rows <= 2 {
        0
    } else {
        2
    }
}

/// Ask the operator to press the button for another batch.
pub fn prompt_restart<L: Lcd + ?Sized>(lcd: &mut L, rows: usize) {
    let row = prompt_row(rows);
    lcd.print(row, 0, "Push button to");
    lcd.print(row + 1, 0, "start new round");
}
