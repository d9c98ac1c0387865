use tincan::intro::{bounce, greet, prompt_row};
use tincan::lcd::SPECIAL_CHARS;
use tincan::{Glyph, Lcd, BALL_FRAME_MS};

/// Keeps a character buffer, like the real display would.
struct BufferLcd {
    cells: Vec<Vec<char>>,
    held_ms: u64,
}

impl BufferLcd {
    fn new(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![vec![' '; columns]; rows],
            held_ms: 0,
        }
    }

    fn row(&self, row: usize) -> String {
        self.cells[row].iter().collect()
    }
}

impl Lcd for BufferLcd {
    fn clear(&mut self) {
        for row in &mut self.cells {
            row.iter_mut().for_each(|c| *c = ' ');
        }
    }
    fn show(&mut self, row: usize, col: usize, glyph: Glyph) {
        self.cells[row][col] = glyph.as_char();
    }
    fn print(&mut self, row: usize, col: usize, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cells[row].get_mut(col + i) {
                *cell = ch;
            }
        }
    }
    fn hold(&mut self, ms: u32) {
        self.held_ms += u64::from(ms);
    }
}

#[test]
fn test_bounce_leaves_rows_blank_and_times_frames() {
    let mut lcd = BufferLcd::new(2, 16);
    lcd.print(0, 0, "Tin Can Alley");
    bounce(&mut lcd, 16);
    // columns 14..16 on the top row, all 16 on the second, 3 frames each
    assert_eq!(lcd.held_ms, (2 + 16) * 3 * u64::from(BALL_FRAME_MS));
    assert_eq!(lcd.row(0), "Tin Can Alley   ");
    assert_eq!(lcd.row(1), " ".repeat(16));
}

#[test]
fn test_greeting_scrolls_text_out() {
    let mut lcd = BufferLcd::new(2, 16);
    greet(&mut lcd, 16, "Tin Can Alley");
    assert_eq!(lcd.row(0), " ".repeat(16));
    // the special characters were wiped by the ball on its way back
    assert_eq!(lcd.row(1), " ".repeat(16));
}

#[test]
fn test_special_chars_fit_on_small_display() {
    assert_eq!(SPECIAL_CHARS.chars().count(), 14);
}

#[test]
fn test_prompt_row() {
    assert_eq!(prompt_row(2), 0);
    assert_eq!(prompt_row(4), 2);
}

#[test]
fn test_glyph_chars() {
    assert_eq!(Glyph::Can.as_char(), 'x');
    assert_eq!(Glyph::Blank.as_char(), ' ');
    assert_ne!(Glyph::Ball(0).as_char(), Glyph::Ball(2).as_char());
}
