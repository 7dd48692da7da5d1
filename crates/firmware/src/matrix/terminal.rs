//! Emulator matrix: draws frames as coloured blocks in the terminal.
//!
//! Frames arrive in chain order; they are drawn in logical orientation
//! (row 0 at the top) by looking each cell up with
//! [`platform::matrix::physical_index`], so the picture looks the way it does
//! on the board.

use std::io::Write;

use platform::config::{LED_COUNT, MATRIX_SIZE};
use platform::matrix::physical_index;
use platform::{LedStrip, RGB8};

/// Default colour gain. The catalog runs LEDs at 50/255, which is bright on
/// a WS2812 but nearly black on a monitor.
pub const DEFAULT_GAIN: u8 = 5;

/// [`LedStrip`] rendering to any writer with ANSI true-colour escapes.
pub struct TerminalMatrix<W: Write> {
    out: W,
    gain: u8,
    frames: u64,
    redraw: bool,
}

impl TerminalMatrix<std::io::Stdout> {
    /// Render to stdout, redrawing in place.
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
            gain: DEFAULT_GAIN,
            frames: 0,
            redraw: true,
        }
    }
}

impl<W: Write> TerminalMatrix<W> {
    /// Render to `out`, one frame after the other.
    pub fn new(out: W) -> Self {
        Self {
            out,
            gain: DEFAULT_GAIN,
            frames: 0,
            redraw: false,
        }
    }

    /// Set the colour gain (1 = true LED values).
    #[must_use]
    pub fn with_gain(mut self, gain: u8) -> Self {
        self.gain = gain.max(1);
        self
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The writer, for inspection.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn boost(&self, c: u8) -> u8 {
        c.saturating_mul(self.gain)
    }

    /// Write one frame as text.
    pub fn render(&mut self, frame: &[RGB8; LED_COUNT]) -> std::io::Result<()> {
        if self.redraw && self.frames > 0 {
            // Cursor back to the top of the previous frame.
            write!(self.out, "\x1b[{MATRIX_SIZE}A")?;
        }
        for row in 0..MATRIX_SIZE {
            for col in 0..MATRIX_SIZE {
                let rgb = frame
                    .get(physical_index(row, col))
                    .copied()
                    .unwrap_or_default();
                if rgb == RGB8::default() {
                    write!(self.out, "  ")?;
                } else {
                    let (r, g, b) = (self.boost(rgb.r), self.boost(rgb.g), self.boost(rgb.b));
                    write!(self.out, "\x1b[38;2;{r};{g};{b}m██\x1b[0m")?;
                }
            }
            writeln!(self.out)?;
        }
        self.out.flush()?;
        self.frames = self.frames.saturating_add(1);
        Ok(())
    }
}

impl<W: Write> LedStrip for TerminalMatrix<W> {
    type Error = std::io::Error;

    async fn write(&mut self, frame: &[RGB8; LED_COUNT]) -> Result<(), Self::Error> {
        self.render(frame)
    }
}
