//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Mark, Outcome, BOARD_SIDE, CELL_COUNT};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Box-drawing characters for the grid frame.
///
/// The default set uses Unicode line drawing; `ascii` keeps the same
/// layout on terminals without those glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub tee_top: char,
    pub tee_bottom: char,
    pub tee_left: char,
    pub tee_right: char,
    pub cross: char,
    pub horizontal: char,
    pub vertical: char,
}

impl GlyphSet {
    pub const fn unicode() -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            tee_top: '┬',
            tee_bottom: '┴',
            tee_left: '├',
            tee_right: '┤',
            cross: '┼',
            horizontal: '─',
            vertical: '│',
        }
    }

    pub const fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            tee_top: '+',
            tee_bottom: '+',
            tee_left: '+',
            tee_right: '+',
            cross: '+',
            horizontal: '-',
            vertical: '|',
        }
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Board cell interior size in terminal columns/rows.
const CELL_W: u16 = 7;
const CELL_H: u16 = 3;

/// Grid size including the separator lines.
const GRID_W: u16 = (BOARD_SIDE as u16) * (CELL_W + 1) + 1;
const GRID_H: u16 = (BOARD_SIDE as u16) * (CELL_H + 1) + 1;

/// Full layout height: 5 header rows, the grid, 5 footer rows.
const FRAME_H: u16 = GRID_H + 10;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const CURSOR_BG: Rgb = Rgb::new(60, 60, 85);
const WIN_BG: Rgb = Rgb::new(35, 95, 55);

fn mark_color(mark: Mark) -> Rgb {
    match mark {
        Mark::X => Rgb::new(90, 140, 230),
        Mark::O => Rgb::new(230, 90, 90),
    }
}

fn mark_char(mark: Mark) -> char {
    match mark {
        Mark::X => 'X',
        Mark::O => 'O',
    }
}

/// A lightweight terminal view for the game.
pub struct GameView {
    glyphs: GlyphSet,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            glyphs: GlyphSet::unicode(),
        }
    }
}

impl GameView {
    pub fn new(glyphs: GlyphSet) -> Self {
        Self { glyphs }
    }

    /// Render a snapshot into a framebuffer.
    ///
    /// `cursor` is the cell the keyboard cursor sits on; it is only shown
    /// while the round is in progress.
    pub fn render(
        &self,
        snapshot: &GameSnapshot,
        cursor: usize,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let top = viewport.height.saturating_sub(FRAME_H) / 2;

        self.draw_header(&mut fb, snapshot, top);
        self.draw_grid(&mut fb, snapshot, cursor, top + 5);
        self.draw_footer(&mut fb, snapshot, top + 5 + GRID_H);

        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snapshot: &GameSnapshot, top: u16) {
        let title = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            ..CellStyle::default()
        };
        let subtitle = CellStyle {
            dim: true,
            ..CellStyle::default()
        };
        fb.put_str_centered(top, "TIC TAC TOE", title);
        fb.put_str_centered(top + 1, "A CLASSIC TWO-PLAYER STRATEGY GAME", subtitle);

        // "PLAYER X     PLAYER O", the mark to move highlighted.
        let over = snapshot.outcome.is_terminal();
        let x = fb.width().saturating_sub(21) / 2;
        self.draw_player_tag(fb, x, top + 3, Mark::X, !over && snapshot.turn == Mark::X);
        self.draw_player_tag(fb, x + 13, top + 3, Mark::O, !over && snapshot.turn == Mark::O);
    }

    fn draw_player_tag(&self, fb: &mut FrameBuffer, x: u16, y: u16, mark: Mark, active: bool) {
        let style = if active {
            CellStyle {
                fg: mark_color(mark),
                bold: true,
                ..CellStyle::default()
            }
        } else {
            CellStyle {
                dim: true,
                ..CellStyle::default()
            }
        };
        fb.put_str(x, y, &format!("PLAYER {}", mark.as_str()), style);
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, snapshot: &GameSnapshot, cursor: usize, top: u16) {
        let left = fb.width().saturating_sub(GRID_W) / 2;
        let frame = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: BOARD_BG,
            ..CellStyle::default()
        };

        for y in 0..GRID_H {
            for x in 0..GRID_W {
                let on_row = y % (CELL_H + 1) == 0;
                let on_col = x % (CELL_W + 1) == 0;
                let ch = match (on_row, on_col) {
                    (true, true) => self.junction(x, y),
                    (true, false) => self.glyphs.horizontal,
                    (false, true) => self.glyphs.vertical,
                    (false, false) => ' ',
                };
                fb.put_char(left + x, top + y, ch, frame);
            }
        }

        for index in 0..CELL_COUNT {
            self.draw_cell(fb, snapshot, cursor, left, top, index);
        }
    }

    fn junction(&self, x: u16, y: u16) -> char {
        let g = &self.glyphs;
        match (y == 0, y == GRID_H - 1, x == 0, x == GRID_W - 1) {
            (true, _, true, _) => g.top_left,
            (true, _, _, true) => g.top_right,
            (true, _, _, _) => g.tee_top,
            (_, true, true, _) => g.bottom_left,
            (_, true, _, true) => g.bottom_right,
            (_, true, _, _) => g.tee_bottom,
            (_, _, true, _) => g.tee_left,
            (_, _, _, true) => g.tee_right,
            _ => g.cross,
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        snapshot: &GameSnapshot,
        cursor: usize,
        left: u16,
        top: u16,
        index: usize,
    ) {
        let row = (index / BOARD_SIDE) as u16;
        let col = (index % BOARD_SIDE) as u16;
        let x = left + 1 + col * (CELL_W + 1);
        let y = top + 1 + row * (CELL_H + 1);

        let over = snapshot.outcome.is_terminal();
        let winning = snapshot.win_line.is_some_and(|line| line.contains(index));

        let bg = if winning {
            WIN_BG
        } else if !over && index == cursor {
            CURSOR_BG
        } else {
            BOARD_BG
        };
        fb.fill_rect(
            x,
            y,
            CELL_W,
            CELL_H,
            ' ',
            CellStyle {
                bg,
                ..CellStyle::default()
            },
        );

        let center_x = x + CELL_W / 2;
        let center_y = y + CELL_H / 2;

        match snapshot.board[index] {
            Some(mark) => {
                let fresh = snapshot.last_placed == Some(index);
                let style = CellStyle {
                    fg: mark_color(mark),
                    bg,
                    bold: fresh || winning,
                    dim: over && !winning,
                };
                fb.put_char(center_x, center_y, mark_char(mark), style);
            }
            None if !over => {
                // The label doubles as the digit key that plays the cell.
                let label = char::from(b'1' + index as u8);
                let style = CellStyle {
                    fg: Rgb::new(90, 90, 100),
                    bg,
                    bold: false,
                    dim: true,
                };
                fb.put_char(center_x, center_y, label, style);
            }
            None => {}
        }
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, snapshot: &GameSnapshot, top: u16) {
        let (status, style) = match snapshot.outcome {
            Outcome::InProgress => (
                format!("NEXT PLAYER {}", snapshot.turn.as_str()),
                CellStyle::default(),
            ),
            Outcome::Won(mark) => (
                format!("WINNER PLAYER {}", mark.as_str()),
                CellStyle {
                    fg: mark_color(mark),
                    bold: true,
                    ..CellStyle::default()
                },
            ),
            Outcome::Draw => (
                "GAME ENDED IN A DRAW".to_string(),
                CellStyle {
                    bold: true,
                    ..CellStyle::default()
                },
            ),
        };
        fb.put_str_centered(top + 1, &status, style);

        let scores = snapshot.scores;
        let tally = format!(
            "X {}   DRAWS {}   O {}   ROUND {}",
            scores.wins_x,
            scores.draws,
            scores.wins_o,
            snapshot.round + 1
        );
        fb.put_str_centered(top + 2, &tally, CellStyle::default());

        let help = "1-9 PLAY  ARROWS MOVE  ENTER PLACE  N NEW ROUND  R RESET  Q QUIT";
        fb.put_str_centered(
            top + 4,
            help,
            CellStyle {
                dim: true,
                ..CellStyle::default()
            },
        );
    }
}
