//! Text frames of a [`Board`].
use crate::Board;
use std::fmt::{self, Write};

pub const CORNER: char = '+';
pub const HORIZONTAL: char = '-';
pub const VERTICAL: char = '|';
pub const ALIVE: char = '*';
pub const DEAD: char = ' ';

fn write_border(f: &mut impl Write, width: usize) -> fmt::Result {
    f.write_char(CORNER)?;
    for _ in 0..width {
        f.write_char(HORIZONTAL)?;
    }
    f.write_char(CORNER)?;
    f.write_char('\n')
}

/// Writes the bordered frame of `board`, each line terminated by `\n`:
///
/// ```text
/// +---+
/// |   |
/// |***|
/// |   |
/// +---+
/// ```
pub fn write_frame(f: &mut impl Write, board: &Board) -> fmt::Result {
    write_border(f, board.width())?;
    for i in 0..board.height() {
        f.write_char(VERTICAL)?;
        for j in 0..board.width() {
            f.write_char(if board.is_alive(i, j) { ALIVE } else { DEAD })?;
        }
        f.write_char(VERTICAL)?;
        f.write_char('\n')?;
    }
    write_border(f, board.width())
}

/// Renders `board` into a freshly allocated string.
pub fn render(board: &Board) -> String {
    let mut frame = String::with_capacity((board.height() + 2) * (board.width() + 3));
    write_frame(&mut frame, board).expect("Writing into a String never fails");
    frame
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_frame(f, self)
    }
}
