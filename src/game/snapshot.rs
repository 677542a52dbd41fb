//! Text rendering of the board.
//!
//! One line per board row, highest `y` first. An unclaimed cell is `.`, a
//! cell owned by players 1-9 is that single digit, and any larger id is
//! written in decimal with one space on each side so that neighbouring ids
//! stay readable.

use std::fmt;

use super::GammaGame;
use crate::core::PlayerId;

const UNCLAIMED: char = '.';

/// Rendered width of one cell.
fn cell_len(owner: Option<PlayerId>) -> usize {
    match owner {
        None => 1,
        Some(p) if p.get() <= 9 => 1,
        Some(p) => p.get().ilog10() as usize + 3,
    }
}

fn push_cell(out: &mut String, owner: Option<PlayerId>) {
    match owner {
        None => out.push(UNCLAIMED),
        Some(p) if p.get() <= 9 => out.push_str(&p.get().to_string()),
        Some(p) => {
            out.push(' ');
            out.push_str(&p.get().to_string());
            out.push(' ');
        }
    }
}

impl GammaGame {
    fn row_range(&self, y: u32) -> std::ops::Range<usize> {
        let width = self.config.width as usize;
        let start = y as usize * width;
        start..start + width
    }

    fn render_row(&self, y: u32, out: &mut String) {
        for idx in self.row_range(y) {
            push_cell(out, self.grid.owner(idx));
        }
    }

    /// Exact byte length of [`GammaGame::snapshot`].
    fn snapshot_len(&self) -> usize {
        let cells: usize = (0..self.grid.len())
            .map(|idx| cell_len(self.grid.owner(idx)))
            .sum();
        cells + self.config.height as usize
    }

    /// The whole board as text, each row terminated by `\n`.
    #[must_use]
    pub fn snapshot(&self) -> String {
        let mut out = String::with_capacity(self.snapshot_len());
        for y in (0..self.config.height).rev() {
            self.render_row(y, &mut out);
            out.push('\n');
        }
        out
    }

    /// The board one row at a time, top row first, without line endings.
    pub fn snapshot_rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.config.height).rev().map(move |y| {
            let len = self
                .row_range(y)
                .map(|idx| cell_len(self.grid.owner(idx)))
                .sum();
            let mut row = String::with_capacity(len);
            self.render_row(y, &mut row);
            row
        })
    }
}

impl fmt::Display for GammaGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.snapshot_rows() {
            f.write_str(&row)?;
            f.write_str("\n")?;
        }
        Ok(())
    }
}
