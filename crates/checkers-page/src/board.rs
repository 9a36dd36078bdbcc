//! Board addressing and the full-board scan.

use crate::glyph::Glyph;
use checkers_interfaces::{ApiError, PageDriver};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Cells per side of the board.
pub const BOARD_DIM: u8 = 8;

/// Total number of addressable cells.
pub const CELL_COUNT: usize = (BOARD_DIM as usize) * (BOARD_DIM as usize);

/// A logical board cell, addressable on the page by its stable name
/// attribute `space<col><row>` (both digits in `0..8`). `space62` is the
/// cell in column 6, row 2; rows grow toward the computer's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Space {
    col: u8,
    row: u8,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid space name: {0:?}")]
pub struct SpaceParseError(String);

impl Space {
    pub fn new(col: u8, row: u8) -> Option<Space> {
        (col < BOARD_DIM && row < BOARD_DIM).then_some(Space { col, row })
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn row(self) -> u8 {
        self.row
    }

    /// The page name attribute, e.g. `space62`.
    pub fn name(self) -> String {
        format!("space{}{}", self.col, self.row)
    }

    /// CSS selector resolving to this cell's image element.
    pub fn selector(self) -> String {
        format!(r#"[name="space{}{}"]"#, self.col, self.row)
    }

    /// All cells in fixed scan order, `space00` first.
    pub fn all() -> impl Iterator<Item = Space> {
        (0..BOARD_DIM)
            .flat_map(|row| (0..BOARD_DIM).map(move |col| Space { col, row }))
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "space{}{}", self.col, self.row)
    }
}

impl FromStr for Space {
    type Err = SpaceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SpaceParseError(s.to_string());
        let digits = s.strip_prefix("space").ok_or_else(err)?;
        let mut chars = digits.chars();
        let (col, row) = match (chars.next(), chars.next(), chars.next()) {
            (Some(c), Some(r), None) => (
                c.to_digit(10).ok_or_else(err)? as u8,
                r.to_digit(10).ok_or_else(err)? as u8,
            ),
            _ => return Err(err()),
        };
        Space::new(col, row).ok_or_else(err)
    }
}

/// Tallies from one full-board pass. Every cell lands in exactly one of the
/// occupancy buckets; `animating` and `kings` tally piece attributes on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardScan {
    pub user: usize,
    pub computer: usize,
    pub empty: usize,
    pub unknown: usize,
    pub animating: usize,
    pub kings: usize,
}

impl BoardScan {
    pub fn record(&mut self, glyph: Glyph) {
        if glyph.is_user_piece() {
            self.user += 1;
        } else if glyph.is_computer_piece() {
            self.computer += 1;
        } else if glyph.is_empty() {
            self.empty += 1;
        } else {
            self.unknown += 1;
        }
        if glyph.is_animating() {
            self.animating += 1;
        }
        if glyph.is_king() {
            self.kings += 1;
        }
    }

    /// A settled board has no piece in the animating visual state. Only a
    /// settled scan is safe to assert against.
    pub fn settled(&self) -> bool {
        self.animating == 0
    }

    /// Cells seen by this scan.
    pub fn cells(&self) -> usize {
        self.user + self.computer + self.empty + self.unknown
    }
}

/// Read-only view of the rendered board through a driver.
#[derive(Debug)]
pub struct BoardReader<'a, D: PageDriver> {
    driver: &'a D,
}

impl<'a, D: PageDriver> BoardReader<'a, D> {
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    /// Reads the glyph currently rendered at one cell. An absent element or
    /// `src` attribute reads as [`Glyph::Unknown`]; only transport failures
    /// are errors.
    pub async fn glyph_at(&self, space: Space) -> Result<Glyph, ApiError> {
        let src = self.driver.attribute(&space.selector(), "src").await?;
        Ok(match src {
            Some(src) => {
                let glyph = Glyph::classify(&src);
                if glyph == Glyph::Unknown {
                    log::warn!("unrecognized glyph {:?} at {}", src, space);
                }
                glyph
            }
            None => Glyph::Unknown,
        })
    }

    /// One fresh pass over all 64 cells. Callers polling for settlement
    /// re-run the whole scan every round; nothing is cached here because
    /// the board is exactly the thing that is changing.
    pub async fn scan(&self) -> Result<BoardScan, ApiError> {
        let mut tally = BoardScan::default();
        for space in Space::all() {
            tally.record(self.glyph_at(space).await?);
        }
        log::debug!("board scan: {:?}", tally);
        Ok(tally)
    }
}
