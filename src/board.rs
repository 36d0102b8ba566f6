use crate::error::InvalidStateError;

use smallvec::SmallVec;
use std::fmt;

pub const MIN_SIDE: usize = 2;
pub const MAX_SIDE: usize = 15;
pub const DEFAULT_SIDE: usize = 3;
pub const BLANK: u8 = 0;

/// Tiles stay inline up to the 4x4 board.
pub type Tiles = SmallVec<[u8; 16]>;

/// One arrangement of an N×N sliding puzzle, stored row by row.
///
/// The tiles are always a permutation of `0..N*N`, with `0` as the blank.
/// A board never changes after construction; sliding a tile yields a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    side: u8,
    tiles: Tiles,
}

impl Board {
    pub fn new<I>(side: usize, tiles: I) -> Result<Self, InvalidStateError>
    where
        I: IntoIterator,
        I::Item: Into<u64>,
    {
        if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
            return Err(InvalidStateError::UnsupportedSide(side));
        }
        let limit = side * side;
        let mut seen = [false; MAX_SIDE * MAX_SIDE];
        let mut cells = Tiles::with_capacity(limit);
        for tile in tiles {
            let tile = tile.into();
            if tile >= limit as u64 {
                return Err(InvalidStateError::OutOfRange { tile, limit });
            }
            let tile = tile as u8;
            if seen[tile as usize] {
                return Err(InvalidStateError::Duplicate(tile));
            }
            seen[tile as usize] = true;
            cells.push(tile);
        }
        if cells.len() != limit {
            return Err(InvalidStateError::WrongLength {
                expected: limit,
                found: cells.len(),
            });
        }
        Ok(Self {
            side: side as u8,
            tiles: cells,
        })
    }

    /// Builds a board whose side is inferred from the number of tiles.
    pub fn from_tiles<I>(tiles: I) -> Result<Self, InvalidStateError>
    where
        I: IntoIterator,
        I::Item: Into<u64>,
    {
        let tiles: Vec<u64> = tiles.into_iter().map(Into::into).collect();
        let side = side_for(tiles.len())?;
        Self::new(side, tiles)
    }

    /// The solved arrangement: `1, 2, …, N*N-1` followed by the blank.
    pub fn goal(side: usize) -> Result<Self, InvalidStateError> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
            return Err(InvalidStateError::UnsupportedSide(side));
        }
        let count = (side * side) as u64;
        Self::new(side, (1..count).chain([0]))
    }

    pub(crate) fn from_raw(side: u8, tiles: Tiles) -> Self {
        debug_assert_eq!(tiles.len(), side as usize * side as usize);
        Self { side, tiles }
    }

    pub fn side(&self) -> usize {
        self.side as usize
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.side() || col >= self.side() {
            return None;
        }
        self.tiles.get(row * self.side() + col).copied()
    }

    pub fn blank_position(&self) -> usize {
        self.tiles
            .iter()
            .position(|&tile| tile == BLANK)
            .unwrap_or_default()
    }

    /// `(row, col)` of the blank.
    pub fn blank_coords(&self) -> (usize, usize) {
        let idx = self.blank_position();
        (idx / self.side(), idx % self.side())
    }

    /// Parses whitespace and/or comma separated integers, inferring the side.
    pub fn parse(content: &str) -> Result<Self, InvalidStateError> {
        let tiles = parse_tiles(content)?;
        let side = side_for(tiles.len())?;
        Self::new(side, tiles)
    }

    pub fn parse_with_side(content: &str, side: usize) -> Result<Self, InvalidStateError> {
        Self::new(side, parse_tiles(content)?)
    }

    pub fn to_pretty_string(&self) -> String {
        let side = self.side();
        let width = (self.tiles.len() - 1).to_string().len();
        let mut output = String::new();
        for (i, row) in self.tiles.chunks(side).enumerate() {
            if i > 0 {
                output.push('\n');
            }
            let cells: Vec<String> = row
                .iter()
                .map(|&tile| match tile {
                    BLANK => format!("{:>width$}", ""),
                    _ => format!("{tile:>width$}"),
                })
                .collect();
            output.push_str(&cells.join(" "));
        }
        output
    }
}

impl Default for Board {
    fn default() -> Self {
        let side = DEFAULT_SIDE as u8;
        let count = side * side;
        Self::from_raw(side, (1..count).chain([BLANK]).collect())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pretty_string())
    }
}

fn parse_tiles(content: &str) -> Result<Vec<u64>, InvalidStateError> {
    content
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u64>()
                .map_err(|_| InvalidStateError::Parse(s.to_string()))
        })
        .collect()
}

fn side_for(count: usize) -> Result<usize, InvalidStateError> {
    let side = (MIN_SIDE..=MAX_SIDE)
        .find(|side| side * side == count)
        .ok_or(InvalidStateError::NotSquare(count))?;
    Ok(side)
}
