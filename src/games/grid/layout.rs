//! Text maze layouts.
//!
//! | Tile | Meaning |
//! |------|---------|
//! | `%`  | wall |
//! | `.`  | food |
//! | `o`  | capsule |
//! | `P`  | protagonist start |
//! | `G`  | ghost start |
//! | ` `  | empty floor |
//!
//! `x` grows to the right, `y` grows downward. Cells outside the grid
//! count as walls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::AgentId;
use crate::rules::Position;

/// Most ghosts a layout may hold; every ghost needs an `AgentId`.
pub const MAX_GHOSTS: usize = AgentId::MAX_AGENTS - 1;

/// Errors raised while parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Layout is empty")]
    Empty,

    #[error("Line {line} has {found} tiles, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown tile {tile:?} at line {line}, column {column}")]
    UnknownTile { tile: char, line: usize, column: usize },

    #[error("Layout has no protagonist start")]
    MissingProtagonist,

    #[error("Second protagonist start at line {line}, column {column}")]
    DuplicateProtagonist { line: usize, column: usize },

    #[error("Layout has {count} ghosts, at most {max} are supported")]
    TooManyGhosts { count: usize, max: usize },
}

/// Static maze: walls plus starting positions.
///
/// Serializes as its text form and is re-parsed on deserialization, so a
/// deserialized layout satisfies the same checks as a parsed one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Layout {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    food: Vec<Position>,
    capsules: Vec<Position>,
    protagonist: Position,
    ghosts: Vec<Position>,
}

impl Layout {
    /// Columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Check for a wall; out-of-bounds cells are walls.
    #[must_use]
    pub fn is_wall(&self, pos: Position) -> bool {
        if pos.x < 0 || pos.y < 0 {
            return true;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= self.width || y >= self.height {
            return true;
        }
        self.walls[y * self.width + x]
    }

    /// Initial food positions, row-major.
    #[must_use]
    pub fn food(&self) -> &[Position] {
        &self.food
    }

    /// Initial capsule positions, row-major.
    #[must_use]
    pub fn capsules(&self) -> &[Position] {
        &self.capsules
    }

    /// Protagonist start.
    #[must_use]
    pub fn protagonist(&self) -> Position {
        self.protagonist
    }

    /// Ghost starts, row-major. Ghost `i` is agent `i + 1`.
    #[must_use]
    pub fn ghosts(&self) -> &[Position] {
        &self.ghosts
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(LayoutError::Empty);
        };

        let width = first.chars().count();
        let height = lines.len();
        let mut walls = Vec::with_capacity(width * height);
        let mut food = Vec::new();
        let mut capsules = Vec::new();
        let mut protagonist = None;
        let mut ghosts = Vec::new();

        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::Ragged {
                    line: y + 1,
                    expected: width,
                    found,
                });
            }

            for (x, tile) in line.chars().enumerate() {
                let pos = Position::new(x as i32, y as i32);
                walls.push(tile == '%');
                match tile {
                    '%' | ' ' => {}
                    '.' => food.push(pos),
                    'o' => capsules.push(pos),
                    'G' => ghosts.push(pos),
                    'P' => {
                        if protagonist.is_some() {
                            return Err(LayoutError::DuplicateProtagonist {
                                line: y + 1,
                                column: x + 1,
                            });
                        }
                        protagonist = Some(pos);
                    }
                    _ => {
                        return Err(LayoutError::UnknownTile {
                            tile,
                            line: y + 1,
                            column: x + 1,
                        })
                    }
                }
            }
        }

        if ghosts.len() > MAX_GHOSTS {
            return Err(LayoutError::TooManyGhosts {
                count: ghosts.len(),
                max: MAX_GHOSTS,
            });
        }

        Ok(Self {
            width,
            height,
            walls,
            food,
            capsules,
            protagonist: protagonist.ok_or(LayoutError::MissingProtagonist)?,
            ghosts,
        })
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tiles: Vec<char> = self
            .walls
            .iter()
            .map(|&wall| if wall { '%' } else { ' ' })
            .collect();

        let mut place = |pos: &Position, tile: char| {
            tiles[pos.y as usize * self.width + pos.x as usize] = tile;
        };
        self.food.iter().for_each(|pos| place(pos, '.'));
        self.capsules.iter().for_each(|pos| place(pos, 'o'));
        self.ghosts.iter().for_each(|pos| place(pos, 'G'));
        place(&self.protagonist, 'P');

        for (y, row) in tiles.chunks(self.width).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            row.iter().try_for_each(|tile| write!(f, "{tile}"))?;
        }
        Ok(())
    }
}

impl From<Layout> for String {
    fn from(layout: Layout) -> Self {
        layout.to_string()
    }
}

impl TryFrom<String> for Layout {
    type Error = LayoutError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}
