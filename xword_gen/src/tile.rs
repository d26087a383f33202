use std::fmt::Display;

use bitcode::{Decode, Encode};

/// One cell of the crossword board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub enum Tile {
  #[default]
  Empty,
  Wall,
  Letter(char),
}

impl Tile {
  pub fn is_letter(&self) -> bool {
    matches!(self, Tile::Letter(_))
  }

  pub fn is_wall(&self) -> bool {
    matches!(self, Tile::Wall)
  }

  pub fn letter(&self) -> Option<char> {
    match self {
      Tile::Letter(c) => Some(*c),
      _ => None,
    }
  }
}

impl Display for Tile {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Tile::Empty => '_',
        Tile::Wall => '#',
        Tile::Letter(c) => *c,
      }
    )
  }
}
