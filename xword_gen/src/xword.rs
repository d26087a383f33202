use rand::{seq::SliceRandom, Rng};
use util::{
  error::{CrossgenError, CrossgenResult},
  grid::Grid,
  pos::{Diff, Pos},
};

use crate::{tile::Tile, word_bank::WordBank};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Direction {
  Across,
  Down,
}

impl Direction {
  /// Unit step along the word.
  pub const fn delta(self) -> Diff {
    match self {
      Direction::Across => Diff { x: 1, y: 0 },
      Direction::Down => Diff { x: 0, y: 1 },
    }
  }

  /// Unit step perpendicular to the word.
  pub const fn cross_delta(self) -> Diff {
    match self {
      Direction::Across => Diff { x: 0, y: 1 },
      Direction::Down => Diff { x: 1, y: 0 },
    }
  }
}

/// Where a word could go. Purely descriptive until applied with
/// [`XWord::place`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Placement {
  pub pos: Pos,
  pub dir: Direction,
}

/// A square crossword board. The solver treats each `XWord` as a value:
/// every candidate branch clones the board and mutates only its own copy, so
/// failed branches never leak letters into their caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XWord {
  grid: Grid<Tile>,
}

impl XWord {
  pub fn new(size: u32) -> CrossgenResult<Self> {
    if size == 0 {
      return Err(CrossgenError::InvalidDimension(size).into());
    }

    Ok(Self { grid: Grid::new(size, size) })
  }

  /// Parses a textual board: `_` empty, `#` wall, `A`-`Z` pre-placed
  /// letters.
  pub fn from_layout(board: &str) -> CrossgenResult<Self> {
    let (width, height, tiles) = board.lines().try_fold(
      (None, 0u32, vec![]),
      |(width, height, mut tiles), line| -> CrossgenResult<_> {
        let line = line.trim();
        tiles.extend(
          line
            .chars()
            .map(|c| match c {
              '_' => Ok(Tile::Empty),
              '#' => Ok(Tile::Wall),
              'A'..='Z' => Ok(Tile::Letter(c)),
              _ => Err(CrossgenError::Parse(format!("Unrecognized board character '{c}'")).into()),
            })
            .collect::<CrossgenResult<Vec<_>>>()?,
        );
        if let Some(width) = width {
          if line.chars().count() != width {
            return Err(
              CrossgenError::Parse(format!(
                "Board line lengths differ: {} vs {width}",
                line.chars().count()
              ))
              .into(),
            );
          }
        }

        Ok((Some(line.chars().count()), height + 1, tiles))
      },
    )?;

    let width = width.ok_or_else(|| CrossgenError::Parse("Empty board string".to_owned()))? as u32;
    if width != height {
      return Err(CrossgenError::Parse(format!("Board is not square: {width}x{height}")).into());
    }

    Ok(Self {
      grid: Grid::from_vec(tiles, width, height)?,
    })
  }

  pub fn size(&self) -> u32 {
    self.grid.width()
  }

  pub fn grid(&self) -> &Grid<Tile> {
    &self.grid
  }

  pub fn into_grid(self) -> Grid<Tile> {
    self.grid
  }

  /// Marks random cells as walls in 180-degree rotationally symmetric pairs.
  /// `density` is a probability in `[0, 1]`. Runs before any letters are
  /// placed; placement never writes walls, so the symmetry survives solving.
  pub fn seed_walls(&mut self, density: f64, rng: &mut impl Rng) {
    let size = self.size() as i32;
    for y in 0..size {
      for x in 0..=size / 2 {
        if rng.random_bool(density) {
          let pos = Pos { x, y };
          for pos in [pos, pos.rotated_180(self.grid.width(), self.grid.height())] {
            if let Some(tile) = self.grid.get_mut(pos) {
              *tile = Tile::Wall;
            }
          }
        }
      }
    }
  }

  pub fn has_letters(&self) -> bool {
    self
      .grid
      .positions()
      .any(|pos| self.grid.get(pos).is_some_and(Tile::is_letter))
  }

  /// Whether `word` may legally occupy the cells starting at `placement`.
  ///
  /// A placement is legal when the word stays on the board, overlaps no wall,
  /// matches any letter already on its cells (each match is an intersection),
  /// and introduces no letter that touches an unrelated word: the cells just
  /// before and after the word must not hold letters, and a freshly written
  /// letter must have letter-free perpendicular neighbors. With
  /// `require_intersection`, at least one cell must already match.
  pub fn can_place(&self, word: &str, placement: Placement, require_intersection: bool) -> bool {
    let len = word.chars().count() as i32;
    if len == 0 {
      return false;
    }

    let Placement { pos, dir } = placement;
    let delta = dir.delta();
    if !self.grid.in_bounds(pos) || !self.grid.in_bounds(pos + delta * (len - 1)) {
      return false;
    }

    for edge in [pos - delta, pos + delta * len] {
      if self.grid.get(edge).is_some_and(Tile::is_letter) {
        return false;
      }
    }

    let cross = dir.cross_delta();
    let mut intersects = false;
    for (idx, c) in word.chars().enumerate() {
      let tile_pos = pos + delta * idx as i32;
      match self.grid.get(tile_pos) {
        None | Some(Tile::Wall) => return false,
        Some(&Tile::Letter(existing)) => {
          if existing != c {
            return false;
          }
          intersects = true;
        }
        Some(Tile::Empty) => {
          for neighbor in [tile_pos - cross, tile_pos + cross] {
            if self.grid.get(neighbor).is_some_and(Tile::is_letter) {
              return false;
            }
          }
        }
      }
    }

    !require_intersection || intersects
  }

  /// All legal placements for `word`, in row-major order with `Across`
  /// before `Down` per cell.
  pub fn find_placements(&self, word: &str, require_intersection: bool) -> Vec<Placement> {
    self
      .grid
      .positions()
      .flat_map(|pos| {
        [Direction::Across, Direction::Down]
          .into_iter()
          .map(move |dir| Placement { pos, dir })
      })
      .filter(|&placement| self.can_place(word, placement, require_intersection))
      .collect()
  }

  /// Writes `word` onto the board. Callers validate with [`Self::can_place`]
  /// first; this only ever writes letters, never walls.
  pub fn place(&mut self, word: &str, placement: Placement) -> CrossgenResult {
    let delta = placement.dir.delta();
    for (idx, c) in word.chars().enumerate() {
      let pos = placement.pos + delta * idx as i32;
      let tile = self.grid.get_mut(pos).ok_or_else(|| {
        CrossgenError::Internal(format!("Placement of \"{word}\" runs out of bounds at {pos}"))
      })?;
      *tile = Tile::Letter(c);
    }

    Ok(())
  }

  /// Depth-first backtracking over the word list. Every remaining word is
  /// attempted at every legal placement in shuffled order; the first fully
  /// consistent assignment wins. `Unsatisfiable` when no branch works.
  pub fn solve(&self, bank: &WordBank, rng: &mut impl Rng) -> CrossgenResult<Grid<Tile>> {
    if bank.is_empty() {
      return Err(CrossgenError::NoUsableWords.into());
    }

    match self.solve_rec(bank.words(), rng)? {
      Some(solved) => Ok(solved.into_grid()),
      None => Err(CrossgenError::Unsatisfiable.into()),
    }
  }

  fn solve_rec(&self, words: &[String], rng: &mut impl Rng) -> CrossgenResult<Option<XWord>> {
    let Some((word, rest)) = words.split_first() else {
      return Ok(Some(self.clone()));
    };

    // The first word placed anywhere needs no intersection; every later word
    // must cross something already on the board.
    let mut placements = self.find_placements(word, self.has_letters());
    placements.shuffle(rng);

    for placement in placements {
      let mut branch = self.clone();
      branch.place(word, placement)?;
      if let Some(solved) = branch.solve_rec(rest, rng)? {
        return Ok(Some(solved));
      }
    }

    Ok(None)
  }

  /// One-call generation: empty board, symmetric wall seeding, solve.
  pub fn generate(
    size: u32,
    bank: &WordBank,
    wall_density: f64,
    rng: &mut impl Rng,
  ) -> CrossgenResult<Grid<Tile>> {
    let mut xword = Self::new(size)?;
    xword.seed_walls(wall_density, rng);
    xword.solve(bank, rng)
  }
}
