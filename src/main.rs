#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;

use std::{
  fs::File,
  io::{BufRead, BufReader, Write},
};

use args::Args;
use clap::Parser;
use itertools::Itertools;
use rand::{rngs::StdRng, SeedableRng};
use util::{
  bitcode,
  error::{CrossgenError, CrossgenResult},
  grid::Grid,
  time::time_fn,
};
use xword_gen::{tile::Tile, word_bank::WordBank, xword::XWord};

fn read_words(path: &str) -> CrossgenResult<Vec<String>> {
  Ok(
    BufReader::new(File::open(path)?)
      .lines()
      .collect::<Result<Vec<_>, _>>()?,
  )
}

fn unsatisfiable(err: &(dyn std::error::Error + 'static)) -> bool {
  matches!(err.downcast_ref(), Some(CrossgenError::Unsatisfiable))
}

fn generate(args: &Args) -> CrossgenResult<Grid<Tile>> {
  if !(0.0..=1.0).contains(&args.density) {
    return Err(CrossgenError::Parse(format!("Wall density {} not in [0, 1]", args.density)).into());
  }

  let mut rng = match args.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_os_rng(),
  };

  let bank = WordBank::from_words(read_words(&args.words)?, args.size);
  if !bank.dropped().is_empty() {
    println!(
      "Filtered out {} words that do not fit a {}x{} grid: {}",
      bank.dropped().len(),
      args.size,
      args.size,
      bank.dropped().iter().join(", ")
    );
  }
  if bank.is_empty() {
    return Err(CrossgenError::NoUsableWords.into());
  }

  for attempt in 1..=args.attempts {
    let mut xword = XWord::new(args.size)?;
    xword.seed_walls(args.density, &mut rng);
    println!("--- Attempt {attempt} ---");
    println!("{}", xword.grid());

    let (time, result) = time_fn(|| xword.solve(&bank, &mut rng));
    match result {
      Ok(grid) => {
        println!("Solved in {}s", time.as_secs_f32());
        return Ok(grid);
      }
      Err(err) if unsatisfiable(err.as_ref()) => {
        println!(
          "No arrangement found after {}s; retrying with a fresh wall layout",
          time.as_secs_f32()
        );
      }
      Err(err) => return Err(err),
    }
  }

  Err(CrossgenError::Unsatisfiable.into())
}

fn main() -> CrossgenResult {
  let args = Args::parse();
  let grid = generate(&args)?;

  println!("--- Final Grid ---");
  println!("{grid}");

  if let Some(out) = &args.out {
    let encoded = bitcode::encode(&grid);
    let mut file = File::create(out)?;
    file.write_all(&encoded)?;
  }

  Ok(())
}
