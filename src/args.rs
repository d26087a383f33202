use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
  /// Word list file, one word per line.
  #[arg(long, default_value = "words.txt")]
  pub words: String,

  #[arg(long, default_value_t = 15)]
  pub size: u32,

  /// Probability in [0, 1] that a cell pair is seeded as walls.
  #[arg(long, default_value_t = 0.2)]
  pub density: f64,

  /// Fixes the RNG seed for reproducible output.
  #[arg(long)]
  pub seed: Option<u64>,

  /// Generation attempts before giving up; each retry reseeds the walls.
  #[arg(long, default_value_t = 1)]
  pub attempts: u32,

  /// Saves the solved grid to this file, bitcode-encoded.
  #[arg(long)]
  pub out: Option<String>,
}
