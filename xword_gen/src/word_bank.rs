use std::cmp::Reverse;

use itertools::Itertools;

/// The word list as the solver consumes it: trimmed, uppercased, stripped of
/// words that cannot fit the grid, and stably sorted longest-first so the
/// hardest words are placed while the board is still open.
#[derive(Clone, Debug)]
pub struct WordBank {
  words: Vec<String>,
  dropped: Vec<String>,
}

impl WordBank {
  pub fn from_words(words: impl IntoIterator<Item = String>, max_len: u32) -> Self {
    let (kept, dropped): (Vec<_>, Vec<_>) = words
      .into_iter()
      .map(|word| word.trim().to_uppercase())
      .filter(|word| !word.is_empty())
      .partition(|word| word.chars().count() as u32 <= max_len);

    Self {
      words: kept
        .into_iter()
        .sorted_by_key(|word| Reverse(word.chars().count()))
        .collect(),
      dropped,
    }
  }

  pub fn words(&self) -> &[String] {
    &self.words
  }

  /// Words rejected by the length pre-filter, in input order.
  pub fn dropped(&self) -> &[String] {
    &self.dropped
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;

  use super::WordBank;

  fn bank_of(words: &[&str], max_len: u32) -> WordBank {
    WordBank::from_words(words.iter().map(|word| word.to_string()), max_len)
  }

  #[gtest]
  fn test_drops_words_longer_than_grid() {
    let bank = bank_of(&["CAT", "ELEPHANT"], 5);
    expect_that!(bank.words().to_vec(), container_eq(["CAT".to_owned()]));
    expect_that!(bank.dropped().to_vec(), container_eq(["ELEPHANT".to_owned()]));
  }

  #[gtest]
  fn test_empty_after_filtering() {
    let bank = bank_of(&["ELEPHANT"], 3);
    expect_true!(bank.is_empty());
    expect_that!(bank.len(), eq(0));
  }

  #[gtest]
  fn test_sorts_longest_first() {
    let bank = bank_of(&["AX", "LONGEST", "MID"], 10);
    expect_that!(
      bank.words().to_vec(),
      container_eq(["LONGEST".to_owned(), "MID".to_owned(), "AX".to_owned()])
    );
  }

  #[gtest]
  fn test_sort_is_stable_within_length() {
    let bank = bank_of(&["CAB", "ABC", "BCA"], 5);
    expect_that!(
      bank.words().to_vec(),
      container_eq(["CAB".to_owned(), "ABC".to_owned(), "BCA".to_owned()])
    );
  }

  #[gtest]
  fn test_uppercases_and_trims() {
    let bank = bank_of(&[" cat ", "dog\n"], 5);
    expect_that!(
      bank.words().to_vec(),
      container_eq(["CAT".to_owned(), "DOG".to_owned()])
    );
  }

  #[gtest]
  fn test_skips_blank_lines() {
    let bank = bank_of(&["", "   ", "CAT"], 5);
    expect_that!(bank.words().to_vec(), container_eq(["CAT".to_owned()]));
    expect_true!(bank.dropped().is_empty());
  }
}
