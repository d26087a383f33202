use core::fmt;
use std::{
  error::Error,
  fmt::{Display, Formatter},
};

#[derive(Debug)]
pub enum CrossgenError {
  Internal(String),
  Parse(String),
  InvalidDimension(u32),
  NoUsableWords,
  Unsatisfiable,
}

impl Display for CrossgenError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      CrossgenError::Internal(msg) => write!(f, "Internal error: {msg}"),
      CrossgenError::Parse(msg) => write!(f, "Parse error: {msg}"),
      CrossgenError::InvalidDimension(size) => {
        write!(f, "Invalid grid dimension: {size}x{size}")
      }
      CrossgenError::NoUsableWords => {
        write!(f, "No words from the list fit within the grid")
      }
      CrossgenError::Unsatisfiable => {
        write!(f, "No arrangement of the word list fits the grid")
      }
    }
  }
}

impl Error for CrossgenError {}

pub type CrossgenResult<T = ()> = Result<T, Box<dyn Error>>;
