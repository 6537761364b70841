// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("day {day}: cannot parse {input:?}: {reason}")]
    Parse {
        day: u32,
        input: String,
        reason: String,
    },

    #[error("day {0} has no registered solution")]
    UnknownDay(u32),

    #[error("day {0} is outside 1..=25")]
    InvalidDay(u32),

    #[error("Sorry, day {0} already exists")]
    DayExists(u32),

    #[error("day {day} part {part} is not implemented")]
    NotImplemented { day: u32, part: u8 },

    #[error("day {day}: no answer ({reason})")]
    NoAnswer { day: u32, reason: String },
}

impl Error {
    pub fn parse(day: u32, input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Parse { day, input: input.into(), reason: reason.into() }
    }

    pub fn no_answer(day: u32, reason: impl Into<String>) -> Self {
        Error::NoAnswer { day, reason: reason.into() }
    }

    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::File { path: path.into(), source }
    }
}
