// src/io.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::options::module_name;
use crate::error::{Error, Result};

/// Read a puzzle input into lines. A missing file is an error.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::file(path, e))?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Split inline example data into lines.
/// A single trailing newline does not yield a final empty line; blank
/// lines inside the text are kept since several puzzles use them as
/// section separators.
pub fn split_lines(text: &str) -> Vec<String> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let text = text.strip_suffix('\r').unwrap_or(text);
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
        .collect()
}

/// `<dir>/dayNN.txt`
pub fn input_path(dir: &Path, day: u32) -> PathBuf {
    dir.join(join!(module_name(day), ".txt"))
}

/// Group lines into blank-line separated blocks, dropping empty blocks.
pub fn blocks(data: &[String]) -> Vec<&[String]> {
    data.split(|l| l.trim().is_empty())
        .filter(|b| !b.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_interior_blank_lines() {
        let data = split_lines("a\n\nb\n");
        assert_eq!(data, lines!["a", "", "b"]);
    }

    #[test]
    fn blocks_skip_repeated_separators() {
        let data = lines!["a", "b", "", "", "c"];
        let got = blocks(&data);
        assert_eq!(got.len(), 2);
        assert_eq!(got[1], &lines!["c"][..]);
    }
}
