// src/generator/instructions.rs

use crate::config::consts::{INDENT, MAX_LINE_LENGTH};
use crate::config::options::puzzle_url;
use crate::core::{html, net, sanitize::comment_safe};

/// Placeholder used when the puzzle page can't be had.
pub fn missing_instructions(day: u32) -> String {
    format!("Sorry, no instructions found for day {day}")
}

/// Instructions text from a puzzle page (first `<article>`).
pub fn extract_instructions(page: &str) -> Option<String> {
    html::first_article_text(page)
}

/// Fetch the part 1 instructions of `day`. Never fails: network errors,
/// bad statuses and pages without an article all fall back to a
/// placeholder.
pub fn fetch_instructions(day: u32) -> String {
    let url = puzzle_url(day);
    match net::http_get(&url, None) {
        Ok(page) => extract_instructions(&page).unwrap_or_else(|| {
            loge!("No <article> on {url}");
            missing_instructions(day)
        }),
        Err(e) => {
            loge!("Fetching instructions for day {day} failed: {e}");
            missing_instructions(day)
        }
    }
}

/// Greedy word wrap of one line to `width` columns.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = s!();
    for word in line.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + word.len() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            out.push(std::mem::replace(&mut current, s!(word)));
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Wrap every line to `MAX_LINE_LENGTH - INDENT` columns and indent it.
/// Blank lines stay blank; the result is safe inside a block comment.
pub fn format_instructions(text: &str) -> String {
    let width = MAX_LINE_LENGTH - INDENT;
    let indent = " ".repeat(INDENT);
    let lines: Vec<String> = comment_safe(text)
        .split('\n')
        .map(|line| {
            wrap_line(line, width)
                .iter()
                .map(|l| join!(indent.as_str(), l))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect();
    lines.join("\n")
}
