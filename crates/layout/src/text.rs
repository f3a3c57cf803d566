//! Word wrapping against the built-in font metrics.

use crate::metrics;
use faktura_types::FontWeight;

/// Wrap `text` into lines no wider than `max_width` millimeters.
///
/// Explicit newlines are honored and produce empty lines for blank
/// paragraphs. Words wider than a whole line are split at character
/// granularity so layout always makes progress.
pub fn wrap(text: &str, max_width: f32, weight: FontWeight, size_pt: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, max_width, weight, size_pt, &mut lines);
    }
    lines
}

fn wrap_paragraph(
    paragraph: &str,
    max_width: f32,
    weight: FontWeight,
    size_pt: f32,
    lines: &mut Vec<String>,
) {
    if paragraph.is_empty() {
        lines.push(String::new());
        return;
    }

    let fits = |s: &str| metrics::string_width(s, weight, size_pt) <= max_width;
    let mut current = String::new();

    for word in paragraph.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if fits(&candidate) {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if fits(word) {
            current = word.to_string();
        } else {
            current = split_oversized_word(word, max_width, weight, size_pt, lines);
        }
    }
    lines.push(current);
}

/// Push full-width prefixes of a word that cannot fit on one line; the
/// remainder becomes the new current line.
fn split_oversized_word(
    word: &str,
    max_width: f32,
    weight: FontWeight,
    size_pt: f32,
    lines: &mut Vec<String>,
) -> String {
    let mut current = String::new();
    for c in word.chars() {
        let mut candidate = current.clone();
        candidate.push(c);
        if metrics::string_width(&candidate, weight, size_pt) <= max_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = c.to_string();
        }
    }
    current
}
