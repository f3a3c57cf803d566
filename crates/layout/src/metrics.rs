//! Advance-width metrics for the built-in page fonts.
//!
//! The engine draws with the base-14 Helvetica family over the WinAnsi code
//! page, so measurement works from the static AFM advance tables below.
//! Characters outside the code page map to '?' both here and in the render
//! backend's string encoding, keeping measured and painted widths in sync.

use faktura_types::{FontWeight, MM_TO_PT};

/// Measured width of `text` in millimeters at `size_pt` points.
pub fn string_width(text: &str, weight: FontWeight, size_pt: f32) -> f32 {
    let widths = table(weight);
    let units: u32 = text.chars().map(|c| widths[win_ansi_byte(c) as usize] as u32).sum();
    units as f32 * size_pt / 1000.0 / MM_TO_PT
}

/// Encode `text` for the WinAnsi-encoded base fonts.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    if (c as u32) <= 255 { c as u8 } else { b'?' }
}

fn table(weight: FontWeight) -> &'static [u16; 256] {
    match weight {
        FontWeight::Regular => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    }
}

// AFM advance widths in 1/1000 em, indexed by WinAnsi code point.
#[rustfmt::skip]
static HELVETICA: [u16; 256] = [
    278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278,
    278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278,
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 350,
    556, 350, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
    350, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 350, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
static HELVETICA_BOLD: [u16; 256] = [
    278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278,
    278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278,
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 350,
    556, 350, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
    350, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 350, 500, 667,
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_runs_wider_than_regular() {
        let text = "Gesamtbetrag brutto";
        let regular = string_width(text, FontWeight::Regular, 12.0);
        let bold = string_width(text, FontWeight::Bold, 12.0);
        assert!(bold > regular);
    }

    #[test]
    fn width_scales_linearly_with_size() {
        let at_8 = string_width("Rechnung", FontWeight::Regular, 8.0);
        let at_16 = string_width("Rechnung", FontWeight::Regular, 16.0);
        assert!((at_16 - 2.0 * at_8).abs() < 1e-4);
    }

    #[test]
    fn out_of_code_page_measures_as_question_mark() {
        assert_eq!(
            string_width("\u{4e16}", FontWeight::Regular, 12.0),
            string_width("?", FontWeight::Regular, 12.0),
        );
    }

    #[test]
    fn encoding_keeps_latin1_and_replaces_the_rest() {
        assert_eq!(encode_win_ansi("Straße"), b"Stra\xdfe".to_vec());
        assert_eq!(encode_win_ansi("a\u{4e16}b"), b"a?b".to_vec());
    }
}
