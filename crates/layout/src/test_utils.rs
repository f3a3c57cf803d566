use crate::chrome::{FooterColumn, PageChrome};
use crate::config::PageGeometry;
use crate::elements::{LayoutElement, Page, PositionedElement, TextElement};
use crate::engine::LayoutEngine;

/// Chrome with the shape real renders use: four sender lines, six metadata
/// rows, four footer columns. No logo so tests run without assets.
pub fn create_test_chrome() -> PageChrome {
    PageChrome {
        sender_lines: vec![
            "Acme GmbH".to_string(),
            "Teststraße 1".to_string(),
            "12345 Teststadt".to_string(),
            "Deutschland".to_string(),
        ],
        meta_rows: vec![
            ("Rechnungs-Nr.".to_string(), "RE-0001".to_string()),
            ("Rechnungsdatum".to_string(), "01.01.2026".to_string()),
            ("Referenz".to_string(), "Projekt Nord".to_string()),
            ("Leistungszeitraum".to_string(), "Januar 2026".to_string()),
            ("Ihre Kundennummer".to_string(), "1021".to_string()),
            ("Ihr Ansprechpartner".to_string(), "M. Muster".to_string()),
        ],
        footer_columns: vec![
            FooterColumn::new(10.0, 45.0, "Acme GmbH\nTeststraße 1\n12345 Teststadt\nDeutschland"),
            FooterColumn::new(55.0, 45.0, "Tel.: +49-000-0000\nE-Mail: mail@acme.test"),
            FooterColumn::new(100.0, 45.0, "USt.-ID: DE000000000\nSteuer-Nr.: 0/0/0\nInhaber: M. Muster"),
            FooterColumn::new(145.0, 55.0, "Testbank AG\nIBAN: DE00 0000\nBIC: TESTDE00"),
        ],
        page_word: "Seite".to_string(),
        of_word: "von".to_string(),
        logo: None,
    }
}

pub fn create_test_engine() -> LayoutEngine {
    LayoutEngine::new(PageGeometry::default(), create_test_chrome())
}

/// Engine with an open first page, ready for body content.
pub fn create_open_engine() -> LayoutEngine {
    let mut engine = create_test_engine();
    engine.begin_document().unwrap();
    engine.begin_page().unwrap();
    engine
}

pub fn text_contents(page: &Page) -> Vec<&str> {
    page.elements
        .iter()
        .filter_map(|el| match &el.element {
            LayoutElement::Text(TextElement { content }) => Some(content.as_str()),
            _ => None,
        })
        .collect()
}

pub fn find_text<'a>(page: &'a Page, content: &str) -> Option<&'a PositionedElement> {
    page.elements.iter().find(|el| {
        matches!(&el.element, LayoutElement::Text(t) if t.content.contains(content))
    })
}

pub fn count_rects(page: &Page) -> usize {
    page.elements
        .iter()
        .filter(|el| matches!(el.element, LayoutElement::Rect(_)))
        .count()
}
