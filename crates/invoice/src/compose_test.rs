#![cfg(test)]

use crate::compose::{SenderProfile, compose};
use crate::record::{InvoiceRecord, LineItem, RecordDefaults};
use faktura_layout::{
    FontWeight, LaidOutDocument, LayoutElement, Page, PageGeometry, PositionedElement,
};

fn render(services: Vec<LineItem>, tax_rate: Option<f64>) -> LaidOutDocument {
    let record = InvoiceRecord {
        invoice_number: Some("RE-0001".to_string()),
        client_name: Some("Musterfirma AG".to_string()),
        services,
        tax_rate,
        ..Default::default()
    };
    let resolved = record.resolve(&RecordDefaults::default()).unwrap();
    compose(&resolved, &SenderProfile::default(), PageGeometry::default()).unwrap()
}

fn consulting(quantity: f64, price: f64) -> LineItem {
    LineItem { description: "Consulting".to_string(), quantity, price }
}

fn find_text<'a>(page: &'a Page, content: &str) -> Option<&'a PositionedElement> {
    page.elements
        .iter()
        .find(|el| matches!(&el.element, LayoutElement::Text(t) if t.content.contains(content)))
}

fn count_text(doc: &LaidOutDocument, content: &str) -> usize {
    doc.pages
        .iter()
        .flat_map(|page| &page.elements)
        .filter(|el| matches!(&el.element, LayoutElement::Text(t) if t.content == content))
        .count()
}

fn find_exact<'a>(page: &'a Page, content: &str) -> Option<&'a PositionedElement> {
    page.elements
        .iter()
        .find(|el| matches!(&el.element, LayoutElement::Text(t) if t.content == content))
}

#[test]
fn reference_invoice_prints_the_expected_rows() {
    let doc = render(vec![consulting(2.0, 100.0)], Some(19.0));
    assert_eq!(doc.pages.len(), 1);
    let page = &doc.pages[0];

    assert!(find_text(page, "Rechnung Nr. RE-0001").is_some());
    assert!(find_exact(page, "1.").is_some());
    assert!(find_text(page, "2.00 Stk").is_some());
    assert_eq!(count_text(&doc, "100.00 EUR"), 1, "unit price");
    assert_eq!(count_text(&doc, "200.00 EUR"), 2, "line total and net total");
    assert_eq!(count_text(&doc, "38.00 EUR"), 1, "tax amount");
    assert_eq!(count_text(&doc, "238.00 EUR"), 1, "gross total");
    assert!(find_text(page, "zzgl. Umsatzsteuer 19%").is_some());
}

#[test]
fn empty_invoice_renders_header_row_and_zero_totals() {
    let doc = render(vec![], None);
    let page = &doc.pages[0];

    assert!(find_text(page, "Beschreibung").is_some());
    assert!(find_text(page, "Gesamtpreis").is_some());
    assert!(find_exact(page, "1.").is_none(), "no data rows");
    assert_eq!(count_text(&doc, "0.00 EUR"), 3, "net, tax and gross all zero");
}

#[test]
fn zero_tax_rate_keeps_gross_equal_to_net() {
    let doc = render(vec![consulting(1.0, 100.0)], Some(0.0));
    // unit price, line total, net and gross all print the same amount
    assert_eq!(count_text(&doc, "100.00 EUR"), 4);
    assert_eq!(count_text(&doc, "0.00 EUR"), 1, "tax row");
}

#[test]
fn title_starts_below_the_header_block() {
    let doc = render(vec![consulting(2.0, 100.0)], Some(19.0));
    let title = find_text(&doc.pages[0], "Rechnung Nr.").unwrap();
    assert!(title.y > 82.0, "title baseline below after_header_y");
    assert_eq!(title.style.font_weight, FontWeight::Bold);
    assert_eq!(title.style.font_size, 16.0);
}

#[test]
fn gross_row_is_visually_emphasized() {
    let doc = render(vec![consulting(2.0, 100.0)], Some(19.0));
    let gross = find_text(&doc.pages[0], "Gesamtbetrag brutto").unwrap();
    assert_eq!(gross.style.font_weight, FontWeight::Bold);
    assert_eq!(gross.style.font_size, 13.0);
    assert_eq!(gross.style.fill_color, faktura_layout::Color::gray(235));

    let net = find_text(&doc.pages[0], "Gesamtbetrag netto").unwrap();
    assert_eq!(net.style.font_weight, FontWeight::Regular);
    assert_eq!(net.style.fill_color, faktura_layout::Color::gray(245));
}

#[test]
fn totals_values_align_with_the_last_table_column() {
    let doc = render(vec![consulting(2.0, 100.0)], Some(19.0));
    let page = &doc.pages[0];
    let line_total = find_text(page, "200.00 EUR").unwrap();
    let gross = find_text(page, "238.00 EUR").unwrap();

    // Both right-aligned to x = 10 + 160 + 30 - padding.
    assert!((line_total.x + line_total.width - 199.0).abs() < 0.01);
    assert!((gross.x + gross.width - 199.0).abs() < 0.01);
}

#[test]
fn long_item_lists_paginate_with_chrome_on_every_page() {
    let services: Vec<LineItem> =
        (0..40).map(|i| consulting(1.0 + i as f64, 10.0)).collect();
    let doc = render(services, Some(19.0));
    assert!(doc.pages.len() >= 2, "40 rows cannot fit one page");

    let total = doc.pages.len();
    for (i, page) in doc.pages.iter().enumerate() {
        assert!(find_text(page, "Rechnungs-Nr.").is_some(), "header on page {}", i + 1);
        assert!(find_text(page, "IBAN").is_some(), "footer on page {}", i + 1);
        let marker = format!("Seite {} von {}", i + 1, total);
        assert!(find_text(page, &marker).is_some(), "marker on page {}", i + 1);
    }

    // Last row number lands on a later page.
    assert!(find_exact(&doc.pages[0], "40.").is_none());
    let last_page_with_row = doc
        .pages
        .iter()
        .rev()
        .find(|page| find_exact(page, "40.").is_some());
    assert!(last_page_with_row.is_some());
}

#[test]
fn negative_price_credit_lines_reduce_the_net_total() {
    let doc = render(vec![consulting(1.0, 100.0), consulting(2.0, -25.0)], Some(0.0));
    assert_eq!(count_text(&doc, "-50.00 EUR"), 1, "credit line total");
    assert_eq!(count_text(&doc, "50.00 EUR"), 2, "net and gross");
}
