use faktura::{Error, InvoiceError, InvoiceRecord, LineItem, render_invoice, render_invoice_json};

fn record_with(services: Vec<LineItem>) -> InvoiceRecord {
    InvoiceRecord {
        invoice_number: Some("RE-2026-007".to_string()),
        client_name: Some("Musterfirma AG".to_string()),
        services,
        tax_rate: Some(19.0),
        ..Default::default()
    }
}

fn consulting(quantity: f64, price: f64) -> LineItem {
    LineItem { description: "Consulting".to_string(), quantity, price }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[test]
fn renders_a_complete_single_page_invoice() {
    let rendered = render_invoice(&record_with(vec![consulting(2.0, 100.0)])).unwrap();

    assert_eq!(rendered.filename, "Invoice_Musterfirma_AG.pdf");
    assert!(rendered.bytes.starts_with(b"%PDF-1.7"));
    assert!(rendered.bytes.ends_with(b"%%EOF"));

    // Content streams are uncompressed, so body text is directly visible.
    assert!(contains(&rendered.bytes, b"Rechnung Nr. RE-2026-007"));
    assert!(contains(&rendered.bytes, b"Gesamtbetrag netto"));
    assert!(contains(&rendered.bytes, b"200.00 EUR"));
    assert!(contains(&rendered.bytes, b"38.00 EUR"));
    assert!(contains(&rendered.bytes, b"238.00 EUR"));
    assert!(contains(&rendered.bytes, b"Seite 1 von 1"));
}

#[test]
fn parsed_document_has_one_page_per_overflow() {
    let services = (0..40).map(|_| consulting(1.0, 10.0)).collect();
    let rendered = render_invoice(&record_with(services)).unwrap();

    let document = lopdf::Document::load_mem(&rendered.bytes).unwrap();
    let pages = document.get_pages();
    assert!(pages.len() >= 2, "40 line items must paginate");

    let last_marker = format!("Seite {} von {}", pages.len(), pages.len());
    assert!(contains(&rendered.bytes, last_marker.as_bytes()));
}

#[test]
fn renders_from_the_json_wire_record() {
    let json = r#"{
        "invoiceNumber": "RE-1",
        "clientName": "Kunde Eins",
        "services": [{"description": "Beratung", "quantity": 1, "price": 50}],
        "taxName": "Umsatzsteuer 19%",
        "taxRate": 19
    }"#;
    let rendered = render_invoice_json(json).unwrap();
    assert_eq!(rendered.filename, "Invoice_Kunde_Eins.pdf");
    assert!(contains(&rendered.bytes, b"Beratung"));
    assert!(contains(&rendered.bytes, b"zzgl. Umsatzsteuer 19%"));
}

#[test]
fn missing_client_name_aborts_before_any_output() {
    let mut record = record_with(vec![consulting(1.0, 10.0)]);
    record.client_name = None;
    let result = render_invoice(&record);
    assert!(matches!(result, Err(Error::Invoice(InvoiceError::MissingClientName))));
}

#[test]
fn malformed_json_is_an_input_error() {
    let result = render_invoice_json("{\"services\": \"not a list\"}");
    assert!(matches!(result, Err(Error::Input(_))));
}

#[test]
fn non_numeric_quantity_is_an_input_error() {
    let result = render_invoice_json(
        r#"{"clientName": "K", "services": [{"description": "x", "quantity": "zwei", "price": 1}]}"#,
    );
    assert!(matches!(result, Err(Error::Input(_))));
}

#[cfg(feature = "logo")]
#[test]
fn missing_logo_asset_fails_the_render() {
    use faktura::{RenderOptions, render_invoice_with};

    let mut options = RenderOptions::default();
    options.sender.logo = Some("/nonexistent/header-logo.jpg".into());
    let result = render_invoice_with(&record_with(vec![consulting(1.0, 10.0)]), &options);
    assert!(matches!(
        result,
        Err(Error::Invoice(InvoiceError::Layout(faktura::LayoutError::Asset { .. })))
    ));
}

#[test]
fn defaults_fill_every_missing_field() {
    let record = InvoiceRecord {
        client_name: Some("Nur Name".to_string()),
        ..Default::default()
    };
    let rendered = render_invoice(&record).unwrap();
    assert!(contains(&rendered.bytes, b"Rechnung Nr. RE-XXXX"));
    assert!(contains(&rendered.bytes, b"Projekt BI-Belgien"));
    assert!(contains(&rendered.bytes, b"0.00 EUR"));
}
