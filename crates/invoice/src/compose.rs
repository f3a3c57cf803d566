//! The fixed visual program: title, greeting, line-item table, totals
//! block, payment instructions. Pagination is the engine's business; this
//! module only issues primitive calls in document order.

use crate::money::{Cents, Totals, format_eur, format_quantity};
use crate::record::{LineItem, ResolvedInvoice};
use crate::InvoiceError;
use faktura_layout::{
    Cell, Color, FontWeight, FooterColumn, LaidOutDocument, LayoutEngine, LogoPlacement,
    PageChrome, PageGeometry, TextAlign,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const GREETING: &str = "Sehr geehrte Damen und Herren,\n\nvielen Dank für Ihren Auftrag und das damit verbundene Vertrauen!\nHiermit stelle ich Ihnen die folgenden Leistungen in Rechnung:";

// Pos., Beschreibung, Menge, Einzelpreis, Gesamtpreis
const TABLE_COLUMNS: [(f32, &str); 5] = [
    (15.0, "Pos."),
    (80.0, "Beschreibung"),
    (30.0, "Menge"),
    (35.0, "Einzelpreis"),
    (30.0, "Gesamtpreis"),
];
const ROW_HEIGHT: f32 = 10.0;

// Totals labels span every column except the last; values line up with the
// Gesamtpreis column.
const TOTALS_LABEL_WIDTH: f32 = 160.0;
const TOTALS_VALUE_WIDTH: f32 = 30.0;

/// Fixed sender identity: header address block, footer columns, signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SenderProfile {
    /// Header address block, top left.
    pub address_lines: Vec<String>,
    /// Footer column one: postal contact.
    pub postal_block: String,
    /// Footer column two: phone and e-mail.
    pub contact_block: String,
    /// Footer column three: tax identifiers.
    pub tax_block: String,
    /// Footer column four: bank details.
    pub bank_block: String,
    /// Name under the closing greeting.
    pub signer: String,
    /// Optional header logo, embedded top right on every page.
    pub logo: Option<PathBuf>,
}

impl Default for SenderProfile {
    fn default() -> Self {
        Self {
            address_lines: vec![
                "cube one GmbH".to_string(),
                "Hauptstraße 23".to_string(),
                "55270 Klein-Winternheim".to_string(),
                "Deutschland".to_string(),
            ],
            postal_block: "Hiren Lakhani\nSeeweg 119\n89160 Dornstadt\nDeutschland".to_string(),
            contact_block: "Tel.: +49-17641576497\nE-Mail: qualificationservices@gmail.com"
                .to_string(),
            tax_block: "USt.-ID: DE344672403\nSteuer-Nr.: 151/243/10064\nInhaber/-in: Hiren Lakhani"
                .to_string(),
            bank_block: "Deutsche Kreditbank AG\nIBAN: DE17120300001201022496\nBIC: BYLADEM1001"
                .to_string(),
            signer: "Hiren Lakhani".to_string(),
            logo: None,
        }
    }
}

/// Render one resolved invoice into laid-out pages.
pub fn compose(
    invoice: &ResolvedInvoice,
    sender: &SenderProfile,
    geometry: PageGeometry,
) -> Result<LaidOutDocument, InvoiceError> {
    log::info!(
        "composing invoice {} for {} ({} line item(s))",
        invoice.invoice_number,
        invoice.client_name,
        invoice.services.len()
    );

    let mut engine = LayoutEngine::new(geometry, page_chrome(invoice, sender));
    engine.begin_document()?;
    engine.begin_page()?;

    // Title directly below the header block.
    engine.set_cursor(geometry.margin_left, engine.after_header_y());
    engine.set_font(FontWeight::Bold, 16.0);
    let title = format!("Rechnung Nr. {}", invoice.invoice_number);
    engine.place_cell(Cell { width: 0.0, height: 10.0, text: &title, ln: true, ..Cell::default() })?;
    engine.advance_y(2.0);

    engine.set_font(FontWeight::Regular, 12.0);
    engine.place_wrapped_text(0.0, 8.0, GREETING, TextAlign::Left)?;
    engine.advance_y(2.0);

    line_item_table(&mut engine, &invoice.services)?;
    totals_block(&mut engine, invoice)?;

    engine.place_wrapped_text(0.0, 8.0, &closing_text(sender), TextAlign::Left)?;

    engine.end_page()?;
    Ok(engine.finish_document()?)
}

fn page_chrome(invoice: &ResolvedInvoice, sender: &SenderProfile) -> PageChrome {
    PageChrome {
        sender_lines: sender.address_lines.clone(),
        meta_rows: vec![
            ("Rechnungs-Nr.".to_string(), invoice.invoice_number.clone()),
            ("Rechnungsdatum".to_string(), invoice.date.clone()),
            ("Referenz".to_string(), invoice.reference.clone()),
            ("Leistungszeitraum".to_string(), invoice.period.clone()),
            ("Ihre Kundennummer".to_string(), invoice.customer_number.clone()),
            ("Ihr Ansprechpartner".to_string(), invoice.contact_person.clone()),
        ],
        footer_columns: vec![
            FooterColumn::new(10.0, 45.0, sender.postal_block.clone()),
            FooterColumn::new(55.0, 45.0, sender.contact_block.clone()),
            FooterColumn::new(100.0, 45.0, sender.tax_block.clone()),
            FooterColumn::new(145.0, 55.0, sender.bank_block.clone()),
        ],
        page_word: "Seite".to_string(),
        of_word: "von".to_string(),
        logo: sender.logo.clone().map(LogoPlacement::top_right),
    }
}

fn line_item_table(engine: &mut LayoutEngine, services: &[LineItem]) -> Result<(), InvoiceError> {
    engine.set_fill_color(Color::gray(225));
    engine.set_draw_color(Color::gray(180));
    engine.set_line_width(0.4);

    engine.set_font(FontWeight::Bold, 12.0);
    for (i, (width, label)) in TABLE_COLUMNS.iter().enumerate() {
        engine.place_cell(Cell {
            width: *width,
            height: ROW_HEIGHT,
            text: label,
            border: true,
            align: TextAlign::Center,
            fill: true,
            ln: i == TABLE_COLUMNS.len() - 1,
        })?;
    }

    engine.set_font(FontWeight::Regular, 12.0);
    for (idx, item) in services.iter().enumerate() {
        let position = format!("{}.", idx + 1);
        engine.place_cell(Cell {
            width: TABLE_COLUMNS[0].0,
            height: ROW_HEIGHT,
            text: &position,
            border: true,
            align: TextAlign::Center,
            ..Cell::default()
        })?;

        engine.set_font(FontWeight::Bold, 12.0);
        engine.place_cell(Cell {
            width: TABLE_COLUMNS[1].0,
            height: ROW_HEIGHT,
            text: &item.description,
            border: true,
            ..Cell::default()
        })?;
        engine.set_font(FontWeight::Regular, 12.0);

        engine.place_cell(Cell {
            width: TABLE_COLUMNS[2].0,
            height: ROW_HEIGHT,
            text: &format_quantity(item.quantity),
            border: true,
            align: TextAlign::Center,
            ..Cell::default()
        })?;
        engine.place_cell(Cell {
            width: TABLE_COLUMNS[3].0,
            height: ROW_HEIGHT,
            text: &format_eur(Cents::from_eur(item.price)),
            border: true,
            align: TextAlign::Right,
            ..Cell::default()
        })?;
        engine.place_cell(Cell {
            width: TABLE_COLUMNS[4].0,
            height: ROW_HEIGHT,
            text: &format_eur(item.total()),
            border: true,
            align: TextAlign::Right,
            ln: true,
            ..Cell::default()
        })?;
    }
    Ok(())
}

fn totals_block(engine: &mut LayoutEngine, invoice: &ResolvedInvoice) -> Result<(), InvoiceError> {
    let totals = Totals::compute(&invoice.services, invoice.tax_rate);
    log::debug!(
        "totals: net {}, tax {}, gross {}",
        format_eur(totals.net),
        format_eur(totals.tax),
        format_eur(totals.gross)
    );

    engine.set_font(FontWeight::Regular, 12.0);
    engine.set_fill_color(Color::gray(245));
    engine.set_draw_color(Color::gray(180));
    engine.set_line_width(0.4);

    totals_row(engine, "Gesamtbetrag netto", totals.net)?;
    let tax_label = format!("zzgl. {}", invoice.tax_name);
    totals_row(engine, &tax_label, totals.tax)?;

    engine.set_font(FontWeight::Bold, 13.0);
    engine.set_text_color(Color::new(30, 30, 30));
    engine.set_fill_color(Color::gray(235));
    totals_row(engine, "Gesamtbetrag brutto", totals.gross)?;

    engine.set_text_color(Color::BLACK);
    engine.set_font(FontWeight::Regular, 12.0);
    engine.advance_y(5.0);
    Ok(())
}

fn totals_row(engine: &mut LayoutEngine, label: &str, amount: Cents) -> Result<(), InvoiceError> {
    engine.place_cell(Cell {
        width: TOTALS_LABEL_WIDTH,
        height: ROW_HEIGHT,
        text: label,
        border: true,
        fill: true,
        ..Cell::default()
    })?;
    engine.place_cell(Cell {
        width: TOTALS_VALUE_WIDTH,
        height: ROW_HEIGHT,
        text: &format_eur(amount),
        border: true,
        align: TextAlign::Right,
        fill: true,
        ln: true,
        ..Cell::default()
    })?;
    Ok(())
}

fn closing_text(sender: &SenderProfile) -> String {
    format!(
        "Bitte überweisen Sie den Rechnungsbetrag unter Angabe der Rechnungsnummer auf das unten angegebene Konto.\n\nMit freundlichen Grüßen\n{}",
        sender.signer
    )
}
