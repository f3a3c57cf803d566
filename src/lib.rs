//! faktura — paginated invoice PDF rendering.
//!
//! One call turns a structured invoice record into a finished PDF plus its
//! deterministic artifact name. The transport layer (HTTP, file system,
//! startup) is the caller's business: this crate receives one validated
//! record per invocation and returns document bytes or an error.
//!
//! ```
//! use faktura::{InvoiceRecord, LineItem, render_invoice};
//!
//! # fn main() -> Result<(), faktura::Error> {
//! let record = InvoiceRecord {
//!     client_name: Some("Musterfirma AG".to_string()),
//!     services: vec![LineItem {
//!         description: "Consulting".to_string(),
//!         quantity: 2.0,
//!         price: 100.0,
//!     }],
//!     tax_rate: Some(19.0),
//!     ..Default::default()
//! };
//!
//! let rendered = render_invoice(&record)?;
//! assert_eq!(rendered.filename, "Invoice_Musterfirma_AG.pdf");
//! assert!(rendered.bytes.starts_with(b"%PDF"));
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

pub use faktura_invoice::{
    Cents, InvoiceError, InvoiceRecord, LineItem, RecordDefaults, SenderProfile, Totals,
    artifact_filename,
};
pub use faktura_layout::{LayoutError, PageChrome, PageGeometry};
pub use faktura_render_lopdf::RenderError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input record: {0}")]
    Input(#[from] serde_json::Error),
    #[error(transparent)]
    Invoice(#[from] InvoiceError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// A finished render: document bytes plus the derived artifact name.
#[derive(Debug, Clone)]
pub struct RenderedInvoice {
    /// `Invoice_<client name with spaces as underscores>.pdf`.
    ///
    /// Deterministic: concurrent renders for the same client derive the
    /// same name, and the output namespace is not arbitrated here.
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Everything configurable about a render, with working defaults.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub defaults: RecordDefaults,
    pub sender: SenderProfile,
    pub geometry: PageGeometry,
}

/// Render one invoice record with default options.
pub fn render_invoice(record: &InvoiceRecord) -> Result<RenderedInvoice, Error> {
    render_invoice_with(record, &RenderOptions::default())
}

/// Render one invoice record: resolve defaults, compose the page sequence,
/// serialize to PDF bytes. Synchronous and isolated; concurrent renders
/// share no layout state.
pub fn render_invoice_with(
    record: &InvoiceRecord,
    options: &RenderOptions,
) -> Result<RenderedInvoice, Error> {
    let resolved = record.resolve(&options.defaults)?;
    let document = faktura_invoice::compose(&resolved, &options.sender, options.geometry)?;
    let bytes = faktura_render_lopdf::render_document(&document)?;
    log::info!(
        "rendered invoice {} for {}: {} page(s), {} bytes",
        resolved.invoice_number,
        resolved.client_name,
        document.pages.len(),
        bytes.len()
    );
    Ok(RenderedInvoice { filename: artifact_filename(&resolved.client_name), bytes })
}

/// Parse the JSON wire record, then render it with default options.
pub fn render_invoice_json(json: &str) -> Result<RenderedInvoice, Error> {
    let record: InvoiceRecord = serde_json::from_str(json)?;
    render_invoice(&record)
}
