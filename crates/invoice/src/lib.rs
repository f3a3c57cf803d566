//! Invoice composition: the input record model, derived monetary totals,
//! and the fixed visual program that turns one record into layout calls.

use faktura_layout::LayoutError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("clientName is required; the output artifact is named after it")]
    MissingClientName,
    #[error("Line item {0} has a negative quantity.")]
    NegativeQuantity(usize),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

pub mod compose;
pub mod money;
pub mod record;

pub use compose::{SenderProfile, compose};
pub use money::{Cents, Totals, format_eur, format_quantity};
pub use record::{InvoiceRecord, LineItem, RecordDefaults, ResolvedInvoice, artifact_filename};

#[cfg(test)]
mod compose_test;
