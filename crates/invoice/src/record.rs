//! The invoice input record and its explicit defaulting policy.

use crate::money::Cents;
use crate::InvoiceError;
use serde::{Deserialize, Serialize};

/// One invoice request as it arrives on the wire. Every field except the
/// client name is optional; [`RecordDefaults`] enumerates the fallbacks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceRecord {
    pub invoice_number: Option<String>,
    pub date: Option<String>,
    pub reference: Option<String>,
    pub period: Option<String>,
    pub customer_number: Option<String>,
    pub contact_person: Option<String>,
    pub client_name: Option<String>,
    pub services: Vec<LineItem>,
    pub tax_name: Option<String>,
    pub tax_rate: Option<f64>,
}

/// One billed service. Position in the `services` sequence determines the
/// printed row number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    /// Unit price in euros; negative for credits.
    pub price: f64,
}

impl Default for LineItem {
    fn default() -> Self {
        Self { description: String::new(), quantity: 0.0, price: 0.0 }
    }
}

impl LineItem {
    /// quantity × unit price, rounded to whole cents.
    pub fn total(&self) -> Cents {
        Cents::from_eur(self.quantity * self.price)
    }
}

/// Literal fallback for every optional record field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDefaults {
    pub invoice_number: String,
    pub date: String,
    pub reference: String,
    pub period: String,
    pub customer_number: String,
    pub contact_person: String,
    pub tax_name: String,
    pub tax_rate: f64,
}

impl Default for RecordDefaults {
    fn default() -> Self {
        Self {
            invoice_number: "RE-XXXX".to_string(),
            date: "25.06.2025".to_string(),
            reference: "Projekt BI-Belgien".to_string(),
            period: "01.06.2025 - 22.06.2025".to_string(),
            customer_number: "1021".to_string(),
            contact_person: "Hiren Lakhani".to_string(),
            tax_name: "Umsatzsteuer 19%".to_string(),
            tax_rate: 19.0,
        }
    }
}

/// A record with every optional field resolved; what the composer consumes.
#[derive(Debug, Clone)]
pub struct ResolvedInvoice {
    pub invoice_number: String,
    pub date: String,
    pub reference: String,
    pub period: String,
    pub customer_number: String,
    pub contact_person: String,
    pub client_name: String,
    pub services: Vec<LineItem>,
    pub tax_name: String,
    pub tax_rate: f64,
}

impl InvoiceRecord {
    /// Apply `defaults` to every missing optional field and validate the
    /// rest. A missing client name aborts: the artifact name derives from
    /// it and defaulting would silently misfile the result.
    pub fn resolve(&self, defaults: &RecordDefaults) -> Result<ResolvedInvoice, InvoiceError> {
        let client_name = self
            .client_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .ok_or(InvoiceError::MissingClientName)?;

        for (idx, item) in self.services.iter().enumerate() {
            if item.quantity < 0.0 {
                return Err(InvoiceError::NegativeQuantity(idx + 1));
            }
        }

        let pick = |value: &Option<String>, fallback: &str| {
            value.clone().unwrap_or_else(|| fallback.to_string())
        };

        Ok(ResolvedInvoice {
            invoice_number: pick(&self.invoice_number, &defaults.invoice_number),
            date: pick(&self.date, &defaults.date),
            reference: pick(&self.reference, &defaults.reference),
            period: pick(&self.period, &defaults.period),
            customer_number: pick(&self.customer_number, &defaults.customer_number),
            contact_person: pick(&self.contact_person, &defaults.contact_person),
            client_name,
            services: self.services.clone(),
            tax_name: pick(&self.tax_name, &defaults.tax_name),
            tax_rate: self.tax_rate.unwrap_or(defaults.tax_rate),
        })
    }
}

/// Deterministic artifact name: spaces become underscores.
///
/// Two concurrent renders for the same client derive the same name; the
/// output namespace is owned by the caller and not arbitrated here.
pub fn artifact_filename(client_name: &str) -> String {
    format!("Invoice_{}.pdf", client_name.replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_client_name_is_a_hard_error() {
        let record = InvoiceRecord::default();
        let result = record.resolve(&RecordDefaults::default());
        assert!(matches!(result, Err(InvoiceError::MissingClientName)));

        let blank = InvoiceRecord { client_name: Some("   ".to_string()), ..Default::default() };
        assert!(matches!(
            blank.resolve(&RecordDefaults::default()),
            Err(InvoiceError::MissingClientName)
        ));
    }

    #[test]
    fn every_optional_field_takes_its_documented_default() {
        let record =
            InvoiceRecord { client_name: Some("Kunde".to_string()), ..Default::default() };
        let resolved = record.resolve(&RecordDefaults::default()).unwrap();
        assert_eq!(resolved.invoice_number, "RE-XXXX");
        assert_eq!(resolved.date, "25.06.2025");
        assert_eq!(resolved.reference, "Projekt BI-Belgien");
        assert_eq!(resolved.period, "01.06.2025 - 22.06.2025");
        assert_eq!(resolved.customer_number, "1021");
        assert_eq!(resolved.contact_person, "Hiren Lakhani");
        assert_eq!(resolved.tax_name, "Umsatzsteuer 19%");
        assert_eq!(resolved.tax_rate, 19.0);
    }

    #[test]
    fn negative_quantity_is_rejected_with_its_position() {
        let record = InvoiceRecord {
            client_name: Some("Kunde".to_string()),
            services: vec![
                LineItem { description: "ok".to_string(), quantity: 1.0, price: 10.0 },
                LineItem { description: "bad".to_string(), quantity: -1.0, price: 10.0 },
            ],
            ..Default::default()
        };
        assert!(matches!(
            record.resolve(&RecordDefaults::default()),
            Err(InvoiceError::NegativeQuantity(2))
        ));
    }

    #[test]
    fn wire_record_parses_camel_case_fields() {
        let json = r#"{
            "invoiceNumber": "RE-2026-01",
            "clientName": "Musterfirma AG",
            "customerNumber": "77",
            "services": [{"description": "Beratung", "quantity": 2, "price": 100}],
            "taxRate": 19
        }"#;
        let record: InvoiceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.invoice_number.as_deref(), Some("RE-2026-01"));
        assert_eq!(record.customer_number.as_deref(), Some("77"));
        assert_eq!(record.services.len(), 1);
        assert_eq!(record.services[0].quantity, 2.0);
        assert_eq!(record.tax_rate, Some(19.0));
    }

    #[test]
    fn filename_replaces_every_space() {
        assert_eq!(artifact_filename("Musterfirma AG"), "Invoice_Musterfirma_AG.pdf");
        assert_eq!(artifact_filename("A B C"), "Invoice_A_B_C.pdf");
        assert_eq!(artifact_filename("solo"), "Invoice_solo.pdf");
    }
}
