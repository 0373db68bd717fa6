// File: src/invoice.rs
// Purpose: Invoice draft, totals and the payload sent on save

use chrono::NaiveDate;
use crm_validation_core::{validate_positive_number, validate_required};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::InvoiceConfig;
use crate::form::FormValues;

/// What to do with required invoice keys left blank on save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadPolicy {
    /// Refuse to build the payload
    #[default]
    Reject,
    /// Substitute placeholder values
    Fill,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvoiceError {
    #[error("{key}: {message}")]
    MissingField { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub desc: String,
    pub qty: f64,
    pub price: f64,
    #[serde(default)]
    pub hsn: String,
}

impl Default for LineItem {
    fn default() -> Self {
        Self {
            desc: String::new(),
            qty: 1.0,
            price: 0.0,
            hsn: String::new(),
        }
    }
}

impl LineItem {
    pub fn amount(&self) -> f64 {
        self.qty * self.price
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Sum line items, apply tax then discount; the total never goes below zero
pub fn compute_totals(items: &[LineItem], tax_rate: f64, discount: f64) -> Totals {
    let subtotal: f64 = items.iter().map(LineItem::amount).sum();
    let tax = subtotal * tax_rate / 100.0;
    let total = (subtotal + tax - discount).max(0.0);
    Totals {
        subtotal,
        tax,
        total,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub client_name: String,
    pub client_email: String,
    #[serde(default)]
    pub client_phone: String,
    #[serde(default)]
    pub client_address: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub status: String,
    pub line_items: Vec<LineItem>,
    pub tax_rate: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub terms: String,
    pub currency: String,
    #[serde(default)]
    pub pipeline: String,
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub priority: String,

    #[serde(default)]
    pub supplier_name: String,
    #[serde(default, rename = "supplierGSTIN")]
    pub supplier_gstin: String,
    #[serde(default)]
    pub supplier_contact: String,
    #[serde(default)]
    pub supplier_email: String,
    #[serde(default, rename = "buyerGSTIN")]
    pub buyer_gstin: String,

    #[serde(default)]
    pub bank_name: String,
    #[serde(default)]
    pub bank_account: String,
    #[serde(default, rename = "bankIFSC")]
    pub bank_ifsc: String,
    #[serde(default)]
    pub bank_branch: String,
    #[serde(default, rename = "bankUPI")]
    pub bank_upi: String,
}

impl InvoiceDraft {
    /// Blank draft dated `today` with one empty line item
    pub fn new(config: &InvoiceConfig, today: NaiveDate) -> Self {
        Self {
            client_name: String::new(),
            client_email: String::new(),
            client_phone: String::new(),
            client_address: String::new(),
            date: today,
            due_date: None,
            status: "Draft".to_string(),
            line_items: vec![LineItem::default()],
            tax_rate: config.tax_rate,
            discount: 0.0,
            notes: String::new(),
            terms: config.terms.clone(),
            currency: config.currency.clone(),
            pipeline: "Sales Pipeline".to_string(),
            stage: "Initial Contact".to_string(),
            assigned_to: String::new(),
            priority: "Medium".to_string(),
            supplier_name: String::new(),
            supplier_gstin: String::new(),
            supplier_contact: String::new(),
            supplier_email: String::new(),
            buyer_gstin: String::new(),
            bank_name: String::new(),
            bank_account: String::new(),
            bank_ifsc: String::new(),
            bank_branch: String::new(),
            bank_upi: String::new(),
        }
    }

    /// Copy committed values of the invoice details form into the draft.
    /// Keys the form does not carry leave the draft untouched.
    pub fn apply_values(&mut self, values: &FormValues) {
        let targets: [(&str, &mut String); 12] = [
            ("client_name", &mut self.client_name),
            ("client_email", &mut self.client_email),
            ("supplier_name", &mut self.supplier_name),
            ("supplier_gstin", &mut self.supplier_gstin),
            ("supplier_contact", &mut self.supplier_contact),
            ("supplier_email", &mut self.supplier_email),
            ("buyer_gstin", &mut self.buyer_gstin),
            ("bank_name", &mut self.bank_name),
            ("bank_account", &mut self.bank_account),
            ("bank_ifsc", &mut self.bank_ifsc),
            ("bank_branch", &mut self.bank_branch),
            ("bank_upi", &mut self.bank_upi),
        ];
        for (key, target) in targets {
            if let Some(value) = values.get(key) {
                target.clone_from(value);
            }
        }
    }

    pub fn totals(&self) -> Totals {
        compute_totals(&self.line_items, self.tax_rate, self.discount)
    }
}

/// Draft plus computed totals, as sent to the backend
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayload {
    #[serde(flatten)]
    pub draft: InvoiceDraft,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Build the save payload for `draft`.
///
/// Under [`PayloadPolicy::Reject`] a blank client name or email, or a total
/// that is not positive, is an error. Under [`PayloadPolicy::Fill`] those and
/// the other descriptive keys get placeholders instead.
pub fn assemble(
    mut draft: InvoiceDraft,
    policy: PayloadPolicy,
    today: NaiveDate,
) -> Result<InvoicePayload, InvoiceError> {
    let totals = draft.totals();
    let mut total = totals.total;

    match policy {
        PayloadPolicy::Reject => {
            require("clientName", &draft.client_name, "Client Name")?;
            require("clientEmail", &draft.client_email, "Client Email")?;
            let verdict = validate_positive_number(&total.to_string(), "Total");
            if !verdict.is_valid {
                return Err(InvoiceError::MissingField {
                    key: "total",
                    message: verdict.message,
                });
            }
        }
        PayloadPolicy::Fill => {
            fill(&mut draft.client_name, "Default Client");
            fill(&mut draft.client_email, "client@example.com");
            fill(&mut draft.status, "Draft");
            fill(&mut draft.notes, "Invoice description");
            fill(&mut draft.assigned_to, "Amit Sharma");
            fill(&mut draft.priority, "Medium");
            fill(&mut draft.pipeline, "Sales Pipeline");
            fill(&mut draft.stage, "Initial Contact");
            draft.due_date.get_or_insert(today);
            if total == 0.0 {
                total = 1000.0;
            }
            tracing::debug!(client = %draft.client_name, total, "filled invoice placeholders");
        }
    }

    Ok(InvoicePayload {
        draft,
        subtotal: totals.subtotal,
        tax: totals.tax,
        total,
    })
}

fn require(key: &'static str, value: &str, field_name: &str) -> Result<(), InvoiceError> {
    let verdict = validate_required(value, field_name);
    if verdict.is_valid {
        Ok(())
    } else {
        Err(InvoiceError::MissingField {
            key,
            message: verdict.message,
        })
    }
}

fn fill(value: &mut String, placeholder: &str) {
    if value.is_empty() {
        *value = placeholder.to_string();
    }
}
