use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Flat GST surcharge applied to every invoice subtotal.
pub const GST_RATE: f64 = 0.18;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: String,
    pub gst_number: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InvoiceItem {
    pub id: String,
    pub description: String,
    pub quantity: f64,
    pub rate: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Invoice {
    pub id: String,
    /// Caller-assigned; the container never checks it for uniqueness.
    pub invoice_number: String,
    /// Point-in-time copy of the billed client. Later client edits do not
    /// flow into invoices that were already written.
    pub client: Client,
    pub items: Vec<InvoiceItem>,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub notes: String,
    // Derived at submission time and stored redundantly. The invoice form
    // recomputes all three whenever the item list changes.
    pub subtotal: f64,
    pub gst: f64,
    pub total: f64,
    #[serde(default)]
    pub template: InvoiceTemplate,
}

/// Manual-only lifecycle: nothing ever flips Pending to Overdue from the
/// due date, the user does it from the detail screen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum InvoiceStatus {
    Draft,
    Pending,
    Overdue,
    Paid,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum InvoiceTemplate {
    #[default]
    Classic,
    Modern,
    Minimalist,
}

impl InvoiceTemplate {
    /// Registry key of the matching tera template.
    pub fn key(&self) -> &'static str {
        match self {
            InvoiceTemplate::Classic => "classic",
            InvoiceTemplate::Modern => "modern",
            InvoiceTemplate::Minimalist => "minimalist",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Settings {
    pub user_name: String,
    pub user_email: String,
    pub company_name: String,
    pub company_address: String,
    pub company_gst: String,
    #[serde(default)]
    pub default_template: InvoiceTemplate,
}
