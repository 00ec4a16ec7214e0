//! Printable invoice documents.
//!
//! Each invoice carries a template tag; the matching tera template turns the
//! invoice plus the current workspace settings into a plain-text document.
//! Templates are embedded at compile time so the binary is self-contained.

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use serde::Serialize;
use tera::{Context, Tera};

use crate::model::{Invoice, Settings};
use crate::views;

pub const BRAND: &str = "InvoiceFlow";

// Embed templates at compile time to ensure availability
const CLASSIC_TEMPLATE: &str = include_str!("../templates/classic.tera");
const MODERN_TEMPLATE: &str = include_str!("../templates/modern.tera");
const MINIMALIST_TEMPLATE: &str = include_str!("../templates/minimalist.tera");

#[derive(Serialize)]
struct ItemContext {
    description: String,
    quantity: String,
    rate: String,
    amount: String,
    /// Pre-padded table row for the classic layout.
    row: String,
}

#[derive(Serialize)]
struct DocumentContext {
    brand: &'static str,
    company_name: String,
    company_address: String,
    company_gst: String,
    invoice_number: String,
    status: String,
    issue_date: String,
    due_date: String,
    client_name: String,
    client_address: String,
    client_gst: String,
    client_email: String,
    items: Vec<ItemContext>,
    subtotal: String,
    gst: String,
    total: String,
    notes: String,
}

pub struct DocumentRenderer {
    tera: Tera,
}

impl DocumentRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("classic", CLASSIC_TEMPLATE),
            ("modern", MODERN_TEMPLATE),
            ("minimalist", MINIMALIST_TEMPLATE),
        ])
        .context("embedded invoice templates failed to parse")?;
        Ok(DocumentRenderer { tera })
    }

    /// Renders the invoice through the template named by its tag.
    pub fn render(&self, invoice: &Invoice, settings: &Settings) -> Result<String> {
        let context = Context::from_serialize(document_context(invoice, settings))
            .context("invoice context failed to serialize")?;
        self.tera
            .render(invoice.template.key(), &context)
            .with_context(|| format!("rendering invoice {}", invoice.invoice_number))
    }
}

fn document_context(invoice: &Invoice, settings: &Settings) -> DocumentContext {
    let items = invoice
        .items
        .iter()
        .map(|item| {
            let rate = format_inr(item.rate);
            let amount = format_inr(views::line_total(item));
            ItemContext {
                row: format!(
                    "  {:<34} {:>6} {:>12} {:>15}",
                    item.description, item.quantity, rate, amount
                ),
                description: item.description.clone(),
                quantity: item.quantity.to_string(),
                rate,
                amount,
            }
        })
        .collect();

    DocumentContext {
        brand: BRAND,
        company_name: settings.company_name.clone(),
        company_address: settings.company_address.clone(),
        company_gst: settings.company_gst.clone(),
        invoice_number: invoice.invoice_number.clone(),
        status: invoice.status.to_string(),
        issue_date: format_date(invoice.issue_date),
        due_date: format_date(invoice.due_date),
        client_name: invoice.client.name.clone(),
        client_address: invoice.client.address.clone(),
        client_gst: invoice.client.gst_number.clone(),
        client_email: invoice.client.email.clone(),
        items,
        subtotal: format_inr(invoice.subtotal),
        gst: format_inr(invoice.gst),
        total: format_inr(invoice.total),
        notes: invoice.notes.clone(),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Rupee amount with Indian digit grouping: the last three digits form one
/// group, everything above that groups in twos (₹12,34,567.89).
pub fn format_inr(amount: f64) -> String {
    let paise = (amount * 100.0).round() as i64;
    let (sign, paise) = if paise < 0 { ("-", -paise) } else { ("", paise) };
    let rupees = (paise / 100).to_string();
    let fraction = paise % 100;

    let grouped = if rupees.len() > 3 {
        let (head, tail) = rupees.split_at(rupees.len() - 3);
        let mut groups = Vec::new();
        let mut end = head.len();
        while end > 2 {
            groups.push(&head[end - 2..end]);
            end -= 2;
        }
        groups.push(&head[..end]);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    } else {
        rupees
    };

    format!("{sign}₹{grouped}.{fraction:02}")
}
