//! Derived views: pure reads over a state snapshot.
//!
//! Everything here is recomputed on demand; the working set is small enough
//! that caching would only add invalidation questions. None of these
//! functions can fail -- empty input yields zero aggregates and empty pages.

use chrono::{Datelike, NaiveDate};

use crate::model::{GST_RATE, Invoice, InvoiceItem, InvoiceStatus};

/// The four stat cards on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardSummary {
    /// Sum of totals over Pending and Overdue invoices.
    pub outstanding: f64,
    /// Sum of totals over Overdue invoices.
    pub overdue: f64,
    /// Sum of totals over Paid invoices issued in the current calendar month.
    pub paid_this_month: f64,
    pub invoice_count: usize,
}

/// `today` is passed in rather than read from the clock so the computation
/// stays a pure function of its inputs.
pub fn dashboard_summary(invoices: &[Invoice], today: NaiveDate) -> DashboardSummary {
    let outstanding = invoices
        .iter()
        .filter(|inv| matches!(inv.status, InvoiceStatus::Pending | InvoiceStatus::Overdue))
        .map(|inv| inv.total)
        .sum();
    let overdue = invoices
        .iter()
        .filter(|inv| inv.status == InvoiceStatus::Overdue)
        .map(|inv| inv.total)
        .sum();
    let paid_this_month = invoices
        .iter()
        .filter(|inv| {
            inv.status == InvoiceStatus::Paid
                && inv.issue_date.month() == today.month()
                && inv.issue_date.year() == today.year()
        })
        .map(|inv| inv.total)
        .sum();

    DashboardSummary {
        outstanding,
        overdue,
        paid_this_month,
        invoice_count: invoices.len(),
    }
}

/// Subsequence of invoices matching all provided filters, original order
/// preserved. The client filter matches against the embedded client copy.
pub fn filter_invoices<'a>(
    invoices: &'a [Invoice],
    client_id: Option<&str>,
    status: Option<InvoiceStatus>,
) -> Vec<&'a Invoice> {
    invoices
        .iter()
        .filter(|inv| client_id.is_none_or(|id| inv.client.id == id))
        .filter(|inv| status.is_none_or(|s| inv.status == s))
        .collect()
}

/// 1-based page slice `[(page-1)*size, page*size)`, clamped to bounds.
/// A page beyond the end (or page 0) is an empty slice, not an error.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Invoices billed to the given client, counted via the embedded copy.
pub fn client_invoice_count(invoices: &[Invoice], client_id: &str) -> usize {
    invoices
        .iter()
        .filter(|inv| inv.client.id == client_id)
        .count()
}

/// Per-status counts for the filter chips on the invoices screen.
pub fn status_count(invoices: &[Invoice], status: InvoiceStatus) -> usize {
    invoices.iter().filter(|inv| inv.status == status).count()
}

pub fn line_total(item: &InvoiceItem) -> f64 {
    item.quantity * item.rate
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub subtotal: f64,
    pub gst: f64,
    pub total: f64,
}

/// Live totals while editing; persisted onto the invoice only at submit.
pub fn invoice_totals(items: &[InvoiceItem]) -> Totals {
    let subtotal: f64 = items.iter().map(line_total).sum();
    let gst = subtotal * GST_RATE;
    Totals {
        subtotal,
        gst,
        total: subtotal + gst,
    }
}
