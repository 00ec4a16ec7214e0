//! Dashboard: stat cards and the most recent invoices.

use anyhow::Result;
use chrono::Local;
use comfy_table::{Cell, Table};
use inquire::Select;

use invoiceflow::render::{format_date, format_inr};
use invoiceflow::store::Store;
use invoiceflow::{store::AppState, views};

use super::{Page, View, sidebar, status_cell};

const NEW_INVOICE_OPT: &str = "➕ New Invoice";
const OPEN_RECENT_OPT: &str = "🔎 Open a Recent Invoice";
const MENU_OPT: &str = "🧭 Menu";

pub fn screen(store: &Store) -> Result<View> {
    let state = store.state();
    print_summary(state);

    let options = vec![NEW_INVOICE_OPT, OPEN_RECENT_OPT, MENU_OPT];
    let next = match Select::new("Dashboard:", options).prompt() {
        Ok(NEW_INVOICE_OPT) => View::App(Page::InvoiceNew),
        Ok(OPEN_RECENT_OPT) => open_recent(state),
        Ok(_) => sidebar(),
        Err(_) => View::Quit,
    };
    Ok(next)
}

fn open_recent(state: &AppState) -> View {
    let recent: Vec<String> = state
        .invoices
        .iter()
        .take(5)
        .map(|inv| format!("{} · {} · {}", inv.invoice_number, inv.client.name, format_inr(inv.total)))
        .collect();
    if recent.is_empty() {
        println!("No invoices yet. Create your first invoice to get started.");
        return View::App(Page::Dashboard);
    }

    match Select::new("Open invoice:", recent.clone()).prompt() {
        Ok(choice) => {
            let idx = recent.iter().position(|r| *r == choice).unwrap_or(0);
            let id = state.invoices[idx].id.clone();
            View::App(Page::InvoiceDetail { id })
        }
        Err(_) => View::App(Page::Dashboard),
    }
}

/// Stat cards plus the five most recent invoices. Also backs the `summary`
/// subcommand.
pub fn print_summary(state: &AppState) {
    let today = Local::now().date_naive();
    let summary = views::dashboard_summary(&state.invoices, today);

    let mut stats = Table::new();
    stats.set_header(vec![
        Cell::new("Total Outstanding"),
        Cell::new("Overdue Amount"),
        Cell::new("Paid This Month"),
        Cell::new("Total Invoices"),
    ]);
    stats.add_row(vec![
        Cell::new(format_inr(summary.outstanding)),
        Cell::new(format_inr(summary.overdue)),
        Cell::new(format_inr(summary.paid_this_month)),
        Cell::new(summary.invoice_count),
    ]);

    println!("\n--- Dashboard ---");
    println!("Here's your financial overview, {}.", state.settings.user_name);
    println!("{stats}");

    let mut recent = Table::new();
    recent.set_header(vec![
        Cell::new("Invoice #"),
        Cell::new("Client"),
        Cell::new("Amount"),
        Cell::new("Due Date"),
        Cell::new("Status"),
    ]);
    for invoice in state.invoices.iter().take(5) {
        recent.add_row(vec![
            Cell::new(&invoice.invoice_number),
            Cell::new(&invoice.client.name),
            Cell::new(format_inr(invoice.total)),
            Cell::new(format_date(invoice.due_date)),
            status_cell(invoice.status),
        ]);
    }

    println!("\n--- Recent Invoices ---");
    println!("{recent}");
}
