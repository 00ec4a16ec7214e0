//! Invoice list (filter chips, pages of 8) and the invoice detail screen.

use anyhow::Result;
use comfy_table::{Cell, Table};
use inquire::{Confirm, Select};
use std::str::FromStr;
use strum::IntoEnumIterator;

use invoiceflow::model::{Invoice, InvoiceStatus};
use invoiceflow::render::{DocumentRenderer, format_date, format_inr};
use invoiceflow::store::{Action, AppState, Store};
use invoiceflow::views;

use super::{Page, View, sidebar, status_cell};

const PAGE_SIZE: usize = 8;

const NEW_INVOICE_OPT: &str = "➕ New Invoice";
const FILTER_OPT: &str = "🔎 Filter by Status";
const CLEAR_CLIENT_OPT: &str = "🧹 Clear Client Filter";
const PREV_PAGE_OPT: &str = "⬅️  Previous Page";
const NEXT_PAGE_OPT: &str = "➡️  Next Page";
const MENU_OPT: &str = "🧭 Menu";

pub fn screen(store: &Store, client: Option<String>) -> Result<View> {
    let snapshot = store.state();
    let mut status_filter: Option<InvoiceStatus> = None;
    let mut page = 1usize;

    loop {
        let filtered =
            views::filter_invoices(&snapshot.invoices, client.as_deref(), status_filter);
        let pages = views::total_pages(filtered.len(), PAGE_SIZE);
        let rows = views::paginate(&filtered, PAGE_SIZE, page);

        print_header(snapshot, client.as_deref(), status_filter);
        if rows.is_empty() {
            println!("No invoices found. Create your first invoice to get started.");
        } else {
            println!("{}", invoice_table(rows));
            println!(
                "Showing {}-{} of {} invoices",
                (page - 1) * PAGE_SIZE + 1,
                (page - 1) * PAGE_SIZE + rows.len(),
                filtered.len()
            );
        }

        let mut options: Vec<String> = rows
            .iter()
            .enumerate()
            .map(|(i, inv)| {
                format!(
                    "{}. {} · {} · {}",
                    (page - 1) * PAGE_SIZE + i + 1,
                    inv.invoice_number,
                    inv.client.name,
                    format_inr(inv.total)
                )
            })
            .collect();
        options.push(NEW_INVOICE_OPT.to_string());
        options.push(FILTER_OPT.to_string());
        if client.is_some() {
            options.push(CLEAR_CLIENT_OPT.to_string());
        }
        if page > 1 {
            options.push(PREV_PAGE_OPT.to_string());
        }
        if page < pages {
            options.push(NEXT_PAGE_OPT.to_string());
        }
        options.push(MENU_OPT.to_string());

        let choice = match Select::new("Invoices:", options.clone()).prompt() {
            Ok(choice) => choice,
            Err(_) => return Ok(View::App(Page::Dashboard)),
        };

        match choice.as_str() {
            NEW_INVOICE_OPT => return Ok(View::App(Page::InvoiceNew)),
            CLEAR_CLIENT_OPT => return Ok(View::App(Page::Invoices { client: None })),
            PREV_PAGE_OPT => page -= 1,
            NEXT_PAGE_OPT => page += 1,
            FILTER_OPT => {
                status_filter = pick_status_filter(&snapshot.invoices);
                page = 1;
            }
            MENU_OPT => return Ok(sidebar()),
            _ => {
                let idx = options.iter().position(|o| *o == choice).unwrap_or(0);
                let id = rows[idx].id.clone();
                return Ok(View::App(Page::InvoiceDetail { id }));
            }
        }
    }
}

fn print_header(state: &AppState, client: Option<&str>, status: Option<InvoiceStatus>) {
    println!("\n--- Invoices ---");
    if let Some(id) = client {
        let name = state.client(id).map(|c| c.name.as_str()).unwrap_or(id);
        println!("Client filter: {name}");
    }
    // Filter chips, with per-status counts like the web sidebar tabs.
    let mut chips = vec![format!("All ({})", state.invoices.len())];
    for s in InvoiceStatus::iter() {
        let marker = if status == Some(s) { "▶" } else { " " };
        chips.push(format!(
            "{}{} ({})",
            marker,
            s,
            views::status_count(&state.invoices, s)
        ));
    }
    println!("{}", chips.join("  ·  "));
}

fn pick_status_filter(invoices: &[Invoice]) -> Option<InvoiceStatus> {
    let mut options = vec![format!("All ({})", invoices.len())];
    for s in InvoiceStatus::iter() {
        options.push(format!("{} ({})", s, views::status_count(invoices, s)));
    }
    match Select::new("Show:", options).prompt() {
        Ok(choice) => {
            let label = choice.split(' ').next().unwrap_or("All");
            InvoiceStatus::from_str(label).ok()
        }
        Err(_) => None,
    }
}

pub fn detail(store: &mut Store, renderer: &DocumentRenderer, id: &str) -> Result<View> {
    const MARK_PAID_OPT: &str = "✅ Mark as Paid";
    const EDIT_OPT: &str = "✏️  Edit";
    const DELETE_OPT: &str = "🗑️  Delete";
    const BACK_OPT: &str = "⬅️  Back to Invoices";

    let Some(invoice) = store.state().invoice(id).cloned() else {
        println!("❌ Invoice not found.");
        return Ok(View::App(Page::Invoices { client: None }));
    };

    let document = renderer.render(&invoice, &store.state().settings)?;
    println!("\n{document}");

    let mut options = Vec::new();
    if invoice.status != InvoiceStatus::Paid {
        options.push(MARK_PAID_OPT);
    }
    options.push(EDIT_OPT);
    options.push(DELETE_OPT);
    options.push(BACK_OPT);

    let next = match Select::new("Invoice actions:", options).prompt() {
        Ok(MARK_PAID_OPT) => {
            let mut updated = invoice;
            updated.status = InvoiceStatus::Paid;
            store.dispatch(Action::UpdateInvoice(updated));
            println!("✅ Marked as paid.");
            View::App(Page::InvoiceDetail { id: id.to_string() })
        }
        Ok(EDIT_OPT) => View::App(Page::InvoiceEdit { id: id.to_string() }),
        Ok(DELETE_OPT) => {
            let confirmed = Confirm::new("Delete this invoice? This cannot be undone.")
                .with_default(false)
                .prompt()
                .unwrap_or(false);
            if confirmed {
                store.dispatch(Action::DeleteInvoice(id.to_string()));
                println!("🗑️  Invoice deleted.");
            }
            View::App(Page::Invoices { client: None })
        }
        _ => View::App(Page::Invoices { client: None }),
    };
    Ok(next)
}

fn invoice_table(invoices: &[&Invoice]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Invoice #"),
        Cell::new("Client"),
        Cell::new("Issue Date"),
        Cell::new("Due Date"),
        Cell::new("Amount"),
        Cell::new("Status"),
    ]);
    for invoice in invoices {
        table.add_row(vec![
            Cell::new(&invoice.invoice_number),
            Cell::new(&invoice.client.name),
            Cell::new(format_date(invoice.issue_date)),
            Cell::new(format_date(invoice.due_date)),
            Cell::new(format_inr(invoice.total)),
            status_cell(invoice.status),
        ]);
    }
    table
}

/// Full, unpaginated listing for the `invoices` subcommand.
pub fn print_list(state: &AppState, client: Option<&str>, status: Option<InvoiceStatus>) {
    let filtered = views::filter_invoices(&state.invoices, client, status);
    match status {
        Some(status) => println!("--- {status} Invoices ---"),
        None => println!("--- All Invoices ---"),
    }
    if filtered.is_empty() {
        println!("(None found)");
        return;
    }
    println!("{}", invoice_table(&filtered));
}
