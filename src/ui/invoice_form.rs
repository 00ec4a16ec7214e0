//! Invoice form, covering both create and edit.
//!
//! The form is the collaborator responsible for the totals invariant: it
//! recomputes subtotal, GST and total from the item list and writes them
//! onto the invoice before dispatching. The store never checks them.

use anyhow::Result;
use chrono::{Datelike, Duration, Local};
use inquire::{Confirm, DateSelect, Select, Text};
use strum::IntoEnumIterator;

use invoiceflow::model::{Invoice, InvoiceItem, InvoiceStatus, InvoiceTemplate};
use invoiceflow::render::format_inr;
use invoiceflow::store::{Action, Store};
use invoiceflow::views;

use super::{Page, View, generate_id};

const SAVE_DRAFT_OPT: &str = "💾 Save as Draft";
const SEND_OPT: &str = "📨 Create & Send Invoice";
const SAVE_OPT: &str = "💾 Save Invoice";

pub fn screen(store: &mut Store, existing_id: Option<&str>) -> Result<View> {
    let snapshot = store.state().clone();

    // The original blocks submission with a "select a client" alert; here
    // there is nothing to select yet, so bounce to the clients page.
    if snapshot.clients.is_empty() {
        println!("⚠️  Please add a client before creating an invoice.");
        return Ok(View::App(Page::Clients));
    }

    let existing = existing_id.and_then(|id| snapshot.invoice(id)).cloned();
    if existing_id.is_some() && existing.is_none() {
        println!("❌ Invoice not found.");
        return Ok(View::App(Page::Invoices { client: None }));
    }

    println!(
        "\n--- {} ---",
        if existing.is_some() {
            "Edit Invoice"
        } else {
            "Create Invoice"
        }
    );

    // Client. Submitting re-snapshots the client from the current list, so
    // editing an invoice refreshes its embedded copy.
    let labels: Vec<String> = snapshot
        .clients
        .iter()
        .map(|c| format!("{} <{}>", c.name, c.email))
        .collect();
    let preselected = existing
        .as_ref()
        .and_then(|inv| snapshot.clients.iter().position(|c| c.id == inv.client.id))
        .unwrap_or(0);
    let client = match Select::new("Client:", labels.clone())
        .with_starting_cursor(preselected)
        .prompt()
    {
        Ok(choice) => {
            let idx = labels.iter().position(|l| *l == choice).unwrap_or(0);
            snapshot.clients[idx].clone()
        }
        Err(_) => return Ok(View::App(Page::Invoices { client: None })),
    };

    let suggested_number = match &existing {
        Some(inv) => inv.invoice_number.clone(),
        None => format!(
            "INV-{}-{:03}",
            Local::now().year(),
            snapshot.invoices.len() + 1
        ),
    };
    let invoice_number = Text::new("Invoice Number:")
        .with_default(&suggested_number)
        .prompt()
        .unwrap_or_else(|_| suggested_number.clone());

    let issue_default = existing
        .as_ref()
        .map(|inv| inv.issue_date)
        .unwrap_or_else(|| Local::now().date_naive());
    let issue_date = match DateSelect::new("Issue Date:").with_default(issue_default).prompt() {
        Ok(date) => date,
        Err(_) => return Ok(View::App(Page::Invoices { client: None })),
    };
    let due_default = existing
        .as_ref()
        .map(|inv| inv.due_date)
        .unwrap_or(issue_date + Duration::days(15));
    let due_date = match DateSelect::new("Due Date:").with_default(due_default).prompt() {
        Ok(date) => date,
        Err(_) => return Ok(View::App(Page::Invoices { client: None })),
    };

    let mut items = existing.as_ref().map(|inv| inv.items.clone()).unwrap_or_default();
    if !items.is_empty() {
        println!("Current items:");
        for item in &items {
            println!(
                "  {} · {} × {} = {}",
                item.description,
                item.quantity,
                format_inr(item.rate),
                format_inr(views::line_total(item))
            );
        }
        let replace = Confirm::new("Re-enter the item list?")
            .with_default(false)
            .prompt()
            .unwrap_or(false);
        if replace {
            items = enter_items();
        }
    } else {
        items = enter_items();
    }

    if items.is_empty() {
        println!("❌ No items entered. Aborting.");
        return Ok(View::App(Page::Invoices { client: None }));
    }

    let default_notes = existing
        .as_ref()
        .map(|inv| inv.notes.clone())
        .unwrap_or_else(|| {
            "Thank you for your business. Payment is due within 15 days.".to_string()
        });
    let notes = Text::new("Notes:")
        .with_default(&default_notes)
        .prompt()
        .unwrap_or_else(|_| default_notes.clone());

    let template = pick_template(
        existing
            .as_ref()
            .map(|inv| inv.template)
            .unwrap_or(snapshot.settings.default_template),
    );

    let totals = views::invoice_totals(&items);
    println!();
    println!("  Subtotal:  {}", format_inr(totals.subtotal));
    println!("  GST (18%): {}", format_inr(totals.gst));
    println!("  Total:     {}", format_inr(totals.total));
    println!();

    let status = match &existing {
        Some(inv) => {
            let keep = format!("{SAVE_OPT} (stays {})", inv.status);
            match Select::new("Save:", vec![keep.clone(), SAVE_DRAFT_OPT.to_string()]).prompt() {
                Ok(choice) if choice == keep => inv.status,
                Ok(_) => InvoiceStatus::Draft,
                Err(_) => return Ok(View::App(Page::Invoices { client: None })),
            }
        }
        None => match Select::new("Save:", vec![SEND_OPT, SAVE_DRAFT_OPT]).prompt() {
            Ok(SEND_OPT) => InvoiceStatus::Pending,
            Ok(_) => InvoiceStatus::Draft,
            Err(_) => return Ok(View::App(Page::Invoices { client: None })),
        },
    };

    let id = existing
        .as_ref()
        .map(|inv| inv.id.clone())
        .unwrap_or_else(|| generate_id("inv"));
    let invoice = Invoice {
        id: id.clone(),
        invoice_number,
        client,
        items,
        issue_date,
        due_date,
        status,
        notes,
        subtotal: totals.subtotal,
        gst: totals.gst,
        total: totals.total,
        template,
    };

    if existing.is_some() {
        store.dispatch(Action::UpdateInvoice(invoice));
    } else {
        store.dispatch(Action::AddInvoice(invoice));
    }
    println!("✅ Invoice saved.");
    Ok(View::App(Page::InvoiceDetail { id }))
}

fn enter_items() -> Vec<InvoiceItem> {
    let mut items = Vec::new();
    println!("\n--- Enter Invoice Items ---");
    println!("(Leave Description empty to finish)");

    loop {
        let description = match Text::new("Description (leave empty to finish):").prompt() {
            Ok(description) => description,
            Err(_) => break,
        };
        if description.trim().is_empty() {
            break;
        }

        let quantity: f64 = Text::new("Quantity:")
            .with_default("1")
            .prompt()
            .ok()
            .and_then(|q| q.parse().ok())
            .unwrap_or(1.0);
        let rate: f64 = Text::new("Rate (₹):")
            .prompt()
            .ok()
            .and_then(|r| r.parse().ok())
            .unwrap_or(0.0);

        let item = InvoiceItem {
            id: generate_id("item"),
            description,
            quantity,
            rate,
        };
        println!("  = {}", format_inr(views::line_total(&item)));
        items.push(item);
    }
    items
}

fn pick_template(default: InvoiceTemplate) -> InvoiceTemplate {
    let templates: Vec<InvoiceTemplate> = InvoiceTemplate::iter().collect();
    let cursor = templates.iter().position(|t| *t == default).unwrap_or(0);
    let labels: Vec<String> = templates.iter().map(|t| t.to_string()).collect();
    match Select::new("Template:", labels.clone())
        .with_starting_cursor(cursor)
        .prompt()
    {
        Ok(choice) => {
            let idx = labels.iter().position(|l| *l == choice).unwrap_or(cursor);
            templates[idx]
        }
        Err(_) => default,
    }
}
