//! Client list and the add/edit client form.

use anyhow::Result;
use comfy_table::{Cell, Table};
use inquire::validator::{ErrorMessage, Validation};
use inquire::{Select, Text};
use regex::Regex;

use invoiceflow::model::Client;
use invoiceflow::store::{Action, AppState, Store};
use invoiceflow::views;

use super::{Page, View, generate_id, sidebar};

const ADD_CLIENT_OPT: &str = "➕ Add Client";
const EDIT_CLIENT_OPT: &str = "✏️  Edit Client";
const VIEW_INVOICES_OPT: &str = "📄 View a Client's Invoices";
const MENU_OPT: &str = "🧭 Menu";

pub fn screen(store: &mut Store) -> Result<View> {
    let snapshot = store.state().clone();
    print_table(&snapshot);

    let mut options = vec![ADD_CLIENT_OPT];
    if !snapshot.clients.is_empty() {
        options.push(EDIT_CLIENT_OPT);
        options.push(VIEW_INVOICES_OPT);
    }
    options.push(MENU_OPT);

    let next = match Select::new("Clients:", options).prompt() {
        Ok(ADD_CLIENT_OPT) => {
            if let Some(client) = client_form(None) {
                store.dispatch(Action::AddClient(client));
                println!("✅ Client added.");
            }
            View::App(Page::Clients)
        }
        Ok(EDIT_CLIENT_OPT) => {
            if let Some(existing) = pick_client(&snapshot) {
                if let Some(client) = client_form(Some(&existing)) {
                    store.dispatch(Action::UpdateClient(client));
                    println!("✅ Client updated.");
                }
            }
            View::App(Page::Clients)
        }
        Ok(VIEW_INVOICES_OPT) => match pick_client(&snapshot) {
            Some(client) => View::App(Page::Invoices {
                client: Some(client.id),
            }),
            None => View::App(Page::Clients),
        },
        Ok(_) => sidebar(),
        Err(_) => View::App(Page::Dashboard),
    };
    Ok(next)
}

pub fn print_table(state: &AppState) {
    println!("\n--- Clients ---");
    if state.clients.is_empty() {
        println!("No clients found. Add your first client to get started.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Name"),
        Cell::new("Email"),
        Cell::new("GST Number"),
        Cell::new("Invoices"),
    ]);
    for client in &state.clients {
        table.add_row(vec![
            Cell::new(&client.name),
            Cell::new(&client.email),
            Cell::new(&client.gst_number),
            Cell::new(views::client_invoice_count(&state.invoices, &client.id)),
        ]);
    }
    println!("{table}");
}

fn pick_client(state: &AppState) -> Option<Client> {
    let labels: Vec<String> = state
        .clients
        .iter()
        .map(|c| format!("{} <{}>", c.name, c.email))
        .collect();
    match Select::new("Which client?", labels.clone()).prompt() {
        Ok(choice) => {
            let idx = labels.iter().position(|l| *l == choice)?;
            Some(state.clients[idx].clone())
        }
        Err(_) => None,
    }
}

/// Add/edit wizard. Returns `None` when the user backs out.
fn client_form(existing: Option<&Client>) -> Option<Client> {
    println!(
        "\n--- {} ---",
        if existing.is_some() {
            "Edit Client"
        } else {
            "Add New Client"
        }
    );

    let name = prompt_required("Full Name:", existing.map(|c| c.name.as_str()))?;
    let email = prompt_matching(
        "Email:",
        existing.map(|c| c.email.as_str()),
        r"^[^@\s]+@[^@\s]+\.[^@\s]+$",
        "That doesn't look like an email address.",
    )?;
    let address = prompt_required("Address:", existing.map(|c| c.address.as_str()))?;
    let gst_number = prompt_matching(
        "GST Number:",
        existing.map(|c| c.gst_number.as_str()),
        r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][0-9A-Z]Z[0-9A-Z]$",
        "GSTIN format is 15 characters, e.g. 29ABCDE1234F1Z5.",
    )?;

    let id = existing
        .map(|c| c.id.clone())
        .unwrap_or_else(|| generate_id("c"));
    let avatar_url = existing
        .and_then(|c| c.avatar_url.clone())
        .or_else(|| Some(format!("https://i.pravatar.cc/150?u={id}")));

    Some(Client {
        id,
        name,
        email,
        address,
        gst_number,
        avatar_url,
    })
}

fn prompt_required(label: &str, default: Option<&str>) -> Option<String> {
    let mut prompt = Text::new(label).with_validator(|input: &str| {
        if input.trim().is_empty() {
            Ok(Validation::Invalid(ErrorMessage::Custom(
                "This field is required.".to_string(),
            )))
        } else {
            Ok(Validation::Valid)
        }
    });
    if let Some(default) = default {
        prompt = prompt.with_default(default);
    }
    prompt.prompt().ok()
}

fn prompt_matching(
    label: &str,
    default: Option<&str>,
    pattern: &str,
    message: &str,
) -> Option<String> {
    let re = Regex::new(pattern).expect("field pattern is valid");
    let message = message.to_string();
    let mut prompt = Text::new(label).with_validator(move |input: &str| {
        if re.is_match(input.trim()) {
            Ok(Validation::Valid)
        } else {
            Ok(Validation::Invalid(ErrorMessage::Custom(message.clone())))
        }
    });
    if let Some(default) = default {
        prompt = prompt.with_default(default);
    }
    prompt.prompt().ok().map(|v| v.trim().to_string())
}
