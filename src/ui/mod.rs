//! Interactive terminal frontend.
//!
//! Routing state lives here, outside the domain store: a [`View`] picks the
//! top-level screen and a [`Page`] picks the workspace page, mirroring the
//! sidebar of the hosted app. Screens read a snapshot, draw, and hand back
//! the next view; every mutation goes through [`Store::dispatch`].

pub mod clients;
pub mod dashboard;
pub mod invoice_form;
pub mod invoices;
pub mod landing;
pub mod settings;

use anyhow::Result;
use chrono::Local;
use comfy_table::{Cell, Color};
use inquire::Select;
use rand::Rng;

use invoiceflow::model::InvoiceStatus;
use invoiceflow::render::DocumentRenderer;
use invoiceflow::store::Store;

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Landing,
    Login,
    App(Page),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Dashboard,
    Invoices { client: Option<String> },
    InvoiceDetail { id: String },
    InvoiceNew,
    InvoiceEdit { id: String },
    Clients,
    Expenses,
    Settings,
}

pub fn run(store: &mut Store, renderer: &DocumentRenderer) -> Result<()> {
    let mut view = View::Landing;
    loop {
        view = match view {
            View::Landing => landing::landing_screen(),
            View::Login => landing::login_screen(),
            View::App(page) => page_screen(store, renderer, page)?,
            View::Quit => {
                println!("👋 Bye!");
                return Ok(());
            }
        };
    }
}

fn page_screen(store: &mut Store, renderer: &DocumentRenderer, page: Page) -> Result<View> {
    match page {
        Page::Dashboard => dashboard::screen(store),
        Page::Invoices { client } => invoices::screen(store, client),
        Page::InvoiceDetail { id } => invoices::detail(store, renderer, &id),
        Page::InvoiceNew => invoice_form::screen(store, None),
        Page::InvoiceEdit { id } => invoice_form::screen(store, Some(&id)),
        Page::Clients => clients::screen(store),
        Page::Expenses => Ok(expenses_screen()),
        Page::Settings => settings::screen(store),
    }
}

fn expenses_screen() -> View {
    println!("\n--- Expenses ---");
    println!("Expense tracking coming soon.");
    sidebar()
}

const NAV_DASHBOARD: &str = "📊 Dashboard";
const NAV_INVOICES: &str = "📄 Invoices";
const NAV_CLIENTS: &str = "👥 Clients";
const NAV_EXPENSES: &str = "💸 Expenses";
const NAV_SETTINGS: &str = "⚙️  Settings";
const NAV_SIGN_OUT: &str = "🚪 Sign Out";

/// The sidebar, as a jump menu.
pub(crate) fn sidebar() -> View {
    let options = vec![
        NAV_DASHBOARD,
        NAV_INVOICES,
        NAV_CLIENTS,
        NAV_EXPENSES,
        NAV_SETTINGS,
        NAV_SIGN_OUT,
    ];
    match Select::new("Go to:", options).prompt() {
        Ok(NAV_INVOICES) => View::App(Page::Invoices { client: None }),
        Ok(NAV_CLIENTS) => View::App(Page::Clients),
        Ok(NAV_EXPENSES) => View::App(Page::Expenses),
        Ok(NAV_SETTINGS) => View::App(Page::Settings),
        Ok(NAV_SIGN_OUT) => View::Landing,
        Ok(_) | Err(_) => View::App(Page::Dashboard),
    }
}

/// Status cell colored like the hosted app's badges.
pub(crate) fn status_cell(status: InvoiceStatus) -> Cell {
    let cell = Cell::new(status);
    match status {
        InvoiceStatus::Paid => cell.fg(Color::Rgb { r: 4, g: 120, b: 87 }),
        InvoiceStatus::Overdue => cell.fg(Color::Rgb { r: 185, g: 28, b: 28 }),
        InvoiceStatus::Pending => cell.fg(Color::Rgb { r: 217, g: 119, b: 6 }),
        InvoiceStatus::Draft => cell.fg(Color::DarkGrey),
    }
}

/// Fresh id for invoices, items and clients. Ids are assigned here in the
/// frontend, never by the store.
pub(crate) fn generate_id(prefix: &str) -> String {
    let nonce: u32 = rand::thread_rng().gen_range(0..0x100_0000);
    format!("{}-{}-{:06x}", prefix, Local::now().timestamp_millis(), nonce)
}
