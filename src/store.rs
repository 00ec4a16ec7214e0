//! The state container: three collections and a pure transition function.
//!
//! Every mutation in the application is one of the six [`Action`] kinds.
//! [`reduce`] consumes the current snapshot and returns the next one, so a
//! reader holding a snapshot never observes a half-applied transition. No
//! action can fail: updates and deletes against an unknown id are silent
//! no-ops.

use std::mem;

use anyhow::Result;
use log::{debug, info};

use crate::fixtures;
use crate::model::{Client, Invoice, Settings};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub invoices: Vec<Invoice>,
    pub clients: Vec<Client>,
    pub settings: Settings,
}

impl AppState {
    /// Initial container, seeded from the embedded fixtures.
    pub fn seeded() -> Result<Self> {
        let state = AppState {
            invoices: fixtures::invoices()?,
            clients: fixtures::clients()?,
            settings: fixtures::settings()?,
        };
        info!(
            "seeded state with {} invoices and {} clients",
            state.invoices.len(),
            state.clients.len()
        );
        Ok(state)
    }

    pub fn invoice(&self, id: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|inv| inv.id == id)
    }

    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    AddInvoice(Invoice),
    UpdateInvoice(Invoice),
    DeleteInvoice(String),
    AddClient(Client),
    UpdateClient(Client),
    UpdateSettings(Settings),
}

impl Action {
    fn kind(&self) -> &'static str {
        match self {
            Action::AddInvoice(_) => "add_invoice",
            Action::UpdateInvoice(_) => "update_invoice",
            Action::DeleteInvoice(_) => "delete_invoice",
            Action::AddClient(_) => "add_client",
            Action::UpdateClient(_) => "update_client",
            Action::UpdateSettings(_) => "update_settings",
        }
    }
}

/// Applies one action and returns the next snapshot.
///
/// Appends preserve insertion order and skip any uniqueness check on id or
/// invoice number; updates replace every entry whose id matches.
pub fn reduce(state: AppState, action: Action) -> AppState {
    debug!("applying {}", action.kind());
    let mut state = state;
    match action {
        Action::AddInvoice(invoice) => state.invoices.push(invoice),
        Action::UpdateInvoice(invoice) => {
            for slot in state.invoices.iter_mut().filter(|inv| inv.id == invoice.id) {
                *slot = invoice.clone();
            }
        }
        Action::DeleteInvoice(id) => state.invoices.retain(|inv| inv.id != id),
        Action::AddClient(client) => state.clients.push(client),
        Action::UpdateClient(client) => {
            for slot in state.clients.iter_mut().filter(|c| c.id == client.id) {
                *slot = client.clone();
            }
        }
        Action::UpdateSettings(settings) => state.settings = settings,
    }
    state
}

/// Owner of the live snapshot for one session.
///
/// Presentation code reads through [`Store::state`] and mutates only through
/// [`Store::dispatch`]; the snapshot itself is never handed out mutably.
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Store { state }
    }

    pub fn seeded() -> Result<Self> {
        Ok(Store::new(AppState::seeded()?))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        let state = mem::take(&mut self.state);
        self.state = reduce(state, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InvoiceStatus, InvoiceTemplate};
    use chrono::NaiveDate;

    fn client(id: &str, name: &str) -> Client {
        Client {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{id}@example.com"),
            address: "42 Residency Road, Bengaluru".to_string(),
            gst_number: "29ABCDE1234F1Z5".to_string(),
            avatar_url: None,
        }
    }

    fn invoice(id: &str, number: &str) -> Invoice {
        Invoice {
            id: id.to_string(),
            invoice_number: number.to_string(),
            client: client("c1", "Rohan Sharma"),
            items: vec![],
            issue_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 7, 16).unwrap(),
            status: InvoiceStatus::Draft,
            notes: String::new(),
            subtotal: 0.0,
            gst: 0.0,
            total: 0.0,
            template: InvoiceTemplate::Classic,
        }
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut state = AppState::default();
        for id in ["a", "b", "c"] {
            state = reduce(state, Action::AddInvoice(invoice(id, "INV-1")));
        }
        let ids: Vec<&str> = state.invoices.iter().map(|inv| inv.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn add_skips_uniqueness_checks() {
        let mut state = AppState::default();
        state = reduce(state, Action::AddInvoice(invoice("dup", "INV-1")));
        state = reduce(state, Action::AddInvoice(invoice("dup", "INV-1")));
        assert_eq!(state.invoices.len(), 2);
    }

    #[test]
    fn update_replaces_the_matching_invoice() {
        let mut state = AppState::default();
        state = reduce(state, Action::AddInvoice(invoice("a", "INV-1")));
        state = reduce(state, Action::AddInvoice(invoice("b", "INV-2")));

        let mut updated = invoice("b", "INV-2");
        updated.notes = "revised".to_string();
        state = reduce(state, Action::UpdateInvoice(updated));

        assert_eq!(state.invoices[0].notes, "");
        assert_eq!(state.invoices[1].notes, "revised");
    }

    #[test]
    fn update_on_unknown_id_is_an_identity_no_op() {
        let mut state = AppState::default();
        state = reduce(state, Action::AddInvoice(invoice("a", "INV-1")));
        let before = state.clone();

        let state = reduce(state, Action::UpdateInvoice(invoice("ghost", "INV-9")));
        assert_eq!(state, before);

        let state = reduce(state, Action::UpdateClient(client("ghost", "Nobody")));
        assert_eq!(state, before);
    }

    #[test]
    fn delete_removes_only_the_matching_id() {
        let mut state = AppState::default();
        for id in ["a", "b", "c"] {
            state = reduce(state, Action::AddInvoice(invoice(id, "INV-1")));
        }
        state = reduce(state, Action::DeleteInvoice("b".to_string()));
        let ids: Vec<&str> = state.invoices.iter().map(|inv| inv.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);

        let before = state.clone();
        let state = reduce(state, Action::DeleteInvoice("ghost".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn add_update_delete_sequence_keeps_one_entry_per_surviving_id() {
        let mut state = AppState::default();
        state = reduce(state, Action::AddInvoice(invoice("a", "INV-1")));
        state = reduce(state, Action::AddInvoice(invoice("b", "INV-2")));
        state = reduce(state, Action::AddInvoice(invoice("c", "INV-3")));

        let mut second = invoice("b", "INV-2");
        second.notes = "first pass".to_string();
        state = reduce(state, Action::UpdateInvoice(second));
        let mut second = invoice("b", "INV-2");
        second.notes = "second pass".to_string();
        state = reduce(state, Action::UpdateInvoice(second));
        state = reduce(state, Action::DeleteInvoice("a".to_string()));

        let ids: Vec<&str> = state.invoices.iter().map(|inv| inv.id.as_str()).collect();
        assert_eq!(ids, ["b", "c"]);
        assert_eq!(state.invoices[0].notes, "second pass");
    }

    #[test]
    fn update_settings_replaces_wholesale() {
        let mut state = AppState::default();
        state.settings.user_name = "Ananya Roy".to_string();
        state.settings.company_name = "Ananya Roy Designs".to_string();

        let replacement = Settings {
            user_name: "Ananya R.".to_string(),
            ..Settings::default()
        };
        let state = reduce(state, Action::UpdateSettings(replacement));

        assert_eq!(state.settings.user_name, "Ananya R.");
        // Wholesale replacement: fields absent from the new value are gone.
        assert_eq!(state.settings.company_name, "");
    }

    #[test]
    fn store_dispatch_swaps_snapshots() {
        let mut store = Store::default();
        store.dispatch(Action::AddClient(client("c9", "Meera Nair")));
        assert_eq!(store.state().clients.len(), 1);
        assert!(store.state().client("c9").is_some());
        assert!(store.state().client("c1").is_none());
    }

    #[test]
    fn seeded_store_matches_the_fixtures() {
        let store = Store::seeded().expect("fixtures parse");
        assert_eq!(store.state().invoices.len(), 6);
        assert_eq!(store.state().clients.len(), 4);
        assert_eq!(store.state().settings.user_name, "Ananya Roy");
    }
}
