//! Seed data for a fresh session.
//!
//! The sample clients, invoices and workspace settings are embedded at
//! compile time and parsed on startup. Nothing is ever written back; the
//! session starts from this snapshot and loses its changes on exit.

use anyhow::{Context, Result};

use crate::model::{Client, Invoice, Settings};

const CLIENTS_JSON: &str = include_str!("../fixtures/clients.json");
const INVOICES_JSON: &str = include_str!("../fixtures/invoices.json");
const SETTINGS_TOML: &str = include_str!("../fixtures/settings.toml");

pub fn clients() -> Result<Vec<Client>> {
    serde_json::from_str(CLIENTS_JSON).context("embedded clients.json failed to parse")
}

pub fn invoices() -> Result<Vec<Invoice>> {
    serde_json::from_str(INVOICES_JSON).context("embedded invoices.json failed to parse")
}

pub fn settings() -> Result<Settings> {
    toml::from_str(SETTINGS_TOML).context("embedded settings.toml failed to parse")
}
