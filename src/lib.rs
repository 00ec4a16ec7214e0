//! InvoiceFlow core: domain types, the fixture seed, the state container
//! and the derived views computed from its snapshots, plus printable
//! invoice documents. The interactive terminal frontend lives in the
//! binary and only ever reads snapshots and dispatches actions.

pub mod fixtures;
pub mod model;
pub mod render;
pub mod store;
pub mod views;
