//! End-to-end exercises of the seeded workspace: dispatching the same
//! action sequences the screens produce and checking what the derived
//! views report afterwards.

use chrono::NaiveDate;

use invoiceflow::model::{
    Client, GST_RATE, Invoice, InvoiceItem, InvoiceStatus, InvoiceTemplate, Settings,
};
use invoiceflow::render::DocumentRenderer;
use invoiceflow::store::{Action, Store};
use invoiceflow::views;

fn new_client(id: &str, name: &str) -> Client {
    Client {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{id}@example.com"),
        address: "5th Block, Koramangala, Bengaluru".to_string(),
        gst_number: "29ABCDE1234F1Z5".to_string(),
        avatar_url: Some(format!("https://i.pravatar.cc/150?u={id}")),
    }
}

/// Build an invoice the way the form does: totals derived from the items.
fn new_invoice(id: &str, number: &str, client: &Client, items: Vec<InvoiceItem>) -> Invoice {
    let totals = views::invoice_totals(&items);
    Invoice {
        id: id.to_string(),
        invoice_number: number.to_string(),
        client: client.clone(),
        items,
        issue_date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2024, 8, 16).unwrap(),
        status: InvoiceStatus::Pending,
        notes: "Thank you for your business.".to_string(),
        subtotal: totals.subtotal,
        gst: totals.gst,
        total: totals.total,
        template: InvoiceTemplate::Classic,
    }
}

fn item(description: &str, quantity: f64, rate: f64) -> InvoiceItem {
    InvoiceItem {
        id: format!("item-{}", description.len()),
        description: description.to_string(),
        quantity,
        rate,
    }
}

#[test]
fn seeded_dashboard_matches_the_fixture_numbers() {
    let store = Store::seeded().expect("fixtures parse");
    // A date inside the fixtures' month, so paid-this-month is non-zero.
    let today = NaiveDate::from_ymd_opt(2024, 7, 28).unwrap();
    let summary = views::dashboard_summary(&store.state().invoices, today);

    // Pending: 26550 + 41300; Overdue: 9440; Paid in July 2024: 17700 + 14160.
    assert_eq!(summary.outstanding, 77290.0);
    assert_eq!(summary.overdue, 9440.0);
    assert_eq!(summary.paid_this_month, 31860.0);
    assert_eq!(summary.invoice_count, 6);
}

#[test]
fn create_edit_delete_flow_through_the_store() {
    let mut store = Store::seeded().expect("fixtures parse");
    let client = new_client("c9", "Meera Nair");
    store.dispatch(Action::AddClient(client.clone()));

    let invoice = new_invoice(
        "inv9",
        "INV-2024-007",
        &client,
        vec![item("Brand guidelines", 2.0, 100.0), item("Icon set", 1.0, 50.0)],
    );
    assert_eq!(invoice.subtotal, 250.0);
    assert_eq!(invoice.gst, 45.0);
    assert_eq!(invoice.total, 295.0);
    store.dispatch(Action::AddInvoice(invoice.clone()));

    assert_eq!(store.state().invoices.len(), 7);
    assert_eq!(views::client_invoice_count(&store.state().invoices, "c9"), 1);

    // Mark as paid, the way the detail screen does.
    let mut paid = invoice.clone();
    paid.status = InvoiceStatus::Paid;
    store.dispatch(Action::UpdateInvoice(paid));
    assert_eq!(
        store.state().invoice("inv9").expect("still present").status,
        InvoiceStatus::Paid
    );

    store.dispatch(Action::DeleteInvoice("inv9".to_string()));
    assert!(store.state().invoice("inv9").is_none());
    assert_eq!(store.state().invoices.len(), 6);
}

#[test]
fn editing_a_client_does_not_rewrite_embedded_copies() {
    let mut store = Store::seeded().expect("fixtures parse");

    let mut rohan = store.state().client("c1").expect("seeded").clone();
    rohan.address = "New address, Pune".to_string();
    store.dispatch(Action::UpdateClient(rohan));

    assert_eq!(
        store.state().client("c1").expect("updated").address,
        "New address, Pune"
    );
    // inv1 keeps the address Rohan had when it was written.
    assert_eq!(
        store.state().invoice("inv1").expect("seeded").client.address,
        "123 Tech Park, Bengaluru, 560100"
    );
}

#[test]
fn filtered_and_paginated_listing_over_a_grown_workspace() {
    let mut store = Store::seeded().expect("fixtures parse");
    let client = new_client("c9", "Meera Nair");
    store.dispatch(Action::AddClient(client.clone()));
    for n in 0..10 {
        let invoice = new_invoice(
            &format!("extra{n}"),
            &format!("INV-2024-{:03}", n + 7),
            &client,
            vec![item("Retainer", 1.0, 1000.0)],
        );
        store.dispatch(Action::AddInvoice(invoice));
    }

    let filtered = views::filter_invoices(&store.state().invoices, Some("c9"), None);
    assert_eq!(filtered.len(), 10);
    assert_eq!(views::total_pages(filtered.len(), 8), 2);
    assert_eq!(views::paginate(&filtered, 8, 1).len(), 8);
    assert_eq!(views::paginate(&filtered, 8, 2).len(), 2);
    assert!(views::paginate(&filtered, 8, 3).is_empty());

    let pending = views::filter_invoices(
        &store.state().invoices,
        Some("c9"),
        Some(InvoiceStatus::Pending),
    );
    assert_eq!(pending.len(), 10);
}

#[test]
fn settings_update_flows_into_rendered_documents() {
    let mut store = Store::seeded().expect("fixtures parse");
    let renderer = DocumentRenderer::new().expect("templates parse");

    store.dispatch(Action::UpdateSettings(Settings {
        user_name: "Ananya Roy".to_string(),
        user_email: "ananya@freelance.com".to_string(),
        company_name: "Roy & Partners".to_string(),
        company_address: "7th Main, Indiranagar, Bengaluru, 560038".to_string(),
        company_gst: "29AABBCCDDE1Z2".to_string(),
        default_template: InvoiceTemplate::Modern,
    }));

    let state = store.state();
    let invoice = state.invoice("inv2").expect("seeded");
    let document = renderer.render(invoice, &state.settings).expect("renders");

    assert!(document.contains("Roy & Partners"));
    assert!(document.contains("INV-2024-002"));
    assert!(document.contains("Priya Patel"));
    assert!(document.contains("₹26,550.00"));
}

#[test]
fn gst_rate_is_the_flat_eighteen_percent() {
    assert_eq!(GST_RATE, 0.18);
    let totals = views::invoice_totals(&[item("Audit", 1.0, 100.0)]);
    assert_eq!(totals.gst, 18.0);
}
