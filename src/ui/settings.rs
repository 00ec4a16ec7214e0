//! Settings screen: user identity, company details, default template.
//! Saving replaces the whole settings record.

use anyhow::Result;
use inquire::{Select, Text};
use strum::IntoEnumIterator;

use invoiceflow::model::{InvoiceTemplate, Settings};
use invoiceflow::store::{Action, Store};

use super::{Page, View};

pub fn screen(store: &mut Store) -> Result<View> {
    let current = store.state().settings.clone();

    println!("\n--- Settings ---");
    println!("Manage your business and invoice details.");

    let Some(user_name) = field("Your Name:", &current.user_name) else {
        return Ok(View::App(Page::Dashboard));
    };
    let Some(user_email) = field("Your Email:", &current.user_email) else {
        return Ok(View::App(Page::Dashboard));
    };
    let Some(company_name) = field("Company Name:", &current.company_name) else {
        return Ok(View::App(Page::Dashboard));
    };
    let Some(company_address) = field("Company Address:", &current.company_address) else {
        return Ok(View::App(Page::Dashboard));
    };
    let Some(company_gst) = field("Company GST Number:", &current.company_gst) else {
        return Ok(View::App(Page::Dashboard));
    };

    let templates: Vec<InvoiceTemplate> = InvoiceTemplate::iter().collect();
    let labels: Vec<String> = templates.iter().map(|t| t.to_string()).collect();
    let cursor = templates
        .iter()
        .position(|t| *t == current.default_template)
        .unwrap_or(0);
    let default_template = match Select::new("Default Template:", labels.clone())
        .with_starting_cursor(cursor)
        .prompt()
    {
        Ok(choice) => {
            let idx = labels.iter().position(|l| *l == choice).unwrap_or(cursor);
            templates[idx]
        }
        Err(_) => return Ok(View::App(Page::Dashboard)),
    };

    store.dispatch(Action::UpdateSettings(Settings {
        user_name,
        user_email,
        company_name,
        company_address,
        company_gst,
        default_template,
    }));
    println!("✅ Settings saved!");
    Ok(View::App(Page::Dashboard))
}

fn field(label: &str, default: &str) -> Option<String> {
    Text::new(label).with_default(default).prompt().ok()
}
