mod ui;

use std::str::FromStr;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};

use invoiceflow::model::InvoiceStatus;
use invoiceflow::render::DocumentRenderer;
use invoiceflow::store::Store;

#[derive(Parser)]
#[command(name = "invoiceflow", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard summary
    Summary,
    /// List invoices, optionally filtered by status (Draft, Pending, Overdue, Paid)
    Invoices { status: Option<String> },
    /// List clients
    Clients,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // All state is in memory, seeded from the embedded fixtures, and lost on
    // exit; the subcommands are read-only looks at the same seed.
    let mut store = Store::seeded()?;

    match cli.command {
        None => {
            let renderer = DocumentRenderer::new()?;
            ui::run(&mut store, &renderer)?;
        }
        Some(Commands::Summary) => ui::dashboard::print_summary(store.state()),
        Some(Commands::Invoices { status }) => {
            let status = status
                .map(|raw| {
                    InvoiceStatus::from_str(&raw).map_err(|_| {
                        anyhow!("unknown status '{raw}' (expected Draft, Pending, Overdue or Paid)")
                    })
                })
                .transpose()?;
            ui::invoices::print_list(store.state(), None, status);
        }
        Some(Commands::Clients) => ui::clients::print_table(store.state()),
    }
    Ok(())
}
