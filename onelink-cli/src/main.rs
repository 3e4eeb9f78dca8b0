//! Developer CLI for One Link.
//!
//! Exercises the card store the way a host app would: the card collection is
//! in-memory per process, and only the default-card id persists (in a JSON
//! settings file instead of a platform preference store). Because seed-card
//! ids are stable, `set-default` on a seeded card followed by `list` in a
//! later invocation demonstrates default resolution across processes.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use eyre::{eyre, Result};
use onelink_core::{
    physical_card, tracking_pins, tracking_region, CardKind, CardStore, FileSettingsStore,
    SettingsStore,
};

#[derive(Parser)]
#[command(name = "onelink", about = "Developer CLI for the One Link wallet core", version)]
struct Cli {
    /// Directory holding the settings file. Defaults to the platform data
    /// directory.
    #[arg(long, env = "ONELINK_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the cards of this launch, with selection and default markers.
    List {
        /// Emit the collection as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Add a card to this launch's collection.
    Add {
        /// Card kind: bank, loyalty or other.
        #[arg(long, default_value = "bank")]
        kind: String,
        /// Display title. Must not be empty.
        #[arg(long)]
        title: String,
        /// Free-form details line.
        #[arg(long, default_value = "")]
        details: String,
    },
    /// Replace a card's kind, title and details.
    Edit {
        /// Id of the card to edit.
        id: String,
        /// Card kind: bank, loyalty or other.
        #[arg(long)]
        kind: String,
        /// New display title.
        #[arg(long)]
        title: String,
        /// New details line.
        #[arg(long, default_value = "")]
        details: String,
    },
    /// Activate a card for this invocation.
    Select {
        /// Id of the card to activate.
        id: String,
    },
    /// Make a card the default for future launches.
    SetDefault {
        /// Id of the card to persist as default.
        id: String,
    },
    /// Show the physical card descriptor.
    Show,
    /// Show the tracking pins and map region.
    WhereIs,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let store = open_store(cli.data_dir)?;

    match cli.command {
        Command::List { json } => list(&store, json)?,
        Command::Add {
            kind,
            title,
            details,
        } => {
            let card = store.add_card(parse_kind(&kind)?, title, details)?;
            println!("added {} ({})", card.title, card.id);
            println!("note: added cards live for this invocation only; the default id is what persists");
        }
        Command::Edit {
            id,
            kind,
            title,
            details,
        } => {
            store.update_card(id.clone(), parse_kind(&kind)?, title, details)?;
            println!("updated {id}");
        }
        Command::Select { id } => {
            store.select_card(id)?;
            let title = store
                .selected_card()
                .map_or_else(|| "card".to_string(), |card| card.title);
            println!("You have successfully activated {title}.");
        }
        Command::SetDefault { id } => {
            store.set_default_card(id.clone())?;
            println!("default card set to {id}");
        }
        Command::Show => show_physical_card(),
        Command::WhereIs => show_tracking(),
    }

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Opens the store over the file-backed settings and applies the persisted
/// default, as a host app would at startup.
fn open_store(data_dir: Option<PathBuf>) -> Result<Arc<CardStore>> {
    let dir = match data_dir {
        Some(dir) => dir,
        None => dirs::data_dir()
            .ok_or_else(|| eyre!("no platform data directory; pass --data-dir"))?
            .join("onelink"),
    };
    tracing::debug!("using settings under {}", dir.display());

    let settings: Arc<dyn SettingsStore> =
        Arc::new(FileSettingsStore::open(dir.join("settings.json")));
    let store = CardStore::new(settings);
    store.resolve_default_card();
    Ok(store)
}

fn parse_kind(kind: &str) -> Result<CardKind> {
    CardKind::from_str(kind)
        .map_err(|_| eyre!("unknown card kind {kind:?}; expected bank, loyalty or other"))
}

fn list(store: &CardStore, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&store.cards())?);
        return Ok(());
    }

    let selected = store.selected_card_id();
    let default = store.default_card_id();
    for card in store.cards() {
        let marker = if selected.as_ref() == Some(&card.id) {
            "*"
        } else {
            " "
        };
        let default_note = if default.as_ref() == Some(&card.id) {
            " [default]"
        } else {
            ""
        };
        println!(
            "{marker} {}  {} ({}): {}{default_note}",
            card.id,
            card.title,
            card.kind,
            card.details
        );
    }
    Ok(())
}

fn show_physical_card() {
    let card = physical_card();
    println!("{}", card.brand);
    println!("{}", card.number);
    println!("CARDHOLDER {}   EXPIRES {}", card.cardholder, card.expiry);
    println!(
        "colors: {} -> {}, accent {}",
        card.gradient_start_hex, card.gradient_end_hex, card.accent_hex
    );
}

fn show_tracking() {
    let region = tracking_region();
    println!(
        "region: {:.6}, {:.6} (span {:.3} x {:.3})",
        region.center_latitude, region.center_longitude, region.latitude_span, region.longitude_span
    );
    for pin in tracking_pins() {
        println!(
            "{:<4} at {:.6}, {:.6}",
            pin.kind.label(),
            pin.latitude,
            pin.longitude
        );
    }
}
