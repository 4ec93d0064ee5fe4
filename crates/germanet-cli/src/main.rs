//! GermaNet CLI
//!
//! Thin wrapper around the ingestion crates:
//! - `load`: read the inter-lingual index and/or a Wiktionary paraphrase
//!   directory into an in-memory store, report counts and look up lexical units
//! - `config`: print the default loader configuration as JSON

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use germanet_ingest::{load_ili_file, load_wiktionary_dir, LoaderConfig};
use germanet_model::LexUnitId;
use germanet_store::LexicalStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "germanet")]
#[command(author, version, about = "Load GermaNet ILI and Wiktionary resources")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load resources into memory and report what was found.
    Load {
        /// Inter-lingual index file (e.g. `interLingualIndex_DE-EN.xml`)
        #[arg(long)]
        ili: Option<PathBuf>,
        /// Directory holding `wiktionaryParaphrases*.xml` files
        #[arg(long)]
        wiktionary: Option<PathBuf>,
        /// JSON file overriding element/attribute names
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the records of this lexical unit (repeatable)
        #[arg(long = "lex-unit")]
        lex_units: Vec<LexUnitId>,
    },

    /// Print the default loader configuration as JSON.
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Load {
            ili,
            wiktionary,
            config,
            lex_units,
        } => cmd_load(ili.as_deref(), wiktionary.as_deref(), config.as_deref(), &lex_units),
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&LoaderConfig::default())?);
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(path: Option<&Path>) -> Result<LoaderConfig> {
    let Some(path) = path else {
        return Ok(LoaderConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn cmd_load(
    ili: Option<&Path>,
    wiktionary: Option<&Path>,
    config: Option<&Path>,
    lex_units: &[LexUnitId],
) -> Result<()> {
    if ili.is_none() && wiktionary.is_none() {
        bail!("nothing to load: pass --ili and/or --wiktionary");
    }
    let config = read_config(config)?;
    let mut store = LexicalStore::new();

    if let Some(path) = ili {
        println!("{} ILI records from {}", "Loading".green().bold(), path.display());
        let count = load_ili_file(path, &config.ili, &mut store)
            .with_context(|| format!("loading ILI records from {}", path.display()))?;
        println!("  {count} ILI records");
    }

    if let Some(dir) = wiktionary {
        println!(
            "{} Wiktionary paraphrases from {}",
            "Loading".green().bold(),
            dir.display()
        );
        let count = load_wiktionary_dir(dir, &config.wiktionary, &mut store)
            .with_context(|| format!("loading Wiktionary paraphrases from {}", dir.display()))?;
        println!("  {count} Wiktionary paraphrases");
    }

    println!(
        "{} {} ILI records, {} Wiktionary paraphrases, {} lexical units",
        "Done:".bold(),
        store.ili_record_count(),
        store.wiktionary_paraphrase_count(),
        store.lex_unit_ids().len()
    );

    for &id in lex_units {
        print_lex_unit(&store, id);
    }
    Ok(())
}

fn print_lex_unit(store: &LexicalStore, id: LexUnitId) {
    println!("\n{} l{id}", "Lexical unit".cyan().bold());
    let ili = store.ili_records_for(id);
    let wiki = store.wiktionary_paraphrases_for(id);
    if ili.is_empty() && wiki.is_empty() {
        println!("  {}", "no records".yellow());
        return;
    }
    for record in ili {
        println!("  ILI: {record}");
    }
    for paraphrase in wiki {
        println!("  Wiktionary: {paraphrase}");
    }
}
