use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mmseg_config::Config;
use mmseg_dictionary::{CharTable, CharTableBuilder};
use mmseg_lang_chinese::{DicLoader, LoadSummary};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

pub mod profile;
pub mod report;

#[derive(Parser)]
#[command(name = "mmseg", version, about = "Query a per-character word dictionary")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Dictionary directory, overrides the config
    #[arg(long, global = true)]
    dict_dir: Option<String>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the words starting at each position of TEXT (or of each stdin line)
    Lookup { text: Option<String> },
    /// Tell whether each word is in the dictionary
    Check {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Print dictionary statistics
    Stats,
}

#[derive(Serialize)]
struct StatsReport {
    load: LoadSummary,
    table: mmseg_dictionary::TableStats,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = profile::load_config(cli.config.as_deref())?;
    if let Some(dir) = cli.dict_dir {
        config.dictionary.dir = Some(dir);
    }
    init_tracing(&config)?;

    let mut builder = CharTableBuilder::new();
    let summary = DicLoader::new(config.dictionary.clone())
        .load(&mut builder)
        .context("failed to load dictionary")?;
    let table = builder.build();

    match cli.command {
        Command::Lookup { text: Some(text) } => lookup(&table, &text, cli.json)?,
        Command::Lookup { text: None } => {
            for line in io::stdin().lock().lines() {
                let line = line.context("failed to read stdin")?;
                lookup(&table, &line, cli.json)?;
            }
        }
        Command::Check { words } => {
            let checks = report::check_words(&table, &words);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&checks)?);
            } else {
                print!("{}", report::render_checks(&checks));
            }
        }
        Command::Stats => {
            let stats = StatsReport {
                load: summary,
                table: table.stats(),
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("files: {}", stats.load.files);
                println!("chars: {}", stats.table.chars);
                println!("words: {}", stats.table.words);
                println!("max tail length: {}", stats.table.max_tail_len);
                println!("chars with frequency: {}", stats.load.chars_with_frequency);
                println!("skipped lines: {}", stats.load.skipped);
            }
        }
    }

    Ok(())
}

fn lookup(table: &CharTable, text: &str, json: bool) -> anyhow::Result<()> {
    let found = report::candidates(table, text)?;
    if json {
        println!("{}", serde_json::to_string(&found)?);
    } else {
        print!("{}", report::render_candidates(&found));
    }
    Ok(())
}

/// Logs go to stderr so stdout stays machine readable
fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if config.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
    Ok(())
}
