use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;

use model_names::config::{self, TableFormat};
use model_names::{logging, EntryKind, NameTable};

#[derive(Parser, Debug)]
#[command(version, about = "Look up model-specific variable and coordinate names")]
struct Args {
    /// Extra model tables (.ron or .json); falls back to MODEL_NAMES_TABLES
    #[arg(long = "table", value_delimiter = ',', global = true)]
    tables: Vec<PathBuf>,

    /// Only use the tables given with --table
    #[arg(long, global = true)]
    no_builtin: bool,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List known models
    Models,
    /// Print the identifier of each key
    Lookup {
        model: String,
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Print whether the model has the key
    Contains { model: String, key: String },
    /// List the semantic keys of a model
    Keys {
        model: String,
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },
    /// Print a model as a table file
    Export {
        model: String,
        #[arg(long, value_enum, default_value_t = FormatArg::Ron)]
        format: FormatArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Coordinate,
    Variable,
}

impl From<KindArg> for EntryKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Coordinate => EntryKind::Coordinate,
            KindArg::Variable => EntryKind::Variable,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Ron,
    Json,
}

impl From<FormatArg> for TableFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Ron => TableFormat::Ron,
            FormatArg::Json => TableFormat::Json,
        }
    }
}

const TABLES_VAR: &str = "MODEL_NAMES_TABLES";

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let mut args = Args::parse();
    logging::init(args.verbose)?;
    if args.tables.is_empty() {
        if let Ok(value) = std::env::var(TABLES_VAR) {
            args.tables = config::split_table_paths(&value);
        }
    }
    tracing::debug!(?args, "parsed arguments");

    let stdout = io::stdout();
    match run(args, &mut stdout.lock()) {
        Err(e) if is_broken_pipe(&e) => Ok(()),
        other => other,
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
}

fn run(args: Args, out: &mut impl Write) -> anyhow::Result<()> {
    let registry = config::load_registry(args.tables.as_slice(), !args.no_builtin)
        .context("loading model tables")?;

    match args.command {
        Command::Models => {
            writeln!(out, "{}", registry.names().join("\n"))?;
        }
        Command::Lookup { model, keys } => {
            let table = registry.get(&model)?;
            for key in &keys {
                writeln!(out, "{}", table.lookup(key)?)?;
            }
        }
        Command::Contains { model, key } => {
            writeln!(out, "{}", registry.get(&model)?.contains(&key))?;
        }
        Command::Keys { model, kind } => {
            let table = registry.get(&model)?;
            let keys = match kind {
                Some(kind) => table
                    .of_kind(kind.into())
                    .map(|e| e.key())
                    .sorted()
                    .join("\n"),
                None => table.all_keys().iter().join("\n"),
            };
            writeln!(out, "{}", keys)?;
        }
        Command::Export { model, format } => {
            let table = registry.get(&model)?;
            writeln!(out, "{}", config::render_model(table, format.into())?)?;
        }
    }
    out.flush()?;
    Ok(())
}
