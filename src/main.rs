use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use treepath::config::Configuration;
use treepath::document::parser::{from_yaml, Serializer};
use treepath::document::tree::Document;
use treepath::document::TreeValue;
use treepath::file::loader::{load_document, load_from_stdin};
use treepath::file::saver::{save_document, SaveOptions};
use treepath::file::Format;
use treepath::view::View;

/// treepath - read and edit YAML/JSON documents by dotted path
#[derive(Parser)]
#[command(name = "treepath")]
#[command(version)]
#[command(about = "Read and edit YAML/JSON documents by dotted path", long_about = None)]
struct Cli {
    /// Document to operate on (omit or use `-` to read stdin)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Format of stdin input
    #[arg(long, value_enum, default_value_t = FormatArg::Yaml, global = true)]
    format: FormatArg,

    /// Config file to use instead of ~/.config/treepath/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path separator character
    #[arg(short, long, global = true)]
    separator: Option<String>,

    /// Whether missing scalars print as null rather than a zero value
    #[arg(long, global = true)]
    missing_null: Option<bool>,

    /// Whether missing lists print as empty rather than null
    #[arg(long, global = true)]
    missing_empty: Option<bool>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value at a path
    Get {
        path: String,

        /// Convert the value before printing
        #[arg(long = "as", value_enum, default_value_t = Kind::Raw)]
        kind: Kind,
    },
    /// Bind a value at a path, creating intermediate mappings
    Set {
        path: String,

        /// Value, parsed as a YAML scalar or flow collection (`3`, `true`, `[a, b]`)
        value: String,

        /// Keep the value as a string even if it looks like a number or boolean
        #[arg(long)]
        string: bool,

        /// Copy the file to <name>.bak before overwriting it
        #[arg(long)]
        backup: bool,
    },
    /// Remove the binding at a path
    Remove {
        path: String,

        /// Copy the file to <name>.bak before overwriting it
        #[arg(long)]
        backup: bool,
    },
    /// Print the whole document
    Render {
        /// Output format (defaults to the input format)
        #[arg(long, value_enum)]
        to: Option<FormatArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Yaml,
    Json,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => Format::Yaml,
            FormatArg::Json => Format::Json,
        }
    }
}

/// Target type for `get --as`.
#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Raw,
    String,
    Integer,
    Double,
    Boolean,
    View,
    List,
    StringList,
    IntegerList,
    DoubleList,
    BooleanList,
    ViewList,
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(format!("treepath={level}").parse()?))
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn load_configuration(cli: &Cli) -> Result<Configuration> {
    let mut config = match &cli.config {
        Some(path) => Configuration::load_from(path)?,
        None => Configuration::load(),
    };
    if let Some(separator) = &cli.separator {
        config = config.with_separator(separator)?;
    }
    if let Some(value) = cli.missing_null {
        config = config.with_missing_returns_null(value);
    }
    if let Some(value) = cli.missing_empty {
        config = config.with_missing_returns_empty(value);
    }
    Ok(config)
}

/// Reads the input file, or stdin when no file (or `-`) is given.
fn load_input(cli: &Cli, config: Configuration) -> Result<(Document, Option<&PathBuf>, Format)> {
    match &cli.file {
        Some(path) if path.as_os_str() != "-" => {
            let doc = load_document(path, config)?;
            Ok((doc, Some(path), Format::from_path(path)))
        }
        _ => {
            let format = Format::from(cli.format);
            Ok((load_from_stdin(format, config)?, None, format))
        }
    }
}

/// Parses a command-line value the way it would read inside a YAML document.
fn parse_value(raw: &str, as_string: bool) -> TreeValue {
    if as_string {
        return TreeValue::from(raw);
    }
    match serde_yaml::from_str::<serde_yaml::Value>(raw) {
        Ok(value) => from_yaml(value),
        Err(_) => TreeValue::from(raw),
    }
}

fn print_optional<T: std::fmt::Display>(out: &mut impl Write, value: Option<T>) -> Result<bool> {
    match value {
        Some(v) => {
            writeln!(out, "{}", v)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn print_list<T: std::fmt::Display>(out: &mut impl Write, items: Option<Vec<Option<T>>>) -> Result<bool> {
    let Some(items) = items else {
        return Ok(false);
    };
    for item in items {
        match item {
            Some(v) => writeln!(out, "{}", v)?,
            None => writeln!(out, "null")?,
        }
    }
    Ok(true)
}

/// Prints the value at `path`. Returns false when nothing was printed.
fn print_value(out: &mut impl Write, view: View<'_>, path: &str, kind: Kind) -> Result<bool> {
    match kind {
        Kind::Raw => print_optional(out, view.get(path)),
        Kind::String => print_optional(out, view.get_string(path)),
        Kind::Integer => print_optional(out, view.get_integer(path)),
        Kind::Double => print_optional(out, view.get_double(path)),
        Kind::Boolean => print_optional(out, view.get_boolean(path)),
        Kind::View => print_optional(out, view.get_nested_view(path).map(|v| v.node())),
        Kind::List => print_list(
            out,
            view.get_list(path)
                .map(|items| items.iter().map(Some).collect()),
        ),
        Kind::StringList => print_list(out, view.get_string_list(path)),
        Kind::IntegerList => print_list(out, view.get_integer_list(path)),
        Kind::DoubleList => print_list(out, view.get_double_list(path)),
        Kind::BooleanList => print_list(out, view.get_boolean_list(path)),
        Kind::ViewList => print_list(
            out,
            view.get_view_list(path)
                .map(|views| views.into_iter().map(|v| v.map(|v| v.node())).collect()),
        ),
    }
}

/// Writes an edited document back to its file, or to stdout for stdin input.
fn write_output(doc: &Document, path: Option<&PathBuf>, format: Format, backup: bool) -> Result<()> {
    match path {
        Some(path) => save_document(
            path,
            doc,
            SaveOptions {
                create_backup: backup,
            },
        )
        .with_context(|| format!("Failed to save {}", path.display())),
        None => {
            let text = doc.render_with(&format)?;
            let mut stdout = io::stdout().lock();
            write!(stdout, "{}", text)?;
            if !text.ends_with('\n') {
                writeln!(stdout)?;
            }
            Ok(())
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = load_configuration(&cli)?;
    let (mut doc, path, format) = load_input(&cli, config)?;
    tracing::debug!(?config, "Loaded document");

    match &cli.command {
        Command::Get { path: key, kind } => {
            let mut stdout = io::stdout().lock();
            if !print_value(&mut stdout, doc.view(), key, *kind)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Set {
            path: key,
            value,
            string,
            backup,
        } => {
            doc.set(key.as_str(), parse_value(value, *string));
            write_output(&doc, path, format, *backup)?;
        }
        Command::Remove { path: key, backup } => {
            doc.remove(key.as_str());
            write_output(&doc, path, format, *backup)?;
        }
        Command::Render { to } => {
            let format = to.map(Format::from).unwrap_or(format);
            write_output(&doc, None, format, false)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
