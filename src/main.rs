// ==============================================================================
// CLI for the Champion Cache
// ==============================================================================
//
//   champcache resolve <TEXT>             -- best-matching identifier
//   champcache complete <TEXT> [--limit]  -- autocomplete suggestions
//   champcache show <TEXT>                -- cached detail record as JSON
//   champcache sync --catalog <FILE>      -- refresh from a champion list
//   champcache add <FILE>                 -- cache records from a detail document
//   champcache info                       -- what the cache holds

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use miette::Context;

use champcache::error::Error;
use champcache::model::champion::{Champion, ChampionDocument};
use champcache::{Cache, Config, FileCatalog, LoadOutcome, SyncOutcome};

const USAGE: &str = "\
Usage: champcache [OPTIONS] <COMMAND>

Commands:
  resolve <TEXT>              Print the identifier that best matches TEXT
  complete <TEXT>             Print autocomplete suggestions, one per line
  show <TEXT>                 Print the cached detail record for TEXT as JSON
  sync --catalog <FILE>       Refresh the cache from a champion-list file
  add <FILE>                  Cache every champion in a detail document
  info                        Print what the cache holds

Options:
  -c, --config <FILE>         Read settings from a TOML file
      --cache <FILE>          Cache snapshot path (overrides config)
      --threshold <N>         Maximum weighted edit distance (overrides config)
  -n, --limit <N>             Maximum suggestions for `complete` [default: 10]
      --catalog <FILE>        Champion-list JSON file for `sync`
  -v, --verbose               Log at debug level
  -h, --help                  Print this help
";

// ==============================================================================
// CLI Argument Definitions
// ==============================================================================

#[derive(Debug)]
enum Command {
    Resolve { text: String },
    Complete { text: String },
    Show { text: String },
    Sync,
    Add { file: PathBuf },
    Info,
}

#[derive(Debug)]
struct Cli {
    command: Command,
    config: Option<PathBuf>,
    cache: Option<PathBuf>,
    threshold: Option<usize>,
    limit: usize,
    catalog: Option<PathBuf>,
    verbose: bool,
}

fn usage_error(message: impl Into<String>) -> Error {
    Error::Usage {
        message: format!("{}\n\n{USAGE}", message.into()),
    }
}

fn lexopt_error(e: lexopt::Error) -> Error {
    usage_error(e.to_string())
}

fn parse_args(args: impl IntoIterator<Item = OsString>) -> Result<Option<Cli>, Error> {
    use lexopt::prelude::*;

    let mut parser = lexopt::Parser::from_args(args);
    let mut config = None;
    let mut cache = None;
    let mut threshold = None;
    let mut limit = 10;
    let mut catalog = None;
    let mut verbose = false;
    let mut positionals: Vec<String> = Vec::new();

    while let Some(arg) = parser.next().map_err(lexopt_error)? {
        match arg {
            Short('h') | Long("help") => return Ok(None),
            Short('v') | Long("verbose") => verbose = true,
            Short('c') | Long("config") => {
                config = Some(PathBuf::from(parser.value().map_err(lexopt_error)?));
            }
            Long("cache") => cache = Some(PathBuf::from(parser.value().map_err(lexopt_error)?)),
            Long("catalog") => {
                catalog = Some(PathBuf::from(parser.value().map_err(lexopt_error)?));
            }
            Long("threshold") => {
                threshold = Some(parser.value().map_err(lexopt_error)?.parse().map_err(lexopt_error)?);
            }
            Short('n') | Long("limit") => {
                limit = parser.value().map_err(lexopt_error)?.parse().map_err(lexopt_error)?;
            }
            Value(value) => positionals.push(value.string().map_err(lexopt_error)?),
            _ => return Err(lexopt_error(arg.unexpected())),
        }
    }

    let mut positionals = positionals.into_iter();
    let name = positionals
        .next()
        .ok_or_else(|| usage_error("a subcommand is required"))?;
    let mut operand = |what: &str| {
        positionals
            .next()
            .ok_or_else(|| usage_error(format!("`{name}` requires {what}")))
    };

    let command = match name.as_str() {
        "resolve" => Command::Resolve {
            text: operand("TEXT")?,
        },
        "complete" => Command::Complete {
            text: operand("TEXT")?,
        },
        "show" => Command::Show {
            text: operand("TEXT")?,
        },
        "add" => Command::Add {
            file: PathBuf::from(operand("FILE")?),
        },
        "sync" => Command::Sync,
        "info" => Command::Info,
        other => return Err(usage_error(format!("unrecognized subcommand `{other}`"))),
    };
    if let Some(extra) = positionals.next() {
        return Err(usage_error(format!("unexpected argument `{extra}`")));
    }

    Ok(Some(Cli {
        command,
        config,
        cache,
        threshold,
        limit,
        catalog,
        verbose,
    }))
}

// ==============================================================================
// Entry Point
// ==============================================================================

fn main() -> miette::Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(miette::MietteHandlerOpts::new().build())
    }))?;

    let Some(cli) = parse_args(std::env::args_os().skip(1)).map_err(miette::Report::new)? else {
        print!("{USAGE}");
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load(path).map_err(miette::Report::new)?,
        None => Config::default(),
    };
    if let Some(path) = cli.cache.clone() {
        config.cache_path = path;
    }
    if let Some(threshold) = cli.threshold {
        config.levenshtein_threshold = threshold;
    }

    init_tracing(cli.verbose || config.debug);

    let cache: Cache<Champion> = config.cache();
    if cache.load() == LoadOutcome::Unreadable {
        tracing::warn!("starting with an empty cache");
    }

    match cli.command {
        Command::Resolve { text } => {
            let id = cache.resolve_name(&text).map_err(miette::Report::new)?;
            print_lines([id])
        }
        Command::Complete { text } => print_lines(cache.autocomplete(&text, cli.limit)),
        Command::Show { text } => run_show(&cache, &text),
        Command::Sync => run_sync(&cache, cli.catalog),
        Command::Add { file } => run_add(&cache, &file),
        Command::Info => print_lines([
            format!("patch: {}", cache.patch()),
            format!("names: {}", cache.dictionary().len()),
            format!("keys: {}", cache.key_aliases().len()),
            format!("details: {}", cache.detail_count()),
        ]),
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise warnings only, or everything
/// from this crate at debug level when verbose.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("champcache=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// ==============================================================================
// Subcommands
// ==============================================================================

fn run_show(cache: &Cache<Champion>, text: &str) -> miette::Result<()> {
    let id = cache.resolve_or_literal(text);
    let Some(champion) = cache.detail(&id) else {
        return Err(miette::miette!(
            help = "fetch it first, e.g. `champcache add <FILE>`",
            "no cached details for `{id}`"
        ));
    };
    let json = serde_json::to_string_pretty(&champion)
        .map_err(|source| Error::Encode { source })
        .map_err(miette::Report::new)?;
    print_lines([json])
}

fn run_sync(cache: &Cache<Champion>, catalog: Option<PathBuf>) -> miette::Result<()> {
    let path = catalog
        .ok_or_else(|| usage_error("`sync` requires --catalog <FILE>"))
        .map_err(miette::Report::new)?;
    let catalog = FileCatalog::open(&path).map_err(miette::Report::new)?;
    let line = match champcache::sync(cache, &catalog).map_err(miette::Report::new)? {
        SyncOutcome::Refreshed { from, to } if from.is_empty() => format!("populated for patch {to}"),
        SyncOutcome::Refreshed { from, to } => format!("refreshed from patch {from} to {to}"),
        SyncOutcome::Filled => format!("filled champion map for patch {}", cache.patch()),
        SyncOutcome::UpToDate => format!("up to date at patch {}", cache.patch()),
    };
    print_lines([line])
}

fn run_add(cache: &Cache<Champion>, file: &Path) -> miette::Result<()> {
    let text = fs::read_to_string(file)
        .map_err(|e| miette::miette!("{e}"))
        .wrap_err_with(|| format!("read {}", file.display()))?;
    let document = ChampionDocument::from_json(&text)
        .map_err(|e| miette::miette!("{e}"))
        .wrap_err_with(|| format!("parse {}", file.display()))?;

    let mut added = Vec::new();
    for champion in document.into_champions() {
        added.push(champion.id.clone());
        cache.put_detail(champion);
    }
    cache
        .save()
        .map_err(miette::Report::new)
        .wrap_err("save cache")?;
    print_lines(added)
}

/// Print one line per item. A closed pipe (`champcache complete a | head -1`)
/// ends output quietly instead of failing.
fn print_lines(lines: impl IntoIterator<Item = String>) -> miette::Result<()> {
    let mut stdout = io::stdout().lock();
    for line in lines {
        if let Err(e) = writeln!(stdout, "{line}") {
            if e.kind() == io::ErrorKind::BrokenPipe {
                return Ok(());
            }
            return Err(miette::miette!("{e}")).wrap_err("write to stdout");
        }
    }
    Ok(())
}
