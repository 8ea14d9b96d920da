use std::fmt;
use std::io;
use std::path::PathBuf;

/// Everything that can go wrong in this crate.
///
/// Matching and ranking are total and never produce an error. Reading a
/// snapshot never does either: a missing or malformed cache file is logged
/// and the cache simply starts cold.
#[derive(Debug)]
pub enum Error {
    /// No dictionary entry is close enough to the input.
    NotFound { input: String },
    /// The snapshot file (or its temporary sibling) could not be written.
    PersistenceUnavailable { path: PathBuf, source: io::Error },
    /// The cache contents could not be serialized.
    Encode { source: serde_json::Error },
    /// A configuration file could not be read or parsed.
    Config { path: PathBuf, message: String },
    /// A catalog could not supply the requested data.
    Catalog { path: PathBuf, message: String },
    /// Bad command-line arguments.
    Usage { message: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound { input } => write!(f, "no champion found matching '{input}'"),
            Error::PersistenceUnavailable { path, .. } => {
                write!(f, "failed to write cache file {}", path.display())
            }
            Error::Encode { .. } => write!(f, "failed to encode cache data"),
            Error::Config { path, message } => {
                write!(f, "invalid config file {}: {message}", path.display())
            }
            Error::Catalog { path, message } => {
                write!(f, "catalog {}: {message}", path.display())
            }
            Error::Usage { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::PersistenceUnavailable { source, .. } => Some(source),
            Error::Encode { source } => Some(source),
            _ => None,
        }
    }
}

impl miette::Diagnostic for Error {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self {
            Error::NotFound { .. } => "champcache::not_found",
            Error::PersistenceUnavailable { .. } => "champcache::persistence_unavailable",
            Error::Encode { .. } => "champcache::encode",
            Error::Config { .. } => "champcache::config",
            Error::Catalog { .. } => "champcache::catalog",
            Error::Usage { .. } => "champcache::usage",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Error::NotFound { .. } => Some(Box::new(
                "check the spelling, or raise `levenshtein_threshold` to accept looser matches",
            )),
            Error::PersistenceUnavailable { .. } => Some(Box::new(
                "the in-memory cache is unaffected; check that the directory exists and is writable",
            )),
            Error::Usage { .. } => Some(Box::new("run `champcache --help` for usage")),
            _ => None,
        }
    }
}
