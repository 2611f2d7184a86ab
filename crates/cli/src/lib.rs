pub mod cli;
pub mod completions;
pub mod emit;
pub mod env;
pub mod envvar;
pub mod error;
pub mod matcher;
pub mod options;
pub mod quote;

pub use cli::Cli;
pub use envvar::EnvVar;
pub use error::{Error, ExitCode, Result};
pub use matcher::NameFilter;
pub use options::{Delimiter, Options};
pub use quote::Encoding;
