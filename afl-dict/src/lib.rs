//! AFL Dictionary Generator
//!
//! Extracts grammar tokens from the directive lines of a Bison grammar and
//! renders them as a fuzzer dictionary, so mutated inputs are biased towards
//! the keywords and operators the parser under test actually accepts.
//!
//! # Example
//!
//! ```rust
//! use afl_dict::Generator;
//!
//! let dict = Generator::default().generate_source("%token MINUS '-'\n");
//! let lines: Vec<String> = dict.lines().take(2).collect();
//! assert_eq!(lines, ["token=\" minus \"", "token=\" - \""]);
//! ```

pub mod config;
pub mod dictionary;
pub mod directive;
pub mod generator;

pub use config::Config;
pub use dictionary::{DictEntry, Dictionary, GenerateStats};
pub use directive::{Directive, DirectiveKind};
pub use generator::Generator;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while generating a dictionary.
#[derive(Debug, Error)]
pub enum DictError {
    #[error("Failed to read grammar file {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl DictError {
    pub(crate) fn file(path: impl AsRef<Path>, source: io::Error) -> Self {
        DictError::File {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub(crate) fn config(path: impl AsRef<Path>, message: impl fmt::Display) -> Self {
        DictError::Config {
            path: path.as_ref().to_path_buf(),
            message: message.to_string(),
        }
    }
}

/// Result type for dictionary generation.
pub type DictResult<T> = Result<T, DictError>;
