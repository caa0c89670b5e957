//! jprettier - Pretty-printing engine for Java source code
//!
//! Walks a parsed Java syntax tree and re-emits well-formatted source text:
//! javadoc reconstruction, comment reflow, dynamic field/variable alignment,
//! and configurable brace and indentation styles.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::module_name_repetitions)]

pub mod comment;
pub mod config;
pub mod error;
pub mod layout;
pub mod printer;
pub mod tree;

// Re-export commonly used types
pub use config::{BlockCommentMode, BraceStyle, Config, FieldSpacing, LineEnding};
pub use error::Result;
pub use printer::Printer;
