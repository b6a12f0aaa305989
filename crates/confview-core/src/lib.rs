//! Value model and rendering core for Confview
//!
//! This crate is the heart of Confview: a closed universe of setting
//! value kinds and a recursive, type-directed writer that renders an
//! ordered record of named values into the canonical line-oriented
//! `name = value` text format.
//!
//! # Architecture
//!
//! `confview-core` sits below the settings and CLI layers and knows
//! nothing about any concrete configuration schema:
//!
//! ```text
//!    confview-cli
//!         |
//!  confview-settings     (typed schema -> Record)
//!         |
//!   confview-core        (Record -> rendered text)
//! ```
//!
//! The collaborating crates produce a [`Record`] of `(name, visibility,
//! value)` fields; [`render`] walks it and writes one line per visible
//! entry. Composite values implement [`Formattable`] and emit their own
//! sub-entries through an [`EntrySink`] that re-enters the same writer.
//!
//! # Example
//!
//! ```
//! use confview_core::{Field, Record, Value, render};
//!
//! let record = Record::from(vec![
//!     Field::new("debug", Value::Bool(true)),
//!     Field::new("workers", Value::Int(4)),
//! ]);
//!
//! let mut out = Vec::new();
//! render(&record, &mut out).unwrap();
//! assert_eq!(out, b"debug = true\nworkers = 4\n");
//! ```

pub mod field;
pub mod format;
pub mod value;
pub mod writer;

pub use field::{Field, Record, Visibility};
pub use format::{EntrySink, Formattable};
pub use value::{Flag, FlagSet, Value};
pub use writer::{render, write_entry};
