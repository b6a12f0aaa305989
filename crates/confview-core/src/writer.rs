//! Renders a record into the line-oriented `name = value` format.
//!
//! Single pass, no retained state: [`render`] walks the record in
//! declaration order and [`write_entry`] dispatches each field on its
//! value kind. Composite values re-enter [`write_entry`] through the
//! [`EntrySink`] bound to the same output, so nesting depth is the only
//! recursion bound.
//!
//! The only runtime error is a sink write failure; it aborts the walk
//! and propagates unmodified. Output already written stays in the sink,
//! callers that need atomicity render into a buffer first.

use std::io::Write;

use crate::field::Record;
use crate::format::EntrySink;
use crate::value::{FlagSet, Value};

/// Render every visible field of a record, one entry per field, in
/// declaration order.
///
/// Internal fields are skipped entirely; they contribute no output.
///
/// # Example
///
/// ```
/// use confview_core::{Field, Record, Value, render};
///
/// let record = Record::from(vec![
///     Field::new("level", Value::Enum("info")),
///     Field::internal("config_path", Value::Text("/tmp/c.toml".into())),
/// ]);
///
/// let mut out = Vec::new();
/// render(&record, &mut out).unwrap();
/// assert_eq!(out, b"level = info\n");
/// ```
pub fn render<W: Write>(record: &Record, out: &mut W) -> std::io::Result<()> {
    for field in record {
        if field.is_internal() {
            tracing::trace!(field = field.name, "skipping internal field");
            continue;
        }
        write_entry(field.name, &field.value, out)?;
    }
    Ok(())
}

/// Render one entry according to its value kind.
///
/// Scalars, enums, text, and flag records contribute exactly one line.
/// Present optionals recurse transparently into the inner value under
/// the same name. Composites delegate to their own [`Formattable`]
/// routine through a sink bound to `out`. [`Value::Unsupported`] emits
/// nothing.
///
/// [`Formattable`]: crate::Formattable
pub fn write_entry<W: Write>(name: &str, value: &Value, out: &mut W) -> std::io::Result<()> {
    match value {
        Value::Bool(v) => writeln!(out, "{} = {}", name, v),
        Value::Int(v) => writeln!(out, "{} = {}", name, v),
        Value::Float(v) => writeln!(out, "{} = {}", name, v),
        Value::Enum(tag) => writeln!(out, "{} = {}", name, tag),
        Value::Text(text) => writeln!(out, "{} = {}", name, text),
        Value::Absent | Value::Optional(None) => writeln!(out, "{} = ", name),
        Value::Optional(Some(inner)) => write_entry(name, inner, out),
        Value::Flags(flags) => write_flags(name, flags, out),
        Value::Custom(custom) => custom.format(&mut EntryWriter { out }),
        Value::Unsupported => Ok(()),
    }
}

/// Collapse a flag record to a single comma-joined line.
///
/// One token per flag in declaration order, `no-` prefix iff the flag
/// is disabled, no trailing separator.
fn write_flags<W: Write>(name: &str, flags: &FlagSet, out: &mut W) -> std::io::Result<()> {
    write!(out, "{} = ", name)?;
    for (index, flag) in flags.iter().enumerate() {
        if index > 0 {
            write!(out, ",")?;
        }
        if !flag.enabled {
            write!(out, "no-")?;
        }
        write!(out, "{}", flag.name)?;
    }
    writeln!(out)
}

/// Sink handed to [`Formattable`] composites; re-enters [`write_entry`]
/// on the output of the surrounding pass.
///
/// [`Formattable`]: crate::Formattable
struct EntryWriter<'a, W: Write> {
    out: &'a mut W,
}

impl<W: Write> EntrySink for EntryWriter<'_, W> {
    fn entry(&mut self, name: &str, value: &Value) -> std::io::Result<()> {
        write_entry(name, value, self.out)
    }
}
