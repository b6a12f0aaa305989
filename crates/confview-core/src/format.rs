//! The capability seam for self-rendering composites.
//!
//! A composite setting that has no built-in rendering rule implements
//! [`Formattable`]: the writer hands it an [`EntrySink`] and the
//! composite pushes any number of `(name, value)` sub-entries back
//! through it. The sink re-enters the generic entry writer, so nested
//! composites go through the exact same dispatch as top-level fields:
//! mutual recursion across an object-safe trait boundary.

use std::io;

use crate::value::Value;

/// Destination for the sub-entries of a composite value.
///
/// The sink is bound to the output the surrounding rendering pass is
/// writing to; each call renders one entry in the canonical
/// `name = value` convention. Write failures surface unmodified.
pub trait EntrySink {
    /// Render one sub-entry under the given name.
    fn entry(&mut self, name: &str, value: &Value) -> io::Result<()>;
}

/// Capability of a composite value to render itself.
///
/// Implementations decide their own sub-field names (dotted names by
/// convention, e.g. `retry.limit`) and call the sink zero or more
/// times. The trait is object-safe; records hold implementations as
/// shared trait objects.
pub trait Formattable: Send + Sync {
    /// Emit this value's sub-entries through the sink.
    ///
    /// The first sink failure must be returned as-is; the surrounding
    /// pass aborts on it.
    fn format(&self, sink: &mut dyn EntrySink) -> io::Result<()>;
}
