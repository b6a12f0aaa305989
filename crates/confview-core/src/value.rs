//! The closed universe of renderable setting values.
//!
//! Every value a configuration record can carry is one of the variants
//! of [`Value`]. The set is closed on purpose: the entry writer matches
//! it exhaustively, so adding a variant without a rendering rule is a
//! compile error rather than a runtime surprise.

use std::fmt;
use std::sync::Arc;

use crate::format::Formattable;

/// A single typed setting value.
///
/// Values are cheap to clone; the only composite variant holds its
/// payload behind an [`Arc`].
#[derive(Clone)]
pub enum Value {
    /// Boolean setting, rendered as `true` / `false`.
    Bool(bool),
    /// Integer setting, rendered as a decimal literal.
    Int(i64),
    /// Floating-point setting, rendered with the shortest decimal
    /// representation that round-trips (std `Display`).
    Float(f64),
    /// Enumerated setting, rendered as its symbolic tag name.
    Enum(&'static str),
    /// Text setting, rendered verbatim with no escaping.
    Text(String),
    /// Explicit empty marker, rendered as a bare `name = ` line.
    Absent,
    /// Optional setting. A present value renders exactly as the inner
    /// value would under the same name; an absent one renders like
    /// [`Value::Absent`].
    Optional(Option<Box<Value>>),
    /// Fixed ordered collection of named boolean flags, collapsed to a
    /// single comma-joined line.
    Flags(FlagSet),
    /// Composite value that renders itself through the [`Formattable`]
    /// capability, emitting sub-entries under its own names.
    Custom(Arc<dyn Formattable>),
    /// Value kind the text format has no representation for. Emits
    /// nothing; this is a deliberate omission, not an error.
    Unsupported,
}

impl Value {
    /// Wrap an optional inner value.
    ///
    /// Convenience for building [`Value::Optional`] without spelling
    /// out the `Box`.
    pub fn optional(inner: Option<Value>) -> Self {
        Value::Optional(inner.map(Box::new))
    }

    /// Wrap a composite behind its [`Formattable`] capability.
    pub fn custom(value: impl Formattable + 'static) -> Self {
        Value::Custom(Arc::new(value))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Value::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Value::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Value::Enum(tag) => f.debug_tuple("Enum").field(tag).finish(),
            Value::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Value::Absent => f.write_str("Absent"),
            Value::Optional(inner) => f.debug_tuple("Optional").field(inner).finish(),
            Value::Flags(flags) => f.debug_tuple("Flags").field(flags).finish(),
            Value::Custom(_) => f.write_str("Custom(..)"),
            Value::Unsupported => f.write_str("Unsupported"),
        }
    }
}

/// One named boolean flag inside a [`FlagSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag {
    /// Flag name as it appears in the rendered token.
    pub name: &'static str,
    /// Current state; disabled flags render with a `no-` prefix.
    pub enabled: bool,
}

/// A fixed, ordered collection of named boolean flags.
///
/// The declaration order is the rendering order. A flag-record type is
/// declared once and always contributes the same tokens in the same
/// positions, only the `no-` prefixes vary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    flags: Vec<Flag>,
}

impl FlagSet {
    /// Create an empty flag set.
    pub fn new() -> Self {
        Self { flags: Vec::new() }
    }

    /// Append a flag, preserving declaration order.
    pub fn flag(mut self, name: &'static str, enabled: bool) -> Self {
        self.flags.push(Flag { name, enabled });
        self
    }

    /// Iterate flags in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Flag> {
        self.flags.iter()
    }

    /// Number of flags in the set.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Check whether the set has no flags.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl<'a> IntoIterator for &'a FlagSet {
    type Item = &'a Flag;
    type IntoIter = std::slice::Iter<'a, Flag>;

    fn into_iter(self) -> Self::IntoIter {
        self.flags.iter()
    }
}
