//! Structural emptiness of runtime values.
//!
//! A value is empty when it is the zero of its category: `""`, `0`, `0.0`, a
//! null reference, or a present sequence/mapping with no entries. Records are
//! empty when all their fields are, but fields are checked with the leaf test
//! only, so a record nested inside a record is never empty.

use tracing::trace;

use crate::inspect::Inspect;
use crate::value::Value;

/// Whether `value` is structurally empty. Records are checked one level deep.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Record(_) => is_empty_record(value),
        other => is_empty_leaf(other),
    }
}

/// Variadic-style entry: only the first argument is inspected, and an empty
/// argument list is never empty.
pub fn is_empty_args(args: &[Value]) -> bool {
    args.first().map_or(false, is_empty)
}

/// Typed entry for anything implementing [`Inspect`].
pub fn is_empty_of<T: Inspect + ?Sized>(value: &T) -> bool {
    is_empty(&value.inspect())
}

/// True iff every field of the record passes [`is_empty_leaf`].
/// Anything other than a record is reported as not empty.
pub fn is_empty_record(value: &Value) -> bool {
    let Value::Record(record) = value else {
        return false;
    };
    let empty = record.fields.iter().all(|f| is_empty_leaf(&f.value));
    trace!(record = %record.type_name, fields = record.fields.len(), empty, "record check");
    empty
}

/// Zero-test for every category except records, which always yield `false`.
pub fn is_empty_leaf(value: &Value) -> bool {
    match value {
        Value::Text(s) => s.is_empty(),
        Value::Int(n) => *n == 0,
        Value::Float(n) => *n == 0.0,
        Value::Ref(r) => r.is_none(),
        Value::Handle { present, .. } => !present,
        Value::Seq(items) => items.as_ref().map_or(true, Vec::is_empty),
        Value::Map(entries) => entries.as_ref().map_or(true, Vec::is_empty),
        Value::Record(_) | Value::Bool(_) | Value::Uint(_) => false,
    }
}
