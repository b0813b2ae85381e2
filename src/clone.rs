//! Deep-copy seam. Callers depend only on [`deep_clone`]; the engine behind
//! it can change without touching them.

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::Result;

/// Independent copy of `value`, currently produced by a JSON round trip.
pub fn deep_clone<T: Serialize + DeserializeOwned>(value: &T) -> Result<T> {
    let encoded = serde_json::to_value(value)?;
    Ok(serde_json::from_value(encoded)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Order {
        id: u32,
        lines: Vec<String>,
        tags: BTreeMap<String, i64>,
    }

    #[test]
    fn copy_is_equal_and_independent() {
        let original = Order {
            id: 7,
            lines: vec!["a".into(), "b".into()],
            tags: BTreeMap::from([("x".to_string(), 1)]),
        };
        let mut copy = deep_clone(&original).unwrap();
        assert_eq!(copy, original);
        copy.lines.push("c".into());
        assert_eq!(original.lines.len(), 2);
    }
}
