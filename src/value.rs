use serde_json::Value as Json;

/// A runtime-typed value whose shape is only known when it is inspected.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    /// Any signed integer width.
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Any unsigned integer width.
    Uint(u64),
    /// Pointer-like reference; `None` is the null reference.
    Ref(Option<Box<Value>>),
    /// Function, channel or interface handle with no inspectable payload.
    Handle { kind: HandleKind, present: bool },
    /// Ordered sequence; `None` is a null sequence.
    Seq(Option<Vec<Value>>),
    /// Key mapping; `None` is a null mapping.
    Map(Option<Vec<(Value, Value)>>),
    Record(Record),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    Function,
    Channel,
    Interface,
}

/// Closed classification used to pick a zero-test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Text,
    Integer,
    Floating,
    NullableRef,
    Sequence,
    Mapping,
    Record,
    Other,
}

/// Struct-shaped value with its fields in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub type_name: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

impl Value {
    pub fn category(&self) -> Category {
        match self {
            Value::Text(_) => Category::Text,
            Value::Int(_) => Category::Integer,
            Value::Float(_) => Category::Floating,
            Value::Ref(_) | Value::Handle { .. } => Category::NullableRef,
            Value::Seq(_) => Category::Sequence,
            Value::Map(_) => Category::Mapping,
            Value::Record(_) => Category::Record,
            Value::Bool(_) | Value::Uint(_) => Category::Other,
        }
    }

    /// The null reference.
    pub fn null() -> Self {
        Value::Ref(None)
    }

    pub fn seq<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Value::Seq(Some(items.into_iter().collect()))
    }

    /// Like `From<serde_json::Value>`, except that JSON objects become records
    /// at every depth instead of mappings.
    pub fn record_from_json(json: &Json) -> Self {
        match json {
            Json::Object(map) => Value::Record(Record {
                type_name: String::new(),
                fields: map
                    .iter()
                    .map(|(k, v)| Field {
                        name: k.clone(),
                        value: Value::record_from_json(v),
                    })
                    .collect(),
            }),
            Json::Array(arr) => Value::seq(arr.iter().map(Value::record_from_json)),
            other => Value::from(other),
        }
    }
}

impl Record {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Builder-style field append.
    pub fn field<T: crate::inspect::Inspect + ?Sized>(mut self, name: &str, value: &T) -> Self {
        self.fields.push(Field {
            name: name.to_string(),
            value: value.inspect(),
        });
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::Record(r)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&Json> for Value {
    fn from(json: &Json) -> Self {
        match json {
            Json::Null => Value::Ref(None),
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Value::Text(s.clone()),
            Json::Array(arr) => Value::seq(arr.iter().map(Value::from)),
            Json::Object(map) => Value::Map(Some(
                map.iter()
                    .map(|(k, v)| (Value::Text(k.clone()), Value::from(v)))
                    .collect(),
            )),
        }
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        Value::from(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn every_variant_has_one_category() {
        let cases = vec![
            (Value::from("a"), Category::Text),
            (Value::Int(3), Category::Integer),
            (Value::Float(1.5), Category::Floating),
            (Value::Bool(true), Category::Other),
            (Value::Uint(7), Category::Other),
            (Value::null(), Category::NullableRef),
            (
                Value::Handle { kind: HandleKind::Channel, present: false },
                Category::NullableRef,
            ),
            (Value::Seq(None), Category::Sequence),
            (Value::Map(None), Category::Mapping),
            (Value::Record(Record::default()), Category::Record),
        ];
        for (v, cat) in cases {
            assert_eq!(v.category(), cat, "{v:?}");
        }
    }

    #[test]
    fn json_maps_onto_categories() {
        assert_eq!(Value::from(json!(null)), Value::null());
        assert_eq!(Value::from(json!(-4)), Value::Int(-4));
        assert_eq!(Value::from(json!(u64::MAX)), Value::Uint(u64::MAX));
        assert_eq!(Value::from(json!(0.5)), Value::Float(0.5));
        assert_eq!(Value::from(json!(["a"])), Value::seq([Value::from("a")]));
        assert_eq!(Value::from(json!({})).category(), Category::Mapping);
    }

    #[test]
    fn record_from_json_nests_records() {
        let v = Value::record_from_json(&json!({"inner": {"x": 0}}));
        let Value::Record(r) = v else { panic!("expected record") };
        assert_eq!(r.get("inner").map(Value::category), Some(Category::Record));
    }
}
