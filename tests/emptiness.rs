use std::collections::HashMap;
use value_helpers::{is_empty, is_empty_leaf, is_empty_of, is_empty_record, Inspect, Record, Value};

struct Person {
    name: String,
    age: i32,
    tags: Vec<String>,
    manager: Option<Box<Person>>,
}

impl Inspect for Person {
    fn inspect(&self) -> Value {
        Record::new("Person")
            .field("name", &self.name)
            .field("age", &self.age)
            .field("tags", &self.tags)
            .field("manager", &self.manager)
            .into()
    }
}

struct Team {
    lead: Person,
}

impl Inspect for Team {
    fn inspect(&self) -> Value {
        Record::new("Team").field("lead", &self.lead).into()
    }
}

fn blank() -> Person {
    Person { name: String::new(), age: 0, tags: Vec::new(), manager: None }
}

#[test]
fn zero_valued_struct_is_empty() {
    assert!(is_empty_of(&blank()));
}

#[test]
fn any_populated_field_makes_struct_non_empty() {
    let named = Person { name: "Ann".into(), ..blank() };
    let aged = Person { age: 30, ..blank() };
    let tagged = Person { tags: vec![String::new()], ..blank() };
    let managed = Person { manager: Some(Box::new(blank())), ..blank() };
    for p in [named, aged, tagged, managed] {
        assert!(!is_empty_of(&p));
    }
}

// Fields are only checked one level deep; a nested struct never counts as empty.
#[test]
fn struct_holding_zero_struct_is_not_empty() {
    let team = Team { lead: blank() };
    assert!(!is_empty_of(&team));
    assert!(!is_empty_record(&team.inspect()));
}

#[test]
fn field_order_does_not_matter() {
    let forward: Value = Record::new("R").field("a", "").field("b", &1i64).into();
    let backward: Value = Record::new("R").field("b", &1i64).field("a", "").into();
    assert_eq!(is_empty(&forward), is_empty(&backward));
}

#[test]
fn maps_count_entries() {
    let mut m: HashMap<String, String> = HashMap::new();
    assert!(is_empty_of(&m));
    m.insert(String::new(), String::new());
    assert!(!is_empty_of(&m));
}

#[test]
fn leaf_and_top_level_agree_outside_records() {
    let samples = vec![
        Value::from(""),
        Value::from("x"),
        Value::Int(0),
        Value::Float(2.0),
        Value::null(),
        Value::seq([Value::Int(0)]),
        Value::Bool(true),
    ];
    for v in samples {
        assert_eq!(is_empty(&v), is_empty_leaf(&v), "{v:?}");
    }
}
