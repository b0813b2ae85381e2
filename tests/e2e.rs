use value_helpers as vh;
use serde_json::json;

#[test]
fn test_pad_and_join() {
    let out = vh::eval(r#"pad_left(join(json('["a", "b"]'), "-"), 5, "0")"#).unwrap();
    assert_eq!(out, json!("00a-b"));
}

#[test]
fn test_dashes_default() {
    assert_eq!(vh::eval("dashes(3)").unwrap(), json!("---"));
}

#[test]
fn test_is_empty_scenarios() {
    assert_eq!(vh::eval(r#"is_empty("")"#).unwrap(), json!(true));
    assert_eq!(vh::eval(r#"is_empty("x")"#).unwrap(), json!(false));
    assert_eq!(vh::eval("is_empty(0)").unwrap(), json!(true));
    assert_eq!(vh::eval("is_empty(-1)").unwrap(), json!(false));
    assert_eq!(vh::eval("is_empty(null)").unwrap(), json!(true));
    assert_eq!(vh::eval("is_empty(json('[]'))").unwrap(), json!(true));
    assert_eq!(vh::eval(r#"is_empty(json('["a"]'))"#).unwrap(), json!(false));
    assert_eq!(vh::eval("is_empty()").unwrap(), json!(false));
}

#[test]
fn test_record_scenarios() {
    let empty = vh::eval(r#"is_empty_record(json('{"name": "", "age": 0}'))"#).unwrap();
    assert_eq!(empty, json!(true));
    let named = vh::eval(r#"is_empty_record(json('{"name": "a", "age": 0}'))"#).unwrap();
    assert_eq!(named, json!(false));
    let nested = vh::eval(r#"is_empty_record(json('{"inner": {}}'))"#).unwrap();
    assert_eq!(nested, json!(false));
    // non-records are never empty here, unlike is_empty
    for expr in [r#"is_empty_record("")"#, "is_empty_record(null)", "is_empty_record(0)"] {
        assert_eq!(vh::eval(expr).unwrap(), json!(false), "{expr}");
    }
    assert_eq!(vh::is_empty_record(&vh::Value::from("")), false);
}

#[test]
fn test_csv_scrub_and_currency() {
    assert_eq!(vh::eval("csv_scrub('a,b')").unwrap(), json!("\"a,b\""));
    assert_eq!(vh::eval("csv_scrub(12)").unwrap(), json!("12"));
    assert_eq!(vh::eval("to_currency(9.5)").unwrap(), json!("9.50"));
}

#[test]
fn test_query_string() {
    let out = vh::eval("query_string('https://x.test/?q=rust&page=2')").unwrap();
    assert_eq!(out, json!("?q=rust&page=2"));
}

#[test]
fn test_uuid_and_rand() {
    let id = vh::eval("uuid()").unwrap();
    assert_eq!(id.as_str().map(str::len), Some(36));
    assert!(vh::eval("rand32()").unwrap().is_i64());
}

#[test]
fn test_errors() {
    assert!(matches!(vh::eval("pad_left('a', 2, 3)"), Err(vh::HelperError::InvalidArgument(_))));
    assert!(matches!(vh::eval("nope()"), Err(vh::HelperError::Runtime(_))));
    assert!(matches!(vh::eval("pad_left('a'"), Err(vh::HelperError::Parse(_))));
    assert!(matches!(vh::eval("json('{bad')"), Err(vh::HelperError::Parse(_))));
    assert!(vh::eval_coerce_null("nope()").is_null());
    let deep = format!("{}1{}", "dashes(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(vh::eval(&deep), Err(vh::HelperError::Parse(_))));
}

#[test]
fn test_context_overrides() {
    let ctx = vh::context::Context::default().with_dash("=");
    let ev = vh::Evaluator::new(vh::functions::Registry::with_builtins()).with_context(ctx);
    assert_eq!(ev.eval("dashes(2)").unwrap(), json!("=="));
}
