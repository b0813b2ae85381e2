use serde_json::Value;
use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::Arc;
use tracing::debug;

use crate::context::Context;
use crate::errors::{HelperError, Result};

/// A helper callable by name from an expression.
pub trait Function: Send + Sync {
    fn name(&self) -> &'static str;
    fn arity(&self) -> RangeInclusive<usize>;
    fn call(&self, ctx: &Context, args: &[Value]) -> Result<Value>;
}

/// Thread-safe function registry.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<HashMap<&'static str, Arc<dyn Function>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        reg.register(builtins::Iif);
        reg.register(builtins::Join);
        reg.register(builtins::Substr);
        reg.register(builtins::PadLeft);
        reg.register(builtins::PadRight);
        reg.register(builtins::Dashes);
        reg.register(builtins::IsLower);
        reg.register(builtins::IndexOf);
        reg.register(builtins::IsEmpty);
        reg.register(builtins::IsEmptyRecord);
        reg.register(builtins::CsvScrub);
        reg.register(builtins::ToCurrency);
        reg.register(builtins::Rand32);
        reg.register(builtins::NewUuid);
        reg.register(builtins::QueryString);
        reg.register(builtins::Json);
        reg
    }

    pub fn register<F: Function + 'static>(&mut self, f: F) {
        let map = Arc::make_mut(&mut self.inner);
        map.insert(f.name(), Arc::new(f));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Function>> {
        self.inner.get(name).cloned()
    }

    /// Looks up `name`, checks the argument count, and invokes it.
    pub fn call(&self, name: &str, ctx: &Context, args: &[Value]) -> Result<Value> {
        let f = self
            .get(name)
            .ok_or_else(|| HelperError::Runtime(format!("unknown function `{name}`")))?;
        let arity = f.arity();
        if !arity.contains(&args.len()) {
            return Err(HelperError::InvalidArgument(format!(
                "{name} takes {}..={} arguments, got {}",
                arity.start(),
                arity.end(),
                args.len()
            )));
        }
        debug!(function = name, argc = args.len(), "dispatch");
        f.call(ctx, args)
    }
}

fn wrong_kind(fname: &str, idx: usize, expected: &str, got: &Value) -> HelperError {
    HelperError::InvalidArgument(format!(
        "{fname}: argument {} must be {expected}, got {got}",
        idx + 1
    ))
}

fn arg<'a>(fname: &str, args: &'a [Value], idx: usize) -> Result<&'a Value> {
    args.get(idx)
        .ok_or_else(|| HelperError::InvalidArgument(format!("{fname}: missing argument {}", idx + 1)))
}

fn arg_str<'a>(fname: &str, args: &'a [Value], idx: usize) -> Result<&'a str> {
    let v = arg(fname, args, idx)?;
    v.as_str().ok_or_else(|| wrong_kind(fname, idx, "a string", v))
}

/// Optional trailing string; absent is `None`, any other kind is an error.
fn arg_opt_str<'a>(fname: &str, args: &'a [Value], idx: usize) -> Result<Option<&'a str>> {
    match args.get(idx) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(wrong_kind(fname, idx, "a string", other)),
    }
}

fn arg_usize(fname: &str, args: &[Value], idx: usize) -> Result<usize> {
    let v = arg(fname, args, idx)?;
    v.as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| wrong_kind(fname, idx, "a non-negative integer", v))
}

fn arg_i64(fname: &str, args: &[Value], idx: usize) -> Result<i64> {
    let v = arg(fname, args, idx)?;
    v.as_i64().ok_or_else(|| wrong_kind(fname, idx, "an integer", v))
}

pub mod builtins {
    use super::*;
    use crate::{emptiness, format, query, random, text, value};

    pub struct Iif;
    impl Function for Iif {
        fn name(&self) -> &'static str { "iif" }
        fn arity(&self) -> RangeInclusive<usize> { 3..=3 }
        fn call(&self, _ctx: &Context, args: &[Value]) -> Result<Value> {
            let cond = arg(self.name(), args, 0)?;
            let cond = cond
                .as_bool()
                .ok_or_else(|| wrong_kind(self.name(), 0, "a boolean", cond))?;
            let t = arg_str(self.name(), args, 1)?;
            let f = arg_str(self.name(), args, 2)?;
            Ok(Value::from(text::iif_string(cond, t, f)))
        }
    }

    pub struct Join;
    impl Function for Join {
        fn name(&self) -> &'static str { "join" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=2 }
        fn call(&self, ctx: &Context, args: &[Value]) -> Result<Value> {
            let list = arg(self.name(), args, 0)?;
            let items = list
                .as_array()
                .ok_or_else(|| wrong_kind(self.name(), 0, "an array", list))?
                .iter()
                .map(|v| v.as_str().ok_or_else(|| wrong_kind(self.name(), 0, "an array of strings", list)))
                .collect::<Result<Vec<&str>>>()?;
            let delimiter = arg_opt_str(self.name(), args, 1)?.unwrap_or(&ctx.delimiter);
            Ok(Value::from(text::join(&items, Some(delimiter))))
        }
    }

    pub struct Substr;
    impl Function for Substr {
        fn name(&self) -> &'static str { "substr" }
        fn arity(&self) -> RangeInclusive<usize> { 3..=3 }
        fn call(&self, _ctx: &Context, args: &[Value]) -> Result<Value> {
            let s = arg_str(self.name(), args, 0)?;
            let pos = arg_usize(self.name(), args, 1)?;
            let len = arg_usize(self.name(), args, 2)?;
            Ok(Value::from(text::substr(s, pos, len)))
        }
    }

    pub struct PadLeft;
    impl Function for PadLeft {
        fn name(&self) -> &'static str { "pad_left" }
        fn arity(&self) -> RangeInclusive<usize> { 2..=3 }
        fn call(&self, ctx: &Context, args: &[Value]) -> Result<Value> {
            let s = arg_str(self.name(), args, 0)?;
            let n = arg_usize(self.name(), args, 1)?;
            let pad = arg_opt_str(self.name(), args, 2)?.unwrap_or(&ctx.pad);
            Ok(Value::from(text::pad_left(s, n, Some(pad))))
        }
    }

    pub struct PadRight;
    impl Function for PadRight {
        fn name(&self) -> &'static str { "pad_right" }
        fn arity(&self) -> RangeInclusive<usize> { 2..=3 }
        fn call(&self, ctx: &Context, args: &[Value]) -> Result<Value> {
            let s = arg_str(self.name(), args, 0)?;
            let n = arg_usize(self.name(), args, 1)?;
            let pad = arg_opt_str(self.name(), args, 2)?.unwrap_or(&ctx.pad);
            Ok(Value::from(text::pad_right(s, n, Some(pad))))
        }
    }

    pub struct Dashes;
    impl Function for Dashes {
        fn name(&self) -> &'static str { "dashes" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=2 }
        fn call(&self, ctx: &Context, args: &[Value]) -> Result<Value> {
            let n = arg_usize(self.name(), args, 0)?;
            let dash = arg_opt_str(self.name(), args, 1)?.unwrap_or(&ctx.dash);
            Ok(Value::from(text::dashes(n, Some(dash))))
        }
    }

    pub struct IsLower;
    impl Function for IsLower {
        fn name(&self) -> &'static str { "is_lower" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=1 }
        fn call(&self, _ctx: &Context, args: &[Value]) -> Result<Value> {
            Ok(Value::Bool(text::is_lower(arg_str(self.name(), args, 0)?)))
        }
    }

    /// Returns -1 when nothing is found.
    pub struct IndexOf;
    impl Function for IndexOf {
        fn name(&self) -> &'static str { "index_of" }
        fn arity(&self) -> RangeInclusive<usize> { 2..=3 }
        fn call(&self, _ctx: &Context, args: &[Value]) -> Result<Value> {
            let search = arg_str(self.name(), args, 0)?;
            let target = arg_str(self.name(), args, 1)?;
            let start = if args.len() > 2 { arg_i64(self.name(), args, 2)? } else { 0 };
            Ok(match text::index_of(search, target, start) {
                Some(i) => Value::from(i),
                None => Value::from(-1),
            })
        }
    }

    pub struct IsEmpty;
    impl Function for IsEmpty {
        fn name(&self) -> &'static str { "is_empty" }
        fn arity(&self) -> RangeInclusive<usize> { 0..=1 }
        fn call(&self, _ctx: &Context, args: &[Value]) -> Result<Value> {
            let values: Vec<value::Value> = args.iter().map(value::Value::from).collect();
            Ok(Value::Bool(emptiness::is_empty_args(&values)))
        }
    }

    /// Treats JSON objects, at any depth, as records.
    pub struct IsEmptyRecord;
    impl Function for IsEmptyRecord {
        fn name(&self) -> &'static str { "is_empty_record" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=1 }
        fn call(&self, _ctx: &Context, args: &[Value]) -> Result<Value> {
            let v = value::Value::record_from_json(arg(self.name(), args, 0)?);
            Ok(Value::Bool(emptiness::is_empty_record(&v)))
        }
    }

    pub struct CsvScrub;
    impl Function for CsvScrub {
        fn name(&self) -> &'static str { "csv_scrub" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=1 }
        fn call(&self, _ctx: &Context, args: &[Value]) -> Result<Value> {
            Ok(Value::from(match arg(self.name(), args, 0)? {
                Value::String(s) => format::csv_scrub(s.as_str()),
                other => format::csv_scrub(other),
            }))
        }
    }

    pub struct ToCurrency;
    impl Function for ToCurrency {
        fn name(&self) -> &'static str { "to_currency" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=1 }
        fn call(&self, _ctx: &Context, args: &[Value]) -> Result<Value> {
            let v = arg(self.name(), args, 0)?;
            let amount = v.as_f64().ok_or_else(|| wrong_kind(self.name(), 0, "a number", v))?;
            Ok(Value::from(format::to_currency_string(amount)))
        }
    }

    pub struct Rand32;
    impl Function for Rand32 {
        fn name(&self) -> &'static str { "rand32" }
        fn arity(&self) -> RangeInclusive<usize> { 0..=0 }
        fn call(&self, _ctx: &Context, _args: &[Value]) -> Result<Value> {
            Ok(Value::from(random::rand32()))
        }
    }

    pub struct NewUuid;
    impl Function for NewUuid {
        fn name(&self) -> &'static str { "uuid" }
        fn arity(&self) -> RangeInclusive<usize> { 0..=0 }
        fn call(&self, _ctx: &Context, _args: &[Value]) -> Result<Value> {
            Ok(Value::from(random::new_uuid()?))
        }
    }

    pub struct QueryString;
    impl Function for QueryString {
        fn name(&self) -> &'static str { "query_string" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=1 }
        fn call(&self, _ctx: &Context, args: &[Value]) -> Result<Value> {
            let url = arg_str(self.name(), args, 0)?;
            Ok(Value::from(query::query_string_from_url(url)?))
        }
    }

    /// Parses its string argument as a JSON literal.
    pub struct Json;
    impl Function for Json {
        fn name(&self) -> &'static str { "json" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=1 }
        fn call(&self, _ctx: &Context, args: &[Value]) -> Result<Value> {
            let src = arg_str(self.name(), args, 0)?;
            serde_json::from_str(src).map_err(|e| HelperError::Parse(format!("json: {e}")))
        }
    }
}
