pub mod errors;
pub mod context;
pub mod value;
pub mod inspect;
pub mod emptiness;
pub mod text;
pub mod format;
pub mod random;
pub mod query;
pub mod clone;
pub mod functions;  // named helpers callable from expressions
mod expression;
mod parser;

use serde_json::Value as Json;
use errors::Result;
use context::Context;
use functions::Registry;
use tracing::debug;

/// Evaluates helper-call expressions such as `dashes(10, '=')`.
pub struct Evaluator {
    ctx: Context,
    registry: Registry,
}

impl Evaluator {
    pub fn new(registry: Registry) -> Self {
        Self { ctx: Context::default(), registry }
    }

    pub fn with_context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    pub fn eval(&self, expr: &str) -> Result<Json> {
        let ast = expression::parse_expr(expr)?;
        debug!(expr, "evaluating");
        expression::eval_ast(&ast, &self.registry, &self.ctx)
    }
}

/// Convenience: evaluate with the built-in registry and default context.
pub fn eval(expr: &str) -> Result<Json> {
    Evaluator::new(Registry::with_builtins()).eval(expr)
}

/// Coerces any evaluation error to `null`.
pub fn eval_coerce_null(expr: &str) -> Json {
    eval(expr).unwrap_or(Json::Null)
}

pub use clone::deep_clone;
pub use emptiness::{is_empty, is_empty_args, is_empty_leaf, is_empty_of, is_empty_record};
pub use errors::HelperError;
pub use inspect::Inspect;
pub use value::{Category, Field, HandleKind, Record, Value};
