use clap::Parser;
use tracing::Level;
use value_helpers::context::Context;
use value_helpers::functions::Registry;
use value_helpers::{text, Evaluator};

/// Evaluate a helper expression, e.g. `vh "pad_left('7', 3, '0')"`.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Helper expression to evaluate
    #[arg(required_unless_present = "alphabet")]
    expr: Option<String>,
    /// Default delimiter for join
    #[arg(long)]
    delimiter: Option<String>,
    /// Default pad string for pad_left / pad_right
    #[arg(long)]
    pad: Option<String>,
    /// Default dash string for dashes
    #[arg(long)]
    dash: Option<String>,
    /// Print letter codes A..Z a..z and exit
    #[arg(long)]
    alphabet: bool,
    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    if args.alphabet {
        for (c, code) in text::alphabet() {
            println!("{c}: {code}");
        }
        return;
    }

    let mut ctx = Context::default();
    if let Some(d) = args.delimiter { ctx = ctx.with_delimiter(d); }
    if let Some(p) = args.pad { ctx = ctx.with_pad(p); }
    if let Some(d) = args.dash { ctx = ctx.with_dash(d); }

    let evaluator = Evaluator::new(Registry::with_builtins()).with_context(ctx);
    let expr = args.expr.unwrap_or_default();

    match evaluator.eval(&expr) {
        Ok(out) => match serde_json::to_string_pretty(&out) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Could not render result: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
