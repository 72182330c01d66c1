
use prefixdiff::differentiate_text_with_mode;
use prefixdiff::mode::calculation::CalculationMode;

use serde_json::json;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use std::io::{self, BufRead};
use std::process::ExitCode;

struct Options {
  mode: CalculationMode,
  json: bool,
  expressions: Vec<String>,
}

fn parse_options() -> anyhow::Result<Options> {
  let mut options = Options {
    mode: CalculationMode::new(),
    json: false,
    expressions: Vec::new(),
  };
  for arg in std::env::args().skip(1) {
    if let Some(policy) = arg.strip_prefix("--overflow=") {
      options.mode.set_overflow_policy(policy.parse()?);
    } else if arg == "--json" {
      options.json = true;
    } else if arg.starts_with("--") {
      anyhow::bail!("Unknown option '{arg}' (usage: prefixdiff [--overflow=fail|wrap|saturate] [--json] [EXPR...])");
    } else {
      options.expressions.push(arg);
    }
  }
  Ok(options)
}

/// Differentiates one expression and prints the result. Returns
/// whether it succeeded.
fn report(expression: &str, options: &Options) -> bool {
  let result = differentiate_text_with_mode(expression, &options.mode);
  match (&result, options.json) {
    (Ok(derivative), false) => {
      println!("{derivative}");
    }
    (Ok(derivative), true) => {
      println!("{}", json!({ "expression": expression, "derivative": derivative }));
    }
    (Err(err), false) => {
      eprintln!("error: {err}");
    }
    (Err(err), true) => {
      println!("{}", json!({ "expression": expression, "error": err.to_string(), "kind": err.kind().name() }));
    }
  }
  result.is_ok()
}

fn main() -> anyhow::Result<ExitCode> {
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(io::stderr))
    .with(EnvFilter::from_env("PREFIXDIFF_LOG"))
    .init();

  let options = parse_options()?;
  let mut all_ok = true;
  if options.expressions.is_empty() {
    for line in io::stdin().lock().lines() {
      all_ok &= report(&line?, &options);
    }
  } else {
    for expression in &options.expressions {
      all_ok &= report(expression, &options);
    }
  }
  Ok(if all_ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
