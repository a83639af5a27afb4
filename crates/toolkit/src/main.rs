//! Command-line entry point
//!
//! ```text
//! bangla-utils [--english] [--lenient] [--env NAME] <command> <args...>
//! ```
//!
//! Settings come from `config/` and `BANGLA_UTILS__*` variables; the flags
//! override them for one invocation. Logs go to stderr, filtered by
//! `RUST_LOG`, as JSON when `BANGLA_UTILS_LOG_JSON` is set.

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use bangla_utils_toolkit::{load_settings, BanglaToolkit, Language, Settings};

const USAGE: &str = "usage: bangla-utils [--english] [--lenient] [--env NAME] <command> <args...>

commands:
  bangla-digits <n>       english-digits <n>      valid <n>
  format <n>              words <n>               digit-words <n>
  currency <amount>       month <m>               bangla-month <m>
  weekday <d> [start]     add <n>...              multiply <n>...
  subtract <a> <b>        divide <a> <b>          modulo <a> <b>
  pow <a> <b>             abs <n>                 sqrt <n>
  factorial <n>           log <n>                 log10 <n>
  log2 <n>                sin <n>                 cos <n>
  tan <n>";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1).peekable();

    let mut english = false;
    let mut lenient = false;
    let mut env = std::env::var("BANGLA_UTILS_ENV").ok();
    while let Some(flag) = args.next_if(|arg| arg.starts_with("--")) {
        match flag.as_str() {
            "--english" => english = true,
            "--lenient" => lenient = true,
            "--env" => env = Some(args.next().context("--env needs a value")?),
            "--help" => {
                println!("{USAGE}");
                return Ok(());
            },
            other => bail!("unknown flag {other}\n{USAGE}"),
        }
    }

    init_tracing();

    let mut settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load config, using defaults");
            Settings::default()
        },
    };
    if english {
        settings.output = Language::English;
    }
    if lenient {
        settings.strict = false;
    }
    let toolkit = BanglaToolkit::new(settings)?;

    let command = args.next().context(USAGE)?;
    let operands: Vec<String> = args.collect();
    let output = run(&toolkit, &command, &operands)?;
    println!("{output}");
    Ok(())
}

fn run(toolkit: &BanglaToolkit, command: &str, operands: &[String]) -> anyhow::Result<String> {
    let output = match command {
        "bangla-digits" => toolkit.to_bangla_digits(one(command, operands)?)?,
        "english-digits" => toolkit.to_english_digits(one(command, operands)?)?,
        "valid" => toolkit.is_valid_number(one(command, operands)?).to_string(),
        "format" => toolkit.format_number(one(command, operands)?)?,
        "words" => toolkit.number_to_words(one(command, operands)?)?,
        "digit-words" => toolkit.digit_wise_words(one(command, operands)?)?,
        "currency" => toolkit.currency_in_words(one(command, operands)?)?,
        "month" => toolkit.gregorian_month(one(command, operands)?)?,
        "bangla-month" => toolkit.bangla_calendar_month(one(command, operands)?)?,
        "weekday" => match operands {
            [day] => toolkit.weekday(day)?,
            [day, start] => toolkit.weekday_starting(day, start)?,
            _ => bail!("weekday takes a day and an optional week start"),
        },
        "add" => toolkit.add(operands)?,
        "multiply" => toolkit.multiply(operands)?,
        "subtract" => {
            let (a, b) = two(command, operands)?;
            toolkit.subtract(a, b)?
        },
        "divide" => {
            let (a, b) = two(command, operands)?;
            toolkit.divide(a, b)?
        },
        "modulo" => {
            let (a, b) = two(command, operands)?;
            toolkit.modulo(a, b)?
        },
        "pow" => {
            let (a, b) = two(command, operands)?;
            toolkit.pow(a, b)?
        },
        "abs" => toolkit.abs(one(command, operands)?)?,
        "sqrt" => toolkit.sqrt(one(command, operands)?)?,
        "factorial" => toolkit.factorial(one(command, operands)?)?,
        "log" => toolkit.log(one(command, operands)?)?,
        "log10" => toolkit.log10(one(command, operands)?)?,
        "log2" => toolkit.log2(one(command, operands)?)?,
        "sin" => toolkit.sin(one(command, operands)?)?,
        "cos" => toolkit.cos(one(command, operands)?)?,
        "tan" => toolkit.tan(one(command, operands)?)?,
        other => bail!("unknown command {other}\n{USAGE}"),
    };
    Ok(output)
}

fn one<'a>(command: &str, operands: &'a [String]) -> anyhow::Result<&'a str> {
    match operands {
        [a] => Ok(a.as_str()),
        _ => bail!("{command} takes one argument"),
    }
}

fn two<'a>(command: &str, operands: &'a [String]) -> anyhow::Result<(&'a str, &'a str)> {
    match operands {
        [a, b] => Ok((a.as_str(), b.as_str())),
        _ => bail!("{command} takes two arguments"),
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if std::env::var_os("BANGLA_UTILS_LOG_JSON").is_some() {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };
    subscriber.with(fmt_layer).init();
}
