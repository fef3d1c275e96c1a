use std::io::Write;

use contract_call_core::ContractDispatcher;
use contract_call_core::Value;
use tracing::debug;

use crate::config::CallConfig;
use crate::error::CliError;
use crate::presenter::Presenter;

/// Turns a raw command-line argument into a call value: JSON when it parses
/// and reads back unchanged, otherwise the raw text as a string.
///
/// Integers outside the i64/u64 range and decimals such as `1.50` only
/// survive parsing as rounded floats, so those stay strings.
pub fn parse_call_arg(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) if is_lossless(&value, raw) => value,
        _ => Value::String(raw.to_string()),
    }
}

fn is_lossless(value: &Value, raw: &str) -> bool {
    if !contains_float(value) {
        return true;
    }
    serde_json::to_string(value).is_ok_and(|text| text == raw.trim())
}

fn contains_float(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_f64(),
        Value::Array(items) => items.iter().any(contains_float),
        Value::Object(map) => map.values().any(contains_float),
        _ => false,
    }
}

pub fn parse_call_args(raw: &[String], max_args: usize) -> Result<Vec<Value>, CliError> {
    if raw.len() > max_args {
        return Err(CliError::InvalidArgument(format!(
            "{} arguments given, at most {} allowed",
            raw.len(),
            max_args
        )));
    }
    Ok(raw.iter().map(|arg| parse_call_arg(arg)).collect())
}

/// Dispatches one call and presents the resulting record.
pub fn handle_call<D>(
    dispatcher: &D,
    presenter: &dyn Presenter,
    out: &mut dyn Write,
    config: &CallConfig,
    contract: Option<&str>,
    method: &str,
    raw_args: &[String],
) -> Result<(), CliError>
where
    D: ContractDispatcher + ?Sized,
{
    let contract = contract.unwrap_or(config.contract.as_str());
    let args = parse_call_args(raw_args, config.max_args)?;
    debug!(contract, method, arg_count = args.len(), "dispatching call");

    let record = dispatcher.dispatch(contract, method, args)?;
    presenter.present_record(out, &record)
}
