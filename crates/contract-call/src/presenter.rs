use std::io::Write;

use contract_call_core::CallRecord;

use crate::commands::OutputFormat;
use crate::error::CliError;

/// Renders call records for the user.
pub trait Presenter {
    fn present_record(&self, out: &mut dyn Write, record: &CallRecord) -> Result<(), CliError>;
}

/// Aligned `key: value` lines.
pub struct TextPresenter;

impl Presenter for TextPresenter {
    fn present_record(&self, out: &mut dyn Write, record: &CallRecord) -> Result<(), CliError> {
        let args = serde_json::to_string(record.args())?;
        writeln!(out, "contract: {}", record.contract())?;
        writeln!(out, "method:   {}", record.method())?;
        writeln!(out, "args:     {}", args)?;
        writeln!(out, "result:   {}", record.result())?;
        Ok(())
    }
}

/// The record as pretty-printed JSON.
pub struct JsonPresenter;

impl Presenter for JsonPresenter {
    fn present_record(&self, out: &mut dyn Write, record: &CallRecord) -> Result<(), CliError> {
        writeln!(out, "{}", serde_json::to_string_pretty(record)?)?;
        Ok(())
    }
}

pub fn create_presenter(format: OutputFormat) -> Box<dyn Presenter> {
    match format {
        OutputFormat::Text => Box::new(TextPresenter),
        OutputFormat::Json => Box::new(JsonPresenter),
    }
}
