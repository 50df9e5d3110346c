use crate::error::Result;

use super::{OutputFormatter, RunSummary};

/// Pretty-printed JSON; absent sections are omitted.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &RunSummary) -> Result<String> {
        Ok(serde_json::to_string_pretty(summary)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
