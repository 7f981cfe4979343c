//! Riders command - print the rider directory

use super::CommandContext;
use crate::ui::OutputWriter;
use crate::VeloscopeError;

type Result<T> = std::result::Result<T, VeloscopeError>;

/// Execute the riders command
///
/// Prints one `Name (Sign)` line per rider whose name contains `query`, in
/// directory order.
pub fn execute(ctx: &CommandContext, query: Option<&str>, out: &dyn OutputWriter) -> Result<()> {
    let directory = ctx.directory(out);
    let query = query.unwrap_or("");
    let riders = directory.filter(query);

    if riders.is_empty() {
        if query.is_empty() {
            out.info("No riders found.");
        } else {
            out.info(&format!("No riders match '{query}'."));
        }
        return Ok(());
    }

    out.info(&format!(
        "{} of {} riders ({})",
        riders.len(),
        directory.len(),
        directory.source()
    ));
    for rider in riders {
        out.write(&rider.to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::horoscope::DateFormat;
    use crate::remote::MockSource;
    use crate::ui::{BufferWriter, MessageLevel};
    use serde_json::json;
    use std::sync::Arc;

    fn context() -> CommandContext {
        let source = MockSource::new().with_json(
            "https://bucket.test/uci_riders.json",
            json!([
                {"name": "John Smith", "zodiacSign": "Aries"},
                {"name": "anna lee", "zodiacSign": "LeoSign"}
            ]),
        );
        CommandContext {
            source: Arc::new(source),
            base_url: "https://bucket.test".to_string(),
            date_format: DateFormat::Padded,
            offline: false,
        }
    }

    #[test]
    fn test_prints_all_riders_sorted() {
        let out = BufferWriter::new();
        execute(&context(), None, &out).unwrap();

        assert_eq!(
            out.lines(MessageLevel::Normal),
            vec!["Anna Lee (LeoSign)", "John Smith (Aries)"]
        );
        assert_eq!(out.lines(MessageLevel::Info), vec!["2 of 2 riders (remote)"]);
    }

    #[test]
    fn test_filters_by_query() {
        let out = BufferWriter::new();
        execute(&context(), Some("an"), &out).unwrap();
        assert_eq!(out.lines(MessageLevel::Normal), vec!["Anna Lee (LeoSign)"]);
    }

    #[test]
    fn test_no_match_is_informational() {
        let out = BufferWriter::new();
        execute(&context(), Some("zzz"), &out).unwrap();

        assert!(out.lines(MessageLevel::Normal).is_empty());
        assert_eq!(out.lines(MessageLevel::Info), vec!["No riders match 'zzz'."]);
    }
}
