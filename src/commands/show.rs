//! Show command - print one rider's horoscope

use super::CommandContext;
use crate::horoscope::{HoroscopeDate, NOT_FOUND_TEXT};
use crate::riders::{Rider, RiderDirectory};
use crate::ui::OutputWriter;
use crate::VeloscopeError;

type Result<T> = std::result::Result<T, VeloscopeError>;

/// How many candidate names an ambiguity error lists
const MAX_LISTED: usize = 5;

/// Execute the show command
///
/// An absent horoscope is not an error: the not-found text is printed and
/// the command succeeds.
///
/// # Errors
///
/// Returns `VeloscopeError::InvalidInput` if `name` matches no rider or more
/// than one.
pub fn execute(
    ctx: &CommandContext,
    name: &str,
    date: Option<HoroscopeDate>,
    out: &dyn OutputWriter,
) -> Result<()> {
    let directory = ctx.directory(out);
    let rider = resolve(&directory, name)?;
    let date = date.unwrap_or_else(HoroscopeDate::today);

    match ctx.lookup().fetch_for(rider, date) {
        Some(result) => {
            out.heading(&result.title());
            out.info(&result.date.to_string());
            out.write(result.body());
        }
        None => out.write(NOT_FOUND_TEXT),
    }
    Ok(())
}

/// Find a rider by exact name, else by a fragment matching exactly one rider
fn resolve<'a>(directory: &'a RiderDirectory, name: &str) -> Result<&'a Rider> {
    if let Some(rider) = directory.find(name) {
        return Ok(rider);
    }

    let matches = directory.filter(name.trim());
    match matches.as_slice() {
        [] => Err(VeloscopeError::InvalidInput(format!(
            "No rider matches '{name}'"
        ))),
        [rider] => Ok(*rider),
        many => {
            let mut listed: Vec<&str> = many
                .iter()
                .take(MAX_LISTED)
                .map(|r| r.name.as_str())
                .collect();
            if many.len() > MAX_LISTED {
                listed.push("...");
            }
            Err(VeloscopeError::InvalidInput(format!(
                "'{name}' matches {} riders: {}",
                many.len(),
                listed.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::horoscope::DateFormat;
    use crate::remote::MockSource;
    use crate::ui::{BufferWriter, MessageLevel};
    use chrono::NaiveDate;
    use serde_json::json;
    use std::sync::Arc;

    fn day() -> HoroscopeDate {
        HoroscopeDate::new(NaiveDate::from_ymd_opt(2025, 7, 4).unwrap())
    }

    fn context(source: MockSource, date_format: DateFormat) -> CommandContext {
        let source = source.with_json(
            "https://bucket.test/uci_riders.json",
            json!([
                {"name": "John Smith", "zodiacSign": "Aries"},
                {"name": "anna lee", "zodiacSign": "LeoSign"},
                {"name": "hannah brown", "zodiacSign": "Libra"}
            ]),
        );
        CommandContext {
            source: Arc::new(source),
            base_url: "https://bucket.test".to_string(),
            date_format,
            offline: false,
        }
    }

    #[test]
    fn test_prints_card() {
        let source = MockSource::new().with_json(
            "https://bucket.test/horoscope/2025-07-04/anna_lee.json",
            json!({"horoscope": "Tailwind all day."}),
        );
        let out = BufferWriter::new();

        execute(&context(source, DateFormat::Padded), "ANNA LEE", Some(day()), &out).unwrap();

        assert_eq!(
            out.lines(MessageLevel::Normal),
            vec!["Anna Lee (LeoSign)", "Tailwind all day."]
        );
    }

    #[test]
    fn test_unpadded_date_path() {
        let source = MockSource::new().with_json(
            "https://bucket.test/horoscope/2025-7-4/john_smith.json",
            json!({"horoscope": "Climb."}),
        );
        let out = BufferWriter::new();

        execute(&context(source, DateFormat::Unpadded), "smith", Some(day()), &out).unwrap();
        assert!(out.lines(MessageLevel::Normal).contains(&"Climb.".to_string()));
    }

    #[test]
    fn test_missing_horoscope_is_not_an_error() {
        let out = BufferWriter::new();
        execute(&context(MockSource::new(), DateFormat::Padded), "John Smith", Some(day()), &out)
            .unwrap();
        assert_eq!(out.lines(MessageLevel::Normal), vec![NOT_FOUND_TEXT]);
    }

    #[test]
    fn test_unknown_and_ambiguous_names() {
        let out = BufferWriter::new();
        let ctx = context(MockSource::new(), DateFormat::Padded);

        let err = execute(&ctx, "nobody", Some(day()), &out).unwrap_err();
        assert!(err.to_string().contains("No rider matches 'nobody'"));

        // "ann" is a fragment of both Anna Lee and Hannah Brown
        let err = execute(&ctx, "ann", Some(day()), &out).unwrap_err();
        assert!(err.to_string().contains("matches 2 riders: Anna Lee, Hannah Brown"));
    }
}
