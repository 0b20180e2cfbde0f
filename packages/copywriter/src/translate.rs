//! Batch translation of Shopify product-export CSV files.
//!
//! Rows are translated in place: for each row whose locale is supported and
//! selected and whose `Translated content` cell is empty, one chat call
//! translates `Default content` from Danish, preserving HTML markup. Every
//! other row passes through untouched, in its original position.

use std::io::{Read, Write};

use tracing::{debug, info, warn};

use crate::error::TranslateError;
use crate::pipeline::prompts::{format_translator_system, format_translator_user};
use crate::traits::generator::{GenerationRequest, TextGenerator};

/// Locales the tool translates into, with their Danish language names.
pub const SUPPORTED_LOCALES: &[(&str, &str)] = &[
    ("en", "Engelsk"),
    ("de", "Tysk"),
    ("fr", "Fransk"),
    ("nl", "Hollandsk"),
    ("es", "Spansk"),
    ("it", "Italiensk"),
    ("sv", "Svensk"),
    ("no", "Norsk"),
    ("fi", "Finsk"),
    ("pl", "Polsk"),
    ("ja", "Japansk"),
];

/// Danish name of the target language for a locale, if supported.
pub fn target_language(locale: &str) -> Option<&'static str> {
    SUPPORTED_LOCALES
        .iter()
        .find(|(code, _)| *code == locale)
        .map(|(_, name)| *name)
}

/// Outcome counts for one translation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslateReport {
    /// Rows that received a translation
    pub translated: usize,

    /// Rows passed through untouched
    pub skipped: usize,

    /// Rows where the call failed (cell holds a `FEJL:` marker)
    pub failed: usize,
}

/// Translate a Shopify export, writing the full table to `output`.
///
/// Requires the columns `Locale`, `Default content` and `Translated content`;
/// all other columns (`Type`, `Field`, ...) pass through unchanged. Passing
/// `None` for `selected_locales` selects every supported locale. A failed
/// call writes `FEJL: {error}` into the cell and the run continues.
pub async fn translate_csv<R: Read, W: Write>(
    generator: &dyn TextGenerator,
    input: R,
    output: W,
    selected_locales: Option<&[String]>,
) -> Result<TranslateReport, TranslateError> {
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader.headers()?.clone();
    let locale_idx = column_index(&headers, "Locale")?;
    let source_idx = column_index(&headers, "Default content")?;
    let target_idx = column_index(&headers, "Translated content")?;

    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(&headers)?;

    let mut report = TranslateReport::default();
    for record in reader.records() {
        let record = record?;
        let locale = record.get(locale_idx).unwrap_or("").trim();
        let source = record.get(source_idx).unwrap_or("");
        let translated = record.get(target_idx).unwrap_or("");

        let selected = selected_locales
            .map(|locales| locales.iter().any(|l| l == locale))
            .unwrap_or(true);
        let wants_translation =
            selected && translated.trim().is_empty() && !source.trim().is_empty();

        let language = match target_language(locale) {
            Some(language) if wants_translation => language,
            _ => {
                report.skipped += 1;
                writer.write_record(&record)?;
                continue;
            }
        };
        debug!(locale, language, "translating row");

        let request = GenerationRequest::new(format_translator_user(language, source))
            .with_system(format_translator_system(language));

        let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
        match generator.generate(request).await {
            Ok(text) => {
                fields[target_idx] = text.trim().to_string();
                report.translated += 1;
            }
            Err(e) => {
                warn!(locale, error = %e, "translation call failed");
                fields[target_idx] = format!("FEJL: {e}");
                report.failed += 1;
            }
        }
        writer.write_record(&fields)?;
    }

    writer.flush()?;
    info!(
        translated = report.translated,
        skipped = report.skipped,
        failed = report.failed,
        "translation run finished"
    );
    Ok(report)
}

fn column_index(headers: &csv::StringRecord, name: &'static str) -> Result<usize, TranslateError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(TranslateError::MissingColumn { name })
}
