//! Danish prompts for the copywriting pipeline.
//!
//! All model-facing text lives here. The clause constants are appended to
//! the base prompt verbatim; the `format_*` helpers build the follow-up
//! prompts for the two refinement loops and the CSV translator.

/// Fixed clause appended when the FAQ toggle is on.
pub const FAQ_CLAUSE: &str = "Lav en FAQ-sektion med mindst 3 spørgsmål.\n";

/// Fixed clause appended when the meta toggle is on.
pub const META_CLAUSE: &str = "Tilføj meta-titel (60 tegn) og meta-beskrivelse (160 tegn).\n";

/// Fixed clause appended when the internal-links toggle is on.
pub const INTERNAL_LINKS_CLAUSE: &str = "Tilføj mindst 2 interne links.\n";

/// Fixed clause appended when the CTA toggle is on.
pub const CTA_CLAUSE: &str = "Afslut med en tydelig CTA.\n";

/// Terms the base prompt always forbids.
pub const AVOID_CLAUSE: &str = "Undgå 'bæredygtighed'/'bæredygtig'.\n";

/// Format clause for HTML output.
pub const HTML_FORMAT_CLAUSE: &str = "Returnér i HTML med <h2>, <h3>, <h4> overskrifter.\n";

/// Format clause for Markdown output.
pub const MARKDOWN_FORMAT_CLAUSE: &str = "Returnér i Markdown med ## og ### overskrifter.\n";

/// Format clause for plain-text output.
pub const PLAIN_FORMAT_CLAUSE: &str = "Returnér som ren tekst uden markup.\n";

/// Build the follow-up prompt asking the model to extend a short draft.
pub fn format_extension_prompt(draft: &str, min_words: usize, deficit: usize) -> String {
    format!(
        "Her er et udkast til en SEO-tekst:\n\n{draft}\n\n\
         Teksten skal være på mindst {min_words} ord og mangler cirka {deficit} ord.\n\
         Udvid teksten, så den når mindst {min_words} ord. Behold det eksisterende \
         indhold, struktur og format, og returnér hele den udvidede tekst."
    )
}

/// Build the rewrite prompt listing the blacklisted terms found in the text.
pub fn format_rewrite_prompt(text: &str, found: &[&str]) -> String {
    format!(
        "Følgende tekst indeholder forbudte ord: {terms}.\n\n{text}\n\n\
         Omskriv teksten, så ingen af de forbudte ord indgår, uden at forkorte \
         teksten væsentligt. Behold struktur og format, og returnér hele teksten.",
        terms = found.join(", "),
    )
}

/// System prompt for the CSV translator.
pub fn format_translator_system(language: &str) -> String {
    format!(
        "Du er en professionel oversætter. Oversæt nøjagtigt fra dansk til \
         {language} uden at ændre HTML-struktur."
    )
}

/// User prompt for the CSV translator.
pub fn format_translator_user(language: &str, source: &str) -> String {
    format!("Oversæt følgende tekst fra dansk til {language}: {source}")
}
