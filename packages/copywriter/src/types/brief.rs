//! The generation brief: everything the user picks before a run.

/// Audience options offered by the app. The brief accepts any string.
pub const AUDIENCES: &[&str] = &[
    "B2C (forbrugere)",
    "B2B (professionelle)",
    "Design/fagligt interesserede",
    "Andet",
];

/// Purpose options offered by the app.
pub const PURPOSES: &[&str] = &[
    "Salg/landingsside",
    "Informativ blog",
    "Branding/storytelling",
];

/// Tone-of-voice options offered by the app.
pub const TONES: &[&str] = &[
    "Neutral",
    "Formel",
    "Venlig",
    "Entusiastisk",
    "Humoristisk",
    "Autoritær",
    "Professionel",
];

/// Output format for the generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text without markup
    Plain,
    /// Markdown with ## and ### headings
    Markdown,
    /// HTML with h2/h3/h4 headings
    #[default]
    Html,
}

/// What to do with markdown `###` headings after refinement.
///
/// The app historically shipped variants that stripped them, bolded them or
/// left them alone; here it is an explicit choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingStyle {
    /// Leave the text untouched
    #[default]
    Keep,
    /// Remove `### ` markers
    Strip,
    /// Replace `### heading` lines with `**heading**`
    Bold,
}

/// A generation brief for one SEO text run.
#[derive(Debug, Clone)]
pub struct SeoBrief {
    /// Main keyword / topic
    pub keyword: String,

    /// Audience segment
    pub audience: String,

    /// Purpose of the text
    pub purpose: String,

    /// Tone of voice
    pub tone: String,

    /// Minimum word count the refinement loop aims for
    pub min_words: usize,

    /// Comma-separated related keywords
    pub related_keywords: String,

    /// Include a FAQ section with at least 3 questions
    pub include_faq: bool,

    /// Include meta title and meta description
    pub include_meta: bool,

    /// Include at least 2 internal links
    pub include_internal_links: bool,

    /// End with a clear call to action
    pub include_cta: bool,

    /// Output format
    pub format: OutputFormat,

    /// Heading post-processing
    pub heading_style: HeadingStyle,
}

impl SeoBrief {
    /// Create a brief with the app's defaults for everything but the keyword.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            audience: AUDIENCES[0].to_string(),
            purpose: PURPOSES[0].to_string(),
            tone: TONES[0].to_string(),
            min_words: 700,
            related_keywords: String::new(),
            include_faq: false,
            include_meta: false,
            include_internal_links: false,
            include_cta: false,
            format: OutputFormat::default(),
            heading_style: HeadingStyle::default(),
        }
    }

    /// Set the audience segment.
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    /// Set the purpose.
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    /// Set the tone of voice.
    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    /// Set the minimum word count.
    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    /// Set related keywords (comma-separated).
    pub fn with_related_keywords(mut self, related: impl Into<String>) -> Self {
        self.related_keywords = related.into();
        self
    }

    /// Toggle the FAQ section.
    pub fn with_faq(mut self, on: bool) -> Self {
        self.include_faq = on;
        self
    }

    /// Toggle meta title + description.
    pub fn with_meta(mut self, on: bool) -> Self {
        self.include_meta = on;
        self
    }

    /// Toggle internal links.
    pub fn with_internal_links(mut self, on: bool) -> Self {
        self.include_internal_links = on;
        self
    }

    /// Toggle the call to action.
    pub fn with_cta(mut self, on: bool) -> Self {
        self.include_cta = on;
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the heading post-processing.
    pub fn with_heading_style(mut self, style: HeadingStyle) -> Self {
        self.heading_style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brief_defaults() {
        let brief = SeoBrief::new("håndlavede keramikkrus");
        assert_eq!(brief.audience, "B2C (forbrugere)");
        assert_eq!(brief.purpose, "Salg/landingsside");
        assert_eq!(brief.tone, "Neutral");
        assert_eq!(brief.min_words, 700);
        assert_eq!(brief.format, OutputFormat::Html);
        assert_eq!(brief.heading_style, HeadingStyle::Keep);
        assert!(!brief.include_faq);
    }
}
