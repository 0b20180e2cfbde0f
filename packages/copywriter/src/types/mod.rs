//! Data types for profiles, persisted state, and generation briefs.

pub mod brief;
pub mod document;
pub mod profile;

pub use brief::{HeadingStyle, OutputFormat, SeoBrief, AUDIENCES, PURPOSES, TONES};
pub use document::{AppDocument, DEFAULT_PROFILE};
pub use profile::Profile;
