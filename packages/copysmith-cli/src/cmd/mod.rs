//! Command implementations

pub mod generate;
pub mod key;
pub mod profile;
pub mod scrape;
pub mod texts;
pub mod translate;
