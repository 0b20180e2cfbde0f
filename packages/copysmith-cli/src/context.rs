//! Application context with shared state and utilities

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::PathBuf;

use copywriter::JsonFileStore;

/// Application context passed to all commands
pub struct AppContext {
    pub store: JsonFileStore,
    pub yes: bool,
}

impl AppContext {
    pub fn new(state_path: PathBuf, yes: bool) -> Self {
        Self {
            store: JsonFileStore::new(state_path),
            yes,
        }
    }

    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.yes {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    pub fn print_header(&self, msg: &str) {
        println!();
        println!("{}", style(msg).bold());
    }

    pub fn print_success(&self, msg: &str) {
        println!("{}", style(msg).green());
    }

    pub fn print_warning(&self, msg: &str) {
        println!("{}", style(msg).yellow());
    }

    pub fn print_info(&self, msg: &str) {
        println!("{}", style(msg).cyan());
    }
}
