//! Item loading for the picker
//!
//! Items come from a file or stdin: one item per non-empty line, or a JSON
//! array of strings when the content starts with `[`.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::AutocomboError;

/// Read items from `path`, or from stdin when `path` is `None`.
pub fn read_items(path: Option<&Path>) -> Result<Vec<String>, AutocomboError> {
    let contents = match path {
        Some(file_path) => {
            let mut file = File::open(file_path)?;
            let mut contents = String::new();
            file.read_to_string(&mut contents)?;
            contents
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    parse_items(&contents)
}

/// Parse raw input into picker items.
pub fn parse_items(contents: &str) -> Result<Vec<String>, AutocomboError> {
    let items = if contents.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<String>>(contents)
            .map_err(|e| AutocomboError::InvalidItems(e.to_string()))?
    } else {
        contents
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(String::from)
            .collect()
    };

    if items.is_empty() {
        return Err(AutocomboError::NoItems);
    }

    #[cfg(debug_assertions)]
    log::debug!("Loaded {} items", items.len());

    Ok(items)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
