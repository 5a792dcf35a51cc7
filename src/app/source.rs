//! Where the recipient list comes from: CLI args, a file, or stdin.

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Parse recipients from text. A leading `[` means a JSON array of strings,
/// anything else is one recipient per line. Blank lines are dropped.
pub fn parse_recipients(content: &str, origin: &str) -> Result<Vec<String>> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        let list: Vec<String> =
            serde_json::from_str(trimmed).map_err(|source| Error::ParseRecipients {
                path: origin.to_string(),
                source,
            })?;
        return Ok(clean(list));
    }

    Ok(clean(content.lines().map(str::to_string)))
}

fn clean(list: impl IntoIterator<Item = String>) -> Vec<String> {
    list.into_iter()
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect()
}

pub fn read_recipients(path: &Path) -> Result<Vec<String>> {
    let origin = path.display().to_string();
    let content = if origin == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        std::fs::read_to_string(path)
    }
    .map_err(|source| Error::ReadRecipients {
        path: origin.clone(),
        source,
    })?;

    parse_recipients(&content, &origin)
}

/// CLI recipients come first, then anything read from `--file`.
pub fn collect(args: Vec<String>, file: Option<&Path>) -> Result<Vec<String>> {
    let mut recipients = clean(args);
    if let Some(path) = file {
        recipients.extend(read_recipients(path)?);
    }
    Ok(recipients)
}
