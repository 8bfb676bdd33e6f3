//! Writing snippets into a user's project file.

use crate::Snippet;
use anyhow::{Context as _, Result};
use log::debug;
use std::fs::{OpenOptions, create_dir_all, read_to_string};
use std::io::{ErrorKind, Write as _};
use std::path::Path;

/// Which representation of a snippet to export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// A `.{id} { ... }` rule.
    #[default]
    Css,
    /// The Tailwind class string.
    Tailwind,
}

/// Result of [`add_to_project`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// The file already had this snippet's header; nothing was written.
    AlreadyPresent,
}

/// Header comment identifying an exported snippet in a project file.
pub fn export_header(snippet: &Snippet, format: ExportFormat) -> String {
    match format {
        ExportFormat::Css => format!("/* {}: {} */", snippet.id, snippet.name),
        ExportFormat::Tailwind => format!("<!-- {}: {} -->", snippet.id, snippet.name),
    }
}

/// Render a snippet as a block ready to append to a project file.
///
/// CSS is wrapped in a `.{id}` rule with each authored line indented by two spaces;
/// Tailwind is the class string on one line. Both start with [`export_header`] and end
/// with a newline.
pub fn render_export(snippet: &Snippet, format: ExportFormat) -> String {
    let header = export_header(snippet, format);
    match format {
        ExportFormat::Css => {
            let mut block = format!("{header}\n.{} {{\n", snippet.id);
            for line in snippet.css.trim().lines() {
                let trimmed = line.trim_end();
                if trimmed.is_empty() {
                    block.push('\n');
                } else {
                    block.push_str("  ");
                    block.push_str(trimmed);
                    block.push('\n');
                }
            }
            block.push_str("}\n");
            block
        }
        ExportFormat::Tailwind => format!("{header}\n{}\n", snippet.tailwind.trim()),
    }
}

/// Append a snippet to `path`, creating the file and its parent directories if needed.
///
/// Blocks are separated by one blank line. A snippet whose header line is already in the
/// file is not written again.
///
/// # Errors
/// Returns an error if the file cannot be read, created, or written.
pub fn add_to_project(path: &Path, snippet: &Snippet, format: ExportFormat) -> Result<AddOutcome> {
    let existing = match read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    let header = export_header(snippet, format);
    if existing.lines().any(|line| line.trim() == header) {
        debug!("catalog: {} already in {}", snippet.id, path.display());
        return Ok(AddOutcome::AlreadyPresent);
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let separator = if existing.trim().is_empty() {
        ""
    } else if existing.ends_with('\n') {
        "\n"
    } else {
        "\n\n"
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    write!(file, "{separator}{}", render_export(snippet, format))
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(AddOutcome::Added)
}
