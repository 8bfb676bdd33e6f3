//! Command execution against a loaded catalog.

use crate::cli::{Command, GetOutput, USAGE};
use anyhow::{Result, anyhow};
use catalog::{AddOutcome, Catalog, Category, ExportFormat, Snippet, add_to_project};
use css::{SnippetStyle, to_inline_style};
use log::info;
use serde_json::to_string_pretty;
use std::io::Write;
use std::path::Path;

/// Most suggestions listed for an unknown id.
const MAX_SUGGESTIONS: usize = 3;

/// Run `command`, writing its output to `out`.
///
/// # Errors
/// Returns an error for unknown snippet ids, failed exports, and write failures.
pub fn execute<W: Write>(command: &Command, catalog: &Catalog, out: &mut W) -> Result<()> {
    match command {
        Command::List { category, only_new } => list(catalog, *category, *only_new, out),
        Command::Get { id, output } => get(lookup(catalog, id)?, *output, out),
        Command::Search { query } => search(catalog, query, out),
        Command::Add { id, target, format } => add(lookup(catalog, id)?, target, *format, out),
        Command::Inspect { id } => inspect(lookup(catalog, id)?, out),
        Command::Help => {
            writeln!(out, "{USAGE}")?;
            Ok(())
        }
    }
}

/// Find a snippet, suggesting near matches when the id is unknown.
fn lookup<'cat>(catalog: &'cat Catalog, id: &str) -> Result<&'cat Snippet> {
    catalog.get(id).ok_or_else(|| {
        let suggestions: Vec<&str> = catalog
            .search(id)
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|snippet| snippet.id.as_str())
            .collect();
        if suggestions.is_empty() {
            anyhow!("no snippet with id '{id}'")
        } else {
            anyhow!(
                "no snippet with id '{id}' (did you mean: {})",
                suggestions.join(", ")
            )
        }
    })
}

/// One listing line: id, category and name, tab separated.
fn write_row<W: Write>(snippet: &Snippet, out: &mut W) -> Result<()> {
    let marker = if snippet.is_new { " (new)" } else { "" };
    writeln!(
        out,
        "{}\t{}\t{}{marker}",
        snippet.id, snippet.category, snippet.name
    )?;
    Ok(())
}

fn list<W: Write>(
    catalog: &Catalog,
    category: Option<Category>,
    only_new: bool,
    out: &mut W,
) -> Result<()> {
    let mut shown = 0_usize;
    for snippet in catalog.iter() {
        if category.is_some_and(|wanted| snippet.category != wanted) || (only_new && !snippet.is_new)
        {
            continue;
        }
        write_row(snippet, out)?;
        shown += 1;
    }
    info!("listed {shown} of {} snippets", catalog.len());
    Ok(())
}

fn get<W: Write>(snippet: &Snippet, output: GetOutput, out: &mut W) -> Result<()> {
    match output {
        GetOutput::Css => writeln!(out, "{}", snippet.css.trim())?,
        GetOutput::Tailwind => writeln!(out, "{}", snippet.tailwind.trim())?,
        GetOutput::Json => writeln!(out, "{}", to_string_pretty(snippet)?)?,
    }
    Ok(())
}

fn search<W: Write>(catalog: &Catalog, query: &str, out: &mut W) -> Result<()> {
    let matches = catalog.search(query);
    if matches.is_empty() {
        writeln!(out, "no snippets match '{query}'")?;
        return Ok(());
    }
    for snippet in matches {
        write_row(snippet, out)?;
    }
    Ok(())
}

fn add<W: Write>(snippet: &Snippet, target: &Path, format: ExportFormat, out: &mut W) -> Result<()> {
    match add_to_project(target, snippet, format)? {
        AddOutcome::Added => writeln!(out, "added {} to {}", snippet.id, target.display())?,
        AddOutcome::AlreadyPresent => writeln!(
            out,
            "{} is already in {}, nothing written",
            snippet.id,
            target.display()
        )?,
    }
    Ok(())
}

/// Print the parsed inline style, brightness and adaptive classes of a snippet.
fn inspect<W: Write>(snippet: &Snippet, out: &mut W) -> Result<()> {
    let analyzed = SnippetStyle::analyze(&snippet.css);
    writeln!(out, "{}", to_string_pretty(&analyzed.style)?)?;
    writeln!(out, "inline: {}", to_inline_style(&analyzed.style))?;
    writeln!(out, "brightness: {}", analyzed.brightness)?;
    writeln!(out, "text: {}", analyzed.classes.text)?;
    writeln!(out, "muted: {}", analyzed.classes.muted)?;
    writeln!(out, "background: {}", analyzed.classes.background)?;
    writeln!(out, "card: {}", analyzed.classes.card)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(id: &str, category: Category, css: &str, is_new: bool) -> Snippet {
        Snippet {
            id: id.to_owned(),
            name: id.replace('-', " "),
            category,
            css: css.to_owned(),
            tailwind: format!("tw-{id}"),
            is_new,
            label: None,
            placeholder: None,
        }
    }

    fn sample() -> Catalog {
        Catalog::from_snippets(vec![
            snippet("grid-dots", Category::Patterns, "background-color: #fafafa;", false),
            snippet("night-sky", Category::Patterns, "background: #0a0a0f;\ncolor: #ffffff;", true),
            snippet("btn-ghost", Category::Buttons, "padding: 8px 16px;", false),
        ])
        .unwrap_or_default()
    }

    fn run(command: &Command) -> Result<String> {
        let mut out = Vec::new();
        execute(command, &sample(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn list_filters_by_category_and_new() -> Result<()> {
        let patterns = run(&Command::List {
            category: Some(Category::Patterns),
            only_new: false,
        })?;
        assert_eq!(patterns.lines().count(), 2);
        let fresh = run(&Command::List {
            category: None,
            only_new: true,
        })?;
        assert_eq!(fresh, "night-sky\tpatterns\tnight sky (new)\n");
        Ok(())
    }

    #[test]
    fn get_prints_requested_representation() -> Result<()> {
        let tailwind = run(&Command::Get {
            id: "btn-ghost".to_owned(),
            output: GetOutput::Tailwind,
        })?;
        assert_eq!(tailwind, "tw-btn-ghost\n");
        let json = run(&Command::Get {
            id: "night-sky".to_owned(),
            output: GetOutput::Json,
        })?;
        assert!(json.contains("\"isNew\": true"));
        Ok(())
    }

    #[test]
    fn unknown_id_suggests_matches() {
        let result = run(&Command::Get {
            id: "grid".to_owned(),
            output: GetOutput::Css,
        });
        let message = result.err().map(|err| err.to_string()).unwrap_or_default();
        assert!(message.contains("did you mean: grid-dots"));
    }

    #[test]
    fn search_reports_empty_results() -> Result<()> {
        let output = run(&Command::Search {
            query: "toggle".to_owned(),
        })?;
        assert_eq!(output, "no snippets match 'toggle'\n");
        Ok(())
    }

    #[test]
    fn inspect_shows_brightness_and_classes() -> Result<()> {
        let output = run(&Command::Inspect {
            id: "night-sky".to_owned(),
        })?;
        assert!(output.contains("\"background\": \"#0a0a0f\""));
        assert!(output.contains("inline: background: #0a0a0f; color: #ffffff;"));
        assert!(output.contains("brightness: dark"));
        assert!(output.contains("text: text-white"));
        let colourless = run(&Command::Inspect {
            id: "btn-ghost".to_owned(),
        })?;
        assert!(colourless.contains("brightness: auto"));
        assert!(colourless.contains("card: bg-card"));
        Ok(())
    }
}
