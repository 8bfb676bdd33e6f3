//! Command-line parsing for the snippets tool.

use anyhow::{Result, anyhow, bail};
use catalog::{Category, ExportFormat};
use std::path::PathBuf;

/// Environment variable naming the export to load when `--data` is absent.
pub const DATA_ENV: &str = "SNIPPETS_DATA";

/// Export loaded when neither `--data` nor [`DATA_ENV`] is given.
pub const DEFAULT_DATA: &str = "snippets.json";

pub const USAGE: &str = "Usage:
  snippets [--data <PATH>] list [--category <CATEGORY>] [--new]
  snippets [--data <PATH>] get <ID> [--tailwind | --json]
  snippets [--data <PATH>] search <QUERY>
  snippets [--data <PATH>] add <ID> --to <FILE> [--tailwind]
  snippets [--data <PATH>] inspect <ID>
  snippets help

PATH is an exported JSON array or a directory of them (default: $SNIPPETS_DATA, then snippets.json).";

/// How `get` prints a snippet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GetOutput {
    #[default]
    Css,
    Tailwind,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    List {
        category: Option<Category>,
        only_new: bool,
    },
    Get {
        id: String,
        output: GetOutput,
    },
    Search {
        query: String,
    },
    Add {
        id: String,
        target: PathBuf,
        format: ExportFormat,
    },
    Inspect {
        id: String,
    },
    Help,
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// Value of `--data`, if given.
    pub data: Option<PathBuf>,
    pub command: Command,
}

impl Invocation {
    /// Export path: `--data`, then the environment value, then [`DEFAULT_DATA`].
    pub fn data_path(&self, env_value: Option<String>) -> PathBuf {
        self.data
            .clone()
            .or_else(|| env_value.filter(|value| !value.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA))
    }
}

/// Parse arguments (without the program name).
///
/// # Errors
/// Returns an error for unknown commands or flags, missing values, and missing operands.
pub fn parse_args<I>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = String>,
{
    let mut remaining: Vec<String> = args.into_iter().collect();
    let mut data = None;
    if remaining.first().is_some_and(|arg| arg == "--data") {
        remaining.remove(0);
        if remaining.is_empty() {
            bail!("--data requires a value");
        }
        data = Some(PathBuf::from(remaining.remove(0)));
    } else if let Some(rest) = remaining.first().and_then(|arg| arg.strip_prefix("--data=")) {
        data = Some(PathBuf::from(rest));
        remaining.remove(0);
    }
    if remaining.is_empty() {
        return Ok(Invocation {
            data,
            command: Command::Help,
        });
    }
    let cmd = remaining.remove(0);
    let command = match cmd.as_str() {
        "list" => parse_list(&remaining)?,
        "get" => parse_get(&remaining)?,
        "search" => parse_search(&remaining)?,
        "add" => parse_add(&remaining)?,
        "inspect" => Command::Inspect {
            id: single_operand("inspect", &remaining)?,
        },
        "help" | "-h" | "--help" => Command::Help,
        other => bail!("unknown command: {other}"),
    };
    Ok(Invocation { data, command })
}

fn parse_list(args: &[String]) -> Result<Command> {
    let mut category = None;
    let mut only_new = false;
    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--category" | "-c" => {
                index += 1;
                let value = args
                    .get(index)
                    .ok_or_else(|| anyhow!("list requires a value for --category"))?;
                category = Some(value.parse::<Category>()?);
            }
            "--new" => only_new = true,
            other => bail!("list does not take '{other}'"),
        }
        index += 1;
    }
    Ok(Command::List { category, only_new })
}

fn parse_get(args: &[String]) -> Result<Command> {
    let mut id = None;
    let mut output = GetOutput::Css;
    for arg in args {
        match arg.as_str() {
            "--tailwind" => output = GetOutput::Tailwind,
            "--json" => output = GetOutput::Json,
            "--css" => output = GetOutput::Css,
            flag if flag.starts_with("--") => bail!("get does not take '{flag}'"),
            value => set_once("get", &mut id, value)?,
        }
    }
    let id = id.ok_or_else(|| anyhow!("get requires a snippet id"))?;
    Ok(Command::Get { id, output })
}

fn parse_search(args: &[String]) -> Result<Command> {
    let query = args.join(" ");
    if query.trim().is_empty() {
        bail!("search requires a query");
    }
    Ok(Command::Search { query })
}

fn parse_add(args: &[String]) -> Result<Command> {
    let mut id = None;
    let mut target = None;
    let mut format = ExportFormat::Css;
    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--to" | "-o" => {
                index += 1;
                let value = args
                    .get(index)
                    .ok_or_else(|| anyhow!("add requires a value for --to"))?;
                target = Some(PathBuf::from(value));
            }
            "--tailwind" => format = ExportFormat::Tailwind,
            "--css" => format = ExportFormat::Css,
            flag if flag.starts_with("--") => bail!("add does not take '{flag}'"),
            value => set_once("add", &mut id, value)?,
        }
        index += 1;
    }
    let id = id.ok_or_else(|| anyhow!("add requires a snippet id"))?;
    let target = target.ok_or_else(|| anyhow!("add requires --to <FILE>"))?;
    Ok(Command::Add { id, target, format })
}

fn single_operand(cmd: &str, args: &[String]) -> Result<String> {
    match args {
        [only] if !only.starts_with("--") => Ok(only.clone()),
        [] => Err(anyhow!("{cmd} requires a snippet id")),
        _ => Err(anyhow!("{cmd} takes exactly one snippet id")),
    }
}

fn set_once(cmd: &str, slot: &mut Option<String>, value: &str) -> Result<()> {
    if slot.is_some() {
        bail!("{cmd} takes exactly one snippet id");
    }
    *slot = Some(value.to_owned());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Invocation> {
        parse_args(line.split_whitespace().map(str::to_owned))
    }

    fn command(line: &str) -> Option<Command> {
        parse(line).ok().map(|invocation| invocation.command)
    }

    #[test]
    fn no_arguments_is_help() {
        assert_eq!(command(""), Some(Command::Help));
        assert_eq!(command("--help"), Some(Command::Help));
    }

    #[test]
    fn list_with_filters() {
        assert_eq!(
            command("list --category button --new"),
            Some(Command::List {
                category: Some(Category::Buttons),
                only_new: true,
            })
        );
        assert!(parse("list --category").is_err());
        assert!(parse("list --category widgets").is_err());
    }

    #[test]
    fn get_output_flags() {
        assert_eq!(
            command("get btn-neon --json"),
            Some(Command::Get {
                id: "btn-neon".to_owned(),
                output: GetOutput::Json,
            })
        );
        assert!(parse("get").is_err());
        assert!(parse("get one two").is_err());
        assert!(parse("get one --yaml").is_err());
    }

    #[test]
    fn search_joins_words() {
        assert_eq!(
            command("search dotted grid"),
            Some(Command::Search {
                query: "dotted grid".to_owned(),
            })
        );
        assert!(parse("search").is_err());
    }

    #[test]
    fn add_requires_target() {
        assert_eq!(
            command("add grid-dots --to out/app.css --tailwind"),
            Some(Command::Add {
                id: "grid-dots".to_owned(),
                target: PathBuf::from("out/app.css"),
                format: ExportFormat::Tailwind,
            })
        );
        assert!(parse("add grid-dots").is_err());
        assert!(parse("add --to out.css").is_err());
    }

    #[test]
    fn inspect_takes_one_id() {
        assert_eq!(
            command("inspect grid-dots"),
            Some(Command::Inspect {
                id: "grid-dots".to_owned(),
            })
        );
        assert!(parse("inspect").is_err());
        assert!(parse("inspect a b").is_err());
    }

    #[test]
    fn unknown_command_fails() {
        assert!(parse("publish").is_err());
    }

    #[test]
    fn data_flag_precedes_command() {
        let invocation = parse("--data exports list").ok();
        assert_eq!(
            invocation.as_ref().map(|parsed| parsed.data.clone()),
            Some(Some(PathBuf::from("exports")))
        );
        let inline = parse("--data=exports/all.json list").ok();
        assert_eq!(
            inline.and_then(|parsed| parsed.data),
            Some(PathBuf::from("exports/all.json"))
        );
        assert!(parse("--data").is_err());
    }

    #[test]
    fn data_path_precedence() {
        let explicit = Invocation {
            data: Some(PathBuf::from("flag.json")),
            command: Command::Help,
        };
        assert_eq!(
            explicit.data_path(Some("env.json".to_owned())),
            PathBuf::from("flag.json")
        );
        let implicit = Invocation {
            data: None,
            command: Command::Help,
        };
        assert_eq!(
            implicit.data_path(Some("env.json".to_owned())),
            PathBuf::from("env.json")
        );
        assert_eq!(implicit.data_path(Some("  ".to_owned())), PathBuf::from(DEFAULT_DATA));
        assert_eq!(implicit.data_path(None), PathBuf::from(DEFAULT_DATA));
    }
}
