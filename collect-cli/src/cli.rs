//! Argument parsing and command dispatch for the `collect` binary.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::debug;

use crate::config::{CliConfig, load_config};
use crate::io::{read_document, render};
use crate::ops::{self, Predicate, Transform};

#[derive(Parser, Debug)]
#[command(
    name = "collect",
    version,
    about = "Transform, filter, dedupe and extract JSON collections"
)]
pub struct Cli {
    /// Read the input document from this file instead of stdin.
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// TOML file with output settings.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Transform every element of an array.
    Apply {
        #[arg(short, long, value_enum)]
        transform: Transform,
    },
    /// Keep array elements matching a predicate (e.g. `gt:2`, `eq:"a"`, `truthy`).
    Select {
        #[arg(short = 'w', long = "where")]
        predicate: Predicate,
    },
    /// Drop array elements matching a predicate.
    Reject {
        #[arg(short = 'w', long = "where")]
        predicate: Predicate,
    },
    /// Remove repeated array elements, keeping first occurrences.
    Unique,
    /// List the keys of an object.
    Keys,
    /// List the values of an object.
    Values,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Apply { .. } => "apply",
            Self::Select { .. } => "select",
            Self::Reject { .. } => "reject",
            Self::Unique => "unique",
            Self::Keys => "keys",
            Self::Values => "values",
        }
    }
}

/// Load config and input, run the command and write the rendered result to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let doc = read_document(cli.input.as_deref())?;
    let result = execute(&cli.command, &doc, &config).context(cli.command.name())?;
    let rendered = render(&result, &config)?;
    out.write_all(rendered.as_bytes()).context("write output")?;
    Ok(())
}

/// Run a single command against an already-parsed document.
pub fn execute(command: &Command, doc: &Value, config: &CliConfig) -> Result<Vec<Value>> {
    let output = match command {
        Command::Apply { transform } => ops::apply_transform(doc, *transform)?,
        Command::Select { predicate } => ops::select_where(doc, predicate)?,
        Command::Reject { predicate } => ops::reject_where(doc, predicate)?,
        Command::Unique => ops::unique_values(doc)?,
        Command::Keys => {
            let mut keys = ops::object_keys(doc)?;
            if config.sort_extracted {
                keys.sort();
            }
            keys.into_iter().map(Value::String).collect()
        }
        Command::Values => {
            let mut values = ops::object_values(doc)?;
            if config.sort_extracted {
                values.sort_by_cached_key(|value| value.to_string());
            }
            values
        }
    };
    debug!(
        command = command.name(),
        output_len = output.len(),
        "command finished"
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::OpError;
    use serde_json::json;

    #[test]
    fn parse_apply() {
        let cli = Cli::parse_from(["collect", "apply", "--transform", "len"]);
        assert_eq!(
            cli.command,
            Command::Apply {
                transform: Transform::Len
            }
        );
        assert!(cli.input.is_none());
    }

    #[test]
    fn parse_select_with_global_input_after_subcommand() {
        let cli = Cli::parse_from(["collect", "select", "--where", "gt:2", "-i", "data.json"]);
        assert_eq!(
            cli.command,
            Command::Select {
                predicate: Predicate::Gt(2.0)
            }
        );
        assert_eq!(cli.input, Some(PathBuf::from("data.json")));
    }

    #[test]
    fn parse_rejects_bad_predicate() {
        let err = Cli::try_parse_from(["collect", "reject", "--where", "gt:x"]).expect_err("bad");
        assert!(err.to_string().contains("invalid number"));
    }

    #[test]
    fn parse_transform_string_alias() {
        let cli = Cli::parse_from(["collect", "apply", "-t", "string"]);
        assert_eq!(
            cli.command,
            Command::Apply {
                transform: Transform::Stringify
            }
        );
    }

    #[test]
    fn keys_sorted_when_configured() {
        let doc = json!({"b": 1, "a": 2, "c": 3});
        let out = execute(&Command::Keys, &doc, &CliConfig::default()).expect("keys");
        assert_eq!(out, vec![json!("a"), json!("b"), json!("c")]);
    }

    #[test]
    fn values_sorted_by_json_text() {
        let doc = json!({"x": "b", "y": 10, "z": "a"});
        let out = execute(&Command::Values, &doc, &CliConfig::default()).expect("values");
        assert_eq!(out, vec![json!("a"), json!("b"), json!(10)]);
    }

    #[test]
    fn unsorted_keys_still_cover_every_key() {
        let cfg = CliConfig {
            sort_extracted: false,
            ..CliConfig::default()
        };
        let doc = json!({"b": 1, "a": 2});
        let mut out = execute(&Command::Keys, &doc, &cfg).expect("keys");
        out.sort_by_cached_key(|value| value.to_string());
        assert_eq!(out, vec![json!("a"), json!("b")]);
    }

    #[test]
    fn execute_keeps_op_error_downcastable() {
        let err = execute(&Command::Unique, &json!({}), &CliConfig::default()).expect_err("shape");
        assert_eq!(
            err.downcast_ref::<OpError>(),
            Some(&OpError::NotAnArray { found: "object" })
        );
    }
}
