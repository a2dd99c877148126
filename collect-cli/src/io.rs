//! Reading the input document and rendering command output.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::config::CliConfig;

/// Read and parse the JSON input from `path`, or from stdin when `None`.
pub fn read_document(path: Option<&Path>) -> Result<Value> {
    let raw = match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            buf
        }
    };
    parse_document(&raw)
}

pub fn parse_document(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).context("parse input json")
}

/// Serialize `value` as JSON with a trailing newline, honoring `pretty`/`indent`.
pub fn render<T: Serialize>(value: &T, config: &CliConfig) -> Result<String> {
    let mut buf = Vec::new();
    if config.pretty {
        let indent = " ".repeat(config.indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser).context("serialize output json")?;
    } else {
        serde_json::to_writer(&mut buf, value).context("serialize output json")?;
    }
    let mut payload = String::from_utf8(buf).context("output json is not utf-8")?;
    payload.push('\n');
    Ok(payload)
}
