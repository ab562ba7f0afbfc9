//! Front-matter extraction and content rebuilding

use serde_yaml::{Mapping, Value};
use tracing::error;

use crate::block::{self, DELIMITER, LineSpan};
use crate::error::{Error, Result};

/// A parsed front-matter block and where it sits in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    /// Parsed YAML mapping; key insertion order is preserved.
    pub mapping: Mapping,
    /// Line span of the delimiter pair in the original source.
    pub span: LineSpan,
}

/// Parse the first front-matter block in `source`.
///
/// Fails with [`Error::BlockNotFound`] when no delimiter pair exists (an
/// opening delimiter with no closing one counts as not found), with
/// [`Error::Yaml`] when the inner lines are not valid YAML, and with
/// [`Error::NotAMapping`] when they parse to any other shape. An empty
/// block parses to null and is therefore a shape violation as well.
pub fn parse(source: &str) -> Result<FrontMatter> {
    let span = block::locate(source).ok_or(Error::BlockNotFound)?;
    let lines: Vec<&str> = source.lines().collect();
    let inner = lines[span.start + 1..span.end].join("\n");

    let value: Value = serde_yaml::from_str(&inner).map_err(|e| {
        error!("failed to parse front matter as YAML: {e}");
        e
    })?;

    match value {
        Value::Mapping(mapping) => Ok(FrontMatter { mapping, span }),
        other => Err(Error::NotAMapping {
            shape: shape_name(&other),
        }),
    }
}

/// Rebuild the full note text with `mapping` replacing the block at `span`.
///
/// Lines before the opening delimiter and after the closing one are carried
/// over verbatim; everything is joined with `\n`, so a file with mixed line
/// terminators comes out normalized and no trailing newline is appended.
/// Serialization keeps key insertion order and leaves non-ASCII text
/// unescaped.
pub fn rebuild(source: &str, span: LineSpan, mapping: &Mapping) -> Result<String> {
    let serialized = serde_yaml::to_string(mapping)?;
    let lines: Vec<&str> = source.lines().collect();

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 2);
    out.extend(&lines[..span.start]);
    out.push(DELIMITER);
    out.extend(serialized.trim_end().lines());
    out.push(DELIMITER);
    out.extend(&lines[span.end + 1..]);
    Ok(out.join("\n"))
}

/// Parse, transform, and re-splice the front matter of `source`.
///
/// `updater` receives the parsed mapping by shared reference and returns
/// its replacement; keys it does not touch keep their values and order,
/// which is what makes repeated runs converge to a fixed point.
pub fn update_with<F>(source: &str, updater: F) -> Result<String>
where
    F: FnOnce(&Mapping) -> Mapping,
{
    let fm = parse(source)?;
    let updated = updater(&fm.mapping);
    rebuild(source, fm.span, &updated)
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
