use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result};

/// Deepest tree `parse_mind_map_json` can accept. serde_json stops at 128
/// nested containers and every level below the root costs two (the
/// `children` array and the child object).
pub const MAX_JSON_TREE_DEPTH: usize = 63;

/// A mind-map node as produced by the document summarizer.
///
/// Both fields are optional at the wire level so a bad payload can be
/// reported as invalid input instead of a generic decode failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MindMapInput {
    #[serde(default)]
    pub title: Option<String>,
    /// Absent, `null` and `[]` all mean "leaf".
    #[serde(default)]
    pub children: Option<Vec<MindMapInput>>,
}

impl MindMapInput {
    pub fn leaf(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), children: None }
    }

    pub fn branch(title: impl Into<String>, children: Vec<MindMapInput>) -> Self {
        Self { title: Some(title.into()), children: Some(children) }
    }

    pub fn children(&self) -> &[MindMapInput] {
        self.children.as_deref().unwrap_or(&[])
    }
}

/// Parse the summarizer's JSON reply into a [`MindMapInput`].
///
/// Model output often arrives wrapped in a Markdown code fence, so a leading
/// ```` ```json ```` / ```` ``` ```` and a trailing ```` ``` ```` are stripped first.
pub fn parse_mind_map_json(text: &str) -> Result<MindMapInput> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(Error::invalid("no mind map data"));
    }

    let value: Value = serde_json::from_str(body).map_err(nesting_as_invalid)?;
    match value {
        Value::Null => Err(Error::invalid("no mind map data")),
        Value::Object(_) => Ok(serde_json::from_value(value)?),
        other => Err(Error::invalid(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

fn nesting_as_invalid(err: serde_json::Error) -> Error {
    if err.to_string().starts_with("recursion limit exceeded") {
        Error::invalid(format!("tree is deeper than {MAX_JSON_TREE_DEPTH} levels"))
    } else {
        Error::Json(err)
    }
}

fn strip_code_fence(text: &str) -> &str {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```") {
        body = rest.strip_prefix("json").unwrap_or(rest);
        body = body.trim_end();
        body = body.strip_suffix("```").unwrap_or(body);
    }
    body.trim()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
