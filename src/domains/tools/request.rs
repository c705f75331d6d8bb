//! Request construction - pure translation from an argument bag to the
//! concrete upstream request.
//!
//! No I/O happens here. The dispatcher feeds the prepared request to the
//! shared HTTP client; everything in this module is deterministic and
//! directly unit-testable.
//!
//! Filtering rule: an argument that is absent, JSON null, or an empty string
//! is omitted from the query string entirely. Declared defaults are applied
//! before filtering, so a defaulted empty string is still omitted.

use serde_json::{Map, Value};

use super::endpoints::{BodyField, BodyRule, EndpointSpec, FieldSource, QueryParam, RequestShape};
use super::error::ToolError;

/// The raw argument bag of one invocation.
pub type ArgumentBag = Map<String, Value>;

/// A fully built upstream request, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    /// Upstream path (no base URL, no query string).
    pub path: &'static str,

    /// Query parameters in registry order, not yet URL-encoded.
    pub query: Vec<(String, String)>,

    /// Request payload.
    pub body: RequestBody,
}

/// Payload variants matching the three request shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Query-GET: no payload.
    None,

    /// Text-GET: raw `text/plain` content.
    Text(String),

    /// Structured-POST: one JSON value carrying the whole batch.
    Json(Value),
}

/// Build the concrete request for one endpoint from the caller's arguments.
pub fn prepare(spec: &EndpointSpec, args: &ArgumentBag) -> Result<PreparedRequest, ToolError> {
    match &spec.shape {
        RequestShape::QueryGet { params } => Ok(PreparedRequest {
            path: spec.path,
            query: build_query(params, args)?,
            body: RequestBody::None,
        }),
        RequestShape::TextGet {
            params,
            body_source,
        } => Ok(PreparedRequest {
            path: spec.path,
            query: build_query(params, args)?,
            body: RequestBody::Text(text_body(body_source, args)?),
        }),
        RequestShape::StructuredPost { body } => Ok(PreparedRequest {
            path: spec.path,
            query: Vec::new(),
            body: RequestBody::Json(build_body(body, args)?),
        }),
    }
}

impl PreparedRequest {
    /// Render the full request URL against a base URL (no trailing slash).
    pub fn url(&self, base_url: &str) -> Result<String, ToolError> {
        let mut url = format!("{}{}", base_url, self.path);
        if !self.query.is_empty() {
            let encoded = serde_urlencoded::to_string(&self.query)
                .map_err(|e| ToolError::invalid_argument(e.to_string()))?;
            url.push('?');
            url.push_str(&encoded);
        }
        Ok(url)
    }
}

fn build_query(
    params: &[QueryParam],
    args: &ArgumentBag,
) -> Result<Vec<(String, String)>, ToolError> {
    let mut query = Vec::with_capacity(params.len());

    for param in params {
        let value = match args.get(param.source) {
            Some(v) if !v.is_null() => render_query_value(param.source, v)?,
            _ => param.default.and_then(|d| d.render()),
        };

        let Some(value) = value else {
            if param.required {
                return Err(ToolError::invalid_argument(format!(
                    "missing required argument `{}`",
                    param.source
                )));
            }
            continue;
        };

        // Empty strings are never sent; the upstream treats a missing key
        // and an empty value differently.
        if value.is_empty() {
            continue;
        }

        let value = if param.percent_encode {
            urlencoding::encode(&value).into_owned()
        } else {
            value
        };

        query.push((param.upstream.to_string(), value));
    }

    Ok(query)
}

/// Render one argument as a query-string value.
///
/// Lists of strings are comma-joined (the upstream's convention for the
/// lstNames parameter); scalars are stringified.
fn render_query_value(source: &str, value: &Value) -> Result<Option<String>, ToolError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                let Value::String(s) = item else {
                    return Err(ToolError::invalid_argument(format!(
                        "argument `{source}` must be a list of strings"
                    )));
                };
                parts.push(s.as_str());
            }
            Ok(Some(parts.join(",")))
        }
        _ => Err(ToolError::invalid_argument(format!(
            "argument `{source}` has an unsupported type"
        ))),
    }
}

fn text_body(source: &str, args: &ArgumentBag) -> Result<String, ToolError> {
    match args.get(source) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ToolError::invalid_argument(format!(
            "argument `{source}` must be a string"
        ))),
        None => Err(ToolError::invalid_argument(format!(
            "missing required argument `{source}`"
        ))),
    }
}

fn build_body(rule: &BodyRule, args: &ArgumentBag) -> Result<Value, ToolError> {
    match rule {
        BodyRule::ArgArray { source } => match args.get(*source) {
            Some(v @ Value::Array(_)) => Ok(v.clone()),
            Some(Value::Null) | None => Ok(Value::Array(Vec::new())),
            Some(_) => Err(ToolError::invalid_argument(format!(
                "argument `{source}` must be an array"
            ))),
        },
        BodyRule::Object(fields) => {
            let mut body = Map::with_capacity(fields.len());
            for field in fields.iter() {
                body.insert(field.upstream.to_string(), field_value(field, args));
            }
            Ok(Value::Object(body))
        }
    }
}

fn field_value(field: &BodyField, args: &ArgumentBag) -> Value {
    match &field.value {
        FieldSource::Arg { source, default } => match args.get(*source) {
            Some(v) if !v.is_null() => v.clone(),
            _ => default.map(|d| d.to_json()).unwrap_or(Value::Null),
        },
        FieldSource::Const(c) => c.to_json(),
    }
}
