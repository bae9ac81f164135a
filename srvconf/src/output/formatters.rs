//! Response formatter implementations.

use serde_json::{json, Map, Value};

use super::{ResponseBody, ResponseFormatter};

/// Formatter for field-named JSON bodies.
pub struct StructuredFormatter;

impl StructuredFormatter {
    fn to_value(body: &ResponseBody) -> Value {
        match body {
            ResponseBody::BaseUrl(base_url) => json!({ "baseUrl": base_url.as_str() }),
            ResponseBody::Port(port) => json!({ "port": port.value() }),
            ResponseBody::Settings(settings) => {
                let mut map = Map::new();
                if let Some(base_url) = &settings.base_url {
                    map.insert("baseUrl".into(), Value::from(base_url.as_str()));
                }
                map.insert("port".into(), Value::from(settings.port.value()));
                Value::Object(map)
            }
            ResponseBody::Message(message) => json!({ "message": message }),
            ResponseBody::Failure { message, errors } => {
                let mut map = Map::new();
                map.insert("message".into(), Value::from(message.as_str()));
                if !errors.is_empty() {
                    let errors = errors
                        .iter()
                        .map(|e| json!({ "field": e.field, "message": e.message }))
                        .collect();
                    map.insert("errors".into(), Value::Array(errors));
                }
                Value::Object(map)
            }
        }
    }
}

impl ResponseFormatter for StructuredFormatter {
    fn format(&self, body: &ResponseBody) -> String {
        format!("{:#}", Self::to_value(body))
    }
}

/// Formatter for bare text bodies.
pub struct PlainFormatter;

impl ResponseFormatter for PlainFormatter {
    fn format(&self, body: &ResponseBody) -> String {
        match body {
            ResponseBody::BaseUrl(base_url) => base_url.to_string(),
            ResponseBody::Port(port) => port.to_string(),
            ResponseBody::Settings(settings) => {
                let mut lines = Vec::with_capacity(2);
                if let Some(base_url) = &settings.base_url {
                    lines.push(format!("baseUrl: {base_url}"));
                }
                lines.push(format!("port: {}", settings.port));
                lines.join("\n")
            }
            ResponseBody::Message(message) | ResponseBody::Failure { message, .. } => {
                message.clone()
            }
        }
    }
}
