/// Response contract for movie analyses
///
/// The same document is sent to the provider as `responseSchema` and used to
/// validate whatever comes back, so field names and required-ness live in
/// exactly one place. Types use the provider's OpenAPI subset (`OBJECT`,
/// `ARRAY`, `STRING`).
use serde_json::{json, Value};
use std::fmt::Display;

/// Bumped whenever a field is added, removed or changes required-ness
pub const SCHEMA_VERSION: u32 = 1;

/// Returns the JSON schema for movie analysis responses
pub fn analysis_schema() -> Value {
    let string = json!({ "type": "STRING" });
    let string_list = json!({ "type": "ARRAY", "items": { "type": "STRING" } });

    json!({
        "type": "OBJECT",
        "properties": {
            "overview": {
                "type": "OBJECT",
                "properties": {
                    "title": string,
                    "industry": string,
                    "genre": string,
                    "runtime": string,
                    "availableOn": string
                },
                "required": ["title", "industry", "genre", "runtime", "availableOn"]
            },
            "ratings": {
                "type": "OBJECT",
                "properties": {
                    "overall": string,
                    "audience": string,
                    "critic": string
                },
                "required": ["overall", "audience", "critic"]
            },
            "review": {
                "type": "OBJECT",
                "properties": {
                    "summary": string,
                    "strengths": string_list,
                    "weaknesses": string_list,
                    "whoWatch": string,
                    "whoSkip": string
                },
                "required": ["summary", "strengths", "weaknesses", "whoWatch", "whoSkip"]
            },
            "sentiment": {
                "type": "OBJECT",
                "properties": {
                    "positiveThemes": string_list,
                    "complaints": string_list,
                    "mood": string
                },
                "required": ["positiveThemes", "complaints", "mood"]
            },
            "verdict": {
                "type": "OBJECT",
                "properties": {
                    "worth": string,
                    "bestFor": string
                },
                "required": ["worth", "bestFor"]
            },
            "recommendations": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": string,
                        "reason": string
                    }
                }
            }
        },
        "required": ["overview", "ratings", "review", "sentiment", "verdict"]
    })
}

/// First place where a value disagrees with the schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub path: String,
    pub reason: String,
}

impl Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.reason)
        } else {
            write!(f, "`{}` {}", self.path, self.reason)
        }
    }
}

/// Checks `value` against `schema`, stopping at the first violation.
///
/// Only the keywords `analysis_schema` uses are understood. Properties not
/// listed in the schema are ignored.
pub fn validate(value: &Value, schema: &Value) -> Result<(), SchemaViolation> {
    validate_at(value, schema, "")
}

fn child_path(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{}.{}", parent, child)
    }
}

fn violation(path: &str, reason: impl Into<String>) -> SchemaViolation {
    SchemaViolation {
        path: path.to_string(),
        reason: reason.into(),
    }
}

fn validate_at(value: &Value, schema: &Value, path: &str) -> Result<(), SchemaViolation> {
    match schema["type"].as_str() {
        Some("OBJECT") => {
            let object = value
                .as_object()
                .ok_or_else(|| violation(path, "must be an object"))?;

            if let Some(required) = schema["required"].as_array() {
                for field in required.iter().filter_map(Value::as_str) {
                    if object.get(field).map_or(true, Value::is_null) {
                        return Err(violation(
                            &child_path(path, field),
                            "is a required field but is missing",
                        ));
                    }
                }
            }

            if let Some(properties) = schema["properties"].as_object() {
                for (name, property_schema) in properties {
                    match object.get(name) {
                        Some(Value::Null) | None => continue,
                        Some(field) => {
                            validate_at(field, property_schema, &child_path(path, name))?
                        }
                    }
                }
            }

            Ok(())
        }
        Some("ARRAY") => {
            let items = value
                .as_array()
                .ok_or_else(|| violation(path, "must be an array"))?;
            for (index, item) in items.iter().enumerate() {
                validate_at(item, &schema["items"], &format!("{}[{}]", path, index))?;
            }
            Ok(())
        }
        Some("STRING") => {
            if value.is_string() {
                Ok(())
            } else {
                Err(violation(path, "must be a string"))
            }
        }
        other => Err(violation(
            path,
            format!("has an unsupported schema type {:?}", other),
        )),
    }
}
