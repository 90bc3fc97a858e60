//! Diff generation for audit logging
//!
//! Generates human-readable diffs between before and after record images.

use serde_json::Value;

use crate::models::Money;

const MAX_STRING_CHARS: usize = 50;

/// Record fields stored as minor units, shown as amounts in diffs
const MONEY_FIELDS: &[&str] = &["totalRevenue", "dailyRevenue", "balance"];

/// Generate a human-readable diff between two JSON values
///
/// Only top-level field changes are listed. Returns `None` when nothing
/// changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if before_val != after_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_field(key, before_val),
                        format_field(key, after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_field(key, before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!(
                        "{}: (added) -> {}",
                        key,
                        format_field(key, after_val)
                    ));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

fn format_field(key: &str, value: &Value) -> String {
    match value.as_i64() {
        Some(minor) if MONEY_FIELDS.contains(&key) => Money::from_minor(minor).format_grouped(),
        _ => format_value(value),
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            // Names are often Cyrillic; cut on char boundaries
            if s.chars().count() > MAX_STRING_CHARS {
                let head: String = s.chars().take(MAX_STRING_CHARS - 3).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}
