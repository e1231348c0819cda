//! Normalizing stored skill lists before matching

use serde_json::Value;

/// Flatten arbitrarily nested JSON arrays of strings into trimmed,
/// lowercased, non-empty strings in depth-first order. Numbers, booleans,
/// nulls and objects are skipped.
pub fn flatten_skills(value: &Value) -> Vec<String> {
    let mut flat = Vec::new();
    let mut stack = vec![value];

    while let Some(item) = stack.pop() {
        match item {
            Value::String(s) => {
                let clean = s.trim().to_lowercase();
                if !clean.is_empty() {
                    flat.push(clean);
                }
            }
            // Reversed so the first element is popped first
            Value::Array(items) => stack.extend(items.iter().rev()),
            _ => {}
        }
    }

    flat
}
