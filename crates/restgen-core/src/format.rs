//! Identifier casing, documentation wrapping and display-type mapping.
//!
//! Pure functions with no shared state. Everything here operates on the
//! source naming of the API description (which mixes camelCase and
//! snake_case) and produces target-language identifiers and doc text.

use crate::api::TypeName;

/// Convert a string to snake_case
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            // Word boundary only after a lowercase run; keeps acronyms intact
            if i > 0 && prev_is_lowercase {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase();
        } else if ch == '-' || ch == '_' || ch == ' ' || ch == '.' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            prev_is_lowercase = false;
        }
    }

    result.trim_matches('_').to_string()
}

/// Convert a string to UpperCamelCase (PascalCase)
pub fn to_upper_camel_case(s: &str) -> String {
    // Normalize through snake_case first so mixed inputs behave uniformly
    to_snake_case(s)
        .split('_')
        .filter(|seg| !seg.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

/// Convert a string to lowerCamelCase
pub fn to_lower_camel_case(s: &str) -> String {
    let upper_camel = to_upper_camel_case(s);
    let mut chars = upper_camel.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Greedy word-wrap to `width` columns.
///
/// Explicit line breaks in the input are kept as hard breaks. A single token
/// longer than `width` is emitted on its own line, never split. Rejoining the
/// returned lines with single spaces reproduces the input with normalized
/// whitespace.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for hard_line in text.split('\n') {
        let mut current = String::new();
        for word in hard_line.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if current.len() + 1 + word.len() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Wrap `text` and join the resulting lines with `continuation`, for
/// multi-line doc contexts.
pub fn wrap_join(text: &str, width: usize, continuation: &str) -> String {
    wrap(text, width).join(continuation)
}

/// Display type of a parameter: a closed tagged set replacing string-keyed
/// type dispatch. Enum parameters carry their literal value set and override
/// the fixed mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayType {
    Text,
    Number,
    Boolean,
    Structured,
    EnumOf(Vec<String>),
}

impl DisplayType {
    /// Map an abstract parameter type (plus its allowed values) to a display type.
    pub fn new(type_name: TypeName, allowed_values: &[String]) -> Self {
        match type_name {
            TypeName::Enum if !allowed_values.is_empty() => {
                DisplayType::EnumOf(allowed_values.to_vec())
            }
            // An enum without a declared value set degrades to plain text
            TypeName::Enum | TypeName::String => DisplayType::Text,
            TypeName::Integer => DisplayType::Number,
            TypeName::Boolean => DisplayType::Boolean,
            TypeName::Object | TypeName::List => DisplayType::Structured,
        }
    }

    /// Render for JavaScript JSDoc: enum types become a quoted literal union.
    pub fn js(&self) -> String {
        match self {
            DisplayType::Text => "String".to_string(),
            DisplayType::Number => "Number".to_string(),
            DisplayType::Boolean => "Boolean".to_string(),
            DisplayType::Structured => "Object".to_string(),
            DisplayType::EnumOf(values) => values
                .iter()
                .map(|v| format!("\"{}\"", v))
                .collect::<Vec<_>>()
                .join("|"),
        }
    }
}
