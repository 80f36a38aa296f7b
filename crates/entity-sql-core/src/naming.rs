// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Identifier conversion shared by descriptors and generators.
//!
//! Table and column names are derived from Rust identifiers with a single
//! rule: an underscore is inserted between a lowercase letter and the
//! uppercase letter that follows it, then the whole name is lowercased.
//!
//! | Input | Output |
//! |-------|--------|
//! | `SimpleEntity` | `simple_entity` |
//! | `ComplexEntityName` | `complex_entity_name` |
//! | `userName` | `user_name` |
//! | `id1` | `id1` |
//! | `HTTPServer` | `httpserver` |
//!
//! Runs of capitals are not split, and digits never introduce a boundary.

/// Convert a mixed-case identifier to its snake_case table/column form.
///
/// # Example
///
/// ```rust
/// use entity_sql_core::naming::camel_to_snake;
///
/// assert_eq!(camel_to_snake("UserAccount"), "user_account");
/// assert_eq!(camel_to_snake("createdAt"), "created_at");
/// ```
#[must_use]
pub fn camel_to_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;

    for ch in name.chars() {
        if ch.is_ascii_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = ch.is_ascii_lowercase();
        out.extend(ch.to_lowercase());
    }

    out
}

/// Pick an explicit name override if it is non-empty, otherwise derive one.
pub(crate) fn resolve_override(explicit: Option<&str>, fallback: &str) -> String {
    match explicit {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => camel_to_snake(fallback)
    }
}
