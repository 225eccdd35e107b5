//! C# literal helpers shared by the generator.

/// Render `value` as a regular (non-verbatim) C# string literal, quotes included.
///
/// ## Examples
/// ```rust
/// use routegen_core::strings::csharp_string_literal;
///
/// assert_eq!(csharp_string_literal("/users/{id}"), "\"/users/{id}\"");
/// assert_eq!(csharp_string_literal("a\"b"), "\"a\\\"b\"");
/// ```
pub fn csharp_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_route_is_unchanged() {
        assert_eq!(csharp_string_literal("/api/items"), "\"/api/items\"");
    }

    #[test]
    fn test_backslash_and_newline_are_escaped() {
        assert_eq!(csharp_string_literal("a\\b\nc"), "\"a\\\\b\\nc\"");
    }

    #[test]
    fn test_control_characters_use_unicode_escape() {
        assert_eq!(csharp_string_literal("\u{1}"), "\"\\u0001\"");
    }
}
