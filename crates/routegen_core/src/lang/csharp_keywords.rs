//! C# keyword vocabulary (for validating generated identifiers).

/// Reserved keywords in C#. Contextual keywords (`async`, `var`, ...) are legal identifiers and are not listed.
pub const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked", "class", "const",
    "continue", "decimal", "default", "delegate", "do", "double", "else", "enum", "event", "explicit", "extern",
    "false", "finally", "fixed", "float", "for", "foreach", "goto", "if", "implicit", "in", "int", "interface",
    "internal", "is", "lock", "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short", "sizeof",
    "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true", "try", "typeof", "uint", "ulong",
    "unchecked", "unsafe", "ushort", "using", "virtual", "void", "volatile", "while",
];

/// Check whether an identifier is a reserved C# keyword.
pub fn is_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Check whether `name` is usable as a plain C# identifier: ASCII letter or `_` first, then letters, digits or `_`,
/// and not a reserved keyword.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_') && !is_keyword(name)
}

/// Check whether `name` is lexically an identifier: a Unicode letter or `_` first, then letters, digits or `_`.
///
/// Keywords pass. Use this for names that are always emitted behind a prefix.
pub fn is_identifier_shape(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_') && chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_not_identifiers() {
        assert!(!is_identifier("class"));
        assert!(!is_identifier("string"));
    }

    #[test]
    fn test_contextual_keywords_are_identifiers() {
        assert!(is_identifier("async"));
        assert!(is_identifier("var"));
    }

    #[test]
    fn test_identifier_shape() {
        assert!(is_identifier("GetUser"));
        assert!(is_identifier("_id2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("user-id"));
    }

    #[test]
    fn test_identifier_shape_allows_keywords_and_unicode() {
        assert!(is_identifier_shape("event"));
        assert!(is_identifier_shape("größe"));
        assert!(is_identifier_shape("arg_params"));
        assert!(!is_identifier_shape(""));
        assert!(!is_identifier_shape("page-size"));
        assert!(!is_identifier_shape("9lives"));
    }
}
