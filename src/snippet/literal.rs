//! VTL literal encoding.
//!
//! Velocity interpolates `$references` and `#directives` inside double-quoted
//! strings and has no backslash escapes for quotes. Single-quoted strings are
//! never interpolated and take a doubled `''` for a literal quote. Text that
//! is safe inside double quotes is emitted double-quoted; everything else is
//! emitted single-quoted.
//!
//! Numbers are emitted in plain decimal notation: Velocity's number literals
//! have no exponent form, and a Float must keep a fractional part so it does
//! not read back as an Integer.

/// Characters with a meaning inside a double-quoted Velocity string.
const DOUBLE_QUOTE_SPECIALS: &[char] = &['"', '$', '#', '\\'];

/// Encode text as a VTL string literal.
pub fn string_literal(text: &str) -> String {
    if text.contains(DOUBLE_QUOTE_SPECIALS) {
        format!("'{}'", text.replace('\'', "''"))
    } else {
        format!("\"{}\"", text)
    }
}

/// Encode an integer literal.
pub fn int_literal(value: i64) -> String {
    value.to_string()
}

/// Encode a float literal. The value must be finite.
pub fn float_literal(value: f64) -> String {
    debug_assert!(value.is_finite());
    // Display never uses exponent notation for f64
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

/// Encode a boolean literal.
pub fn bool_literal(value: bool) -> String {
    value.to_string()
}

/// Encode a list literal from already encoded members.
pub fn list_literal<I>(members: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let members: Vec<String> = members.into_iter().collect();
    format!("[{}]", members.join(", "))
}

/// Read a VTL string literal back to its value (test helper).
///
/// Only accepts the forms [`string_literal`] produces: a double-quoted string
/// free of interpolation characters, or a single-quoted string with `''`
/// escapes.
#[cfg(test)]
pub(crate) fn read_string_literal(literal: &str) -> Option<String> {
    if let Some(body) = literal.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        if body.contains(DOUBLE_QUOTE_SPECIALS) {
            return None;
        }
        return Some(body.to_string());
    }

    let body = literal.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c == '\'' {
            // A lone quote would have terminated the literal
            if chars.next() != Some('\'') {
                return None;
            }
        }
        value.push(c);
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_text_is_double_quoted() {
        assert_eq!(string_literal("none"), "\"none\"");
        assert_eq!(string_literal("it's"), "\"it's\"");
        assert_eq!(string_literal(""), "\"\"");
    }

    #[test]
    fn test_special_text_is_single_quoted() {
        assert_eq!(string_literal("say \"hi\""), "'say \"hi\"'");
        assert_eq!(string_literal("^[a-z]+$"), "'^[a-z]+$'");
        assert_eq!(string_literal("it's $5"), "'it''s $5'");
        assert_eq!(string_literal(r"\d+"), r"'\d+'");
        assert_eq!(string_literal("#set"), "'#set'");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(int_literal(-42), "-42");
        assert_eq!(float_literal(2.0), "2.0");
        assert_eq!(float_literal(0.25), "0.25");
        assert_eq!(float_literal(-1.5), "-1.5");
        assert_eq!(float_literal(1e21), "1000000000000000000000.0");
        assert_eq!(float_literal(1e-7), "0.0000001");
        assert_eq!(bool_literal(true), "true");
    }

    #[test]
    fn test_list() {
        let members = ["asd", "123"].iter().map(|s| string_literal(s));
        assert_eq!(list_literal(members), "[\"asd\", \"123\"]");
        assert_eq!(list_literal(Vec::new()), "[]");
    }

    #[test]
    fn test_reader_rejects_malformed_literals() {
        assert_eq!(read_string_literal("'a'b'"), None);
        assert_eq!(read_string_literal("\"a$b\""), None);
        assert_eq!(read_string_literal("plain"), None);
        assert_eq!(read_string_literal("'a''b'").as_deref(), Some("a'b"));
    }

    proptest! {
        #[test]
        fn prop_string_literal_reads_back(text in ".*") {
            let literal = string_literal(&text);
            prop_assert_eq!(read_string_literal(&literal), Some(text));
        }

        #[test]
        fn prop_float_literal_reads_back(value in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
            let literal = float_literal(value);
            prop_assert!(!literal.contains('e'));
            prop_assert!(literal.contains('.'));
            prop_assert_eq!(literal.parse::<f64>().unwrap(), value);
        }
    }
}
