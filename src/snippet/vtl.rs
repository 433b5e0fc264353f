//! Minimal VTL printer.
//!
//! Just enough structure to emit the conditional blocks the generators need,
//! with consistent indentation and comment framing.

use crate::snippet::literal::string_literal;

const INDENT: &str = "  ";

/// Frame a statement with `## [Start] ... **` / `## [End] ... **` comments.
pub fn block(title: &str, body: &str) -> String {
    format!("## [Start] {}. **\n{}\n## [End] {}. **", title, body, title)
}

/// `#if( predicate ) body #end`
pub fn iff(predicate: &str, body: &str) -> String {
    format!("#if( {} )\n{}\n#end", predicate, indent(body))
}

/// `#if( predicate ) then #else otherwise #end`
pub fn if_else(predicate: &str, then: &str, otherwise: &str) -> String {
    format!(
        "#if( {} )\n{}\n#else\n{}\n#end",
        predicate,
        indent(then),
        indent(otherwise)
    )
}

/// `#set( $var = value )`
pub fn set(var: &str, value: &str) -> String {
    format!("#set( {} = {} )", var, value)
}

/// Quiet reference: evaluate an expression without printing its result.
pub fn qref(expression: &str) -> String {
    format!("$util.qr({})", expression)
}

/// `$util.error("message", "ErrorType")`
pub fn util_error(message: &str, error_type: &str) -> String {
    format!(
        "$util.error({}, {})",
        string_literal(message),
        string_literal(error_type)
    )
}

/// `$input.put("field", value)`
pub fn put(input: &str, field_name: &str, value: &str) -> String {
    format!("{}.put({}, {})", input, string_literal(field_name), value)
}

// Bodies are single statements; literals inside them may span lines and
// must not be re-indented.
fn indent(body: &str) -> String {
    format!("{}{}", INDENT, body)
}
