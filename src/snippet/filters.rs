//! Filter snippets.
//!
//! Filters rewrite the input field in place through `$util.qr(input.put(...))`
//! and never raise errors. `default` keeps any value the caller sent,
//! including `false`, `0` and `""`. The other filters leave an absent value
//! alone, and the first-character filters also skip the empty string.

use crate::core::context::SnippetContext;
use crate::directive::resolve::{DefaultValue, FieldFilter};
use crate::snippet::literal::{bool_literal, float_literal, int_literal, string_literal};
use crate::snippet::vtl::{block, if_else, iff, put, qref};

/// Render a filter.
pub fn render(ctx: &SnippetContext, filter: &FieldFilter) -> String {
    let field = ctx.field_ref();
    match filter {
        FieldFilter::Default(value) => default(ctx, value),
        FieldFilter::Lowercase => rewrite(
            ctx,
            "Lowercase filter on",
            &field,
            &format!("{}.toLowerCase()", field),
        ),
        FieldFilter::Uppercase => rewrite(
            ctx,
            "Uppercase filter on",
            &field,
            &format!("{}.toUpperCase()", field),
        ),
        // substring(0, 1) throws on ""
        FieldFilter::LowerFirst => rewrite(
            ctx,
            "Lowercase first character filter on",
            &non_empty(&field),
            &format!("{0}.substring(0, 1).toLowerCase().concat({0}.substring(1))", field),
        ),
        FieldFilter::UpperFirst => rewrite(
            ctx,
            "Uppercase first character filter on",
            &non_empty(&field),
            &format!("{0}.substring(0, 1).toUpperCase().concat({0}.substring(1))", field),
        ),
        FieldFilter::Trim => rewrite(ctx, "Trim filter on", &field, &format!("{}.trim()", field)),
    }
}

/// Keep a present value (re-put as itself), otherwise put the default.
///
/// Presence is tested with `$util.isNull`, not truthiness, so an explicit
/// `false` or `0` survives.
fn default(ctx: &SnippetContext, value: &DefaultValue) -> String {
    let field = ctx.field_ref();
    let literal = match value {
        DefaultValue::String(s) => string_literal(s),
        DefaultValue::Int(v) => int_literal(*v),
        DefaultValue::Float(v) => float_literal(*v),
        DefaultValue::Boolean(b) => bool_literal(*b),
    };

    block(
        &format!("Default filter on \"{}\"", ctx.field_name),
        &if_else(
            &format!("!$util.isNull({})", field),
            &qref(&put(ctx.input(), &ctx.field_name, &field)),
            &qref(&put(ctx.input(), &ctx.field_name, &literal)),
        ),
    )
}

fn rewrite(ctx: &SnippetContext, name: &str, guard: &str, expression: &str) -> String {
    block(
        &format!("{} \"{}\"", name, ctx.field_name),
        &iff(guard, &qref(&put(ctx.input(), &ctx.field_name, expression))),
    )
}

fn non_empty(field: &str) -> String {
    format!("!$util.isNullOrEmpty({})", field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snippet::literal::read_string_literal;

    fn ctx() -> SnippetContext {
        SnippetContext::new("title")
    }

    #[test]
    fn test_default_string() {
        let text = render(&ctx(), &FieldFilter::Default(DefaultValue::String("none".into())));
        assert_eq!(
            text,
            "## [Start] Default filter on \"title\". **\n\
             #if( !$util.isNull($ctx.args.input.title) )\n  \
             $util.qr($ctx.args.input.put(\"title\", $ctx.args.input.title))\n\
             #else\n  \
             $util.qr($ctx.args.input.put(\"title\", \"none\"))\n\
             #end\n\
             ## [End] Default filter on \"title\". **"
        );
    }

    #[test]
    fn test_default_typed_values() {
        let count = SnippetContext::new("count");
        assert!(render(&count, &FieldFilter::Default(DefaultValue::Int(0)))
            .contains("$ctx.args.input.put(\"count\", 0)"));

        let ratio = SnippetContext::new("ratio");
        assert!(render(&ratio, &FieldFilter::Default(DefaultValue::Float(1.0)))
            .contains("$ctx.args.input.put(\"ratio\", 1.0)"));

        let flag = SnippetContext::new("published");
        assert!(render(&flag, &FieldFilter::Default(DefaultValue::Boolean(false)))
            .contains("$ctx.args.input.put(\"published\", false)"));
    }

    #[test]
    fn test_default_keeps_explicit_false_and_zero() {
        let flag = SnippetContext::new("published");
        let text = render(&flag, &FieldFilter::Default(DefaultValue::Boolean(true)));
        assert!(text.contains("#if( !$util.isNull($ctx.args.input.published) )"));
        assert!(!text.contains("#if( $ctx.args.input.published )"));

        let count = SnippetContext::new("count");
        let text = render(&count, &FieldFilter::Default(DefaultValue::Int(10)));
        assert!(text.contains("#if( !$util.isNull($ctx.args.input.count) )"));
        assert!(text.contains("$ctx.args.input.put(\"count\", 10)"));
        assert!(!text.contains("#if( $ctx.args.input.count )"));
    }

    #[test]
    fn test_default_string_reads_back() {
        let value = "O'Brien said \"$1\"";
        let text = render(&ctx(), &FieldFilter::Default(DefaultValue::String(value.into())));
        let line = text
            .lines()
            .skip_while(|l| !l.starts_with("#else"))
            .nth(1)
            .unwrap()
            .trim();
        let literal = &line["$util.qr($ctx.args.input.put(\"title\", ".len()..line.len() - "))".len()];
        assert_eq!(read_string_literal(literal).as_deref(), Some(value));
    }

    #[test]
    fn test_case_filters() {
        let text = render(&ctx(), &FieldFilter::Lowercase);
        assert!(text.contains("#if( $ctx.args.input.title )"));
        assert!(text.contains("$util.qr($ctx.args.input.put(\"title\", $ctx.args.input.title.toLowerCase()))"));

        let text = render(&ctx(), &FieldFilter::Uppercase);
        assert!(text.contains("$ctx.args.input.title.toUpperCase()"));
    }

    #[test]
    fn test_first_character_filters() {
        let text = render(&ctx(), &FieldFilter::LowerFirst);
        assert!(text.contains(
            "$ctx.args.input.title.substring(0, 1).toLowerCase().concat($ctx.args.input.title.substring(1))"
        ));

        let text = render(&ctx(), &FieldFilter::UpperFirst);
        assert!(text.contains(".substring(0, 1).toUpperCase()"));
    }

    #[test]
    fn test_first_character_filters_skip_empty_strings() {
        for filter in [FieldFilter::LowerFirst, FieldFilter::UpperFirst] {
            let text = render(&ctx(), &filter);
            assert!(text.contains("#if( !$util.isNullOrEmpty($ctx.args.input.title) )"));
            assert!(!text.contains("#if( $ctx.args.input.title )"));
        }
    }

    #[test]
    fn test_trim() {
        let text = render(&ctx(), &FieldFilter::Trim);
        assert!(text.contains("$ctx.args.input.put(\"title\", $ctx.args.input.title.trim())"));
    }

    #[test]
    fn test_filters_never_raise() {
        let filters = [
            FieldFilter::Default(DefaultValue::String("x".into())),
            FieldFilter::Lowercase,
            FieldFilter::Uppercase,
            FieldFilter::LowerFirst,
            FieldFilter::UpperFirst,
            FieldFilter::Trim,
        ];
        for filter in &filters {
            assert!(!render(&ctx(), filter).contains("$util.error"));
        }
    }
}
