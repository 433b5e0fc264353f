//! Validation snippets.
//!
//! Every check renders a single conditional that raises
//! `$util.error(<message>, <error type>)` when the input value fails, and
//! never touches the input.

use crate::core::context::SnippetContext;
use crate::directive::resolve::MembershipList;
use crate::snippet::literal::{float_literal, int_literal, list_literal, string_literal};
use crate::snippet::vtl::{block, iff, set, util_error};

/// Built-in email pattern.
pub const EMAIL_PATTERN: &str =
    r"^[_A-Za-z0-9-\+]+(\.[_A-Za-z0-9-]+)*@[A-Za-z0-9-]+(\.[A-Za-z0-9]+)*(\.[A-Za-z]{2,})$";

/// Built-in URL pattern (http, https, ftp and file schemes).
pub const URL_PATTERN: &str =
    r"^(https?|ftp|file)://[-a-zA-Z0-9+&@#/%?=~_|!:,.;]*[-a-zA-Z0-9+&@#/%=~_|]";

/// Reject falsy values (absent, empty, zero, false).
pub fn required(ctx: &SnippetContext) -> String {
    let message = format!("{} attribute is required", ctx.field_name);
    block(
        &title("Required check on", ctx),
        &iff(&format!("!{}", ctx.field_ref()), &util_error(&message, ctx.error_type())),
    )
}

/// Reject values that are not numbers.
pub fn number(ctx: &SnippetContext) -> String {
    type_check(ctx, "Number check on", "isNumber", "number")
}

/// Reject values that are not strings.
pub fn string(ctx: &SnippetContext) -> String {
    type_check(ctx, "String check on", "isString", "string")
}

/// Reject values that are not booleans.
pub fn boolean(ctx: &SnippetContext) -> String {
    type_check(ctx, "Boolean check on", "isBoolean", "boolean")
}

/// Reject values that do not match a caller-supplied expression.
pub fn regex(ctx: &SnippetContext, expression: &str) -> String {
    let message = format!("{} attribute must match pattern", ctx.field_name);
    pattern_check(ctx, "Pattern check on", expression, &message)
}

/// Reject values that do not look like an email address.
pub fn email(ctx: &SnippetContext) -> String {
    let message = format!("{} attribute must be valid email", ctx.field_name);
    pattern_check(ctx, "Email check on", EMAIL_PATTERN, &message)
}

/// Reject values that do not look like a URL.
pub fn url(ctx: &SnippetContext) -> String {
    let message = format!("{} attribute must be valid url", ctx.field_name);
    pattern_check(ctx, "URL check on", URL_PATTERN, &message)
}

/// Reject values outside a fixed list.
///
/// Renders two blocks: the list assignment and the check itself.
pub fn membership(ctx: &SnippetContext, list: &MembershipList) -> String {
    let members = match list {
        MembershipList::Strings(items) => list_literal(items.iter().map(|s| string_literal(s))),
        MembershipList::Ints(items) => list_literal(items.iter().map(|v| int_literal(*v))),
        MembershipList::Floats(items) => list_literal(items.iter().map(|v| float_literal(*v))),
    };
    let var = ctx.array_var();

    // Message text is shared with the url check
    let message = format!("{} attribute must be valid url", ctx.field_name);

    let assignment = block(&title("Membership list for", ctx), &set(&var, &members));
    let check = block(
        &title("Membership check on", ctx),
        &iff(
            &format!("!{}.contains({})", var, ctx.field_ref()),
            &util_error(&message, ctx.error_type()),
        ),
    );
    format!("{}\n{}", assignment, check)
}

fn type_check(ctx: &SnippetContext, name: &str, util_fn: &str, type_name: &str) -> String {
    let message = format!("{} attribute must be of type {}", ctx.field_name, type_name);
    block(
        &title(name, ctx),
        &iff(
            &format!("!$util.{}({})", util_fn, ctx.field_ref()),
            &util_error(&message, ctx.error_type()),
        ),
    )
}

fn pattern_check(ctx: &SnippetContext, name: &str, pattern: &str, message: &str) -> String {
    block(
        &title(name, ctx),
        &iff(
            &format!("!$util.matches({}, {})", string_literal(pattern), ctx.field_ref()),
            &util_error(message, ctx.error_type()),
        ),
    )
}

fn title(name: &str, ctx: &SnippetContext) -> String {
    format!("{} \"{}\"", name, ctx.field_name)
}
