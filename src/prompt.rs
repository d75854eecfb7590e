//! Prompt templating for the two backend requests.
//!
//! Template text lives in `templates/` and is rendered with `{{KEY}}`
//! placeholder substitution.

use std::collections::BTreeMap;

use crate::platform::Platform;

const GENERATE_COMMAND_TEMPLATE: &str = include_str!("templates/generate_command.template");
const EXPLAIN_ERROR_TEMPLATE: &str = include_str!("templates/explain_error.template");

/// Prompt asking for a single JSON descriptor for `request`.
pub fn render_generate_prompt(platform: Platform, request: &str) -> String {
    let mut vars = BTreeMap::<&str, String>::new();
    vars.insert("SHELL_FAMILY", platform.label().to_string());
    vars.insert("REQUEST", request.to_string());
    render_template(GENERATE_COMMAND_TEMPLATE, &vars)
}

/// Prompt asking for a meaning/cause/fix explanation of `command`.
///
/// An empty `error_output` asks the model to elaborate on the command itself.
pub fn render_explain_prompt(command: &str, error_output: &str) -> String {
    let mut vars = BTreeMap::<&str, String>::new();
    vars.insert("COMMAND", command.to_string());
    vars.insert("ERROR_OUTPUT", error_output.to_string());
    render_template(EXPLAIN_ERROR_TEMPLATE, &vars)
}

fn render_template(template: &str, vars: &BTreeMap<&str, String>) -> String {
    // Single pass so user text containing `{{...}}` is never re-expanded.
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        rendered.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) if vars.contains_key(&after[..end]) => {
                rendered.push_str(&vars[&after[..end]]);
                rest = &after[end + 2..];
            }
            _ => {
                rendered.push_str("{{");
                rest = after;
            }
        }
    }
    rendered.push_str(rest);
    rendered.trim_end().to_string()
}
