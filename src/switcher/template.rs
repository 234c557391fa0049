//! Argument-template rendering for the switch command.
//!
//! A small substitution language whose context exposes exactly one field,
//! the switch target.

use thiserror::Error;

/// The only placeholder templates may reference.
const TARGET_PLACEHOLDER: &str = "target";

#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("unknown placeholder '{{{0}}}'")]
    UnknownPlaceholder(String),

    #[error("unbalanced brace")]
    UnbalancedBrace,
}

/// Render a single argument template.
///
/// `{target}` expands to the target address. `{{` and `}}` produce literal
/// braces. Any other placeholder, or a stray brace, is an error.
pub fn render(template: &str, target: &str) -> Result<String, RenderError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => name.push(c),
                        None => return Err(RenderError::UnbalancedBrace),
                    }
                }
                if name == TARGET_PLACEHOLDER {
                    out.push_str(target);
                } else {
                    return Err(RenderError::UnknownPlaceholder(name));
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(RenderError::UnbalancedBrace);
                }
            }
            c => out.push(c),
        }
    }

    Ok(out)
}

/// Render every template against `target`.
///
/// A template that fails to render is logged and skipped; the remaining
/// templates still render. Empty renders are omitted from the result, so an
/// optional argument is a template that expands to nothing.
pub fn render_args(templates: &[String], target: &str) -> Vec<String> {
    let mut args = Vec::with_capacity(templates.len());
    for template in templates {
        match render(template, target) {
            Ok(arg) if arg.is_empty() => {
                tracing::debug!(template = %template, "Argument rendered empty, dropped");
            }
            Ok(arg) => args.push(arg),
            Err(e) => {
                tracing::warn!(template = %template, error = %e, "Skipping unrenderable switch argument");
            }
        }
    }
    args
}
