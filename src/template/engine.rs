// ABOUTME: Template engine implementation for [[ name ]] placeholder substitution
// ABOUTME: Scans templates for variable tokens and substitutes resolved context values

use indexmap::{IndexMap, IndexSet};
use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::LazyLock;
use tracing::{debug, trace};

use super::context::{display_value, TemplateContext};
use super::error::{Result, TemplateError};

// Placeholder grammar: [[ name ]] with zero or one space on each side.
// Two spaces, missing brackets, or names outside [0-9a-zA-Z_.] never match
// and stay literal in the output.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[\s?([0-9a-zA-Z_.]+)\s?\]\]").expect("placeholder pattern is valid")
});

/// Stateless engine rendering `[[ name ]]` placeholders against a context.
///
/// Rendering is a pure, single-pass transformation: every occurrence of the
/// same token substitutes the same value, missing values substitute the empty
/// string, and substituted text is never re-scanned for placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateEngine;

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        Self
    }

    /// Render a template string with the given context
    pub fn render(&self, template: &str, context: &TemplateContext) -> Result<String> {
        let tokens = self.tokens(template);
        if tokens.is_empty() {
            return Ok(template.to_string());
        }
        trace!("discovered {} unique tokens", tokens.len());

        let mut resolved: IndexMap<String, String> = IndexMap::with_capacity(tokens.len());
        for name in tokens {
            let value = match context.resolve(&name) {
                Some(value) => display_value(value),
                None => {
                    debug!("no value for placeholder '{}', substituting empty string", name);
                    String::new()
                }
            };
            resolved.insert(name, value);
        }

        let rendered = PLACEHOLDER.replace_all(template, |caps: &Captures| {
            resolved.get(&caps[1]).cloned().unwrap_or_default()
        });
        Ok(rendered.into_owned())
    }

    /// Render a template string with a JSON object context.
    ///
    /// Anything other than an object is outside the input domain and is
    /// reported immediately, with no partial rendering.
    pub fn render_with_json(&self, template: &str, context: &Value) -> Result<String> {
        match context {
            Value::Object(_) => {
                let context = TemplateContext::from_value(context.clone())?;
                self.render(template, &context)
            }
            other => Err(TemplateError::InvalidContext {
                found: super::context::value_kind(other),
            }),
        }
    }

    /// Extract the unique variable names from a template, in first-seen order
    pub fn tokens(&self, template: &str) -> Vec<String> {
        let mut seen: IndexSet<String> = IndexSet::new();
        for caps in PLACEHOLDER.captures_iter(template) {
            seen.insert(caps[1].to_string());
        }
        seen.into_iter().collect()
    }

    /// Check if a string contains at least one well-formed placeholder
    pub fn has_placeholders(&self, text: &str) -> bool {
        PLACEHOLDER.is_match(text)
    }
}
