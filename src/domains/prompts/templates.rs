//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct and its renderer.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts, in declaration order.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
    /// Uses a simple {{variable}} syntax for substitution.
    pub template: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Render the template with the given arguments.
    ///
    /// Every `{{variable}}` is replaced with the value of `variable`, or with
    /// nothing when the argument is absent. Substituted values are inserted
    /// verbatim and never expanded again.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut result = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let end = after_open
                .find("}}")
                .ok_or_else(|| PromptError::template(format!("Unclosed placeholder in '{}'", self.name)))?;

            let key = after_open[..end].trim();
            if let Some(value) = arguments.get(key) {
                result.push_str(value);
            }
            rest = &after_open[end + 2..];
        }

        result.push_str(rest);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_substitution() {
        let template = PromptTemplate::new("test", None, vec![], "Hello, {{name}}!");

        let mut args = HashMap::new();
        args.insert("name".to_string(), "World".to_string());

        let result = template.render(&args).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_repeated_placeholder() {
        let template = PromptTemplate::new("test", None, vec![], "{{x}} and '{{x}}.txt'");

        let mut args = HashMap::new();
        args.insert("x".to_string(), "cloudscape".to_string());

        let result = template.render(&args).unwrap();
        assert_eq!(result, "cloudscape and 'cloudscape.txt'");
    }

    #[test]
    fn test_missing_argument_renders_empty() {
        let template = PromptTemplate::new("test", None, vec![], "Hello{{name}}!");
        let result = template.render(&HashMap::new()).unwrap();
        assert_eq!(result, "Hello!");
    }

    #[test]
    fn test_values_are_not_expanded() {
        let template = PromptTemplate::new("test", None, vec![], "{{a}}");

        let mut args = HashMap::new();
        args.insert("a".to_string(), "{{b}}".to_string());
        args.insert("b".to_string(), "nope".to_string());

        let result = template.render(&args).unwrap();
        assert_eq!(result, "{{b}}");
    }

    #[test]
    fn test_single_braces_are_kept() {
        let template = PromptTemplate::new("test", None, vec![], "\"notes\": [ { \"date\": 1 } ]");
        let result = template.render(&HashMap::new()).unwrap();
        assert_eq!(result, "\"notes\": [ { \"date\": 1 } ]");
    }

    #[test]
    fn test_unclosed_placeholder_is_an_error() {
        let template = PromptTemplate::new("test", None, vec![], "Hello {{name");
        let result = template.render(&HashMap::new());
        assert!(matches!(result, Err(PromptError::TemplateError(_))));
    }
}
