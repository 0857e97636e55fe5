//! Prompt service implementation.
//!
//! The PromptService holds the static prompt templates and renders them with
//! client-supplied arguments. Prompts perform no I/O.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::{debug, info};

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;

/// Service for listing and instantiating prompts.
pub struct PromptService {
    /// Prompt templates in registration order.
    prompts: Vec<PromptTemplate>,

    /// Key: prompt name, Value: position in `prompts`.
    index: HashMap<String, usize>,
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptService {
    /// Create a PromptService holding every registered prompt.
    pub fn new() -> Self {
        info!("Initializing PromptService");
        Self::with_prompts(get_all_prompts())
    }

    /// Create a PromptService from an explicit template list.
    ///
    /// A later template with an already registered name replaces the earlier
    /// one in place.
    pub fn with_prompts(templates: Vec<PromptTemplate>) -> Self {
        let mut service = Self {
            prompts: Vec::new(),
            index: HashMap::new(),
        };
        for template in templates {
            service.register_prompt(template);
        }
        service
    }

    /// Register a prompt template.
    pub fn register_prompt(&mut self, template: PromptTemplate) {
        info!("Registering prompt: {}", template.name);
        match self.index.get(&template.name) {
            Some(&position) => self.prompts[position] = template,
            None => {
                self.index.insert(template.name.clone(), self.prompts.len());
                self.prompts.push(template);
            }
        }
    }

    /// Number of registered prompts.
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Whether no prompt is registered.
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// List all available prompts.
    pub fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .iter()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: (!template.arguments.is_empty()).then(|| template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt with arguments substituted.
    pub fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .index
            .get(name)
            .map(|&position| &self.prompts[position])
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();

        for arg in &template.arguments {
            if arg.required.unwrap_or(false) && !arguments.contains_key(&arg.name) {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        debug!("Rendering prompt: {}", name);
        let content = template.render(&arguments)?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::PromptMessageContent;

    fn text_of(result: &GetPromptResult) -> &str {
        match &result.messages[0].content {
            PromptMessageContent::Text { text } => text,
            _ => panic!("Expected text message"),
        }
    }

    #[test]
    fn test_list_prompts_in_order() {
        let service = PromptService::new();
        let names: Vec<_> = service.list_prompts().into_iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "Persona-to-Feature Mapping",
                "Outcome-Based Positioning Framework",
                "Feature Recommendations",
                "Single Feature Deep Dive",
                "find-components",
                "git-release-notes",
                "clever claude",
            ]
        );
    }

    #[test]
    fn test_argument_free_prompts_list_no_arguments() {
        let service = PromptService::new();
        let prompts = service.list_prompts();
        assert!(prompts[0].arguments.is_none());
        assert_eq!(prompts[3].arguments.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_get_prompt_with_arguments() {
        let service = PromptService::new();

        let mut args = HashMap::new();
        args.insert("smartMapFeature".to_string(), "Heatmaps".to_string());

        let result = service
            .get_prompt("Single Feature Deep Dive", Some(args))
            .unwrap();
        assert!(text_of(&result).starts_with("Take Heatmaps feature from SmartMap"));
        assert!(matches!(result.messages[0].role, PromptMessageRole::User));
    }

    #[test]
    fn test_find_components_uses_argument_twice() {
        let service = PromptService::new();

        let mut args = HashMap::new();
        args.insert("designSystem".to_string(), "cloudscape".to_string());

        let result = service.get_prompt("find-components", Some(args)).unwrap();
        assert!(text_of(&result).contains("\n\ncloudscape."));
        assert!(text_of(&result).ends_with("'cloudscape.txt'"));
    }

    #[test]
    fn test_get_prompt_missing_required_argument() {
        let service = PromptService::new();

        let result = service.get_prompt("Single Feature Deep Dive", None);
        assert!(matches!(
            result,
            Err(PromptError::MissingArgument(arg)) if arg == "smartMapFeature"
        ));
    }

    #[test]
    fn test_static_prompt_renders_verbatim() {
        let service = PromptService::new();

        let result = service.get_prompt("git-release-notes", None).unwrap();
        assert!(text_of(&result).contains("\"date\": \"12 June 2025\""));
    }

    #[test]
    fn test_prompt_name_with_space() {
        let service = PromptService::new();

        let result = service.get_prompt("clever claude", None).unwrap();
        assert!(text_of(&result).starts_with("From now on, do not simply affirm"));
    }

    #[test]
    fn test_get_nonexistent_prompt() {
        let service = PromptService::new();
        let result = service.get_prompt("nonexistent", None);
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }

    #[test]
    fn test_register_prompt_replaces_same_name() {
        let mut service = PromptService::with_prompts(vec![PromptTemplate::new(
            "p",
            None,
            vec![],
            "one",
        )]);
        service.register_prompt(PromptTemplate::new("p", None, vec![], "two"));

        assert_eq!(service.len(), 1);
        let result = service.get_prompt("p", None).unwrap();
        assert_eq!(text_of(&result), "two");
    }
}
