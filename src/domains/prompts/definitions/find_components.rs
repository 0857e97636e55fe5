//! Design system component discovery prompt.

use super::{PromptDefinition, required_argument};
use rmcp::model::PromptArgument;

/// Documents components from a design system into a file.
pub struct FindComponentsPrompt;

impl PromptDefinition for FindComponentsPrompt {
    const NAME: &'static str = "find-components";
    const DESCRIPTION: &'static str = "Find design system components and write to a file";

    fn template() -> &'static str {
        "Please find and document 5 design system components from the following design system: \
\n\n{{designSystem}}. Once you have found documented them,  please save these descriptions \
inside a folder called \"resources\". the saved file should be called '{{designSystem}}.txt'"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![required_argument(
            "designSystem",
            "Where should i look for components",
        )]
    }
}
