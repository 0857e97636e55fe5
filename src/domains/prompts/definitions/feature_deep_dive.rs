//! Single feature deep dive prompt.

use super::{PromptDefinition, required_argument};
use rmcp::model::PromptArgument;

/// Writes the copy set for one product feature.
pub struct FeatureDeepDivePrompt;

impl PromptDefinition for FeatureDeepDivePrompt {
    const NAME: &'static str = "Single Feature Deep Dive";
    const DESCRIPTION: &'static str =
        "Helps bridge between internal language and outward-facing microcopy and UX writing";

    fn template() -> &'static str {
        "Take {{smartMapFeature}} feature from SmartMap and write:
A concise feature description
A tooltip explanation for in-app use
A user-facing onboarding explanation
A consultant-side explanation (internal)
All in Livingston's tone of voice"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![required_argument(
            "smartMapFeature",
            "Which Smartmap feature should I focus on?",
        )]
    }
}
