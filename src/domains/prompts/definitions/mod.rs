//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with its metadata, arguments and
//! template string, and registered in `registry.rs`.

use rmcp::model::PromptArgument;

mod feature_deep_dive;
mod feature_recommendations;
mod find_components;
mod outcome_positioning;
mod persona_mapping;
mod release_notes;
mod sparring_partner;

pub use feature_deep_dive::FeatureDeepDivePrompt;
pub use feature_recommendations::FeatureRecommendationsPrompt;
pub use find_components::FindComponentsPrompt;
pub use outcome_positioning::OutcomePositioningPrompt;
pub use persona_mapping::PersonaMappingPrompt;
pub use release_notes::ReleaseNotesPrompt;
pub use sparring_partner::SparringPartnerPrompt;

/// Trait for prompt definitions.
///
/// Each prompt must implement this trait to provide its metadata and template.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The template string with {{variable}} placeholders.
    fn template() -> &'static str;

    /// The arguments this prompt accepts. Most prompts take none.
    fn arguments() -> Vec<PromptArgument> {
        Vec::new()
    }
}

/// A required argument.
pub(crate) fn required_argument(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(true),
    }
}
