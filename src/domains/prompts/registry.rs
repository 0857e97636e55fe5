//! Prompt Registry - central registration of all prompts.
//!
//! The prompt set is static. When adding a new prompt, create the file in
//! `definitions/`, export it in `definitions/mod.rs` and list it here.

use super::definitions::{
    FeatureDeepDivePrompt, FeatureRecommendationsPrompt, FindComponentsPrompt,
    OutcomePositioningPrompt, PersonaMappingPrompt, PromptDefinition, ReleaseNotesPrompt,
    SparringPartnerPrompt,
};
use super::templates::PromptTemplate;

/// Build a PromptTemplate from a PromptDefinition.
fn build_template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplate {
        name: P::NAME.to_string(),
        description: Some(P::DESCRIPTION.to_string()),
        arguments: P::arguments(),
        template: P::template().to_string(),
    }
}

/// Get all registered prompts as PromptTemplates, in listing order.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        build_template::<PersonaMappingPrompt>(),
        build_template::<OutcomePositioningPrompt>(),
        build_template::<FeatureRecommendationsPrompt>(),
        build_template::<FeatureDeepDivePrompt>(),
        build_template::<FindComponentsPrompt>(),
        build_template::<ReleaseNotesPrompt>(),
        build_template::<SparringPartnerPrompt>(),
    ]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![
        PersonaMappingPrompt::NAME,
        OutcomePositioningPrompt::NAME,
        FeatureRecommendationsPrompt::NAME,
        FeatureDeepDivePrompt::NAME,
        FindComponentsPrompt::NAME,
        ReleaseNotesPrompt::NAME,
        SparringPartnerPrompt::NAME,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_prompts_matches_names() {
        let prompts = get_all_prompts();
        let names: Vec<_> = prompts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, prompt_names());
    }

    #[test]
    fn test_prompt_names_are_unique() {
        let mut names = prompt_names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 7);
    }
}
