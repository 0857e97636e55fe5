//! Persona-to-feature mapping prompt.

use super::PromptDefinition;

/// Maps product features onto the goals of key personas.
pub struct PersonaMappingPrompt;

impl PromptDefinition for PersonaMappingPrompt {
    const NAME: &'static str = "Persona-to-Feature Mapping";
    const DESCRIPTION: &'static str =
        "Use to prioritize messaging or UX copy for specific segments";

    fn template() -> &'static str {
        "Cross-reference SmartMap's features with the goals, pain points, and contexts of \
our key personas\u{2014}only if there's a meaningful connection. For each persona, identify which \
feature(s) (if any) are most relevant and explain why. Suggest messaging or language\u{2014}written \
in Livingston's tone of voice\u{2014}that would resonate with that persona when describing the feature. \
Be selective and critical; don't force connections where they don't exist"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_mapping_metadata() {
        assert_eq!(PersonaMappingPrompt::NAME, "Persona-to-Feature Mapping");
        assert!(PersonaMappingPrompt::arguments().is_empty());
        assert!(PersonaMappingPrompt::template().starts_with("Cross-reference SmartMap's features"));
    }
}
