//! Feature recommendations prompt.

use super::PromptDefinition;

/// Gap analysis and feature ideas per persona.
pub struct FeatureRecommendationsPrompt;

impl PromptDefinition for FeatureRecommendationsPrompt {
    const NAME: &'static str = "Feature Recommendations";
    const DESCRIPTION: &'static str = "Use for roadmap shaping or MVP+ ideation";

    fn template() -> &'static str {
        "Focusing only on the Livingston personas that are genuinely impacted by SmartMap, \
critically evaluate how well the current product addresses their compliance and ROI pain points. \
For each relevant persona, pinpoint any unmet needs or gaps, then propose features or enhancements \
that would close those gaps. Do not mention personas or features unless the connection is clear \
and meaningful\u{2014}no filler suggestions"
    }
}
