//! Outcome-based positioning prompt.

use super::PromptDefinition;

/// Jobs-to-be-done positioning for the product page.
pub struct OutcomePositioningPrompt;

impl PromptDefinition for OutcomePositioningPrompt {
    const NAME: &'static str = "Outcome-Based Positioning Framework";
    const DESCRIPTION: &'static str = "Use this when you need help avoiding generic feature-description and instead drive home why it matters";

    fn template() -> &'static str {
        "Using the Jobs-to-Be-Done framework, identify the functional, emotional, and social \
jobs SmartMap helps clients complete\u{2014}but only in relation to the Livingston personas who are \
genuinely relevant to the product. Do not include personas (e.g. small business owners) unless \
there's a clear, meaningful connection. Based on these insights, write positioning blocks for \
a SmartMap product page on the Livingston marketing website. Focus on outcomes and transformation, \
not just features. All messaging should be tailored to the applicable personas and written in \
Livingston's tone of voice: clear, confident, and focused on practical value"
    }
}
