// Resume matching: weighted match scoring, skill-gap analysis, and the
// batch comparison orchestrator behind the compare/email endpoints.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod gap;
pub mod handlers;
pub mod orchestrator;
pub mod scorer;
