// All LLM prompt constants for the Feedback module.

/// Feedback analysis prompt template. Replace `{feedback}` before sending.
pub const FEEDBACK_PROMPT_TEMPLATE: &str = "\
You are an HR analytics expert. Analyze the following feedback and predict:
1. Is the employee likely to leave soon? (Yes/No)
2. What are the key pain points?
3. Suggest specific strategies for HR to improve engagement.
Feedback: {feedback}";

/// Builds the analysis prompt for one feedback row. Pure interpolation.
pub fn build_feedback_prompt(feedback_text: &str) -> String {
    FEEDBACK_PROMPT_TEMPLATE.replace("{feedback}", feedback_text)
}
