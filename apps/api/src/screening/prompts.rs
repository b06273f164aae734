// All LLM prompt constants for the Screening module.

/// The role every resume is screened against. Single-role product for now.
pub const TARGET_ROLE: &str = "Software Engineer";

/// Screening prompt template.
/// Replace `{role}`, `{resume}`, and `{jd}` before sending.
pub const SCREENING_PROMPT_TEMPLATE: &str = "\
You are a hiring assistant. Given a resume and a job description for '{role}', \
score the match from 0 to 10, and explain the decision.
Resume: {resume}
Job Description: {jd}";

/// Builds the screening prompt for one resume. Pure interpolation — the
/// texts are passed through unchanged, with no truncation or escaping.
pub fn build_resume_prompt(resume_text: &str, jd_text: &str) -> String {
    SCREENING_PROMPT_TEMPLATE
        .replace("{role}", TARGET_ROLE)
        .replace("{resume}", resume_text)
        .replace("{jd}", jd_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_both_texts_and_the_role() {
        let prompt = build_resume_prompt("RESUME BODY", "JD BODY");
        assert!(prompt.contains("RESUME BODY"));
        assert!(prompt.contains("JD BODY"));
        assert!(prompt.contains("'Software Engineer'"));
    }

    #[test]
    fn test_prompt_asks_for_a_score_out_of_ten() {
        let prompt = build_resume_prompt("r", "jd");
        assert!(prompt.contains("0 to 10"));
    }

    #[test]
    fn test_texts_are_not_modified() {
        let resume = "line one\nline two — with punctuation & <tags>";
        let prompt = build_resume_prompt(resume, "jd");
        assert!(prompt.contains(resume));
    }
}
