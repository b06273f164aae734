// Resume Screening: upload resumes + a job description, score each against the role.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod handlers;
pub mod prompts;
pub mod runner;
