// All prompt constants for the capability flows.
// Templates carry `{placeholder}` slots filled with input fields verbatim;
// list fields render comma-joined or enumerated per each template's own
// formatting, in input order.

/// System prompt for skill suggestion — enforces JSON-only output.
pub const SUGGEST_SKILLS_SYSTEM: &str =
    "You are an AI expert career advisor for freelancers. Your goal is to help them get hired. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Skill suggestion prompt template. Replace `{work_history}` and
/// `{job_preferences}` before sending.
pub const SUGGEST_SKILLS_PROMPT_TEMPLATE: &str = r#"Based on the provided work history and job preferences, suggest a list of skills that the freelancer should add to their profile to improve their chances of matching with high-quality job opportunities. Be concise and only list the skills.

Work History: {work_history}
Job Preferences: {job_preferences}

Ensure the suggested skills are commercially valuable and directly relevant to the freelancer's stated career goals.

Return a JSON object with this EXACT schema (no extra fields):
{
  "suggestedSkills": ["TypeScript", "GraphQL"]
}"#;

/// System prompt for job description drafting — enforces JSON-only output.
pub const JOB_DESCRIPTION_SYSTEM: &str =
    "You are an expert AI recruitment assistant. Your task is to generate a compelling \
    and professional job posting. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Job description prompt template. Replace `{title}` and
/// `{responsibilities}` before sending.
pub const JOB_DESCRIPTION_PROMPT_TEMPLATE: &str = r#"Generate a job posting from the details below.

Job Title: {title}

Key Responsibilities:
{responsibilities}

Based on the title and responsibilities, please generate:
1. A complete and engaging job description that outlines the role, requirements, and what makes the opportunity attractive. The description should be well-structured and formatted with paragraphs.
2. A list of suggested skills (e.g., specific programming languages, software, or soft skills) that are most relevant for this position.

Return a JSON object with this EXACT schema (no extra fields):
{
  "description": "Full job description text...",
  "suggestedSkills": ["React", "Communication"]
}"#;

/// System prompt for job matching — enforces JSON-only output.
pub const MATCH_JOBS_SYSTEM: &str =
    "You are an expert AI recruiter. Your task is to find the most relevant jobs for a \
    freelancer based on their profile. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Job matching prompt template. Replace `{freelancer_block}` and
/// `{jobs_block}` before sending.
pub const MATCH_JOBS_PROMPT_TEMPLATE: &str = r#"Analyze the provided freelancer profile:
{freelancer_block}

Now, review the following available job postings:
{jobs_block}

Based on your analysis, identify the top 3-5 job postings that are the best fit for the freelancer. For each match, provide the 'jobId' and a concise 'reason' (1-2 sentences) explaining why it's a strong match, considering their skills, experience, and preferences. Focus on high-quality matches over quantity.

Return a JSON object with this EXACT schema (no extra fields):
{
  "matchedJobs": [
    { "jobId": "job1", "reason": "Strong overlap with their React and TypeScript experience." }
  ]
}"#;

/// Chat response prompt template. Replace `{name}`, `{title}`, `{skills}`,
/// and `{history_block}` before sending. The system prompt is built from
/// the same persona fields, so it lives in the flow, not here.
pub const CHAT_RESPONSE_PROMPT_TEMPLATE: &str = r#"Here is the recent chat history (the last message is from the client):
{history_block}

Based on this conversation, generate the next response from your perspective as the freelancer.

Return a JSON object with this EXACT schema (no extra fields):
{
  "response": "Your reply to the client."
}"#;

/// Persona system prompt for chat responses. Replace `{name}`, `{title}`,
/// and `{skills}` before sending.
pub const CHAT_RESPONSE_SYSTEM_TEMPLATE: &str =
    "You are acting as a freelancer in a chat conversation with a potential client. \
    Your name is {name}, and you are a {title}. Your skills include: {skills}. \
    Keep your responses concise, professional, and friendly. Your goal is to answer \
    the client's questions and encourage them to hire you. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Fixed instruction text for the video-synthesis request.
pub const VIDEO_ANIMATION_INSTRUCTION: &str =
    "Animate the person in the provided image to speak the accompanying audio track. \
    The background should be a simple, professional setting suitable for a resume.";

#[cfg(test)]
mod tests {
    use super::*;

    /// Every template placeholder must survive editing — the flows replace
    /// them by exact name.
    #[test]
    fn test_templates_carry_their_placeholders() {
        assert!(SUGGEST_SKILLS_PROMPT_TEMPLATE.contains("{work_history}"));
        assert!(SUGGEST_SKILLS_PROMPT_TEMPLATE.contains("{job_preferences}"));
        assert!(JOB_DESCRIPTION_PROMPT_TEMPLATE.contains("{title}"));
        assert!(JOB_DESCRIPTION_PROMPT_TEMPLATE.contains("{responsibilities}"));
        assert!(MATCH_JOBS_PROMPT_TEMPLATE.contains("{freelancer_block}"));
        assert!(MATCH_JOBS_PROMPT_TEMPLATE.contains("{jobs_block}"));
        assert!(CHAT_RESPONSE_PROMPT_TEMPLATE.contains("{history_block}"));
        assert!(CHAT_RESPONSE_SYSTEM_TEMPLATE.contains("{name}"));
        assert!(CHAT_RESPONSE_SYSTEM_TEMPLATE.contains("{title}"));
        assert!(CHAT_RESPONSE_SYSTEM_TEMPLATE.contains("{skills}"));
    }
}
