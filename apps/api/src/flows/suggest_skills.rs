//! Suggest Skills — single-shot transform from a freelancer's work history
//! and preferences to a list of profile skills worth adding.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::prompts::{SUGGEST_SKILLS_PROMPT_TEMPLATE, SUGGEST_SKILLS_SYSTEM};
use crate::flows::Capability;
use crate::genai::GenAiClient;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestSkillsInput {
    pub work_history: String,
    pub job_preferences: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestSkillsOutput {
    pub suggested_skills: Vec<String>,
}

/// Suggests profile skills for a freelancer. Rejects blank inputs before
/// any prompt is built.
pub async fn suggest_skills(
    genai: &GenAiClient,
    input: &SuggestSkillsInput,
) -> Result<SuggestSkillsOutput, AppError> {
    if input.work_history.trim().is_empty() {
        return Err(AppError::Validation(
            "workHistory cannot be empty".to_string(),
        ));
    }
    if input.job_preferences.trim().is_empty() {
        return Err(AppError::Validation(
            "jobPreferences cannot be empty".to_string(),
        ));
    }

    let prompt = SUGGEST_SKILLS_PROMPT_TEMPLATE
        .replace("{work_history}", &input.work_history)
        .replace("{job_preferences}", &input.job_preferences);

    genai
        .generate_json::<SuggestSkillsOutput>(&prompt, SUGGEST_SKILLS_SYSTEM)
        .await
        .map_err(|e| AppError::generation(Capability::SuggestSkills, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_work_history_is_rejected_before_any_call() {
        let genai = GenAiClient::new("test-key".to_string());
        let input = SuggestSkillsInput {
            work_history: "   ".to_string(),
            job_preferences: "remote frontend SaaS roles".to_string(),
        };
        let result = suggest_skills(&genai, &input).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_blank_preferences_are_rejected_before_any_call() {
        let genai = GenAiClient::new("test-key".to_string());
        let input = SuggestSkillsInput {
            work_history: "Lead Developer at TechCorp".to_string(),
            job_preferences: String::new(),
        };
        let result = suggest_skills(&genai, &input).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_output_schema_matches_wire_contract() {
        // A schema-honoring model response parses into a non-empty list.
        let json = r#"{ "suggestedSkills": ["React", "TypeScript", "Next.js"] }"#;
        let output: SuggestSkillsOutput = serde_json::from_str(json).unwrap();
        assert!(!output.suggested_skills.is_empty());

        let value = serde_json::to_value(&output).unwrap();
        assert!(value.get("suggestedSkills").is_some());
    }

    #[test]
    fn test_output_rejects_wrong_shape() {
        // A bare array is not the declared schema — it must fail, not
        // partially succeed.
        let result: Result<SuggestSkillsOutput, _> = serde_json::from_str(r#"["React"]"#);
        assert!(result.is_err());
    }
}
