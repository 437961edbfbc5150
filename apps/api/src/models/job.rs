use serde::{Deserialize, Serialize};

/// A job posting. Read-only reference data: postings are bundled with the
/// binary and never written to the document store — AI-drafted postings are
/// returned to the caller, not saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub logo_url: String,
    pub description: String,
    pub required_skills: Vec<String>,
    /// Project budget in USD. Always positive.
    pub budget: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_round_trips_camel_case() {
        let json = r#"{
            "id": "job1",
            "title": "React Developer",
            "company": "Acme",
            "logoUrl": "https://placehold.co/80x80.png",
            "description": "Build dashboards.",
            "requiredSkills": ["React"],
            "budget": 5000.0
        }"#;

        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(job.required_skills, vec!["React"]);

        let value = serde_json::to_value(&job).unwrap();
        assert!(value.get("requiredSkills").is_some());
        assert!(value.get("logoUrl").is_some());
    }
}
