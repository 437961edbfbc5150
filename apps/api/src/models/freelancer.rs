use serde::{Deserialize, Serialize};

/// A freelancer profile as stored in the `freelancers` collection.
///
/// Field names serialize in camelCase — the wire contract the web client
/// consumes and the shape the document store holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreelancerProfile {
    pub id: String,
    pub name: String,
    pub title: String,
    pub avatar_url: String,
    pub skills: Vec<String>,
    pub bio: String,
    pub work_history: String,
    pub job_preferences: String,
    /// Hourly rate in USD. Always positive.
    pub rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_resume_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_round_trips_camel_case() {
        let json = r#"{
            "id": "1",
            "name": "Elena Petrova",
            "title": "Full-Stack Developer",
            "avatarUrl": "https://i.pravatar.cc/150?u=1",
            "skills": ["React", "Node.js"],
            "bio": "Builds web products end to end.",
            "workHistory": "Lead Developer at TechCorp.",
            "jobPreferences": "Remote frontend roles.",
            "rate": 85.0
        }"#;

        let profile: FreelancerProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "1");
        assert_eq!(profile.skills.len(), 2);
        assert!(profile.video_resume_url.is_none());

        let value = serde_json::to_value(&profile).unwrap();
        assert!(value.get("avatarUrl").is_some());
        assert!(value.get("workHistory").is_some());
        // Absent optional fields stay off the wire entirely
        assert!(value.get("videoResumeUrl").is_none());
    }
}
