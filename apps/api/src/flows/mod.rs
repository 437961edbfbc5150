// AI capability flows: skill suggestion, job description drafting, job
// matching, chat responses, and video-resume generation.
// All model calls go through genai — no direct API calls here.

pub mod audio;
pub mod chat_response;
pub mod handlers;
pub mod job_description;
pub mod match_jobs;
pub mod prompts;
pub mod suggest_skills;
pub mod video_resume;

/// Which AI capability a failure belongs to. Carried on generation errors
/// so server-side logs can attribute them; never shown to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    SuggestSkills,
    JobDescription,
    MatchJobs,
    ChatResponse,
    VideoResume,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Capability::SuggestSkills => "suggest-skills",
            Capability::JobDescription => "job-description",
            Capability::MatchJobs => "match-jobs",
            Capability::ChatResponse => "chat-response",
            Capability::VideoResume => "video-resume",
        };
        f.write_str(label)
    }
}
