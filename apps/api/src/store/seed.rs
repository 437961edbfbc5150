//! Bundled default dataset: the freelancer catalog the store is seeded
//! from on first read, and the read-only job postings list.

use std::sync::OnceLock;

use crate::models::freelancer::FreelancerProfile;
use crate::models::job::JobPosting;

/// The demo user whose profile the settings page edits.
pub const DEFAULT_USER_ID: &str = "1";

fn profile(
    id: &str,
    name: &str,
    title: &str,
    skills: &[&str],
    bio: &str,
    work_history: &str,
    job_preferences: &str,
    rate: f64,
) -> FreelancerProfile {
    FreelancerProfile {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        avatar_url: format!("https://i.pravatar.cc/150?u={id}"),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        bio: bio.to_string(),
        work_history: work_history.to_string(),
        job_preferences: job_preferences.to_string(),
        rate,
        video_resume_url: None,
    }
}

fn posting(
    id: &str,
    title: &str,
    company: &str,
    description: &str,
    required_skills: &[&str],
    budget: f64,
) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        logo_url: "https://placehold.co/80x80.png".to_string(),
        description: description.to_string(),
        required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
        budget,
    }
}

/// The full bundled freelancer catalog.
pub fn freelancers() -> &'static [FreelancerProfile] {
    static FREELANCERS: OnceLock<Vec<FreelancerProfile>> = OnceLock::new();
    FREELANCERS.get_or_init(|| {
        vec![
            profile(
                "1",
                "Elena Petrova",
                "Senior Full-Stack Developer",
                &["React", "Node.js", "TypeScript", "PostgreSQL"],
                "Full-stack developer with a product mindset. I ship fast without cutting corners.",
                "Lead Developer at TechCorp for four years, where I built and scaled an \
                 e-commerce platform serving two million monthly users. Before that, frontend \
                 engineer at a fintech startup.",
                "Remote-first product teams building SaaS. I prefer long-term engagements \
                 with ownership over a feature area.",
                85.0,
            ),
            profile(
                "2",
                "Marcus Chen",
                "Mobile App Developer",
                &["Flutter", "Dart", "Firebase", "Swift"],
                "I build polished cross-platform mobile apps that users actually keep installed.",
                "Five years of mobile contracting: shipped fourteen apps to both stores, \
                 including a meditation app that reached #3 in Health & Fitness.",
                "Consumer mobile apps, health tech, or anything with offline-first sync.",
                75.0,
            ),
            profile(
                "3",
                "Priya Sharma",
                "UI/UX Designer",
                &["Figma", "Prototyping", "User Research", "Design Systems"],
                "Designer who codes enough to keep handoff honest. Research-driven, not trend-driven.",
                "Design lead at an agency serving B2B SaaS clients; built three design systems \
                 from scratch and ran usability programs for enterprise dashboards.",
                "Early-stage products that need a design foundation, ideally with direct \
                 access to users.",
                70.0,
            ),
            profile(
                "4",
                "Tomás Oliveira",
                "DevOps Engineer",
                &["Kubernetes", "Terraform", "AWS", "Go"],
                "I make deploys boring. Infrastructure as code, observability, and cost control.",
                "SRE at a payments processor, then independent consultant migrating teams \
                 from hand-rolled EC2 to Kubernetes with proper CI/CD.",
                "Infrastructure audits and migrations. Short, well-scoped engagements preferred.",
                95.0,
            ),
            profile(
                "5",
                "Aisha Bello",
                "Data Scientist",
                &["Python", "Machine Learning", "SQL", "TensorFlow"],
                "From messy data to deployed models. I care about the metric that moves the business.",
                "Built churn-prediction and demand-forecasting models for retail clients; \
                 previously analytics engineer at a logistics company.",
                "ML projects with a clear business question and real data. Remote only.",
                90.0,
            ),
            profile(
                "6",
                "Jonas Weber",
                "Backend Engineer",
                &["Rust", "Go", "gRPC", "Redis"],
                "Systems programmer at heart. APIs that stay fast under load.",
                "Six years building trading infrastructure, then two years of contract work \
                 on high-throughput APIs and event pipelines.",
                "Performance-critical backend work. Happy to pair with in-house teams.",
                100.0,
            ),
        ]
    })
}

/// Looks up a bundled default profile by id.
pub fn default_freelancer(id: &str) -> Option<&'static FreelancerProfile> {
    freelancers().iter().find(|f| f.id == id)
}

/// The read-only job postings catalog.
pub fn job_postings() -> &'static [JobPosting] {
    static JOBS: OnceLock<Vec<JobPosting>> = OnceLock::new();
    JOBS.get_or_init(|| {
        vec![
            posting(
                "job1",
                "React Dashboard Developer",
                "Brightline Analytics",
                "Build and maintain a customer-facing analytics dashboard: data-heavy \
                 tables, charting, and real-time updates. You will own the frontend and \
                 work directly with our API team.",
                &["React", "TypeScript"],
                12000.0,
            ),
            posting(
                "job2",
                "Flutter App for Fitness Startup",
                "PulsePoint",
                "Take our workout-tracking app from MVP to store-ready: offline sync, \
                 wearable integration, and a subscription paywall.",
                &["Flutter", "Firebase"],
                18000.0,
            ),
            posting(
                "job3",
                "Design System Overhaul",
                "Nordwind Software",
                "Audit our existing component library, consolidate it into a documented \
                 design system in Figma, and support the rollout across three product teams.",
                &["Figma", "Design Systems"],
                9000.0,
            ),
            posting(
                "job4",
                "Kubernetes Migration",
                "Cartwheel Commerce",
                "Migrate a dozen services from VM deployments to Kubernetes, with \
                 Terraform-managed infrastructure and a sane CI/CD pipeline.",
                &["Kubernetes", "Terraform"],
                25000.0,
            ),
            posting(
                "job5",
                "Demand Forecasting Model",
                "Harvest & Co",
                "Build a demand-forecasting model for a grocery chain: pipeline from our \
                 warehouse, model training, and a weekly retraining job with monitoring.",
                &["Python", "Machine Learning", "SQL"],
                15000.0,
            ),
            posting(
                "job6",
                "High-Throughput Ingest API",
                "Signalhaus",
                "Design and build an event-ingest API handling 50k requests per second, \
                 with backpressure, batching, and Redis-backed deduplication.",
                &["Rust", "Redis"],
                30000.0,
            ),
        ]
    })
}

/// Looks up a job posting by id.
pub fn job_posting(id: &str) -> Option<&'static JobPosting> {
    job_postings().iter().find(|j| j.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_is_bundled() {
        let user = default_freelancer(DEFAULT_USER_ID).expect("default user profile");
        assert_eq!(user.id, "1");
        assert!(!user.skills.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut freelancer_ids: Vec<_> = freelancers().iter().map(|f| f.id.as_str()).collect();
        freelancer_ids.sort_unstable();
        freelancer_ids.dedup();
        assert_eq!(freelancer_ids.len(), freelancers().len());

        let mut job_ids: Vec<_> = job_postings().iter().map(|j| j.id.as_str()).collect();
        job_ids.sort_unstable();
        job_ids.dedup();
        assert_eq!(job_ids.len(), job_postings().len());
    }

    #[test]
    fn test_rates_and_budgets_are_positive() {
        assert!(freelancers().iter().all(|f| f.rate > 0.0));
        assert!(job_postings().iter().all(|j| j.budget > 0.0));
    }
}
