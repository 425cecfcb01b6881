use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::api::models::Role;
use crate::error::JobPostingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 3] = [EmploymentType::FullTime, EmploymentType::PartTime, EmploymentType::Contract];

    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full time",
            EmploymentType::PartTime => "Part time",
            EmploymentType::Contract => "Contract",
        }
    }
}

/// Form contents as typed, before required-field checks.
#[derive(Debug, Clone, Default)]
pub struct JobPostingDraft {
    pub title: String,
    pub role: Option<Role>,
    pub employment_type: EmploymentType,
    pub location: String,
    pub pay_range: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub title: String,
    pub role: Role,
    pub employment_type: EmploymentType,
    pub location: String,
    pub pay_range: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedJob {
    pub id: u64,
    pub posting: JobPosting,
}

fn required(value: &str, field: &'static str) -> Result<String, JobPostingError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(JobPostingError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

impl JobPostingDraft {
    pub fn validate(&self) -> Result<JobPosting, JobPostingError> {
        let title = required(&self.title, "title")?;
        let role = self.role.ok_or(JobPostingError::MissingField("role"))?;
        let location = required(&self.location, "location")?;
        let description = required(&self.description, "description")?;
        let pay_range = Some(self.pay_range.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        Ok(JobPosting {
            title,
            role,
            employment_type: self.employment_type,
            location,
            pay_range,
            description,
        })
    }
}

static NEXT_JOB_ID: AtomicU64 = AtomicU64::new(1);

/// Simulated submission: waits `delay`, then hands back the posting with a fresh id.
pub async fn submit(posting: JobPosting, delay: Duration) -> PostedJob {
    tokio::time::sleep(delay).await;
    let id = NEXT_JOB_ID.fetch_add(1, Ordering::Relaxed);
    log::info!("Posted job {id}: {}", posting.title);
    PostedJob { id, posting }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> JobPostingDraft {
        JobPostingDraft {
            title: "  In-home RBT  ".into(),
            role: Some(Role::Rbt),
            employment_type: EmploymentType::PartTime,
            location: "Austin, TX".into(),
            pay_range: String::new(),
            description: "Afternoon sessions with two clients.".into(),
        }
    }

    #[test]
    fn valid_draft_is_trimmed() {
        let posting = filled().validate().unwrap();
        assert_eq!(posting.title, "In-home RBT");
        assert_eq!(posting.pay_range, None);
        assert_eq!(posting.employment_type, EmploymentType::PartTime);
    }

    #[test]
    fn blank_title_is_reported_first() {
        let mut draft = filled();
        draft.title = "   ".into();
        draft.location.clear();
        assert_eq!(draft.validate(), Err(JobPostingError::MissingField("title")));
    }

    #[test]
    fn missing_role_and_description_are_reported() {
        let mut draft = filled();
        draft.role = None;
        assert_eq!(draft.validate(), Err(JobPostingError::MissingField("role")));

        let mut draft = filled();
        draft.description.clear();
        assert_eq!(draft.validate(), Err(JobPostingError::MissingField("description")));
    }

    #[test]
    fn pay_range_is_optional_but_kept() {
        let mut draft = filled();
        draft.pay_range = " $25-$32/hr ".into();
        assert_eq!(draft.validate().unwrap().pay_range.as_deref(), Some("$25-$32/hr"));
    }

    #[tokio::test]
    async fn submit_assigns_distinct_ids() {
        let posting = filled().validate().unwrap();
        let a = submit(posting.clone(), Duration::from_millis(1)).await;
        let b = submit(posting.clone(), Duration::ZERO).await;
        assert_ne!(a.id, b.id);
        assert_eq!(a.posting, posting);
    }
}
