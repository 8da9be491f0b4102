//! Application submission and status-transition workflow.
//!
//! Every capability check lives here rather than in routing middleware, so
//! the workflow is exercisable without a transport layer. The duplicate
//! guard is storage-arbitrated: the pre-checks give friendly errors, the
//! UNIQUE and FK constraints decide races.

use axum::body::Bytes;

use crate::{
    pkg::{
        internal::{
            adaptors::{
                applications::{
                    mutators::{ApplicationMutator, CreateApplicationData},
                    selectors::ApplicationSelector,
                    spec::{
                        ApplicationEntry, ApplicationStatus, ApplicationWithJob, Education,
                        Experience,
                    },
                },
                jobs::{mutators::JobMutator, selectors::JobSelector},
                users::spec::UserEntry,
            },
            blobstore::BlobRef,
        },
        server::state::{AppState, GetTxn},
    },
    prelude::{Error, Result},
};

#[derive(Debug, Default)]
pub struct SubmissionFields {
    pub experience: Option<String>,
    pub skills: Option<String>,
    pub notes: Option<String>,
    pub education: Option<String>,
}

#[derive(Debug)]
pub struct Upload {
    pub original_name: String,
    pub bytes: Bytes,
}

fn parse_experience(raw: Option<&str>) -> Result<Experience> {
    let experience = match raw.filter(|s| !s.trim().is_empty()) {
        Some(raw) => serde_json::from_str::<Experience>(raw)
            .map_err(|_| Error::validation("experience", "Invalid experience format"))?,
        None => Experience::default(),
    };
    if experience.years < 0 || experience.months < 0 || experience.days < 0 {
        return Err(Error::validation(
            "experience",
            "Experience components must be non-negative",
        ));
    }
    Ok(experience)
}

fn parse_skills(raw: Option<&str>) -> Result<Vec<String>> {
    let skills: Vec<String> = match raw.filter(|s| !s.trim().is_empty()) {
        Some(raw) => serde_json::from_str(raw)
            .map_err(|_| Error::validation("skills", "Invalid skills format"))?,
        None => Vec::new(),
    };
    let skills: Vec<String> = skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if skills.is_empty() {
        return Err(Error::validation("skills", "At least one skill is required"));
    }
    Ok(skills)
}

fn parse_education(raw: Option<&str>) -> Result<Vec<Education>> {
    match raw.filter(|s| !s.trim().is_empty()) {
        Some(raw) => serde_json::from_str(raw)
            .map_err(|_| Error::validation("education", "Invalid education format")),
        None => Ok(Vec::new()),
    }
}

/// Submit an application for `job_id` on behalf of `actor`.
///
/// Precondition order matters: the job-active and duplicate checks run
/// before any file is written so a rejected submission never leaves an
/// orphaned blob. If the final insert still loses a race, the blob written
/// in between is discarded before the error propagates.
pub async fn submit(
    state: &AppState,
    actor: &UserEntry,
    job_id: &str,
    fields: SubmissionFields,
    upload: Option<Upload>,
) -> Result<ApplicationEntry> {
    let mut conn = state.db_pool.acquire().await?;

    JobSelector::new(&mut conn)
        .get_active_by_id(job_id)
        .await?
        .ok_or(Error::NotFound("Job not found"))?;
    if ApplicationSelector::new(&mut conn)
        .find_for_pair(job_id, &actor.user_id)
        .await?
        .is_some()
    {
        return Err(Error::Conflict("You have already applied for this job"));
    }

    let experience = parse_experience(fields.experience.as_deref())?;
    let skills = parse_skills(fields.skills.as_deref())?;
    let education = parse_education(fields.education.as_deref())?;
    let notes = fields.notes.unwrap_or_default();

    let resume = match &upload {
        Some(upload) => Some(
            state
                .blobs
                .intake(&upload.original_name, &upload.bytes)
                .await?,
        ),
        None => None,
    };

    let inserted = ApplicationMutator::new(&mut conn)
        .create(CreateApplicationData {
            job_id: job_id.to_string(),
            applicant_id: actor.user_id.clone(),
            name: actor.name.clone(),
            email: actor.email.clone(),
            experience,
            skills,
            notes,
            education,
            resume: resume.clone(),
        })
        .await;
    match inserted {
        Ok(application) => {
            tracing::info!(
                "application {} submitted for job {}",
                &application.application_id,
                job_id
            );
            Ok(application)
        }
        Err(err) => {
            if let Some(blob) = resume {
                if let Err(cleanup) = state.blobs.discard(&blob).await {
                    tracing::error!("failed to discard blob {}: {}", &blob.filename, cleanup);
                }
            }
            Err(err)
        }
    }
}

/// Transition an application's status. Any of the three values may be set
/// from any other; re-applying the current value succeeds and bumps
/// `updated_at`.
pub async fn set_status(
    state: &AppState,
    actor: &UserEntry,
    application_id: &str,
    raw_status: &str,
) -> Result<ApplicationEntry> {
    let status = ApplicationStatus::parse(raw_status)
        .ok_or_else(|| Error::validation("status", "Invalid status"))?;
    if !actor.role.is_admin() {
        return Err(Error::Forbidden("Admin access required"));
    }
    let mut conn = state.db_pool.acquire().await?;
    let application = ApplicationMutator::new(&mut conn)
        .update_status(application_id, status)
        .await?
        .ok_or(Error::NotFound("Application not found"))?;
    tracing::info!(
        "application {} moved to {:?}",
        &application.application_id,
        &application.status
    );
    Ok(application)
}

pub async fn list_mine(state: &AppState, actor: &UserEntry) -> Result<Vec<ApplicationWithJob>> {
    let mut conn = state.db_pool.acquire().await?;
    ApplicationSelector::new(&mut conn)
        .for_applicant(&actor.user_id)
        .await
}

pub async fn list_for_job(
    state: &AppState,
    actor: &UserEntry,
    job_id: &str,
) -> Result<Vec<ApplicationWithJob>> {
    if !actor.role.is_admin() {
        return Err(Error::Forbidden("Admin access required"));
    }
    let mut conn = state.db_pool.acquire().await?;
    JobSelector::new(&mut conn)
        .get_by_id(job_id)
        .await?
        .ok_or(Error::NotFound("Job not found"))?;
    ApplicationSelector::new(&mut conn).for_job(job_id).await
}

pub async fn list_all(state: &AppState, actor: &UserEntry) -> Result<Vec<ApplicationWithJob>> {
    if !actor.role.is_admin() {
        return Err(Error::Forbidden("Admin access required"));
    }
    let mut conn = state.db_pool.acquire().await?;
    ApplicationSelector::new(&mut conn).all().await
}

/// Fetch an application's resume for download; owner or admin only.
pub async fn resume_attachment(
    state: &AppState,
    actor: &UserEntry,
    application_id: &str,
) -> Result<(BlobRef, Vec<u8>)> {
    let mut conn = state.db_pool.acquire().await?;
    let application = ApplicationSelector::new(&mut conn)
        .get_by_id(application_id)
        .await?
        .ok_or(Error::NotFound("Application not found"))?;
    if application.applicant_id != actor.user_id && !actor.role.is_admin() {
        return Err(Error::Forbidden("Not authorized to access this resume"));
    }
    let blob = application
        .resume
        .ok_or(Error::NotFound("Resume not found"))?
        .0;
    let bytes = state.blobs.resolve(&blob).await?;
    Ok((blob, bytes))
}

/// Delete a job and every application referencing it, atomically. Either
/// both go or neither does; a submission racing the cascade either lands
/// before it or fails NotFound on the FK check.
pub async fn delete_job(state: &AppState, actor: &UserEntry, job_id: &str) -> Result<u64> {
    if !actor.role.is_super_admin() {
        return Err(Error::Forbidden("Super admin access required"));
    }
    let mut tx = state.db_pool.begin_txn().await?;
    JobSelector::new(&mut tx)
        .get_by_id(job_id)
        .await?
        .ok_or(Error::NotFound("Job not found"))?;
    let removed = ApplicationMutator::new(&mut tx).delete_for_job(job_id).await?;
    JobMutator::new(&mut tx).delete(job_id).await?;
    tx.commit().await?;
    tracing::info!("removed job {} and {} applications", job_id, removed);
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::pkg::{
        internal::auth,
        server::{
            handlers::{
                auth::RegisterInput,
                jobs::CreateJobInput,
            },
            state::testutil::mem_state,
        },
    };
    use crate::pkg::internal::adaptors::{
        jobs::spec::{EmploymentType, JobEntry},
        users::spec::Role,
    };

    async fn seed_user(state: &AppState, username: &str, role: Role) -> Result<UserEntry> {
        let (user, _token) = auth::register(
            state,
            RegisterInput {
                username: username.to_string(),
                password: "hunter22".to_string(),
                email: format!("{username}@example.com"),
                name: username.to_string(),
                role: Some(role),
            },
        )
        .await?;
        Ok(user)
    }

    async fn seed_job(state: &AppState, poster: &UserEntry, active: bool) -> Result<JobEntry> {
        let mut conn = state.db_pool.acquire().await?;
        let job = JobMutator::new(&mut conn)
            .create(
                CreateJobInput {
                    title: "Backend Engineer".to_string(),
                    description: "Own the services".to_string(),
                    requirements: "Comfort with async Rust".to_string(),
                    skills: vec!["Rust".to_string(), "SQL".to_string()],
                    salary: 120_000.0,
                    employment_type: EmploymentType::FullTime,
                },
                &poster.user_id,
            )
            .await?;
        if !active {
            sqlx::query("UPDATE jobs SET is_active = 0 WHERE job_id = ?")
                .bind(&job.job_id)
                .execute(&mut *conn)
                .await?;
        }
        Ok(job)
    }

    fn go_fields() -> SubmissionFields {
        SubmissionFields {
            experience: Some(r#"{"years": 2}"#.to_string()),
            skills: Some(r#"["Go"]"#.to_string()),
            notes: Some("happy to relocate".to_string()),
            education: None,
        }
    }

    async fn count_applications(state: &AppState, job_id: &str) -> Result<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM applications WHERE job_id = ?")
                .bind(job_id)
                .fetch_one(&*state.db_pool)
                .await?;
        Ok(count)
    }

    #[tokio::test]
    async fn test_submit_creates_pending_application() -> Result<()> {
        let (state, _dir) = mem_state("wf_submit").await?;
        let admin = seed_user(&state, "boss", Role::SuperAdmin).await?;
        let applicant = seed_user(&state, "alice", Role::User).await?;
        let job = seed_job(&state, &admin, true).await?;

        let record = submit(&state, &applicant, &job.job_id, go_fields(), None).await?;
        assert_eq!(record.status, ApplicationStatus::Pending);
        assert!(record.resume.is_none());
        assert_eq!(record.skills.0, vec!["Go"]);
        assert_eq!(record.experience.0.years, 2);
        assert_eq!(record.name, "alice");
        assert_eq!(record.email, "alice@example.com");
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_application_conflict() -> Result<()> {
        let (state, _dir) = mem_state("wf_duplicate").await?;
        let admin = seed_user(&state, "boss", Role::SuperAdmin).await?;
        let applicant = seed_user(&state, "alice", Role::User).await?;
        let job = seed_job(&state, &admin, true).await?;

        submit(&state, &applicant, &job.job_id, go_fields(), None).await?;
        let err = submit(&state, &applicant, &job.job_id, go_fields(), None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Conflict("You have already applied for this job")
        ));
        assert_eq!(count_applications(&state, &job.job_id).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_submissions() -> Result<()> {
        let (state, _dir) = mem_state("wf_race").await?;
        let admin = seed_user(&state, "boss", Role::SuperAdmin).await?;
        let applicant = seed_user(&state, "alice", Role::User).await?;
        let job = seed_job(&state, &admin, true).await?;

        let (first, second) = tokio::join!(
            submit(&state, &applicant, &job.job_id, go_fields(), None),
            submit(&state, &applicant, &job.job_id, go_fields(), None),
        );
        assert_eq!(
            first.is_ok() as usize + second.is_ok() as usize,
            1,
            "exactly one submission must win"
        );
        assert_eq!(count_applications(&state, &job.job_id).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_inactive_and_missing_job_rejected() -> Result<()> {
        let (state, _dir) = mem_state("wf_inactive").await?;
        let admin = seed_user(&state, "boss", Role::SuperAdmin).await?;
        let applicant = seed_user(&state, "alice", Role::User).await?;
        let job = seed_job(&state, &admin, false).await?;

        let err = submit(&state, &applicant, &job.job_id, go_fields(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound("Job not found")));

        let err = submit(&state, &applicant, "no-such-job", go_fields(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound("Job not found")));
        assert_eq!(count_applications(&state, &job.job_id).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_skills_rejected() -> Result<()> {
        let (state, _dir) = mem_state("wf_skills").await?;
        let admin = seed_user(&state, "boss", Role::SuperAdmin).await?;
        let applicant = seed_user(&state, "alice", Role::User).await?;
        let job = seed_job(&state, &admin, true).await?;

        let fields = SubmissionFields {
            skills: Some(r#"["  ", ""]"#.to_string()),
            ..go_fields()
        };
        let err = submit(&state, &applicant, &job.job_id, fields, None)
            .await
            .unwrap_err();
        match err {
            Error::Validation { field, .. } => assert_eq!(field, "skills"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(count_applications(&state, &job.job_id).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_negative_experience_rejected() -> Result<()> {
        let (state, _dir) = mem_state("wf_experience").await?;
        let admin = seed_user(&state, "boss", Role::SuperAdmin).await?;
        let applicant = seed_user(&state, "alice", Role::User).await?;
        let job = seed_job(&state, &admin, true).await?;

        let fields = SubmissionFields {
            experience: Some(r#"{"years": -1}"#.to_string()),
            ..go_fields()
        };
        let err = submit(&state, &applicant, &job.job_id, fields, None)
            .await
            .unwrap_err();
        match err {
            Error::Validation { field, .. } => assert_eq!(field, "experience"),
            other => panic!("unexpected error: {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_rejected_file_leaves_no_record() -> Result<()> {
        let (state, dir) = mem_state("wf_badfile").await?;
        let admin = seed_user(&state, "boss", Role::SuperAdmin).await?;
        let applicant = seed_user(&state, "alice", Role::User).await?;
        let job = seed_job(&state, &admin, true).await?;

        let upload = Upload {
            original_name: "cv.exe".to_string(),
            bytes: Bytes::from_static(b"MZ"),
        };
        let err = submit(&state, &applicant, &job.job_id, go_fields(), Some(upload))
            .await
            .unwrap_err();
        match err {
            Error::Validation { field, .. } => assert_eq!(field, "resume"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(count_applications(&state, &job.job_id).await?, 0);
        assert!(!dir.path().join("resumes").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_submit_with_resume_persists_blob() -> Result<()> {
        let (state, _dir) = mem_state("wf_resume").await?;
        let admin = seed_user(&state, "boss", Role::SuperAdmin).await?;
        let applicant = seed_user(&state, "alice", Role::User).await?;
        let job = seed_job(&state, &admin, true).await?;

        let upload = Upload {
            original_name: "cv.pdf".to_string(),
            bytes: Bytes::from_static(b"%PDF-1.4 alice"),
        };
        let record = submit(&state, &applicant, &job.job_id, go_fields(), Some(upload)).await?;
        let blob = record.resume.clone().expect("resume reference").0;
        assert_eq!(blob.original_name, "cv.pdf");
        assert_eq!(blob.mime_type, "application/pdf");

        let (fetched, bytes) = resume_attachment(&state, &applicant, &record.application_id).await?;
        assert_eq!(fetched, blob);
        assert_eq!(bytes, b"%PDF-1.4 alice");
        Ok(())
    }

    #[tokio::test]
    async fn test_resume_download_authorization() -> Result<()> {
        let (state, _dir) = mem_state("wf_resume_authz").await?;
        let admin = seed_user(&state, "boss", Role::Admin).await?;
        let superadmin = seed_user(&state, "root", Role::SuperAdmin).await?;
        let applicant = seed_user(&state, "alice", Role::User).await?;
        let other = seed_user(&state, "mallory", Role::User).await?;
        let job = seed_job(&state, &superadmin, true).await?;

        let upload = Upload {
            original_name: "cv.pdf".to_string(),
            bytes: Bytes::from_static(b"%PDF-1.4 alice"),
        };
        let record = submit(&state, &applicant, &job.job_id, go_fields(), Some(upload)).await?;

        assert!(resume_attachment(&state, &admin, &record.application_id).await.is_ok());
        let err = resume_attachment(&state, &other, &record.application_id)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));
        Ok(())
    }

    #[tokio::test]
    async fn test_set_status_and_idempotent_reapply() -> Result<()> {
        let (state, _dir) = mem_state("wf_status").await?;
        let admin = seed_user(&state, "boss", Role::Admin).await?;
        let superadmin = seed_user(&state, "root", Role::SuperAdmin).await?;
        let applicant = seed_user(&state, "alice", Role::User).await?;
        let job = seed_job(&state, &superadmin, true).await?;
        let record = submit(&state, &applicant, &job.job_id, go_fields(), None).await?;

        let accepted = set_status(&state, &admin, &record.application_id, "accepted").await?;
        assert_eq!(accepted.status, ApplicationStatus::Accepted);

        tokio::time::sleep(Duration::from_millis(5)).await;
        let again = set_status(&state, &admin, &record.application_id, "accepted").await?;
        assert_eq!(again.status, ApplicationStatus::Accepted);
        assert!(again.updated_at > accepted.updated_at);
        assert_eq!(again.created_at, accepted.created_at);
        assert_eq!(again.skills.0, accepted.skills.0);
        assert_eq!(again.name, accepted.name);
        Ok(())
    }

    #[tokio::test]
    async fn test_set_status_invalid_value() -> Result<()> {
        let (state, _dir) = mem_state("wf_status_invalid").await?;
        let admin = seed_user(&state, "boss", Role::Admin).await?;
        let superadmin = seed_user(&state, "root", Role::SuperAdmin).await?;
        let applicant = seed_user(&state, "alice", Role::User).await?;
        let job = seed_job(&state, &superadmin, true).await?;
        let record = submit(&state, &applicant, &job.job_id, go_fields(), None).await?;

        let err = set_status(&state, &admin, &record.application_id, "archived")
            .await
            .unwrap_err();
        match err {
            Error::Validation { field, reason } => {
                assert_eq!(field, "status");
                assert_eq!(reason, "Invalid status");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let mut conn = state.db_pool.acquire().await?;
        let unchanged = ApplicationSelector::new(&mut conn)
            .get_by_id(&record.application_id)
            .await?
            .unwrap();
        assert_eq!(unchanged.status, ApplicationStatus::Pending);
        assert_eq!(unchanged.updated_at, record.updated_at);
        Ok(())
    }

    #[tokio::test]
    async fn test_set_status_capability_and_missing() -> Result<()> {
        let (state, _dir) = mem_state("wf_status_authz").await?;
        let admin = seed_user(&state, "boss", Role::Admin).await?;
        let superadmin = seed_user(&state, "root", Role::SuperAdmin).await?;
        let applicant = seed_user(&state, "alice", Role::User).await?;
        let job = seed_job(&state, &superadmin, true).await?;
        let record = submit(&state, &applicant, &job.job_id, go_fields(), None).await?;

        let err = set_status(&state, &applicant, &record.application_id, "accepted")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));

        let err = set_status(&state, &admin, "no-such-application", "accepted")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound("Application not found")));
        Ok(())
    }

    #[tokio::test]
    async fn test_cascade_delete() -> Result<()> {
        let (state, _dir) = mem_state("wf_cascade").await?;
        let superadmin = seed_user(&state, "root", Role::SuperAdmin).await?;
        let job = seed_job(&state, &superadmin, true).await?;
        for username in ["alice", "bob", "carol"] {
            let applicant = seed_user(&state, username, Role::User).await?;
            submit(&state, &applicant, &job.job_id, go_fields(), None).await?;
        }
        assert_eq!(count_applications(&state, &job.job_id).await?, 3);

        let removed = delete_job(&state, &superadmin, &job.job_id).await?;
        assert_eq!(removed, 3);
        assert_eq!(count_applications(&state, &job.job_id).await?, 0);

        let mut conn = state.db_pool.acquire().await?;
        assert!(JobSelector::new(&mut conn).get_by_id(&job.job_id).await?.is_none());
        drop(conn);

        // a submission after the cascade observes the job as gone
        let late = seed_user(&state, "dave", Role::User).await?;
        let err = submit(&state, &late, &job.job_id, go_fields(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound("Job not found")));
        Ok(())
    }

    #[tokio::test]
    async fn test_cascade_delete_requires_super_admin() -> Result<()> {
        let (state, _dir) = mem_state("wf_cascade_authz").await?;
        let superadmin = seed_user(&state, "root", Role::SuperAdmin).await?;
        let admin = seed_user(&state, "boss", Role::Admin).await?;
        let job = seed_job(&state, &superadmin, true).await?;

        let err = delete_job(&state, &admin, &job.job_id).await.unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));

        let err = delete_job(&state, &superadmin, "no-such-job").await.unwrap_err();
        assert!(matches!(err, Error::NotFound("Job not found")));
        Ok(())
    }

    #[tokio::test]
    async fn test_retrieval_views() -> Result<()> {
        let (state, _dir) = mem_state("wf_views").await?;
        let superadmin = seed_user(&state, "root", Role::SuperAdmin).await?;
        let alice = seed_user(&state, "alice", Role::User).await?;
        let bob = seed_user(&state, "bob", Role::User).await?;
        let first = seed_job(&state, &superadmin, true).await?;
        let second = seed_job(&state, &superadmin, true).await?;

        submit(&state, &alice, &first.job_id, go_fields(), None).await?;
        tokio::time::sleep(Duration::from_millis(5)).await;
        submit(&state, &alice, &second.job_id, go_fields(), None).await?;
        submit(&state, &bob, &first.job_id, go_fields(), None).await?;

        let mine = list_mine(&state, &alice).await?;
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].job_id, second.job_id, "newest first");
        assert_eq!(mine[0].job_title, "Backend Engineer");

        let err = list_for_job(&state, &alice, &first.job_id).await.unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));
        let for_job = list_for_job(&state, &superadmin, &first.job_id).await?;
        assert_eq!(for_job.len(), 2);
        let err = list_for_job(&state, &superadmin, "no-such-job").await.unwrap_err();
        assert!(matches!(err, Error::NotFound("Job not found")));

        let all = list_all(&state, &superadmin).await?;
        assert_eq!(all.len(), 3);
        assert!(matches!(list_all(&state, &bob).await, Err(Error::Forbidden(_))));
        Ok(())
    }

    /// End-to-end scenario: submit with skills=["Go"] and no file, admin
    /// accepts, second submission conflicts.
    #[tokio::test]
    async fn test_scenario_submit_accept_resubmit() -> Result<()> {
        let (state, _dir) = mem_state("wf_scenario").await?;
        let superadmin = seed_user(&state, "root", Role::SuperAdmin).await?;
        let admin = seed_user(&state, "boss", Role::Admin).await?;
        let alice = seed_user(&state, "alice", Role::User).await?;
        let job = seed_job(&state, &superadmin, true).await?;

        let record = submit(&state, &alice, &job.job_id, go_fields(), None).await?;
        assert_eq!(record.status, ApplicationStatus::Pending);
        assert!(record.resume.is_none());

        let accepted = set_status(&state, &admin, &record.application_id, "accepted").await?;
        assert_eq!(accepted.status, ApplicationStatus::Accepted);

        let err = submit(&state, &alice, &job.job_id, go_fields(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
        Ok(())
    }
}
