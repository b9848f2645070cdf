use chrono::{Duration, NaiveDate, Utc};
use color_eyre::eyre::{eyre, ContextCompat, Result};

use crate::{
    app_state::{AppState, UserStoreType},
    domain::{
        Email, NewTask, Password, Project, ProjectName, ProjectScope, Role,
        Task, TaskPriority, TaskStatus, TaskTitle, User, UserPasswordHash,
        UserStoreError, Username,
    },
};

use super::constants::AdminSeed;

/// Creates the administrator described by `seed` unless a user with that
/// email is already registered. Safe to call on every startup.
#[tracing::instrument(name = "Ensuring admin user exists", skip_all)]
pub async fn ensure_admin(
    user_store: &UserStoreType,
    seed: &AdminSeed,
) -> Result<()> {
    let email = Email::parse(&seed.email)?;

    match user_store.read().await.get_user_by_email(&email).await {
        Ok(existing) => {
            if existing.role != Role::Admin {
                tracing::warn!(
                    "admin seed email belongs to a non-admin user, leaving it unchanged"
                );
            }
            return Ok(());
        }
        Err(UserStoreError::UserNotFound) => (),
        Err(e) => return Err(eyre!(e).wrap_err("failed to look up admin")),
    }

    let username = Username::parse(&seed.username)?;
    let password = Password::parse(seed.password.clone())?;
    let hash = UserPasswordHash::from_password(&password).await?;
    let admin = User::new(username, email, hash, Role::Admin);

    user_store
        .write()
        .await
        .add_user(admin)
        .await
        .map_err(|e| eyre!(e).wrap_err("failed to create admin user"))?;

    tracing::info!("created admin user");
    Ok(())
}

struct SampleTask {
    title: &'static str,
    description: &'static str,
    status: TaskStatus,
    priority: TaskPriority,
    project: usize,
    due_in_days: i64,
}

const SAMPLE_PROJECTS: [(&str, &str); 3] = [
    (
        "Website Redesign",
        "Complete redesign of the company website with modern UI/UX",
    ),
    (
        "Mobile App Development",
        "Develop a cross-platform mobile application for iOS and Android",
    ),
    (
        "Database Migration",
        "Migrate legacy database to modern cloud infrastructure",
    ),
];

const SAMPLE_TASKS: [SampleTask; 5] = [
    SampleTask {
        title: "Design Homepage Layout",
        description: "Create wireframes and mockups for the new homepage design",
        status: TaskStatus::Pending,
        priority: TaskPriority::High,
        project: 0,
        due_in_days: 7,
    },
    SampleTask {
        title: "Implement User Authentication",
        description: "Set up secure user login and registration system",
        status: TaskStatus::InProgress,
        priority: TaskPriority::High,
        project: 1,
        due_in_days: 14,
    },
    SampleTask {
        title: "Database Schema Design",
        description: "Design the new database schema for improved performance",
        status: TaskStatus::Completed,
        priority: TaskPriority::Medium,
        project: 2,
        due_in_days: -2,
    },
    SampleTask {
        title: "Content Migration",
        description: "Migrate existing content to the new website structure",
        status: TaskStatus::Pending,
        priority: TaskPriority::Medium,
        project: 0,
        due_in_days: 10,
    },
    SampleTask {
        title: "API Development",
        description: "Develop REST APIs for mobile app backend",
        status: TaskStatus::InProgress,
        priority: TaskPriority::High,
        project: 1,
        due_in_days: 21,
    },
];

fn days_from_today(days: i64) -> Result<NaiveDate> {
    let delta = Duration::try_days(days)
        .wrap_err("failed to create due date delta")?;
    Utc::now()
        .date_naive()
        .checked_add_signed(delta)
        .wrap_err("due date out of range")
}

/// Fills empty stores with demo projects and tasks owned by the seeded
/// admin. Does nothing once any project exists.
#[tracing::instrument(name = "Seeding sample data", skip_all)]
pub async fn seed_sample_data(state: &AppState, seed: &AdminSeed) -> Result<()> {
    let email = Email::parse(&seed.email)?;
    let admin = state
        .user_store
        .read()
        .await
        .get_user_by_email(&email)
        .await
        .map_err(|e| eyre!(e).wrap_err("sample data needs the admin user"))?;

    let existing = state
        .project_store
        .read()
        .await
        .list_projects(&ProjectScope::All)
        .await
        .map_err(|e| eyre!(e))?;
    if !existing.is_empty() {
        tracing::info!("projects already exist, skipping sample data");
        return Ok(());
    }

    let mut projects = Vec::with_capacity(SAMPLE_PROJECTS.len());
    for (name, description) in SAMPLE_PROJECTS {
        let project = Project::new(
            ProjectName::parse(name)?,
            description.to_owned(),
            admin.id,
            [admin.id],
        );
        state
            .project_store
            .write()
            .await
            .add_project(project.clone())
            .await
            .map_err(|e| eyre!(e).wrap_err("failed to add sample project"))?;
        projects.push(project.id);
    }

    for sample in &SAMPLE_TASKS {
        let task = Task::new(
            NewTask {
                title: TaskTitle::parse(sample.title)?,
                description: sample.description.to_owned(),
                status: sample.status,
                priority: sample.priority,
                project: projects[sample.project],
                assigned_to: Some(admin.id),
                due_date: Some(days_from_today(sample.due_in_days)?),
            },
            admin.id,
        );
        state
            .task_store
            .write()
            .await
            .add_task(task)
            .await
            .map_err(|e| eyre!(e).wrap_err("failed to add sample task"))?;
    }

    tracing::info!(
        "seeded {} sample projects and {} sample tasks",
        SAMPLE_PROJECTS.len(),
        SAMPLE_TASKS.len()
    );
    Ok(())
}
