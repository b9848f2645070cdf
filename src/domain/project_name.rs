use serde::{Deserialize, Serialize};

use super::ValidationError;

const MAX_NAME_CHARS: usize = 255;

/// Non-empty, at most 255 characters. Shared by project names and task
/// titles, which carry the same constraint.
fn parse_name(kind: &str, name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    match name.chars().count() {
        0 => Err(ValidationError::new(format!("{kind} cannot be empty"))),
        x if x > MAX_NAME_CHARS => Err(ValidationError::new(format!(
            "Max {} length is {MAX_NAME_CHARS} characters",
            kind.to_lowercase()
        ))),
        _ => Ok(name.to_owned()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        parse_name("Project name", name).map(Self)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    pub fn parse(title: &str) -> Result<Self, ValidationError> {
        parse_name("Task title", title).map(Self)
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[test]
fn test_valid_project_names() {
    let valid_names = ["a".to_string(), "a".repeat(255)];
    for valid_name in valid_names.iter() {
        let parsed = ProjectName::parse(valid_name)
            .expect("Failed to parse valid project name");

        assert_eq!(parsed.as_ref(), valid_name);
    }
}

#[test]
fn test_short_project_names() {
    let result = ProjectName::parse("");
    assert_eq!(
        result.unwrap_err().as_ref(),
        "Project name cannot be empty"
    );
}

#[test]
fn test_long_project_names() {
    let result = ProjectName::parse(&"a".repeat(256));
    assert_eq!(
        result.unwrap_err().as_ref(),
        "Max project name length is 255 characters"
    );
}

#[test]
fn test_task_titles_share_the_name_rules() {
    assert!(TaskTitle::parse("Write release notes").is_ok());
    assert_eq!(
        TaskTitle::parse("  ").unwrap_err().as_ref(),
        "Task title cannot be empty"
    );
    assert_eq!(
        TaskTitle::parse(&"t".repeat(256)).unwrap_err().as_ref(),
        "Max task title length is 255 characters"
    );
}
