use serde::{Deserialize, Serialize};

/// Upper bound for first and last names, matching the column width.
pub const MAX_NAME_LENGTH: usize = 50;

/// Upper bound for a student's age.
pub const MAX_AGE: i64 = 32_767;

/// A group as stored. Groups are managed outside this service; the
/// service only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
}

/// Attributes for a student that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
}

/// A group membership entry inside a [`StudentDetail`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub id: i64,
    pub name: String,
}

impl From<Group> for GroupSummary {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            name: group.name,
        }
    }
}

/// A student together with the groups it is enrolled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetail {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub groups: Vec<GroupSummary>,
}

/// Input for [`StudentService::create_student`].
///
/// [`StudentService::create_student`]: crate::domain::student_service::StudentService::create_student
#[derive(Debug, Clone)]
pub struct CreateStudentCommand {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    /// Ids of the groups to enroll the student in, in the order the
    /// caller wants them back. May be absent or empty.
    pub group_ids: Option<Vec<i64>>,
}

#[derive(Debug, thiserror::Error)]
pub enum StudentError {
    /// A referenced group failed the pre-flight existence check.
    #[error("Group with id {0} does not exist")]
    GroupNotFound(i64),
    #[error(transparent)]
    Invalid(#[from] StudentValidationError),
    /// Anything that went wrong below the domain layer.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum StudentValidationError {
    #[error("First name cannot be empty")]
    EmptyFirstName,
    #[error("First name is too long")]
    FirstNameTooLong,
    #[error("Last name cannot be empty")]
    EmptyLastName,
    #[error("Last name is too long")]
    LastNameTooLong,
    #[error("Age is out of range")]
    AgeOutOfRange,
}
