use anyhow::Result;
use tracing::info;

use crate::domain::details::collect_student_details;
use crate::domain::models::{
    CreateStudentCommand, GroupSummary, NewStudent, StudentDetail, StudentError,
    StudentValidationError, MAX_AGE, MAX_NAME_LENGTH,
};
use crate::storage::db::DbConnection;
use crate::storage::group_repository::GroupRepository;
use crate::storage::student_repository::StudentRepository;

/// Service for managing students and their group enrollments
#[derive(Clone)]
pub struct StudentService {
    student_repository: StudentRepository,
    group_repository: GroupRepository,
}

impl StudentService {
    /// Create a new StudentService
    pub fn new(db: DbConnection) -> Self {
        Self {
            student_repository: StudentRepository::new(db.clone()),
            group_repository: GroupRepository::new(db),
        }
    }

    /// List every matching student together with its group memberships.
    ///
    /// `first_name_filter`, when present, keeps only students whose
    /// first name contains it, compared exactly as stored.
    pub async fn list_student_details(
        &self,
        first_name_filter: Option<&str>,
    ) -> Result<Vec<StudentDetail>> {
        info!("Listing student details, filter: {:?}", first_name_filter);

        let rows = self
            .student_repository
            .list_student_rows(first_name_filter)
            .await?;

        Ok(collect_student_details(rows))
    }

    /// Create a student and enroll it in the requested groups.
    ///
    /// Every referenced group is checked before anything is written;
    /// a missing group fails the whole call with
    /// [`StudentError::GroupNotFound`] and no student row. The student
    /// and its enrollment links are then inserted in one transaction.
    /// The returned detail is built from the pre-validated groups in the
    /// order the caller supplied them, not re-queried.
    pub async fn create_student(
        &self,
        command: CreateStudentCommand,
    ) -> Result<StudentDetail, StudentError> {
        info!(
            "Creating student: {} {}, {} group(s) requested",
            command.first_name,
            command.last_name,
            command.group_ids.as_ref().map_or(0, Vec::len)
        );

        self.validate_create_command(&command)?;

        // Duplicate ids collapse to their first occurrence; the caller
        // cannot end up enrolled twice in the same group.
        let mut requested_ids: Vec<i64> = Vec::new();
        for id in command.group_ids.iter().flatten() {
            if !requested_ids.contains(id) {
                requested_ids.push(*id);
            }
        }

        // Pre-flight: all groups must exist before the first write
        let mut groups = Vec::with_capacity(requested_ids.len());
        for group_id in requested_ids {
            match self.group_repository.get_group(group_id).await? {
                Some(group) => groups.push(group),
                None => return Err(StudentError::GroupNotFound(group_id)),
            }
        }

        let new_student = NewStudent {
            first_name: command.first_name,
            last_name: command.last_name,
            age: command.age,
        };
        let student_id = self
            .student_repository
            .insert_student_with_enrollments(&new_student, &groups)
            .await?;

        info!(
            "Created student {} with {} enrollment(s)",
            student_id,
            groups.len()
        );

        Ok(StudentDetail {
            id: student_id,
            first_name: new_student.first_name,
            last_name: new_student.last_name,
            age: new_student.age,
            groups: groups.into_iter().map(GroupSummary::from).collect(),
        })
    }

    fn validate_create_command(
        &self,
        command: &CreateStudentCommand,
    ) -> Result<(), StudentValidationError> {
        if command.first_name.is_empty() {
            return Err(StudentValidationError::EmptyFirstName);
        }
        if command.first_name.chars().count() > MAX_NAME_LENGTH {
            return Err(StudentValidationError::FirstNameTooLong);
        }
        if command.last_name.is_empty() {
            return Err(StudentValidationError::EmptyLastName);
        }
        if command.last_name.chars().count() > MAX_NAME_LENGTH {
            return Err(StudentValidationError::LastNameTooLong);
        }
        if !(0..=MAX_AGE).contains(&command.age) {
            return Err(StudentValidationError::AgeOutOfRange);
        }
        Ok(())
    }
}
