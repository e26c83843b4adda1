use anyhow::Result;
use sqlx::Row;

use crate::domain::details::StudentRow;
use crate::domain::models::{Group, NewStudent};
use crate::storage::db::DbConnection;

/// Repository for student rows and their enrollment links
#[derive(Clone)]
pub struct StudentRepository {
    db: DbConnection,
}

impl StudentRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Fetch the flat student/group join rows, optionally restricted to
    /// students whose first name contains the given substring.
    ///
    /// The join is a left join so students without any enrollment still
    /// produce one row, with the group columns null. `instr` keeps the
    /// filter case-sensitive; SQLite's `LIKE` is not.
    pub async fn list_student_rows(&self, first_name_filter: Option<&str>) -> Result<Vec<StudentRow>> {
        let rows = sqlx::query(
            r#"
            SELECT s.id AS student_id, s.first_name, s.last_name, s.age,
                   g.id AS group_id, g.name AS group_name
            FROM students s
            LEFT JOIN group_assignments ga ON ga.student_id = s.id
            LEFT JOIN study_groups g ON g.id = ga.group_id
            WHERE ?1 IS NULL OR instr(s.first_name, ?1) > 0
            ORDER BY s.id ASC
            "#,
        )
        .bind(first_name_filter)
        .fetch_all(self.db.pool())
        .await?;

        let student_rows = rows
            .iter()
            .map(|row| StudentRow {
                student_id: row.get("student_id"),
                first_name: row.get("first_name"),
                last_name: row.get("last_name"),
                age: row.get("age"),
                group_id: row.get("group_id"),
                group_name: row.get("group_name"),
            })
            .collect();

        Ok(student_rows)
    }

    /// Insert a student and one enrollment link per group in a single
    /// transaction.
    ///
    /// Returns the generated student id. If any insert fails the
    /// transaction is dropped without commit and SQLite rolls the whole
    /// write back; the error comes back to the caller untouched.
    pub async fn insert_student_with_enrollments(
        &self,
        student: &NewStudent,
        groups: &[Group],
    ) -> Result<i64> {
        let mut tx = self.db.pool().begin().await?;

        let student_id = sqlx::query(
            r#"
            INSERT INTO students (first_name, last_name, age)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(student.age)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        for group in groups {
            sqlx::query(
                r#"
                INSERT INTO group_assignments (student_id, group_id)
                VALUES (?, ?)
                "#,
            )
            .bind(student_id)
            .bind(group.id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(student_id)
    }
}
