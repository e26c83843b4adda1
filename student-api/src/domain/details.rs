//! Folds the flat student/group join rows into nested [`StudentDetail`]
//! values. Pure data shaping; no storage involved.

use std::collections::HashMap;

use crate::domain::models::{GroupSummary, StudentDetail};

/// One row of the left join from students through enrollments to groups.
/// The group columns are absent for a student with no enrollments.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    pub student_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub group_id: Option<i64>,
    pub group_name: Option<String>,
}

/// Fold join rows into one detail per student.
///
/// Students come back in the order they were first seen and each group
/// list keeps the order its rows arrived in. A repeated group for the
/// same student is dropped so a duplicate join hit never shows up as
/// data. Single forward pass over the rows.
pub fn collect_student_details(rows: Vec<StudentRow>) -> Vec<StudentDetail> {
    let mut details: Vec<StudentDetail> = Vec::new();
    let mut index_by_id: HashMap<i64, usize> = HashMap::new();

    for row in rows {
        let StudentRow {
            student_id,
            first_name,
            last_name,
            age,
            group_id,
            group_name,
        } = row;

        let slot = match index_by_id.get(&student_id) {
            Some(&slot) => slot,
            None => {
                index_by_id.insert(student_id, details.len());
                details.push(StudentDetail {
                    id: student_id,
                    first_name,
                    last_name,
                    age,
                    groups: Vec::new(),
                });
                details.len() - 1
            }
        };

        if let (Some(group_id), Some(group_name)) = (group_id, group_name) {
            let groups = &mut details[slot].groups;
            if !groups.iter().any(|g| g.id == group_id) {
                groups.push(GroupSummary {
                    id: group_id,
                    name: group_name,
                });
            }
        }
    }

    details
}
