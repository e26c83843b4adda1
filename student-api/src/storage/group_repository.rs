use anyhow::Result;
use sqlx::Row;

use crate::domain::models::Group;
use crate::storage::db::DbConnection;

/// Repository for group lookups. Groups are owned by another system;
/// this service reads them and seeds a starter set on empty databases.
#[derive(Clone)]
pub struct GroupRepository {
    db: DbConnection,
}

impl GroupRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Get a group by ID
    pub async fn get_group(&self, group_id: i64) -> Result<Option<Group>> {
        let row = sqlx::query(
            r#"
            SELECT id, name
            FROM study_groups
            WHERE id = ?
            "#,
        )
        .bind(group_id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(Group {
                id: r.get("id"),
                name: r.get("name"),
            })),
            None => Ok(None),
        }
    }

    /// List all groups ordered by id
    pub async fn list_groups(&self) -> Result<Vec<Group>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name
            FROM study_groups
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        let groups = rows
            .iter()
            .map(|row| Group {
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect();

        Ok(groups)
    }

    /// Store a group under an explicit id
    pub async fn insert_group(&self, group: &Group) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO study_groups (id, name)
            VALUES (?, ?)
            "#,
        )
        .bind(group.id)
        .bind(&group.name)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Insert the starter groups when the table is empty so a fresh
    /// database is usable right away.
    pub async fn seed_default_groups(&self) -> Result<()> {
        if !self.list_groups().await?.is_empty() {
            return Ok(());
        }

        for (id, name) in [(1, "Mathematics"), (2, "Physics"), (3, "Databases")] {
            self.insert_group(&Group {
                id,
                name: name.to_string(),
            })
            .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> GroupRepository {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        GroupRepository::new(db)
    }

    #[tokio::test]
    async fn test_insert_and_get_group() {
        let repo = setup_test().await;

        let group = Group {
            id: 5,
            name: "Databases".to_string(),
        };
        repo.insert_group(&group).await.expect("Failed to insert group");

        let found = repo.get_group(5).await.expect("Failed to get group");
        assert_eq!(found, Some(group));
    }

    #[tokio::test]
    async fn test_get_missing_group_returns_none() {
        let repo = setup_test().await;

        let found = repo.get_group(42).await.expect("Failed to get group");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_seed_only_fills_empty_table() {
        let repo = setup_test().await;

        repo.seed_default_groups().await.expect("First seed failed");
        let seeded = repo.list_groups().await.expect("Failed to list groups");
        assert!(!seeded.is_empty());

        // A second run must not duplicate or overwrite anything
        repo.seed_default_groups().await.expect("Second seed failed");
        let after = repo.list_groups().await.expect("Failed to list groups");
        assert_eq!(seeded, after);
    }
}
