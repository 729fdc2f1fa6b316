//! Repository layer for database operations.
//!
//! Every method executes exactly one parameterized statement. Item ids arrive
//! as the raw path segment and are bound as text; SQLite applies the column's
//! integer affinity, so `"7"` matches row 7 and a non-numeric id matches nothing.

use crate::domain::{Item, NewItem};
use sqlx::sqlite::SqlitePool;

/// Storage client for the `items` table.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// All items in the store's natural row order.
    pub async fn list_items(&self) -> Result<Vec<Item>, sqlx::Error> {
        sqlx::query_as::<_, Item>(
            "SELECT id, name, quantity, expiration_date, created_at FROM items",
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Insert an item and return its newly assigned id.
    pub async fn create_item(&self, item: &NewItem) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO items (name, quantity, expiration_date, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(item.name.as_str())
        .bind(item.quantity)
        .bind(item.expiration_date.as_deref())
        .bind(item.created_at.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Delete the item with the given id. Returns the number of rows removed.
    pub async fn delete_item(&self, id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete every item. Returns the number of rows removed.
    pub async fn delete_all_items(&self) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Set the quantity of the item with the given id. Returns the number of
    /// rows updated.
    pub async fn update_quantity(&self, id: &str, quantity: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE items SET quantity = ? WHERE id = ?")
            .bind(quantity)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;
    use tempfile::TempDir;

    async fn setup_repo() -> (Repository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_db(&temp_dir.path().join("inventory.db"))
            .await
            .expect("init_db failed");
        (Repository::new(pool), temp_dir)
    }

    fn new_item(name: &str, quantity: i64) -> NewItem {
        NewItem {
            name: name.to_string(),
            quantity,
            expiration_date: None,
            created_at: "2025-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let (repo, _temp) = setup_repo().await;

        let mut milk = new_item("Milk", 2);
        milk.expiration_date = Some("2025-01-10".to_string());
        let id = repo.create_item(&milk).await.unwrap();

        let items = repo.list_items().await.unwrap();
        assert_eq!(
            items,
            vec![Item {
                id,
                name: "Milk".to_string(),
                quantity: 2,
                expiration_date: Some("2025-01-10".to_string()),
                created_at: "2025-01-01T00:00:00.000Z".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let (repo, _temp) = setup_repo().await;

        let first = repo.create_item(&new_item("a", 1)).await.unwrap();
        let second = repo.create_item(&new_item("b", 1)).await.unwrap();
        assert!(second > first);

        repo.delete_item(&second.to_string()).await.unwrap();
        let third = repo.create_item(&new_item("c", 1)).await.unwrap();
        assert!(third > second);
    }

    #[tokio::test]
    async fn test_delete_item_reports_rows() {
        let (repo, _temp) = setup_repo().await;
        let id = repo.create_item(&new_item("Eggs", 12)).await.unwrap();

        assert_eq!(repo.delete_item("9999").await.unwrap(), 0);
        assert_eq!(repo.delete_item("abc").await.unwrap(), 0);
        assert_eq!(repo.delete_item(&id.to_string()).await.unwrap(), 1);
        assert!(repo.list_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_all_items() {
        let (repo, _temp) = setup_repo().await;
        repo.create_item(&new_item("a", 1)).await.unwrap();
        repo.create_item(&new_item("b", 2)).await.unwrap();

        assert_eq!(repo.delete_all_items().await.unwrap(), 2);
        assert_eq!(repo.delete_all_items().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_quantity() {
        let (repo, _temp) = setup_repo().await;
        let id = repo.create_item(&new_item("Flour", 3)).await.unwrap();

        assert_eq!(repo.update_quantity(&id.to_string(), -4).await.unwrap(), 1);
        assert_eq!(repo.update_quantity("not-an-id", 1).await.unwrap(), 0);

        let items = repo.list_items().await.unwrap();
        assert_eq!(items[0].quantity, -4);
    }
}
