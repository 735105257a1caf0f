//! SQLite-backed customer store implementation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use super::{Customer, CustomerError, CustomerStore, NewCustomer};
use crate::db::Db;

/// SQLite-backed customer store.
pub struct SqliteCustomerStore {
    db: Arc<Db>,
}

impl SqliteCustomerStore {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }

    fn row_to_customer(row: &rusqlite::Row) -> rusqlite::Result<Customer> {
        let created_at_str: String = row.get(3)?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Ok(Customer {
            id: row.get(0)?,
            email: row.get(1)?,
            phone: row.get(2)?,
            created_at,
        })
    }

    fn get_with(conn: &Connection, id: i64) -> Result<Customer, CustomerError> {
        conn.query_row(
            "SELECT id, email, phone, created_at FROM customer WHERE id = ?",
            params![id],
            Self::row_to_customer,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => CustomerError::NotFound(id),
            _ => CustomerError::Database(e.to_string()),
        })
    }

    fn map_insert_error(e: rusqlite::Error, email: &str) -> CustomerError {
        match e {
            rusqlite::Error::SqliteFailure(err, _)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                CustomerError::EmailTaken(email.to_string())
            }
            _ => CustomerError::Database(e.to_string()),
        }
    }
}

impl CustomerStore for SqliteCustomerStore {
    fn insert(&self, customer: &NewCustomer) -> Result<Customer, CustomerError> {
        let conn = self.db.conn();
        let now = Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO customer (email, phone, created_at) VALUES (?, ?, ?)",
            params![&customer.email, &customer.phone, &now],
        )
        .map_err(|e| Self::map_insert_error(e, &customer.email))?;

        Self::get_with(&conn, conn.last_insert_rowid())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Customer>, CustomerError> {
        let conn = self.db.conn();

        match conn.query_row(
            "SELECT id, email, phone, created_at FROM customer WHERE email = ?",
            params![email],
            Self::row_to_customer,
        ) {
            Ok(customer) => Ok(Some(customer)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(CustomerError::Database(e.to_string())),
        }
    }

    fn get(&self, id: i64) -> Result<Customer, CustomerError> {
        let conn = self.db.conn();
        Self::get_with(&conn, id)
    }

    fn list(&self) -> Result<Vec<Customer>, CustomerError> {
        let conn = self.db.conn();

        let mut stmt = conn
            .prepare("SELECT id, email, phone, created_at FROM customer ORDER BY id")
            .map_err(|e| CustomerError::Database(e.to_string()))?;

        let rows = stmt
            .query_map([], Self::row_to_customer)
            .map_err(|e| CustomerError::Database(e.to_string()))?;

        let mut customers = Vec::new();
        for row in rows {
            customers.push(row.map_err(|e| CustomerError::Database(e.to_string()))?);
        }
        Ok(customers)
    }

    fn update(&self, customer: &Customer) -> Result<Customer, CustomerError> {
        let conn = self.db.conn();

        let rows_affected = conn
            .execute(
                "UPDATE customer SET email = ?, phone = ? WHERE id = ?",
                params![&customer.email, &customer.phone, customer.id],
            )
            .map_err(|e| Self::map_insert_error(e, &customer.email))?;

        if rows_affected == 0 {
            return Err(CustomerError::NotFound(customer.id));
        }

        Self::get_with(&conn, customer.id)
    }

    fn delete(&self, id: i64) -> Result<(), CustomerError> {
        let conn = self.db.conn();

        let rows_affected = conn
            .execute("DELETE FROM customer WHERE id = ?", params![id])
            .map_err(|e| match e {
                // Foreign key backstop: the resolver pre-checks, but a
                // review inserted in between still blocks the delete.
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    CustomerError::HasReviews(id)
                }
                _ => CustomerError::Database(e.to_string()),
            })?;

        if rows_affected == 0 {
            return Err(CustomerError::NotFound(id));
        }

        Ok(())
    }

    fn review_count(&self, id: i64) -> Result<u64, CustomerError> {
        let conn = self.db.conn();

        conn.query_row(
            "SELECT COUNT(*) FROM review WHERE customer_id = ?",
            params![id],
            |row| row.get(0),
        )
        .map_err(|e| CustomerError::Database(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_store() -> SqliteCustomerStore {
        SqliteCustomerStore::new(Arc::new(Db::in_memory().unwrap()))
    }

    fn new_customer(email: &str) -> NewCustomer {
        NewCustomer {
            email: email.to_string(),
            phone: Some("0123456789".to_string()),
        }
    }

    #[test]
    fn test_insert_assigns_id() {
        let store = create_test_store();
        let customer = store.insert(&new_customer("a@example.com")).unwrap();

        assert!(customer.id > 0);
        assert_eq!(customer.email, "a@example.com");
        assert_eq!(customer.phone.as_deref(), Some("0123456789"));
    }

    #[test]
    fn test_insert_duplicate_email_is_email_taken() {
        let store = create_test_store();
        store.insert(&new_customer("a@example.com")).unwrap();

        let result = store.insert(&new_customer("a@example.com"));
        assert!(matches!(result, Err(CustomerError::EmailTaken(_))));
    }

    #[test]
    fn test_find_by_email() {
        let store = create_test_store();
        let created = store.insert(&new_customer("a@example.com")).unwrap();

        let found = store.find_by_email("a@example.com").unwrap().unwrap();
        assert_eq!(found.id, created.id);

        assert!(store.find_by_email("b@example.com").unwrap().is_none());
    }

    #[test]
    fn test_get_nonexistent() {
        let store = create_test_store();
        assert!(matches!(store.get(42), Err(CustomerError::NotFound(42))));
    }

    #[test]
    fn test_list_ordered_by_id() {
        let store = create_test_store();
        store.insert(&new_customer("a@example.com")).unwrap();
        store.insert(&new_customer("b@example.com")).unwrap();

        let customers = store.list().unwrap();
        assert_eq!(customers.len(), 2);
        assert!(customers[0].id < customers[1].id);
    }

    #[test]
    fn test_update_replaces_email_and_phone() {
        let store = create_test_store();
        let mut customer = store.insert(&new_customer("a@example.com")).unwrap();

        customer.email = "new@example.com".to_string();
        customer.phone = None;
        let updated = store.update(&customer).unwrap();

        assert_eq!(updated.email, "new@example.com");
        assert!(updated.phone.is_none());
    }

    #[test]
    fn test_update_nonexistent() {
        let store = create_test_store();
        let ghost = Customer {
            id: 42,
            email: "ghost@example.com".to_string(),
            phone: None,
            created_at: Utc::now(),
        };
        assert!(matches!(
            store.update(&ghost),
            Err(CustomerError::NotFound(42))
        ));
    }

    #[test]
    fn test_delete() {
        let store = create_test_store();
        let customer = store.insert(&new_customer("a@example.com")).unwrap();

        store.delete(customer.id).unwrap();
        assert!(matches!(
            store.get(customer.id),
            Err(CustomerError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_nonexistent() {
        let store = create_test_store();
        assert!(matches!(store.delete(42), Err(CustomerError::NotFound(42))));
    }

    #[test]
    fn test_review_count_zero_without_reviews() {
        let store = create_test_store();
        let customer = store.insert(&new_customer("a@example.com")).unwrap();
        assert_eq!(store.review_count(customer.id).unwrap(), 0);
    }
}
