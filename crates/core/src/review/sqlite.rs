//! SQLite-backed review store implementation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rusqlite::params;

use super::{Review, ReviewError, ReviewStore};
use crate::classifier::Sentiment;
use crate::customer::{Customer, CustomerError};
use crate::db::Db;

/// SQLite-backed review store. Reads join the owning customer row.
pub struct SqliteReviewStore {
    db: Arc<Db>,
}

impl SqliteReviewStore {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }

    fn parse_timestamp(raw: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now())
    }

    fn row_to_review(row: &rusqlite::Row) -> rusqlite::Result<Review> {
        let sentiment_str: String = row.get(2)?;
        let review_created_at: String = row.get(3)?;
        let customer_created_at: String = row.get(7)?;

        Ok(Review {
            id: row.get(0)?,
            text: row.get(1)?,
            sentiment: Sentiment::parse(&sentiment_str).unwrap_or(Sentiment::Neutral),
            created_at: Self::parse_timestamp(&review_created_at),
            customer: Customer {
                id: row.get(4)?,
                email: row.get(5)?,
                phone: row.get(6)?,
                created_at: Self::parse_timestamp(&customer_created_at),
            },
        })
    }
}

impl ReviewStore for SqliteReviewStore {
    fn insert(
        &self,
        text: &str,
        sentiment: Sentiment,
        customer: &Customer,
    ) -> Result<Review, ReviewError> {
        let conn = self.db.conn();
        let now = Utc::now();

        conn.execute(
            "INSERT INTO review (text, sentiment, customer_id, created_at) VALUES (?, ?, ?, ?)",
            params![text, sentiment.as_str(), customer.id, &now.to_rfc3339()],
        )
        .map_err(|e| match e {
            // Foreign key violation: the resolved customer vanished.
            rusqlite::Error::SqliteFailure(err, _)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                ReviewError::Customer(CustomerError::NotFound(customer.id))
            }
            _ => ReviewError::Database(e.to_string()),
        })?;

        Ok(Review {
            id: conn.last_insert_rowid(),
            text: text.to_string(),
            sentiment,
            customer: customer.clone(),
            created_at: now,
        })
    }

    fn find(&self, sentiment: Option<Sentiment>) -> Result<Vec<Review>, ReviewError> {
        let conn = self.db.conn();

        let base = "SELECT r.id, r.text, r.sentiment, r.created_at,
                           c.id, c.email, c.phone, c.created_at
                    FROM review r
                    JOIN customer c ON c.id = r.customer_id";
        let sql = match sentiment {
            Some(_) => format!("{base} WHERE r.sentiment = ? ORDER BY r.id"),
            None => format!("{base} ORDER BY r.id"),
        };

        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| ReviewError::Database(e.to_string()))?;

        let rows = match sentiment {
            Some(sentiment) => stmt.query_map(params![sentiment.as_str()], Self::row_to_review),
            None => stmt.query_map([], Self::row_to_review),
        }
        .map_err(|e| ReviewError::Database(e.to_string()))?;

        let mut reviews = Vec::new();
        for row in rows {
            reviews.push(row.map_err(|e| ReviewError::Database(e.to_string()))?);
        }
        Ok(reviews)
    }

    fn delete(&self, id: i64) -> Result<(), ReviewError> {
        let conn = self.db.conn();

        let rows_affected = conn
            .execute("DELETE FROM review WHERE id = ?", params![id])
            .map_err(|e| ReviewError::Database(e.to_string()))?;

        if rows_affected == 0 {
            return Err(ReviewError::NotFound(id));
        }

        Ok(())
    }
}
