//! Customer records and identity resolution.
//!
//! Customers are unique by email. Reviews reference customers by id;
//! the resolver either looks up an existing record or creates one on
//! first contact.

mod resolver;
mod sqlite;
mod types;

pub use resolver::CustomerResolver;
pub use sqlite::SqliteCustomerStore;
pub use types::*;

/// Trait for customer persistence.
pub trait CustomerStore: Send + Sync {
    /// Insert a new customer. The store's unique email index is the
    /// authoritative guard against duplicates; a violated constraint
    /// comes back as [`CustomerError::EmailTaken`].
    fn insert(&self, customer: &NewCustomer) -> Result<Customer, CustomerError>;

    /// Look up a customer by exact email.
    fn find_by_email(&self, email: &str) -> Result<Option<Customer>, CustomerError>;

    /// Get a customer by id, failing with NotFound if absent.
    fn get(&self, id: i64) -> Result<Customer, CustomerError>;

    /// All stored customers.
    fn list(&self) -> Result<Vec<Customer>, CustomerError>;

    /// Replace email and phone of an existing customer.
    fn update(&self, customer: &Customer) -> Result<Customer, CustomerError>;

    /// Delete a customer by id.
    fn delete(&self, id: i64) -> Result<(), CustomerError>;

    /// Number of reviews owned by a customer. Deletion is restricted
    /// while this is non-zero.
    fn review_count(&self, id: i64) -> Result<u64, CustomerError>;
}
