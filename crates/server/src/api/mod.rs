pub mod customers;
pub mod error;
pub mod handlers;
pub mod reviews;
pub mod routes;

pub use routes::create_router;
