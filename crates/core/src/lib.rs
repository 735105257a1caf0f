pub mod classifier;
pub mod config;
pub mod customer;
pub mod db;
pub mod review;
pub mod testing;

pub use classifier::{
    classifier_from_config, ClassifierError, HeuristicClassifier, RemoteClassifier, Sentiment,
    SentimentClassifier,
};
pub use config::{
    load_config, load_config_from_str, validate_config, ClassifierConfig, Config, ConfigError,
    DatabaseConfig, SanitizedConfig, ServerConfig,
};
pub use customer::{
    Customer, CustomerError, CustomerResolver, CustomerStore, CustomerUpdate, NewCustomer,
    SqliteCustomerStore,
};
pub use db::{Db, DbError};
pub use review::{
    CustomerRef, Review, ReviewError, ReviewIngestionService, ReviewStore, ReviewSubmission,
    SqliteReviewStore,
};
