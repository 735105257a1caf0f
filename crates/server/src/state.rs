use reviews_core::{Config, CustomerResolver, ReviewIngestionService, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    customers: CustomerResolver,
    reviews: ReviewIngestionService,
}

impl AppState {
    pub fn new(
        config: Config,
        customers: CustomerResolver,
        reviews: ReviewIngestionService,
    ) -> Self {
        Self {
            config,
            customers,
            reviews,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn customers(&self) -> &CustomerResolver {
        &self.customers
    }

    pub fn reviews(&self) -> &ReviewIngestionService {
        &self.reviews
    }
}
