use customer_core_api::CustomerService;
use std::sync::Arc;

/// Shared handler state: the service behind a trait object so tests can swap the store
#[derive(Clone)]
pub struct AppState {
    customer_service: Arc<dyn CustomerService>,
}

impl AppState {
    pub fn new(customer_service: Arc<dyn CustomerService>) -> Self {
        Self { customer_service }
    }

    pub fn customer_service(&self) -> &dyn CustomerService {
        self.customer_service.as_ref()
    }
}
