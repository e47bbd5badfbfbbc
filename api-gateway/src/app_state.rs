use crate::proxy::ServiceClient;
use crate::routes::RouteTable;
use std::sync::Arc;

/// Application state threaded into every handler. Built once at
/// startup; the route table is immutable afterwards.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub client: ServiceClient,
}

impl AppState {
    pub fn new(routes: RouteTable, client: ServiceClient) -> Self {
        Self {
            routes: Arc::new(routes),
            client,
        }
    }
}
