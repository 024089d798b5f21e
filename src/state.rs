//! Shared application state for all routes. Nothing in it is mutated after startup.

use crate::prices::PriceTable;
use crate::store::Database;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub prices: Arc<PriceTable>,
}

impl AppState {
    pub fn new(db: Database, prices: PriceTable) -> Self {
        Self {
            db,
            prices: Arc::new(prices),
        }
    }
}
