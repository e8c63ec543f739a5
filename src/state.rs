use std::sync::Arc;

use crate::config::Config;
use crate::revalidate::ListingCache;
use crate::store::Store;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<dyn Store>,
    pub cache: ListingCache,
    pub config: Config,
}
