use crate::{InMemoryUserStore, RealtimeDbStore, Result as StoreResult, UserStore};

use msg_config::{StoreBackend, StoreConfig};

use std::sync::Arc;

use log::info;

/// Construct the store selected by configuration.
pub fn build_user_store(config: &StoreConfig) -> StoreResult<Arc<dyn UserStore>> {
    match config.backend {
        StoreBackend::Memory => {
            info!("User store: in-memory (records are lost on exit)");
            Ok(Arc::new(InMemoryUserStore::new()))
        }
        StoreBackend::Realtime => {
            let store = RealtimeDbStore::from_config(config)?;
            info!(
                "User store: realtime database at {}",
                config.base_url.as_deref().unwrap_or_default()
            );
            Ok(Arc::new(store))
        }
    }
}
