//! User-record store capability and its implementations.
//!
//! The account flow only ever needs two operations against the store:
//! read the value at a key and replace the value at a key. There are no
//! range queries and no transactions; concurrent writers to one key are
//! last-write-wins.

pub mod error;
pub mod memory_store;
pub mod realtime_store;
pub mod record_lookup;
pub mod store_factory;
pub mod user_store;

pub use error::{Result, StoreError};
pub use memory_store::InMemoryUserStore;
pub use realtime_store::RealtimeDbStore;
pub use record_lookup::RecordLookup;
pub use store_factory::build_user_store;
pub use user_store::UserStore;
