pub mod app_config;
pub mod database;
pub mod memory;
pub mod offer_repo;

pub use database::DbClient;
pub use memory::MemoryOfferStore;
pub use offer_repo::PostgresOfferStore;
