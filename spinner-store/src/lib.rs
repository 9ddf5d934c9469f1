pub mod app_config;
pub mod database;
pub mod saved_repo;
pub mod history_repo;
pub mod memory_repo;
pub mod redis_repo;
pub mod cache;
pub mod providers;

pub use database::DbClient;
pub use redis_repo::RedisClient;
pub use cache::TtlCache;
pub use saved_repo::PgSavedDestinationRepository;
pub use history_repo::PgSpinHistoryRepository;
pub use memory_repo::{InMemorySavedDestinationRepository, InMemorySpinHistoryRepository};
