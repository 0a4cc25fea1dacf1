//! Post storage: SeaORM-backed repositories and an in-memory fallback.

mod connections;
mod memory;

#[cfg(feature = "database")]
mod base;
#[cfg(feature = "database")]
pub mod entity;
#[cfg(feature = "database")]
mod post_repo;

pub use connections::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "database")]
pub use base::SeaOrmBaseRepository;
#[cfg(feature = "database")]
pub use connections::connect;
#[cfg(feature = "database")]
pub use post_repo::SeaOrmPostRepository;

#[cfg(feature = "database")]
#[cfg(test)]
mod tests;
