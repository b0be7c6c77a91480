//! Storage layer - database entities and repositories

pub mod entity;
pub mod mapper;
pub mod memory;
pub mod migrations;
pub mod repositories;

pub use memory::InMemoryPageRepository;
pub use migrations::Migrator;
pub use repositories::SeaOrmPageRepository;
