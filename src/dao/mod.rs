/// Database model definitions.
pub mod models;
/// Player record storage and match resolution operations.
pub mod player_store;
/// Storage abstraction layer for remote store operations.
pub mod storage;
