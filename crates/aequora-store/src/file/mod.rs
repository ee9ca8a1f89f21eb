//! File-backed store provider.

pub mod store;

pub use store::FileStore;
