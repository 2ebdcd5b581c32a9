//! Storage module - uploaded media

pub mod local;

pub use local::LocalBlobStore;
