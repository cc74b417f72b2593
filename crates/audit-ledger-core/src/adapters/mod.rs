//! # Storage Adapters Module
//!
//! Infrastructure implementations of the core storage traits.

mod memory_store;

pub use memory_store::InMemoryAuditStore;
