//! # Provs Core
//!
//! Core library for Provs - a small resource store that keeps typed records
//! as JSON files in a directory tree.
//!
//! This crate provides the storage protocol, its backends and the typed
//! client, independent of any command-line or plugin surface.
//!
//! ## Architecture
//!
//! - **storage**: `Identifiable` contract, `BackendClient` protocol, the
//!   filesystem and in-memory backends, and the typed `Client<T>`
//! - **model**: Entity types stored by the provider (coffees, orders, secret
//!   managers, write-only values)
//! - **provision**: Seeding of default data
//! - **secrets**: Read-modify-write helpers over secret managers
//! - **fs**: Filesystem helpers for atomic replacement

pub mod error;
pub mod fs;
pub mod model;
pub mod provision;
pub mod secrets;
pub mod storage;

pub use error::{Result, StoreError};
pub use storage::{
    BackendClient, Blob, Client, FsBackend, Identifiable, MemoryBackend, ResourceType,
    UpdateStrategy,
};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
