//! Entity types stored by the provider.
//!
//! JSON field names match the records already on disk, so renaming a Rust
//! field must keep its `serde` name.

pub mod coffee;
pub mod order;
pub mod secret_manager;
pub mod write_only;

pub use coffee::{Coffee, Ingredient};
pub use order::{Order, OrderItem};
pub use secret_manager::SecretManager;
pub use write_only::WriteOnly;
