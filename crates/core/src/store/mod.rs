//! In-memory data store and the snapshot shape consumed by read-time views.
//!
//! Real persistence belongs to an external backend; `MemoryStore` carries
//! the write-side rules (schedule generation on enrollment, cascading
//! deletes, settlement) over a `GymSnapshot`.

pub mod error;
pub mod memory;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::StoreError;
pub use memory::{GymStore, MemoryStore};
pub use snapshot::{GymSnapshot, RawSnapshot};
