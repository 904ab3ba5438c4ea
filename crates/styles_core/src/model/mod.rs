//! Response documents produced by style providers.
//!
//! # Responsibility
//! - Define the serializable shapes the hosting API layer emits.
//!
//! # Invariants
//! - Optional metadata fields are omitted from output, never serialized as
//!   `null`.

pub mod document;
