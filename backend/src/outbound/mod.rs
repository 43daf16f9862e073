//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local user store.
//!
//! Adapters translate between domain types and their storage representation
//! and hold no business rules of their own.

pub mod memory;
