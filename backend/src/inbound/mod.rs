//! Inbound adapters translating external requests into store calls.

pub mod http;
