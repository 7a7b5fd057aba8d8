//! Inbound adapters translating user interaction into flow operations.

pub mod terminal;
