//! Outbound adapters implementing domain ports for external services.
//!
//! Adapters are thin translators between domain types and wire
//! representations; they contain no aggregation logic.

pub mod reddit;
