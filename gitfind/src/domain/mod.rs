//! Domain primitives and the profile lookup flow.
//!
//! Purpose: model the lookup of a profile and its sub-resources without
//! knowing which remote service answers or how results are displayed.
//!
//! Public surface:
//! - `ProfileLookupFlow`: state container driven by the presentation layer.
//! - `ProfileLookupService`: the two-step remote lookup.
//! - `ResultStore`, `IdentifierInput`, `LookupSequence`: the flow's parts.
//! - `ports`: driven ports implemented by outbound and inbound adapters.

pub mod ports;

mod error;
mod identifier;
mod lookup_flow;
mod lookup_sequence;
mod lookup_service;
mod profile;
mod result_store;

pub use self::error::LookupError;
pub use self::identifier::IdentifierInput;
pub use self::lookup_flow::{FlowOutcome, LookupView, ProfileLookupFlow};
pub use self::lookup_sequence::{LookupSequence, LookupToken};
pub use self::lookup_service::{LookupOutcome, ProfileLookupService};
pub use self::profile::{ProfileRecord, SubResource, SubResourceId};
pub use self::result_store::ResultStore;
