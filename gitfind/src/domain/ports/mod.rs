//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod lookup_notifier;
mod profile_source;

#[cfg(test)]
pub use lookup_notifier::MockLookupNotifier;
pub use lookup_notifier::LookupNotifier;
#[cfg(test)]
pub use profile_source::MockProfileSource;
pub use profile_source::{ProfileSource, ProfileSourceError};
