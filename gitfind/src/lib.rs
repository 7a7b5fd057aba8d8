//! Look up a GitHub profile and its public repositories.
//!
//! The crate is laid out as a small hexagon:
//!
//! - [`domain`] owns the lookup flow, its state container, and the driven
//!   ports it calls out through.
//! - [`outbound`] provides the reqwest-backed GitHub adapter.
//! - [`inbound`] provides the terminal presentation surface.
//! - [`config`] loads runtime settings through `OrthoConfig`.
//!
//! # Example
//!
//! ```
//! use gitfind::domain::{ProfileRecord, ResultStore, SubResource, SubResourceId};
//!
//! let mut store = ResultStore::new();
//! store.set_from_lookup(
//!     ProfileRecord {
//!         display_name: Some("The Octocat".to_owned()),
//!         login_name: "octocat".to_owned(),
//!         avatar_reference: "u.png".to_owned(),
//!         biography: None,
//!     },
//!     vec![SubResource {
//!         id: SubResourceId::new(1),
//!         title: "Hello-World".to_owned(),
//!         description: Some("demo".to_owned()),
//!     }],
//! );
//! assert!(store.remove_sub_resource(SubResourceId::new(1)));
//! assert!(store.sub_resources().is_empty());
//! ```

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
