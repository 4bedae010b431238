//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod record_store;
pub mod view;

pub use record_store::RecordStore;
pub use view::FormView;
