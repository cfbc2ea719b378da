//! Venue availability: loading a dataset of opening hours and answering
//! "which venues can take this booking".

pub mod dataset;
pub mod error;
pub mod index;
pub mod request;
pub mod snapshot;
pub mod venue;

pub use index::AvailabilityIndex;
pub use request::BookingRequest;
pub use snapshot::SharedIndex;
pub use venue::Venue;
