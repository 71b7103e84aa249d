//! Contracts of the external tracking engine the bridge drives.

pub mod engine;
pub mod subject;
pub mod tracker;
pub mod transport;

pub use engine::TrackingEngine;
pub use subject::SubjectController;
pub use tracker::TrackerController;
pub use transport::{CollectorRequest, CollectorResponse, NetworkTransport};
