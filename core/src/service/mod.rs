pub mod tracker_service;

#[cfg(test)]
mod tracker_service_test;

pub use tracker_service::TrackerService;
