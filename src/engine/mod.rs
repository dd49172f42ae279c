mod core;
mod messages;
mod worker;

pub use {
    core::RadarEngine,
    messages::{JobRequest, JobResult},
    worker::{build_report, process_request},
};
