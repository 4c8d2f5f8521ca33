//! Data models for storage (profiles, reports, forward log).

mod forward_record;
mod profile;
mod report_record;

pub use forward_record::{ForwardRecord, NewForward};
pub use profile::{Profile, ProfileUpdate};
pub use report_record::ReportRecord;
