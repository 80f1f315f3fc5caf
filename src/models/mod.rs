pub mod enums;
mod event;
mod finding;

pub use event::MedicalEvent;
pub use finding::IncidentalFinding;
