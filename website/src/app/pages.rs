pub mod dashboard;
pub mod destination;
