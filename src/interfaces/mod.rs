//! Adapters between the application and the outside world: CSV inputs, the
//! type A export file and the batch report.

pub mod csv;
