//! Application layer containing the order processing orchestration.
//!
//! `OrderDispatcher` takes one order through its type handler, the priority
//! rule and persistence; `BatchOrchestrator` runs a whole batch through the
//! dispatcher and writes the report. Orders are processed strictly one after
//! another, in input order.

pub mod dispatcher;
pub mod handlers;
#[cfg(test)]
pub(crate) mod mocks;
pub mod orchestrator;
