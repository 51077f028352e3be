use super::dispatcher::OrderDispatcher;
use crate::domain::order::Order;
use crate::domain::ports::OrderSourceBox;
use crate::error::Result;
use crate::interfaces::csv::report_writer::ReportWriter;
use std::io::Write;
use tracing::{error, info, warn};

/// Drives a whole batch: every order of the run goes through the dispatcher
/// and ends up as one row of the report.
pub struct BatchOrchestrator {
    source: OrderSourceBox,
    dispatcher: OrderDispatcher,
}

impl BatchOrchestrator {
    pub fn new(source: OrderSourceBox, dispatcher: OrderDispatcher) -> Self {
        Self { source, dispatcher }
    }

    /// Processes `orders` in input order and writes the report into `report`.
    ///
    /// Returns `Ok(false)` when there is nothing to process or when any order
    /// reported a failure; a failing order never stops the remaining ones.
    /// Errors are reserved for the report itself.
    pub async fn run<W: Write>(&self, orders: &mut [Order], report: W) -> Result<bool> {
        let writer = ReportWriter::new(report)?;
        self.run_into(orders, writer).await
    }

    async fn run_into<W: Write>(
        &self,
        orders: &mut [Order],
        mut writer: ReportWriter<W>,
    ) -> Result<bool> {
        if orders.is_empty() {
            warn!("No orders to process");
            writer.finish()?;
            return Ok(false);
        }

        let mut failed = 0usize;
        for order in orders.iter_mut() {
            if !self.dispatcher.process_single_order(order).await {
                failed += 1;
            }
        }

        writer.write_orders(orders.iter())?;
        writer.finish()?;

        info!(total = orders.len(), failed, "Batch finished");
        Ok(failed == 0)
    }

    /// Loads the pending orders of `user_id` and runs them as one batch.
    ///
    /// The report header is written before the orders are loaded, so the
    /// report is never left empty. Every failure to load the orders or to
    /// produce the report turns into `false`.
    pub async fn process_orders<W: Write>(&self, user_id: u32, report: W) -> bool {
        let writer = match ReportWriter::new(report) {
            Ok(writer) => writer,
            Err(e) => {
                error!(user_id, error = %e, "Failed to write report");
                return false;
            }
        };

        let mut orders = match self.source.orders_for_user(user_id).await {
            Ok(orders) => orders,
            Err(e) => {
                error!(user_id, error = %e, "Failed to load orders");
                if let Err(e) = writer.finish() {
                    error!(user_id, error = %e, "Failed to write report");
                }
                return false;
            }
        };

        match self.run_into(&mut orders, writer).await {
            Ok(success) => success,
            Err(e) => {
                error!(user_id, error = %e, "Failed to write report");
                false
            }
        }
    }
}
