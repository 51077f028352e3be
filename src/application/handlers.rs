use crate::domain::order::{Order, OrderStatus};
use crate::domain::ports::{ApiClient, OrderExporter};
use crate::domain::rules;
use crate::error::{OrderError, Result, Stage};
use tracing::warn;

/// Records the status a modeled failure maps to, or hands the failure back.
pub(crate) fn absorb(order: &mut Order, stage: Stage, err: OrderError) -> Result<()> {
    match err.absorbed_status(stage) {
        Some(status) => {
            warn!(
                order_id = order.id,
                ?stage,
                %status,
                error = %err,
                "Order failure absorbed into status"
            );
            order.status = status;
            Ok(())
        }
        None => Err(err),
    }
}

/// Exports a type A order.
///
/// High value orders get their note before the export so it travels with the
/// exported row.
pub async fn process_type_a(order: &mut Order, exporter: &dyn OrderExporter) -> Result<()> {
    if rules::is_high_value(order.amount) {
        order.note = Some(rules::HIGH_VALUE_NOTE.to_string());
    }

    match exporter.export(order).await {
        Ok(()) => {
            order.status = OrderStatus::Exported;
            Ok(())
        }
        Err(e) => absorb(order, Stage::Export, e),
    }
}

/// Resolves a type B order against the external API.
pub async fn process_type_b(order: &mut Order, api_client: &dyn ApiClient) -> Result<()> {
    match api_client.call_api(order.id).await {
        Ok(response) => {
            order.status = rules::type_b_status(order, &response);
            Ok(())
        }
        Err(e) => absorb(order, Stage::ApiCall, e),
    }
}

pub fn process_type_c(order: &mut Order) {
    order.status = rules::type_c_status(order);
}
