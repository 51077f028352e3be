use super::handlers::{self, absorb};
use crate::domain::order::{Order, OrderStatus, OrderType};
use crate::domain::ports::{ApiClientBox, OrderExporterBox, OrderRepositoryBox};
use crate::domain::rules;
use crate::error::{Result, Stage};
use tracing::{debug, error};

/// Runs a single order through its type handler, the priority rule and
/// persistence.
///
/// `OrderDispatcher` owns every collaborator an order can touch. It never
/// lets a modeled failure escape: those end up as the order's status.
pub struct OrderDispatcher {
    api_client: ApiClientBox,
    repository: OrderRepositoryBox,
    exporter: OrderExporterBox,
}

impl OrderDispatcher {
    /// Creates a new `OrderDispatcher`.
    ///
    /// # Arguments
    ///
    /// * `api_client` - The external API consulted by type B orders.
    /// * `repository` - Where each order's final status and priority are saved.
    /// * `exporter` - The export sink for type A orders.
    pub fn new(
        api_client: ApiClientBox,
        repository: OrderRepositoryBox,
        exporter: OrderExporterBox,
    ) -> Self {
        Self {
            api_client,
            repository,
            exporter,
        }
    }

    /// Computes the status of an order with the handler for its type.
    ///
    /// Unknown types are recorded as `unknown_type` without touching any
    /// collaborator.
    pub async fn process_order_by_type(&self, order: &mut Order) -> Result<()> {
        match order.r#type {
            OrderType::A => handlers::process_type_a(order, self.exporter.as_ref()).await,
            OrderType::B => handlers::process_type_b(order, self.api_client.as_ref()).await,
            OrderType::C => {
                handlers::process_type_c(order);
                Ok(())
            }
            OrderType::Other(_) => {
                order.status = OrderStatus::UnknownType;
                Ok(())
            }
        }
    }

    /// Processes one order end to end and reports whether it went through
    /// cleanly.
    ///
    /// The priority is assigned even when dispatch fails. A database failure
    /// while saving is recorded as `db_error` and reported as `false`; a
    /// failure escaping dispatch skips persistence and is reported as `false`.
    pub async fn process_single_order(&self, order: &mut Order) -> bool {
        let dispatched = self.process_order_by_type(order).await;
        rules::update_priority(order);

        if let Err(e) = dispatched {
            error!(order_id = order.id, error = %e, "Order dispatch failed");
            return false;
        }

        let saved = self
            .repository
            .update_order_status(order.id, order.status, order.priority)
            .await;

        match saved {
            Ok(()) => {
                debug!(
                    order_id = order.id,
                    status = %order.status,
                    priority = %order.priority,
                    "Order processed"
                );
                true
            }
            Err(e) => {
                if let Err(e) = absorb(order, Stage::Persist, e) {
                    error!(order_id = order.id, error = %e, "Order persistence failed");
                }
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::mocks::{MockApi, MockExporter, MockRepository};
    use crate::domain::api::ApiResponse;
    use crate::domain::order::{Amount, OrderPriority};
    use crate::error::OrderError;
    use mockall::predicate::eq;
    use rust_decimal_macros::dec;

    fn order(id: u32, kind: &str, amount: rust_decimal::Decimal, flag: bool) -> Order {
        Order::new(id, kind, Amount::new(amount).unwrap(), flag)
    }

    fn dispatcher(api: MockApi, repository: MockRepository, exporter: MockExporter) -> OrderDispatcher {
        OrderDispatcher::new(Box::new(api), Box::new(repository), Box::new(exporter))
    }

    #[tokio::test]
    async fn test_dispatch_routes_by_type() {
        let mut api = MockApi::new();
        api.expect_call_api()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(ApiResponse::success(dec!(60))));
        let mut exporter = MockExporter::new();
        exporter
            .expect_export()
            .withf(|order: &Order| order.id == 1)
            .times(1)
            .returning(|_| Ok(()));
        let dispatcher = dispatcher(api, MockRepository::new(), exporter);

        let mut a = order(1, "A", dec!(100.0), false);
        let mut b = order(2, "B", dec!(150.0), true);
        let mut c = order(3, "C", dec!(250.0), false);
        dispatcher.process_order_by_type(&mut a).await.unwrap();
        dispatcher.process_order_by_type(&mut b).await.unwrap();
        dispatcher.process_order_by_type(&mut c).await.unwrap();

        assert_eq!(a.status, OrderStatus::Exported);
        assert_eq!(b.status, OrderStatus::Pending);
        assert_eq!(c.status, OrderStatus::InProgress);
    }

    #[tokio::test]
    async fn test_unknown_type_touches_no_collaborator() {
        let dispatcher = dispatcher(MockApi::new(), MockRepository::new(), MockExporter::new());

        let mut order = order(4, "D", dec!(300.0), true);
        dispatcher.process_order_by_type(&mut order).await.unwrap();

        assert_eq!(order.status, OrderStatus::UnknownType);
    }

    #[tokio::test]
    async fn test_single_order_saves_status_and_priority() {
        let mut repository = MockRepository::new();
        repository
            .expect_update_order_status()
            .with(eq(3), eq(OrderStatus::Completed), eq(OrderPriority::High))
            .times(1)
            .returning(|_, _, _| Ok(()));
        let dispatcher = dispatcher(MockApi::new(), repository, MockExporter::new());

        let mut order = order(3, "C", dec!(250.0), true);
        assert!(dispatcher.process_single_order(&mut order).await);
        assert_eq!(order.priority, OrderPriority::High);
    }

    #[tokio::test]
    async fn test_error_status_is_persisted_as_is() {
        let mut api = MockApi::new();
        api.expect_call_api()
            .returning(|_| Ok(ApiResponse::success(dec!(60))));
        let mut repository = MockRepository::new();
        repository
            .expect_update_order_status()
            .with(eq(1), eq(OrderStatus::Error), eq(OrderPriority::Low))
            .times(1)
            .returning(|_, _, _| Ok(()));
        let dispatcher = dispatcher(api, repository, MockExporter::new());

        let mut order = order(1, "B", dec!(180.0), false);
        assert!(dispatcher.process_single_order(&mut order).await);
        assert_eq!(order.status, OrderStatus::Error);
    }

    #[tokio::test]
    async fn test_database_failure_becomes_db_error() {
        let mut repository = MockRepository::new();
        repository
            .expect_update_order_status()
            .with(eq(1), eq(OrderStatus::Exported), eq(OrderPriority::High))
            .times(1)
            .returning(|_, _, _| Err(OrderError::DatabaseError("connection lost".to_string())));
        let mut exporter = MockExporter::new();
        exporter.expect_export().returning(|_| Ok(()));
        let dispatcher = dispatcher(MockApi::new(), repository, exporter);

        let mut order = order(1, "A", dec!(250.0), false);
        assert!(!dispatcher.process_single_order(&mut order).await);
        assert_eq!(order.status, OrderStatus::DbError);
        assert_eq!(order.priority, OrderPriority::High);
    }

    #[tokio::test]
    async fn test_absorbed_handler_failures_still_persist() {
        let mut api = MockApi::new();
        api.expect_call_api()
            .returning(|_| Err(OrderError::ApiError("timeout".to_string())));
        let mut repository = MockRepository::new();
        repository
            .expect_update_order_status()
            .with(eq(2), eq(OrderStatus::ApiFailure), eq(OrderPriority::Low))
            .times(1)
            .returning(|_, _, _| Ok(()));
        let dispatcher = dispatcher(api, repository, MockExporter::new());

        let mut order = order(2, "B", dec!(150.0), true);
        assert!(dispatcher.process_single_order(&mut order).await);
        assert_eq!(order.status, OrderStatus::ApiFailure);
    }

    #[tokio::test]
    async fn test_escaped_failure_skips_persistence_but_keeps_priority() {
        let mut exporter = MockExporter::new();
        exporter
            .expect_export()
            .returning(|_| Err(OrderError::InternalError("exporter crashed".into())));
        let mut repository = MockRepository::new();
        repository.expect_update_order_status().never();
        let dispatcher = dispatcher(MockApi::new(), repository, exporter);

        let mut order = order(1, "A", dec!(500.0), false);
        assert!(!dispatcher.process_single_order(&mut order).await);
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.priority, OrderPriority::High);
    }
}
