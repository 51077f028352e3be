//! Pure business rules shared by the order handlers.
//!
//! Nothing in here touches a collaborator, so every rule can be checked
//! exhaustively against its decision table.

use super::api::ApiResponse;
use super::order::{Amount, Order, OrderPriority, OrderStatus};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Orders strictly above this amount are `high` priority.
pub const HIGH_PRIORITY_THRESHOLD: Decimal = dec!(200);
/// Type A orders strictly above this amount carry a note.
pub const HIGH_VALUE_THRESHOLD: Decimal = dec!(150);
/// API signal at which a type B order stops being `pending`.
pub const API_DATA_THRESHOLD: Decimal = dec!(50);
/// Type B amount separating `processed` from `error`.
pub const TYPE_B_AMOUNT_THRESHOLD: Decimal = dec!(100);

pub const HIGH_VALUE_NOTE: &str = "High value order";

pub fn priority_for(amount: Amount) -> OrderPriority {
    if amount.value() > HIGH_PRIORITY_THRESHOLD {
        OrderPriority::High
    } else {
        OrderPriority::Low
    }
}

/// Assigns the priority of an order from its amount alone.
pub fn update_priority(order: &mut Order) {
    order.priority = priority_for(order.amount);
}

pub fn is_high_value(amount: Amount) -> bool {
    amount.value() > HIGH_VALUE_THRESHOLD
}

/// Resolves the status of a type B order from a received API response.
///
/// Rules are evaluated top to bottom and the first match wins:
///
/// 1. non-success response -> `api_error`
/// 2. flag set -> `pending`
/// 3. data < 50 -> `pending`
/// 4. data >= 50 and amount < 100 -> `processed`
/// 5. data > 50 and amount > 100 -> `error`
/// 6. anything left over (data = 50 or amount = 100) -> `error`
pub fn type_b_status(order: &Order, response: &ApiResponse) -> OrderStatus {
    let amount = order.amount.value();
    let data = response.data;

    if !response.is_success() {
        OrderStatus::ApiError
    } else if order.flag || data < API_DATA_THRESHOLD {
        OrderStatus::Pending
    } else if amount < TYPE_B_AMOUNT_THRESHOLD {
        OrderStatus::Processed
    } else {
        // data > 50 && amount > 100 and the unmatched boundary cases share a state.
        OrderStatus::Error
    }
}

pub fn type_c_status(order: &Order) -> OrderStatus {
    if order.flag {
        OrderStatus::Completed
    } else {
        OrderStatus::InProgress
    }
}
