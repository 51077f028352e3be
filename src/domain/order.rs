use crate::error::OrderError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative order amount.
///
/// This is a wrapper around `rust_decimal::Decimal` so that a negative amount
/// can never reach the business rules.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, OrderError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(OrderError::ValidationError(
                "Amount must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = OrderError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The business flow an order belongs to.
///
/// Unrecognized tags are kept verbatim so they can be reported back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum OrderType {
    A,
    B,
    C,
    Other(String),
}

impl OrderType {
    pub fn as_str(&self) -> &str {
        match self {
            OrderType::A => "A",
            OrderType::B => "B",
            OrderType::C => "C",
            OrderType::Other(tag) => tag,
        }
    }
}

impl From<String> for OrderType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "A" => OrderType::A,
            "B" => OrderType::B,
            "C" => OrderType::C,
            _ => OrderType::Other(tag),
        }
    }
}

impl From<&str> for OrderType {
    fn from(tag: &str) -> Self {
        OrderType::from(tag.to_string())
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    New,
    Exported,
    ExportFailed,
    Processed,
    Pending,
    Error,
    ApiError,
    ApiFailure,
    Completed,
    InProgress,
    UnknownType,
    DbError,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Exported => "exported",
            OrderStatus::ExportFailed => "export_failed",
            OrderStatus::Processed => "processed",
            OrderStatus::Pending => "pending",
            OrderStatus::Error => "error",
            OrderStatus::ApiError => "api_error",
            OrderStatus::ApiFailure => "api_failure",
            OrderStatus::Completed => "completed",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::UnknownType => "unknown_type",
            OrderStatus::DbError => "db_error",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderPriority {
    High,
    #[default]
    Low,
}

impl OrderPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderPriority::High => "high",
            OrderPriority::Low => "low",
        }
    }
}

impl fmt::Display for OrderPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of work flowing through one batch run.
///
/// `status`, `priority` and `note` are filled in by the dispatcher; everything
/// else comes from the order source.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Order {
    pub id: u32,
    pub r#type: OrderType,
    pub amount: Amount,
    pub flag: bool,
    #[serde(skip, default)]
    pub status: OrderStatus,
    #[serde(skip, default)]
    pub priority: OrderPriority,
    #[serde(skip, default)]
    pub note: Option<String>,
}

impl Order {
    pub fn new(id: u32, r#type: impl Into<OrderType>, amount: Amount, flag: bool) -> Self {
        Self {
            id,
            r#type: r#type.into(),
            amount,
            flag,
            status: OrderStatus::New,
            priority: OrderPriority::Low,
            note: None,
        }
    }
}
