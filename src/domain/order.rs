use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Open,
    Paid,
    /// Declared for orders abandoned by the workflow; no current path sets it.
    Failed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Open => "OPEN",
            OrderStatus::Paid => "PAID",
            OrderStatus::Failed => "FAILED",
        };
        f.write_str(name)
    }
}

/// A unit of purchase whose status lifecycle is gated by authorization.
///
/// The identity is assigned once at creation and the status only moves
/// through `set_status`, so callers cannot bypass the workflow's
/// transitions.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Order {
    id: Uuid,
    status: OrderStatus,
}

impl Order {
    /// Creates an order with a fresh identity, starting out `Open`.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            status: OrderStatus::Open,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Moves the order into `status`.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}
