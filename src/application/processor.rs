use crate::domain::order::{Order, OrderStatus};
use crate::domain::ports::AuthorizerBox;
use crate::error::{PaymentError, Result};
use tracing::info;

/// The entry point for taking payment on an order.
///
/// `PaymentProcessor` gates the order's status transition on a successful
/// authorization attempt. The authorizer is injected behind the `Authorizer`
/// contract, which keeps the workflow testable against stub variants.
pub struct PaymentProcessor {
    authorizer: AuthorizerBox,
}

impl PaymentProcessor {
    /// Creates a `PaymentProcessor` around the injected authorizer.
    pub fn new(authorizer: AuthorizerBox) -> Self {
        Self { authorizer }
    }

    /// Runs one authorization attempt and, on success, marks the order paid.
    ///
    /// A failed attempt returns `PaymentError::AuthorizationFailed` and
    /// leaves the order untouched, so there is nothing to roll back.
    pub async fn pay(&self, order: &mut Order) -> Result<()> {
        self.authorizer.authorize().await?;
        if !self.authorizer.is_authorized().await {
            return Err(PaymentError::AuthorizationFailed);
        }

        info!("processing payment for order {}", order.id());
        order.set_status(OrderStatus::Paid);
        info!("order {} is {}", order.id(), order.status());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::domain::ports::Authorizer;

    struct StubAuthorizer {
        verdict: bool,
    }

    #[async_trait]
    impl Authorizer for StubAuthorizer {
        async fn authorize(&self) -> Result<()> {
            Ok(())
        }

        async fn is_authorized(&self) -> bool {
            self.verdict
        }
    }

    #[tokio::test]
    async fn test_pay_marks_order_paid_on_success() {
        let processor = PaymentProcessor::new(Box::new(StubAuthorizer { verdict: true }));
        let mut order = Order::new();

        processor.pay(&mut order).await.unwrap();

        assert_eq!(order.status(), OrderStatus::Paid);
    }

    #[tokio::test]
    async fn test_pay_fails_without_authorization() {
        let processor = PaymentProcessor::new(Box::new(StubAuthorizer { verdict: false }));
        let mut order = Order::new();

        let result = processor.pay(&mut order).await;

        assert!(matches!(result, Err(PaymentError::AuthorizationFailed)));
        assert_eq!(order.status(), OrderStatus::Open);
    }
}
