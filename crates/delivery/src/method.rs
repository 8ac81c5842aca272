use async_trait::async_trait;
use courier_mail::Message;

use crate::error::DeliveryError;
use crate::receipt::{DeliveryReceipt, Settings};

/// Strongly-typed delivery method trait with native `async fn`.
///
/// This trait is **not** object-safe because it uses native `async fn` methods
/// (which desugar to opaque `impl Future` return types). If you need dynamic
/// dispatch, use [`DynDeliveryMethod`] instead -- every `DeliveryMethod`
/// automatically implements `DynDeliveryMethod` via a blanket implementation.
pub trait DeliveryMethod: Send + Sync {
    /// Returns the unique name of this delivery method.
    fn name(&self) -> &str;

    /// Deliver the given message.
    fn deliver(
        &self,
        message: &Message,
    ) -> impl std::future::Future<Output = Result<DeliveryReceipt, DeliveryError>> + Send;

    /// Settings exposed to the host. Empty unless overridden.
    fn settings(&self) -> Settings {
        Settings::default()
    }
}

/// Object-safe delivery method trait for use behind `Arc<dyn DynDeliveryMethod>`.
///
/// Implement [`DeliveryMethod`] and rely on the blanket implementation.
#[async_trait]
pub trait DynDeliveryMethod: Send + Sync {
    fn name(&self) -> &str;

    async fn deliver(&self, message: &Message) -> Result<DeliveryReceipt, DeliveryError>;

    fn settings(&self) -> Settings;
}

#[async_trait]
impl<T: DeliveryMethod + Sync> DynDeliveryMethod for T {
    fn name(&self) -> &str {
        DeliveryMethod::name(self)
    }

    async fn deliver(&self, message: &Message) -> Result<DeliveryReceipt, DeliveryError> {
        DeliveryMethod::deliver(self, message).await
    }

    fn settings(&self) -> Settings {
        DeliveryMethod::settings(self)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    struct MockDelivery {
        should_fail: bool,
    }

    impl DeliveryMethod for MockDelivery {
        #[allow(clippy::unnecessary_literal_bound)]
        fn name(&self) -> &str {
            "mock"
        }

        async fn deliver(&self, message: &Message) -> Result<DeliveryReceipt, DeliveryError> {
            if self.should_fail {
                return Err(DeliveryError::Rejected {
                    status: 400,
                    message: "mock failure".into(),
                });
            }
            Ok(DeliveryReceipt::new(202, message.subject.clone()))
        }
    }

    #[tokio::test]
    async fn deliver_success() {
        let method = MockDelivery { should_fail: false };
        let message = Message::new().subject("hi");
        let receipt = DeliveryMethod::deliver(&method, &message).await.unwrap();
        assert_eq!(receipt.status_code, 202);
        assert_eq!(receipt.body, "hi");
    }

    #[tokio::test]
    async fn blanket_dyn_impl() {
        let method: Arc<dyn DynDeliveryMethod> = Arc::new(MockDelivery { should_fail: true });
        assert_eq!(method.name(), "mock");
        assert!(method.settings().is_empty());

        let err = method.deliver(&Message::new()).await.unwrap_err();
        assert!(matches!(err, DeliveryError::Rejected { status: 400, .. }));
    }
}
