//! Provisioning trait and service wrapper.
//!
//! The host platform dispatches order lifecycle calls through the
//! [`ProvisionProvider`] trait. [`ProvisionService`] wraps any provider with
//! structured logging; it never alters dispatch semantics, retries, or
//! swallows errors.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::{Order, OrderEvent, Result, TRACING_TARGET};

/// Auxiliary data bag the host passes alongside a lifecycle call.
///
/// Accepted but unused by the current plugin; carried so the trait matches
/// the host's calling convention.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvisionData(pub serde_json::Value);

impl ProvisionData {
    /// An empty data bag.
    pub fn empty() -> Self {
        Self(serde_json::Value::Null)
    }
}

/// Core trait for order-provisioning plugins.
///
/// One operation per lifecycle event. Operations are independent and
/// stateless; no ordering is imposed between them, and success communicates
/// nothing beyond `Ok(())`.
#[async_trait::async_trait]
pub trait ProvisionProvider: Send + Sync {
    /// Called when a new order is created.
    async fn create(&self, order: &Order, data: &ProvisionData) -> Result<()>;

    /// Called when an order expires or is suspended by an admin.
    async fn suspend(&self, order: &Order, data: &ProvisionData) -> Result<()>;

    /// Called when an order is activated or unsuspended by an admin.
    async fn unsuspend(&self, order: &Order, data: &ProvisionData) -> Result<()>;

    /// Called when an order is terminated.
    async fn terminate(&self, order: &Order, data: &ProvisionData) -> Result<()>;
}

/// Provisioning service wrapper with observability.
///
/// The inner provider is wrapped in `Arc` for cheap cloning.
#[derive(Clone)]
pub struct ProvisionService {
    inner: Arc<dyn ProvisionProvider>,
}

impl fmt::Debug for ProvisionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvisionService").finish_non_exhaustive()
    }
}

impl ProvisionService {
    /// Create a new provisioning service wrapper.
    pub fn new<P>(provider: P) -> Self
    where
        P: ProvisionProvider + 'static,
    {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Dispatches one lifecycle event to the wrapped provider.
    pub async fn dispatch(
        &self,
        event: OrderEvent,
        order: &Order,
        data: &ProvisionData,
    ) -> Result<()> {
        let started_at = Instant::now();

        tracing::debug!(
            target: TRACING_TARGET,
            event = %event.label(),
            order_id = order.id,
            user = %order.user.username,
            package = %order.package.name,
            "Dispatching lifecycle event"
        );

        let result = match event {
            OrderEvent::Created => self.inner.create(order, data).await,
            OrderEvent::Suspended => self.inner.suspend(order, data).await,
            OrderEvent::Unsuspended => self.inner.unsuspend(order, data).await,
            OrderEvent::Terminated => self.inner.terminate(order, data).await,
        };
        let elapsed = started_at.elapsed();

        match &result {
            Ok(()) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    event = %event.label(),
                    order_id = order.id,
                    elapsed_ms = elapsed.as_millis(),
                    "Lifecycle event handled"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    event = %event.label(),
                    order_id = order.id,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Lifecycle event failed"
                );
            }
        }

        result
    }
}
