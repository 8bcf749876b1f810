//! Order lifecycle events and their notification templates.

use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

use crate::Order;
use crate::order::OPTION_DISCORD_USER_ID;

/// The four order-state transitions the host signals to installed plugins.
///
/// Events are independent and stateless; the host may fire them in any
/// sequence or skip some entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum OrderEvent {
    /// A new order was created.
    Created,
    /// The order was suspended, either by expiry or by an admin.
    Suspended,
    /// The order was activated or unsuspended by an admin.
    Unsuspended,
    /// The order was terminated.
    Terminated,
}

impl OrderEvent {
    /// Label used for tracing output, e.g. `order:created`.
    pub fn label(&self) -> String {
        format!("order:{self}")
    }

    /// Renders the notification text for this event.
    ///
    /// Template text is fixed per event; the user's display name, the
    /// package name, and the checkout-time Discord user ID are interpolated
    /// verbatim. A missing user ID renders as the empty string.
    pub fn message(&self, order: &Order) -> String {
        let user = &order.user.username;
        let package = &order.package.name;
        let user_id = order.option_or_empty(OPTION_DISCORD_USER_ID);

        match self {
            Self::Created => format!(
                "New order created for {user} for package {package}, the user id is {user_id}"
            ),
            Self::Suspended => format!(
                "Order has been suspended for {user} for package {package}, the user id is {user_id}"
            ),
            Self::Unsuspended => format!(
                "Order has been unsuspended for {user} for package {package}, the user id is {user_id}"
            ),
            Self::Terminated => format!(
                "Order has been terminated for {user} for package {package}, the user id is {user_id}"
            ),
        }
    }
}
