//! Read-only views of host-owned order entities.
//!
//! The host platform owns and lifecycle-manages orders, users, and packages;
//! this crate only reads them. Nothing here is created, mutated, or persisted
//! by the plugin.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The customer who placed an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Display name shown in notifications.
    pub username: String,
}

impl User {
    /// Creates a user view.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// A purchasable product/service tier associated with an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    /// Display name shown in notifications.
    pub name: String,
    /// Admin-configured settings bag. Carries `discord_role_id`, which is
    /// collected at package-configuration time but referenced by no outbound
    /// message.
    #[serde(default)]
    pub settings: HashMap<String, String>,
}

impl Package {
    /// Creates a package view with an empty settings bag.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings: HashMap::new(),
        }
    }

    /// Adds an admin-configured setting.
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Looks up an admin-configured setting.
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }
}

/// A customer transaction, resolved by the host before any lifecycle call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Host-assigned order identifier.
    pub id: i64,
    /// The owning user.
    pub user: User,
    /// The ordered package.
    pub package: Package,
    /// Checkout-time options bag. Carries `discord_user_id`.
    #[serde(default)]
    pub options: HashMap<String, String>,
}

/// Checkout option key for the customer's Discord user ID.
pub(crate) const OPTION_DISCORD_USER_ID: &str = "discord_user_id";

impl Order {
    /// Creates an order view with an empty options bag.
    pub fn new(id: i64, user: User, package: Package) -> Self {
        Self {
            id,
            user,
            package,
            options: HashMap::new(),
        }
    }

    /// Adds a checkout-time option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Looks up a checkout-time option.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Looks up a checkout-time option, substituting the empty string when
    /// the key is absent. This mirrors the host framework's null-placeholder
    /// behavior for missing option keys.
    pub fn option_or_empty(&self, key: &str) -> &str {
        self.option(key).unwrap_or_default()
    }
}
