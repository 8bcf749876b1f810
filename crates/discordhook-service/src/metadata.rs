//! Plugin metadata and configuration-form descriptors.
//!
//! The host renders these descriptors as admin/checkout forms and applies the
//! validation rules itself; the plugin only declares what it needs.

use strum::{AsRefStr, Display, IntoStaticStr};

/// Metadata describing this plugin to the host.
#[derive(Debug, Clone)]
pub struct ServiceMetadata {
    /// Unique key used to store settings for this plugin.
    pub key: &'static str,
    /// Human-readable plugin name.
    pub display_name: &'static str,
    /// Plugin author.
    pub author: &'static str,
    /// Plugin version.
    pub version: &'static str,
    /// Minimum host platform version.
    pub host_version: &'static str,
}

/// Input widget kind for a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(AsRefStr, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum FieldKind {
    /// Free-form text input.
    Text,
    /// Numeric input.
    Number,
}

/// Validation rule the host applies to a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(AsRefStr, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Rule {
    /// Value must be present and non-empty.
    Required,
    /// Value must be numeric.
    Numeric,
    /// Value must be a reachable URL.
    ActiveUrl,
}

/// One field of a configuration form.
#[derive(Debug, Clone)]
pub struct ConfigField {
    /// Settings-store key, namespaced by the host where applicable.
    pub key: &'static str,
    /// Human-readable field name.
    pub name: &'static str,
    /// Help text shown next to the field.
    pub description: &'static str,
    /// Input widget kind.
    pub kind: FieldKind,
    /// Validation rules applied by the host.
    pub rules: &'static [Rule],
}

/// A button shown on the order management page.
#[derive(Debug, Clone)]
pub struct ServiceButton {
    /// Button label.
    pub name: &'static str,
    /// Target the host navigates to.
    pub href: &'static str,
}

/// Plugin-level settings collected from the admin.
pub fn settings_form() -> Vec<ConfigField> {
    vec![
        ConfigField {
            key: "discordhook::webhook_url",
            name: "Webhook URL",
            description: "Enter the webhook url to send the message to",
            kind: FieldKind::Text,
            rules: &[Rule::Required, Rule::ActiveUrl],
        },
        ConfigField {
            key: "discordhook::username",
            name: "Username",
            description: "Enter the username of the webhook sender",
            kind: FieldKind::Text,
            rules: &[Rule::Required],
        },
    ]
}

/// Package-level settings collected when an admin configures a package.
pub fn package_form() -> Vec<ConfigField> {
    vec![ConfigField {
        key: "discord_role_id",
        name: "Discord Role ID",
        description: "Enter the ID of the role to give to the user",
        kind: FieldKind::Number,
        rules: &[Rule::Required, Rule::Numeric],
    }]
}

/// Checkout-time inputs collected from the customer.
pub fn checkout_form() -> Vec<ConfigField> {
    vec![ConfigField {
        key: "discord_user_id",
        name: "Discord User ID",
        description: "Please enter your discord user ID",
        kind: FieldKind::Number,
        rules: &[Rule::Required, Rule::Numeric],
    }]
}

/// Buttons shown at the order management page. This plugin adds none.
pub fn service_buttons() -> Vec<ServiceButton> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_form_fields() {
        let form = settings_form();
        assert_eq!(form.len(), 2);

        assert_eq!(form[0].key, "discordhook::webhook_url");
        assert_eq!(form[0].kind, FieldKind::Text);
        assert!(form[0].rules.contains(&Rule::ActiveUrl));

        assert_eq!(form[1].key, "discordhook::username");
        assert_eq!(form[1].rules, &[Rule::Required]);
    }

    #[test]
    fn test_package_form_collects_unused_role_id() {
        let form = package_form();
        assert_eq!(form.len(), 1);
        assert_eq!(form[0].key, "discord_role_id");
        assert_eq!(form[0].kind, FieldKind::Number);
    }

    #[test]
    fn test_checkout_form_requires_numeric_user_id() {
        let form = checkout_form();
        assert_eq!(form.len(), 1);
        assert_eq!(form[0].key, "discord_user_id");
        assert_eq!(form[0].rules, &[Rule::Required, Rule::Numeric]);
    }

    #[test]
    fn test_no_service_buttons() {
        assert!(service_buttons().is_empty());
    }

    #[test]
    fn test_rule_labels() {
        assert_eq!(Rule::ActiveUrl.to_string(), "active_url");
        assert_eq!(FieldKind::Number.to_string(), "number");
    }
}
