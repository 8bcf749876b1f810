#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod event;
mod hook;
mod order;
mod provision;

pub mod metadata;

pub use discordhook_webhook::{BoxedError, Error, ErrorKind, Result};
pub use event::OrderEvent;
pub use hook::{DiscordHook, HookConfig};
pub use metadata::{ConfigField, FieldKind, Rule, ServiceButton, ServiceMetadata};
pub use order::{Order, Package, User};
pub use provision::{ProvisionData, ProvisionProvider, ProvisionService};

/// Tracing target for provisioning operations.
pub const TRACING_TARGET: &str = "discordhook_service";

/// Settings-store namespace for this plugin.
pub const SERVICE_KEY: &str = "discordhook";
