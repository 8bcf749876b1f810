//! End-to-end dispatch tests: fixed order fixture, recording delivery
//! provider, exact body assertions.

use discordhook_service::{
    DiscordHook, HookConfig, Order, OrderEvent, Package, ProvisionData, ProvisionProvider,
    ProvisionService, User,
};
use discordhook_webhook::WebhookService;
use discordhook_webhook::mock::RecordingProvider;

const WEBHOOK_URL: &str = "https://discord.com/api/webhooks/1/abc";

fn fixture() -> Order {
    Order::new(1, User::new("alice"), Package::new("Starter"))
        .with_option("discord_user_id", "123456789012345678")
}

fn hook_with_recorder() -> (DiscordHook, RecordingProvider) {
    let provider = RecordingProvider::default();
    let hook = DiscordHook::new(
        HookConfig::new(WEBHOOK_URL, "Billing Bot"),
        WebhookService::new(provider.clone()),
    );
    (hook, provider)
}

#[tokio::test]
async fn create_posts_exact_body() {
    let (hook, provider) = hook_with_recorder();

    hook.create(&fixture(), &ProvisionData::empty())
        .await
        .unwrap();

    let deliveries = provider.deliveries();
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].url, WEBHOOK_URL);
    assert_eq!(
        deliveries[0].body,
        r#"{"username":"Billing Bot","content":"New order created for alice for package Starter, the user id is 123456789012345678"}"#
    );
}

#[tokio::test]
async fn terminate_posts_exact_body() {
    let (hook, provider) = hook_with_recorder();

    hook.terminate(&fixture(), &ProvisionData::empty())
        .await
        .unwrap();

    let deliveries = provider.deliveries();
    assert_eq!(deliveries.len(), 1);
    assert_eq!(
        deliveries[0].body,
        r#"{"username":"Billing Bot","content":"Order has been terminated for alice for package Starter, the user id is 123456789012345678"}"#
    );
}

#[tokio::test]
async fn suspend_and_unsuspend_use_their_templates() {
    let (hook, provider) = hook_with_recorder();
    let order = fixture();
    let data = ProvisionData::empty();

    hook.suspend(&order, &data).await.unwrap();
    hook.unsuspend(&order, &data).await.unwrap();

    let deliveries = provider.deliveries();
    assert_eq!(deliveries.len(), 2);
    assert!(deliveries[0].body.contains(
        "Order has been suspended for alice for package Starter, the user id is 123456789012345678"
    ));
    assert!(deliveries[1].body.contains(
        "Order has been unsuspended for alice for package Starter, the user id is 123456789012345678"
    ));
}

#[tokio::test]
async fn username_comes_from_config_regardless_of_order() {
    let provider = RecordingProvider::default();
    let hook = DiscordHook::new(
        HookConfig::new(WEBHOOK_URL, "Another Sender"),
        WebhookService::new(provider.clone()),
    );

    hook.create(&fixture(), &ProvisionData::empty())
        .await
        .unwrap();

    let body: serde_json::Value = serde_json::from_str(&provider.deliveries()[0].body).unwrap();
    assert_eq!(body["username"], "Another Sender");
}

#[tokio::test]
async fn repeated_calls_produce_identical_bodies() {
    let (hook, provider) = hook_with_recorder();
    let order = fixture();
    let data = ProvisionData::empty();

    hook.create(&order, &data).await.unwrap();
    hook.create(&order, &data).await.unwrap();

    let deliveries = provider.deliveries();
    assert_eq!(deliveries.len(), 2);
    assert_eq!(deliveries[0].body, deliveries[1].body);
}

#[tokio::test]
async fn empty_webhook_url_still_attempts_delivery() {
    let provider = RecordingProvider::default();
    let hook = DiscordHook::new(
        HookConfig::new("", "Billing Bot"),
        WebhookService::new(provider.clone()),
    );

    hook.create(&fixture(), &ProvisionData::empty())
        .await
        .unwrap();

    let deliveries = provider.deliveries();
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].url, "");
}

#[tokio::test]
async fn missing_discord_user_id_renders_empty() {
    let (hook, provider) = hook_with_recorder();
    let order = Order::new(2, User::new("bob"), Package::new("Pro"));

    hook.suspend(&order, &ProvisionData::empty()).await.unwrap();

    let body: serde_json::Value = serde_json::from_str(&provider.deliveries()[0].body).unwrap();
    assert_eq!(
        body["content"],
        "Order has been suspended for bob for package Pro, the user id is "
    );
}

#[tokio::test]
async fn non_2xx_status_is_treated_as_success() {
    let provider = RecordingProvider::with_status(429);
    let hook = DiscordHook::new(
        HookConfig::new(WEBHOOK_URL, "Billing Bot"),
        WebhookService::new(provider.clone()),
    );

    // Remote rejection is recorded by the delivery layer but never surfaced.
    hook.create(&fixture(), &ProvisionData::empty())
        .await
        .unwrap();
    assert_eq!(provider.deliveries().len(), 1);
}

#[tokio::test]
async fn service_wrapper_routes_events_to_operations() {
    let (hook, provider) = hook_with_recorder();
    let service = ProvisionService::new(hook);
    let order = fixture();
    let data = ProvisionData::empty();

    service
        .dispatch(OrderEvent::Created, &order, &data)
        .await
        .unwrap();
    service
        .dispatch(OrderEvent::Terminated, &order, &data)
        .await
        .unwrap();

    let deliveries = provider.deliveries();
    assert_eq!(deliveries.len(), 2);
    assert!(deliveries[0].body.contains("New order created"));
    assert!(deliveries[1].body.contains("Order has been terminated"));
}
