use super::*;

#[test]
fn test_deserialize_store_record() {
    let json = serde_json::json!({
        "id": "wh_123",
        "subscriberUrl": "https://x.test/hook",
        "eventTriggers": ["BOOKING_CREATED", "BOOKING_CANCELLED"],
        "active": false,
        "createdAt": "2021-09-01T10:00:00Z"
    });

    let sub: WebhookSubscription = serde_json::from_value(json).unwrap();
    assert_eq!(sub.id.as_str(), "wh_123");
    assert_eq!(sub.subscriber_url, "https://x.test/hook");
    assert_eq!(
        sub.event_triggers,
        vec![EventTrigger::BookingCreated, EventTrigger::BookingCancelled]
    );
    assert!(!sub.active);
    assert!(sub.created_at.is_some());
}

#[test]
fn test_deserialize_skips_unknown_triggers() {
    let json = serde_json::json!({
        "id": "wh_9",
        "subscriberUrl": "https://x.test/hook",
        "eventTriggers": ["MEETING_ENDED", "BOOKING_RESCHEDULED"]
    });

    let sub: WebhookSubscription = serde_json::from_value(json).unwrap();
    assert_eq!(sub.event_triggers, vec![EventTrigger::BookingRescheduled]);
}

#[test]
fn test_deserialize_defaults() {
    let json = r#"{"id":"wh_1","subscriberUrl":"https://x.test"}"#;
    let sub: WebhookSubscription = serde_json::from_str(json).unwrap();
    assert!(sub.active);
    assert!(sub.event_triggers.is_empty());
    assert!(sub.created_at.is_none());
}

#[test]
fn test_new_subscription_wire_shape() {
    let body = NewSubscription::new(
        "https://x.test/hook",
        vec![EventTrigger::BookingCreated, EventTrigger::BookingCancelled],
    );
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "subscriberUrl": "https://x.test/hook",
            "eventTriggers": ["BOOKING_CREATED", "BOOKING_CANCELLED"]
        })
    );
}

#[test]
fn test_update_skips_unset_fields() {
    let update = SubscriptionUpdate::new().with_active(false);
    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json, serde_json::json!({ "active": false }));
    assert!(!update.is_empty());
    assert!(SubscriptionUpdate::new().is_empty());
}

#[test]
fn test_apply_update() {
    let mut sub = WebhookSubscription::new(
        "wh_1",
        "https://old.test",
        vec![EventTrigger::BookingCreated],
    );
    let update = SubscriptionUpdate::new()
        .with_subscriber_url("https://new.test")
        .with_event_triggers(vec![EventTrigger::BookingRescheduled]);

    sub.apply(&update);

    assert_eq!(sub.subscriber_url, "https://new.test");
    assert_eq!(sub.event_triggers, vec![EventTrigger::BookingRescheduled]);
    assert!(sub.active);
}

#[test]
fn test_listens_to() {
    let sub = WebhookSubscription::new("wh_1", "https://x.test", vec![EventTrigger::BookingCreated]);
    assert!(sub.listens_to(EventTrigger::BookingCreated));
    assert!(!sub.listens_to(EventTrigger::BookingCancelled));
}

#[test]
fn test_view_lowercases_triggers() {
    let sub = WebhookSubscription::new(
        "wh_1",
        "https://x.test",
        vec![EventTrigger::BookingCreated, EventTrigger::BookingRescheduled],
    );
    let view = SubscriptionView::from(&sub);
    assert_eq!(view.event_triggers, vec!["booking_created", "booking_rescheduled"]);
    assert_eq!(view.id, sub.id);
    // the record itself keeps the enum form
    assert_eq!(sub.event_triggers[0], EventTrigger::BookingCreated);
}

#[test]
fn test_subscription_id_display() {
    let id = SubscriptionId::from("abc");
    assert_eq!(id.to_string(), "abc");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
}
