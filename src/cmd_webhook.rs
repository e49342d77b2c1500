//! Webhook subcommand handlers for Hookbook.

use hookbook_core::{RefreshOutcome, WebhookRegistry};
use hookbook_protocols::{EventTrigger, SubscriptionId, SubscriptionUpdate, SubscriptionView};
use tracing::info;

/// List all webhook subscriptions.
pub(crate) async fn webhook_list(
    registry: &mut WebhookRegistry,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if registry.refresh().await == RefreshOutcome::Stale {
        return Err("could not load webhook subscriptions".into());
    }

    let views = registry.views();
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(views)?);
        return Ok(());
    }

    if views.is_empty() {
        println!("No webhooks found.");
        return Ok(());
    }

    print_table(views);
    Ok(())
}

fn print_table(views: &[SubscriptionView]) {
    println!("{:<28} {:<40} {:<8} {}", "ID", "SUBSCRIBER URL", "ACTIVE", "TRIGGERS");
    println!("{}", "-".repeat(100));
    for view in views {
        println!(
            "{:<28} {:<40} {:<8} {}",
            view.id,
            view.subscriber_url,
            if view.active { "yes" } else { "no" },
            view.event_triggers.join(", ")
        );
    }
}

/// Create a webhook subscription.
pub(crate) async fn webhook_create(
    registry: &mut WebhookRegistry,
    url: &str,
    no_created: bool,
    no_rescheduled: bool,
    no_cancelled: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    registry.begin_create();
    let selection = registry.selection_mut();
    selection.set(EventTrigger::BookingCreated, !no_created);
    selection.set(EventTrigger::BookingRescheduled, !no_rescheduled);
    selection.set(EventTrigger::BookingCancelled, !no_cancelled);

    let created = registry.create(url).await?;
    println!("Created webhook {}", created.id);
    Ok(())
}

/// Edit a webhook subscription.
pub(crate) async fn webhook_edit(
    registry: &mut WebhookRegistry,
    id: &str,
    url: Option<String>,
    triggers: Vec<EventTrigger>,
    active: Option<bool>,
) -> Result<(), Box<dyn std::error::Error>> {
    if registry.refresh().await == RefreshOutcome::Stale {
        return Err("could not load webhook subscriptions".into());
    }

    let id = SubscriptionId::from(id);
    let target = registry
        .find(&id)
        .cloned()
        .ok_or_else(|| format!("no webhook with id {}", id))?;
    registry.edit(target)?;

    let mut update = SubscriptionUpdate::new();
    update.subscriber_url = url;
    update.event_triggers = (!triggers.is_empty()).then_some(triggers);
    update.active = active;

    if update.is_empty() {
        registry.cancel_edit();
        println!("Nothing to change.");
        return Ok(());
    }

    let updated = registry.commit_edit(update).await?;
    info!("Webhook {} updated", updated.id);
    println!("Updated webhook {}", updated.id);
    Ok(())
}

/// Delete a webhook subscription.
pub(crate) async fn webhook_delete(
    registry: &mut WebhookRegistry,
    id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = SubscriptionId::from(id);
    registry.delete(&id).await?;
    println!("Deleted webhook {}", id);
    Ok(())
}
