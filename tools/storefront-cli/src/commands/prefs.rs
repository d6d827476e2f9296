//! Notification preference commands.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context as _, Result};
use storefront_commerce::notifications::{NotificationKind, NotificationPreferences};

use super::{PrefsArgs, PrefsCommand};
use crate::context::Context;
use crate::output::toggle_badge;

/// Run the prefs command.
pub fn run(args: PrefsArgs, ctx: &Context) -> Result<()> {
    let prefs = load_preferences(args.metadata.as_deref(), ctx)?;

    match args.command {
        Some(PrefsCommand::Show) | None => show(&prefs, ctx),
        Some(PrefsCommand::Check { kind }) => check(&prefs, &kind, ctx)?,
    }

    Ok(())
}

fn load_preferences(metadata: Option<&str>, ctx: &Context) -> Result<NotificationPreferences> {
    let defaults = ctx.config.notifications;
    let Some(path) = metadata else {
        return Ok(defaults);
    };

    let content = fs::read_to_string(ctx.resolve_path(Path::new(path)))
        .with_context(|| format!("Failed to read metadata file: {}", path))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse metadata JSON: {}", path))?;
    Ok(NotificationPreferences::from_metadata(&value, &defaults))
}

fn show(prefs: &NotificationPreferences, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(prefs);
        return;
    }

    ctx.output.header("Notification Preferences");
    ctx.output.kv("Email notifications", &toggle_badge(prefs.email_notifications));
    ctx.output.kv("SMS notifications", &toggle_badge(prefs.sms_notifications));
    ctx.output.kv("Marketing emails", &toggle_badge(prefs.marketing_emails));
    ctx.output.kv("New listing alerts", &toggle_badge(prefs.new_listing_alerts));
    ctx.output.kv("Message notifications", &toggle_badge(prefs.message_notifications));
    ctx.output.kv("Price drop alerts", &toggle_badge(prefs.price_drop_alerts));
}

fn check(prefs: &NotificationPreferences, kind: &str, ctx: &Context) -> Result<()> {
    let kind = NotificationKind::from_str(kind)
        .ok_or_else(|| anyhow!("Unknown notification kind: {}", kind))?;
    let send = prefs.should_send(kind);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "kind": kind,
            "send": send,
        }));
    } else if send {
        ctx.output.success(&format!("{} notifications would be sent", kind.as_str()));
    } else {
        ctx.output.info(&format!("{} notifications are turned off", kind.as_str()));
    }

    Ok(())
}
