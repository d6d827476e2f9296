//! Typed notification preferences.

use serde::{Deserialize, Serialize};

/// Kinds of notification the storefront sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    OrderConfirmation,
    OrderUpdate,
    PriceDrop,
    NewProduct,
    Marketing,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 5] = [
        NotificationKind::OrderConfirmation,
        NotificationKind::OrderUpdate,
        NotificationKind::PriceDrop,
        NotificationKind::NewProduct,
        NotificationKind::Marketing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::OrderConfirmation => "order_confirmation",
            NotificationKind::OrderUpdate => "order_update",
            NotificationKind::PriceDrop => "price_drop",
            NotificationKind::NewProduct => "new_product",
            NotificationKind::Marketing => "marketing",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "order_confirmation" => Some(NotificationKind::OrderConfirmation),
            "order_update" => Some(NotificationKind::OrderUpdate),
            "price_drop" => Some(NotificationKind::PriceDrop),
            "new_product" => Some(NotificationKind::NewProduct),
            "marketing" => Some(NotificationKind::Marketing),
            _ => None,
        }
    }

    /// The preference that gates this kind.
    pub fn toggle(&self) -> PreferenceToggle {
        match self {
            NotificationKind::OrderConfirmation | NotificationKind::OrderUpdate => {
                PreferenceToggle::EmailNotifications
            }
            NotificationKind::PriceDrop => PreferenceToggle::PriceDropAlerts,
            NotificationKind::NewProduct => PreferenceToggle::NewListingAlerts,
            NotificationKind::Marketing => PreferenceToggle::MarketingEmails,
        }
    }
}

/// One named preference flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceToggle {
    EmailNotifications,
    SmsNotifications,
    MarketingEmails,
    NewListingAlerts,
    MessageNotifications,
    PriceDropAlerts,
}

/// A shopper's notification settings.
///
/// Every field has a default, and fields missing from stored or configured
/// data take that default. Marketing is opt-in; everything else is opt-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    /// Order confirmations and order updates by email.
    #[serde(default = "default_true", alias = "emailNotifications")]
    pub email_notifications: bool,

    /// Text messages.
    #[serde(default = "default_true", alias = "smsNotifications")]
    pub sms_notifications: bool,

    /// Promotional email.
    #[serde(default, alias = "marketingEmails")]
    pub marketing_emails: bool,

    /// New products listed.
    #[serde(default = "default_true", alias = "newListingAlerts")]
    pub new_listing_alerts: bool,

    /// Direct messages.
    #[serde(default = "default_true", alias = "messageNotifications")]
    pub message_notifications: bool,

    /// Price drops on watched products.
    #[serde(default = "default_true", alias = "priceDropAlerts")]
    pub price_drop_alerts: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_notifications: true,
            marketing_emails: false,
            new_listing_alerts: true,
            message_notifications: true,
            price_drop_alerts: true,
        }
    }
}

impl NotificationPreferences {
    /// Read preferences from user metadata.
    ///
    /// Looks for `preferences.notifications` in `metadata`. Missing objects
    /// and missing or non-boolean fields fall back to `defaults`.
    pub fn from_metadata(metadata: &serde_json::Value, defaults: &Self) -> Self {
        let saved = metadata
            .get("preferences")
            .and_then(|p| p.get("notifications"));

        let flag = |camel: &str, snake: &str, default: bool| {
            saved
                .and_then(|s| s.get(camel).or_else(|| s.get(snake)))
                .and_then(serde_json::Value::as_bool)
                .unwrap_or(default)
        };

        Self {
            email_notifications: flag(
                "emailNotifications",
                "email_notifications",
                defaults.email_notifications,
            ),
            sms_notifications: flag(
                "smsNotifications",
                "sms_notifications",
                defaults.sms_notifications,
            ),
            marketing_emails: flag(
                "marketingEmails",
                "marketing_emails",
                defaults.marketing_emails,
            ),
            new_listing_alerts: flag(
                "newListingAlerts",
                "new_listing_alerts",
                defaults.new_listing_alerts,
            ),
            message_notifications: flag(
                "messageNotifications",
                "message_notifications",
                defaults.message_notifications,
            ),
            price_drop_alerts: flag(
                "priceDropAlerts",
                "price_drop_alerts",
                defaults.price_drop_alerts,
            ),
        }
    }

    /// Read a flag.
    pub fn get(&self, toggle: PreferenceToggle) -> bool {
        match toggle {
            PreferenceToggle::EmailNotifications => self.email_notifications,
            PreferenceToggle::SmsNotifications => self.sms_notifications,
            PreferenceToggle::MarketingEmails => self.marketing_emails,
            PreferenceToggle::NewListingAlerts => self.new_listing_alerts,
            PreferenceToggle::MessageNotifications => self.message_notifications,
            PreferenceToggle::PriceDropAlerts => self.price_drop_alerts,
        }
    }

    /// Change a flag.
    pub fn set(&mut self, toggle: PreferenceToggle, enabled: bool) {
        let slot = match toggle {
            PreferenceToggle::EmailNotifications => &mut self.email_notifications,
            PreferenceToggle::SmsNotifications => &mut self.sms_notifications,
            PreferenceToggle::MarketingEmails => &mut self.marketing_emails,
            PreferenceToggle::NewListingAlerts => &mut self.new_listing_alerts,
            PreferenceToggle::MessageNotifications => &mut self.message_notifications,
            PreferenceToggle::PriceDropAlerts => &mut self.price_drop_alerts,
        };
        *slot = enabled;
    }

    /// Whether a notification of `kind` may be sent.
    pub fn should_send(&self, kind: NotificationKind) -> bool {
        self.get(kind.toggle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let prefs = NotificationPreferences::default();
        assert!(prefs.should_send(NotificationKind::OrderConfirmation));
        assert!(prefs.should_send(NotificationKind::OrderUpdate));
        assert!(prefs.should_send(NotificationKind::PriceDrop));
        assert!(prefs.should_send(NotificationKind::NewProduct));
        assert!(!prefs.should_send(NotificationKind::Marketing));
        assert!(prefs.sms_notifications);
        assert!(prefs.message_notifications);
    }

    #[test]
    fn test_order_kinds_share_email_toggle() {
        let mut prefs = NotificationPreferences::default();
        prefs.set(PreferenceToggle::EmailNotifications, false);
        assert!(!prefs.should_send(NotificationKind::OrderConfirmation));
        assert!(!prefs.should_send(NotificationKind::OrderUpdate));
        assert!(prefs.should_send(NotificationKind::PriceDrop));
    }

    #[test]
    fn test_from_metadata() {
        let metadata = json!({
            "preferences": {
                "notifications": {
                    "marketingEmails": true,
                    "priceDropAlerts": false,
                    "newListingAlerts": "yes"
                }
            }
        });
        let prefs =
            NotificationPreferences::from_metadata(&metadata, &NotificationPreferences::default());

        assert!(prefs.marketing_emails);
        assert!(!prefs.price_drop_alerts);
        // Non-boolean value falls back to the default
        assert!(prefs.new_listing_alerts);
        assert!(prefs.email_notifications);
    }

    #[test]
    fn test_from_metadata_without_preferences() {
        let mut defaults = NotificationPreferences::default();
        defaults.marketing_emails = true;
        let prefs = NotificationPreferences::from_metadata(&json!({}), &defaults);
        assert_eq!(prefs, defaults);
    }

    #[test]
    fn test_deserialize_partial_json() {
        let prefs: NotificationPreferences =
            serde_json::from_value(json!({"smsNotifications": false})).unwrap();
        assert!(!prefs.sms_notifications);
        assert!(prefs.email_notifications);
        assert!(!prefs.marketing_emails);
    }

    #[test]
    fn test_kind_strings() {
        for kind in NotificationKind::ALL {
            assert_eq!(NotificationKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(
            NotificationKind::from_str("price-drop"),
            Some(NotificationKind::PriceDrop)
        );
        assert_eq!(NotificationKind::from_str("weekly_digest"), None);
    }
}
