//! Notification preferences.
//!
//! Decides whether a shopper wants a given kind of notification. Delivery
//! itself happens elsewhere.

mod preferences;

pub use preferences::{NotificationKind, NotificationPreferences, PreferenceToggle};
