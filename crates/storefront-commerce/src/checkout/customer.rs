//! Customer details collected at checkout.

use crate::catalog::{non_blank, non_blank_opt};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Delivery and contact details for a cash-on-delivery order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerDetails {
    /// Full name.
    pub full_name: String,
    /// Phone number.
    pub phone_number: String,
    /// Email for the order confirmation, if the shopper gave one.
    pub email: Option<String>,
    /// Street address.
    pub delivery_address: String,
    /// City.
    pub city: String,
    /// State/province.
    pub province: String,
    /// Delivery note.
    pub note: Option<String>,
}

impl CustomerDetails {
    /// Create customer details with no email or note.
    pub fn new(
        full_name: impl Into<String>,
        phone_number: impl Into<String>,
        delivery_address: impl Into<String>,
        city: impl Into<String>,
        province: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            phone_number: phone_number.into(),
            email: None,
            delivery_address: delivery_address.into(),
            city: city.into(),
            province: province.into(),
            note: None,
        }
    }

    /// Set the email. Blank input clears it.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = non_blank(email.into());
        self
    }

    /// Set the delivery note. Blank input clears it.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = non_blank(note.into());
        self
    }

    /// Check that every required field is filled in.
    ///
    /// Reports the first missing field.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let required = [
            ("full name", &self.full_name),
            ("phone number", &self.phone_number),
            ("delivery address", &self.delivery_address),
            ("city", &self.city),
            ("province", &self.province),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(CommerceError::CheckoutIncomplete(field.to_string())),
            None => Ok(()),
        }
    }

    /// Trim required fields and collapse blank optional ones.
    pub fn normalized(self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            email: non_blank_opt(self.email).map(|e| e.trim().to_string()),
            delivery_address: self.delivery_address.trim().to_string(),
            city: self.city.trim().to_string(),
            province: self.province.trim().to_string(),
            note: non_blank_opt(self.note).map(|n| n.trim().to_string()),
        }
    }

    /// Format the delivery address as a single line.
    pub fn one_line_address(&self) -> String {
        format!("{}, {}, {}", self.delivery_address, self.city, self.province)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> CustomerDetails {
        CustomerDetails::new(
            "Ada Lovelace",
            "555-0100",
            "12 Analytical Way",
            "London",
            "Greater London",
        )
    }

    #[test]
    fn test_complete_details_validate() {
        assert!(details().validate().is_ok());
    }

    #[test]
    fn test_first_missing_field_reported() {
        let mut d = details();
        d.phone_number = "  ".to_string();
        d.city = String::new();
        match d.validate() {
            Err(CommerceError::CheckoutIncomplete(field)) => assert_eq!(field, "phone number"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_optional_fields_blank_is_none() {
        let d = details().with_email("").with_note("   ");
        assert_eq!(d.email, None);
        assert_eq!(d.note, None);

        let d = details().with_email("ada@example.com");
        assert_eq!(d.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn test_normalized_trims() {
        let mut d = details();
        d.full_name = "  Ada  ".to_string();
        d.email = Some(" ".to_string());
        d.note = Some(" ring twice ".to_string());
        let d = d.normalized();
        assert_eq!(d.full_name, "Ada");
        assert_eq!(d.email, None);
        assert_eq!(d.note.as_deref(), Some("ring twice"));
    }

    #[test]
    fn test_one_line_address() {
        assert_eq!(
            details().one_line_address(),
            "12 Analytical Way, London, Greater London"
        );
    }
}
