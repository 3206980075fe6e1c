//! The admin product form and its validation.
//!
//! Raw submissions stay as strings so a failed validation can re-render the
//! form with exactly what the admin typed; validation produces a typed
//! [`NewProduct`] or per-field errors.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{NewProduct, Product};

/// Raw product form fields, as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image: String,
}

/// Per-field validation errors. Only failed fields carry a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
}

impl FormErrors {
    /// True if no field failed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.price.is_none()
    }
}

impl ProductForm {
    /// Pre-fill the form from an existing record (admin edit).
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            image: product.image.clone().unwrap_or_default(),
        }
    }

    /// Validate the submission.
    ///
    /// Name and description are required non-blank; price must parse as a
    /// non-negative decimal; image is optional.
    ///
    /// # Errors
    ///
    /// Returns the per-field errors when any field fails.
    pub fn validate(&self) -> Result<NewProduct, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.name = Some("This field is required.".to_string());
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.description = Some("This field is required.".to_string());
        }

        let price_input = self.price.trim();
        let price = if price_input.is_empty() {
            errors.price = Some("This field is required.".to_string());
            None
        } else {
            match price_input.parse::<Decimal>() {
                Ok(price) if price.is_sign_negative() => {
                    errors.price = Some("Price must not be negative.".to_string());
                    None
                }
                Ok(price) => Some(price),
                Err(_) => {
                    errors.price = Some("Enter a number.".to_string());
                    None
                }
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        let image = self.image.trim();
        Ok(NewProduct {
            name: name.to_string(),
            description: description.to_string(),
            // Checked above: errors is empty, so price parsed.
            price: price.unwrap_or_default(),
            image: (!image.is_empty()).then(|| image.to_string()),
        })
    }
}
