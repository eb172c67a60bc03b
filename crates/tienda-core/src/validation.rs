//! # Validation Module
//!
//! Field rules for the insert bodies.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Required keys present                                             │
//! │  └── JSON types match (number, string)                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Validate)                                       │
//! │  ├── Non-empty names, column lengths                                   │
//! │  └── Non-negative money, positive ids                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (MySQL)                                             │
//! │  ├── NOT NULL constraints                                              │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Layers 1 and 2 reject with `400`; layer 3 surfaces as `500`.

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::types::{NewClient, NewOrderDetail, NewOrderHeader, NewProduct};
use crate::MAX_TEXT_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A request body that can check itself before it reaches the database.
pub trait Validate {
    fn validate(&self) -> ValidationResult<()>;
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a required text column: non-blank and within [`MAX_TEXT_LEN`].
///
/// The value is checked trimmed but stored as sent.
pub fn validate_required_text(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    validate_optional_text(field, Some(value))
}

/// Validates an optional text column against [`MAX_TEXT_LEN`].
pub fn validate_optional_text(field: &'static str, value: Option<&str>) -> ValidationResult<()> {
    match value {
        Some(v) if v.chars().count() > MAX_TEXT_LEN => Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        }),
        _ => Ok(()),
    }
}

/// Validates an email address.
///
/// ## Rules
/// - Exactly one `@`
/// - Something on both sides of it
///
/// Anything stricter belongs to a mail server, not this API.
pub fn validate_email(value: &str) -> ValidationResult<()> {
    validate_optional_text("email", Some(value))?;

    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidFormat {
            field: "email",
            reason: "expected name@domain".to_string(),
        }),
    }
}

/// Validates a status code: exactly one character.
pub fn validate_status(value: &str) -> ValidationResult<()> {
    if value.chars().count() != 1 {
        return Err(ValidationError::InvalidFormat {
            field: "estado",
            reason: "must be a single character".to_string(),
        });
    }
    Ok(())
}

/// Validates a money amount (zero is allowed).
pub fn validate_amount(field: &'static str, value: Decimal) -> ValidationResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::MustBeNonNegative { field });
    }
    Ok(())
}

/// Validates a stock count (zero is allowed).
pub fn validate_stock(field: &'static str, value: i32) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::MustBeNonNegative { field });
    }
    Ok(())
}

/// Validates a foreign key or a sold quantity: strictly positive.
pub fn validate_positive(field: &'static str, value: i32) -> ValidationResult<()> {
    if value <= 0 {
        return Err(ValidationError::MustBePositive { field });
    }
    Ok(())
}

// =============================================================================
// Body Validators
// =============================================================================

impl Validate for NewProduct {
    fn validate(&self) -> ValidationResult<()> {
        validate_required_text("nombre", &self.name)?;
        validate_amount("precio_minimo", self.min_price)?;
        validate_amount("precio_maximo", self.max_price)?;
        if self.min_price > self.max_price {
            return Err(ValidationError::InvalidRange {
                low: "precio_minimo",
                high: "precio_maximo",
            });
        }
        validate_stock("cantidad_disponible", self.available_quantity)
    }
}

impl Validate for NewClient {
    fn validate(&self) -> ValidationResult<()> {
        validate_required_text("nombre", &self.name)?;
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        validate_optional_text("telefono", self.phone.as_deref())?;
        validate_optional_text("nit", self.tax_id.as_deref())
    }
}

impl Validate for NewOrderHeader {
    fn validate(&self) -> ValidationResult<()> {
        validate_positive("id_cliente", self.client_id)?;
        validate_amount("total_pedido", self.total)?;
        validate_status(self.status_or_default())
    }
}

impl Validate for NewOrderDetail {
    fn validate(&self) -> ValidationResult<()> {
        validate_positive("id_pedido", self.order_id)?;
        validate_positive("id_producto", self.product_id)?;
        validate_amount("precio_venta", self.sale_price)?;
        validate_positive("cantidad_venta", self.sale_quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> NewProduct {
        NewProduct {
            name: "Café molido".to_string(),
            min_price: Decimal::new(1000, 2),
            max_price: Decimal::new(1250, 2),
            available_quantity: 4,
        }
    }

    #[test]
    fn test_validate_required_text() {
        assert!(validate_required_text("nombre", "Ana").is_ok());
        assert_eq!(
            validate_required_text("nombre", "   "),
            Err(ValidationError::Required { field: "nombre" })
        );
        assert!(validate_required_text("nombre", &"x".repeat(101)).is_err());
        assert!(validate_required_text("nombre", &"ñ".repeat(100)).is_ok());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ana@x.com").is_ok());
        assert!(validate_email("ana").is_err());
        assert!(validate_email("@x.com").is_err());
        assert!(validate_email("ana@").is_err());
        assert!(validate_email("a@b@c").is_err());
    }

    #[test]
    fn test_validate_status() {
        assert!(validate_status("A").is_ok());
        assert!(validate_status("").is_err());
        assert!(validate_status("AB").is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("total_pedido", Decimal::ZERO).is_ok());
        assert!(validate_amount("total_pedido", Decimal::new(1, 2)).is_ok());
        assert!(validate_amount("total_pedido", Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn test_product_rules() {
        assert!(product().validate().is_ok());

        let mut p = product();
        p.min_price = Decimal::new(2000, 2);
        assert_eq!(
            p.validate(),
            Err(ValidationError::InvalidRange {
                low: "precio_minimo",
                high: "precio_maximo"
            })
        );

        let mut p = product();
        p.available_quantity = -1;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_injection_text_is_valid_data() {
        let mut p = product();
        p.name = "'; DROP TABLE productos; --".to_string();
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_client_rules() {
        let client = NewClient {
            name: "Ana".to_string(),
            email: Some("ana@x.com".to_string()),
            phone: Some("555".to_string()),
            tax_id: Some("123".to_string()),
        };
        assert!(client.validate().is_ok());

        let bad = NewClient {
            email: Some("not-an-email".to_string()),
            ..client.clone()
        };
        assert!(bad.validate().is_err());

        let minimal = NewClient {
            name: "Luis".to_string(),
            email: None,
            phone: None,
            tax_id: None,
        };
        assert!(minimal.validate().is_ok());
    }

    #[test]
    fn test_order_rules() {
        let header = NewOrderHeader {
            client_id: 1,
            total: Decimal::new(5000, 2),
            status: None,
        };
        assert!(header.validate().is_ok());
        assert!(NewOrderHeader { client_id: 0, ..header.clone() }.validate().is_err());
        assert!(NewOrderHeader {
            status: Some("XX".to_string()),
            ..header
        }
        .validate()
        .is_err());

        let detail = NewOrderDetail {
            order_id: 1,
            product_id: 2,
            sale_price: Decimal::new(1100, 2),
            sale_quantity: 3,
        };
        assert!(detail.validate().is_ok());
        assert_eq!(
            NewOrderDetail { sale_quantity: 0, ..detail }.validate(),
            Err(ValidationError::MustBePositive {
                field: "cantidad_venta"
            })
        );
    }
}
