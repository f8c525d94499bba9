use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("order must contain at least one item")]
    EmptyOrder,
    #[error("quantity for product {0} must be greater than zero")]
    NonPositiveQuantity(Uuid),
    #[error("unknown product {0}")]
    ProductNotFound(Uuid),
    #[error("insufficient stock for product {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: Uuid,
        requested: i32,
        available: i32,
    },
    #[error("order not found")]
    OrderNotFound,
    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("storage error during {operation}: {detail}")]
    Storage {
        operation: &'static str,
        detail: String,
    },
}

impl DomainError {
    /// Tag a storage failure with the operation it happened in. Conversions
    /// from driver errors cannot know the operation, so the store's public
    /// methods apply it at their boundary. Non-storage errors pass through.
    pub fn in_operation(self, operation: &'static str) -> DomainError {
        match self {
            DomainError::Storage { detail, .. } => DomainError::Storage { operation, detail },
            other => other,
        }
    }
}

/// Cache failures never cross the service boundary; they are logged and the
/// caller falls back to computing from the store.
#[derive(Debug, Error)]
#[error("cache error: {0}")]
pub struct CacheError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_operation_tags_storage_errors() {
        let err = DomainError::Storage {
            operation: "storage",
            detail: "connection reset".to_string(),
        }
        .in_operation("place order");
        assert_eq!(
            err.to_string(),
            "storage error during place order: connection reset"
        );
    }

    #[test]
    fn in_operation_leaves_other_errors_untouched() {
        let err = DomainError::EmptyOrder.in_operation("place order");
        assert!(matches!(err, DomainError::EmptyOrder));
    }

    #[test]
    fn insufficient_stock_names_product_and_quantities() {
        let id = Uuid::new_v4();
        let err = DomainError::InsufficientStock {
            product_id: id,
            requested: 3,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            format!("insufficient stock for product {id}: requested 3, available 1")
        );
    }
}
