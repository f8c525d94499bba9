use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{OrderItem, OrderView};
use crate::domain::ports::CommerceStore;

pub struct OrderService<S> {
    store: S,
}

impl<S: CommerceStore> OrderService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate the request, then run the transactional placement.
    ///
    /// Validation happens before any storage access, so a rejected request
    /// provably has zero side effects.
    pub fn place_order(
        &self,
        customer_id: Uuid,
        items: Vec<OrderItem>,
    ) -> Result<OrderView, DomainError> {
        if items.is_empty() {
            return Err(DomainError::EmptyOrder);
        }
        if let Some(item) = items.iter().find(|i| i.quantity <= 0) {
            return Err(DomainError::NonPositiveQuantity(item.product_id));
        }

        self.store.place_order(customer_id, &items)
    }

    pub fn get_order(&self, id: Uuid) -> Result<Option<OrderView>, DomainError> {
        self.store.find_order(id)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use bigdecimal::{BigDecimal, Zero};
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    use super::OrderService;
    use crate::domain::analytics::{CustomerSpending, SalesAnalytics, TopProduct};
    use crate::domain::errors::DomainError;
    use crate::domain::order::{OrderItem, OrderPage, OrderView, STATUS_COMPLETED};
    use crate::domain::ports::CommerceStore;

    /// Store fake that prices every line at 2.50 and counts placements.
    struct RecordingStore {
        placements: Arc<AtomicUsize>,
    }

    impl CommerceStore for RecordingStore {
        fn place_order(
            &self,
            customer_id: Uuid,
            items: &[OrderItem],
        ) -> Result<OrderView, DomainError> {
            self.placements.fetch_add(1, Ordering::SeqCst);
            let unit_price = BigDecimal::from_str("2.50").expect("valid decimal");
            let mut total_amount = BigDecimal::zero();
            let lines = items
                .iter()
                .map(|i| {
                    total_amount += unit_price.clone() * BigDecimal::from(i.quantity);
                    crate::domain::order::OrderLineView {
                        id: Uuid::new_v4(),
                        product_id: i.product_id,
                        quantity: i.quantity,
                        price_at_purchase: unit_price.clone(),
                    }
                })
                .collect();
            Ok(OrderView {
                id: Uuid::new_v4(),
                customer_id,
                status: STATUS_COMPLETED.to_string(),
                total_amount,
                order_date: Utc::now(),
                lines,
            })
        }

        fn find_order(&self, _id: Uuid) -> Result<Option<OrderView>, DomainError> {
            Ok(None)
        }

        fn customer_orders(
            &self,
            _customer_id: Uuid,
            _limit: i64,
            _offset: i64,
        ) -> Result<OrderPage, DomainError> {
            unimplemented!("not exercised by these tests")
        }

        fn customer_spending(&self, _customer_id: Uuid) -> Result<CustomerSpending, DomainError> {
            unimplemented!("not exercised by these tests")
        }

        fn top_selling_products(&self, _limit: i64) -> Result<Vec<TopProduct>, DomainError> {
            unimplemented!("not exercised by these tests")
        }

        fn sales_analytics(
            &self,
            _start: DateTime<Utc>,
            _end: DateTime<Utc>,
        ) -> Result<SalesAnalytics, DomainError> {
            unimplemented!("not exercised by these tests")
        }
    }

    fn service_with_counter() -> (OrderService<RecordingStore>, Arc<AtomicUsize>) {
        let placements = Arc::new(AtomicUsize::new(0));
        let store = RecordingStore {
            placements: placements.clone(),
        };
        (OrderService::new(store), placements)
    }

    #[test]
    fn empty_order_is_rejected_without_touching_the_store() {
        let (service, placements) = service_with_counter();

        let result = service.place_order(Uuid::new_v4(), vec![]);

        assert!(matches!(result, Err(DomainError::EmptyOrder)));
        assert_eq!(placements.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn non_positive_quantity_is_rejected_without_touching_the_store() {
        let (service, placements) = service_with_counter();
        let bad_product = Uuid::new_v4();
        let items = vec![
            OrderItem {
                product_id: Uuid::new_v4(),
                quantity: 1,
            },
            OrderItem {
                product_id: bad_product,
                quantity: 0,
            },
        ];

        let result = service.place_order(Uuid::new_v4(), items);

        match result {
            Err(DomainError::NonPositiveQuantity(id)) => assert_eq!(id, bad_product),
            other => panic!("expected NonPositiveQuantity, got {other:?}"),
        }
        assert_eq!(placements.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn valid_order_reaches_the_store_once() {
        let (service, placements) = service_with_counter();
        let items = vec![
            OrderItem {
                product_id: Uuid::new_v4(),
                quantity: 2,
            },
            OrderItem {
                product_id: Uuid::new_v4(),
                quantity: 3,
            },
        ];

        let order = service
            .place_order(Uuid::new_v4(), items)
            .expect("placement should succeed");

        assert_eq!(placements.load(Ordering::SeqCst), 1);
        assert_eq!(order.status, STATUS_COMPLETED);
        // 2 * 2.50 + 3 * 2.50
        assert_eq!(
            order.total_amount,
            BigDecimal::from_str("12.50").expect("valid decimal")
        );
    }

    #[test]
    fn total_matches_sum_of_line_prices() {
        let (service, _) = service_with_counter();
        let items = vec![OrderItem {
            product_id: Uuid::new_v4(),
            quantity: 4,
        }];

        let order = service
            .place_order(Uuid::new_v4(), items)
            .expect("placement should succeed");

        let line_sum: BigDecimal = order
            .lines
            .iter()
            .map(|l| l.price_at_purchase.clone() * BigDecimal::from(l.quantity))
            .sum();
        assert_eq!(order.total_amount, line_sum);
    }
}
