use std::sync::{Mutex, MutexGuard};

use bigdecimal::BigDecimal;
use tokio::sync::watch;

use crate::domain::cart::model::{CartItem, CartSummary, ProducerGroup};
use crate::domain::cart::store::CartStore;
use crate::domain::shared::value_objects::{ProducerId, ProductId};

/// The cart store shared by every view of one session.
///
/// Each operation runs under the lock and then publishes a fresh [`CartSummary`]
/// to subscribers.
pub struct CartSession {
    store: Mutex<CartStore>,
    summary: watch::Sender<CartSummary>,
}

impl Default for CartSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CartSession {
    pub fn new() -> Self {
        let store = CartStore::new();
        let (summary, _) = watch::channel(store.summary());
        Self {
            store: Mutex::new(store),
            summary,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<CartSummary> {
        self.summary.subscribe()
    }

    pub fn add_item(&self, item: CartItem) -> CartSummary {
        self.mutate(|store| store.add_item(item))
    }

    pub fn remove_item(&self, product_id: ProductId) -> CartSummary {
        self.mutate(|store| store.remove_item(product_id))
    }

    pub fn update_quantity(&self, product_id: ProductId, quantity: i64) -> CartSummary {
        self.mutate(|store| store.update_quantity(product_id, quantity))
    }

    pub fn remove_producer_items(&self, producer_id: ProducerId) -> CartSummary {
        self.mutate(|store| store.remove_producer_items(producer_id))
    }

    pub fn clear(&self) -> CartSummary {
        self.mutate(CartStore::clear)
    }

    pub fn open(&self) -> CartSummary {
        self.mutate(CartStore::open)
    }

    pub fn close(&self) -> CartSummary {
        self.mutate(CartStore::close)
    }

    pub fn snapshot(&self) -> CartStore {
        self.lock().clone()
    }

    pub fn summary(&self) -> CartSummary {
        self.lock().summary()
    }

    pub fn total_price(&self) -> BigDecimal {
        self.lock().total_price()
    }

    pub fn items_by_producer(&self) -> Vec<ProducerGroup> {
        self.lock().items_by_producer()
    }

    pub fn producer_group(&self, producer_id: ProducerId) -> Option<ProducerGroup> {
        self.lock().producer_group(producer_id)
    }

    fn mutate(&self, operation: impl FnOnce(&mut CartStore)) -> CartSummary {
        let summary = {
            let mut store = self.lock();
            operation(&mut store);
            store.summary()
        };
        self.summary.send_replace(summary.clone());
        summary
    }

    // A panic while holding the lock cannot leave a half-applied line behind,
    // so a poisoned store is still consistent.
    fn lock(&self) -> MutexGuard<'_, CartStore> {
        self.store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::NewCartItemProps;
    use crate::domain::shared::value_objects::UserId;
    use std::str::FromStr;

    fn item(product: u64, producer: u64, price: &str, quantity: i64) -> CartItem {
        CartItem::new(NewCartItemProps {
            product_id: ProductId::new(product),
            product_name: "Alface Crespa".to_string(),
            producer_id: ProducerId::new(producer),
            producer_user_id: UserId::new(producer + 1),
            producer_name: format!("Fazenda {producer}"),
            unit_price: BigDecimal::from_str(price).unwrap(),
            quantity,
            unit: "un".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn should_publish_summary_after_mutation() {
        let session = CartSession::new();
        let receiver = session.subscribe();

        session.add_item(item(1, 10, "4.00", 2));

        let summary = receiver.borrow().clone();
        assert_eq!(summary.item_count, 1);
        assert_eq!(summary.total_price, BigDecimal::from_str("8.00").unwrap());
        assert!(summary.is_open);
    }

    #[tokio::test]
    async fn should_notify_subscriber_on_change() {
        let session = CartSession::new();
        let mut receiver = session.subscribe();

        session.add_item(item(1, 10, "4.00", 1));

        receiver.changed().await.unwrap();
        assert_eq!(receiver.borrow_and_update().item_count, 1);

        session.clear();
        receiver.changed().await.unwrap();
        assert_eq!(receiver.borrow_and_update().item_count, 0);
    }

    #[test]
    fn should_return_group_of_one_producer() {
        let session = CartSession::new();
        session.add_item(item(1, 10, "1.00", 1));
        session.add_item(item(2, 20, "1.00", 1));

        let group = session.producer_group(ProducerId::new(20)).unwrap();

        assert_eq!(group.items.len(), 1);
        assert!(session.producer_group(ProducerId::new(30)).is_none());
    }

    #[test]
    fn should_toggle_visibility() {
        let session = CartSession::new();

        assert!(session.open().is_open);
        assert!(!session.close().is_open);
    }

    #[test]
    fn should_keep_snapshot_independent_of_later_changes() {
        let session = CartSession::new();
        session.add_item(item(1, 10, "1.00", 1));

        let snapshot = session.snapshot();
        session.clear();

        assert_eq!(snapshot.items().len(), 1);
        assert!(session.snapshot().is_empty());
    }
}
