use std::sync::Arc;

use business::application::cart::session::CartSession;
use business::domain::logger::Logger;
use business::domain::shared::money::format_price;
use tokio::task::JoinHandle;

/// Logs the cart badge (item count and total) every time the cart changes.
/// Ends when the session is dropped.
pub fn spawn(cart: &CartSession, logger: Arc<dyn Logger>) -> JoinHandle<()> {
    let mut summary = cart.subscribe();

    tokio::spawn(async move {
        while summary.changed().await.is_ok() {
            let current = summary.borrow_and_update().clone();
            logger.debug(&format!(
                "Cart: {} items, {} ({})",
                current.item_count,
                format_price(&current.total_price),
                if current.is_open { "open" } else { "closed" }
            ));
        }
    })
}
