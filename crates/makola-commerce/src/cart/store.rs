//! Persisted cart store.

use crate::cart::{CartItem, CartState, ProductSnapshot};
use crate::ids::ProductId;
use crate::money::Money;
use makola_storage::{get_json, set_json, KeyValueStore};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Storage key the cart snapshot lives under.
pub const CART_KEY: &str = "cart";

/// The authoritative, persisted shopping cart.
///
/// Mutations update the in-memory [`CartState`] synchronously and return
/// immediately; after each one, a snapshot of the item list is queued for a
/// background writer task (fire-and-forget). The queue is FIFO and the
/// writer handles one snapshot at a time, so writes reach the backend in
/// mutation order and a newer snapshot is never overwritten by an older one.
///
/// Write failures are logged and swallowed: the in-memory state stays
/// authoritative for the session, and at worst the latest mutations are
/// lost on restart. Dropping the store lets queued writes finish in the
/// background; [`shutdown`](Self::shutdown) waits for them.
///
/// Mutations take `&mut self`, which makes the store single-writer by
/// construction. Hosts with threads wanting shared access must wrap it in
/// their own lock.
pub struct CartStore {
    state: CartState,
    tx: mpsc::UnboundedSender<WriteRequest>,
    writer: JoinHandle<()>,
}

enum WriteRequest {
    Persist(Vec<CartItem>),
    Flush(oneshot::Sender<()>),
}

impl CartStore {
    /// Open a cart over `backend` using the default storage key.
    ///
    /// Never fails: a missing snapshot, an unparsable one, or a backend
    /// read error all fall back to an empty cart (the error is logged).
    pub async fn open(backend: impl KeyValueStore + 'static) -> Self {
        Self::open_at(backend, CART_KEY).await
    }

    /// Open a cart stored under a specific key.
    pub async fn open_at(backend: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        let key = key.into();

        let state = match get_json::<Vec<CartItem>>(&backend, &key).await {
            Ok(Some(items)) => CartState::load(items),
            Ok(None) => CartState::new(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to restore cart, starting empty");
                CartState::new()
            }
        };

        let (tx, rx) = mpsc::unbounded_channel();
        let writer = tokio::spawn(write_loop(backend, key, rx));

        Self { state, tx, writer }
    }

    /// Add one unit of a product and persist.
    pub fn add_item(&mut self, snapshot: ProductSnapshot) {
        self.state.add_item(snapshot);
        self.persist();
    }

    /// Remove a line by product ID and persist.
    ///
    /// Returns whether a line was removed; an absent ID is a no-op.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let removed = self.state.remove_item(id);
        self.persist();
        removed
    }

    /// Set a line's quantity (0 or below removes it) and persist.
    ///
    /// Returns whether the cart changed. An absent ID is a no-op; this
    /// never creates a line.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        let changed = self.state.update_quantity(id, quantity);
        self.persist();
        changed
    }

    /// Empty the cart and persist.
    pub fn clear(&mut self) {
        self.state.clear();
        self.persist();
    }

    /// Items in the cart, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        self.state.items()
    }

    /// Sum of `price * quantity` over all items.
    pub fn total(&self) -> Money {
        self.state.total()
    }

    /// Sum of quantities over all items.
    pub fn item_count(&self) -> i64 {
        self.state.item_count()
    }

    /// Check if the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Wait until every write queued so far has been handed to the backend.
    ///
    /// Mutations themselves never wait on storage; this is for tests and
    /// for orderly shutdown.
    pub async fn flush(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.tx.send(WriteRequest::Flush(ack_tx)).is_ok() {
            // The writer drains in order, so the ack means every earlier
            // persist request has completed.
            let _ = ack_rx.await;
        }
    }

    /// Flush outstanding writes and stop the writer task.
    pub async fn shutdown(self) {
        self.flush().await;
        let Self { tx, writer, .. } = self;
        drop(tx);
        let _ = writer.await;
    }

    /// Queue a snapshot of the current items for the writer task.
    fn persist(&self) {
        let snapshot = self.state.items().to_vec();
        if self.tx.send(WriteRequest::Persist(snapshot)).is_err() {
            tracing::warn!("cart writer task is gone, skipping persist");
        }
    }
}

/// Single writer over the backend: drains the queue in FIFO order, one
/// write at a time.
async fn write_loop(
    backend: impl KeyValueStore,
    key: String,
    mut rx: mpsc::UnboundedReceiver<WriteRequest>,
) {
    while let Some(request) = rx.recv().await {
        match request {
            WriteRequest::Persist(items) => {
                if let Err(e) = set_json(&backend, &key, &items).await {
                    tracing::warn!(key = %key, error = %e, "failed to persist cart");
                }
            }
            WriteRequest::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }
}
