//! Publish-once configuration store with change notification.
//!
//! `ConfigStore<T>` holds the current configuration as an immutable
//! `Arc<T>` snapshot. Publishing swaps the whole snapshot at once, so a
//! reader either sees the previous configuration or the new one, never a
//! half-written value. Readers keep the snapshot they took even after a
//! newer one has been published.

use std::sync::Arc;
use tokio::sync::watch;

/// A shared, versioned configuration store.
///
/// Subscribers receive a [`ConfigWatcher`] that can `await` the next
/// publish.
pub struct ConfigStore<T> {
    inner: Arc<watch::Sender<Published<T>>>,
}

/// Receives notifications when a [`ConfigStore`] publishes a new value.
pub struct ConfigWatcher<T> {
    rx: watch::Receiver<Published<T>>,
}

struct Published<T> {
    version: u64,
    value: Arc<T>,
}

// -- ConfigStore --------------------------------------------------------

impl<T> ConfigStore<T> {
    /// Create a new `ConfigStore` holding `initial` at version 0.
    pub fn new(initial: T) -> Self {
        let (tx, _) = watch::channel(Published {
            version: 0,
            value: Arc::new(initial),
        });
        Self {
            inner: Arc::new(tx),
        }
    }

    /// Replace the stored value and notify all watchers.
    ///
    /// Returns the version assigned to the new value.
    pub fn publish(&self, value: T) -> u64 {
        let value = Arc::new(value);
        let mut version = 0;
        self.inner.send_modify(|published| {
            published.version += 1;
            published.value = value;
            version = published.version;
        });
        version
    }

    /// The current value.
    pub fn snapshot(&self) -> Arc<T> {
        Arc::clone(&self.inner.borrow().value)
    }

    /// Version of the current value. Starts at 0 and grows by one per publish.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> ConfigWatcher<T> {
        ConfigWatcher {
            rx: self.inner.subscribe(),
        }
    }
}

impl<T> Clone for ConfigStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

// -- ConfigWatcher ------------------------------------------------------

impl<T> ConfigWatcher<T> {
    /// Wait until the store publishes a value this watcher has not seen.
    ///
    /// Returns `Err` once every handle to the [`ConfigStore`] has been dropped.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.rx.changed().await
    }

    /// The latest published value, marking it as seen.
    pub fn current(&mut self) -> Arc<T> {
        Arc::clone(&self.rx.borrow_and_update().value)
    }
}
