use std::fmt::Debug;

use futures::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A last-value-caching reactive cell.
///
/// Watchers receive the current value immediately when they subscribe,
/// then every value published afterwards. Publishing is unconditional:
/// setting a value equal to the current one still wakes watchers, one
/// notification per publish.
#[derive(Clone)]
pub struct Property<T: Clone + Send + Sync + 'static> {
    tx: watch::Sender<T>,
    // Held so the channel stays open for the lifetime of the property,
    // even with no external watchers.
    rx: watch::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(initial: T) -> Self {
        let (tx, rx) = watch::channel(initial);
        Self { tx, rx }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Replace the value and notify all watchers.
    ///
    /// Only the owning store publishes; external consumers read.
    pub(crate) fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Mutate the value in place and notify all watchers once.
    ///
    /// The closure runs to completion before any watcher observes the
    /// value, so a multi-field change is a single notification cycle.
    pub(crate) fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Watch this property.
    ///
    /// The stream yields the current value immediately, then yields on
    /// every publish. It never completes while the property is alive, and
    /// dropping it releases the subscription.
    pub fn watch(&self) -> impl Stream<Item = T> + Send {
        WatchStream::new(self.rx.clone())
    }
}

impl<T: Clone + Send + Sync + Debug + 'static> Debug for Property<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}
