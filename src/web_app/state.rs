// web_app/state.rs - Published in-memory state
//
// A `Published<T>` holds the latest value of some derived view and hands it to
// any number of subscribers. New subscribers see the current value right away;
// existing ones are woken on every publish.

use tokio::sync::watch;

#[derive(Debug)]
pub struct Published<T> {
    tx: watch::Sender<T>,
}

impl<T> Published<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Replace the value and notify every subscriber
    ///
    /// Publishing with no subscribers still stores the value for later ones.
    pub fn publish(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Mutate the value in place and notify every subscriber
    pub fn modify(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Receiver that starts out with the latest value marked as seen
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T: Clone> Published<T> {
    /// Clone of the current value
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: Default> Default for Published<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
