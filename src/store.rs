/// Owned state container that notifies subscribers when its value changes.
pub struct Store<T> {
    value: T,
    next_id: usize,
    subscribers: Vec<(SubscriptionId, Box<dyn Fn(&T) + Send + Sync>)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

impl<T: Clone + PartialEq> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn snapshot(&self) -> T {
        self.value.clone()
    }

    pub fn subscribe(&mut self, f: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn clear_subscribers(&mut self) {
        self.subscribers.clear();
    }

    /// Applies `f` and notifies subscribers if the value changed.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) -> bool {
        let mut next = self.value.clone();
        f(&mut next);
        if next == self.value {
            return false;
        }
        self.value = next;
        for (_, sub) in &self.subscribers {
            sub(&self.value);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    #[test]
    fn test_notifies_only_on_change() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut store = Store::new(1);
        let c = calls.clone();
        store.subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        assert!(store.update(|v| *v = 2));
        assert!(!store.update(|v| *v = 2));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*store.get(), 2);
    }

    #[test]
    fn test_unsubscribe() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut store = Store::new(String::new());
        let c = calls.clone();
        let id = store.subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.update(|s| s.push('x'));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.snapshot(), "x");
    }
}
