/// Event name emitted when a path computation produces a polyline
pub const PATH_COMPLETE_EVENT: &str = "end";

/// Listener for map events
///
/// Closures with the matching signature can be subscribed directly.
pub trait MapObserver {
    fn notify(&mut self, event: &str, success: bool);
}

impl<F: FnMut(&str, bool)> MapObserver for F {
    fn notify(&mut self, event: &str, success: bool) {
        self(event, success)
    }
}

/// Fan-out registry of map observers
///
/// Observers are notified in subscription order.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Box<dyn MapObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        ObserverRegistry {
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn MapObserver>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn emit(&mut self, event: &str, success: bool) {
        for observer in &mut self.observers {
            observer.notify(event, success);
        }
    }
}
