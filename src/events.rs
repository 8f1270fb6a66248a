use bevy_reflect::PartialReflect;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct SignalInner {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

/// Parameterless change notification. Clones share the same listener list.
#[derive(Clone, Default)]
pub struct Signal {
    inner: Rc<RefCell<SignalInner>>,
}

impl Signal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Returns `false` when `id` was not (or is no longer) subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(existing, _)| *existing != id);
        inner.listeners.len() != before
    }

    pub fn emit(&self) {
        // Snapshot so listeners may subscribe or unsubscribe while being notified.
        let listeners: Vec<Listener> =
            self.inner.borrow().listeners.iter().map(|(_, listener)| Rc::clone(listener)).collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal").field("listeners", &self.listener_count()).finish()
    }
}

/// One committed member edit. `previous` and `value` are reflected snapshots that an undo step can
/// apply back onto the member.
#[derive(Debug)]
pub struct EditRecord {
    pub object_type: String,
    pub member: String,
    pub previous: Box<dyn PartialReflect>,
    pub value: Box<dyn PartialReflect>,
    pub previous_text: String,
    pub value_text: String,
}

impl Clone for EditRecord {
    fn clone(&self) -> Self {
        Self {
            object_type: self.object_type.clone(),
            member: self.member.clone(),
            previous: self.previous.clone_value(),
            value: self.value.clone_value(),
            previous_text: self.previous_text.clone(),
            value_text: self.value_text.clone(),
        }
    }
}

impl fmt::Display for EditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}: {} -> {}", self.object_type, self.member, self.previous_text, self.value_text)
    }
}

/// Committed edits waiting for the undo collaborator. Every push raises `queue_changed`.
#[derive(Debug, Default)]
pub struct EditQueue {
    records: RefCell<Vec<EditRecord>>,
    queue_changed: Signal,
}

impl EditQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, record: EditRecord) {
        self.records.borrow_mut().push(record);
        self.queue_changed.emit();
    }

    pub fn drain(&self) -> Vec<EditRecord> {
        let drained: Vec<EditRecord> = self.records.borrow_mut().drain(..).collect();
        if !drained.is_empty() {
            self.queue_changed.emit();
        }
        drained
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    pub fn last(&self) -> Option<EditRecord> {
        self.records.borrow().last().cloned()
    }

    pub fn queue_changed(&self) -> &Signal {
        &self.queue_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn unsubscribe_is_idempotent() {
        let signal = Signal::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let id = signal.subscribe(move || counter.set(counter.get() + 1));
        signal.emit();
        assert!(signal.unsubscribe(id));
        assert!(!signal.unsubscribe(id), "second unsubscribe reports nothing removed");
        signal.emit();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn push_notifies_and_drain_empties() {
        let queue = EditQueue::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        queue.queue_changed().subscribe(move || counter.set(counter.get() + 1));
        queue.push(EditRecord {
            object_type: "Camera".to_string(),
            member: "zoom".to_string(),
            previous: Box::new(1.0f32),
            value: Box::new(2.0f32),
            previous_text: "1.000".to_string(),
            value_text: "2.000".to_string(),
        });
        assert_eq!(queue.len(), 1);
        assert_eq!(hits.get(), 1);
        let drained = queue.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].to_string(), "Camera.zoom: 1.000 -> 2.000");
        assert_eq!(drained[0].clone().value.try_downcast_ref::<f32>(), Some(&2.0));
        assert!(queue.is_empty());
        assert_eq!(hits.get(), 2);
        assert!(queue.drain().is_empty());
        assert_eq!(hits.get(), 2, "draining an empty queue stays quiet");
    }
}
