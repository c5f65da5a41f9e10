//! Notification sink backed by a bounded toast queue.

use std::collections::VecDeque;

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::{Notification, TOAST_DURATION_MS, TOAST_LIMIT};

/// Fire-and-forget sink for user-facing notifications.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// A notification currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
    limit: usize,
}

impl ToastQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 0,
            limit: limit.max(1),
        }
    }

    /// Queue a notification, evicting the oldest toasts past the limit.
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        while self.toasts.len() >= self.limit {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast { id, notification });
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(TOAST_LIMIT)
    }
}

/// Browser notifier, shared through the Leptos context.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
}

impl Toasts {
    /// Create the queue and make it available to child components.
    pub fn provide() -> Self {
        let toasts = Self {
            queue: create_rw_signal(ToastQueue::default()),
        };
        provide_context(toasts);
        toasts
    }

    /// Fetch the notifier provided by [`Toasts::provide`].
    ///
    /// Without one, returns a detached queue that no `Toaster` renders.
    pub fn from_context() -> Self {
        use_context::<Toasts>().unwrap_or_else(|| {
            log::error!("❌ No toast context found, notifications will not be shown");
            Self {
                queue: create_rw_signal(ToastQueue::default()),
            }
        })
    }

    pub fn queue(&self) -> RwSignal<ToastQueue> {
        self.queue
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| {
            queue.dismiss(id);
        });
    }
}

impl Notifier for Toasts {
    fn notify(&self, notification: Notification) {
        log::debug!("🔔 {}: {}", notification.title, notification.description);

        let Some(id) = self.queue.try_update(|queue| queue.push(notification)) else {
            return;
        };

        // The queue may be gone by the time this fires
        let queue = self.queue;
        Timeout::new(TOAST_DURATION_MS, move || {
            queue.try_update(|queue| queue.dismiss(id));
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_evicts_oldest_past_limit() {
        let mut queue = ToastQueue::new(2);
        let first = queue.push(Notification::info("one", ""));
        queue.push(Notification::info("two", ""));
        queue.push(Notification::info("three", ""));

        assert_eq!(queue.len(), 2);
        let titles: Vec<_> = queue.toasts().map(|t| t.notification.title.as_str()).collect();
        assert_eq!(titles, vec!["two", "three"]);
        assert!(!queue.dismiss(first));
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        let id = queue.push(Notification::destructive("Date Required", "Pick a date"));

        assert!(queue.dismiss(id));
        assert!(queue.is_empty());
        assert!(!queue.dismiss(id));
    }

    #[test]
    fn test_from_context_returns_provided_queue() {
        let runtime = create_runtime();

        let provided = Toasts::provide();
        assert_eq!(Toasts::from_context().queue(), provided.queue());

        runtime.dispose();
    }

    #[test]
    fn test_from_context_without_provider_stays_local() {
        let runtime = create_runtime();

        let local = Toasts::from_context();
        local.dismiss(0);
        assert!(use_context::<Toasts>().is_none());
        assert!(local.queue().with(|q| q.is_empty()));

        runtime.dispose();
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut queue = ToastQueue::new(1);
        let a = queue.push(Notification::info("a", ""));
        queue.dismiss(a);
        let b = queue.push(Notification::info("b", ""));
        assert_ne!(a, b);
    }
}
