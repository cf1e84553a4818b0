use super::bus::{NotificationBus, NotificationEvent, NotificationKind, Subscription};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// What a presenter currently shows. There is exactly one slot: the latest event wins.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Slot {
    #[default]
    Idle,
    Visible {
        event: NotificationEvent,
        expires_at: Instant,
    },
}

/// Reactive renderer state for one notification kind (HUD or island).
///
/// The presenter subscribes itself on creation and unsubscribes when dropped, so a
/// torn-down presenter never receives a stale event.
pub struct Presenter {
    kind: NotificationKind,
    default_duration: Duration,
    slot: Arc<Mutex<Slot>>,
    _subscription: Subscription,
}

impl Presenter {
    pub fn attach(bus: &NotificationBus, kind: NotificationKind, default_duration: Duration) -> Self {
        let slot = Arc::new(Mutex::new(Slot::Idle));
        let handler_slot = Arc::clone(&slot);
        let subscription = bus.subscribe(kind, move |event| {
            show(&handler_slot, event.clone(), default_duration, Instant::now());
        });

        Self {
            kind,
            default_duration,
            slot,
            _subscription: subscription,
        }
    }

    #[must_use]
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Shows `event` as of `now`, replacing whatever was visible and restarting the timer.
    pub fn receive(&self, event: NotificationEvent, now: Instant) {
        if event.kind() != self.kind {
            return;
        }
        show(&self.slot, event, self.default_duration, now);
    }

    #[must_use]
    pub fn slot(&self) -> Slot {
        self.slot.lock().clone()
    }

    #[must_use]
    pub fn visible(&self) -> Option<NotificationEvent> {
        match &*self.slot.lock() {
            Slot::Visible { event, .. } => Some(event.clone()),
            Slot::Idle => None,
        }
    }

    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        match &*self.slot.lock() {
            Slot::Visible { expires_at, .. } => Some(*expires_at),
            Slot::Idle => None,
        }
    }

    /// Reverts to idle once the deadline has passed. Returns true if something was hidden.
    pub fn expire(&self, now: Instant) -> bool {
        let mut slot = self.slot.lock();
        match &*slot {
            Slot::Visible { expires_at, .. } if now >= *expires_at => {
                *slot = Slot::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss(&self) {
        *self.slot.lock() = Slot::Idle;
    }
}

fn show(slot: &Mutex<Slot>, event: NotificationEvent, default_duration: Duration, now: Instant) {
    let duration = event
        .duration()
        .filter(|d| !d.is_zero())
        .unwrap_or(default_duration);
    *slot.lock() = Slot::Visible {
        event,
        expires_at: now + duration,
    };
}

impl fmt::Debug for Presenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Presenter")
            .field("kind", &self.kind)
            .field("slot", &*self.slot.lock())
            .finish()
    }
}
