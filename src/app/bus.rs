//! Process-wide publish/subscribe channel for ephemeral notifications.
//!
//! Two kinds of signal travel on the bus: HUD confirmations of a toggle the user just
//! applied, and island banners for ambient activity. Delivery is synchronous and
//! fire-and-forget; there is no queue.

use crate::domain::models::Icon;
use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;

pub const HUD_DURATION: Duration = Duration::from_millis(1500);
pub const ISLAND_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Hud,
    Island,
}

impl NotificationKind {
    #[must_use]
    pub fn default_duration(self) -> Duration {
        match self {
            NotificationKind::Hud => HUD_DURATION,
            NotificationKind::Island => ISLAND_DURATION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
    Recording,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HudNotice {
    pub label: String,
    pub icon: Option<Icon>,
    /// Presentation only: `Some(false)` tints the icon as "off".
    pub active: Option<bool>,
}

impl HudNotice {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            active: None,
        }
    }

    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IslandNotice {
    pub label: String,
    pub icon: Option<Icon>,
    pub severity: Option<Severity>,
    pub duration: Option<Duration>,
}

impl IslandNotice {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            severity: None,
            duration: None,
        }
    }

    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationEvent {
    Hud(HudNotice),
    Island(IslandNotice),
}

impl NotificationEvent {
    #[must_use]
    pub fn kind(&self) -> NotificationKind {
        match self {
            NotificationEvent::Hud(_) => NotificationKind::Hud,
            NotificationEvent::Island(_) => NotificationKind::Island,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            NotificationEvent::Hud(n) => &n.label,
            NotificationEvent::Island(n) => &n.label,
        }
    }

    /// Icon to draw, falling back to a kind-specific default.
    #[must_use]
    pub fn icon(&self) -> Icon {
        match self {
            NotificationEvent::Hud(n) => n.icon.unwrap_or(Icon::Check),
            NotificationEvent::Island(n) => n.icon.unwrap_or(Icon::Bell),
        }
    }

    /// Explicit display duration, if the publisher asked for one.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        match self {
            NotificationEvent::Hud(_) => None,
            NotificationEvent::Island(n) => n.duration,
        }
    }
}

impl From<HudNotice> for NotificationEvent {
    fn from(notice: HudNotice) -> Self {
        NotificationEvent::Hud(notice)
    }
}

impl From<IslandNotice> for NotificationEvent {
    fn from(notice: IslandNotice) -> Self {
        NotificationEvent::Island(notice)
    }
}

type Handler = Arc<dyn Fn(&NotificationEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, NotificationKind, Handler)>,
}

/// Cheap, clonable handle; every clone talks to the same set of subscribers.
#[derive(Clone, Default)]
pub struct NotificationBus {
    inner: Arc<Mutex<Registry>>,
}

impl NotificationBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `event` to every handler subscribed to its kind, in subscription order.
    ///
    /// Handlers run after the registry lock is released, so a handler may itself
    /// publish or unsubscribe. A panicking handler is a bug in that handler.
    pub fn publish(&self, event: impl Into<NotificationEvent>) {
        let event = event.into();
        let kind = event.kind();
        let handlers: Vec<Handler> = self
            .inner
            .lock()
            .handlers
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, handler)| Arc::clone(handler))
            .collect();

        tracing::debug!(?kind, label = event.label(), subscribers = handlers.len(), "publish");
        for handler in handlers {
            handler(&event);
        }
    }

    pub fn subscribe<F>(&self, kind: NotificationKind, handler: F) -> Subscription
    where
        F: Fn(&NotificationEvent) + Send + Sync + 'static,
    {
        let mut registry = self.inner.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, kind, Arc::new(handler)));

        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    #[must_use]
    pub fn subscriber_count(&self, kind: NotificationKind) -> usize {
        self.inner
            .lock()
            .handlers
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .count()
    }
}

impl fmt::Debug for NotificationBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.inner.lock();
        f.debug_struct("NotificationBus")
            .field("subscribers", &registry.handlers.len())
            .finish()
    }
}

/// Handle returned by [`NotificationBus::subscribe`]. Dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.lock().handlers.retain(|(id, _, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Seen = Arc<Mutex<Vec<String>>>;

    fn recorder(bus: &NotificationBus, kind: NotificationKind) -> (Seen, Subscription) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let sub = bus.subscribe(kind, move |event| {
            sink.lock().push(event.label().to_string());
        });
        (seen, sub)
    }

    #[test]
    fn test_publish_reaches_only_matching_kind() {
        let bus = NotificationBus::new();
        let (huds, _hud_sub) = recorder(&bus, NotificationKind::Hud);
        let (islands, _island_sub) = recorder(&bus, NotificationKind::Island);

        bus.publish(HudNotice::new("Microphone Off"));
        bus.publish(IslandNotice::new("Ada joined"));

        assert_eq!(*huds.lock(), vec!["Microphone Off"]);
        assert_eq!(*islands.lock(), vec!["Ada joined"]);
    }

    #[test]
    fn test_multiple_subscribers_all_receive() {
        let bus = NotificationBus::new();
        let (first, _a) = recorder(&bus, NotificationKind::Island);
        let (second, _b) = recorder(&bus, NotificationKind::Island);

        bus.publish(IslandNotice::new("Recording started"));

        assert_eq!(first.lock().len(), 1);
        assert_eq!(second.lock().len(), 1);
        assert_eq!(bus.subscriber_count(NotificationKind::Island), 2);
    }

    #[test]
    fn test_unsubscribe_and_drop_remove_handler() {
        let bus = NotificationBus::new();
        let (seen, sub) = recorder(&bus, NotificationKind::Hud);
        sub.unsubscribe();
        bus.publish(HudNotice::new("Camera Off"));
        assert!(seen.lock().is_empty());

        {
            let (_seen, _scoped) = recorder(&bus, NotificationKind::Hud);
            assert_eq!(bus.subscriber_count(NotificationKind::Hud), 1);
        }
        assert_eq!(bus.subscriber_count(NotificationKind::Hud), 0);
    }

    #[test]
    fn test_publish_without_subscribers_is_harmless() {
        let bus = NotificationBus::new();
        bus.publish(IslandNotice::new("nobody listening"));
    }

    #[test]
    fn test_handler_may_publish_reentrantly() {
        let bus = NotificationBus::new();
        let (islands, _island_sub) = recorder(&bus, NotificationKind::Island);
        let relay = bus.clone();
        let _hud_sub = bus.subscribe(NotificationKind::Hud, move |event| {
            relay.publish(IslandNotice::new(format!("relayed {}", event.label())));
        });

        bus.publish(HudNotice::new("Hand Raised"));
        assert_eq!(*islands.lock(), vec!["relayed Hand Raised"]);
    }

    #[test]
    fn test_defaults() {
        let hud: NotificationEvent = HudNotice::new("x").into();
        let island: NotificationEvent = IslandNotice::new("y").into();
        assert_eq!(hud.icon(), Icon::Check);
        assert_eq!(island.icon(), Icon::Bell);
        assert_eq!(hud.duration(), None);
        assert_eq!(
            NotificationKind::Island.default_duration(),
            Duration::from_millis(3000)
        );
        assert_eq!(
            NotificationKind::Hud.default_duration(),
            Duration::from_millis(1500)
        );
    }
}
