use crate::domain::{
    error::MeetingError,
    meeting::MeetingFacade,
    models::{CallEvent, MeetingId, MeetingInfo},
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DurationRound, Local, TimeDelta};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

const EVENT_CAPACITY: usize = 32;

/// In-process stand-in for the hosted video SDK.
///
/// Devices start live, toggles fail while no call is active, and every call that
/// starts replays `script` as ambient call activity.
pub struct SimulatedMeeting {
    session: Mutex<Session>,
    events: broadcast::Sender<CallEvent>,
    script: Vec<(Duration, CallEvent)>,
    next_id: AtomicU64,
}

struct Session {
    signed_in: bool,
    active: Option<MeetingId>,
    microphone: bool,
    camera: bool,
    script_task: Option<JoinHandle<()>>,
}

impl SimulatedMeeting {
    #[must_use]
    pub fn new() -> Self {
        Self::with_script(default_script())
    }

    #[must_use]
    pub fn with_script(script: Vec<(Duration, CallEvent)>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            session: Mutex::new(Session {
                signed_in: true,
                active: None,
                microphone: true,
                camera: true,
                script_task: None,
            }),
            events,
            script,
            next_id: AtomicU64::new(1),
        }
    }

    fn generate_id(&self) -> MeetingId {
        let seq = self.next_id.fetch_add(1, Ordering::Relaxed);
        MeetingId(format!("{:x}-{seq:04}", Local::now().timestamp()))
    }

    fn ensure_signed_in(session: &Session) -> Result<()> {
        if session.signed_in {
            Ok(())
        } else {
            Err(MeetingError::SignedOut.into())
        }
    }

    fn begin(&self, session: &mut Session, id: MeetingId) {
        if let Some(task) = session.script_task.take() {
            task.abort();
        }
        session.active = Some(id.clone());
        session.microphone = true;
        session.camera = true;

        let script = self.script.clone();
        let events = self.events.clone();
        session.script_task = Some(tokio::spawn(async move {
            for (delay, event) in script {
                tokio::time::sleep(delay).await;
                tracing::debug!(meeting = %id, ?event, "simulated call event");
                let _ = events.send(event);
            }
        }));
    }

    fn end(session: &mut Session) {
        if let Some(task) = session.script_task.take() {
            task.abort();
        }
        session.active = None;
    }
}

impl Default for SimulatedMeeting {
    fn default() -> Self {
        Self::new()
    }
}

#[must_use]
pub fn default_script() -> Vec<(Duration, CallEvent)> {
    vec![
        (
            Duration::from_secs(2),
            CallEvent::ParticipantJoined("Ada".to_string()),
        ),
        (
            Duration::from_secs(3),
            CallEvent::ParticipantJoined("Linus".to_string()),
        ),
        (Duration::from_secs(4), CallEvent::RecordingStarted),
        (
            Duration::from_secs(6),
            CallEvent::ParticipantLeft("Linus".to_string()),
        ),
        (Duration::from_secs(5), CallEvent::RecordingStopped),
    ]
}

#[async_trait]
impl MeetingFacade for SimulatedMeeting {
    async fn toggle_microphone(&self) -> Result<bool> {
        let mut session = self.session.lock();
        if session.active.is_none() {
            return Err(MeetingError::NoActiveCall.into());
        }
        session.microphone = !session.microphone;
        Ok(session.microphone)
    }

    async fn toggle_camera(&self) -> Result<bool> {
        let mut session = self.session.lock();
        if session.active.is_none() {
            return Err(MeetingError::NoActiveCall.into());
        }
        session.camera = !session.camera;
        Ok(session.camera)
    }

    async fn start_instant_meeting(&self) -> Result<MeetingInfo> {
        let mut session = self.session.lock();
        Self::ensure_signed_in(&session)?;

        let id = self.generate_id();
        self.begin(&mut session, id.clone());
        Ok(MeetingInfo {
            id,
            description: "Instant Meeting".to_string(),
            starts_at: Local::now(),
        })
    }

    async fn join_meeting(&self, id: &MeetingId) -> Result<MeetingInfo> {
        let mut session = self.session.lock();
        Self::ensure_signed_in(&session)?;
        if id.0.is_empty() {
            return Err(MeetingError::InvalidLink(id.0.clone()).into());
        }

        self.begin(&mut session, id.clone());
        Ok(MeetingInfo {
            id: id.clone(),
            description: format!("Meeting {id}"),
            starts_at: Local::now(),
        })
    }

    async fn schedule_meeting(&self, description: &str) -> Result<MeetingInfo> {
        let session = self.session.lock();
        Self::ensure_signed_in(&session)?;

        // Scheduled calls start on the next full hour.
        let now = Local::now();
        let starts_at = now
            .duration_trunc(TimeDelta::hours(1))
            .unwrap_or(now)
            + TimeDelta::hours(1);
        Ok(MeetingInfo {
            id: self.generate_id(),
            description: description.to_string(),
            starts_at,
        })
    }

    async fn leave_meeting(&self) -> Result<()> {
        let mut session = self.session.lock();
        if session.active.is_none() {
            return Err(MeetingError::NoActiveCall.into());
        }
        Self::end(&mut session);
        Ok(())
    }

    async fn sign_out(&self) -> Result<()> {
        let mut session = self.session.lock();
        Self::end(&mut session);
        session.signed_in = false;
        Ok(())
    }

    fn call_events(&self) -> broadcast::Receiver<CallEvent> {
        self.events.subscribe()
    }
}
