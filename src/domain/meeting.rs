use crate::domain::models::{CallEvent, MeetingId, MeetingInfo};
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::broadcast;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MeetingFacade: Send + Sync {
    // Device toggles report the state after the change (true = live)
    async fn toggle_microphone(&self) -> Result<bool>;
    async fn toggle_camera(&self) -> Result<bool>;

    async fn start_instant_meeting(&self) -> Result<MeetingInfo>;
    async fn join_meeting(&self, id: &MeetingId) -> Result<MeetingInfo>;
    async fn schedule_meeting(&self, description: &str) -> Result<MeetingInfo>;
    async fn leave_meeting(&self) -> Result<()>;

    async fn sign_out(&self) -> Result<()>;

    // Presence and recording activity for whichever call is active
    fn call_events(&self) -> broadcast::Receiver<CallEvent>;
}
