use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeetingError {
    #[error("no active call")]
    NoActiveCall,
    #[error("invalid meeting link: {0}")]
    InvalidLink(String),
    #[error("not signed in")]
    SignedOut,
}
