use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod client_info;
pub mod coerce;
pub mod process_response;
pub mod qualification;
pub mod typescript_gen;

pub use client_info::{ClientInfo, ClientInfoCreate, ClientInfoUpdate};
pub use process_response::{ProcessResponse, ProcessResponseCreate, ProcessResponseUpdate};
pub use qualification::{
    QualificationQuestion, QualificationQuestionCreate, QualificationQuestionUpdate,
};
pub use typescript_gen::generate_typescript_definitions;

// Shared wire models for the intake API and its clients

/// Body returned for every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Acknowledgment returned by delete endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VersionResponse {
    pub version: String,
    pub service: String,
}
