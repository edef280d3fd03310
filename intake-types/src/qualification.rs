use crate::coerce;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

fn default_active() -> bool {
    true
}

/// A qualification question asked during a given phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QualificationQuestion {
    #[ts(type = "number")]
    pub id: i64,
    pub question_text: String,
    /// Refers to a phase defined outside this service
    #[ts(type = "number")]
    pub phase_id: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QualificationQuestionCreate {
    pub question_text: String,
    #[serde(deserialize_with = "coerce::int")]
    #[ts(type = "number")]
    pub phase_id: i64,
    #[serde(default = "default_active", deserialize_with = "coerce::boolean")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QualificationQuestionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_text: Option<String>,
    #[serde(
        default,
        deserialize_with = "coerce::option_int",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(type = "number | null")]
    pub phase_id: Option<i64>,
    #[serde(
        default,
        deserialize_with = "coerce::option_boolean",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_active: Option<bool>,
}

impl QualificationQuestion {
    pub fn apply(&mut self, patch: QualificationQuestionUpdate) {
        if let Some(question_text) = patch.question_text {
            self.question_text = question_text;
        }
        if let Some(phase_id) = patch.phase_id {
            self.phase_id = phase_id;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }
}
