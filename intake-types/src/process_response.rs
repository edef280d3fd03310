use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One question/answer pair captured during an interaction session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessResponse {
    #[ts(type = "number")]
    pub id: i64,
    /// Opaque grouping key, shared by every response of one session
    pub session_id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessResponseCreate {
    pub session_id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessResponseUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl ProcessResponse {
    pub fn apply(&mut self, patch: ProcessResponseUpdate) {
        if let Some(session_id) = patch.session_id {
            self.session_id = session_id;
        }
        if let Some(question) = patch.question {
            self.question = question;
        }
        if let Some(answer) = patch.answer {
            self.answer = answer;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_can_be_cleared() {
        let mut response = ProcessResponse {
            id: 3,
            session_id: "s-1".to_string(),
            question: "Team size?".to_string(),
            answer: "12".to_string(),
        };
        response.apply(ProcessResponseUpdate {
            answer: Some(String::new()),
            ..Default::default()
        });

        assert_eq!(response.answer, "");
        assert_eq!(response.question, "Team size?");
        assert_eq!(response.session_id, "s-1");
    }
}
