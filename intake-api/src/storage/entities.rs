use super::records::{Filter, Record};
use intake_types::{
    ClientInfo, ClientInfoCreate, ClientInfoUpdate, ProcessResponse, ProcessResponseCreate,
    ProcessResponseUpdate, QualificationQuestion, QualificationQuestionCreate,
    QualificationQuestionUpdate,
};
use rusqlite::types::Value;
use rusqlite::Row;

impl Record for QualificationQuestion {
    type Create = QualificationQuestionCreate;
    type Update = QualificationQuestionUpdate;

    const TABLE: &'static str = "qualification_question";
    const COLUMNS: &'static [&'static str] = &["question_text", "phase_id", "is_active"];
    const LABEL: &'static str = "Question";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(QualificationQuestion {
            id: row.get("id")?,
            question_text: row.get("question_text")?,
            phase_id: row.get("phase_id")?,
            is_active: row.get("is_active")?,
        })
    }

    fn create_values(payload: Self::Create) -> Vec<Value> {
        vec![
            payload.question_text.into(),
            payload.phase_id.into(),
            payload.is_active.into(),
        ]
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.question_text.clone().into(),
            self.phase_id.into(),
            self.is_active.into(),
        ]
    }

    fn merge(&mut self, patch: Self::Update) {
        self.apply(patch);
    }
}

impl Record for ClientInfo {
    type Create = ClientInfoCreate;
    type Update = ClientInfoUpdate;

    const TABLE: &'static str = "client_info";
    const COLUMNS: &'static [&'static str] = &[
        "company_name",
        "website_url",
        "industry",
        "contact_first_name",
        "contact_last_name",
        "contact_email",
        "number_employees",
        "number_clients",
        "sells_product",
        "sells_service",
        "description",
    ];
    const LABEL: &'static str = "Client info";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(ClientInfo {
            id: row.get("id")?,
            company_name: row.get("company_name")?,
            website_url: row.get("website_url")?,
            industry: row.get("industry")?,
            contact_first_name: row.get("contact_first_name")?,
            contact_last_name: row.get("contact_last_name")?,
            contact_email: row.get("contact_email")?,
            number_employees: row.get("number_employees")?,
            number_clients: row.get("number_clients")?,
            sells_product: row.get("sells_product")?,
            sells_service: row.get("sells_service")?,
            description: row.get("description")?,
        })
    }

    fn create_values(payload: Self::Create) -> Vec<Value> {
        vec![
            payload.company_name.into(),
            payload.website_url.into(),
            payload.industry.into(),
            payload.contact_first_name.into(),
            payload.contact_last_name.into(),
            payload.contact_email.into(),
            payload.number_employees.into(),
            payload.number_clients.into(),
            payload.sells_product.into(),
            payload.sells_service.into(),
            payload.description.into(),
        ]
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.company_name.clone().into(),
            self.website_url.clone().into(),
            self.industry.clone().into(),
            self.contact_first_name.clone().into(),
            self.contact_last_name.clone().into(),
            self.contact_email.clone().into(),
            self.number_employees.into(),
            self.number_clients.into(),
            self.sells_product.into(),
            self.sells_service.into(),
            self.description.clone().into(),
        ]
    }

    fn merge(&mut self, patch: Self::Update) {
        self.apply(patch);
    }
}

impl Record for ProcessResponse {
    type Create = ProcessResponseCreate;
    type Update = ProcessResponseUpdate;

    const TABLE: &'static str = "process_response";
    const COLUMNS: &'static [&'static str] = &["session_id", "question", "answer"];
    const LABEL: &'static str = "Response";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(ProcessResponse {
            id: row.get("id")?,
            session_id: row.get("session_id")?,
            question: row.get("question")?,
            answer: row.get("answer")?,
        })
    }

    fn create_values(payload: Self::Create) -> Vec<Value> {
        vec![
            payload.session_id.into(),
            payload.question.into(),
            payload.answer.into(),
        ]
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.session_id.clone().into(),
            self.question.clone().into(),
            self.answer.clone().into(),
        ]
    }

    fn merge(&mut self, patch: Self::Update) {
        self.apply(patch);
    }
}

/// Filter for listing the responses of one session
///
/// An empty session id means "no filter", matching a missing one.
pub fn session_filter(session_id: Option<&str>) -> Option<Filter> {
    session_id
        .filter(|id| !id.is_empty())
        .map(|id| Filter::equals("session_id", id.to_string()))
}
