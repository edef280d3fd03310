use serde::Deserialize;

pub const DEFAULT_LIMIT: u32 = 100;

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// `?skip=&limit=` for list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// List query for process responses, optionally scoped to one session
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessResponseQuery {
    pub session_id: Option<String>,
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Query;

    #[test]
    fn test_list_query_defaults() {
        let query = Query::<ListQuery>::from_query("").unwrap();
        assert_eq!(query.skip, 0);
        assert_eq!(query.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_negative_skip_is_rejected() {
        assert!(Query::<ListQuery>::from_query("skip=-1").is_err());
    }

    #[test]
    fn test_process_response_query() {
        let query =
            Query::<ProcessResponseQuery>::from_query("session_id=abc&limit=5").unwrap();
        assert_eq!(query.session_id.as_deref(), Some("abc"));
        assert_eq!(query.skip, 0);
        assert_eq!(query.limit, 5);
    }
}
