pub mod client_info;
pub mod health;
pub mod process_responses;
pub mod qualification_questions;
