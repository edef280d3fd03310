use crate::coerce;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Intake details for a prospective client company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClientInfo {
    #[ts(type = "number")]
    pub id: i64,
    pub company_name: String,
    pub website_url: String,
    pub industry: String,
    pub contact_first_name: String,
    pub contact_last_name: String,
    pub contact_email: String,
    #[ts(type = "number")]
    pub number_employees: i64,
    #[ts(type = "number")]
    pub number_clients: i64,
    pub sells_product: bool,
    pub sells_service: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClientInfoCreate {
    pub company_name: String,
    pub website_url: String,
    pub industry: String,
    pub contact_first_name: String,
    pub contact_last_name: String,
    pub contact_email: String,
    #[serde(deserialize_with = "coerce::int")]
    #[ts(type = "number")]
    pub number_employees: i64,
    #[serde(deserialize_with = "coerce::int")]
    #[ts(type = "number")]
    pub number_clients: i64,
    #[serde(deserialize_with = "coerce::boolean")]
    pub sells_product: bool,
    #[serde(deserialize_with = "coerce::boolean")]
    pub sells_service: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClientInfoUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(
        default,
        deserialize_with = "coerce::option_int",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(type = "number | null")]
    pub number_employees: Option<i64>,
    #[serde(
        default,
        deserialize_with = "coerce::option_int",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(type = "number | null")]
    pub number_clients: Option<i64>,
    #[serde(
        default,
        deserialize_with = "coerce::option_boolean",
        skip_serializing_if = "Option::is_none"
    )]
    pub sells_product: Option<bool>,
    #[serde(
        default,
        deserialize_with = "coerce::option_boolean",
        skip_serializing_if = "Option::is_none"
    )]
    pub sells_service: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ClientInfo {
    pub fn apply(&mut self, patch: ClientInfoUpdate) {
        if let Some(company_name) = patch.company_name {
            self.company_name = company_name;
        }
        if let Some(website_url) = patch.website_url {
            self.website_url = website_url;
        }
        if let Some(industry) = patch.industry {
            self.industry = industry;
        }
        if let Some(contact_first_name) = patch.contact_first_name {
            self.contact_first_name = contact_first_name;
        }
        if let Some(contact_last_name) = patch.contact_last_name {
            self.contact_last_name = contact_last_name;
        }
        if let Some(contact_email) = patch.contact_email {
            self.contact_email = contact_email;
        }
        if let Some(number_employees) = patch.number_employees {
            self.number_employees = number_employees;
        }
        if let Some(number_clients) = patch.number_clients {
            self.number_clients = number_clients;
        }
        if let Some(sells_product) = patch.sells_product {
            self.sells_product = sells_product;
        }
        if let Some(sells_service) = patch.sells_service {
            self.sells_service = sells_service;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}
