//! # BambooHR API Client
//!
//! This module provides the client for the BambooHR REST API. It handles
//! request construction, Basic authentication, and response parsing; every
//! failure here is terminal for the running command, so there are no retries
//! and no partial results.

use crate::{
    errors::BhrError,
    types::{Directory, IndividualEmployee},
};
use reqwest::header;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::info;

/// Host of the hosted BambooHR API gateway.
const API_HOST: &str = "https://api.bamboohr.com";

/// Timeout applied to every API request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fields requested from the single-employee endpoint. Kept in sync with
/// [`IndividualEmployee`]; anything not listed here comes back absent.
const EMPLOYEE_FIELDS: &[&str] = &[
    "id",
    "displayName",
    "firstName",
    "lastName",
    "preferredName",
    "jobTitle",
    "department",
    "division",
    "location",
    "supervisor",
    "supervisorId",
    "supervisorEmail",
    "workEmail",
    "homeEmail",
    "bestEmail",
    "workPhone",
    "mobilePhone",
    "hireDate",
    "originalHireDate",
    "city",
    "state",
    "country",
    "employeeNumber",
    "lastChanged",
    "photoUploaded",
    "photoUrl",
];

/// The client for making calls to the BambooHR REST API.
///
/// Authentication is HTTP Basic with the API key as the username and an
/// empty password, per the BambooHR API convention.
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl Client {
    /// Creates a client for a company's hosted BambooHR tenant.
    pub fn new(api_key: impl Into<String>, company_domain: &str) -> Result<Self, BhrError> {
        Self::with_base_url(
            api_key,
            format!("{API_HOST}/api/gateway.php/{company_domain}/v1"),
        )
    }

    /// Creates a client against an explicit base URL. This is how tests point
    /// the client at a mock server.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, BhrError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("bhr/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(BhrError::ClientBuild)?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Fetches the full employee directory.
    ///
    /// The directory endpoint is not paginated; the response is assumed to
    /// carry the complete employee list in one payload.
    pub async fn fetch_directory(&self) -> Result<Directory, BhrError> {
        let url = format!("{}/employees/directory", self.base_url);
        info!("Fetching employee directory from: {url}");
        self.get_json(&url).await
    }

    /// Fetches one employee's detail record. Id `0` designates the owner of
    /// the API key.
    pub async fn fetch_employee(&self, id: u32) -> Result<IndividualEmployee, BhrError> {
        let url = format!(
            "{}/employees/{id}?fields={}",
            self.base_url,
            EMPLOYEE_FIELDS.join(",")
        );
        info!("Fetching employee {id}");
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, BhrError> {
        let response = self
            .http
            .get(url)
            .basic_auth(&self.api_key, Some(""))
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(BhrError::Request)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(BhrError::Api { status, body });
        }

        response.json().await.map_err(BhrError::Deserialize)
    }
}
