use thiserror::Error;

/// Custom error types for the application.
#[derive(Error, Debug)]
pub enum BhrError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("Failed to send request to the BambooHR API: {0}")]
    Request(reqwest::Error),
    #[error("Failed to deserialize BambooHR API response: {0}")]
    Deserialize(reqwest::Error),
    #[error("BambooHR API request failed with status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Invalid filter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("No employee matches '{0}'")]
    EmployeeNotFound(String),
    #[error("Supervisor references form a cycle involving: {}", .0.join(", "))]
    SupervisorCycle(Vec<String>),
}
