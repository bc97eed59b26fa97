use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

// Built from the raw query pairs so a missing value can be reported as 422
// with a JSON detail, and a repeated `email` keeps the last value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let email = pairs
            .into_iter()
            .filter(|(key, _)| key == "email")
            .map(|(_, value)| value)
            .last();
        Self { email }
    }
}
