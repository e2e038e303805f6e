use serde::{Deserialize, Serialize};

/// Field set of the "request a callback" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackRequest {
    pub vendor_phone: String,
    pub user_name: String,
    pub user_phone: String,
    pub message: String,
    /// Terms & Conditions checkbox. Never sent to the server.
    #[serde(skip)]
    pub terms_accepted: bool,
}

impl CallbackRequest {
    /// Form-encoded pairs in the order the backend reads them.
    pub fn form_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("vendor_phone", self.vendor_phone.as_str()),
            ("user_name", self.user_name.as_str()),
            ("user_phone", self.user_phone.as_str()),
            ("message", self.message.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallbackStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackResponse {
    #[serde(default)]
    pub status: Option<CallbackStatus>,
    #[serde(default)]
    pub message: String,
}

impl CallbackResponse {
    /// Replies without a status are treated as accepted.
    pub fn is_success(&self) -> bool {
        self.status != Some(CallbackStatus::Error)
    }
}
