pub const USERNAME_REQUIRED: &str = "Username is required";
pub const USER_NOT_FOUND: &str = "User not found";
pub const SERVICE_FALLBACK: &str = "Something went wrong";
pub const TRANSPORT_FALLBACK: &str = "An error occurred. Please try again.";
pub const VERIFIED: &str = "User verified! Redirecting...";

/// Where the verification flow currently stands.
///
/// One value instead of separate loading / error flags, so the flow can never
/// be both submitting and showing an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VerificationState {
    #[default]
    Idle,
    Submitting,
    Error(String),
    Redirecting { destination: String },
}

impl VerificationState {
    /// Whether the submit control is enabled.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, VerificationState::Idle | VerificationState::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            VerificationState::Error(message) => Some(message),
            _ => None,
        }
    }
}
