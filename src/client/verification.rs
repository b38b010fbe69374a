use super::port::*;
use super::state::*;
use crate::logger::*;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Delay between the success notification and navigation, long enough for
/// the notification to be seen.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("a submission is already in progress")]
    Busy,
}

/// Drives one username through the lookup service to a redirect or an error.
///
/// At most one request is outstanding: `submit` is refused unless the flow is
/// `Idle` or showing an `Error`.
pub struct VerificationClient {
    api: Arc<dyn LookupApi>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    redirect_delay: Duration,
    state: Mutex<VerificationState>,
}

impl VerificationClient {
    pub fn new(
        api: Arc<dyn LookupApi>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        VerificationClient {
            api,
            notifier,
            navigator,
            redirect_delay: DEFAULT_REDIRECT_DELAY,
            state: Mutex::new(VerificationState::Idle),
        }
    }

    pub fn with_redirect_delay(mut self, redirect_delay: Duration) -> Self {
        self.redirect_delay = redirect_delay;
        self
    }

    pub fn state(&self) -> VerificationState {
        self.lock().clone()
    }

    pub fn can_submit(&self) -> bool {
        self.lock().accepts_submit()
    }

    /// Runs one verification attempt and returns the state it ended in.
    ///
    /// A blank username ends in `Error` without touching the network. On a
    /// match the success notification fires, the redirect delay elapses, and
    /// the navigator is sent to the destination.
    pub async fn submit(&self, username: &str) -> Result<VerificationState, ClientError> {
        {
            let mut state = self.lock();
            if !state.accepts_submit() {
                return Err(ClientError::Busy);
            }
            if username.trim().is_empty() {
                *state = VerificationState::Error(USERNAME_REQUIRED.to_owned());
                return Ok(state.clone());
            }
            *state = VerificationState::Submitting;
        }

        let mut in_flight = InFlight {
            client: self,
            pending_navigation: None,
        };
        let reply = self.api.check_user(username).await;
        let next = match reply {
            Ok(LookupReply::Found { link }) => VerificationState::Redirecting { destination: link },
            Ok(LookupReply::NotFound) => VerificationState::Error(USER_NOT_FOUND.to_owned()),
            Ok(LookupReply::Failed { message }) => {
                VerificationState::Error(message.unwrap_or_else(|| SERVICE_FALLBACK.to_owned()))
            }
            Err(e) => {
                warn!("lookup request failed: {}", e);
                VerificationState::Error(TRANSPORT_FALLBACK.to_owned())
            }
        };
        *self.lock() = next.clone();

        if let VerificationState::Redirecting { destination } = &next {
            info!(%destination, "user verified");
            in_flight.pending_navigation = Some(destination.clone());
            self.notifier.notify_success(VERIFIED);
            tokio::time::sleep(self.redirect_delay).await;
            if let Some(destination) = in_flight.pending_navigation.take() {
                self.navigator.navigate_to(&destination);
            }
        }

        Ok(next)
    }

    /// Acknowledges an error and returns to `Idle`. Returns false, changing
    /// nothing, when there is no error to dismiss.
    pub fn dismiss(&self) -> bool {
        let mut state = self.lock();
        if matches!(*state, VerificationState::Error(_)) {
            *state = VerificationState::Idle;
            true
        } else {
            false
        }
    }

    fn lock(&self) -> MutexGuard<'_, VerificationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// Settles the flow when a submit future is dropped early: mid-request it
// returns to `Idle`, and during the redirect delay it navigates at once.
struct InFlight<'a> {
    client: &'a VerificationClient,
    pending_navigation: Option<String>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(destination) = self.pending_navigation.take() {
            self.client.navigator.navigate_to(&destination);
            return;
        }
        let mut state = self.client.lock();
        if *state == VerificationState::Submitting {
            *state = VerificationState::Idle;
        }
    }
}
