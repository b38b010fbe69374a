/// What the lookup service said, already reduced to what the flow acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupReply {
    Found { link: String },
    NotFound,
    /// Non-2xx status or a body that could not be understood.
    Failed { message: Option<String> },
}

#[derive(Debug, thiserror::Error)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

#[async_trait::async_trait]
pub trait LookupApi: Send + Sync {
    async fn check_user(&self, username: &str) -> Result<LookupReply, TransportError>;
}

pub trait Notifier: Send + Sync {
    fn notify_success(&self, message: &str);
}

pub trait Navigator: Send + Sync {
    fn navigate_to(&self, url: &str);
}
