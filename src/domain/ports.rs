use crate::error::Result;
use async_trait::async_trait;

/// Verifies a claimed identity through a one-time code challenge.
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// Runs exactly one authorization attempt against external input.
    async fn authorize(&self) -> Result<()>;
    async fn is_authorized(&self) -> bool;
}

/// Supplies one code string per call, blocking until a value is available.
#[async_trait]
pub trait CodePrompt: Send + Sync {
    async fn read_code(&self) -> Result<String>;
}

pub type AuthorizerBox = Box<dyn Authorizer>;
pub type CodePromptBox = Box<dyn CodePrompt>;
