use crate::domain::ports::{Authorizer, CodePromptBox};
use crate::error::Result;
use async_trait::async_trait;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use tokio::sync::RwLock;
use tracing::info;

/// Length of every generated authorization code.
pub const CODE_LEN: usize = 6;

struct AuthState<R> {
    rng: R,
    code: Option<String>,
    authorized: bool,
}

/// Code-based `Authorizer` variant.
///
/// Generates a random decimal code, announces it on the log side channel
/// (standing in for SMS delivery), and verifies one externally supplied
/// input against it. The random source is injected so runs can be made
/// deterministic; `StdRng` seeded from entropy is the default.
pub struct SmsAuthorizer<R: Rng + Send + Sync = StdRng> {
    state: RwLock<AuthState<R>>,
    prompt: CodePromptBox,
}

impl SmsAuthorizer {
    /// Creates an authorizer with entropy-seeded randomness.
    pub fn new(prompt: CodePromptBox) -> Self {
        Self::with_rng(StdRng::from_entropy(), prompt)
    }
}

impl<R: Rng + Send + Sync> SmsAuthorizer<R> {
    /// Creates an authorizer with the supplied random source.
    pub fn with_rng(rng: R, prompt: CodePromptBox) -> Self {
        Self {
            state: RwLock::new(AuthState {
                rng,
                code: None,
                authorized: false,
            }),
            prompt,
        }
    }

    /// Generates a fresh expected code and emits it on the log side channel.
    pub async fn generate_code(&self) {
        let mut state = self.state.write().await;
        let code: String = (0..CODE_LEN)
            .map(|_| char::from(b'0' + state.rng.gen_range(0..10)))
            .collect();
        info!("generated SMS code: {code}");
        state.code = Some(code);
    }

    /// The currently expected code, if one has been generated.
    pub async fn code(&self) -> Option<String> {
        self.state.read().await.code.clone()
    }
}

#[async_trait]
impl<R: Rng + Send + Sync> Authorizer for SmsAuthorizer<R> {
    async fn authorize(&self) -> Result<()> {
        let input = self.prompt.read_code().await?;
        let mut state = self.state.write().await;
        state.authorized = state.code.as_deref() == Some(input.as_str());
        Ok(())
    }

    async fn is_authorized(&self) -> bool {
        self.state.read().await.authorized
    }
}
