use authgate::application::processor::PaymentProcessor;
use authgate::domain::order::Order;
use authgate::domain::ports::CodePromptBox;
use authgate::infrastructure::sms::SmsAuthorizer;
use authgate::interfaces::terminal::prompt::TerminalPrompt;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the code generator (optional). If provided, runs deterministically.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut order = Order::new();

    let prompt: CodePromptBox = Box::new(TerminalPrompt::new());
    let authorizer = match cli.seed {
        // Deterministic code generation for demos and end-to-end tests
        Some(seed) => SmsAuthorizer::with_rng(StdRng::seed_from_u64(seed), prompt),
        None => SmsAuthorizer::new(prompt),
    };
    authorizer.generate_code().await;

    let processor = PaymentProcessor::new(Box::new(authorizer));
    processor.pay(&mut order).await.into_diagnostic()?;

    Ok(())
}
