use assert_cmd::Command;
use assert_cmd::cargo_bin;
use authgate::infrastructure::scripted::ScriptedPrompt;
use authgate::infrastructure::sms::SmsAuthorizer;
use predicates::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Learns the code a given seed produces by replaying generation in-process.
async fn code_for_seed(seed: u64) -> String {
    let authorizer =
        SmsAuthorizer::with_rng(StdRng::seed_from_u64(seed), Box::new(ScriptedPrompt::new()));
    authorizer.generate_code().await;
    authorizer.code().await.expect("code was just generated")
}

#[tokio::test]
async fn test_cli_payment_succeeds_with_correct_code() {
    let code = code_for_seed(42).await;

    let mut cmd = Command::new(cargo_bin!("authgate"));
    cmd.arg("--seed").arg("42").write_stdin(format!("{code}\n"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("generated SMS code"))
        .stdout(predicate::str::contains("is PAID"));
}

#[test]
fn test_cli_payment_fails_with_wrong_code() {
    let mut cmd = Command::new(cargo_bin!("authgate"));
    cmd.arg("--seed").arg("42").write_stdin("1234567\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("authorization failed"));
}

#[test]
fn test_cli_payment_fails_on_empty_stdin() {
    let mut cmd = Command::new(cargo_bin!("authgate"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("authorization failed"));
}
