use anyhow::Result;

use crate::common::{run_cce, stderr_text, stdout_text, TestHome, SETTINGS_FIXTURE};

#[test]
fn clean_child_exit_is_success() -> Result<()> {
    let home = TestHome::with_settings(SETTINGS_FIXTURE)?;
    let shell = home.stub_shell(0)?;

    let output = run_cce(&home, &shell, &["staging"])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_text(&output));
    Ok(())
}

#[test]
fn benign_exit_codes_are_swallowed() -> Result<()> {
    let home = TestHome::with_settings(SETTINGS_FIXTURE)?;
    for code in [1, 2, 130] {
        let shell = home.stub_shell(code)?;
        let output = run_cce(&home, &shell, &["staging"])?;
        assert_eq!(
            output.status.code(),
            Some(0),
            "child exit {code} must be benign, stderr: {}",
            stderr_text(&output)
        );
    }
    Ok(())
}

#[test]
fn exit_127_reports_claude_missing() -> Result<()> {
    let home = TestHome::with_settings(SETTINGS_FIXTURE)?;
    let shell = home.stub_shell(127)?;

    let output = run_cce(&home, &shell, &["staging"])?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_text(&output);
    assert!(
        stderr.contains("`claude` command was not found"),
        "stderr: {stderr}"
    );
    Ok(())
}

#[test]
fn abnormal_exit_reports_the_code() -> Result<()> {
    let home = TestHome::with_settings(SETTINGS_FIXTURE)?;
    let shell = home.stub_shell(42)?;

    let output = run_cce(&home, &shell, &["staging"])?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_text(&output);
    assert!(stderr.contains("exited abnormally"), "stderr: {stderr}");
    assert!(stderr.contains("42"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn missing_shell_reports_spawn_failure() -> Result<()> {
    let home = TestHome::with_settings(SETTINGS_FIXTURE)?;
    let shell = home.path().join("does-not-exist.sh");

    let output = run_cce(&home, &shell, &["staging"])?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_text(&output);
    assert!(stderr.contains("Failed to start shell"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn profile_variables_reach_the_child_environment() -> Result<()> {
    let home = TestHome::with_settings(SETTINGS_FIXTURE)?;
    let shell = home.env_echo_shell()?;

    let output = run_cce(&home, &shell, &["staging"])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_text(&output));
    let stdout = stdout_text(&output);
    assert!(
        stdout.contains("base_url=https://staging.example"),
        "stdout: {stdout}"
    );
    Ok(())
}

#[test]
fn verbose_prints_invocation_and_variables_before_launch() -> Result<()> {
    let home = TestHome::with_settings(SETTINGS_FIXTURE)?;
    let shell = home.stub_shell(0)?;

    let output = run_cce(&home, &shell, &["-v", "staging"])?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_text(&output);
    assert!(stdout.contains("=== Verbose Mode ==="), "stdout: {stdout}");
    assert!(
        stdout.contains("-i -c \"source ~/.zshrc && claude\""),
        "stdout: {stdout}"
    );
    assert!(
        stdout.contains("ANTHROPIC_BASE_URL=https://staging.example"),
        "stdout: {stdout}"
    );
    assert!(
        stdout.contains("ANTHROPIC_AUTH_TOKEN=sk-staging"),
        "stdout: {stdout}"
    );
    Ok(())
}
