use assert_cmd::Command;

pub struct CliOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs the CLI in script mode with `script` on stdin and asserts a clean exit.
pub fn run_script(script: &str) -> CliOutput {
    run_script_with_env(script, &[])
}

pub fn run_script_with_env(script: &str, extra_env: &[(&str, &str)]) -> CliOutput {
    let mut cmd = Command::cargo_bin("expense_tracker_cli").expect("binary exists");
    cmd.env("EXPENSE_TRACKER_CLI_SCRIPT", "1")
        .env_remove("EXPENSE_TRACKER_CONFIG")
        .env("NO_COLOR", "1")
        .write_stdin(script.to_string());
    for (key, value) in extra_env {
        cmd.env(key, value);
    }
    let output = cmd.output().expect("run script CLI");
    if !output.status.success() {
        panic!(
            "script CLI failed: status={}\nstdout:\n{}\nstderr:\n{}",
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    CliOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
