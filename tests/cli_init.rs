mod common;

use std::fs;

use common::TestEnv;

#[test]
fn init_with_flags_writes_settings() {
    let env = TestEnv::new();

    let result = env.run(&[
        "init",
        "--server",
        "203.0.113.7",
        "--docker-username",
        "alice",
        "--domain",
        "example.com",
    ]);

    assert!(result.success, "{}", result.combined_output());
    let written = fs::read_to_string(env.settings_path()).unwrap();
    assert!(written.contains("serverAddress: 203.0.113.7"), "{}", written);
    assert!(written.contains("remoteUser: sidekick"), "{}", written);
    assert!(written.contains("dockerUsername: alice"), "{}", written);
    assert!(written.contains("publicDomain: example.com"), "{}", written);
    assert!(!written.contains("agePublicKey"), "{}", written);
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let env = TestEnv::new();
    env.write_settings("serverAddress: old.example.com\n");

    let result = env.run(&["init", "--server", "203.0.113.7"]);

    assert!(!result.success);
    assert!(result.stderr.contains("--force"), "{}", result.stderr);
    let kept = fs::read_to_string(env.settings_path()).unwrap();
    assert_eq!(kept, "serverAddress: old.example.com\n");
}

#[test]
fn init_force_keeps_unchanged_values() {
    let env = TestEnv::new();
    env.write_settings("serverAddress: old.example.com\ndockerUsername: alice\n");

    let result = env.run(&["init", "--force", "--server", "203.0.113.7"]);

    assert!(result.success, "{}", result.combined_output());
    let written = fs::read_to_string(env.settings_path()).unwrap();
    assert!(written.contains("serverAddress: 203.0.113.7"), "{}", written);
    assert!(written.contains("dockerUsername: alice"), "{}", written);
}

#[test]
fn init_honors_config_flag() {
    let env = TestEnv::new();
    let custom = env.project_path("settings.yml");

    let result = env.run(&[
        "--config",
        custom.to_str().unwrap(),
        "init",
        "--server",
        "203.0.113.7",
    ]);

    assert!(result.success, "{}", result.combined_output());
    assert!(custom.is_file());
    assert!(!env.settings_path().exists());
}

#[test]
fn init_json_reports_path() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "init", "--server", "203.0.113.7"]);

    assert!(result.success, "{}", result.combined_output());
    let event: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(event["command"], "init");
    assert_eq!(event["status"], "success");
    assert!(event["path"].as_str().unwrap().ends_with("sidekick.yml"));
}

#[test]
fn init_without_server_fails_when_not_interactive() {
    let env = TestEnv::new();

    let result = env.run(&["init"]);

    assert!(!result.success);
    assert!(!env.settings_path().exists());
}
