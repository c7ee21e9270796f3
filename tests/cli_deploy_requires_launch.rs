mod common;

use std::fs;

use common::{TestEnv, RECORD_YAML, SETTINGS_YAML};

#[test]
fn deploy_without_record_points_to_launch() {
    let env = TestEnv::new();
    env.write_settings(SETTINGS_YAML);

    let result = env.run(&["deploy"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("sidekick launch"),
        "stderr should suggest `sidekick launch`; got:\n{}",
        result.stderr
    );
}

#[test]
fn launch_refuses_existing_record() {
    let env = TestEnv::new();
    env.write_settings(SETTINGS_YAML)
        .write_project_file("Dockerfile", "FROM nginx\nEXPOSE 80\n")
        .write_project_file("sidekick.yml", RECORD_YAML);

    let result = env.run(&["launch"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("already exists"), "{}", result.stderr);
    assert_eq!(
        fs::read_to_string(env.project_path("sidekick.yml")).unwrap(),
        RECORD_YAML
    );
}

#[test]
fn launch_requires_docker_username() {
    let env = TestEnv::new();
    env.write_settings("serverAddress: 203.0.113.7\n")
        .write_project_file("Dockerfile", "FROM nginx\nEXPOSE 80\n");

    let result = env.run(&["launch"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("dockerUsername"), "{}", result.stderr);
}

#[test]
fn corrupted_record_is_reported() {
    let env = TestEnv::new();
    env.write_settings(SETTINGS_YAML)
        .write_project_file("sidekick.yml", "name: [shop\n");

    let result = env.run(&["deploy"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("sidekick.yml"), "{}", result.stderr);
}

#[test]
fn project_flag_selects_directory() {
    let env = TestEnv::new();
    env.write_settings(SETTINGS_YAML);
    let missing = env.project_path("does-not-exist");

    let result = env.run(&["--project", missing.to_str().unwrap(), "deploy"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("not found"), "{}", result.stderr);
}
