use assert_cmd::cargo::cargo_bin_cmd;
use cocina_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = cargo_bin_cmd!("cocina");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("export"));
}

#[test]
fn test_json_envelope_on_add() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("cocina");
    world
        .configure_command(&mut cmd)
        .args(["--format", "json", "add", "--title", "Flan", "--tags", "dessert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"ok\""))
        .stdout(predicate::str::contains("\"action\": \"added\""));
}

#[test]
fn test_missing_title_is_a_usage_error() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("cocina");
    world
        .configure_command(&mut cmd)
        .arg("add")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--title"));
}

#[test]
fn test_data_dir_from_environment() {
    let world = TestWorld::new();
    let env_dir = world.temp_dir().join("from-env");

    let mut cmd = cargo_bin_cmd!("cocina");
    cmd.env("COCINA_PATH", &env_dir)
        .env("NO_COLOR", "1")
        .args(["--user", "tester", "add", "--title", "Flan"])
        .assert()
        .success();

    assert!(env_dir.join("cocina.db").exists());
}
