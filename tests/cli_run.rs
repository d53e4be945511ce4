//! End-to-end tests for `docbundle run`

mod common;

use common::{TestEnv, TokenServer, DOCS_CONFIG};

fn docs_project() -> TestEnv {
    let env = TestEnv::new();
    env.write("settings.toml", DOCS_CONFIG);
    env.write("README.md", "# Title\n<!-- draft note -->\nBody\n");
    env
}

#[test]
fn clear_and_combine_build_outputs() {
    let env = docs_project();

    let result = env.run(&["run", "-c", "settings.toml", "--clear", "--combine"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stdout.contains("Updated: cleared/README.md"));
    assert!(result.stdout.contains("Updated: combined/docs.xml"));
    assert!(result.stdout.contains("Workflow completed successfully!"));

    assert_eq!(env.read("cleared/README.md"), "# Title\n\nBody\n");
    assert_eq!(
        env.read("combined/docs.xml"),
        "<file path=\"/README.md\" note=\"HTML comments were removed\">\
         <![CDATA[# Title\n\nBody\n]]></file>"
    );
}

#[test]
fn second_run_reports_no_updates() {
    let env = docs_project();
    let first = env.run(&["run", "-c", "settings.toml", "--clear", "--combine"]);
    assert!(first.is_success(), "{}", first.combined_output());
    let before = env.modified("combined/docs.xml");

    let second = env.run(&["run", "-c", "settings.toml", "--clear", "--combine"]);

    assert!(second.is_success(), "{}", second.combined_output());
    assert!(!second.stdout.contains("Updated:"), "{}", second.stdout);
    assert_eq!(env.modified("combined/docs.xml"), before);
}

#[test]
fn verbose_run_lists_skipped_files() {
    let env = docs_project();
    env.run(&["run", "-c", "settings.toml", "--clear"]);

    let result = env.run(&["run", "-c", "settings.toml", "--clear", "-v"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stdout.contains("==> clear"));
    assert!(result.stdout.contains("Skipped: cleared/README.md"));
}

#[test]
fn run_without_steps_fails() {
    let env = docs_project();

    let result = env.run(&["run", "-c", "settings.toml"]);

    assert!(!result.is_success());
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("At least one of"), "{}", result.stderr);
}

#[test]
fn missing_config_file_fails() {
    let env = TestEnv::new();

    let result = env.run(&["run", "-c", "nope.toml", "--clear"]);

    assert!(!result.is_success());
    assert!(result.stderr.contains("nope.toml"), "{}", result.stderr);
}

#[test]
fn unknown_config_key_warns_with_suggestion() {
    let env = docs_project();
    let config = DOCS_CONFIG.replace("tokens_csv", "tokens_cvs");
    env.write("settings.toml", &config);

    let result = env.run(&["run", "-c", "settings.toml", "--clear"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stderr.contains("unknown config key 'tokens_cvs'"));
    assert!(result.stderr.contains("Did you mean 'tokens_csv'?"));
}

#[test]
fn tokenize_without_api_key_fails_before_any_stage() {
    let env = docs_project();

    let result = env.run(&["run", "-c", "settings.toml", "--clear", "--tokenize"]);

    assert!(!result.is_success());
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("MOONSHOT_API_KEY"), "{}", result.stderr);
    assert!(!env.exists("cleared"));
    assert!(!env.exists("tokens.csv"));
}

#[test]
fn missing_source_fails_the_run() {
    let env = docs_project();
    let config = DOCS_CONFIG.replace(r#"["README.md"]"#, r#"["README.md", "missing.md"]"#);
    env.write("settings.toml", &config);

    let result = env.run(&["run", "-c", "settings.toml", "--clear", "--combine"]);

    assert!(!result.is_success());
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("Error: missing.md"), "{}", result.stdout);
    assert!(result.stdout.contains("Workflow failed: clear stage"));
    // the readable source is still cleared, combine never starts
    assert!(env.exists("cleared/README.md"));
    assert!(!env.exists("combined/docs.xml"));
}

#[test]
fn init_removes_previous_outputs() {
    let env = docs_project();
    env.write("cleared/stale.md", "old");
    env.write("combined/stale.xml", "old");
    env.write("tokens.csv", "file,tokens,time\n");

    let result = env.run(&["run", "-c", "settings.toml", "--init"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(!env.exists("cleared"));
    assert!(!env.exists("combined"));
    assert!(!env.exists("tokens.csv"));
    assert!(env.exists("README.md"));
}

#[test]
fn delete_cleared_from_environment() {
    let env = docs_project();

    let result = env.run_with_env(
        &["run", "-c", "settings.toml", "--clear", "--combine"],
        &[("DOCBUNDLE_DELETE_CLEARED", "true")],
    );

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(env.exists("combined/docs.xml"));
    assert!(!env.exists("cleared"));
}

#[test]
fn tokenize_records_counts_in_ledger() {
    let env = docs_project();
    let server = TokenServer::counts(&[321]);

    let result = env.run_with_env(
        &["run", "-c", "settings.toml", "--clear", "--combine", "--tokenize"],
        &[
            ("MOONSHOT_API_KEY", "sk-test"),
            ("DOCBUNDLE_TOKENIZER_ENDPOINT", server.url.as_str()),
        ],
    );

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stdout.contains("combined/docs.xml: 321 tokens"));

    let requests = server.join();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with("POST /v1/tokenizers/estimate-token-count"));
    assert!(requests[0].to_ascii_lowercase().contains("authorization: bearer sk-test"));

    let ledger = env.read("tokens.csv");
    let mut lines = ledger.lines();
    assert_eq!(lines.next(), Some("file,tokens,time"));
    assert!(lines.next().unwrap().starts_with("combined/docs.xml,321,"));
}

#[test]
fn tokenize_api_error_leaves_ledger_untouched() {
    let env = docs_project();
    env.run(&["run", "-c", "settings.toml", "--clear", "--combine"]);
    let ledger = "file,tokens,time\nold.md,5,2024-01-01 00:00:00\n";
    env.write("tokens.csv", ledger);
    let server = TokenServer::start(vec![(
        "401 Unauthorized",
        r#"{"error":"bad key"}"#.to_string(),
    )]);

    let result = env.run_with_env(
        &["run", "-c", "settings.toml", "--tokenize"],
        &[
            ("MOONSHOT_API_KEY", "sk-wrong"),
            ("DOCBUNDLE_TOKENIZER_ENDPOINT", server.url.as_str()),
        ],
    );

    assert!(!result.is_success());
    assert!(result.stdout.contains("Workflow failed: tokenize stage"));
    assert_eq!(env.read("tokens.csv"), ledger);
}

#[test]
fn json_output_is_ndjson() {
    let env = docs_project();

    let result = env.run(&["run", "-c", "settings.toml", "--clear", "--combine", "--json"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect();

    assert_eq!(events[0]["event"], "stage_start");
    assert!(events
        .iter()
        .any(|e| e["event"] == "item_written" && e["path"] == "combined/docs.xml"));
    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["status"], "success");
}

#[test]
fn working_directory_as_stage_folder_is_rejected_before_reset() {
    let env = docs_project();
    let config = DOCS_CONFIG.replace(r#"cleared_folder = "cleared""#, r#"cleared_folder = "./""#);
    env.write("settings.toml", &config);

    let result = env.run(&["run", "-c", "settings.toml", "--init"]);

    assert!(!result.is_success());
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("cleared_folder"), "{}", result.stderr);
    assert!(env.exists("README.md"));
    assert!(env.exists("settings.toml"));
}

#[test]
fn nested_stage_folders_are_rejected() {
    let env = docs_project();
    let config = DOCS_CONFIG.replace(
        r#"combined_folder = "combined""#,
        r#"combined_folder = "cleared/combined""#,
    );
    env.write("settings.toml", &config);

    let result = env.run_with_env(
        &["run", "-c", "settings.toml", "--clear", "--combine"],
        &[("DOCBUNDLE_DELETE_CLEARED", "true")],
    );

    assert!(!result.is_success());
    assert!(result.stderr.contains("separate directories"), "{}", result.stderr);
    assert!(!env.exists("cleared"));
}
