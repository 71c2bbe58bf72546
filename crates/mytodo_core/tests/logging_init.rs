use mytodo_core::{init_logging, logging_status};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let first = tempfile::tempdir().expect("temp dir");
    let second = tempfile::tempdir().expect("temp dir");
    let first_dir = first.path().to_str().expect("utf-8 temp dir");
    let second_dir = second.path().to_str().expect("utf-8 temp dir");

    init_logging("info", first_dir).expect("first init should succeed");
    init_logging("INFO", first_dir).expect("same config should be idempotent");

    let level_error = init_logging("debug", first_dir).expect_err("level conflict");
    assert!(level_error.contains("refusing to switch"));

    let dir_error = init_logging("info", second_dir).expect_err("dir conflict");
    assert!(dir_error.contains("refusing to switch"));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir, first.path());
}

#[test]
fn init_logging_rejects_bad_input_before_touching_state() {
    assert!(init_logging("verbose", "/tmp").is_err());
    assert!(init_logging("info", "relative/logs").is_err());
    assert!(init_logging("info", "").is_err());
}
