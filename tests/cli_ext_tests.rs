//! End-to-end tests for `knitout ext`.

mod fixtures;
use fixtures::*;

#[test]
fn test_ext_stitch_accepts_negative() {
    let config_dir = temp_config_dir();
    let output = run_knitout(&["ext", "stitch", "-5"], config_dir.path());

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "x-stitch-number -5\n");
}

#[test]
fn test_ext_speed_bounds() {
    let config_dir = temp_config_dir();

    for speed in ["0", "15"] {
        let output = run_knitout(&["ext", "speed", speed], config_dir.path());
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout_of(&output), format!("x-speed-number {speed}\n"));
    }

    for speed in ["-1", "16"] {
        let output = run_knitout(&["ext", "speed", speed], config_dir.path());
        assert_eq!(output.status.code(), Some(1), "speed {speed} should fail");
    }
}

#[test]
fn test_ext_presser_is_case_insensitive() {
    let config_dir = temp_config_dir();

    let output = run_knitout(&["ext", "presser", "AUTO"], config_dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "x-presser-mode auto\n");

    let output = run_knitout(&["ext", "presser", "sometimes"], config_dir.path());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_version_uses_app_name() {
    let config_dir = temp_config_dir();
    let output = run_knitout(&["--version"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        format!("{} {}\n", knitout::constants::APP_NAME, env!("CARGO_PKG_VERSION"))
    );
}
