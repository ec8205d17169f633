//! Environment overrides for Settings.
//!
//! Kept in its own test binary: the variables set here are process-wide and
//! would leak into the file-based config tests.

use std::env;

use tempfile::TempDir;

use mrsolve::config::{OutputFormat, Settings};

#[test]
fn given_mrsolve_env_vars_when_load_then_override_config() {
    // Arrange
    let work_dir = TempDir::new().unwrap();
    std::fs::write(
        work_dir.path().join(".mrsolve.toml"),
        "[output]\nformat = \"text\"\nshow_chains = true\n",
    )
    .unwrap();
    env::set_var("MRSOLVE_OUTPUT__FORMAT", "toml");
    env::set_var("MRSOLVE_OUTPUT__SHOW_STATE_SPACE", "true");
    env::set_var("MRSOLVE_MODEL_DIR", "/srv/mrsolve/models");

    // Act
    let settings = Settings::load(Some(work_dir.path())).unwrap();

    // Assert
    assert_eq!(settings.output.format, OutputFormat::Toml);
    assert!(settings.output.show_state_space);
    assert!(settings.output.show_chains);
    assert_eq!(settings.model_dir.to_string_lossy(), "/srv/mrsolve/models");
}
