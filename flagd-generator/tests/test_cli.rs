use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use anyhow::Result;
use uuid::Uuid;

use flagd_generator::generator::FlagGenerator;
use flagd_generator::summary::render_summary;
use flagd_generator::writer::render;

fn run_generator(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_flagd-generator"))
        .args(args)
        .env_remove("FLAGD_GENERATOR_OUTPUT")
        .env_remove("FLAGD_GENERATOR_SEED")
        .output()
        .expect("failed to run flagd-generator")
}

fn unique_dir(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{prefix}_{}", Uuid::now_v7()))
}

#[test]
fn it_exits_with_status_one_when_output_is_unwritable() {
    let path = unique_dir("flagd_generator_cli_missing").join("flags.json");

    let output = run_generator(&["-o", path.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Oops! failed to write"), "stderr: {stderr}");
    assert!(stderr.contains("Caused by:"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
    assert!(!path.exists());
}

#[test]
fn it_writes_seeded_file_and_prints_summary() -> Result<()> {
    let dir = unique_dir("flagd_generator_cli");
    fs::create_dir_all(&dir)?;
    let path = dir.join("flags.json");

    let output = run_generator(&["-o", path.to_str().unwrap(), "--seed", "21"]);
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert!(stdout.starts_with(&render_summary(&path)));
    assert_eq!(
        fs::read_to_string(&path)?,
        render(&FlagGenerator::seeded(21).generate())?
    );

    fs::remove_dir_all(dir)?;
    Ok(())
}
