use std::path::PathBuf;

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_clipforge")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "clipforge.exe"
            } else {
                "clipforge"
            });
            p
        })
}

#[test]
fn cli_compiles_reverse_settings() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let settings_path = dir.join("reverse.json");
    let settings = clipforge::ReverseSettings {
        speed: 0.5,
        ..clipforge::ReverseSettings::default()
    };
    let f = std::fs::File::create(&settings_path).unwrap();
    serde_json::to_writer_pretty(f, &settings).unwrap();

    let output = std::process::Command::new(exe())
        .args(["compile", "--family", "reverse", "--in"])
        .arg(&settings_path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "e_reverse,e_acceleration:-200");
}

#[test]
fn cli_reports_every_violation_and_fails() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let settings_path = dir.join("bad_compression.json");
    let mut settings = clipforge::CompressionSettings::default();
    settings.bitrate.target_kbps = 50;
    settings.bitrate.max_kbps = 40;
    let f = std::fs::File::create(&settings_path).unwrap();
    serde_json::to_writer_pretty(f, &settings).unwrap();

    let output = std::process::Command::new(exe())
        .args(["validate", "--family", "compression", "--in"])
        .arg(&settings_path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("target bitrate"));
    assert!(stderr.contains("maximum bitrate"));
}

#[test]
fn cli_assembles_full_url_with_base() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let settings_path = dir.join("default_gif.json");
    let f = std::fs::File::create(&settings_path).unwrap();
    serde_json::to_writer_pretty(f, &clipforge::GifSettings::default()).unwrap();

    let output = std::process::Command::new(exe())
        .args([
            "compile",
            "--family",
            "gif",
            "--base-url",
            "https://res.mediacloud.com/demo/video/upload/abc.gif",
            "--in",
        ])
        .arg(&settings_path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("https://res.mediacloud.com/demo/video/upload/w_480,h_270,"));
    assert!(stdout.trim().ends_with("/abc.gif"));
}
