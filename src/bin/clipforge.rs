use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "clipforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a settings JSON file and list every violated constraint.
    Validate(SettingsArgs),
    /// Compile a settings JSON file into a directive string (or a full
    /// delivery URL when --base-url is given).
    Compile(CompileArgs),
    /// Upload a media file and print its resource id and delivery URL.
    Upload(UploadArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Family {
    Compression,
    Reverse,
    Gif,
    ImageToVideo,
}

#[derive(Parser, Debug)]
struct SettingsArgs {
    /// Tool family the settings belong to.
    #[arg(long, value_enum)]
    family: Family,

    /// Input settings JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct CompileArgs {
    #[command(flatten)]
    settings: SettingsArgs,

    /// Base delivery URL to splice the directive into.
    #[arg(long)]
    base_url: Option<String>,
}

#[derive(Parser, Debug)]
struct UploadArgs {
    /// Cloud name the upload is scoped to.
    #[arg(long)]
    cloud: String,

    /// Unsigned upload preset.
    #[arg(long)]
    preset: String,

    /// Media file to upload.
    file: PathBuf,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Compile(args) => cmd_compile(args),
        Command::Upload(args) => cmd_upload(args),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open settings '{}'", path.display()))?;
    let r = BufReader::new(f);
    serde_json::from_reader(r).with_context(|| "parse settings JSON")
}

/// Validate + compile for one family. Returns `Err(violations)` so the
/// caller can print every message, not just the first.
fn validate_and_compile(args: &SettingsArgs) -> anyhow::Result<Result<String, Vec<String>>> {
    Ok(match args.family {
        Family::Compression => {
            let settings: clipforge::CompressionSettings = read_json(&args.in_path)?;
            let violations = clipforge::validate_compression(&settings);
            if violations.is_empty() {
                Ok(clipforge::compile_compression(&settings))
            } else {
                Err(violations)
            }
        }
        Family::Reverse => {
            let settings: clipforge::ReverseSettings = read_json(&args.in_path)?;
            let violations = clipforge::validate_reverse(&settings);
            if violations.is_empty() {
                Ok(clipforge::compile_reverse(&settings))
            } else {
                Err(violations)
            }
        }
        Family::Gif => {
            let settings: clipforge::GifSettings = read_json(&args.in_path)?;
            let violations = clipforge::validate_gif(&settings);
            if violations.is_empty() {
                Ok(clipforge::compile_gif(&settings))
            } else {
                Err(violations)
            }
        }
        Family::ImageToVideo => {
            let settings: clipforge::ImageToVideoSettings = read_json(&args.in_path)?;
            let violations = clipforge::validate_image_to_video(&settings);
            if violations.is_empty() {
                Ok(clipforge::compile_image_to_video(&settings))
            } else {
                Err(violations)
            }
        }
    })
}

fn report_violations(violations: &[String]) {
    eprintln!("settings are invalid:");
    for v in violations {
        eprintln!("  - {v}");
    }
}

fn cmd_validate(args: SettingsArgs) -> anyhow::Result<ExitCode> {
    match validate_and_compile(&args)? {
        Ok(_) => {
            println!("ok");
            Ok(ExitCode::SUCCESS)
        }
        Err(violations) => {
            report_violations(&violations);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<ExitCode> {
    match validate_and_compile(&args.settings)? {
        Ok(directive) => {
            match args.base_url {
                Some(base) => println!("{}", clipforge::assemble(&base, &directive)?),
                None => println!("{directive}"),
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(violations) => {
            report_violations(&violations);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn cmd_upload(args: UploadArgs) -> anyhow::Result<ExitCode> {
    let runtime = tokio::runtime::Runtime::new().context("start async runtime")?;
    let gateway = clipforge::MediaGateway::new(args.cloud, args.preset);
    let resource = runtime.block_on(gateway.upload(&args.file))?;
    println!("{}", resource.resource_id);
    println!("{}", resource.delivery_url);
    Ok(ExitCode::SUCCESS)
}
