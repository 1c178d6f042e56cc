use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use roomcall_client::{HttpTokenProvider, TokenProvider};
use roomcall_core::{Identity, RoomName, TokenRequest};
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

const BUNDLE_NAME: &str = "roomcall_client";
const HOST_PAGE: &str = "index.html";

#[derive(Parser)]
#[command(name = "cargo-roomcall")]
#[command(bin_name = "cargo-roomcall")]
enum Cli {
    Roomcall(RoomcallArgs),
}

#[derive(clap::Args)]
struct RoomcallArgs {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the browser client bundle.
    Build {
        #[arg(long, default_value = "./roomcall-client")]
        client: String,

        #[arg(short, long, default_value = "./dist")]
        out: String,

        /// Unoptimized build with debug assertions.
        #[arg(long)]
        dev: bool,
    },

    /// Ask a running token service for a token.
    Token {
        #[arg(long, default_value = "http://localhost:5000")]
        server: String,

        #[arg(long)]
        identity: Option<String>,

        #[arg(long)]
        room: Option<String>,
    },
}

fn main() -> Result<()> {
    let Cli::Roomcall(args) = Cli::parse();

    match args.command {
        Commands::Build { client, out, dev } => {
            build(Path::new(&client), Path::new(&out), dev)?
        }
        Commands::Token {
            server,
            identity,
            room,
        } => {
            let identity = match identity.as_deref().and_then(Identity::parse) {
                Some(identity) => identity,
                None => Identity::from(prompt("Your name")?),
            };
            let room = match room.as_deref().and_then(RoomName::parse) {
                Some(room) => room,
                None => RoomName::from(prompt("Room name")?.as_str()),
            };

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(request_token(&server, identity, room))?;
        }
    }

    Ok(())
}

fn build(client: &Path, out_path: &Path, dev: bool) -> Result<()> {
    println!("{}", "🚀 Building call client...".green().bold());

    // checked first so a wrong --client fails before the output is wiped
    let page = client.join("www").join(HOST_PAGE);
    if !page.is_file() {
        anyhow::bail!(
            "{} has no www/{}; is it the client crate?",
            client.display(),
            HOST_PAGE
        );
    }

    if out_path.exists() {
        fs::remove_dir_all(out_path)?;
    }
    fs::create_dir_all(out_path)?;

    println!("{}", "📦 Compiling WebAssembly...".cyan());
    run_wasm_pack(client, out_path, dev)?;

    println!("{}", "📄 Copying host page...".cyan());
    fs::copy(&page, out_path.join(HOST_PAGE))
        .with_context(|| format!("Failed to copy {}", page.display()))?;

    println!("{}", "✨ Build completed successfully!".green().bold());
    println!("   📂 Bundle: {}", out_path.display());
    println!("   🌐 Serve it and open {}", HOST_PAGE);
    Ok(())
}

/// The host page imports `./roomcall_client.js`, so the bundle name is pinned
/// rather than derived from the crate directory.
fn run_wasm_pack(client: &Path, out_dir: &Path, dev: bool) -> Result<()> {
    let out_abs = fs::canonicalize(out_dir)
        .with_context(|| format!("Cannot resolve {}", out_dir.display()))?;

    let mut command = Command::new("wasm-pack");
    command
        .args(["build", "--target", "web", "--no-typescript"])
        .args(["--out-name", BUNDLE_NAME])
        .arg(if dev { "--dev" } else { "--release" })
        .arg("--out-dir")
        .arg(&out_abs)
        .current_dir(client)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let status = command
        .status()
        .context("wasm-pack is required to build the call client (cargo install wasm-pack)")?;

    if !status.success() {
        anyhow::bail!("wasm-pack failed for {} ({})", client.display(), status);
    }
    Ok(())
}

/// Keeps asking until the answer is not blank.
fn prompt(label: &str) -> Result<String> {
    let answer: String = Input::new()
        .with_prompt(label)
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("Enter name and room")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(answer.trim().to_string())
}

async fn request_token(server: &str, identity: Identity, room: RoomName) -> Result<()> {
    let provider = HttpTokenProvider::from_base_url(server);
    println!(
        "{} {} for {} in '{}'",
        "🔑 Requesting token from".cyan(),
        provider.endpoint(),
        identity,
        room
    );

    let request = TokenRequest::new(identity.as_str(), room.as_str());
    let token = provider
        .fetch_token(&request)
        .await
        .context("Token request failed")?;

    println!("{}", "✨ Token issued".green().bold());
    println!("{}", token);
    Ok(())
}
