use clap::Parser;

/// rehook - Rebuild a cached direnv hook and mark it fresh
///
/// Forces direnv (with nix-direnv) to re-evaluate the project environment,
/// then gives the cached hook files the timestamp of `.envrc` so the next
/// prompt does not trigger another rebuild. Runs without arguments.
#[derive(Parser, Debug)]
#[command(name = "rehook")]
#[command(author)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rebuild a cached direnv hook and mark it fresh", long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short = 'c', long, env = "REHOOK_CONFIG")]
    pub config: Option<String>,

    /// Project directory whose environment is rebuilt
    #[arg(long, env = "REHOOK_PROJECT_DIR")]
    pub project_dir: Option<String>,

    /// direnv program name or path
    #[arg(long, env = "REHOOK_DIRENV")]
    pub direnv: Option<String>,
}
