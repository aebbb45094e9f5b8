//! rulegate - Development Quality Gate
//!
//! Checks that governance rule files exist and were reviewed recently, and
//! gates the commit on the result.

use clap::{Parser, Subcommand};
use colored::Colorize;
use rulegate::{
    install_pre_commit, report, GateConfig, GateError, GitCli, HookInstall, LocalFileSystem,
    QualityGateValidator,
};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rulegate")]
#[command(version)]
#[command(about = "Pre-commit quality gate for governance rule files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(short, long, global = true, default_value = ".")]
    project: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate rule files and gate the commit (default)
    Check,

    /// Install the git pre-commit hook that runs `rulegate check`
    InstallHook {
        /// Replace an existing pre-commit hook
        #[arg(short, long)]
        force: bool,
    },

    /// Show the rule catalog and gate settings in effect
    Catalog,
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for the report
    let filter = if cli.verbose {
        "rulegate=debug"
    } else {
        "rulegate=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let code = match run(cli.command.unwrap_or(Commands::Check), &cli.project) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "❌ Error during validation:".red(), e);
            e.downcast_ref::<GateError>()
                .map_or(1, GateError::exit_code)
        }
    };
    std::process::exit(code);
}

fn run(command: Commands, project: &Path) -> anyhow::Result<i32> {
    GateConfig::ensure_project_dir(project)?;

    match command {
        Commands::Check => {
            let config = GateConfig::load(project)?;
            let validator = QualityGateValidator::new(
                config,
                GitCli::new(project),
                LocalFileSystem::new(project),
            );

            let mut stdout = std::io::stdout().lock();
            let result = validator.run(&mut stdout)?;
            stdout.flush()?;
            Ok(result.exit_code())
        }

        Commands::InstallHook { force } => {
            match install_pre_commit(project, force)? {
                HookInstall::Installed(path) => {
                    println!("{} Installed {}", "OK".green().bold(), path.display());
                }
                HookInstall::Replaced(path) => {
                    println!("{} Replaced {}", "OK".green().bold(), path.display());
                }
                HookInstall::AlreadyPresent(path) => {
                    println!(
                        "{} {} already exists (use --force to replace it)",
                        "Warning:".yellow(),
                        path.display()
                    );
                }
                HookInstall::NoHooksDir(dir) => {
                    println!(
                        "{} {} not found (not a git repo?)",
                        "Warning:".yellow(),
                        dir.display()
                    );
                }
            }
            Ok(0)
        }

        Commands::Catalog => {
            let config = GateConfig::load(project)?;
            report::catalog(&mut std::io::stdout().lock(), &config)?;
            Ok(0)
        }
    }
}
