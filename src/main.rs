use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use git_changelog::cli::{run_release_workflow, ReleaseWorkflowArgs};
use git_changelog::config;
use git_changelog::git::Git2Repository;
use git_changelog::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-changelog",
    about = "Bump a branch version, prepend its changelog entry, then commit and tag"
)]
struct Args {
    #[arg(help = "Branch to release (tags are named <branch>-v<version>)")]
    branch: Option<String>,

    #[arg(help = "Version component to bump: major, minor or patch")]
    increment: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short = 'C', long, default_value = ".", help = "Path to the git repository")]
    repo: PathBuf,

    #[arg(long, help = "Preview the changelog entry without making changes")]
    dry_run: bool,

    #[arg(long, help = "Enable debug logging")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if args.version {
        println!("git-changelog {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Usage errors are reported before the repository is opened
    let (branch, increment) = (args.branch.clone(), args.increment.clone());
    let parsed = ReleaseWorkflowArgs::from_raw(branch, increment, PathBuf::new(), args.dry_run);
    let workflow_args = match parsed {
        Ok(parsed) => parsed,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let git_repo = match Git2Repository::open(&args.repo) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let repo_root = match git_repo.workdir() {
        Ok(root) => root,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let config = match config::load_config(args.config.as_deref(), &repo_root) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = ReleaseWorkflowArgs {
        repo_root,
        ..workflow_args
    };

    let result = match run_release_workflow(&git_repo, &workflow_args, &config) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }

    ui::display_proposed_version(result.previous_tag.as_deref(), &result.version);

    if workflow_args.dry_run {
        ui::display_changelog_preview(&result.entry);
        ui::display_status(&format!(
            "Dry run: {} and tag {} were not changed",
            result.changelog_path.display(),
            result.version
        ));
        return Ok(());
    }

    ui::display_release_complete(&config.changelog.path, &result.version);

    Ok(())
}
