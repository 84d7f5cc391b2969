use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use semvertool::cli::{self, BumpRequest, GitBumpRequest, PreviousRequest, SortRequest};
use semvertool::config::{self, Config};
use semvertool::domain::BumpFlags;
use semvertool::{logging, ui, SemverToolError};

#[derive(Parser)]
#[command(
    name = "semvertool",
    version,
    about = "Bump, compare and sort semantic versions"
)]
struct Args {
    #[arg(long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, help = "Print debug diagnostics to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bump a version, or the latest git tag with `bump git`
    Bump(BumpArgs),
    /// Print the tag preceding HEAD
    Previous(PreviousArgs),
    /// Sort a list of versions
    Sort(SortArgs),
    /// Compare two versions; exit 0 lower, 1 equal, 2 greater, 3 invalid
    Compare(CompareArgs),
    /// Commands that answer through their exit code
    Script {
        #[command(subcommand)]
        command: ScriptCommand,
    },
}

#[derive(clap::Args)]
struct BumpKindArgs {
    #[arg(long, group = "kind", help = "Bump the major version")]
    major: bool,

    #[arg(long, group = "kind", help = "Bump the minor version")]
    minor: bool,

    #[arg(long, group = "kind", help = "Bump the patch version (default)")]
    patch: bool,

    #[arg(long, group = "kind", help = "Bump the prerelease version")]
    prerelease: bool,

    #[arg(
        short = 'm',
        long = "from-message",
        value_name = "MSG",
        group = "kind",
        help = "Take the bump kind from a '[bump <kind>]' directive in MSG"
    )]
    message: Option<String>,

    #[arg(
        short = 'p',
        long,
        value_name = "PREFIX",
        help = "Prefix for a new prerelease sequence"
    )]
    prerelease_prefix: Option<String>,
}

impl BumpKindArgs {
    fn flags(&self) -> BumpFlags {
        BumpFlags {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            prerelease: self.prerelease,
        }
    }
}

#[derive(clap::Args)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
struct BumpArgs {
    #[command(subcommand)]
    command: Option<BumpCommand>,

    #[command(flatten)]
    kind: BumpKindArgs,

    #[arg(long, value_name = "META", help = "Build metadata to append")]
    metadata: Option<String>,

    #[arg(required = true, help = "Version to bump")]
    version: Option<String>,
}

#[derive(Subcommand)]
enum BumpCommand {
    /// Bump the highest semver tag of a git repository
    Git(GitArgs),
}

#[derive(clap::Args)]
struct GitArgs {
    #[command(flatten)]
    kind: BumpKindArgs,

    #[arg(
        short = 's',
        long,
        overrides_with = "no_hash",
        help = "Append the short HEAD hash as build metadata"
    )]
    hash: bool,

    #[arg(long, overrides_with = "hash", help = "Do not append the HEAD hash")]
    no_hash: bool,

    #[arg(
        short = 'c',
        long,
        conflicts_with = "message",
        help = "Take the bump kind from the HEAD commit message"
    )]
    from_commit: bool,

    #[arg(short, long, default_value = ".", help = "Path to the git repository")]
    repository: PathBuf,
}

#[derive(clap::Args)]
struct PreviousArgs {
    #[arg(long, overrides_with = "no_released", help = "Only consider released versions")]
    released: bool,

    #[arg(long, overrides_with = "released", help = "Consider prerelease tags too")]
    no_released: bool,

    #[arg(short, long, default_value = ".", help = "Path to the git repository")]
    repository: PathBuf,
}

#[derive(clap::Args)]
struct SortArgs {
    #[arg(short, long, help = "Sort in descending order")]
    descending: bool,

    #[arg(long, help = "Drop prerelease versions")]
    no_prerelease: bool,

    #[arg(short, long, help = "Separator for the output")]
    separator: Option<String>,

    #[arg(required = true, help = "Versions to sort")]
    versions: Vec<String>,
}

#[derive(clap::Args)]
struct CompareArgs {
    first: String,
    second: String,
}

#[derive(Subcommand)]
enum ScriptCommand {
    /// Compare two versions; exit 0 lower, 1 equal, 2 greater, 3 invalid
    Compare(CompareArgs),
    /// Exit 0 when the version is released, 1 otherwise
    Released { version: String },
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init(args.verbose)?;

    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    let code = run(args.command, &config);
    std::process::exit(code);
}

/// `Some` when either flag of a `--x`/`--no-x` pair was given
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn report(error: &SemverToolError) -> i32 {
    ui::display_error(&ui::format_error_chain(error));
    cli::exit_code_for(error)
}

fn run(command: Command, config: &Config) -> i32 {
    match command {
        Command::Bump(args) => match args.command {
            Some(BumpCommand::Git(git)) => {
                let request = GitBumpRequest {
                    repository: git.repository,
                    flags: git.kind.flags(),
                    message: git.kind.message,
                    from_commit: git.from_commit,
                    prerelease_prefix: git.kind.prerelease_prefix,
                    hash: flag_pair(git.hash, git.no_hash),
                };
                print_bump(cli::run_git_bump(&request, config))
            }
            None => {
                let request = BumpRequest {
                    version: args.version.unwrap_or_default(),
                    flags: args.kind.flags(),
                    message: args.kind.message,
                    prerelease_prefix: args.kind.prerelease_prefix,
                    metadata: args.metadata,
                };
                print_bump(cli::run_bump(&request, config))
            }
        },
        Command::Previous(args) => {
            let request = PreviousRequest {
                repository: args.repository,
                released_only: flag_pair(args.released, args.no_released),
            };
            match cli::run_previous(&request, config) {
                Ok(outcome) => {
                    ui::display_boundary_warnings(&outcome.warnings);
                    println!("{}", outcome.tag);
                    cli::EXIT_SUCCESS
                }
                Err(e) => report(&e),
            }
        }
        Command::Sort(args) => {
            let request = SortRequest {
                versions: args.versions,
                descending: args.descending,
                no_prerelease: args.no_prerelease,
                separator: args.separator,
            };
            let outcome = cli::run_sort(&request, config);
            ui::display_boundary_warnings(&outcome.warnings);
            println!("{}", outcome.output);
            cli::EXIT_SUCCESS
        }
        Command::Compare(args)
        | Command::Script {
            command: ScriptCommand::Compare(args),
        } => {
            let result = cli::compare_versions(&args.first, &args.second);
            if let Err(e) = &result {
                ui::display_error(&ui::format_error_chain(e));
            }
            cli::compare_exit_code(&result)
        }
        Command::Script {
            command: ScriptCommand::Released { version },
        } => {
            let result = cli::is_released(&version);
            if let Err(e) = &result {
                ui::display_error(&ui::format_error_chain(e));
            }
            cli::released_exit_code(&result)
        }
    }
}

fn print_bump(result: semvertool::Result<cli::BumpOutcome>) -> i32 {
    match result {
        Ok(outcome) => {
            ui::display_boundary_warnings(&outcome.warnings);
            println!("{}", outcome.version);
            cli::EXIT_SUCCESS
        }
        Err(e) => report(&e),
    }
}
