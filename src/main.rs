use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use grit::areas::repository::Repository;
use grit::artifacts::core::PagerWriter;
use grit::errors::UserError;
use is_terminal::IsTerminal;

#[derive(Parser)]
#[command(
    name = "grit",
    version = "0.1.0",
    about = "A small version-control system",
    long_about = "A single-user, local version-control system: snapshot a \
    working directory over time, branch and switch between independent lines \
    of history, and combine them via three-way merge with conflict detection.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "init", about = "Initialize a new repository in the current directory")]
    Init,
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "commit", about = "Create a new commit from the staged changes")]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(name = "rm", about = "Unstage a file or mark it for removal")]
    Rm {
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "log", about = "Show the current branch's history")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(name = "status", about = "Show branches, staged files and pending removals")]
    Status,
    #[command(
        name = "checkout",
        about = "Check out a branch, or restore a file from a commit",
        long_about = "Three forms: `checkout <branch>` switches branches, \
        `checkout -- <file>` restores a file from the head commit, and \
        `checkout <commitId> -- <file>` restores a file from the given commit."
    )]
    Checkout {
        #[arg(index = 1, help = "A branch name, or a commit id when followed by -- <file>")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "The file to restore")]
        file: Option<String>,
    },
    #[command(name = "branch", about = "Create a new branch at the current head")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch pointer")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "reset", about = "Move the current branch to the given commit")]
    Reset {
        #[arg(index = 1)]
        commit_id: String,
    },
    #[command(name = "merge", about = "Merge the given branch into the current one")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => exit_for_parse_error(err),
    };

    if let Err(err) = run(&cli.command) {
        match err.downcast_ref::<UserError>() {
            Some(user_error) => {
                // user-recoverable failures are one line on stdout and a
                // success exit code, so scripted callers can keep going
                println!("{user_error}");
                std::process::exit(0);
            }
            None => {
                eprintln!("grit: {err:?}");
                std::process::exit(1);
            }
        }
    }
}

fn run(command: &Commands) -> Result<()> {
    let pwd = std::env::current_dir()?;
    let pwd = pwd.to_string_lossy();

    match command {
        Commands::Init => {
            Repository::init(&pwd, Box::new(std::io::stdout()))?;
        }
        Commands::Add { file } => {
            Repository::load(&pwd, Box::new(std::io::stdout()))?.add(file)?;
        }
        Commands::Commit { message } => {
            Repository::load(&pwd, Box::new(std::io::stdout()))?.commit(message)?;
        }
        Commands::Rm { file } => {
            Repository::load(&pwd, Box::new(std::io::stdout()))?.rm(file)?;
        }
        Commands::Log => {
            with_pager(&pwd, |repository| repository.log())?;
        }
        Commands::GlobalLog => {
            with_pager(&pwd, |repository| repository.global_log())?;
        }
        Commands::Find { message } => {
            Repository::load(&pwd, Box::new(std::io::stdout()))?.find(message)?;
        }
        Commands::Status => {
            Repository::load(&pwd, Box::new(std::io::stdout()))?.status()?;
        }
        Commands::Checkout { target, file } => {
            let mut repository = Repository::load(&pwd, Box::new(std::io::stdout()))?;
            match (target, file) {
                (Some(branch), None) => repository.checkout_branch(branch)?,
                (Some(commit_id), Some(file)) => {
                    repository.checkout_file_from_commit(commit_id, file)?
                }
                (None, Some(file)) => repository.checkout_file(file)?,
                (None, None) => {
                    println!("Incorrect operands.");
                    return Ok(());
                }
            }
        }
        Commands::Branch { name } => {
            Repository::load(&pwd, Box::new(std::io::stdout()))?.branch(name)?;
        }
        Commands::RmBranch { name } => {
            Repository::load(&pwd, Box::new(std::io::stdout()))?.rm_branch(name)?;
        }
        Commands::Reset { commit_id } => {
            Repository::load(&pwd, Box::new(std::io::stdout()))?.reset(commit_id)?;
        }
        Commands::Merge { branch } => {
            Repository::load(&pwd, Box::new(std::io::stdout()))?.merge(branch)?;
        }
    }

    Ok(())
}

/// Run a history command with its output paged when stdout is a terminal
/// (and `NO_PAGER` is unset); plain stdout otherwise.
fn with_pager(pwd: &str, operation: impl FnOnce(&Repository) -> Result<()>) -> Result<()> {
    if std::io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none() {
        let pager = minus::Pager::new();
        let repository = Repository::load(pwd, Box::new(PagerWriter::new(pager.clone())))?;

        operation(&repository)?;
        minus::page_all(pager)?;
    } else {
        let repository = Repository::load(pwd, Box::new(std::io::stdout()))?;

        operation(&repository)?;
    }

    Ok(())
}

/// Translate clap's parse failures into the engine's one-line protocol.
fn exit_for_parse_error(err: clap::Error) -> ! {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            std::process::exit(0);
        }
        ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            println!("Please enter a command.");
            std::process::exit(0);
        }
        ErrorKind::InvalidSubcommand => {
            println!("No command with that name exists.");
            std::process::exit(0);
        }
        _ => {
            println!("Incorrect operands.");
            std::process::exit(0);
        }
    }
}
