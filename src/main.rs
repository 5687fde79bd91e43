use anyhow::Result;
use clap::{Parser, Subcommand};
use crookie::areas::repository::Repository;
use crookie::artifacts::core::Output;
use crookie::commands::porcelain::log::LogOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `crookie=trace`)
const LOG_ENV: &str = "CROOKIE_LOG";

#[derive(Parser)]
#[command(
    name = "crookie",
    version = "0.1.0",
    about = "A minimal content-addressable version control system",
    long_about = "Stores immutable snapshots of files keyed by their SHA-1 digest, \
    links them into a linear commit history, and shows line diffs between \
    successive versions of a file.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        global = true,
        value_name = "DIR",
        help = "Run as if started in DIR instead of the current directory"
    )]
    directory: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .crookie directory in the current directory or at the specified path. \
        Running it on an existing repository leaves it untouched."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Store files and stage them for the next commit",
        long_about = "This command stores the content of each file in the object store \
        and appends it to the staging index."
    )]
    Add {
        #[arg(index = 1, required = true, num_args = 1.., help = "The files to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the staged files as a new commit on top of HEAD \
        and clears the staging index."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command lists commits from HEAD (or the given commit) back to the first commit."
    )]
    Log {
        #[arg(index = 1, help = "The commit to start from (defaults to HEAD)")]
        revision: Option<String>,
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
        #[arg(long = "abbrev-commit", help = "Show abbreviated commit digests")]
        abbrev_commit: bool,
    },
    #[command(
        name = "show",
        about = "Show a commit and the changes it made",
        long_about = "This command prints each file of a commit and its line diff against the parent commit."
    )]
    Show {
        #[arg(index = 1, help = "The commit digest")]
        commit: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the raw content of an object in the repository. \
        It requires the digest of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object digest to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object store",
        long_about = "This command prints the digest of a file and can write it to the object store."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object store")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let pwd = match cli.directory {
        Some(directory) => directory,
        None => std::env::current_dir()?,
    };
    let pwd = pwd.to_string_lossy().to_string();

    let output = match &cli.command {
        Commands::Log { .. } | Commands::Show { .. } => Output::for_listing(),
        _ => Output::Stdout,
    };

    let result = run(cli.command, &pwd, &output).await;
    output.finish()?;

    result
}

async fn run(command: Commands, pwd: &str, output: &Output) -> Result<()> {
    match command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => PathBuf::from(pwd).join(path).to_string_lossy().to_string(),
                None => pwd.to_string(),
            };
            let mut repository = Repository::create(&path, output.writer())?;

            repository.init().await?
        }
        Commands::Add { paths } => {
            let mut repository = Repository::new(pwd, output.writer())?;

            repository.add(&paths).await?;
        }
        Commands::Commit { message } => {
            let mut repository = Repository::new(pwd, output.writer())?;

            repository.commit(&message).await?;
        }
        Commands::Log {
            revision,
            oneline,
            abbrev_commit,
        } => {
            let repository = Repository::new(pwd, output.writer())?;
            let opts = LogOptions {
                oneline,
                abbrev_commit,
                start: revision,
            };

            repository.log(&opts)?
        }
        Commands::Show { commit } => {
            let repository = Repository::new(pwd, output.writer())?;

            repository.show(&commit)?
        }
        Commands::CatFile { sha } => {
            let mut repository = Repository::new(pwd, output.writer())?;

            repository.cat_file(&sha)?
        }
        Commands::HashObject { write, file } => {
            let mut repository = Repository::new(pwd, output.writer())?;

            repository.hash_object(&file, write)?
        }
    }

    Ok(())
}
