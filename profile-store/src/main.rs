//! `profile-cli`: terminal front end over the profile store.
//!
//! Profiles are kept in a JSON snapshot (see `PROFILE_SNAPSHOT_PATH`) that is
//! loaded into the in-memory source before the command runs and written back
//! after a successful write.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]
#![expect(
    clippy::print_stdout,
    clippy::print_stderr,
    reason = "command output goes to the terminal"
)]

use std::ffi::OsString;
use std::process::ExitCode;
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use profile_store::cli::{self, Cli, CliError};
use profile_store::config::ProfileSettings;
use profile_store::domain::ProfileStore;
use profile_store::outbound::memory::InMemoryProfileSource;
use profile_store::outbound::memory::snapshot::SnapshotLocation;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args = Cli::parse();
    let settings = ProfileSettings::load_from_iter([OsString::from("profile-cli")])
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    init_tracing(settings.json_logs);

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build runtime")?;
    runtime.block_on(async_main(args, &settings))
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    let outcome = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = outcome {
        warn!(error = %e, "tracing init failed");
    }
}

async fn async_main(args: Cli, settings: &ProfileSettings) -> Result<ExitCode> {
    let path = Utf8PathBuf::from_path_buf(settings.snapshot_path())
        .map_err(|path| eyre!("snapshot path '{}' is not valid UTF-8", path.display()))?;
    let snapshot = SnapshotLocation::open(&path)?;
    let source = Arc::new(InMemoryProfileSource::from_documents(snapshot.load()?));
    let store = ProfileStore::new(Arc::clone(&source));

    let mutates = args.command.mutates();
    match cli::run(args.command, &store).await {
        Ok(output) => {
            if mutates {
                snapshot
                    .store(&source.documents().await)
                    .wrap_err("failed to persist profiles")?;
            }
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(CliError::Store(err)) => {
            error!(code = ?err.code(), "store operation failed");
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
