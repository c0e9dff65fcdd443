use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use caremigrate::config;
use caremigrate::db::repository::SqlitePatientLookup;
use caremigrate::db::sqlite::open_database;
use caremigrate::facility::HttpFacilityDirectory;
use caremigrate::legacy::HttpLegacySource;
use caremigrate::migrate::{
    seed_allergies, MigrationError, MigrationOptions, MigrationRunner, SqlitePatientSink,
};

fn prompt(question: &str) -> io::Result<String> {
    print!("{question}");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

/// Ask for the page size. Anything unparseable falls back to the default
/// instead of killing the run the operator just confirmed.
fn ask_page_size() -> io::Result<u32> {
    if !prompt("Migrate in batches (y/n) ? ")?.eq_ignore_ascii_case("y") {
        return Ok(config::DEFAULT_PAGE_SIZE);
    }
    Ok(page_size_from_input(&prompt("Provide batch size : ")?))
}

fn page_size_from_input(raw: &str) -> u32 {
    match raw.parse::<u32>() {
        Ok(size) if size > 0 => size,
        _ => {
            warn!(
                input = raw,
                default = config::DEFAULT_PAGE_SIZE,
                "not a usable batch size, using default"
            );
            config::DEFAULT_PAGE_SIZE
        }
    }
}

fn run() -> Result<(), MigrationError> {
    info!(
        version = config::APP_VERSION,
        source = %config::source_api_url(),
        "starting {}",
        config::APP_NAME
    );

    if !prompt("Type y to start data migration : ")?.eq_ignore_ascii_case("y") {
        info!("migration cancelled");
        return Ok(());
    }
    let page_size = ask_page_size()?;

    std::fs::create_dir_all(config::app_data_dir())?;
    let conn = open_database(&config::database_path())?;
    seed_allergies(&conn)?;

    let source = HttpLegacySource::new(&config::source_api_url(), config::HTTP_TIMEOUT_SECS)?;
    let facilities =
        HttpFacilityDirectory::new(&config::facility_api_url(), config::HTTP_TIMEOUT_SECS)?;
    let lookup = SqlitePatientLookup { conn: &conn };
    let mut sink = SqlitePatientSink { conn: &conn };

    let mut runner = MigrationRunner {
        source: &source,
        sink: &mut sink,
        lookup: &lookup,
        facilities: &facilities,
        options: MigrationOptions { page_size },
    };
    let report = runner.run();

    let stdout = io::stdout();
    report.write_summary(&mut stdout.lock())?;
    Ok(())
}


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    if let Err(e) = run() {
        tracing::error!(error = %e, "migration failed");
        std::process::exit(1);
    }
}
