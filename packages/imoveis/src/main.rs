use anyhow::{Context, bail};
use imoveis::config::AppConfig;
use imoveis::database::{ensure_indexes, init_db};
use imoveis::import::Importer;
use imoveis::repository::DbRepository;
use provider_client::ProviderClient;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = AppConfig::load().context("Failed to load config")?;
    info!(
        base_url = %config.external_api.base_url,
        integration_source = %config.external_api.integration_source,
        concurrency = config.import.concurrency,
        "Property import starting"
    );

    let db = init_db(&config.database.url)
        .await
        .context("Failed to connect to database")?;
    ensure_indexes(&db)
        .await
        .context("Failed to create indexes")?;

    let client =
        ProviderClient::new(&config.external_api).context("Failed to build provider client")?;

    let importer = Importer::new(client, DbRepository::new(db))
        .with_concurrency(config.import.concurrency);

    let outcome = importer
        .import_published()
        .await
        .context("Import aborted")?;

    for failure in &outcome.failures {
        warn!(external_id = failure.external_id, error = %failure.error, "Property not imported");
    }

    if !outcome.is_success() {
        bail!(
            "import finished with {} failed of {} properties",
            outcome.failed,
            outcome.created + outcome.updated + outcome.failed
        );
    }

    info!(
        created = outcome.created,
        updated = outcome.updated,
        "Property import complete"
    );
    Ok(())
}
