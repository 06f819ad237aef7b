use futures::stream::{self, StreamExt};
use provider_client::PropertySource;
use tracing::{error, info};

use super::{ImportError, ImportOutcome, Importer, ItemFailure, Reconciled};
use crate::repository::ImportRepository;

impl<S, R> Importer<S, R>
where
    S: PropertySource,
    R: ImportRepository,
{
    /// Import every currently published property.
    ///
    /// Only a failing or empty published list aborts the run. Per-item
    /// failures are counted and the run moves on.
    pub async fn import_published(&self) -> Result<ImportOutcome, ImportError> {
        let summaries = self.source.fetch_published_summaries().await?;
        if summaries.is_empty() {
            return Err(ImportError::NoPublishedProperties);
        }

        info!(
            count = summaries.len(),
            concurrency = self.concurrency,
            "Starting import"
        );

        let results: Vec<(u64, Result<Reconciled, ImportError>)> = stream::iter(summaries)
            .map(|summary| async move {
                let result = self.import_one(summary.id).await;
                (summary.id, result)
            })
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        let mut outcome = ImportOutcome::default();
        for (external_id, result) in results {
            match result {
                Ok(reconciled) if reconciled.created => outcome.created += 1,
                Ok(_) => outcome.updated += 1,
                Err(error) => {
                    outcome.failed += 1;
                    outcome.failures.push(ItemFailure { external_id, error });
                }
            }
        }

        info!(
            created = outcome.created,
            updated = outcome.updated,
            failed = outcome.failed,
            "Import finished"
        );
        Ok(outcome)
    }

    async fn import_one(&self, external_id: u64) -> Result<Reconciled, ImportError> {
        let detail = match self.source.fetch_property_detail(external_id).await {
            Ok(detail) => detail,
            Err(e) => {
                error!(external_id, error = %e, "Failed to fetch property detail");
                return Err(e.into());
            }
        };

        match self.reconcile(external_id, &detail).await {
            Ok(reconciled) => {
                info!(
                    external_id,
                    codigo = %detail.codigo,
                    imovel_id = reconciled.property.id,
                    created = reconciled.created,
                    "Imported property"
                );
                Ok(reconciled)
            }
            Err(e) => {
                error!(external_id, codigo = %detail.codigo, error = %e, "Failed to import property");
                Err(e)
            }
        }
    }
}
