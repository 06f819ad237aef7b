//! Import engine: reconciles the provider's published catalogue into the
//! local property graph.

mod attachments;
mod batch;
mod reconcile;
pub mod upsert;


use std::fmt;

use provider_client::{PropertySource, ProviderError};
use sea_orm::DbErr;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::entity::imovel;
use crate::repository::ImportRepository;

pub use attachments::image_attachments;
pub use upsert::Upserted;

/// Local entity touched by the import, used to tag errors and log lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Development,
    SalePrice,
    RentPrice,
    Organization,
    Broker,
    Address,
    Property,
    Attachment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "empreendimento",
            Self::SalePrice => "preco_venda",
            Self::RentPrice => "preco_aluguel",
            Self::Organization => "organizacao",
            Self::Broker => "corretor_principal",
            Self::Address => "endereco",
            Self::Property => "imovel",
            Self::Attachment => "anexo",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("provider returned no published properties")]
    NoPublishedProperties,

    #[error("{entity} record carries no usable external key")]
    MissingExternalId { entity: EntityKind },

    #[error("failed to persist {entity}: {source}")]
    Persistence {
        entity: EntityKind,
        #[source]
        source: DbErr,
    },

    #[error("property {codigo} rejected: {reason}")]
    Rejected { codigo: String, reason: String },
}

impl ImportError {
    pub(crate) fn persistence(entity: EntityKind) -> impl FnOnce(DbErr) -> Self {
        move |source| Self::Persistence { entity, source }
    }
}

/// One property that could not be imported.
#[derive(Debug)]
pub struct ItemFailure {
    pub external_id: u64,
    pub error: ImportError,
}

/// Aggregate result of one batch run.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    pub created: usize,
    pub updated: usize,
    pub failed: usize,
    pub failures: Vec<ItemFailure>,
}

impl ImportOutcome {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Property written by [`Importer::reconcile`].
#[derive(Debug, Clone)]
pub struct Reconciled {
    pub property: imovel::Model,
    pub created: bool,
}

pub struct Importer<S, R> {
    source: S,
    repo: R,
    /// Serializes Organization lookup-or-create across concurrent items.
    organization_lock: Mutex<()>,
    concurrency: usize,
}

impl<S, R> Importer<S, R>
where
    S: PropertySource,
    R: ImportRepository,
{
    pub fn new(source: S, repo: R) -> Self {
        Self {
            source,
            repo,
            organization_lock: Mutex::new(()),
            concurrency: 1,
        }
    }

    /// Number of properties reconciled at once. Values below 1 mean 1.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}
