//! Correlation upserts for the entities hanging off a property.

use provider_client::{
    ExternalBroker, ExternalDevelopment, ExternalOrganization, ExternalPackage,
    ExternalRentPrice, ExternalSalePrice, PropertySource,
};
use sea_orm::DbErr;
use tracing::debug;

use super::{EntityKind, ImportError, Importer};
use crate::repository::{
    BrokerDraft, DevelopmentDraft, ImportRepository, OrganizationDraft, PackageDraft,
    RentPriceDraft, SalePriceDraft, UpsertStore,
};

/// Which branch an upsert took, with the local id either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upserted {
    Created(i32),
    Updated(i32),
}

impl Upserted {
    pub fn id(self) -> i32 {
        match self {
            Self::Created(id) | Self::Updated(id) => id,
        }
    }

    pub fn is_created(self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Update the row correlated with `key` in place, or insert a new one.
pub async fn upsert<D, S>(store: &S, key: &str, draft: &D) -> Result<Upserted, DbErr>
where
    D: Sync,
    S: UpsertStore<D> + ?Sized,
{
    let id = match store.find_id(key).await? {
        Some(id) => id,
        None => match store.insert(key, draft).await? {
            Some(id) => return Ok(Upserted::Created(id)),
            // Lost the insert to a concurrent writer: update its row.
            None => store.find_id(key).await?.ok_or_else(|| {
                DbErr::RecordNotFound(format!("row for key {key} after insert conflict"))
            })?,
        },
    };
    store.update(id, draft).await?;
    Ok(Upserted::Updated(id))
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl From<&ExternalDevelopment> for DevelopmentDraft {
    fn from(ext: &ExternalDevelopment) -> Self {
        Self {
            titulo: ext.titulo.clone(),
            descricao: ext.descricao.clone(),
            tipo: ext.tipo.clone(),
            status: ext.status.clone(),
            localizacao: ext.localizacao.clone(),
            finalidade: non_empty(&ext.finalidade),
            data_entrega: non_empty(&ext.data_entrega),
            etapa_lancamento: non_empty(&ext.etapa_lancamento),
        }
    }
}

impl From<&ExternalPackage> for PackageDraft {
    fn from(ext: &ExternalPackage) -> Self {
        Self {
            titulo: ext.titulo.clone(),
            descricao: ext.descricao.clone(),
            exclusivo: ext.exclusivo,
            em_destaque: ext.em_destaque,
        }
    }
}

impl From<&ExternalSalePrice> for SalePriceDraft {
    fn from(ext: &ExternalSalePrice) -> Self {
        Self {
            preco: ext.preco,
            aceita_financiamento_bancario: ext.aceita_financiamento_bancario,
            aceita_financiamento_direto: ext.aceita_financiamento_direto,
            aceita_permuta: ext.aceita_permuta,
            aceita_carta_de_credito: ext.aceita_carta_de_credito,
            aceita_fgts: ext.aceita_fgts,
            ativo: ext.ativo,
            pacote: ext.pacote.as_ref().map(PackageDraft::from),
        }
    }
}

impl From<&ExternalRentPrice> for RentPriceDraft {
    fn from(ext: &ExternalRentPrice) -> Self {
        Self {
            preco: ext.preco,
            aceita_fiador: ext.aceita_fiador,
            ativo: ext.ativo,
        }
    }
}

fn external_key(entity: EntityKind, id: u64) -> Result<String, ImportError> {
    if id == 0 {
        return Err(ImportError::MissingExternalId { entity });
    }
    Ok(id.to_string())
}

impl<S, R> Importer<S, R>
where
    S: PropertySource,
    R: ImportRepository,
{
    async fn upsert_keyed<D>(
        &self,
        entity: EntityKind,
        key: &str,
        draft: &D,
    ) -> Result<i32, ImportError>
    where
        D: Sync,
        R: UpsertStore<D>,
    {
        let outcome = upsert(&self.repo, key, draft)
            .await
            .map_err(ImportError::persistence(entity))?;

        debug!(
            entity = %entity,
            key,
            id = outcome.id(),
            created = outcome.is_created(),
            "Upserted related entity"
        );
        Ok(outcome.id())
    }

    pub async fn upsert_development(&self, ext: &ExternalDevelopment) -> Result<i32, ImportError> {
        let key = external_key(EntityKind::Development, ext.id)?;
        self.upsert_keyed(EntityKind::Development, &key, &DevelopmentDraft::from(ext))
            .await
    }

    pub async fn upsert_sale_price(&self, ext: &ExternalSalePrice) -> Result<i32, ImportError> {
        let key = external_key(EntityKind::SalePrice, ext.id)?;
        self.upsert_keyed(EntityKind::SalePrice, &key, &SalePriceDraft::from(ext))
            .await
    }

    pub async fn upsert_rent_price(&self, ext: &ExternalRentPrice) -> Result<i32, ImportError> {
        let key = external_key(EntityKind::RentPrice, ext.id)?;
        self.upsert_keyed(EntityKind::RentPrice, &key, &RentPriceDraft::from(ext))
            .await
    }

    /// Organizations are correlated by name. The profile is refreshed on
    /// every hit.
    pub async fn upsert_organization(
        &self,
        ext: &ExternalOrganization,
    ) -> Result<i32, ImportError> {
        if ext.nome.is_empty() {
            return Err(ImportError::MissingExternalId {
                entity: EntityKind::Organization,
            });
        }

        let _guard = self.organization_lock.lock().await;
        let draft = OrganizationDraft {
            perfil: ext.perfil.clone(),
        };
        self.upsert_keyed(EntityKind::Organization, &ext.nome, &draft)
            .await
    }

    /// Resolves the broker's organization first. A broker without an
    /// organization name is stored without one. Brokers are keyed by their
    /// external id even when it is 0.
    pub async fn upsert_broker(&self, ext: &ExternalBroker) -> Result<i32, ImportError> {
        let key = ext.id.to_string();

        let organizacao_id = if ext.organizacao.nome.is_empty() {
            None
        } else {
            Some(self.upsert_organization(&ext.organizacao).await?)
        };

        let draft = BrokerDraft {
            nome: ext.nome.clone(),
            email: ext.email.clone(),
            whatsapp: ext.whatsapp.clone(),
            idiomas: ext.idiomas.clone(),
            bairros_atuacao: ext.bairros_atuacao.clone(),
            organizacao_id,
        };
        self.upsert_keyed(EntityKind::Broker, &key, &draft).await
    }
}
