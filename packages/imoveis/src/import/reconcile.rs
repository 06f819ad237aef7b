use provider_client::{ExternalAddress, PropertyDetail, PropertySource};
use tracing::{info, warn};

use super::{EntityKind, ImportError, Importer, Reconciled};
use crate::entity::imovel;
use crate::repository::{
    ImportRepository, NewAddress, NewProperty, PropertyRefs, PropertyUpdate,
};

impl From<&ExternalAddress> for NewAddress {
    fn from(ext: &ExternalAddress) -> Self {
        Self {
            rua: ext.rua.clone(),
            numero: ext.numero,
            bairro: ext.bairro.clone(),
            cidade: ext.cidade.clone(),
            estado: ext.estado.clone(),
            cep: ext.cep.clone(),
            latitude: ext.latitude,
            longitude: ext.longitude,
        }
    }
}

/// Creation record for a property seen for the first time.
fn new_property(
    id_integracao: &str,
    detail: &PropertyDetail,
    endereco_id: Option<i32>,
    refs: PropertyRefs,
) -> NewProperty {
    let descricao = if detail.descricao.is_empty() {
        format!("{} - {}", detail.titulo, detail.tipo)
    } else {
        detail.descricao.clone()
    };

    NewProperty {
        id_integracao: id_integracao.to_string(),
        codigo: detail.codigo.clone(),
        titulo: detail.titulo.clone(),
        tipo: detail.tipo.clone(),
        objetivo: detail.objetivo.clone(),
        finalidade: detail.finalidade.clone(),
        descricao,
        metragem: detail.metragem,
        num_quartos: detail.num_quartos,
        num_suites: detail.num_suites,
        num_banheiros: detail.num_banheiros,
        num_vagas: detail.num_vagas,
        num_andar: detail.num_andar,
        unidade: detail.unidade.clone(),
        condominio: detail.condominio,
        endereco_id,
        refs,
    }
}

fn text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn non_negative<T: Default + PartialOrd>(value: T) -> Option<T> {
    (value >= T::default()).then_some(value)
}

/// Partial update for a property that already exists locally. Empty
/// strings, non-positive area and negative counts leave the stored value.
fn property_update(detail: &PropertyDetail, refs: PropertyRefs) -> PropertyUpdate {
    PropertyUpdate {
        titulo: text(&detail.titulo),
        tipo: text(&detail.tipo),
        objetivo: text(&detail.objetivo),
        finalidade: text(&detail.finalidade),
        descricao: text(&detail.descricao),
        metragem: (detail.metragem > 0.0).then_some(detail.metragem),
        num_quartos: non_negative(detail.num_quartos),
        num_suites: non_negative(detail.num_suites),
        num_banheiros: non_negative(detail.num_banheiros),
        num_vagas: non_negative(detail.num_vagas),
        num_andar: Some(detail.num_andar),
        unidade: text(&detail.unidade),
        condominio: non_negative(detail.condominio),
        refs,
    }
}

/// Local id on success. Failures are logged and leave the reference unresolved.
fn resolved(
    entity: EntityKind,
    codigo: &str,
    result: Result<i32, ImportError>,
) -> Option<i32> {
    match result {
        Ok(id) => Some(id),
        Err(error) => {
            warn!(%entity, codigo, %error, "Failed to resolve related entity");
            None
        }
    }
}

impl<S, R> Importer<S, R>
where
    S: PropertySource,
    R: ImportRepository,
{
    /// Write one property and everything it references. Related entities
    /// are resolved before the property row is touched.
    pub async fn reconcile(
        &self,
        external_id: u64,
        detail: &PropertyDetail,
    ) -> Result<Reconciled, ImportError> {
        let refs = self.resolve_references(detail).await;

        let key = external_id.to_string();
        let existing = self
            .repo
            .find_property_by_external_id(&key)
            .await
            .map_err(ImportError::persistence(EntityKind::Property))?;

        let (property, created) = match existing {
            Some(current) => (self.update_existing(current.id, detail, refs).await?, false),
            None => (self.create_new(&key, detail, refs).await?, true),
        };

        if let Err(error) = self.sync_attachments(property.id, &detail.imagens).await {
            warn!(
                imovel_id = property.id,
                codigo = %detail.codigo,
                %error,
                "Failed to sync attachments"
            );
        }

        Ok(Reconciled { property, created })
    }

    async fn resolve_references(&self, detail: &PropertyDetail) -> PropertyRefs {
        let codigo = detail.codigo.as_str();
        let mut refs = PropertyRefs::default();

        if let Some(development) = &detail.empreendimento {
            refs.empreendimento_id = resolved(
                EntityKind::Development,
                codigo,
                self.upsert_development(development).await,
            );
        }

        if let Some(price) = &detail.preco_venda
            && price.ativo
        {
            refs.preco_venda_id = resolved(
                EntityKind::SalePrice,
                codigo,
                self.upsert_sale_price(price).await,
            );
        }

        if let Some(price) = &detail.preco_aluguel
            && price.ativo
        {
            refs.preco_aluguel_id = resolved(
                EntityKind::RentPrice,
                codigo,
                self.upsert_rent_price(price).await,
            );
        }

        if !detail.corretor_principal.email.is_empty() {
            refs.corretor_principal_id = resolved(
                EntityKind::Broker,
                codigo,
                self.upsert_broker(&detail.corretor_principal).await,
            );
        }

        refs
    }

    async fn update_existing(
        &self,
        imovel_id: i32,
        detail: &PropertyDetail,
        refs: PropertyRefs,
    ) -> Result<imovel::Model, ImportError> {
        let mut property = self
            .repo
            .update_property(imovel_id, &property_update(detail, refs))
            .await
            .map_err(ImportError::persistence(EntityKind::Property))?;

        if detail.endereco.is_present() {
            match self.attach_new_address(imovel_id, &detail.endereco).await {
                Ok(endereco_id) => property.endereco_id = Some(endereco_id),
                Err(error) => {
                    warn!(imovel_id, codigo = %detail.codigo, %error, "Failed to update address");
                }
            }
        }

        info!(imovel_id, codigo = %detail.codigo, "Updated property");
        Ok(property)
    }

    async fn attach_new_address(
        &self,
        imovel_id: i32,
        address: &ExternalAddress,
    ) -> Result<i32, ImportError> {
        let endereco_id = self
            .repo
            .create_address(&NewAddress::from(address))
            .await
            .map_err(ImportError::persistence(EntityKind::Address))?;

        self.repo
            .set_property_address(imovel_id, endereco_id)
            .await
            .map_err(ImportError::persistence(EntityKind::Property))?;

        Ok(endereco_id)
    }

    async fn create_new(
        &self,
        key: &str,
        detail: &PropertyDetail,
        refs: PropertyRefs,
    ) -> Result<imovel::Model, ImportError> {
        self.check_create_rules(detail, refs).await?;

        let endereco_id = if detail.endereco.is_present() {
            let id = self
                .repo
                .create_address(&NewAddress::from(&detail.endereco))
                .await
                .map_err(ImportError::persistence(EntityKind::Address))?;
            Some(id)
        } else {
            None
        };

        let property = self
            .repo
            .create_property(&new_property(key, detail, endereco_id, refs))
            .await
            .map_err(ImportError::persistence(EntityKind::Property))?;

        info!(imovel_id = property.id, codigo = %property.codigo, "Created property");
        Ok(property)
    }

    async fn check_create_rules(
        &self,
        detail: &PropertyDetail,
        refs: PropertyRefs,
    ) -> Result<(), ImportError> {
        let reject = |reason: &str| ImportError::Rejected {
            codigo: detail.codigo.clone(),
            reason: reason.to_string(),
        };

        match detail.objetivo.as_str() {
            "ALUGAR" if refs.preco_aluguel_id.is_none() => {
                return Err(reject("rental properties must have a rental price"));
            }
            "VENDER" if refs.preco_venda_id.is_none() => {
                return Err(reject("properties for sale must have a selling price"));
            }
            _ => {}
        }

        let taken = self
            .repo
            .property_code_exists(&detail.codigo)
            .await
            .map_err(ImportError::persistence(EntityKind::Property))?;
        if taken {
            return Err(reject("codigo already in use"));
        }

        Ok(())
    }
}
