//! Narrow persistence interfaces used by the import engine.
//!
//! Each correlated entity is reached through [`UpsertStore`], parameterized
//! by the draft type carrying its business fields. Foreign keys are plain
//! `Option<i32>`: `None` means "no reference", never a zero id.

mod db;

pub use db::DbRepository;

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::entity::{anexo, imovel};

/// Lookup/create/update by an upstream correlation key.
///
/// `update` overwrites business fields only; the correlation key, the
/// creation timestamp and the local id are never touched.
#[async_trait]
pub trait UpsertStore<D: Sync>: Send + Sync {
    /// Local id of the row carrying `key`, if one exists.
    async fn find_id(&self, key: &str) -> Result<Option<i32>, DbErr>;

    /// Insert a new row seeded with `key`. Returns the new local id, or
    /// `None` when another writer inserted `key` first.
    async fn insert(&self, key: &str, draft: &D) -> Result<Option<i32>, DbErr>;

    async fn update(&self, id: i32, draft: &D) -> Result<(), DbErr>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DevelopmentDraft {
    pub titulo: String,
    pub descricao: String,
    pub tipo: String,
    pub status: String,
    pub localizacao: String,
    /// `None` keeps the stored value on update.
    pub finalidade: Option<String>,
    pub data_entrega: Option<String>,
    pub etapa_lancamento: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PackageDraft {
    pub titulo: String,
    pub descricao: String,
    pub exclusivo: bool,
    pub em_destaque: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SalePriceDraft {
    pub preco: f64,
    pub aceita_financiamento_bancario: bool,
    pub aceita_financiamento_direto: bool,
    pub aceita_permuta: bool,
    pub aceita_carta_de_credito: bool,
    pub aceita_fgts: bool,
    pub ativo: bool,
    pub pacote: Option<PackageDraft>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RentPriceDraft {
    pub preco: f64,
    pub aceita_fiador: bool,
    pub ativo: bool,
}

/// Organizations are keyed by name, so the draft only carries the profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrganizationDraft {
    pub perfil: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrokerDraft {
    pub nome: String,
    pub email: String,
    pub whatsapp: String,
    pub idiomas: Vec<String>,
    pub bairros_atuacao: Vec<String>,
    /// `None` leaves the broker's current organization in place on update.
    pub organizacao_id: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewAddress {
    pub rua: String,
    pub numero: i32,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Related-entity references resolved for one property in one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropertyRefs {
    pub empreendimento_id: Option<i32>,
    pub preco_venda_id: Option<i32>,
    pub preco_aluguel_id: Option<i32>,
    pub corretor_principal_id: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewProperty {
    pub id_integracao: String,
    pub codigo: String,
    pub titulo: String,
    pub tipo: String,
    pub objetivo: String,
    pub finalidade: String,
    pub descricao: String,
    pub metragem: f64,
    pub num_quartos: i32,
    pub num_suites: i32,
    pub num_banheiros: i32,
    pub num_vagas: i32,
    pub num_andar: i32,
    pub unidade: String,
    pub condominio: f64,
    pub endereco_id: Option<i32>,
    pub refs: PropertyRefs,
}

/// Partial property update. Every `None` leaves the column unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyUpdate {
    pub titulo: Option<String>,
    pub tipo: Option<String>,
    pub objetivo: Option<String>,
    pub finalidade: Option<String>,
    pub descricao: Option<String>,
    pub metragem: Option<f64>,
    pub num_quartos: Option<i32>,
    pub num_suites: Option<i32>,
    pub num_banheiros: Option<i32>,
    pub num_vagas: Option<i32>,
    pub num_andar: Option<i32>,
    pub unidade: Option<String>,
    pub condominio: Option<f64>,
    pub refs: PropertyRefs,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAttachment {
    pub nome: String,
    pub url: String,
    pub tipo: String,
    pub image: bool,
    pub video: bool,
    pub is_external_url: bool,
    pub can_publish: bool,
}

#[async_trait]
pub trait PropertyStore: Send + Sync {
    async fn find_property_by_external_id(
        &self,
        id_integracao: &str,
    ) -> Result<Option<imovel::Model>, DbErr>;

    async fn property_code_exists(&self, codigo: &str) -> Result<bool, DbErr>;

    async fn create_property(&self, property: &NewProperty) -> Result<imovel::Model, DbErr>;

    async fn update_property(
        &self,
        id: i32,
        update: &PropertyUpdate,
    ) -> Result<imovel::Model, DbErr>;

    /// Point the property at another address row. The previous row is left
    /// in place.
    async fn set_property_address(&self, id: i32, endereco_id: i32) -> Result<(), DbErr>;
}

#[async_trait]
pub trait AddressStore: Send + Sync {
    async fn create_address(&self, address: &NewAddress) -> Result<i32, DbErr>;
}

#[async_trait]
pub trait AttachmentStore: Send + Sync {
    /// Hard-delete every attachment owned by the property, then insert
    /// `attachments` in order. Returns the number inserted.
    async fn replace_property_attachments(
        &self,
        imovel_id: i32,
        attachments: &[NewAttachment],
    ) -> Result<usize, DbErr>;

    /// Attachments owned by the property, in creation order.
    async fn property_attachments(&self, imovel_id: i32) -> Result<Vec<anexo::Model>, DbErr>;
}

/// Everything the import engine needs from storage.
pub trait ImportRepository:
    UpsertStore<DevelopmentDraft>
    + UpsertStore<SalePriceDraft>
    + UpsertStore<RentPriceDraft>
    + UpsertStore<OrganizationDraft>
    + UpsertStore<BrokerDraft>
    + PropertyStore
    + AddressStore
    + AttachmentStore
{
}

impl<T> ImportRepository for T where
    T: UpsertStore<DevelopmentDraft>
        + UpsertStore<SalePriceDraft>
        + UpsertStore<RentPriceDraft>
        + UpsertStore<OrganizationDraft>
        + UpsertStore<BrokerDraft>
        + PropertyStore
        + AddressStore
        + AttachmentStore
{
}
