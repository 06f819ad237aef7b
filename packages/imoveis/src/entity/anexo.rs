use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The single parent an attachment hangs off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnexoOwner {
    Imovel(i32),
    Empreendimento(i32),
    Planta(i32),
}

impl AnexoOwner {
    /// Owner as the `(imovel_id, empreendimento_id, planta_id)` column triple.
    pub fn columns(self) -> (Option<i32>, Option<i32>, Option<i32>) {
        match self {
            Self::Imovel(id) => (Some(id), None, None),
            Self::Empreendimento(id) => (None, Some(id), None),
            Self::Planta(id) => (None, None, Some(id)),
        }
    }
}

/// Attachment (image, video, document). Exactly one of the three owner
/// columns is set.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "anexo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub nome: String,
    /// Storage path; empty for external URLs.
    pub path: String,
    pub tamanho: i64,
    /// Free-form type label, e.g. "image".
    pub tipo: String,
    pub url: String,
    pub can_publish: bool,
    pub image: bool,
    pub video: bool,
    pub is_external_url: bool,

    pub imovel_id: Option<i32>,
    #[sea_orm(belongs_to, from = "imovel_id", to = "id")]
    pub imovel: HasOne<super::imovel::Entity>,

    pub empreendimento_id: Option<i32>,
    #[sea_orm(belongs_to, from = "empreendimento_id", to = "id")]
    pub empreendimento: HasOne<super::empreendimento::Entity>,

    pub planta_id: Option<i32>,
    #[sea_orm(belongs_to, from = "planta_id", to = "id")]
    pub planta: HasOne<super::planta::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl Model {
    pub fn owner(&self) -> Option<AnexoOwner> {
        match (self.imovel_id, self.empreendimento_id, self.planta_id) {
            (Some(id), None, None) => Some(AnexoOwner::Imovel(id)),
            (None, Some(id), None) => Some(AnexoOwner::Empreendimento(id)),
            (None, None, Some(id)) => Some(AnexoOwner::Planta(id)),
            _ => None,
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
