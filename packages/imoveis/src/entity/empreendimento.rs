use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Development ("empreendimento"): a building or project grouping units.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "empreendimento")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub id_integracao: Option<String>,

    pub titulo: String,
    #[sea_orm(column_type = "Text")]
    pub descricao: String,
    /// Free-form upstream value such as "2027-06".
    pub data_entrega: Option<String>,
    pub etapa_lancamento: Option<String>,
    pub finalidade: Option<String>,
    pub tipo: String,
    pub status: String,
    pub localizacao: String,

    pub endereco_id: Option<i32>,
    #[sea_orm(belongs_to, from = "endereco_id", to = "id")]
    pub endereco: HasOne<super::endereco::Entity>,

    #[sea_orm(has_many)]
    pub torres: HasMany<super::torre::Entity>,

    #[sea_orm(has_many)]
    pub plantas: HasMany<super::planta::Entity>,

    #[sea_orm(has_many, via = "empreendimento_caracteristica")]
    pub caracteristicas: HasMany<super::caracteristica::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
