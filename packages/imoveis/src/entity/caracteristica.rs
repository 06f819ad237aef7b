use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Feature tag (e.g. "Piscina"). Reference data maintained outside the import.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "caracteristica")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub nome: String,
    pub categoria_id: Option<i32>,
    pub categoria_nome: Option<String>,

    #[sea_orm(has_many, via = "imovel_caracteristica")]
    pub imoveis: HasMany<super::imovel::Entity>,

    #[sea_orm(has_many, via = "empreendimento_caracteristica")]
    pub empreendimentos: HasMany<super::empreendimento::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
