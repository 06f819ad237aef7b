use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "torre")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub nome: String,
    pub total_colunas: i32,
    pub total_elevadores: i32,
    pub total_pavimentos: i32,
    pub total_unidades: i32,

    pub empreendimento_id: i32,
    #[sea_orm(belongs_to, from = "empreendimento_id", to = "id")]
    pub empreendimento: HasOne<super::empreendimento::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
