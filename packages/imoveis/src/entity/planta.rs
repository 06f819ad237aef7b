use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Floor plan of a development.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "planta")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub nome: String,
    pub metragem: f64,

    pub empreendimento_id: i32,
    #[sea_orm(belongs_to, from = "empreendimento_id", to = "id")]
    pub empreendimento: HasOne<super::empreendimento::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
