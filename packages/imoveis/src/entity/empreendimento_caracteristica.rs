use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "empreendimento_caracteristica")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub empreendimento_id: i32,
    #[sea_orm(primary_key)]
    pub caracteristica_id: i32,
    #[sea_orm(belongs_to, from = "empreendimento_id", to = "id")]
    pub empreendimento: Option<super::empreendimento::Entity>,
    #[sea_orm(belongs_to, from = "caracteristica_id", to = "id")]
    pub caracteristica: Option<super::caracteristica::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
