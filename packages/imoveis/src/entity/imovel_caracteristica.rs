use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "imovel_caracteristica")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub imovel_id: i32,
    #[sea_orm(primary_key)]
    pub caracteristica_id: i32,
    #[sea_orm(belongs_to, from = "imovel_id", to = "id")]
    pub imovel: Option<super::imovel::Entity>,
    #[sea_orm(belongs_to, from = "caracteristica_id", to = "id")]
    pub caracteristica: Option<super::caracteristica::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
