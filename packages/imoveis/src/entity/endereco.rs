use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Street address. Never shared: every import writes a fresh row.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "endereco")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub rua: String,
    pub numero: i32,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl ActiveModelBehavior for ActiveModel {}
