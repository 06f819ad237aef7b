use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Brokerage the broker works for. Upstream exposes no stable id for it,
/// so `nome` is the correlation key.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "organizacoes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub nome: String,
    pub perfil: String,

    #[sea_orm(has_many)]
    pub corretores: HasMany<super::corretor_principal::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
