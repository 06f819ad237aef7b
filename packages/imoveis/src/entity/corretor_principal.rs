use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// List of short strings stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "corretores_principais")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Provider id of the broker, as a decimal string.
    #[sea_orm(unique)]
    pub id_integracao: Option<String>,

    pub nome: String,
    pub email: String,
    pub whatsapp: String,

    /// Photo attachment. Plain column: `anexo` already depends on `imovel`,
    /// which depends on this table.
    pub foto_id: Option<i32>,

    #[sea_orm(column_type = "JsonBinary")]
    pub idiomas: StringList,
    #[sea_orm(column_type = "JsonBinary")]
    pub bairros_atuacao: StringList,

    pub organizacao_id: Option<i32>,
    #[sea_orm(belongs_to, from = "organizacao_id", to = "id")]
    pub organizacao: HasOne<super::organizacao::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
