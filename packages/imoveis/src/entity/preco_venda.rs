use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "preco_venda")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub id_integracao: Option<String>,

    pub preco: f64,
    pub aceita_financiamento_bancario: bool,
    pub aceita_financiamento_direto: bool,
    pub aceita_permuta: bool,
    pub aceita_carta_de_credito: bool,
    pub aceita_fgts: bool,
    pub ativo: bool,

    // Listing package, denormalized from the provider's nested `pacote`.
    pub pacote_titulo: Option<String>,
    pub pacote_descricao: Option<String>,
    pub pacote_exclusivo: bool,
    pub pacote_em_destaque: bool,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
