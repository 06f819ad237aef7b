use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Listing lifecycle status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImovelStatus {
    #[sea_orm(string_value = "PUBLICADO")]
    Publicado,
    /// Initial status of every newly created property.
    #[sea_orm(string_value = "EM_EDICAO")]
    EmEdicao,
    #[sea_orm(string_value = "ARQUIVADO")]
    Arquivado,
}

/// Property ("imovel"), the central listing entity.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "imovel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Provider id as a decimal string. Set once by the first import and
    /// never rewritten afterwards.
    #[sea_orm(unique)]
    pub id_integracao: Option<String>,

    #[sea_orm(unique)]
    pub codigo: String,
    pub titulo: String,
    pub tipo: String,
    pub objetivo: String,
    pub finalidade: String,
    #[sea_orm(column_type = "Text")]
    pub descricao: String,

    pub metragem: f64,
    pub num_quartos: i32,
    pub num_suites: i32,
    pub num_banheiros: i32,
    pub num_vagas: i32,
    pub num_andar: i32,
    pub unidade: String,

    pub condominio: f64,
    pub iptu: f64,
    pub inscricao_iptu: String,

    pub endereco_id: Option<i32>,
    #[sea_orm(belongs_to, from = "endereco_id", to = "id")]
    pub endereco: HasOne<super::endereco::Entity>,

    pub empreendimento_id: Option<i32>,
    #[sea_orm(belongs_to, from = "empreendimento_id", to = "id")]
    pub empreendimento: HasOne<super::empreendimento::Entity>,

    pub planta_id: Option<i32>,
    #[sea_orm(belongs_to, from = "planta_id", to = "id")]
    pub planta: HasOne<super::planta::Entity>,

    pub preco_venda_id: Option<i32>,
    #[sea_orm(belongs_to, from = "preco_venda_id", to = "id")]
    pub preco_venda: HasOne<super::preco_venda::Entity>,

    pub preco_aluguel_id: Option<i32>,
    #[sea_orm(belongs_to, from = "preco_aluguel_id", to = "id")]
    pub preco_aluguel: HasOne<super::preco_aluguel::Entity>,

    pub corretor_principal_id: Option<i32>,
    #[sea_orm(belongs_to, from = "corretor_principal_id", to = "id")]
    pub corretor_principal: HasOne<super::corretor_principal::Entity>,

    pub pacote_id: Option<i32>,
    #[sea_orm(belongs_to, from = "pacote_id", to = "id")]
    pub pacote: HasOne<super::pacote::Entity>,

    #[sea_orm(has_many)]
    pub anexos: HasMany<super::anexo::Entity>,

    #[sea_orm(has_many, via = "imovel_caracteristica")]
    pub caracteristicas: HasMany<super::caracteristica::Entity>,

    pub status: ImovelStatus,
    #[sea_orm(default_value = false)]
    pub published: bool,
    #[sea_orm(default_value = false)]
    pub closed: bool,
    #[sea_orm(default_value = 0)]
    pub visualizacoes: i32,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
