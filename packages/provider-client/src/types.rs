//! Wire types of the provider's published-properties API.
//!
//! The provider omits or nulls fields freely, so every field falls back to
//! its default rather than failing the whole record.

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as an absent field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `{ "results": { "entities": [...] } }`
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub results: ListResults,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListResults {
    #[serde(default, deserialize_with = "nullable")]
    pub entities: Vec<PropertySummary>,
}

/// `{ "results": { ...detail... } }`
#[derive(Debug, Clone, Deserialize)]
pub struct DetailResponse {
    pub results: PropertyDetail,
}

/// Entry of the published list. Only `id` is needed to fetch the detail.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertySummary {
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub codigo: String,
    #[serde(default, deserialize_with = "nullable")]
    pub titulo: String,
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
}

/// Full property graph returned by the detail endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetail {
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub codigo: String,
    #[serde(default, deserialize_with = "nullable")]
    pub titulo: String,
    #[serde(default, deserialize_with = "nullable")]
    pub descricao: String,
    /// APARTAMENTO, CASA, COMERCIAL, ...
    #[serde(default, deserialize_with = "nullable")]
    pub tipo: String,
    /// VENDER or ALUGAR.
    #[serde(default, deserialize_with = "nullable")]
    pub objetivo: String,
    /// RESIDENCIAL, COMERCIAL, MISTO.
    #[serde(default, deserialize_with = "nullable")]
    pub finalidade: String,
    #[serde(default, deserialize_with = "nullable")]
    pub metragem: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub num_quartos: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub num_suites: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub num_banheiros: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub num_vagas: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub num_andar: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub unidade: String,
    #[serde(default, deserialize_with = "nullable")]
    pub condominio: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub visualizacoes: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub imagens: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub endereco: ExternalAddress,
    #[serde(default, deserialize_with = "nullable")]
    pub corretor_principal: ExternalBroker,
    #[serde(default)]
    pub preco_venda: Option<ExternalSalePrice>,
    #[serde(default)]
    pub preco_aluguel: Option<ExternalRentPrice>,
    #[serde(default)]
    pub empreendimento: Option<ExternalDevelopment>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalAddress {
    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub rua: String,
    #[serde(default, deserialize_with = "nullable")]
    pub numero: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub bairro: String,
    #[serde(default, deserialize_with = "nullable")]
    pub cidade: String,
    #[serde(default, deserialize_with = "nullable")]
    pub estado: String,
    #[serde(default, deserialize_with = "nullable")]
    pub cep: String,
    #[serde(default, deserialize_with = "nullable")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub longitude: f64,
}

impl ExternalAddress {
    /// The provider sends an all-empty address object when none is set.
    pub fn is_present(&self) -> bool {
        !self.rua.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalOrganization {
    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub nome: String,
    #[serde(default, deserialize_with = "nullable")]
    pub perfil: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalPhoto {
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub tipo: String,
    #[serde(default, deserialize_with = "nullable")]
    pub tamanho: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalBroker {
    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub nome: String,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable")]
    pub whatsapp: String,
    #[serde(default)]
    pub foto: Option<ExternalPhoto>,
    #[serde(default, deserialize_with = "nullable")]
    pub idiomas: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub bairros_atuacao: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub organizacao: ExternalOrganization,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalPackage {
    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub titulo: String,
    #[serde(default, deserialize_with = "nullable")]
    pub descricao: String,
    #[serde(default, deserialize_with = "nullable")]
    pub exclusivo: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub em_destaque: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSalePrice {
    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub preco: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub aceita_financiamento_bancario: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub aceita_financiamento_direto: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub aceita_permuta: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub aceita_carta_de_credito: bool,
    #[serde(rename = "aceitaFGTS", default, deserialize_with = "nullable")]
    pub aceita_fgts: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub ativo: bool,
    #[serde(default)]
    pub pacote: Option<ExternalPackage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRentPrice {
    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub preco: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub aceita_fiador: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub ativo: bool,
}

/// Development ("empreendimento"). Unlike the rest of the payload its
/// multi-word fields are snake_case upstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalDevelopment {
    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub codigo: String,
    #[serde(default, deserialize_with = "nullable")]
    pub titulo: String,
    #[serde(default, deserialize_with = "nullable")]
    pub descricao: String,
    #[serde(default, deserialize_with = "nullable")]
    pub data_entrega: String,
    #[serde(default, deserialize_with = "nullable")]
    pub etapa_lancamento: String,
    #[serde(default, deserialize_with = "nullable")]
    pub finalidade: String,
    #[serde(default, deserialize_with = "nullable")]
    pub tipo: String,
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub localizacao: String,
    #[serde(default, deserialize_with = "nullable")]
    pub endereco: ExternalAddress,
    #[serde(default, deserialize_with = "nullable")]
    pub torres: Vec<ExternalTower>,
    #[serde(default, deserialize_with = "nullable")]
    pub plantas: Vec<ExternalFloorPlan>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalTower {
    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub nome: String,
    #[serde(default, deserialize_with = "nullable")]
    pub total_colunas: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub total_elevadores: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub total_pavimentos: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub total_unidades: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalFloorPlan {
    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub nome: String,
    #[serde(default, deserialize_with = "nullable")]
    pub metragem: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub imagens: Vec<String>,
}
