use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::prelude::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionTrait, Value,
};

use super::{
    AddressStore, AttachmentStore, BrokerDraft, DevelopmentDraft, NewAddress, NewAttachment,
    NewProperty, OrganizationDraft, PropertyStore, PropertyUpdate, RentPriceDraft,
    SalePriceDraft, UpsertStore,
};
use crate::entity::corretor_principal::StringList;
use crate::entity::imovel::ImovelStatus;
use crate::entity::{
    anexo, corretor_principal, empreendimento, endereco, imovel, organizacao, preco_aluguel,
    preco_venda,
};

/// `Some` becomes a write, `None` leaves the column out of the statement.
fn set_some<V: Into<Value>>(value: Option<V>) -> ActiveValue<V> {
    value.map_or(NotSet, Set)
}

/// A unique-key collision means another writer inserted the row first.
fn inserted_id(result: Result<i32, DbErr>) -> Result<Option<i32>, DbErr> {
    match result {
        Ok(id) => Ok(Some(id)),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => Ok(None),
        Err(e) => Err(e),
    }
}

/// sea-orm backed implementation of every import store.
#[derive(Clone)]
pub struct DbRepository {
    db: DatabaseConnection,
}

impl DbRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UpsertStore<DevelopmentDraft> for DbRepository {
    async fn find_id(&self, key: &str) -> Result<Option<i32>, DbErr> {
        empreendimento::Entity::find()
            .select_only()
            .column(empreendimento::Column::Id)
            .filter(empreendimento::Column::IdIntegracao.eq(key))
            .into_tuple()
            .one(&self.db)
            .await
    }

    async fn insert(&self, key: &str, draft: &DevelopmentDraft) -> Result<Option<i32>, DbErr> {
        let now = Utc::now();
        // Address stays unset: the provider's development address is not imported.
        let model = empreendimento::ActiveModel {
            id_integracao: Set(Some(key.to_string())),
            titulo: Set(draft.titulo.clone()),
            descricao: Set(draft.descricao.clone()),
            tipo: Set(draft.tipo.clone()),
            status: Set(draft.status.clone()),
            localizacao: Set(draft.localizacao.clone()),
            finalidade: Set(draft.finalidade.clone()),
            data_entrega: Set(draft.data_entrega.clone()),
            etapa_lancamento: Set(draft.etapa_lancamento.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        inserted_id(model.insert(&self.db).await.map(|m| m.id))
    }

    async fn update(&self, id: i32, draft: &DevelopmentDraft) -> Result<(), DbErr> {
        let model = empreendimento::ActiveModel {
            id: Unchanged(id),
            titulo: Set(draft.titulo.clone()),
            descricao: Set(draft.descricao.clone()),
            tipo: Set(draft.tipo.clone()),
            status: Set(draft.status.clone()),
            localizacao: Set(draft.localizacao.clone()),
            finalidade: set_some(draft.finalidade.clone().map(Some)),
            data_entrega: set_some(draft.data_entrega.clone().map(Some)),
            etapa_lancamento: set_some(draft.etapa_lancamento.clone().map(Some)),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        model.update(&self.db).await?;
        Ok(())
    }
}

#[async_trait]
impl UpsertStore<SalePriceDraft> for DbRepository {
    async fn find_id(&self, key: &str) -> Result<Option<i32>, DbErr> {
        preco_venda::Entity::find()
            .select_only()
            .column(preco_venda::Column::Id)
            .filter(preco_venda::Column::IdIntegracao.eq(key))
            .into_tuple()
            .one(&self.db)
            .await
    }

    async fn insert(&self, key: &str, draft: &SalePriceDraft) -> Result<Option<i32>, DbErr> {
        let now = Utc::now();
        let mut model = sale_price_fields(draft);
        model.id_integracao = Set(Some(key.to_string()));
        model.created_at = Set(now);
        model.updated_at = Set(now);

        inserted_id(model.insert(&self.db).await.map(|m| m.id))
    }

    async fn update(&self, id: i32, draft: &SalePriceDraft) -> Result<(), DbErr> {
        let mut model = sale_price_fields(draft);
        model.id = Unchanged(id);
        model.updated_at = Set(Utc::now());

        model.update(&self.db).await?;
        Ok(())
    }
}

fn sale_price_fields(draft: &SalePriceDraft) -> preco_venda::ActiveModel {
    let pacote = draft.pacote.as_ref();
    preco_venda::ActiveModel {
        preco: Set(draft.preco),
        aceita_financiamento_bancario: Set(draft.aceita_financiamento_bancario),
        aceita_financiamento_direto: Set(draft.aceita_financiamento_direto),
        aceita_permuta: Set(draft.aceita_permuta),
        aceita_carta_de_credito: Set(draft.aceita_carta_de_credito),
        aceita_fgts: Set(draft.aceita_fgts),
        ativo: Set(draft.ativo),
        pacote_titulo: Set(pacote.map(|p| p.titulo.clone())),
        pacote_descricao: Set(pacote.map(|p| p.descricao.clone())),
        pacote_exclusivo: Set(pacote.is_some_and(|p| p.exclusivo)),
        pacote_em_destaque: Set(pacote.is_some_and(|p| p.em_destaque)),
        ..Default::default()
    }
}

#[async_trait]
impl UpsertStore<RentPriceDraft> for DbRepository {
    async fn find_id(&self, key: &str) -> Result<Option<i32>, DbErr> {
        preco_aluguel::Entity::find()
            .select_only()
            .column(preco_aluguel::Column::Id)
            .filter(preco_aluguel::Column::IdIntegracao.eq(key))
            .into_tuple()
            .one(&self.db)
            .await
    }

    async fn insert(&self, key: &str, draft: &RentPriceDraft) -> Result<Option<i32>, DbErr> {
        let now = Utc::now();
        let model = preco_aluguel::ActiveModel {
            id_integracao: Set(Some(key.to_string())),
            preco: Set(draft.preco),
            aceita_fiador: Set(draft.aceita_fiador),
            ativo: Set(draft.ativo),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        inserted_id(model.insert(&self.db).await.map(|m| m.id))
    }

    async fn update(&self, id: i32, draft: &RentPriceDraft) -> Result<(), DbErr> {
        let model = preco_aluguel::ActiveModel {
            id: Unchanged(id),
            preco: Set(draft.preco),
            aceita_fiador: Set(draft.aceita_fiador),
            ativo: Set(draft.ativo),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        model.update(&self.db).await?;
        Ok(())
    }
}

#[async_trait]
impl UpsertStore<OrganizationDraft> for DbRepository {
    async fn find_id(&self, key: &str) -> Result<Option<i32>, DbErr> {
        organizacao::Entity::find()
            .select_only()
            .column(organizacao::Column::Id)
            .filter(organizacao::Column::Nome.eq(key))
            .into_tuple()
            .one(&self.db)
            .await
    }

    async fn insert(&self, key: &str, draft: &OrganizationDraft) -> Result<Option<i32>, DbErr> {
        let now = Utc::now();
        let model = organizacao::ActiveModel {
            nome: Set(key.to_string()),
            perfil: Set(draft.perfil.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        inserted_id(model.insert(&self.db).await.map(|m| m.id))
    }

    async fn update(&self, id: i32, draft: &OrganizationDraft) -> Result<(), DbErr> {
        organizacao::Entity::update_many()
            .col_expr(organizacao::Column::Perfil, Expr::value(draft.perfil.clone()))
            .col_expr(organizacao::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(organizacao::Column::Id.eq(id))
            .filter(organizacao::Column::Perfil.ne(draft.perfil.clone()))
            .exec(&self.db)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UpsertStore<BrokerDraft> for DbRepository {
    async fn find_id(&self, key: &str) -> Result<Option<i32>, DbErr> {
        corretor_principal::Entity::find()
            .select_only()
            .column(corretor_principal::Column::Id)
            .filter(corretor_principal::Column::IdIntegracao.eq(key))
            .into_tuple()
            .one(&self.db)
            .await
    }

    async fn insert(&self, key: &str, draft: &BrokerDraft) -> Result<Option<i32>, DbErr> {
        let now = Utc::now();
        // foto_id is left out of the insert.
        let model = corretor_principal::ActiveModel {
            id_integracao: Set(Some(key.to_string())),
            nome: Set(draft.nome.clone()),
            email: Set(draft.email.clone()),
            whatsapp: Set(draft.whatsapp.clone()),
            idiomas: Set(StringList::from(draft.idiomas.clone())),
            bairros_atuacao: Set(draft.bairros_atuacao.clone().into()),
            organizacao_id: set_some(draft.organizacao_id.map(Some)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        inserted_id(model.insert(&self.db).await.map(|m| m.id))
    }

    async fn update(&self, id: i32, draft: &BrokerDraft) -> Result<(), DbErr> {
        let model = corretor_principal::ActiveModel {
            id: Unchanged(id),
            nome: Set(draft.nome.clone()),
            email: Set(draft.email.clone()),
            whatsapp: Set(draft.whatsapp.clone()),
            idiomas: Set(StringList::from(draft.idiomas.clone())),
            bairros_atuacao: Set(draft.bairros_atuacao.clone().into()),
            organizacao_id: set_some(draft.organizacao_id.map(Some)),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        model.update(&self.db).await?;
        Ok(())
    }
}

#[async_trait]
impl PropertyStore for DbRepository {
    async fn find_property_by_external_id(
        &self,
        id_integracao: &str,
    ) -> Result<Option<imovel::Model>, DbErr> {
        imovel::Entity::find()
            .filter(imovel::Column::IdIntegracao.eq(id_integracao))
            .one(&self.db)
            .await
    }

    async fn property_code_exists(&self, codigo: &str) -> Result<bool, DbErr> {
        let count = imovel::Entity::find()
            .filter(imovel::Column::Codigo.eq(codigo))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn create_property(&self, property: &NewProperty) -> Result<imovel::Model, DbErr> {
        let now = Utc::now();
        let refs = property.refs;
        let model = imovel::ActiveModel {
            id_integracao: Set(Some(property.id_integracao.clone())),
            codigo: Set(property.codigo.clone()),
            titulo: Set(property.titulo.clone()),
            tipo: Set(property.tipo.clone()),
            objetivo: Set(property.objetivo.clone()),
            finalidade: Set(property.finalidade.clone()),
            descricao: Set(property.descricao.clone()),
            metragem: Set(property.metragem),
            num_quartos: Set(property.num_quartos),
            num_suites: Set(property.num_suites),
            num_banheiros: Set(property.num_banheiros),
            num_vagas: Set(property.num_vagas),
            num_andar: Set(property.num_andar),
            unidade: Set(property.unidade.clone()),
            condominio: Set(property.condominio),
            iptu: Set(0.0),
            inscricao_iptu: Set(String::new()),
            endereco_id: set_some(property.endereco_id.map(Some)),
            empreendimento_id: set_some(refs.empreendimento_id.map(Some)),
            preco_venda_id: set_some(refs.preco_venda_id.map(Some)),
            preco_aluguel_id: set_some(refs.preco_aluguel_id.map(Some)),
            corretor_principal_id: set_some(refs.corretor_principal_id.map(Some)),
            status: Set(ImovelStatus::EmEdicao),
            published: Set(false),
            closed: Set(false),
            visualizacoes: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model.insert(&self.db).await
    }

    async fn update_property(
        &self,
        id: i32,
        update: &PropertyUpdate,
    ) -> Result<imovel::Model, DbErr> {
        let refs = update.refs;
        let model = imovel::ActiveModel {
            id: Unchanged(id),
            titulo: set_some(update.titulo.clone()),
            tipo: set_some(update.tipo.clone()),
            objetivo: set_some(update.objetivo.clone()),
            finalidade: set_some(update.finalidade.clone()),
            descricao: set_some(update.descricao.clone()),
            metragem: set_some(update.metragem),
            num_quartos: set_some(update.num_quartos),
            num_suites: set_some(update.num_suites),
            num_banheiros: set_some(update.num_banheiros),
            num_vagas: set_some(update.num_vagas),
            num_andar: set_some(update.num_andar),
            unidade: set_some(update.unidade.clone()),
            condominio: set_some(update.condominio),
            empreendimento_id: set_some(refs.empreendimento_id.map(Some)),
            preco_venda_id: set_some(refs.preco_venda_id.map(Some)),
            preco_aluguel_id: set_some(refs.preco_aluguel_id.map(Some)),
            corretor_principal_id: set_some(refs.corretor_principal_id.map(Some)),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        model.update(&self.db).await
    }

    async fn set_property_address(&self, id: i32, endereco_id: i32) -> Result<(), DbErr> {
        let result = imovel::Entity::update_many()
            .col_expr(imovel::Column::EnderecoId, Expr::value(endereco_id))
            .col_expr(imovel::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(imovel::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!("imovel {id}")));
        }
        Ok(())
    }
}

#[async_trait]
impl AddressStore for DbRepository {
    async fn create_address(&self, address: &NewAddress) -> Result<i32, DbErr> {
        let model = endereco::ActiveModel {
            rua: Set(address.rua.clone()),
            numero: Set(address.numero),
            bairro: Set(address.bairro.clone()),
            cidade: Set(address.cidade.clone()),
            estado: Set(address.estado.clone()),
            cep: Set(address.cep.clone()),
            latitude: Set(address.latitude),
            longitude: Set(address.longitude),
            ..Default::default()
        };

        Ok(model.insert(&self.db).await?.id)
    }
}

#[async_trait]
impl AttachmentStore for DbRepository {
    async fn replace_property_attachments(
        &self,
        imovel_id: i32,
        attachments: &[NewAttachment],
    ) -> Result<usize, DbErr> {
        let txn = self.db.begin().await?;

        anexo::Entity::delete_many()
            .filter(anexo::Column::ImovelId.eq(imovel_id))
            .exec(&txn)
            .await?;

        let (owner_imovel, owner_empreendimento, owner_planta) =
            anexo::AnexoOwner::Imovel(imovel_id).columns();
        let now = Utc::now();

        // One insert per row keeps ids in input order.
        for attachment in attachments {
            let model = anexo::ActiveModel {
                nome: Set(attachment.nome.clone()),
                path: Set(String::new()),
                tamanho: Set(0),
                tipo: Set(attachment.tipo.clone()),
                url: Set(attachment.url.clone()),
                can_publish: Set(attachment.can_publish),
                image: Set(attachment.image),
                video: Set(attachment.video),
                is_external_url: Set(attachment.is_external_url),
                imovel_id: set_some(owner_imovel.map(Some)),
                empreendimento_id: set_some(owner_empreendimento.map(Some)),
                planta_id: set_some(owner_planta.map(Some)),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };
            model.insert(&txn).await?;
        }

        txn.commit().await?;
        Ok(attachments.len())
    }

    async fn property_attachments(&self, imovel_id: i32) -> Result<Vec<anexo::Model>, DbErr> {
        anexo::Entity::find()
            .filter(anexo::Column::ImovelId.eq(imovel_id))
            .order_by_asc(anexo::Column::Id)
            .all(&self.db)
            .await
    }
}
