use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use imoveis::entity::imovel::ImovelStatus;
use imoveis::entity::{empreendimento, endereco, imovel, organizacao, preco_venda};
use imoveis::import::upsert::{Upserted, upsert};
use imoveis::repository::{
    AddressStore, AttachmentStore, DevelopmentDraft, NewAddress, NewAttachment, NewProperty,
    OrganizationDraft, PackageDraft, PropertyRefs, PropertyStore, PropertyUpdate, SalePriceDraft,
    UpsertStore,
};

use crate::common::test_repo;

fn sale_price(preco: f64) -> SalePriceDraft {
    SalePriceDraft {
        preco,
        aceita_financiamento_bancario: true,
        ativo: true,
        pacote: Some(PackageDraft {
            titulo: "Premium".into(),
            descricao: "Destaque na home".into(),
            exclusivo: true,
            em_destaque: false,
        }),
        ..Default::default()
    }
}

fn new_property(key: &str, codigo: &str, refs: PropertyRefs) -> NewProperty {
    NewProperty {
        id_integracao: key.into(),
        codigo: codigo.into(),
        titulo: "Casa com quintal".into(),
        tipo: "CASA".into(),
        objetivo: "VENDER".into(),
        finalidade: "RESIDENCIAL".into(),
        descricao: "Casa com quintal - CASA".into(),
        metragem: 120.0,
        num_quartos: 3,
        num_suites: 1,
        num_banheiros: 2,
        num_vagas: 2,
        num_andar: 0,
        unidade: String::new(),
        condominio: 0.0,
        endereco_id: None,
        refs,
    }
}

fn attachment(url: &str) -> NewAttachment {
    NewAttachment {
        nome: url.into(),
        url: url.into(),
        tipo: "image".into(),
        image: true,
        video: false,
        is_external_url: true,
        can_publish: true,
    }
}

mod correlation {
    use super::*;

    #[tokio::test]
    async fn same_external_id_updates_one_row() {
        let (repo, db) = test_repo().await;

        let first = upsert(&repo, "501", &sale_price(300_000.0)).await.unwrap();
        let second = upsert(&repo, "501", &sale_price(320_000.0)).await.unwrap();

        assert!(first.is_created());
        assert_eq!(second, Upserted::Updated(first.id()));
        let rows = preco_venda::Entity::find().all(&db).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].preco, 320_000.0);
        assert_eq!(rows[0].id_integracao.as_deref(), Some("501"));
        assert_eq!(rows[0].pacote_titulo.as_deref(), Some("Premium"));
        assert!(rows[0].pacote_exclusivo);
    }

    #[tokio::test]
    async fn duplicate_organization_insert_reports_conflict() {
        let (repo, db) = test_repo().await;
        let draft = OrganizationDraft {
            perfil: "IMOBILIARIA".into(),
        };

        let first = UpsertStore::<OrganizationDraft>::insert(&repo, "Acme", &draft)
            .await
            .unwrap();
        let second = UpsertStore::<OrganizationDraft>::insert(&repo, "Acme", &draft)
            .await
            .unwrap();

        assert!(first.is_some());
        assert_eq!(second, None);
        assert_eq!(organizacao::Entity::find().count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn racing_development_upserts_share_one_row() {
        let (repo, db) = test_repo().await;
        let draft = DevelopmentDraft {
            titulo: "Residencial Aurora".into(),
            tipo: "VERTICAL".into(),
            ..Default::default()
        };

        let (a, b) = tokio::join!(upsert(&repo, "40", &draft), upsert(&repo, "40", &draft));
        let (a, b) = (a.unwrap(), b.unwrap());

        assert_eq!(a.id(), b.id());
        assert_eq!(empreendimento::Entity::find().count(&db).await.unwrap(), 1);
    }
}

mod properties {
    use super::*;

    #[tokio::test]
    async fn unresolved_references_are_stored_as_null() {
        let (repo, _db) = test_repo().await;

        let created = repo
            .create_property(&new_property("601", "CA601", PropertyRefs::default()))
            .await
            .unwrap();

        assert_eq!(created.empreendimento_id, None);
        assert_eq!(created.preco_venda_id, None);
        assert_eq!(created.corretor_principal_id, None);
        assert_eq!(created.endereco_id, None);
        assert_eq!(created.status, ImovelStatus::EmEdicao);
        assert!(!created.published);
        assert_eq!(created.visualizacoes, 0);
    }

    #[tokio::test]
    async fn partial_update_keeps_untouched_columns() {
        let (repo, _db) = test_repo().await;
        let price = upsert(&repo, "602", &sale_price(1.0)).await.unwrap().id();
        let created = repo
            .create_property(&new_property(
                "602",
                "CA602",
                PropertyRefs {
                    preco_venda_id: Some(price),
                    ..Default::default()
                },
            ))
            .await
            .unwrap();

        let updated = repo
            .update_property(
                created.id,
                &PropertyUpdate {
                    titulo: Some("Casa reformada".into()),
                    num_andar: Some(1),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.titulo, "Casa reformada");
        assert_eq!(updated.num_andar, 1);
        assert_eq!(updated.tipo, "CASA");
        assert_eq!(updated.codigo, "CA602");
        assert_eq!(updated.preco_venda_id, Some(price));
        assert_eq!(updated.id_integracao.as_deref(), Some("602"));
    }

    #[tokio::test]
    async fn readdressing_leaves_previous_address_row() {
        let (repo, db) = test_repo().await;
        let created = repo
            .create_property(&new_property("603", "CA603", PropertyRefs::default()))
            .await
            .unwrap();
        let address = NewAddress {
            rua: "Rua das Flores".into(),
            numero: 12,
            ..Default::default()
        };

        let first = repo.create_address(&address).await.unwrap();
        repo.set_property_address(created.id, first).await.unwrap();
        let second = repo.create_address(&address).await.unwrap();
        repo.set_property_address(created.id, second).await.unwrap();

        let stored = imovel::Entity::find_by_id(created.id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.endereco_id, Some(second));
        assert_eq!(endereco::Entity::find().count(&db).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn readdressing_missing_property_fails() {
        let (repo, _db) = test_repo().await;
        let address = repo.create_address(&NewAddress::default()).await.unwrap();

        assert!(repo.set_property_address(9999, address).await.is_err());
    }

    #[tokio::test]
    async fn codigo_lookup_sees_created_property() {
        let (repo, _db) = test_repo().await;
        repo.create_property(&new_property("604", "CA604", PropertyRefs::default()))
            .await
            .unwrap();

        assert!(repo.property_code_exists("CA604").await.unwrap());
        assert!(!repo.property_code_exists("CA000").await.unwrap());
        assert!(repo.find_property_by_external_id("604").await.unwrap().is_some());
    }
}

mod attachments {
    use super::*;
    use imoveis::entity::anexo::{self, AnexoOwner};

    #[tokio::test]
    async fn replacement_deletes_old_rows_and_keeps_order() {
        let (repo, db) = test_repo().await;
        let p = repo
            .create_property(&new_property("701", "CA701", PropertyRefs::default()))
            .await
            .unwrap();
        let other = repo
            .create_property(&new_property("702", "CA702", PropertyRefs::default()))
            .await
            .unwrap();
        repo.replace_property_attachments(other.id, &[attachment("keep")])
            .await
            .unwrap();

        repo.replace_property_attachments(p.id, &[attachment("A"), attachment("B"), attachment("C")])
            .await
            .unwrap();
        let before: Vec<i32> = repo
            .property_attachments(p.id)
            .await
            .unwrap()
            .iter()
            .map(|a| a.id)
            .collect();
        let count = repo
            .replace_property_attachments(p.id, &[attachment("B"), attachment("C"), attachment("D")])
            .await
            .unwrap();

        assert_eq!(count, 3);
        let after = repo.property_attachments(p.id).await.unwrap();
        let urls: Vec<&str> = after.iter().map(|a| a.url.as_str()).collect();
        assert_eq!(urls, vec!["B", "C", "D"]);
        assert!(after.iter().all(|a| a.owner() == Some(AnexoOwner::Imovel(p.id))));
        assert!(after.iter().all(|a| !before.contains(&a.id)));
        let gone = anexo::Entity::find()
            .filter(anexo::Column::Id.is_in(before))
            .count(&db)
            .await
            .unwrap();
        assert_eq!(gone, 0);
        assert_eq!(repo.property_attachments(other.id).await.unwrap().len(), 1);
    }
}

mod schema {
    use crate::common::test_db;

    #[tokio::test]
    async fn ensure_indexes_is_idempotent() {
        let db = test_db().await;

        imoveis::database::ensure_indexes(&db).await.unwrap();
        imoveis::database::ensure_indexes(&db).await.unwrap();
    }
}
