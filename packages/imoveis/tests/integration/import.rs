use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use imoveis::entity::{
    anexo, corretor_principal, empreendimento, endereco, imovel, organizacao, preco_venda,
};
use imoveis::import::ImportError;

use crate::common::{StubProvider, broker_json, importer, property_json, test_repo};

async fn attachment_urls(db: &sea_orm::DatabaseConnection, imovel_id: i32) -> Vec<String> {
    anexo::Entity::find()
        .filter(anexo::Column::ImovelId.eq(imovel_id))
        .order_by_asc(anexo::Column::Id)
        .all(db)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.url)
        .collect()
}

#[tokio::test]
async fn rerun_over_unchanged_catalogue_is_idempotent() {
    let (repo, db) = test_repo().await;
    let stub = StubProvider::default();
    for id in 1..=3 {
        stub.put(property_json(id, &format!("AP{id}"), &["https://cdn/1.jpg"]));
    }
    let importer = importer(stub.spawn().await, repo);

    let first = importer.import_published().await.unwrap();
    let second = importer.import_published().await.unwrap();

    assert_eq!((first.created, first.updated, first.failed), (3, 0, 0));
    assert_eq!((second.created, second.updated, second.failed), (0, 3, 0));
    assert_eq!(imovel::Entity::find().count(&db).await.unwrap(), 3);
    assert_eq!(empreendimento::Entity::find().count(&db).await.unwrap(), 1);
    assert_eq!(preco_venda::Entity::find().count(&db).await.unwrap(), 3);
    assert_eq!(corretor_principal::Entity::find().count(&db).await.unwrap(), 3);
    assert_eq!(organizacao::Entity::find().count(&db).await.unwrap(), 1);
    // One fresh address per import of each property.
    assert_eq!(endereco::Entity::find().count(&db).await.unwrap(), 6);
}

#[tokio::test]
async fn imported_property_carries_resolved_references() {
    let (repo, db) = test_repo().await;
    let stub = StubProvider::default();
    stub.put(property_json(900, "AP900", &["https://cdn/a.jpg", "https://cdn/b.jpg"]));
    let importer = importer(stub.spawn().await, repo);

    importer.import_published().await.unwrap();

    let p = imovel::Entity::find()
        .filter(imovel::Column::IdIntegracao.eq("900"))
        .one(&db)
        .await
        .unwrap()
        .expect("imported property");
    assert_eq!(p.codigo, "AP900");
    assert_eq!(p.descricao, "Apartamento no centro - APARTAMENTO");
    assert!(p.empreendimento_id.is_some());
    assert!(p.preco_venda_id.is_some());
    assert!(p.endereco_id.is_some());
    assert_eq!(p.preco_aluguel_id, None);

    let broker = corretor_principal::Entity::find_by_id(p.corretor_principal_id.unwrap())
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(broker.id_integracao.as_deref(), Some("1900"));
    assert_eq!(broker.foto_id, None);
    assert_eq!(broker.idiomas.0, vec!["pt".to_string()]);

    let dev = empreendimento::Entity::find_by_id(p.empreendimento_id.unwrap())
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(dev.data_entrega.as_deref(), Some("2027-06"));
    assert_eq!(dev.etapa_lancamento, None);
    assert_eq!(dev.endereco_id, None);

    let names: Vec<String> = anexo::Entity::find()
        .filter(anexo::Column::ImovelId.eq(p.id))
        .order_by_asc(anexo::Column::Id)
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.nome)
        .collect();
    assert_eq!(names, vec!["Image 1", "Image 2"]);
}

#[tokio::test]
async fn changed_image_list_replaces_attachments() {
    let (repo, db) = test_repo().await;
    let stub = StubProvider::default();
    stub.put(property_json(10, "AP10", &["A", "B", "C"]));
    let importer = importer(stub.spawn().await, repo);
    importer.import_published().await.unwrap();

    stub.put(property_json(10, "AP10", &["B", "C", "D"]));
    importer.import_published().await.unwrap();

    let p = imovel::Entity::find().one(&db).await.unwrap().unwrap();
    assert_eq!(attachment_urls(&db, p.id).await, vec!["B", "C", "D"]);
    assert_eq!(anexo::Entity::find().count(&db).await.unwrap(), 3);
}

#[tokio::test]
async fn broken_item_is_counted_and_skipped() {
    let (repo, db) = test_repo().await;
    let stub = StubProvider::default();
    for id in 1..=5 {
        stub.put(property_json(id, &format!("AP{id}"), &[]));
    }
    stub.break_detail(3);
    let importer = importer(stub.spawn().await, repo);

    let outcome = importer.import_published().await.unwrap();

    assert_eq!(outcome.created, 4);
    assert_eq!(outcome.failed, 1);
    assert_eq!(outcome.failures[0].external_id, 3);
    assert!(imovel::Entity::find()
        .filter(imovel::Column::IdIntegracao.eq("3"))
        .one(&db)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn empty_catalogue_aborts_the_run() {
    let (repo, _db) = test_repo().await;
    let stub = StubProvider::default();
    let importer = importer(stub.spawn().await, repo);

    let err = importer.import_published().await.unwrap_err();

    assert!(matches!(err, ImportError::NoPublishedProperties));
}

#[tokio::test]
async fn brokers_of_same_organization_share_it() {
    let (repo, db) = test_repo().await;
    let stub = StubProvider::default();
    let mut first = property_json(900, "AP900", &[]);
    first["corretorPrincipal"] = broker_json(1, "ana@acme.test", "Acme");
    let mut second = property_json(901, "AP901", &[]);
    second["corretorPrincipal"] = broker_json(2, "bia@acme.test", "Acme");
    stub.put(first);
    stub.put(second);
    let importer = importer(stub.spawn().await, repo).with_concurrency(2);

    let outcome = importer.import_published().await.unwrap();

    assert_eq!(outcome.created, 2);
    let orgs = organizacao::Entity::find().all(&db).await.unwrap();
    assert_eq!(orgs.len(), 1);
    assert_eq!(orgs[0].nome, "Acme");
    let linked = corretor_principal::Entity::find()
        .filter(corretor_principal::Column::OrganizacaoId.eq(orgs[0].id))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(linked, 2);
    let developments = empreendimento::Entity::find().all(&db).await.unwrap();
    assert_eq!(developments.len(), 1);
    let properties = imovel::Entity::find().all(&db).await.unwrap();
    assert!(properties
        .iter()
        .all(|p| p.empreendimento_id == Some(developments[0].id)));
}
