use std::time::Duration;

use sea_orm::sea_query::{Index, PostgresQueryBuilder};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tracing::{info, warn};

use crate::entity::{anexo, corretor_principal};

pub async fn init_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url.to_owned());

    // A batch run holds few connections for a short time.
    opt.max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8))
        .sqlx_logging(true);

    let db = Database::connect(opt).await?;
    db.get_schema_registry("imoveis::entity::*")
        .sync(&db)
        .await?;

    Ok(db)
}

/// Ensure non-unique lookup indexes exist.
///
/// Schema-sync only creates unique indexes, so the ones the import relies
/// on are created here.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    let indexes = [
        // DELETE FROM anexo WHERE imovel_id = ?
        Index::create()
            .if_not_exists()
            .name("idx_anexo_imovel")
            .table(anexo::Entity)
            .col(anexo::Column::ImovelId)
            .to_string(PostgresQueryBuilder),
        Index::create()
            .if_not_exists()
            .name("idx_corretor_organizacao")
            .table(corretor_principal::Entity)
            .col(corretor_principal::Column::OrganizacaoId)
            .to_string(PostgresQueryBuilder),
    ];

    for stmt in indexes {
        match db.execute_unprepared(&stmt).await {
            Ok(_) => info!(statement = %stmt, "Ensured index exists"),
            Err(e) => warn!(statement = %stmt, error = %e, "Failed to create index"),
        }
    }

    Ok(())
}
