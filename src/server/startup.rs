use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::user::{RegisterUserParams, Role},
    service::user::UserService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by a table in the application database.
///
/// Sessions expire after seven days of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::DbErr)` - Failed to migrate the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Ensures the club has an administrator.
///
/// When no admin exists and `ADMIN_*` credentials are configured, the admin is
/// created. Without credentials a warning is logged and startup continues.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let Some(bootstrap) = &config.admin_bootstrap else {
        tracing::warn!(
            "No admin user exists; set ADMIN_FIRST_NAME, ADMIN_LAST_NAME and ADMIN_PASSWORD to create one"
        );
        return Ok(());
    };

    let admin = UserService::new(db)
        .create_with_role(
            RegisterUserParams {
                first_name: bootstrap.first_name.clone(),
                last_name: bootstrap.last_name.clone(),
                password: bootstrap.password.clone(),
                role: Role::Admin.as_str().to_string(),
            },
            Role::Admin,
        )
        .await?;

    tracing::info!("Created initial admin user {} (id {})", admin.full_name(), admin.id);

    Ok(())
}
