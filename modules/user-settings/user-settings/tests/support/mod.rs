#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

use sea_orm::{Database, DatabaseConnection, EntityTrait, PaginatorTrait};
use tempfile::TempDir;
use user_settings::{SecurityContext, UserId, UserSettingsConfig, UserSettingsModule};

/// File-backed `SQLite` database that lives as long as the returned guard.
///
/// A file is used instead of `:memory:` so every pooled connection sees the
/// same database.
pub struct TestDb {
    pub conn: DatabaseConnection,
    _dir: TempDir,
}

pub async fn sqlite_db() -> TestDb {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("user_settings.db");
    let url = format!("sqlite://{}?mode=rwc", path.display());
    let conn = Database::connect(&url).await.expect("connect sqlite");
    TestDb { conn, _dir: dir }
}

pub async fn module() -> (UserSettingsModule, TestDb) {
    let db = sqlite_db().await;
    let module = UserSettingsModule::init(db.conn.clone(), &UserSettingsConfig::default())
        .await
        .expect("module init");
    (module, db)
}

pub async fn row_count(db: &TestDb) -> u64 {
    user_settings::infra::storage::entity::Entity::find()
        .count(&db.conn)
        .await
        .expect("count rows")
}

pub fn ctx(user: &str) -> SecurityContext {
    SecurityContext::for_subject(UserId::parse(user).unwrap())
}
