use async_trait::async_trait;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr,
};
use time::OffsetDateTime;
use tracing::{debug, instrument};
use user_settings_sdk::models::{UserId, UserSettings};

use crate::domain::repo::SettingsRepository;
use crate::domain::validation::{CurrencyCode, TimezoneLabel};

use super::entity::{self, Entity as SettingsEntity};

pub struct SeaOrmSettingsRepository {
    db: DatabaseConnection,
}

impl SeaOrmSettingsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn update_column(
        &self,
        user_id: &UserId,
        column: entity::Column,
        value: &str,
    ) -> anyhow::Result<Option<UserSettings>> {
        let result = SettingsEntity::update_many()
            .col_expr(column, Expr::value(value))
            .col_expr(
                entity::Column::UpdatedAt,
                Expr::value(OffsetDateTime::now_utc()),
            )
            .filter(entity::Column::UserId.eq(user_id.as_str()))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            debug!(user_id = %user_id, "no settings record to update");
            return Ok(None);
        }

        self.find_by_user(user_id).await
    }
}

#[async_trait]
impl SettingsRepository for SeaOrmSettingsRepository {
    #[instrument(skip_all, fields(user_id = %user_id))]
    async fn find_by_user(&self, user_id: &UserId) -> anyhow::Result<Option<UserSettings>> {
        SettingsEntity::find_by_id(user_id.as_str().to_owned())
            .one(&self.db)
            .await?
            .map(UserSettings::try_from)
            .transpose()
    }

    #[instrument(skip_all, fields(user_id = %user_id))]
    async fn insert_if_absent(
        &self,
        user_id: &UserId,
        currency: &CurrencyCode,
        timezone: &TimezoneLabel,
    ) -> anyhow::Result<bool> {
        let now = OffsetDateTime::now_utc();
        let active_model = entity::ActiveModel {
            user_id: ActiveValue::Set(user_id.as_str().to_owned()),
            currency: ActiveValue::Set(currency.as_str().to_owned()),
            timezone: ActiveValue::Set(timezone.as_str().to_owned()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        let result = SettingsEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(entity::Column::UserId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await;

        match result {
            Ok(rows) => {
                debug!(created = rows > 0, "provisioning insert finished");
                Ok(rows > 0)
            }
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                debug!("settings record already created by a concurrent caller");
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }

    #[instrument(skip_all, fields(user_id = %user_id, currency = %currency))]
    async fn update_currency(
        &self,
        user_id: &UserId,
        currency: &CurrencyCode,
    ) -> anyhow::Result<Option<UserSettings>> {
        self.update_column(user_id, entity::Column::Currency, currency.as_str())
            .await
    }

    #[instrument(skip_all, fields(user_id = %user_id, timezone = %timezone))]
    async fn update_timezone(
        &self,
        user_id: &UserId,
        timezone: &TimezoneLabel,
    ) -> anyhow::Result<Option<UserSettings>> {
        self.update_column(user_id, entity::Column::Timezone, timezone.as_str())
            .await
    }
}
