use anyhow::Context;
use user_settings_sdk::models::{UserId, UserSettings};

use super::entity;

impl TryFrom<entity::Model> for UserSettings {
    type Error = anyhow::Error;

    fn try_from(model: entity::Model) -> Result<Self, Self::Error> {
        let user_id = UserId::parse(&model.user_id).context("stored user_id is empty")?;
        Ok(Self {
            user_id,
            currency: model.currency,
            timezone: model.timezone,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
