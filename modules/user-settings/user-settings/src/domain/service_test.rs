#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::domain::catalog::{
        Catalogs, CurrencyCatalog, CurrencyEntry, TimezoneCatalog, TimezoneEntry,
    };
    use crate::domain::error::DomainError;
    use crate::domain::events::SettingsEvent;
    use crate::domain::ports::EventPublisher;
    use crate::domain::service::{Service, ServiceConfig};
    use crate::domain::validation::{CurrencyCode, TimezoneLabel};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use time::OffsetDateTime;
    use user_settings_sdk::{SecurityContext, UserId, UserSettings};

    const KOLKATA: &str = "Asia/Kolkata (GMT+05:30)";
    const BERLIN: &str = "Europe/Berlin (GMT+01:00)";

    // In-memory repository with the same create-if-absent contract as the SQL one
    #[derive(Default)]
    struct MockRepository {
        rows: Mutex<HashMap<UserId, UserSettings>>,
        fail: bool,
    }

    impl MockRepository {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn seed(&self, settings: UserSettings) {
            self.rows
                .lock()
                .unwrap()
                .insert(settings.user_id.clone(), settings);
        }

        fn row(&self, user_id: &UserId) -> Option<UserSettings> {
            self.rows.lock().unwrap().get(user_id).cloned()
        }

        fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }

        fn check(&self) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("connection refused");
            }
            Ok(())
        }
    }

    #[async_trait]
    impl repo::SettingsRepository for MockRepository {
        async fn find_by_user(&self, user_id: &UserId) -> anyhow::Result<Option<UserSettings>> {
            self.check()?;
            Ok(self.row(user_id))
        }

        async fn insert_if_absent(
            &self,
            user_id: &UserId,
            currency: &CurrencyCode,
            timezone: &TimezoneLabel,
        ) -> anyhow::Result<bool> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            if rows.contains_key(user_id) {
                return Ok(false);
            }
            let now = OffsetDateTime::now_utc();
            rows.insert(
                user_id.clone(),
                UserSettings {
                    user_id: user_id.clone(),
                    currency: currency.as_str().to_owned(),
                    timezone: timezone.as_str().to_owned(),
                    created_at: now,
                    updated_at: now,
                },
            );
            Ok(true)
        }

        async fn update_currency(
            &self,
            user_id: &UserId,
            currency: &CurrencyCode,
        ) -> anyhow::Result<Option<UserSettings>> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.get_mut(user_id).map(|row| {
                row.currency = currency.as_str().to_owned();
                row.updated_at = OffsetDateTime::now_utc();
                row.clone()
            }))
        }

        async fn update_timezone(
            &self,
            user_id: &UserId,
            timezone: &TimezoneLabel,
        ) -> anyhow::Result<Option<UserSettings>> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.get_mut(user_id).map(|row| {
                row.timezone = timezone.as_str().to_owned();
                row.updated_at = OffsetDateTime::now_utc();
                row.clone()
            }))
        }
    }

    // Simulates losing the create race: the first read misses, and by the time
    // this caller inserts, another caller's record is already there.
    struct RacingRepository {
        winner: UserSettings,
        find_calls: AtomicUsize,
        inserted: Mutex<bool>,
    }

    #[async_trait]
    impl repo::SettingsRepository for RacingRepository {
        async fn find_by_user(&self, _user_id: &UserId) -> anyhow::Result<Option<UserSettings>> {
            let call = self.find_calls.fetch_add(1, Ordering::SeqCst);
            if call == 0 {
                return Ok(None);
            }
            Ok(Some(self.winner.clone()))
        }

        async fn insert_if_absent(
            &self,
            _user_id: &UserId,
            _currency: &CurrencyCode,
            _timezone: &TimezoneLabel,
        ) -> anyhow::Result<bool> {
            *self.inserted.lock().unwrap() = true;
            Ok(false)
        }

        async fn update_currency(
            &self,
            _user_id: &UserId,
            _currency: &CurrencyCode,
        ) -> anyhow::Result<Option<UserSettings>> {
            Ok(None)
        }

        async fn update_timezone(
            &self,
            _user_id: &UserId,
            _timezone: &TimezoneLabel,
        ) -> anyhow::Result<Option<UserSettings>> {
            Ok(None)
        }
    }

    #[derive(Default)]
    struct RecordingPublisher {
        events: Mutex<Vec<SettingsEvent>>,
    }

    impl RecordingPublisher {
        fn events(&self) -> Vec<SettingsEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl EventPublisher<SettingsEvent> for RecordingPublisher {
        fn publish(&self, event: &SettingsEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    fn test_catalogs() -> Arc<Catalogs> {
        Arc::new(Catalogs::new(
            CurrencyCatalog::new(vec![
                CurrencyEntry::new("USD", "$ Dollar", "en-US"),
                CurrencyEntry::new("EUR", "Euro", "de-DE"),
                CurrencyEntry::new("INR", "Rupee", "en-IN"),
            ]),
            TimezoneCatalog::new(vec![
                TimezoneEntry::new(KOLKATA, "Asia/Kolkata", "(GMT+05:30) Kolkata", "+05:30"),
                TimezoneEntry::new(BERLIN, "Europe/Berlin", "(GMT+01:00) Berlin", "+01:00"),
            ]),
        ))
    }

    fn build_service(
        repo: Arc<dyn repo::SettingsRepository>,
    ) -> (Service, Arc<RecordingPublisher>) {
        let catalogs = test_catalogs();
        let publisher = Arc::new(RecordingPublisher::default());
        let config = ServiceConfig::new(&catalogs, "INR", KOLKATA).unwrap();
        let service = Service::new(repo, publisher.clone(), catalogs, config);
        (service, publisher)
    }

    fn ctx(user: &str) -> SecurityContext {
        SecurityContext::for_subject(UserId::parse(user).unwrap())
    }

    fn user(id: &str) -> UserId {
        UserId::parse(id).unwrap()
    }

    #[tokio::test]
    async fn test_first_read_provisions_defaults() {
        let repo = Arc::new(MockRepository::default());
        let (service, publisher) = build_service(repo.clone());

        let settings = service.get_or_create_settings(&ctx("u1")).await.unwrap();

        assert_eq!(settings.user_id.as_str(), "u1");
        assert_eq!(settings.currency, "INR");
        assert_eq!(settings.timezone, KOLKATA);
        assert_eq!(repo.len(), 1);

        let events = publisher.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind(), "provisioned");
        assert_eq!(events[0].user_id().as_str(), "u1");
    }

    #[tokio::test]
    async fn test_repeated_reads_are_idempotent() {
        let repo = Arc::new(MockRepository::default());
        let (service, publisher) = build_service(repo.clone());
        let ctx = ctx("u1");

        let first = service.get_or_create_settings(&ctx).await.unwrap();
        let second = service.get_or_create_settings(&ctx).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(repo.len(), 1);
        // Only the creating read signals
        assert_eq!(publisher.events().len(), 1);
    }

    #[tokio::test]
    async fn test_read_returns_existing_record_unchanged() {
        let repo = Arc::new(MockRepository::default());
        let now = OffsetDateTime::now_utc();
        repo.seed(UserSettings {
            user_id: user("u1"),
            currency: "USD".to_owned(),
            timezone: BERLIN.to_owned(),
            created_at: now,
            updated_at: now,
        });
        let (service, publisher) = build_service(repo);

        let settings = service.get_or_create_settings(&ctx("u1")).await.unwrap();

        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.timezone, BERLIN);
        assert!(publisher.events().is_empty());
    }

    #[tokio::test]
    async fn test_lost_create_race_resolves_by_rereading() {
        let now = OffsetDateTime::now_utc();
        let winner = UserSettings {
            user_id: user("u1"),
            currency: "EUR".to_owned(),
            timezone: KOLKATA.to_owned(),
            created_at: now,
            updated_at: now,
        };
        let repo = Arc::new(RacingRepository {
            winner: winner.clone(),
            find_calls: AtomicUsize::new(0),
            inserted: Mutex::new(false),
        });
        let (service, publisher) = build_service(repo.clone());

        let settings = service.get_or_create_settings(&ctx("u1")).await.unwrap();

        assert!(*repo.inserted.lock().unwrap());
        assert_eq!(settings, winner);
        // The winner announces the record, not the loser
        assert!(publisher.events().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_first_reads_create_one_record() {
        let repo = Arc::new(MockRepository::default());
        let (service, publisher) = build_service(repo.clone());
        let service = Arc::new(service);

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.get_or_create_settings(&ctx("u1")).await })
            })
            .collect();

        for handle in handles {
            let settings = handle.await.unwrap().unwrap();
            assert_eq!(settings.currency, "INR");
        }

        assert_eq!(repo.len(), 1);
        assert_eq!(publisher.events().len(), 1);
    }

    #[tokio::test]
    async fn test_anonymous_caller_is_rejected_everywhere() {
        let repo = Arc::new(MockRepository::default());
        let (service, _) = build_service(repo.clone());
        let anon = SecurityContext::anonymous();

        assert!(matches!(
            service.get_or_create_settings(&anon).await,
            Err(DomainError::Unauthenticated)
        ));
        assert!(matches!(
            service.update_currency(&anon, "USD").await,
            Err(DomainError::Unauthenticated)
        ));
        assert!(matches!(
            service.update_timezone(&anon, BERLIN).await,
            Err(DomainError::Unauthenticated)
        ));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_update_currency_success() {
        let repo = Arc::new(MockRepository::default());
        let (service, publisher) = build_service(repo.clone());
        let ctx = ctx("u1");
        service.get_or_create_settings(&ctx).await.unwrap();

        let updated = service.update_currency(&ctx, "USD").await.unwrap();
        assert_eq!(updated.currency, "USD");
        assert_eq!(updated.timezone, KOLKATA);

        let reread = service.get_or_create_settings(&ctx).await.unwrap();
        assert_eq!(reread.currency, "USD");

        let events = publisher.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[1],
            SettingsEvent::CurrencyChanged { currency, .. } if currency == "USD"
        ));
    }

    #[tokio::test]
    async fn test_update_currency_rejects_unknown_code_without_mutation() {
        let repo = Arc::new(MockRepository::default());
        let (service, publisher) = build_service(repo.clone());
        let ctx = ctx("u1");
        service.get_or_create_settings(&ctx).await.unwrap();
        service.update_currency(&ctx, "USD").await.unwrap();

        let err = service.update_currency(&ctx, "ZZZ").await.unwrap_err();
        match err {
            DomainError::Validation { field, value, .. } => {
                assert_eq!(field, "currency");
                assert_eq!(value, "ZZZ");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert_eq!(repo.row(&user("u1")).unwrap().currency, "USD");
        assert_eq!(publisher.events().len(), 2);
    }

    #[tokio::test]
    async fn test_every_catalog_currency_is_accepted() {
        let repo = Arc::new(MockRepository::default());
        let (service, _) = build_service(repo);
        let ctx = ctx("u1");
        service.get_or_create_settings(&ctx).await.unwrap();

        let codes: Vec<String> = service
            .catalogs()
            .currencies
            .entries()
            .iter()
            .map(|c| c.value.clone())
            .collect();
        for code in codes {
            service.update_currency(&ctx, &code).await.unwrap();
            let reread = service.get_or_create_settings(&ctx).await.unwrap();
            assert_eq!(reread.currency, code);
        }
    }

    #[tokio::test]
    async fn test_update_timezone_success() {
        let repo = Arc::new(MockRepository::default());
        let (service, _) = build_service(repo);
        let ctx = ctx("u1");
        service.get_or_create_settings(&ctx).await.unwrap();

        let updated = service.update_timezone(&ctx, BERLIN).await.unwrap();
        assert_eq!(updated.timezone, BERLIN);
        assert_eq!(updated.currency, "INR");
    }

    #[tokio::test]
    async fn test_update_timezone_rejects_tz_code() {
        let repo = Arc::new(MockRepository::default());
        let (service, _) = build_service(repo.clone());
        let ctx = ctx("u1");
        service.get_or_create_settings(&ctx).await.unwrap();

        let result = service.update_timezone(&ctx, "Europe/Berlin").await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert_eq!(repo.row(&user("u1")).unwrap().timezone, KOLKATA);
    }

    #[tokio::test]
    async fn test_updates_before_provisioning_fail_with_not_found() {
        let repo = Arc::new(MockRepository::default());
        let (service, publisher) = build_service(repo.clone());
        let ctx = ctx("u1");

        assert!(matches!(
            service.update_timezone(&ctx, BERLIN).await,
            Err(DomainError::NotFound)
        ));
        assert!(matches!(
            service.update_currency(&ctx, "USD").await,
            Err(DomainError::NotFound)
        ));
        // No silent auto-provisioning
        assert_eq!(repo.len(), 0);
        assert!(publisher.events().is_empty());
    }

    #[tokio::test]
    async fn test_validation_runs_before_store_access() {
        let repo = Arc::new(MockRepository::failing());
        let (service, _) = build_service(repo);

        let result = service.update_currency(&ctx("u1"), "ZZZ").await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_store_failures_propagate() {
        let repo = Arc::new(MockRepository::failing());
        let (service, _) = build_service(repo);

        let result = service.get_or_create_settings(&ctx("u1")).await;
        assert!(matches!(result, Err(DomainError::StoreUnavailable(_))));

        let result = service.update_currency(&ctx("u1"), "USD").await;
        assert!(matches!(result, Err(DomainError::StoreUnavailable(_))));
    }

    #[test]
    fn test_config_rejects_defaults_outside_catalog() {
        let catalogs = test_catalogs();
        assert!(ServiceConfig::new(&catalogs, "XYZ", KOLKATA).is_err());
        assert!(ServiceConfig::new(&catalogs, "INR", "Asia/Kolkata").is_err());
        assert!(ServiceConfig::new(&catalogs, "EUR", BERLIN).is_ok());
    }
}
