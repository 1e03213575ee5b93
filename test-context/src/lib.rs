#![allow(clippy::expect_used)]

pub mod call;

use std::env;
use superheroes_common::{config, db};
use tempfile::TempDir;
use test_context::AsyncTestContext;
use tracing::instrument;

pub struct SuperheroesContext {
    pub db: db::Database,
    // keeps the database file alive until the test is done
    _tmp: Option<TempDir>,
}

impl AsyncTestContext for SuperheroesContext {
    #[instrument]
    async fn setup() -> SuperheroesContext {
        if env::var("EXTERNAL_TEST_DB").is_ok() {
            log::warn!("Using external database from 'DATABASE_URL' env var");
            let config = config::Database::from_env().expect("DB config from env");

            let db = db::Database::with_external_config(&config, db::CreationMode::Refresh)
                .await
                .expect("Configuring the database");

            return SuperheroesContext { db, _tmp: None };
        }

        let tmp = tempfile::tempdir().expect("Create a temporary directory");
        let config = config::Database {
            url: format!(
                "sqlite://{}?mode=rwc",
                tmp.path().join("superheroes.db").display()
            ),
            max_conn: 5,
            min_conn: 1,
            ..Default::default()
        };

        let db = db::Database::with_external_config(&config, db::CreationMode::Default)
            .await
            .expect("Create a database");

        SuperheroesContext {
            db,
            _tmp: Some(tmp),
        }
    }

    async fn teardown(self) {
        if let Err(err) = self.db.close().await {
            log::warn!("Failed to close database: {err}");
        }
    }
}
