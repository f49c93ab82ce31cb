//! `zoooom serve` — wire the adapters, seed, and run the HTTP server.

use std::path::Path;

use tokio::net::TcpListener;
use tracing::{info, instrument};

use zoooom_adapters::{InMemoryDatabase, SeedLoader, template_interactor};
use zoooom_core::application::TemplateInteractor;

use crate::{
    cli::ServeArgs,
    config::AppConfig,
    error::{ServerError, ServerResult},
    routes::{self, AppState},
};

/// Bind the listener and serve until Ctrl-C or SIGTERM.
pub async fn execute(args: ServeArgs, config: AppConfig) -> ServerResult<()> {
    let db = InMemoryDatabase::new();
    let interactor = template_interactor(&db);

    if let Some(path) = args.seed.as_ref().or(config.storage.seed_file.as_ref()) {
        let seeded = seed(&interactor, path)?;
        info!(count = seeded, path = %path.display(), "Store seeded");
    }

    let app = routes::router(AppState::new(interactor, config.pagination));

    let addr = args.bind.unwrap_or(config.server.bind);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Push every entry of a seed file through the interactor.
#[instrument(skip(interactor))]
pub fn seed(interactor: &TemplateInteractor, path: &Path) -> ServerResult<usize> {
    let drafts = SeedLoader::new(path)
        .load()
        .map_err(|e| ServerError::Seed {
            message: e.to_string(),
            source: Some(Box::new(e)),
        })?;

    let count = drafts.len();
    for (template, tags) in drafts {
        interactor.add(template, tags)?;
    }
    Ok(count)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Ctrl-C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn seed_adds_every_entry() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"design_pattern_id": 1, "tags": ["retro"]}}, {{"design_pattern_id": 2, "tags": ["retro", "neon"]}}]"#
        )
        .unwrap();
        let db = InMemoryDatabase::new();

        let count = seed(&template_interactor(&db), file.path()).unwrap();

        assert_eq!(count, 2);
        assert_eq!(db.template_count().unwrap(), 2);
        assert_eq!(db.tag_count().unwrap(), 2);
    }

    #[test]
    fn unreadable_seed_is_seed_error() {
        let db = InMemoryDatabase::new();
        let err = seed(&template_interactor(&db), Path::new("/no/such/seed.json")).unwrap_err();

        assert!(matches!(err, ServerError::Seed { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[tokio::test]
    async fn bind_failure_is_reported() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap().to_string();
        let args = ServeArgs {
            bind: Some(addr.clone()),
            seed: None,
        };

        let err = execute(args, AppConfig::default()).await.unwrap_err();

        assert!(matches!(err, ServerError::Bind { addr: ref a, .. } if *a == addr));
        assert_eq!(err.exit_code(), 1);
    }
}
