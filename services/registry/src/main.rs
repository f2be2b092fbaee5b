//! Zoo registry HTTP service entry point.
//!
//! # Purpose
//! Wires configuration, storage, and the HTTP router, then serves the API
//! until Ctrl-C.
//!
//! # Notes
//! The `build_state` helper keeps wiring testable and minimizes main setup logic.
use std::future::Future;
use std::sync::Arc;
use zoo_registry::app::{AppState, build_router};
use zoo_registry::config::RegistryConfig;
use zoo_registry::observability;
use zoo_registry::store::RegistryStore;
use zoo_registry::store::memory::InMemoryStore;

const SERVICE_NAME: &str = "zoo-registry";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = RegistryConfig::from_env_or_yaml()?;
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: RegistryConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability(SERVICE_NAME);
    let state = build_state(&config);
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        config.metrics_bind,
    ));

    let app = build_router(state);
    let addr = config.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, seed = config.seed, "registry listening");
    tokio::pin!(shutdown);
    tokio::select! {
        result = axum::serve(listener, app.into_make_service()) => {
            result?;
        }
        _ = &mut shutdown => {
            tracing::info!("shutdown requested");
        }
    }

    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}

fn build_state(config: &RegistryConfig) -> AppState {
    let store = if config.seed {
        InMemoryStore::with_seed_data()
    } else {
        InMemoryStore::new()
    };
    tracing::info!(
        backend = store.backend_name(),
        durable = store.is_durable(),
        "registry store ready"
    );
    AppState {
        service_name: SERVICE_NAME.to_string(),
        store: Arc::new(store),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use zoo_registry::filter::AnimalFilter;

    fn local_config(seed: bool) -> RegistryConfig {
        RegistryConfig {
            bind_addr: "127.0.0.1:0".parse().expect("bind"),
            metrics_bind: "127.0.0.1:0".parse().expect("metrics"),
            seed,
        }
    }

    #[tokio::test]
    async fn build_state_honours_seed_flag() {
        let seeded = build_state(&local_config(true));
        let animals = seeded
            .store
            .list_animals(&AnimalFilter::default())
            .await
            .expect("animals");
        assert!(!animals.is_empty());

        let empty = build_state(&local_config(false));
        assert!(empty.store.list_cares().await.expect("cares").is_empty());
        assert_eq!(empty.service_name, SERVICE_NAME);
    }

    #[tokio::test]
    #[serial]
    async fn run_with_shutdown_starts_and_stops() {
        run_with_shutdown(local_config(true), async {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        })
        .await
        .expect("run should stop cleanly");
    }
}
