use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use pomodoro_cycles::modules::cycles::store::CyclesStore;
use pomodoro_cycles::shared::core::primitives::SystemClock;
use pomodoro_cycles::shared::infrastructure::snapshot_store::json_file::JsonFileSnapshotStore;
use pomodoro_cycles::shell::config::Config;
use pomodoro_cycles::shell::http::router;
use pomodoro_cycles::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let snapshots = Arc::new(JsonFileSnapshotStore::new(&config.data_dir));
    let store = CyclesStore::new(Arc::new(SystemClock), snapshots);
    let state = AppState::new(store, config.tick_period);
    state.resume().await;

    let app = router(state).layer(TraceLayer::new_for_http());

    tracing::info!("Pomodoro endpoint: http://{}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
