#![warn(clippy::all)]

use tracing_subscriber::fmt::format::FmtSpan;

mod router;
mod routes;
mod store;
mod types;

#[tokio::main]
async fn main() {
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "polls_web=info,warp=error".to_owned());

    tracing_subscriber::fmt()
        // Use the filter we built above to determine which traces to record.
        .with_env_filter(log_filter)
        // Record an event when each span closes; the closing events carry
        // the routes' durations.
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let store = store::Store::new();

    warp::serve(router::router(store))
        .run(([127, 0, 0, 1], 3030))
        .await;
}
