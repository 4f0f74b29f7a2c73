use anyhow::Context;
use aws_lambda_events::event::eventbridge::EventBridgeEvent;
use data_transfer_notifier::{config::Config, handler::handler};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_line_number(true)
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .with_current_span(true)
        .with_span_list(false)
        .flatten_event(true)
        .init();

    tracing::info!("initiating lambda");

    let config = Config::from_env().context("all necessary env vars should be available")?;

    tracing::trace!("initialized config");

    let db = PgPoolOptions::new()
        .min_connections(1)
        .max_connections(1) // we only ever need one connection per lambda
        .connect(&config.database_url())
        .await
        .context("could not connect to db")?;

    tracing::trace!("initialized db client");

    let func = service_fn(
        move |event: LambdaEvent<EventBridgeEvent<serde_json::Value>>| {
            let db = db.clone();
            async move { handler(db, event).await }
        },
    );

    run(func).await
}
