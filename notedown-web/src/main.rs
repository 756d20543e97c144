use notedown_web::configuration::CONFIGURATION;
use notedown_web::startup::run;
use notedown_web::telemetry::{get_subscriber, init_tracing};
use std::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber =
        get_subscriber(&CONFIGURATION).with(tracing_subscriber::fmt::Layer::default());
    init_tracing(subscriber);
    let listener = TcpListener::bind(format!("{}:{}", CONFIGURATION.host, CONFIGURATION.port))?;
    let note_store = CONFIGURATION.get_note_store().await;
    run(listener, note_store)?.await
}
