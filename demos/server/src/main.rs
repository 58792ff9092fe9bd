use flightmock::{router, run};

#[tokio::main]
async fn main() -> flightmock::Result<()> {
    tracing_subscriber::fmt::init();

    run(router()).await
}
