use greeting_server::{ServerError, Settings, init_tracing, run};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = start().await {
        tracing::error!(error = %err, "greeting server failed");
        std::process::exit(1);
    }
}

async fn start() -> Result<(), ServerError> {
    let settings = Settings::from_env()?;
    run(settings).await
}
