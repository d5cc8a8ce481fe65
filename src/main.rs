mod telemetry;

use eventhub_api::Application;
use eventhub_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("eventhub_server".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context().await.map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Unable to setup the context: {}", e),
        )
    })?;

    let app = Application::new(context).await?;
    app.start().await
}
