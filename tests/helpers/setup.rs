use chrono::{Duration, TimeZone, Utc};
use eventhub_api::{Application, Claims};
use eventhub_domain::Event;
use eventhub_infra::{Config, EventhubContext};
use eventhub_sdk::EventhubSDK;
use jsonwebtoken::{encode, EncodingKey, Header};

pub struct TestApp {
    pub config: Config,
    pub ctx: EventhubContext,
    pub address: String,
}

impl TestApp {
    /// Inserts an `Event` taking place `days` days into 2024
    pub async fn insert_event(&self, city: &str, title: &str, days: i64) -> Event {
        let event = Event::new(
            city.into(),
            title.into(),
            Utc.with_ymd_and_hms(2024, 1, 1, 20, 0, 0).unwrap() + Duration::days(days),
            "https://img.example.com/event.png".into(),
            "Opera House".into(),
        )
        .expect("To create event");
        self.ctx
            .repos
            .events
            .insert(&event)
            .await
            .expect("To insert event");
        event
    }

    pub fn identity_token(&self, user_id: &str) -> String {
        let claims = Claims {
            exp: (Utc::now() + Duration::hours(1)).timestamp() as usize,
            sub: user_id.into(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.identity_token_secret.as_bytes()),
        )
        .expect("To encode identity token")
    }

    /// SDK acting as the given user through the `/me` routes
    pub fn user_sdk(&self, user_id: &str) -> EventhubSDK {
        EventhubSDK::with_identity_token(self.address.clone(), self.identity_token(user_id))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.address, path)
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, EventhubSDK) {
    let config = Config {
        port: 0, // Random port
        database_url: None,
        admin_api_key: "test_admin_key".into(),
        identity_token_secret: "test_identity_secret".into(),
        store_timeout: std::time::Duration::from_secs(5),
        default_page_size: 20,
        max_page_size: 100,
    };
    let ctx = EventhubContext::create_inmemory(config.clone());

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = EventhubSDK::new(address.clone(), config.admin_api_key.clone());
    let app = TestApp {
        config,
        ctx,
        address,
    };
    (app, sdk)
}
