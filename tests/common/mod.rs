use mergington_activities::app::server;
use mergington_activities::InMemoryRegistry;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn activities(&self) -> serde_json::Value {
        self.client
            .get(self.url("/activities"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }

    pub async fn participants(&self, activity: &str) -> Vec<String> {
        let activities = self.activities().await;
        serde_json::from_value(activities[activity]["participants"].clone()).unwrap()
    }
}

/// Starts a server with a fresh default registry on an ephemeral port.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(InMemoryRegistry::default()).await
}

pub async fn spawn_app_with(registry: InMemoryRegistry) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        server::serve(
            listener,
            Arc::new(registry),
            "./static",
            std::future::pending(),
        )
        .await
        .unwrap();
    });

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        base_url: format!("http://{}", addr),
        client,
    }
}
