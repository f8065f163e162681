use catalog::configuration::{get_configuration, Settings};
use std::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub settings: Settings,
    // removed with the app
    pub _dir: tempfile::TempDir,
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    configuration.storage.catalog_path = dir.path().join("data").join("products.json");
    configuration.storage.public_dir = dir.path().join("public");
    configuration.storage.image_url_base = address.clone();

    let server = catalog::startup::run(listener, configuration.clone())
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    TestApp {
        address,
        settings: configuration,
        _dir: dir,
    }
}

pub async fn spawn_app() -> TestApp {
    let configuration = get_configuration().expect("Failed to get configuration");
    spawn_app_with_configuration(configuration).await
}
