pub mod add;
pub mod delete;
pub mod get;
pub mod image;
pub mod update;

pub use add::*;
pub use delete::*;
pub use get::*;
pub use image::*;
pub use update::*;

#[cfg(test)]
pub(crate) mod tests {
    use crate::configuration::{CorsSettings, Settings, StorageSettings};
    use crate::db::CatalogStore;
    use crate::helpers::ImageStore;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};

    pub(crate) struct TestState {
        pub store: web::Data<CatalogStore>,
        pub images: web::Data<ImageStore>,
        pub settings: web::Data<Settings>,
        pub dir: tempfile::TempDir,
    }

    pub(crate) async fn test_state() -> TestState {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            app_port: 0,
            app_host: "127.0.0.1".to_string(),
            storage: StorageSettings {
                catalog_path: dir.path().join("data/products.json"),
                public_dir: dir.path().join("public"),
                images_route: "img/products".to_string(),
                image_url_base: "http://localhost:3001".to_string(),
            },
            cors: CorsSettings::default(),
        };
        let store = CatalogStore::new(settings.storage.catalog_path.clone());
        store.init().await.unwrap();

        TestState {
            store: web::Data::new(store),
            images: web::Data::new(ImageStore::new(settings.storage.images_dir())),
            settings: web::Data::new(settings),
            dir,
        }
    }

    macro_rules! init_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.store.clone())
                    .app_data($state.images.clone())
                    .app_data($state.settings.clone())
                    .service(crate::startup::products_scope()),
            )
            .await
        };
    }
    pub(crate) use init_app;

    fn pen() -> Value {
        json!({
            "name": "Pen",
            "description": "blue",
            "category": "office",
            "price": 2,
            "brand": "Acme"
        })
    }

    #[actix_web::test]
    async fn create_returns_created_with_id() {
        let state = test_state().await;
        let app = init_app!(state);

        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(pen())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let id = body["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri(&format!("/products/{}", id))
            .to_request();
        let product: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(product["name"], "Pen");
        assert_eq!(product["price"], 2);
        assert!(product["createdAt"].is_string());
        assert!(product.get("updatedAt").is_none());
    }

    #[actix_web::test]
    async fn create_with_missing_fields_lists_them() {
        let state = test_state().await;
        let app = init_app!(state);

        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(json!({ "name": "Pen" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        let fields: Vec<&str> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["description", "category", "price", "brand"]);
        assert!(state.store.load().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn field_values_are_stored_as_sent() {
        let state = test_state().await;
        let app = init_app!(state);

        let mut body = pen();
        body["price"] = json!("2");
        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;

        let req = test::TestRequest::get()
            .uri(&format!("/products/{}", created["id"].as_str().unwrap()))
            .to_request();
        let product: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(product["price"], "2");
    }

    #[actix_web::test]
    async fn null_fields_count_as_missing() {
        let state = test_state().await;
        let app = init_app!(state);

        let mut body = pen();
        body["brand"] = Value::Null;
        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"][0]["field"], "brand");
    }

    #[actix_web::test]
    async fn list_filters_by_category() {
        let state = test_state().await;
        let app = init_app!(state);

        for (name, category) in [("Pen", "office"), ("Rake", "garden")] {
            let mut body = pen();
            body["name"] = json!(name);
            body["category"] = json!(category);
            let req = test::TestRequest::post()
                .uri("/products")
                .set_json(body)
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get().uri("/products").to_request();
        let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.len(), 2);

        let req = test::TestRequest::get()
            .uri("/products?category=garden")
            .to_request();
        let garden: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(garden.len(), 1);
        assert_eq!(garden[0]["name"], "Rake");
    }

    #[actix_web::test]
    async fn update_merges_and_unknown_id_is_404() {
        let state = test_state().await;
        let app = init_app!(state);
        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(pen())
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().unwrap();

        let req = test::TestRequest::put()
            .uri(&format!("/products/{}", id))
            .set_json(json!({ "price": 10 }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["price"], 10);
        assert_eq!(updated["name"], "Pen");
        assert!(updated["updatedAt"].is_string());

        let req = test::TestRequest::put()
            .uri(&format!("/products/{}", id))
            .set_json(json!({ "imageUrl": 5 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"][0]["field"], "imageUrl");

        let req = test::TestRequest::put()
            .uri("/products/missing")
            .set_json(json!({ "price": 10 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn delete_then_get_is_404() {
        let state = test_state().await;
        let app = init_app!(state);
        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(pen())
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().unwrap();

        let req = test::TestRequest::delete()
            .uri(&format!("/products/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri(&format!("/products/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        // deleting again still succeeds
        let req = test::TestRequest::delete()
            .uri(&format!("/products/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn upload_image_sets_url() {
        let state = test_state().await;
        let app = init_app!(state);
        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(pen())
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().unwrap();

        let boundary = "XBOUNDARYX";
        let body = format!(
            concat!(
                "--{b}\r\n",
                "Content-Disposition: form-data; name=\"imageUrl\"; filename=\"pen.png\"\r\n",
                "Content-Type: image/png\r\n\r\n",
                "PNGDATA\r\n--{b}--\r\n",
            ),
            b = boundary
        );
        let req = test::TestRequest::post()
            .uri(&format!("/products/{}/uploadImageUrl", id))
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={}", boundary),
            ))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let product: Value = test::read_body_json(resp).await;
        assert_eq!(
            product["imageUrl"],
            "http://localhost:3001/img/products/pen.png"
        );

        let stored = std::fs::read(state.dir.path().join("public/img/products/pen.png")).unwrap();
        assert_eq!(stored, b"PNGDATA");
    }

    #[actix_web::test]
    async fn upload_without_image_field_is_400() {
        let state = test_state().await;
        let app = init_app!(state);

        let boundary = "XBOUNDARYX";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{b}--\r\n",
            b = boundary
        );
        let req = test::TestRequest::post()
            .uri("/products/any/uploadImageUrl")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={}", boundary),
            ))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
