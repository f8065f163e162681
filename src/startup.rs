use crate::configuration::{CorsSettings, Settings};
use crate::db::CatalogStore;
use crate::helpers::{ImageStore, JsonResponse};
use crate::routes;
use actix_cors::Cors;
use actix_files::Files;
use actix_web::dev::{fn_service, Server, ServiceRequest, ServiceResponse};
use actix_web::{error, guard, web, App, HttpServer, Scope};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

/// Product and review routes, mounted under `/products`.
pub fn products_scope() -> Scope {
    web::scope("/products")
        .service(routes::product::add_handler)
        .service(routes::product::list_handler)
        .service(routes::product::item_handler)
        .service(routes::product::update_handler)
        .service(routes::product::delete_handler)
        .service(routes::product::upload_image_handler)
        .service(routes::review::list_handler)
        .service(routes::review::add_handler)
        .service(routes::review::update_handler)
        .service(routes::review::delete_handler)
}

fn cors(settings: &CorsSettings) -> Cors {
    if settings.allowed_origins.is_empty() {
        return Cors::permissive();
    }

    settings
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
}

pub async fn run(listener: TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    let store = CatalogStore::new(settings.storage.catalog_path.clone());
    store
        .init()
        .await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let store = web::Data::new(store);

    let images_dir = settings.storage.images_dir();
    std::fs::create_dir_all(&images_dir)?;
    let images = web::Data::new(ImageStore::new(images_dir));

    for (method, path) in routes::ENDPOINTS {
        tracing::info!(method, path, "Registered endpoint");
    }

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match &err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "Invalid request body at line {} column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            _ => err.to_string(),
        };
        JsonResponse::<()>::build().bad_request(&msg)
    });

    let public_dir = settings.storage.public_dir.clone();
    let settings = web::Data::new(settings);

    let server = HttpServer::new(move || {
        // other methods fall through to the JSON 404 instead of a plain-text 405
        let static_files = Files::new("/", &public_dir)
            .guard(guard::Any(guard::Get()).or(guard::Head()))
            .default_handler(fn_service(|req: ServiceRequest| async move {
                let (req, _) = req.into_parts();
                let res = routes::not_found_response(&req);
                Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
            }));

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors(&settings.cors))
            .service(web::scope("/health_check").service(routes::health_check))
            .service(products_scope())
            .service(static_files)
            .default_service(web::to(routes::not_found))
            .app_data(json_config.clone())
            .app_data(store.clone())
            .app_data(images.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
