use actix_cors::Cors;
use actix_files::Files;
use actix_multipart::Multipart;
use actix_web::{web, App, Error, HttpResponse, HttpServer, Responder};
use actix_web::http::header;
use futures::TryStreamExt;
use tracing::{error, info};
use tracing_actix_web::TracingLogger;

use letterforge::config::ServerConfig;
use letterforge::logging;
use letterforge::render::{render_layout, RenderRequest, DOWNLOAD_FILENAME};
use letterforge::store::EmailStore;

/// Multipart field name carrying the uploaded image
const UPLOAD_FIELD: &str = "image";

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json("Letterforge is running")
}

/// Serve the raw layout template to the builder UI
async fn get_email_layout(store: web::Data<EmailStore>) -> impl Responder {
    match store.read_layout() {
        Ok(layout) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(layout),
        Err(e) => {
            error!(error = %e, "Error reading layout file");
            HttpResponse::InternalServerError().body("Error reading layout file")
        }
    }
}

/// Accept a single image from the `image` multipart field and persist it
/// in the uploads directory
async fn upload_image(
    mut payload: Multipart,
    store: web::Data<EmailStore>,
) -> Result<HttpResponse, Error> {
    while let Some(mut field) = payload.try_next().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let original = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_owned);
        let Some(original) = original else {
            // A bare form value under the image field, not a file
            continue;
        };

        let mut data = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            data.extend_from_slice(&chunk);
        }

        return match store.store_upload(&original, &data) {
            Ok(stored) => {
                let image_url = format!("/uploads/{}", stored);
                info!(image_url = %image_url, "Image uploaded");
                Ok(HttpResponse::Ok().json(serde_json::json!({ "imageUrl": image_url })))
            }
            Err(e) => {
                error!(error = %e, "Error storing uploaded image");
                Ok(HttpResponse::InternalServerError().body("Error storing uploaded image"))
            }
        };
    }

    Ok(HttpResponse::BadRequest().body("No file uploaded"))
}

/// Overwrite the persisted email configuration with the request body
async fn upload_email_config(
    config: web::Json<serde_json::Value>,
    store: web::Data<EmailStore>,
) -> impl Responder {
    match store.save_config(&config) {
        Ok(()) => HttpResponse::Ok().body("Configuration saved successfully"),
        Err(e) => {
            error!(error = %e, "Error saving configuration");
            HttpResponse::InternalServerError().body("Error saving configuration")
        }
    }
}

/// Render the layout against the supplied fields and return it as an
/// HTML attachment download
async fn render_and_download(
    request: web::Json<RenderRequest>,
    store: web::Data<EmailStore>,
) -> impl Responder {
    let layout = match store.read_layout() {
        Ok(layout) => layout,
        Err(e) => {
            error!(error = %e, "Error reading layout file");
            return HttpResponse::InternalServerError().body("Error reading layout file");
        }
    };

    let rendered = render_layout(&layout, &request.substitutions());

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", DOWNLOAD_FILENAME),
        ))
        .body(rendered)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();
    logging::init_tracing();

    let config = ServerConfig::from_env();
    info!(listen_addr = %config.listen_addr, data_dir = %config.data_dir.display(), "Starting Letterforge");

    let store = web::Data::new(EmailStore::new(config.data_dir.clone()));

    // Make sure the uploads directory exists before mounting it
    let uploads_dir = store.uploads_dir();
    std::fs::create_dir_all(&uploads_dir)?;

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            // The builder UI is served from another origin
            .wrap(Cors::permissive())
            .app_data(store.clone())
            // API Endpoints
            .service(web::resource("/health").route(web::get().to(health_check)))
            .service(web::resource("/getEmailLayout").route(web::get().to(get_email_layout)))
            .service(web::resource("/uploadImage").route(web::post().to(upload_image)))
            .service(web::resource("/uploadEmailConfig").route(web::post().to(upload_email_config)))
            .service(
                web::resource("/renderAndDownloadTemplate")
                    .route(web::post().to(render_and_download)),
            )
            // Uploaded assets are public, no access control
            .service(Files::new("/uploads", uploads_dir.clone()))
    })
    .bind(&config.listen_addr)?
    .workers(4)
    .run()
    .await
}
