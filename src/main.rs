mod config;
mod setup;

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{guard, web, App, HttpResponse, HttpServer};
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{AppConfig, LogFormat};
use graphql::{build_schema, SharedConnection, SharedValidationHelper, WorkforceSchema};
use repositories::StoreValidationHelper;
use setup::set_up_db;

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

async fn graphql_playground() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

async fn graphql_request(schema: web::Data<WorkforceSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

fn cors(origin: Option<&str>) -> Cors {
    match origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600),
        None => Cors::permissive(),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    init_tracing(config.log_format);

    let db: SharedConnection = Arc::new(
        set_up_db(&config.database_url)
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?,
    );

    let helper: SharedValidationHelper = Arc::new(StoreValidationHelper::new(Arc::clone(&db)));
    let schema = build_schema(db, helper);

    tracing::info!(host = %config.host, port = config.port, "starting server");

    let cors_origin = config.cors_origin.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(schema.clone()))
            .wrap(cors(cors_origin.as_deref()))
            .wrap(TracingLogger::default())
            .service(
                web::resource("/graphql")
                    .guard(guard::Post())
                    .to(graphql_request),
            )
            .service(
                web::resource("/graphql")
                    .guard(guard::Get())
                    .to(graphql_playground),
            )
            .route("/health", web::get().to(health))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
