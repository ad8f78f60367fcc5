use super::*;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;

/// Entry page with a minimal browser client.
const INDEX: &str = include_str!("../../static/index.html");

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> Result<(), std::io::Error> {
        let casino = web::Data::from(Casino::open(config.arena()));
        log::info!("starting hosting server on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(casino.clone())
                .route("/", web::get().to(index))
                .route("/health", web::get().to(health))
                .route("/ws", web::get().to(enter))
        })
        .workers(config.workers)
        .bind(config.bind.as_str())?
        .run()
        .await
    }
}

async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX)
}

async fn health(casino: web::Data<Casino>) -> impl Responder {
    let clients = casino.population().await;
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok", "clients": clients }))
}

async fn enter(
    casino: web::Data<Casino>,
    body: web::Payload,
    req: HttpRequest,
) -> Result<HttpResponse, actix_web::Error> {
    let (response, session, stream) = actix_ws::handle(&req, body)
        .inspect_err(|e| log::warn!("websocket upgrade failed: {}", e))?;
    casino.into_inner().bridge(session, stream).await;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn serves_entry_page() {
        let app = test::init_service(App::new().route("/", web::get().to(index))).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("<html"));
    }

    #[actix_web::test]
    async fn health_reports_clients() {
        let casino = web::Data::from(Casino::open(crate::gameroom::Arena::default()));
        let _ = casino.connect().await;
        let app = test::init_service(
            App::new()
                .app_data(casino.clone())
                .route("/health", web::get().to(health)),
        )
        .await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["clients"], 1);
    }
}
