use actix_web::http::header;
use actix_web::{get, web, HttpResponse};

#[get("/")]
#[instrument]
async fn index() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/notes"))
        .finish()
}

#[get("/health_check")]
#[instrument]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(health_check);
}
