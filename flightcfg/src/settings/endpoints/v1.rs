use actix_web::web::{self, Data};
use actix_web::{get, HttpResponse, Responder};
use serde::Serialize;

use crate::settings::{Settings, Value};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_settings).service(get_setting);
}

#[get("")]
async fn get_settings(settings: Data<Settings>) -> impl Responder {
    info!("Fetching all settings");

    HttpResponse::Ok().json(ListSettingsResponse {
        settings: settings.get_ref(),
    })
}

#[get("/{name}")]
async fn get_setting(path: web::Path<String>, settings: Data<Settings>) -> impl Responder {
    let name = path.into_inner();
    info!("Fetching setting {}", name);

    match settings.get(&name) {
        Ok(value) => HttpResponse::Ok().json(ReadSettingResponse { name, value }),
        Err(e) => HttpResponse::NotFound().body(e.to_string()),
    }
}

#[derive(Serialize)]
struct ListSettingsResponse<'a> {
    settings: &'a Settings,
}

#[derive(Serialize)]
struct ReadSettingResponse {
    name: String,
    value: Value,
}
