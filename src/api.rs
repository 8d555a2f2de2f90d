use crate::registry_client::{forward_get, forward_post};
use actix_files::NamedFile;
use actix_web::{web, HttpResponse, Responder};
use log::{debug, error};
use std::path::PathBuf;

#[derive(Clone)]
pub struct Api {
    pub registry_url: String,
    pub index_html: PathBuf,
    pub client: reqwest::Client,
}

impl Api {
    pub async fn index(config: web::Data<Api>) -> actix_web::Result<NamedFile> {
        debug!("index() called");

        Ok(NamedFile::open(&config.index_html)?)
    }

    pub async fn version() -> impl Responder {
        HttpResponse::Ok().body(env!("CARGO_PKG_VERSION"))
    }

    pub async fn get_all_data(config: web::Data<Api>) -> impl Responder {
        debug!("get_all_data() called");

        match forward_get(&config.client, &config.registry_url, "/getalldata").await {
            Ok(response) => response,
            Err(e) => {
                error!("get_all_data failed: {e:#}");
                HttpResponse::BadGateway().body(format!("{e}"))
            }
        }
    }

    pub async fn register_gateway(body: web::Bytes, config: web::Data<Api>) -> impl Responder {
        debug!("register_gateway() called");

        match forward_post(
            &config.client,
            &config.registry_url,
            "/register",
            body.to_vec(),
        )
        .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("register_gateway failed: {e:#}");
                HttpResponse::BadGateway().body(format!("{e}"))
            }
        }
    }

    pub async fn save_device(body: web::Bytes, config: web::Data<Api>) -> impl Responder {
        debug!("save_device() called");

        match forward_post(
            &config.client,
            &config.registry_url,
            "/savedevice",
            body.to_vec(),
        )
        .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("save_device failed: {e:#}");
                HttpResponse::BadGateway().body(format!("{e}"))
            }
        }
    }
}
