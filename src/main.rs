use actix_files::Files;
use actix_web::{web, App, HttpServer};
use env_logger::{Builder, Env, Target};
use gateway_ui::{api::Api, config::AppConfig, registry_client::registry_client};
use log::{debug, info};
use std::io::Write;

#[actix_web::main]
async fn main() {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    builder.format(|f, record| match record.level() {
        log::Level::Error => {
            eprintln!("{}", record.args());
            Ok(())
        }
        _ => {
            writeln!(f, "{}", record.args())
        }
    });

    builder.target(Target::Stdout).init();

    info!("module version: {}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::get();

    let api = Api {
        registry_url: config.registry.base_url.clone(),
        index_html: config.paths.index_html.clone(),
        client: registry_client().expect("failed to create registry client"),
    };

    let static_dir = config.paths.static_dir.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(api.clone()))
            .route("/", web::get().to(Api::index))
            .route("/version", web::get().to(Api::version))
            .route("/getalldata", web::get().to(Api::get_all_data))
            .route("/register", web::post().to(Api::register_gateway))
            .route("/savedevice", web::post().to(Api::save_device))
            .service(Files::new("/static", &static_dir))
    })
    .bind(("0.0.0.0", config.ui.port))
    .expect("bind")
    .disable_signals()
    .run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            debug!("ctrl-c");
            server_handle.stop(true).await;
        },
        _ = server_task => {
            debug!("server stopped");
        }
    }

    debug!("good bye");
}
