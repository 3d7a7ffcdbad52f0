use std::sync::Arc;

use actix_web::middleware::{self};
use actix_web::{web, App, HttpServer};

use crate::error::Error;
use crate::logger;
use crate::settings::endpoints::v1::configure as configure_settings;
use crate::settings::{Overrides, Profile, Settings};
use crate::BANNER;

pub struct ServerConfig {
    pub log: logger::Level,
    pub profile: Profile,
    pub overrides: Overrides,
}

pub async fn run(config: ServerConfig) -> Result<(), Error> {
    // Set the default log level
    logger::init(&config.log);

    // Output flightcfg banner
    info!("{}", BANNER);
    info!("Starting server...");

    // Resolve once, then share read-only across workers
    let settings = Arc::new(Settings::resolve(config.profile, &config.overrides));
    let (host, port) = settings.service.bind_addr();

    let data = web::Data::from(settings);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .app_data(data.clone())
            .configure(routes)
    })
    .bind((host.clone(), port))?
    .run();

    info!("Server running at http://{}:{}", host, port);
    server.await?;

    Ok(())
}

pub(crate) fn routes(config: &mut web::ServiceConfig) {
    config.service(web::scope("api/v1/settings").configure(configure_settings));
}
