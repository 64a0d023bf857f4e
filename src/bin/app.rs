use std::{net::TcpListener, process, thread};

use clap::Parser as _;
use embassy_executor::Spawner;

use led_strip_controller::{
    HttpServer,
    app::LedStripUsecases,
    config::{AppConfig, HTTP_TIMEOUT},
    controllers::LedStripHttpController,
    domain::types::LedStripUsecasesPortRef,
    infrastructure::{
        drivers::init_strip_driver,
        services::init_strip_service,
        types::LedStripUsecasesImpl,
    },
    mk_static,
};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let config = AppConfig::parse();

    // Open the strip transport, a missing device is fatal
    let driver = match init_strip_driver(&config) {
        Ok(driver) => driver,
        Err(e) => {
            log::error!("strip: cannot open {:?} transport: {}", config.transport, e);
            process::exit(1);
        }
    };
    if driver.is_none() {
        log::info!("strip: running in simulation, frames stay in memory");
    }

    // Spawn the animation engine and build the use cases around it
    let service = init_strip_service(spawner, driver, config.led_count);
    let usecases: LedStripUsecasesPortRef =
        mk_static!(LedStripUsecasesImpl, LedStripUsecases::new(service));

    let listener = match TcpListener::bind((config.bind, config.port)) {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("http: cannot bind {}:{}: {}", config.bind, config.port, e);
            process::exit(1);
        }
    };
    log::info!(
        "http: serving {} leds on {}:{}",
        config.led_count,
        config.bind,
        config.port
    );

    // Requests are served one at a time off the executor thread
    thread::spawn(move || serve_http(usecases, &listener));
}

fn serve_http(usecases: LedStripUsecasesPortRef, listener: &TcpListener) {
    let controller = LedStripHttpController::new(usecases);
    HttpServer::new(&controller).listen_and_serve(listener, HTTP_TIMEOUT)
}
