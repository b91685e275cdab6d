#[macro_use]
extern crate log;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;

mod handlers;
mod routes;
mod tests;

use crate::routes::routes;
use errors::ErrorResponse;

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        errors: vec!["Not Found".to_string()],
    })
}

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let pool = db::new_pool();

    info!("starting http server on 0.0.0.0:8080");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind("0.0.0.0:8080")?
    .run()
    .await
}
