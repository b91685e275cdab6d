use actix_web::web;

pub mod polls;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api").service(
            web::scope("/polls")
                .route("", web::get().to(polls::index))
                .service(
                    web::scope("/{id}")
                        .route("", web::get().to(polls::detail))
                        .route("/results", web::get().to(polls::results))
                        .route("/vote", web::post().to(polls::vote)),
                ),
        ),
    );
}
