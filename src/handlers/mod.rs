pub mod archive_handlers;
pub mod auth_handlers;
pub mod best_paper_handlers;
pub mod committee_handlers;
pub mod conference_handlers;
pub mod date_handlers;
pub mod edition_handlers;
pub mod fee_handlers;
pub mod home_handlers;
pub mod news_handlers;
pub mod paper_handlers;
pub mod speaker_handlers;
pub mod stat_handlers;
pub mod topic_handlers;
pub mod ws;

use actix_web::middleware::from_fn;
use actix_web::web;

use crate::auth::middleware::require_auth_write;

/// Register every route. The write guard wraps the /api/admin scope and the
/// public conference upsert; it waves GET/HEAD/OPTIONS through, so reads
/// stay public while every mutation needs a Bearer token. /api/auth and /ws
/// are unguarded.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth_handlers::register))
                    .route("/login", web::post().to(auth_handlers::login))
                    .route("/refresh", web::post().to(auth_handlers::refresh))
                    .route("/logout", web::post().to(auth_handlers::logout)),
            )
            .service(
                web::scope("/admin")
                    .wrap(from_fn(require_auth_write))
                    .service(
                        web::scope("/speakers")
                            .route("", web::get().to(speaker_handlers::list))
                            .route("", web::post().to(speaker_handlers::create))
                            .route("/{id}", web::put().to(speaker_handlers::update))
                            .route("/{id}", web::delete().to(speaker_handlers::delete)),
                    )
                    .service(
                        // /section/{type} is registered before the bare /{id}
                        // routes so it is matched first.
                        web::scope("/committees")
                            .route("", web::get().to(committee_handlers::list))
                            .route("", web::post().to(committee_handlers::create))
                            .route(
                                "/section/{type}",
                                web::delete().to(committee_handlers::delete_section),
                            )
                            .route("/{id}", web::put().to(committee_handlers::update))
                            .route("/{id}", web::delete().to(committee_handlers::delete)),
                    )
                    .service(
                        web::scope("/important-dates")
                            .route("", web::get().to(date_handlers::list))
                            .route("", web::post().to(date_handlers::create))
                            .route("/{id}", web::put().to(date_handlers::update))
                            .route("/{id}", web::delete().to(date_handlers::delete)),
                    )
                    .service(
                        web::scope("/topics")
                            .route("", web::get().to(topic_handlers::list))
                            .route("", web::post().to(topic_handlers::create))
                            .route("/{id}", web::put().to(topic_handlers::update))
                            .route("/{id}", web::delete().to(topic_handlers::delete)),
                    )
                    .service(
                        web::scope("/previous-editions")
                            .route("", web::get().to(edition_handlers::list))
                            .route("", web::post().to(edition_handlers::create))
                            .route("/{id}", web::put().to(edition_handlers::update))
                            .route("/{id}", web::delete().to(edition_handlers::delete)),
                    )
                    .service(
                        web::scope("/registration-fees")
                            .route("", web::get().to(fee_handlers::list))
                            .route("", web::post().to(fee_handlers::create))
                            .route("/{id}", web::put().to(fee_handlers::update))
                            .route("/{id}", web::delete().to(fee_handlers::delete)),
                    )
                    .service(
                        web::scope("/archive")
                            .route("", web::get().to(archive_handlers::list))
                            .route("", web::post().to(archive_handlers::create))
                            .route("/{id}", web::put().to(archive_handlers::update))
                            .route("/{id}", web::delete().to(archive_handlers::delete)),
                    )
                    .service(
                        web::scope("/news")
                            .route("", web::get().to(news_handlers::list))
                            .route("", web::post().to(news_handlers::create))
                            .route("/{id}", web::put().to(news_handlers::update))
                            .route("/{id}", web::delete().to(news_handlers::delete)),
                    )
                    .service(
                        web::scope("/accepted-papers")
                            .route("", web::get().to(paper_handlers::list))
                            .route("", web::post().to(paper_handlers::create))
                            .route("/{id}", web::put().to(paper_handlers::update))
                            .route("/{id}", web::delete().to(paper_handlers::delete)),
                    )
                    .service(
                        web::scope("/best-papers")
                            .route("", web::get().to(best_paper_handlers::list))
                            .route("", web::post().to(best_paper_handlers::create))
                            .route("/{id}", web::put().to(best_paper_handlers::update))
                            .route("/{id}", web::delete().to(best_paper_handlers::delete)),
                    )
                    .service(
                        web::scope("/publication-stats")
                            .route("", web::get().to(stat_handlers::list))
                            .route("", web::post().to(stat_handlers::create))
                            .route("/{id}", web::put().to(stat_handlers::update))
                            .route("/{id}", web::delete().to(stat_handlers::delete)),
                    )
                    .service(
                        web::scope("/conference-info")
                            .route("", web::get().to(conference_handlers::list))
                            .route("", web::post().to(conference_handlers::create))
                            .route("/{id}", web::put().to(conference_handlers::update))
                            .route("/{id}", web::delete().to(conference_handlers::delete)),
                    )
                    .service(
                        web::scope("/home-sections")
                            .route("", web::get().to(home_handlers::list))
                            .route("", web::post().to(home_handlers::create))
                            .route("/{id}", web::put().to(home_handlers::update))
                            .route("/{id}", web::delete().to(home_handlers::delete)),
                    ),
            )
            // Sectioned committee view for the public pages.
            .route(
                "/committees/aggregate",
                web::get().to(committee_handlers::aggregate),
            )
            .service(
                // Slug-keyed conference surface: the read is public, the
                // upsert is a mutation and goes through the write guard.
                web::scope("/conference")
                    .wrap(from_fn(require_auth_write))
                    .route("", web::post().to(conference_handlers::upsert))
                    .route(
                        "/{conference_id}",
                        web::get().to(conference_handlers::read),
                    ),
            ),
    );
    cfg.route("/ws", web::get().to(ws::ws_connect));
}
