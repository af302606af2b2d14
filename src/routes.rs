use crate::{
    api::{attendance, dashboard, identity},
    auth::{handlers, middleware::admin_guard},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let requests_per_min = requests_per_min.max(1);
        let per_ms = (60_000 / requests_per_min as u64).max(1);
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap_or_default();
        Governor::new(&cfg)
    }

    // every code request sends an email
    let code_limiter = Arc::new(build_limiter(config.rate_request_code_per_min));
    let admin_limiter = Arc::new(build_limiter(config.rate_admin_login_per_min));

    // Employee-facing
    cfg.service(web::resource("/").route(web::get().to(dashboard::index)))
        .service(
            web::resource("/get-system-email").route(web::get().to(identity::get_system_email)),
        )
        .service(
            web::resource("/request-code")
                .wrap(code_limiter)
                .route(web::post().to(attendance::request_code)),
        )
        .service(
            web::resource("/verify-and-submit")
                .route(web::post().to(attendance::verify_and_submit)),
        );

    // Admin
    cfg.service(
        web::resource("/admin")
            .wrap(admin_limiter)
            .route(web::get().to(handlers::admin_page))
            .route(web::post().to(handlers::admin_login)),
    )
    .service(
        web::resource("/dashboard")
            .wrap(from_fn(admin_guard))
            .route(web::get().to(dashboard::dashboard)),
    )
    .service(web::resource("/logout").route(web::get().to(handlers::logout)));
}
