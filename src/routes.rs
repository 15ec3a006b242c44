use crate::{
    api::{history, summary, upload, warning},
    config::Config,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    cfg.service(
        web::scope(&config.api_prefix)
            // /upload
            .service(web::resource("/upload").route(web::post().to(upload::upload_leave_sheet)))
            // /history
            .service(web::resource("/history").route(web::get().to(history::leave_history)))
            // /warning
            .service(web::resource("/warning").route(web::get().to(warning::leave_warnings)))
            // /summary
            .service(web::resource("/summary").route(web::get().to(summary::leave_summary))),
    );
}
