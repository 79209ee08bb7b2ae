use std::net::TcpListener;
use std::sync::Arc;

use actix_multipart::form::MultipartFormConfig;
use actix_web::dev::Server;
use actix_web::{guard, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::domain::{ExposeDiagnostics, LandingPage};
use crate::mail::Mailer;
use crate::routes::contact::{
    form_error_handler, is_multipart, multipart_error_handler, redirect_to_landing_page,
    send_contact_email, send_contact_email_multipart,
};
use crate::routes::health::health_check;

pub fn run(
    listener: TcpListener,
    mailer: Arc<dyn Mailer>,
    landing_page: String,
    diagnostics: ExposeDiagnostics,
    form_limit_bytes: usize,
) -> Result<Server, std::io::Error> {
    let mailer: web::Data<dyn Mailer> = web::Data::from(mailer);
    let landing_page = web::Data::new(LandingPage(landing_page));
    let diagnostics = web::Data::new(diagnostics);

    Ok(HttpServer::new(move || {
        let form_config = web::FormConfig::default()
            .limit(form_limit_bytes)
            .error_handler(form_error_handler);
        let multipart_config = MultipartFormConfig::default()
            .total_limit(form_limit_bytes)
            .memory_limit(form_limit_bytes)
            .error_handler(multipart_error_handler);

        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(health_check))
            .service(
                web::resource("/send-email")
                    .app_data(form_config)
                    .app_data(multipart_config)
                    .route(
                        web::post()
                            .guard(guard::fn_guard(is_multipart))
                            .to(send_contact_email_multipart),
                    )
                    .route(web::post().to(send_contact_email))
                    .route(web::route().to(redirect_to_landing_page)),
            )
            .app_data(mailer.clone())
            .app_data(landing_page.clone())
            .app_data(diagnostics.clone())
    })
    .listen(listener)?
    .run())
}
