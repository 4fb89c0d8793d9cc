use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::repository::AnyRepository;
use crate::routes::{base_context, render_template};
use crate::services::main::show_index as show_index_service;

#[get("/")]
pub async fn index(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<AnyRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_index_service(repo.get_ref()) {
        Ok(index) => {
            let mut context = base_context(&flash_messages, "index");
            context.insert("rooms", &index.rooms);
            context.insert("grand_total", &index.grand_total);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render index page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
