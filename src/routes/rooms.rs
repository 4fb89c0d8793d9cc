use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::types::RoomId;
use crate::forms::rooms::{
    AddRoomForm, AddRoomFormPayload, DeleteRoomForm, DeleteRoomFormPayload, UpdateRoomForm,
    UpdateRoomFormPayload,
};
use crate::repository::AnyRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::rooms::{
    add_room as add_room_service, delete_room as delete_room_service,
    show_room as show_room_service, update_room as update_room_service,
};

#[get("/rooms/{room_id}")]
pub async fn show_room(
    room_id: web::Path<i32>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<AnyRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let room_id = match RoomId::new(room_id.into_inner()) {
        Ok(id) => id,
        Err(_) => return redirect("/"),
    };

    match show_room_service(room_id, repo.get_ref()) {
        Ok(page) => {
            let mut context = base_context(&flash_messages, "room");
            context.insert("room", &page);
            render_template(&tera, "rooms/show.html", &context)
        }
        // An unknown room sends the visitor back to the list.
        Err(ServiceError::NotFound) => redirect("/"),
        Err(err) => {
            log::error!("Failed to render room page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/rooms")]
pub async fn add_room(
    repo: web::Data<AnyRepository>,
    web::Form(form): web::Form<AddRoomForm>,
) -> impl Responder {
    let payload: AddRoomFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/");
        }
    };

    match add_room_service(payload, repo.get_ref()) {
        Ok(true) => FlashMessage::success("Комната добавлена.").send(),
        Ok(false) => FlashMessage::error("Ошибка при добавлении комнаты.").send(),
        Err(ServiceError::NotFound) => FlashMessage::error("Комната не найдена.").send(),
        Err(ServiceError::Internal) => return HttpResponse::InternalServerError().finish(),
    }

    redirect("/")
}

#[post("/rooms/{room_id}/update")]
pub async fn update_room(
    room_id: web::Path<i32>,
    repo: web::Data<AnyRepository>,
    web::Form(form): web::Form<UpdateRoomForm>,
) -> impl Responder {
    let mut payload: UpdateRoomFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/");
        }
    };

    payload.room_id = match room_id.into_inner().try_into() {
        Ok(id) => id,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/");
        }
    };

    let room_url = format!("/rooms/{}", payload.room_id);
    match update_room_service(payload, repo.get_ref()) {
        Ok(true) => FlashMessage::success("Комната обновлена.").send(),
        Ok(false) => FlashMessage::error("Ошибка при обновлении комнаты.").send(),
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Комната не найдена.").send();
            return redirect("/");
        }
        Err(ServiceError::Internal) => return HttpResponse::InternalServerError().finish(),
    }

    redirect(&room_url)
}

#[post("/rooms/{room_id}/delete")]
pub async fn delete_room(
    room_id: web::Path<i32>,
    repo: web::Data<AnyRepository>,
    web::Form(form): web::Form<DeleteRoomForm>,
) -> impl Responder {
    let mut payload: DeleteRoomFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/");
        }
    };

    payload.room_id = match room_id.into_inner().try_into() {
        Ok(id) => id,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/");
        }
    };

    match delete_room_service(payload, repo.get_ref()) {
        Ok(true) => FlashMessage::success("Комната и все её товары удалены.").send(),
        Ok(false) => FlashMessage::error("Ошибка при удалении комнаты.").send(),
        Err(ServiceError::NotFound) => FlashMessage::error("Комната не найдена.").send(),
        Err(ServiceError::Internal) => return HttpResponse::InternalServerError().finish(),
    }

    redirect("/")
}
