use actix_web::{HttpRequest, HttpResponse, Responder, post, web};
use actix_web_flash_messages::FlashMessage;

use crate::domain::types::RoomId;
use crate::forms::items::{
    AddItemForm, AddItemFormPayload, DeleteItemForm, DeleteItemFormPayload, UpdateItemForm,
    UpdateItemFormPayload,
};
use crate::repository::AnyRepository;
use crate::routes::redirect;
use crate::services::ServiceError;
use crate::services::items::{
    add_item as add_item_service, delete_item as delete_item_service,
    update_item as update_item_service,
};

#[post("/rooms/{room_id}/items")]
pub async fn add_item(
    room_id: web::Path<i32>,
    repo: web::Data<AnyRepository>,
    web::Form(form): web::Form<AddItemForm>,
) -> impl Responder {
    let room_id = match RoomId::new(room_id.into_inner()) {
        Ok(id) => id,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/");
        }
    };
    let room_url = format!("/rooms/{room_id}");

    let payload: AddItemFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect(&room_url);
        }
    };

    match add_item_service(payload, room_id, repo.get_ref()) {
        Ok(true) => FlashMessage::success("Товар добавлен.").send(),
        Ok(false) => FlashMessage::error("Ошибка при добавлении товара.").send(),
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Комната не найдена.").send();
            return redirect("/");
        }
        Err(ServiceError::Internal) => return HttpResponse::InternalServerError().finish(),
    }

    redirect(&room_url)
}

#[post("/items/{item_id}/update")]
pub async fn update_item(
    request: HttpRequest,
    item_id: web::Path<i32>,
    repo: web::Data<AnyRepository>,
    web::Form(form): web::Form<UpdateItemForm>,
) -> impl Responder {
    let redirect_to = request
        .headers()
        .get("referer")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("/");

    let mut payload: UpdateItemFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect(redirect_to);
        }
    };

    payload.item_id = match item_id.into_inner().try_into() {
        Ok(id) => id,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect(redirect_to);
        }
    };

    match update_item_service(payload, repo.get_ref()) {
        Ok(true) => FlashMessage::success("Товар обновлён.").send(),
        Ok(false) => FlashMessage::error("Ошибка при обновлении товара.").send(),
        Err(ServiceError::NotFound) => FlashMessage::error("Товар не найден.").send(),
        Err(ServiceError::Internal) => return HttpResponse::InternalServerError().finish(),
    }

    redirect(redirect_to)
}

#[post("/items/{item_id}/delete")]
pub async fn delete_item(
    request: HttpRequest,
    item_id: web::Path<i32>,
    repo: web::Data<AnyRepository>,
    web::Form(form): web::Form<DeleteItemForm>,
) -> impl Responder {
    let redirect_to = request
        .headers()
        .get("referer")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("/");

    let mut payload: DeleteItemFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect(redirect_to);
        }
    };

    payload.item_id = match item_id.into_inner().try_into() {
        Ok(id) => id,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect(redirect_to);
        }
    };

    match delete_item_service(payload, repo.get_ref()) {
        Ok(true) => FlashMessage::success("Товар удалён.").send(),
        Ok(false) => FlashMessage::error("Ошибка при удалении товара.").send(),
        Err(ServiceError::NotFound) => FlashMessage::error("Товар не найден.").send(),
        Err(ServiceError::Internal) => return HttpResponse::InternalServerError().finish(),
    }

    redirect(redirect_to)
}
