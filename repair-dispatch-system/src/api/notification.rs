use actix_web::web::{Data, Json, Path};
use actix_web::{get, post};
use domain_dispatch::model::entity::Notification;
use domain_dispatch::service::NotificationService;

use crate::api::dtos::BroadcastRequest;
use crate::api::{extract_uuid, ApiResult};
use crate::infrastructure::ServiceProvider;

#[get("notification/List/{user_id}")]
pub async fn list_notifications(
    provider: Data<ServiceProvider>,
    user_id: Path<String>,
) -> ApiResult<Vec<Notification>> {
    let user_id = extract_uuid(&user_id)?;
    let list = provider.notifier.list_for_user(user_id).await?;
    Ok(Json(list))
}

#[post("notification/MarkRead/{id}")]
pub async fn mark_read(provider: Data<ServiceProvider>, id: Path<String>) -> ApiResult<()> {
    let id = extract_uuid(&id)?;
    provider.notifier.mark_read(id).await?;
    Ok(Json(()))
}

#[post("notification/MarkAllRead/{user_id}")]
pub async fn mark_all_read(
    provider: Data<ServiceProvider>,
    user_id: Path<String>,
) -> ApiResult<usize> {
    let user_id = extract_uuid(&user_id)?;
    let count = provider.notifier.mark_all_read(user_id).await?;
    Ok(Json(count))
}

#[post("notification/Delete/{id}")]
pub async fn delete_notification(
    provider: Data<ServiceProvider>,
    id: Path<String>,
) -> ApiResult<()> {
    let id = extract_uuid(&id)?;
    provider.notifier.delete(id).await?;
    Ok(Json(()))
}

#[post("notification/DeleteAll/{user_id}")]
pub async fn delete_all(
    provider: Data<ServiceProvider>,
    user_id: Path<String>,
) -> ApiResult<usize> {
    let user_id = extract_uuid(&user_id)?;
    let count = provider.notifier.delete_all(user_id).await?;
    Ok(Json(count))
}

#[post("notification/Broadcast")]
pub async fn broadcast(
    provider: Data<ServiceProvider>,
    req: Json<BroadcastRequest>,
) -> ApiResult<usize> {
    let req = req.into_inner();
    let count = provider
        .notifier
        .broadcast(req.sender_id, &req.title, &req.message, req.target)
        .await?;
    Ok(Json(count))
}
