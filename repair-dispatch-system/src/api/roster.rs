use actix_web::post;
use actix_web::web::{Data, Json, Path};
use domain_dispatch::exception::DispatchException;
use domain_dispatch::model::entity::technician::Technician;
use domain_dispatch::model::entity::user::{ActorRole, User};
use domain_dispatch::repository::{TechnicianRepo, UserRepo};
use uuid::Uuid;

use crate::api::dtos::{RegisterTechnicianRequest, RegisterUserRequest, SetAvailabilityRequest};
use crate::api::{extract_uuid, ApiResult};
use crate::infrastructure::ServiceProvider;

#[post("roster/RegisterUser")]
pub async fn register_user(
    provider: Data<ServiceProvider>,
    req: Json<RegisterUserRequest>,
) -> ApiResult<User> {
    let req = req.into_inner();
    let user = User {
        id: Uuid::new_v4(),
        name: req.name,
        phone: req.phone,
        role: req.role,
        balance: req.balance,
    };
    UserRepo::insert(provider.store.as_ref(), &user).await?;
    Ok(Json(user))
}

/// A technician gets a user row (notifications, broadcasts) and a roster
/// row under the same id.
#[post("roster/RegisterTechnician")]
pub async fn register_technician(
    provider: Data<ServiceProvider>,
    req: Json<RegisterTechnicianRequest>,
) -> ApiResult<Technician> {
    let req = req.into_inner();
    let user = User {
        id: Uuid::new_v4(),
        name: req.name.clone(),
        phone: req.phone,
        role: ActorRole::Technician,
        balance: 0.0,
    };
    UserRepo::insert(provider.store.as_ref(), &user).await?;
    let technician = Technician {
        id: user.id,
        name: req.name,
        role: req.role,
        online: false,
        available: false,
        last_assigned_at: None,
    };
    TechnicianRepo::insert(provider.store.as_ref(), &technician).await?;
    Ok(Json(technician))
}

#[post("roster/SetAvailability/{technician_id}")]
pub async fn set_availability(
    provider: Data<ServiceProvider>,
    technician_id: Path<String>,
    req: Json<SetAvailabilityRequest>,
) -> ApiResult<Technician> {
    let technician_id = extract_uuid(&technician_id)?;
    let mut technician = TechnicianRepo::get_by_id(provider.store.as_ref(), technician_id)
        .await?
        .ok_or(DispatchException::NoSuchTechnician { id: technician_id })?;
    technician.online = req.online;
    technician.available = req.available;
    TechnicianRepo::update(provider.store.as_ref(), &technician).await?;
    Ok(Json(technician))
}
