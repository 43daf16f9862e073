//! Users API handlers.
//!
//! ```text
//! GET    /api/v1/users
//! POST   /api/v1/users        {"name":"Ann","age":25}
//! GET    /api/v1/users/{id}
//! PUT    /api/v1/users/{id}   {"name":"Newname"}
//! DELETE /api/v1/users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewUser, User, UserId, UserPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/v1/users`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    /// Display name.
    #[schema(example = "Ann")]
    pub name: String,
    /// Age in years.
    #[schema(example = 25)]
    pub age: i64,
}

/// Request body for `PUT /api/v1/users/{id}`.
///
/// Omitted fields are kept. An empty `name` or a zero `age` is also treated
/// as omitted.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct UpdateUserRequest {
    /// New display name.
    #[schema(example = "Newname")]
    pub name: Option<String>,
    /// New age in years.
    pub age: Option<i64>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(value: UpdateUserRequest) -> Self {
        UserPatch::from_submitted(value.name, value.age)
    }
}

/// Response body for `GET /api/v1/users`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersResponse {
    /// All users, oldest first.
    #[schema(value_type = Vec<UserSchema>)]
    pub users: Vec<User>,
}

/// Response body for mutations: a human-readable summary and the record.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserMessageResponse {
    /// Summary of what happened.
    #[schema(example = "User 'Ann' created")]
    pub message: String,
    /// The record after the mutation (or as it was before deletion).
    #[schema(value_type = UserSchema)]
    pub user: User,
}

/// List every user in insertion order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use userbase::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = UsersResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<UsersResponse>> {
    let users = state.users.list().await?;
    Ok(web::Json(UsersResponse { users }))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserMessageResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let CreateUserRequest { name, age } = payload.into_inner();
    let user = state.users.create(NewUser::new(name, age)).await?;
    Ok(HttpResponse::Created().json(UserMessageResponse {
        message: format!("User '{}' created", user.name()),
        user,
    }))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::from(path.into_inner());
    Ok(web::Json(state.users.get(&id).await?))
}

/// Partially update a user.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserMessageResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<UserMessageResponse>> {
    let id = UserId::from(path.into_inner());
    let user = state.users.update(&id, payload.into_inner().into()).await?;
    Ok(web::Json(UserMessageResponse {
        message: format!("User '{id}' updated"),
        user,
    }))
}

/// Delete a user, returning the removed record.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = UserMessageResponse),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserMessageResponse>> {
    let id = UserId::from(path.into_inner());
    let user = state.users.delete(&id).await?;
    Ok(web::Json(UserMessageResponse {
        message: format!("User '{}' deleted", user.name()),
        user,
    }))
}
