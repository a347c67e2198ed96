use crate::database::MongoDB;
use crate::models::{CreateUserRequest, CreateUserResponse, UserResponse};
use crate::services::user_service;
use actix_web::{web, HttpResponse, Responder};

/// POST /users - Cria um novo usuário
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreateUserResponse),
        (status = 400, description = "Missing username or email"),
        (status = 409, description = "Username or email already registered"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_user(
    db: web::Data<MongoDB>,
    body: web::Json<CreateUserRequest>,
) -> impl Responder {
    log::info!("👤 POST /users - creating user");

    match user_service::create_user(&db, &body).await {
        Ok(response) => {
            log::info!("✅ User created: {}", response.user_id);
            HttpResponse::Created().json(response)
        }
        Err(e) => {
            log::warn!("❌ Failed to create user: {}", e);
            e.to_response()
        }
    }
}

/// GET /users - Lista todos os usuários
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users, ids rendered as strings", body = [UserResponse]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_users(db: web::Data<MongoDB>) -> impl Responder {
    log::info!("📋 GET /users - fetching all users");

    match user_service::list_users(&db).await {
        Ok(users) => {
            log::info!("✅ Retrieved {} users", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Error fetching users: {}", e);
            e.to_response()
        }
    }
}

/// GET /users/{user_id} - Busca usuário pelo id
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "Users",
    params(
        ("user_id" = String, Path, description = "Hex ObjectId of the user")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Invalid user id"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_user(db: web::Data<MongoDB>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();
    log::info!("🔍 GET /users/{}", user_id);

    match user_service::get_user(&db, &user_id).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => {
            log::warn!("❌ Lookup failed for {}: {}", user_id, e);
            e.to_response()
        }
    }
}
