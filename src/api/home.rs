use actix_web::{HttpResponse, Responder};

/// GET / - Confirma que a API está ativa e lista os endpoints
#[utoipa::path(
    get,
    path = "/",
    tag = "Home",
    responses(
        (status = 200, description = "Service description with available endpoints")
    )
)]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "API is running",
        "endpoints": {
            "create_user": "/users (POST)",
            "get_users": "/users (GET)",
            "get_user_by_id": "/users/{user_id} (GET)"
        }
    }))
}
