use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "Minimal user registry backed by MongoDB.\n\n**Features:**\n- Create users with unique username and email\n- List all users\n- Look users up by id\n- Health monitoring",
        contact(
            name = "User Service Team",
            email = "support@user-service.com"
        )
    ),
    paths(
        crate::api::home::home,
        crate::api::health::health_check,
        crate::api::users::create_user,
        crate::api::users::get_users,
        crate::api::users::get_user,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::user::CreateUserRequest,
            crate::models::user::CreateUserResponse,
            crate::models::user::UserResponse,
        )
    ),
    tags(
        (name = "Home", description = "Service description endpoint."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
        (name = "Users", description = "User registry endpoints. Create, list, and fetch user records."),
    )
)]
pub struct ApiDoc;
