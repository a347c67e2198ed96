use crate::database::MongoDB;
use crate::models::{CreateUserRequest, CreateUserResponse, User, UserResponse};
use crate::utils::error::AppError;
use mongodb::bson::{doc, oid::ObjectId};

const USERS_COLLECTION: &str = "users";

/// Valida os campos obrigatórios do request.
fn validate_request(request: &CreateUserRequest) -> Result<(String, String), AppError> {
    let username = request.username.as_deref().unwrap_or("");
    let email = request.email.as_deref().unwrap_or("");

    if username.is_empty() || email.is_empty() {
        return Err(AppError::Validation(
            "Username and email are required".to_string(),
        ));
    }

    Ok((username.to_string(), email.to_string()))
}

/// Creates a user after checking that neither the username nor the email is
/// already taken. The unique indexes on the collection close the window
/// between the check and the insert, so a raced duplicate insert also comes
/// back as `AppError::Duplicate`.
pub async fn create_user(
    db: &MongoDB,
    request: &CreateUserRequest,
) -> Result<CreateUserResponse, AppError> {
    let (username, email) = validate_request(request)?;

    let collection = db.collection::<User>(USERS_COLLECTION);

    // Duplicate check: username OU email já registrado
    let existing = collection
        .find_one(doc! {
            "$or": [{ "username": &username }, { "email": &email }]
        })
        .await?;

    if existing.is_some() {
        return Err(AppError::Duplicate(
            "Username or email already registered".to_string(),
        ));
    }

    let user = User {
        id: None,
        username,
        email,
    };

    let result = collection.insert_one(&user).await?;

    let user_id = result
        .inserted_id
        .as_object_id()
        .map(|id| id.to_hex())
        .ok_or_else(|| AppError::DatabaseError("insert returned no ObjectId".to_string()))?;

    Ok(CreateUserResponse {
        message: "User created successfully".to_string(),
        user_id,
    })
}

/// Returns every user in the collection, in storage order, with ids
/// rewritten to strings. No pagination.
pub async fn list_users(db: &MongoDB) -> Result<Vec<UserResponse>, AppError> {
    let collection = db.collection::<User>(USERS_COLLECTION);

    let mut cursor = collection.find(doc! {}).await?;

    let mut users = Vec::new();

    use futures::stream::StreamExt;
    while let Some(result) = cursor.next().await {
        users.push(UserResponse::from(result?));
    }

    Ok(users)
}

/// Looks a user up by the hex form of its ObjectId.
///
/// An unparseable id, a missing document, and a driver failure each map to
/// their own error variant so the handler can answer 400, 404, and 500
/// distinctly.
pub async fn get_user(db: &MongoDB, user_id: &str) -> Result<UserResponse, AppError> {
    let object_id = ObjectId::parse_str(user_id)
        .map_err(|_| AppError::InvalidId("Invalid user id".to_string()))?;

    let collection = db.collection::<User>(USERS_COLLECTION);

    match collection.find_one(doc! { "_id": object_id }).await? {
        Some(user) => Ok(UserResponse::from(user)),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: Option<&str>, email: Option<&str>) -> CreateUserRequest {
        CreateUserRequest {
            username: username.map(|s| s.to_string()),
            email: email.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_validate_accepts_both_fields() {
        let result = validate_request(&request(Some("alice"), Some("alice@example.com")));
        assert_eq!(
            result.unwrap(),
            ("alice".to_string(), "alice@example.com".to_string())
        );
    }

    #[test]
    fn test_validate_rejects_missing_username() {
        let result = validate_request(&request(None, Some("alice@example.com")));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_missing_email() {
        let result = validate_request(&request(Some("alice"), None));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let result = validate_request(&request(Some(""), Some("alice@example.com")));
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = validate_request(&request(Some("alice"), Some("")));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_invalid_id_is_rejected_before_touching_the_driver() {
        // parse_str is the only fallible step before the query
        assert!(ObjectId::parse_str("not-a-valid-id").is_err());
        assert!(ObjectId::parse_str("64b0c0ffee0ddba11ca7e600").is_ok());
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_create_then_get_round_trip() {
        dotenv::dotenv().ok();

        let uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017/user_database_test".to_string());
        let db = MongoDB::new(&uri).await.unwrap();

        let suffix = ObjectId::new().to_hex();
        let created = create_user(
            &db,
            &request(
                Some(&format!("alice_{}", suffix)),
                Some(&format!("alice_{}@example.com", suffix)),
            ),
        )
        .await
        .unwrap();
        assert!(!created.user_id.is_empty());

        let fetched = get_user(&db, &created.user_id).await.unwrap();
        assert_eq!(fetched.id, created.user_id);
        assert_eq!(fetched.username, format!("alice_{}", suffix));

        // Mesmo username de novo: conflito
        let duplicate = create_user(
            &db,
            &request(
                Some(&format!("alice_{}", suffix)),
                Some(&format!("other_{}@example.com", suffix)),
            ),
        )
        .await;
        assert!(matches!(duplicate, Err(AppError::Duplicate(_))));
    }
}
