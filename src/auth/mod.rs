pub mod token;

use serde::Deserialize;

use crate::app::AppError;
use crate::database::models::user::UserRecord;
use crate::database::store::Store;
use token::TokenKeys;

#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

fn invalid_credentials() -> AppError {
    // One message for both unknown user and wrong password, so callers
    // cannot enumerate usernames
    AppError::Authentication(String::from("invalid username or password"))
}

/** Registers a new user. The password is hashed with bcrypt before anything
is persisted; the plaintext never reaches the store. */
pub fn register(store: &dyn Store, input: NewUser) -> Result<UserRecord, AppError> {
    let username = input.username.unwrap_or_default().trim().to_string();
    let password = input.password.unwrap_or_default();
    let name = input.name.unwrap_or_default();

    if username.chars().count() < 3 {
        return Err(AppError::Validation(String::from(
            "username must be at least 3 characters long",
        )));
    }
    if password.chars().count() < 3 {
        return Err(AppError::Validation(String::from(
            "password must be at least 3 characters long",
        )));
    }

    let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)?;

    UserRecord::create(store, &username, &name, &password_hash)
}

/** Checks credentials against the stored hash and issues a bearer token on
success */
pub fn authenticate(
    store: &dyn Store,
    keys: &TokenKeys,
    credentials: &Credentials,
) -> Result<(String, UserRecord), AppError> {
    let user = match store.user_by_username(&credentials.username)? {
        Some(user) => user,
        None => return Err(invalid_credentials()),
    };

    let password_correct =
        bcrypt::verify(&credentials.password, &user.password_hash).unwrap_or(false);
    if !password_correct {
        return Err(invalid_credentials());
    }

    let token = keys.issue(&user)?;
    Ok((token, user))
}
