use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    pkg::{
        internal::adaptors::users::{
            mutators::{CreateUserData, UserMutator},
            selectors::UserSelector,
            spec::{Role, UserEntry},
        },
        server::{handlers::auth::{LoginInput, RegisterInput}, state::AppState},
    },
    prelude::{Error, Result},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry_hours: i64,
}

impl TokenKeys {
    pub fn from_secret(secret: &str, expiry_hours: i64) -> Self {
        TokenKeys {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiry_hours,
        }
    }

    pub fn issue(&self, user_id: &str) -> Result<String> {
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (Utc::now() + chrono::Duration::hours(self.expiry_hours)).timestamp(),
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    pub fn verify(&self, token: &str) -> Result<Claims> {
        Ok(decode::<Claims>(token, &self.decoding, &Validation::default())?.claims)
    }
}

pub fn hash_password(raw: &str) -> Result<String> {
    Ok(bcrypt::hash(raw, bcrypt::DEFAULT_COST)?)
}

pub fn verify_password(raw: &str, hash: &str) -> Result<bool> {
    Ok(bcrypt::verify(raw, hash)?)
}

pub async fn register(state: &AppState, input: RegisterInput) -> Result<(UserEntry, String)> {
    input.validate()?;
    let password_hash = hash_password(&input.password)?;
    let mut conn = state.db_pool.acquire().await?;
    let user = UserMutator::new(&mut conn)
        .create(CreateUserData {
            username: input.username,
            email: input.email,
            password_hash,
            name: input.name,
            role: input.role.unwrap_or(Role::User),
        })
        .await?;
    let token = state.tokens.issue(&user.user_id)?;
    tracing::info!("registered user {} with role {:?}", &user.username, &user.role);
    Ok((user, token))
}

pub async fn login(state: &AppState, input: LoginInput) -> Result<(UserEntry, String)> {
    let mut conn = state.db_pool.acquire().await?;
    let user = UserSelector::new(&mut conn)
        .get_by_username(&input.username)
        .await?
        .ok_or(Error::Unauthorized("Invalid credentials"))?;
    if !verify_password(&input.password, &user.password_hash)? {
        tracing::warn!("rejected login for {}", &input.username);
        return Err(Error::Unauthorized("Invalid credentials"));
    }
    let token = state.tokens.issue(&user.user_id)?;
    Ok((user, token))
}

/// Resolves a bearer token to the user it identifies. The returned identity
/// is server-trusted; submission handlers never take an applicant id from
/// the client.
pub async fn resolve_bearer(state: &AppState, token: &str) -> Result<UserEntry> {
    let claims = state.tokens.verify(token)?;
    let mut conn = state.db_pool.acquire().await?;
    UserSelector::new(&mut conn)
        .get_by_id(&claims.sub)
        .await?
        .ok_or(Error::Unauthorized("Not authorized, token failed"))
}
