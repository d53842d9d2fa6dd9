// src/auth/service.rs

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use super::error::{AuthError, AuthResult};
use super::jwt::TokenIssuer;
use super::models::{AuthResponse, LoginRequest, RegisterRequest, User, UserRecord};
use super::password::{hash_password, verify_password};
use super::repository::UserRepository;
use crate::config::auth::AuthConfig;

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "password123";
const DEMO_NAME: &str = "Demo User";

const MIN_PASSWORD_LEN: usize = 8;

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: TokenIssuer,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, config: &AuthConfig) -> Self {
        Self {
            users,
            tokens: TokenIssuer::new(&config.jwt_secret, config.token_ttl_hours),
            bcrypt_cost: config.bcrypt_cost,
        }
    }

    pub async fn login(&self, req: LoginRequest) -> AuthResult<AuthResponse> {
        let email = normalize_email(&req.email);
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(&req.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.create_token(&user.id, &user.email)?;
        info!("User {} logged in", user.id);

        Ok(AuthResponse {
            user: user.into(),
            token,
        })
    }

    pub async fn register(&self, req: RegisterRequest) -> AuthResult<AuthResponse> {
        let name = req.name.trim().to_string();
        let email = normalize_email(&req.email);
        validate_registration(&name, &email, &req.password)?;

        let record = UserRecord {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            password_hash: hash_password(&req.password, self.bcrypt_cost)?,
            created_at: chrono::Utc::now().timestamp(),
        };

        self.users.insert(record.clone()).await?;
        let token = self.tokens.create_token(&record.id, &record.email)?;
        info!("Registered user {}", record.id);

        Ok(AuthResponse {
            user: record.into(),
            token,
        })
    }

    /// Resolve a bearer token to its account
    pub async fn verify(&self, token: &str) -> AuthResult<User> {
        let claims = self.tokens.verify_token(token)?;
        self.users
            .find_by_id(&claims.sub)
            .await?
            .map(User::from)
            .ok_or(AuthError::InvalidToken)
    }

    /// Insert the demo account unless it already exists
    pub async fn seed_demo_user(&self) -> AuthResult<()> {
        if self.users.find_by_email(DEMO_EMAIL).await?.is_some() {
            return Ok(());
        }

        let record = UserRecord {
            id: Uuid::new_v4().to_string(),
            name: DEMO_NAME.to_string(),
            email: DEMO_EMAIL.to_string(),
            password_hash: hash_password(DEMO_PASSWORD, self.bcrypt_cost)?,
            created_at: chrono::Utc::now().timestamp(),
        };
        self.users.insert(record).await?;
        debug!("Seeded demo account {}", DEMO_EMAIL);
        Ok(())
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_registration(name: &str, email: &str, password: &str) -> AuthResult<()> {
    let name_len = name.chars().count();
    if !(2..=50).contains(&name_len) {
        return Err(AuthError::validation(
            "Name must be between 2 and 50 characters",
        ));
    }

    let valid_email = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    };
    if !valid_email {
        return Err(AuthError::validation("Please enter a valid email address"));
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::validation(
            "Password must be at least 8 characters",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repository::InMemoryUserRepository;

    fn service() -> AuthService {
        let config = AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_hours: 1,
            bcrypt_cost: 4,
            seed_demo_user: true,
        };
        AuthService::new(Arc::new(InMemoryUserRepository::new()), &config)
    }

    fn register_req(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn demo_user_can_log_in() {
        let auth = service();
        auth.seed_demo_user().await.unwrap();
        auth.seed_demo_user().await.unwrap();

        let response = auth
            .login(LoginRequest {
                email: DEMO_EMAIL.to_string(),
                password: DEMO_PASSWORD.to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.user.email, DEMO_EMAIL);

        let user = auth.verify(&response.token).await.unwrap();
        assert_eq!(user.id, response.user.id);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let auth = service();
        auth.seed_demo_user().await.unwrap();

        let bad_password = auth
            .login(LoginRequest {
                email: DEMO_EMAIL.to_string(),
                password: "wrong-password".to_string(),
            })
            .await
            .unwrap_err();
        let unknown = auth
            .login(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: DEMO_PASSWORD.to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(bad_password, AuthError::InvalidCredentials);
        assert_eq!(unknown, AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn register_then_login() {
        let auth = service();
        let registered = auth
            .register(register_req("Giulia", " Giulia@Example.com ", "supersecret"))
            .await
            .unwrap();
        assert_eq!(registered.user.email, "giulia@example.com");

        let login = auth
            .login(LoginRequest {
                email: "giulia@example.com".to_string(),
                password: "supersecret".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(login.user.id, registered.user.id);
    }

    #[tokio::test]
    async fn duplicate_registration_fails() {
        let auth = service();
        auth.register(register_req("Ana", "ana@example.com", "password1"))
            .await
            .unwrap();
        let err = auth
            .register(register_req("Ana B", "ANA@example.com", "password2"))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::AlreadyExists);
    }

    #[tokio::test]
    async fn registration_validation() {
        let auth = service();
        for (name, email, password) in [
            ("A", "a@example.com", "password1"),
            ("Ana", "not-an-email", "password1"),
            ("Ana", "ana@localhost", "password1"),
            ("Ana", "ana@example.com", "short"),
        ] {
            let err = auth
                .register(register_req(name, email, password))
                .await
                .unwrap_err();
            assert!(matches!(err, AuthError::Validation(_)), "{name} {email}");
        }
    }

    #[tokio::test]
    async fn verify_rejects_garbage() {
        let auth = service();
        assert_eq!(
            auth.verify("garbage").await.unwrap_err(),
            AuthError::InvalidToken
        );
    }
}
