// src/auth/mod.rs
// Accounts, password hashing and signed session tokens

pub mod error;
pub mod jwt;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;

pub use error::{AuthError, AuthResult};
pub use jwt::{Claims, TokenIssuer};
pub use models::{AuthResponse, LoginRequest, RegisterRequest, User};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::{AuthService, DEMO_EMAIL, DEMO_PASSWORD};
