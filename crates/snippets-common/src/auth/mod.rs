//! Authentication utilities

mod api_token;
mod jwt;
mod password;

pub use api_token::{generate_token_key, parse_token_header, TOKEN_SCHEME};
pub use jwt::{Claims, JwtService, TokenPair, TokenType};
pub use password::{
    hash_password, validate_password_strength, verify_password, PasswordService,
    MIN_PASSWORD_LENGTH, UNUSABLE_PASSWORD,
};
