//! # snippets-common
//!
//! Shared utilities including configuration, error handling, authentication,
//! telemetry and syntax highlighting.

pub mod auth;
pub mod config;
pub mod error;
pub mod highlight;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    generate_token_key, hash_password, parse_token_header, validate_password_strength,
    verify_password, Claims, JwtService, PasswordService, TokenPair, TokenType, UNUSABLE_PASSWORD,
};
pub use config::{
    AppConfig, AppSettings, BootstrapStaffConfig, ConfigError, CorsConfig, DatabaseConfig,
    Environment, HighlightConfig, JwtConfig, PaginationConfig, RateLimitConfig, ServerConfig,
};
pub use error::{AppError, AppResult};
pub use highlight::SyntectRenderer;
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
