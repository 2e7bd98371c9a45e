//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, BootstrapStaffConfig, ConfigError, CorsConfig, DatabaseConfig,
    Environment, HighlightConfig, JwtConfig, PaginationConfig, RateLimitConfig, ServerConfig,
};
