pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(windows))]
pub const EXEC_NAME: &str = "staffdir";
#[cfg(windows)]
pub const EXEC_NAME: &str = "staffdir.exe";

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

pub const API_URL_ENV: &str = "STAFFDIR_API_URL";
pub const TOKEN_ENV: &str = "STAFFDIR_TOKEN";

pub const AUTH_STORE_PATH: &str = ".staffdir/auth.json";
pub const CONTEXT_STORE_PATH: &str = ".staffdir/context.json";
