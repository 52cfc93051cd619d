/// アプリケーション名. ヘッダとタイトルに使う.
pub const APP_TITLE: &str = "Company Supervisor";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_COMPANY_ID: i64 = 1;
/// 認証情報のプレースホルダ. `account:secret` の形.
pub const PLACEHOLDER_AUTH_TOKEN: &str = "supervisor@example.com:placeholder";

pub const CORS_ALLOWED_ORIGINS: [&str; 0] = [];

pub const TIMEOUT_DURATION: u64 = 30;
