use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub storage: Storage,
    pub session: Session,
}

/// Location of the JSON snapshot that mirrors the in-memory store.
#[derive(Debug, Clone)]
pub struct Storage {
    pub data_file: PathBuf,
}

/// Keys under which the session token and the logged-in user are kept.
#[derive(Debug, Clone)]
pub struct Session {
    pub token_key: String,
    pub user_key: String,
}
