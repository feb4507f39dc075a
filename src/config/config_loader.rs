use anyhow::Result;

use super::config_model::{DotEnvyConfig, Session, Storage};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let storage = Storage {
        data_file: std::env::var("BOX_DATA_FILE")
            .unwrap_or_else(|_| "box-training-data.json".to_string())
            .into(),
    };

    let session = Session {
        token_key: std::env::var("BOX_TOKEN_KEY")
            .unwrap_or_else(|_| "boxtraining_token".to_string()),
        user_key: std::env::var("BOX_USER_KEY")
            .unwrap_or_else(|_| "boxtraining_user".to_string()),
    };

    Ok(DotEnvyConfig { storage, session })
}
