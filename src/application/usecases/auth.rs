use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{Duration, Utc};
use thiserror::Error;
use tracing::{info, warn};

use crate::application::usecases::{SharedStore, lock};
use crate::config::config_model::Session;
use crate::domain::{
    entities::users::User,
    value_objects::{
        auth::{LoginDto, LoginResponse, MockCredential, MockToken, TokenClaims, TokenHeader},
        enums::user_roles::UserRole,
    },
};
use crate::infrastructure::storage::session::{SessionStore, TOKEN_KEY, USER_KEY};

/// Seconds a freshly issued token stays valid.
pub const TOKEN_TTL_SECONDS: i64 = 86_400;

#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("Credenciales inválidas")]
    InvalidCredentials,
    #[error("Usuario no autenticado")]
    NotAuthenticated,
}

pub type UseCaseResult<T> = Result<T, AuthError>;

/// Demo login flow. Passwords come from the store's fixed per-role table
/// and the issued token is base64 JSON, never signed or verified.
pub struct AuthUseCase {
    store: SharedStore,
    session: Box<dyn SessionStore>,
    token_key: String,
    user_key: String,
}

impl AuthUseCase {
    pub fn new(store: SharedStore, session: Box<dyn SessionStore>) -> Self {
        Self {
            store,
            session,
            token_key: TOKEN_KEY.to_string(),
            user_key: USER_KEY.to_string(),
        }
    }

    /// Same as [`AuthUseCase::new`] but storing the session under the
    /// configured key names instead of the defaults.
    pub fn with_session_keys(
        store: SharedStore,
        session: Box<dyn SessionStore>,
        keys: Session,
    ) -> Self {
        Self {
            store,
            session,
            token_key: keys.token_key,
            user_key: keys.user_key,
        }
    }

    pub fn login(&self, dto: LoginDto) -> UseCaseResult<LoginResponse> {
        let store = lock(&self.store);

        let user = store
            .get_users()
            .into_iter()
            .find(|user| user.email.eq_ignore_ascii_case(&dto.email))
            .ok_or(AuthError::InvalidCredentials)?;

        let expected = store
            .get_mock_passwords()
            .get(&user.role)
            .cloned()
            .ok_or(AuthError::InvalidCredentials)?;
        if dto.password != expected {
            warn!(email = %dto.email, "auth: wrong password");
            return Err(AuthError::InvalidCredentials);
        }
        drop(store);

        let token = issue_token(&user);
        let logged_in = User {
            token: Some(token.clone()),
            last_access: Some(Utc::now()),
            ..user
        };

        self.session.set(&self.token_key, &token);
        if let Ok(serialized) = serde_json::to_string(&logged_in) {
            self.session.set(&self.user_key, &serialized);
        }

        info!(user_id = %logged_in.id, role = %logged_in.role, "auth: login");
        Ok(LoginResponse {
            user: logged_in,
            token,
            expires_in: TOKEN_TTL_SECONDS,
        })
    }

    pub fn logout(&self) {
        self.session.remove(&self.token_key);
        self.session.remove(&self.user_key);
        info!("auth: logout");
    }

    pub fn token(&self) -> Option<String> {
        self.session.get(&self.token_key)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// The stored user record, or `None` when nobody is logged in or the
    /// stored record cannot be parsed.
    pub fn current_user(&self) -> Option<User> {
        let serialized = self.session.get(&self.user_key)?;
        match serde_json::from_str(&serialized) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!(error = ?err, "auth: stored user record is corrupt");
                None
            }
        }
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.current_user().is_some_and(|user| user.role == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(UserRole::Administrator)
    }

    pub fn is_student(&self) -> bool {
        self.has_role(UserRole::Student)
    }

    pub fn is_instructor(&self) -> bool {
        self.has_role(UserRole::Instructor)
    }

    /// Re-issues a token for the logged-in user, resetting its expiry.
    pub fn refresh_token(&self) -> UseCaseResult<String> {
        let user = self.current_user().ok_or(AuthError::NotAuthenticated)?;

        let token = issue_token(&user);
        self.session.set(&self.token_key, &token);

        let refreshed = User {
            token: Some(token.clone()),
            ..user
        };
        if let Ok(serialized) = serde_json::to_string(&refreshed) {
            self.session.set(&self.user_key, &serialized);
        }

        info!(user_id = %refreshed.id, "auth: token refreshed");
        Ok(token)
    }

    /// Demo credentials shown on the login screen.
    pub fn mock_credentials(&self) -> Vec<MockCredential> {
        lock(&self.store).get_mock_credentials()
    }
}

fn issue_token(user: &User) -> String {
    let now = Utc::now();
    let token = MockToken {
        header: TokenHeader {
            alg: "HS256".to_string(),
            typ: "JWT".to_string(),
        },
        payload: TokenClaims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(TOKEN_TTL_SECONDS)).timestamp(),
        },
    };

    // serializing a struct of plain fields cannot fail
    let json = serde_json::to_string(&token).unwrap_or_default();
    STANDARD.encode(json)
}

/// Decodes a token issued by [`issue_token`]. `None` for anything that is
/// not base64-wrapped token JSON.
pub fn decode_token(token: &str) -> Option<MockToken> {
    let bytes = STANDARD.decode(token).ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::datastore::DataStore;
    use crate::infrastructure::storage::session::MemorySessionStore;
    use crate::infrastructure::storage::snapshot::MemorySnapshotStore;

    fn usecase() -> AuthUseCase {
        let store = DataStore::new(Box::new(MemorySnapshotStore::default()));
        AuthUseCase::new(
            Arc::new(Mutex::new(store)),
            Box::new(MemorySessionStore::default()),
        )
    }

    fn admin_login() -> LoginDto {
        LoginDto {
            email: "admin@boxtraining.com".to_string(),
            password: "admin123".to_string(),
        }
    }

    #[test]
    fn login_issues_a_decodable_token_and_stores_the_session() {
        let auth = usecase();
        assert!(!auth.is_authenticated());

        let response = auth.login(admin_login()).unwrap();
        assert_eq!(response.expires_in, TOKEN_TTL_SECONDS);
        assert!(auth.is_authenticated());
        assert_eq!(auth.token().as_deref(), Some(response.token.as_str()));

        let decoded = decode_token(&response.token).unwrap();
        assert_eq!(decoded.header.alg, "HS256");
        assert_eq!(decoded.header.typ, "JWT");
        assert_eq!(decoded.payload.email, "admin@boxtraining.com");
        assert_eq!(decoded.payload.role, UserRole::Administrator);
        assert_eq!(
            decoded.payload.exp - decoded.payload.iat,
            TOKEN_TTL_SECONDS
        );

        let current = auth.current_user().unwrap();
        assert_eq!(current.email, "admin@boxtraining.com");
        assert!(current.last_access.is_some());
        assert!(auth.is_admin());
        assert!(!auth.is_student());
    }

    #[test]
    fn login_rejects_wrong_password_and_unknown_email() {
        let auth = usecase();

        assert_eq!(
            auth.login(LoginDto {
                email: "admin@boxtraining.com".to_string(),
                password: "wrong".to_string(),
            })
            .unwrap_err(),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            auth.login(LoginDto {
                email: "nobody@boxtraining.com".to_string(),
                password: "admin123".to_string(),
            })
            .unwrap_err(),
            AuthError::InvalidCredentials
        );
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn student_logins_use_the_student_role_password() {
        let auth = usecase();
        let response = auth
            .login(LoginDto {
                email: "ana.silva@email.com".to_string(),
                password: "student123".to_string(),
            })
            .unwrap();

        assert_eq!(response.user.role, UserRole::Student);
        assert!(auth.is_student());
    }

    #[test]
    fn logout_clears_the_session() {
        let auth = usecase();
        auth.login(admin_login()).unwrap();

        auth.logout();
        assert!(!auth.is_authenticated());
        assert!(auth.current_user().is_none());
        assert_eq!(auth.refresh_token().unwrap_err(), AuthError::NotAuthenticated);
    }

    #[test]
    fn refresh_replaces_the_stored_token() {
        let auth = usecase();
        let first = auth.login(admin_login()).unwrap().token;

        let refreshed = auth.refresh_token().unwrap();
        assert_eq!(auth.token().as_deref(), Some(refreshed.as_str()));

        let before = decode_token(&first).unwrap();
        let after = decode_token(&refreshed).unwrap();
        assert_eq!(before.payload.sub, after.payload.sub);
        assert!(after.payload.iat >= before.payload.iat);
    }

    #[test]
    fn configured_session_keys_replace_the_defaults() {
        let backing = MemorySessionStore::default();
        let store = DataStore::new(Box::new(MemorySnapshotStore::default()));
        let auth = AuthUseCase::with_session_keys(
            Arc::new(Mutex::new(store)),
            Box::new(backing.clone()),
            Session {
                token_key: "studio_token".to_string(),
                user_key: "studio_user".to_string(),
            },
        );

        auth.login(admin_login()).unwrap();
        assert!(backing.get("studio_token").is_some());
        assert!(backing.get("studio_user").is_some());
        assert!(backing.get(TOKEN_KEY).is_none());
        assert!(auth.is_authenticated());

        auth.logout();
        assert!(backing.get("studio_token").is_none());
        assert!(backing.get("studio_user").is_none());
    }

    #[test]
    fn mock_credentials_match_the_seeded_logins() {
        let auth = usecase();
        let credentials = auth.mock_credentials();
        assert_eq!(credentials.len(), 4);

        for credential in credentials {
            auth.login(LoginDto {
                email: credential.email,
                password: credential.password,
            })
            .unwrap();
        }
    }

    #[test]
    fn garbage_tokens_do_not_decode() {
        assert!(decode_token("not base64 at all!").is_none());
        assert!(decode_token(&STANDARD.encode("{\"not\":\"a token\"}")).is_none());
    }
}
