use std::sync::Arc;

use argon2::{password_hash::{PasswordHasher, PasswordVerifier, SaltString}, Argon2, PasswordHash};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::domain::{AuthAccount, AuthSession, LoginInput, RegisterInput};
use super::errors::AuthError;
use super::repository::AuthRepository;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
}

/// Bearer token claims: `sub` carries the account id.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    /// Register a new account with a hashed password and sign it in.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig { jwt_secret: "secret".into(), token_ttl_minutes: 60 });
    /// let input = RegisterInput { email: "user@example.com".into(), password: "123".into() };
    /// let session = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(session.account.email, "user@example.com");
    /// assert!(!session.token.is_empty());
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthSession, AuthError> {
        if input.email.trim().is_empty() || !input.email.contains('@') {
            return Err(AuthError::Validation("invalid email".into()));
        }
        if input.password.is_empty() {
            return Err(AuthError::Validation("password required".into()));
        }
        if let Some(existing) = self.repo.find_by_email(&input.email).await? {
            debug!("account exists: {}", existing.email);
            return Err(AuthError::Conflict);
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashError(e.to_string()))?
            .to_string();

        let record = self.repo.create_account(&input.email, &hash).await?;
        info!(account_id = %record.id, email = %record.email, "account_registered");

        let account: AuthAccount = record.into();
        let token = self.issue_token(&account)?;
        Ok(AuthSession { account, token })
    }

    /// Authenticate an account and issue a token.
    ///
    /// A missing account and a failed hash comparison are indistinguishable
    /// to the caller; both yield [`AuthError::Unauthorized`].
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::{RegisterInput, LoginInput};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig { jwt_secret: "secret".into(), token_ttl_minutes: 60 });
    /// let _ = tokio_test::block_on(svc.register(RegisterInput { email: "u@e.com".into(), password: "123".into() }));
    /// let session = tokio_test::block_on(svc.login(LoginInput { email: "u@e.com".into(), password: "123".into() })).unwrap();
    /// assert_eq!(session.account.email, "u@e.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let record = self.repo
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let parsed = PasswordHash::new(&record.password_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            return Err(AuthError::Unauthorized);
        }

        let account: AuthAccount = record.into();
        let token = self.issue_token(&account)?;
        Ok(AuthSession { account, token })
    }

    /// Validate signature and expiry, resolving the caller's account id.
    /// Any malformed, expired or mis-signed token yields `Unauthorized`.
    pub fn verify_token(&self, token: &str) -> Result<i64, AuthError> {
        let key = DecodingKey::from_secret(self.cfg.jwt_secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        let data = decode::<Claims>(token, &key, &validation).map_err(|_| AuthError::Unauthorized)?;
        data.claims.sub.parse::<i64>().map_err(|_| AuthError::Unauthorized)
    }

    fn issue_token(&self, account: &AuthAccount) -> Result<String, AuthError> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::minutes(self.cfg.token_ttl_minutes);
        let claims = Claims {
            sub: account.id.to_string(),
            email: account.email.clone(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        };
        encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(self.cfg.jwt_secret.as_bytes()))
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repository::mock::MockAuthRepository;

    fn svc() -> AuthService<MockAuthRepository> {
        AuthService::new(
            Arc::new(MockAuthRepository::default()),
            AuthConfig { jwt_secret: "test-secret".into(), token_ttl_minutes: 60 },
        )
    }

    #[tokio::test]
    async fn register_then_login_round_trip() {
        let svc = svc();
        let session = svc
            .register(RegisterInput { email: "email@email.com".into(), password: "123".into() })
            .await
            .expect("register");
        assert_eq!(svc.verify_token(&session.token).unwrap(), session.account.id);

        let session = svc
            .login(LoginInput { email: "email@email.com".into(), password: "123".into() })
            .await
            .expect("login");
        assert_eq!(session.account.email, "email@email.com");
        assert_eq!(svc.verify_token(&session.token).unwrap(), session.account.id);
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let svc = svc();
        let input = RegisterInput { email: "dup@email.com".into(), password: "123".into() };
        svc.register(input.clone()).await.expect("first register");
        let err = svc.register(input).await.unwrap_err();
        assert!(matches!(err, AuthError::Conflict));
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized_not_distinguishing() {
        let svc = svc();
        svc.register(RegisterInput { email: "a@b.com".into(), password: "right".into() })
            .await
            .expect("register");

        let wrong = svc.login(LoginInput { email: "a@b.com".into(), password: "wrong".into() }).await;
        assert!(matches!(wrong.unwrap_err(), AuthError::Unauthorized));

        // Unknown email yields the same error class
        let unknown = svc.login(LoginInput { email: "nobody@b.com".into(), password: "right".into() }).await;
        assert!(matches!(unknown.unwrap_err(), AuthError::Unauthorized));
    }

    #[tokio::test]
    async fn tampered_and_missigned_tokens_rejected() {
        let svc = svc();
        let session = svc
            .register(RegisterInput { email: "t@b.com".into(), password: "123".into() })
            .await
            .expect("register");

        let mut tampered = session.token.clone();
        tampered.push('x');
        assert!(matches!(svc.verify_token(&tampered).unwrap_err(), AuthError::Unauthorized));
        assert!(matches!(svc.verify_token("not-a-jwt").unwrap_err(), AuthError::Unauthorized));

        let other = AuthService::new(
            Arc::new(MockAuthRepository::default()),
            AuthConfig { jwt_secret: "another-secret".into(), token_ttl_minutes: 60 },
        );
        assert!(matches!(other.verify_token(&session.token).unwrap_err(), AuthError::Unauthorized));
    }

    #[tokio::test]
    async fn expired_token_rejected() {
        // TTL far enough in the past to clear the decoder's leeway window
        let svc = AuthService::new(
            Arc::new(MockAuthRepository::default()),
            AuthConfig { jwt_secret: "test-secret".into(), token_ttl_minutes: -10 },
        );
        let session = svc
            .register(RegisterInput { email: "old@b.com".into(), password: "123".into() })
            .await
            .expect("register");
        assert!(matches!(svc.verify_token(&session.token).unwrap_err(), AuthError::Unauthorized));
    }

    #[tokio::test]
    async fn empty_credentials_rejected() {
        let svc = svc();
        let err = svc.register(RegisterInput { email: "".into(), password: "123".into() }).await.unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
        let err = svc.register(RegisterInput { email: "a@b.com".into(), password: "".into() }).await.unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }
}
