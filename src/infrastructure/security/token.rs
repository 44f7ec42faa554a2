// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Access-token code. The caveats make the token unusable before
/// `issued_at` and after `expires_at`.
const ACCESS_TOKEN_CODE: &str = r#"
    user({uid});
    issued_at({issued});
    expires_at({exp});
    token_type("access");
    check if time($now), $now >= {issued};
    check if time($now), $now <= {exp};
    check if token_type("access");
"#;

const AUTHORIZER_POLICY: &str = "allow if user($id);";

#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }
}

fn access_token_params(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> HashMap<String, Term> {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("uid".to_string(), i64::from(subject.user_id).into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());
    params
}

fn ttl_to_expires_in_seconds(ttl: Duration) -> i64 {
    ChronoDuration::from_std(ttl)
        .map(|d| d.num_seconds())
        .unwrap_or(i64::MAX)
        .max(0)
}

fn build_and_serialize_biscuit(
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> Result<String, ApplicationError> {
    let token = Biscuit::builder()
        .code_with_params(ACCESS_TOKEN_CODE, params, HashMap::new())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .build(root)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    token
        .seal()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .to_base64()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let params = access_token_params(&subject, issued_at, expires_at);

        let serialized = build_and_serialize_biscuit(params, self.root.as_ref())?;

        Ok(AuthTokenDto {
            token: serialized,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: ttl_to_expires_in_seconds(self.ttl),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let mut authorizer = AuthorizerBuilder::new()
            .code(AUTHORIZER_POLICY)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .time()
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let view = biscuit
            .authorizer()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
        let (facts, _, _, _) = view.dump();
        crate::infrastructure::security::claims::parse_claims(facts)
    }
}
