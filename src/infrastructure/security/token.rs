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

/// Authority block of every viewer token. Capability `right` facts are appended per subject.
const VIEWER_BLOCK: &str = r#"
user({uid}, {uname});
role({urole});
issued_at({issued});
expires_at({exp});
token_type("viewer");
check if time($now), $now >= {issued};
check if time($now), $now <= {exp};
check if token_type("viewer");
"#;

/// Viewer tokens signed with an Ed25519 root key.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(infra)?;
        let root = KeyPair::from(&private);

        Ok(Self {
            public: root.public(),
            root: Arc::new(root),
            ttl,
        })
    }

    fn window(&self) -> ApplicationResult<ValidityWindow> {
        let issued = SystemTime::now();
        let expires = issued
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        Ok(ValidityWindow { issued, expires })
    }

    fn sign(&self, subject: &TokenSubject, window: &ValidityWindow) -> ApplicationResult<String> {
        let mut source = String::from(VIEWER_BLOCK);
        for cap in &subject.capabilities {
            source.push_str(&format!(
                "right(\"{}\", \"{}\");\n",
                quote(&cap.resource),
                quote(&cap.action)
            ));
        }

        Biscuit::builder()
            .code_with_params(&source, viewer_params(subject, window), HashMap::new())
            .map_err(infra)?
            .build(self.root.as_ref())
            .map_err(infra)?
            .seal()
            .map_err(infra)?
            .to_base64()
            .map_err(infra)
    }
}

struct ValidityWindow {
    issued: SystemTime,
    expires: SystemTime,
}

fn viewer_params(subject: &TokenSubject, window: &ValidityWindow) -> HashMap<String, Term> {
    HashMap::from([
        ("uid".to_string(), Term::from(i64::from(subject.user_id))),
        ("uname".to_string(), Term::from(subject.username.clone())),
        ("urole".to_string(), Term::from(subject.role.as_str())),
        ("issued".to_string(), Term::from(window.issued)),
        ("exp".to_string(), Term::from(window.expires)),
    ])
}

fn quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn infra<E: std::fmt::Display>(err: E) -> ApplicationError {
    ApplicationError::infrastructure(err.to_string())
}

fn rejected<E: std::fmt::Display>(err: E) -> ApplicationError {
    ApplicationError::unauthorized(err.to_string())
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let window = self.window()?;
        let token = self.sign(&subject, &window)?;
        let expires_in = ChronoDuration::from_std(self.ttl)
            .map(|ttl| ttl.num_seconds())
            .unwrap_or(i64::MAX)
            .max(0);

        Ok(AuthTokenDto {
            token,
            issued_at: DateTime::<Utc>::from(window.issued),
            expires_at: DateTime::<Utc>::from(window.expires),
            expires_in,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public).map_err(rejected)?;

        AuthorizerBuilder::new()
            .time()
            .build(&biscuit)
            .map_err(rejected)?
            .authorize()
            .map_err(rejected)?;

        let (facts, _, _, _) = biscuit.authorizer().map_err(rejected)?.dump();
        super::claims::parse_claims(facts)
    }
}
