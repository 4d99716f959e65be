/// Password hashing and verification using Argon2id
use crate::config::PasswordSettings;
use crate::error::{AccountError, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

/// One-way password hasher used by the account service
///
/// Implementations must never return the plaintext from `hash_password`.
pub trait PasswordHasher: Send + Sync {
    /// Produce a storable digest of `password`
    fn hash_password(&self, password: &str) -> Result<String>;

    /// Check `password` against a digest produced by `hash_password`
    ///
    /// `Ok(false)` means the password does not match; `Err` is reserved for
    /// digests that cannot be processed at all.
    fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool>;
}

/// Argon2id hasher emitting PHC-formatted strings
///
/// ## Security
///
/// - Algorithm: Argon2id, version 0x13
/// - Salt: Random 16-byte salt generated per password
/// - Verification reads parameters from the stored hash, so cost changes
///   do not invalidate existing digests
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new(settings: &PasswordSettings) -> Result<Self> {
        let params = Params::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
            None,
        )
        .map_err(|e| AccountError::PasswordHashing(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AccountError::PasswordHashing(format!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(password_hash)
    }

    fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(password_hash).map_err(|e| {
            AccountError::PasswordHashing(format!("Invalid password hash format: {}", e))
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(_) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AccountError::PasswordHashing(format!(
                "Password verification failed: {}",
                e
            ))),
        }
    }
}
