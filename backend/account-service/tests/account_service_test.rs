/// Signup and login decision tests with mocked collaborators
///
/// Test Coverage:
/// - Signup: new user name, duplicate user name, store failures
/// - Login: success, unknown user, wrong password
/// - Presence validation short-circuits before any collaborator call
use account_service::{
    AccountError, AccountService, ErrorCode, NewUserRecord, PasswordHasher, Result, UserRecord,
    UserStore,
};
use chrono::Utc;
use mockall::mock;
use std::sync::Arc;

// ============================================
// Mock Collaborators
// ============================================

mock! {
    pub Store {}

    #[async_trait::async_trait]
    impl UserStore for Store {
        async fn find_by_user_name(&self, user_name: &str) -> Result<Option<UserRecord>>;
        async fn save(&self, user: NewUserRecord) -> Result<UserRecord>;
    }
}

mock! {
    pub Hasher {}

    impl PasswordHasher for Hasher {
        fn hash_password(&self, password: &str) -> Result<String>;
        fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool>;
    }
}

// ============================================
// Test Helpers
// ============================================

fn user_fixture(user_name: &str, password_hash: &str, id: i64) -> UserRecord {
    UserRecord {
        id,
        user_name: user_name.to_string(),
        password_hash: password_hash.to_string(),
        registered_at: Utc::now(),
    }
}

fn service(store: MockStore, hasher: MockHasher) -> AccountService {
    AccountService::new(Arc::new(store), Arc::new(hasher))
}

// ============================================
// Signup
// ============================================

#[tokio::test]
async fn test_register_new_user_succeeds() {
    let mut store = MockStore::new();
    let mut hasher = MockHasher::new();

    store
        .expect_find_by_user_name()
        .withf(|user_name: &str| user_name == "username")
        .times(1)
        .returning(|_| Ok(None));
    hasher
        .expect_hash_password()
        .withf(|password: &str| password == "password")
        .times(1)
        .returning(|_| Ok("encrypt_password".to_string()));
    store
        .expect_save()
        .withf(|user: &NewUserRecord| {
            user.user_name == "username" && user.password_hash == "encrypt_password"
        })
        .times(1)
        .returning(|user| Ok(user_fixture(&user.user_name, &user.password_hash, 1)));

    let user = service(store, hasher)
        .register("username", "password")
        .await
        .expect("registration should succeed");

    assert_eq!(user.id, 1);
    assert_eq!(user.user_name, "username");
    assert_eq!(user.password_hash, "encrypt_password");
    assert_ne!(user.password_hash, "password");
}

#[tokio::test]
async fn test_register_duplicate_user_name_fails_without_write() {
    let mut store = MockStore::new();
    let mut hasher = MockHasher::new();

    store
        .expect_find_by_user_name()
        .times(1)
        .returning(|user_name| Ok(Some(user_fixture(user_name, "encrypt_password", 1))));
    hasher.expect_hash_password().times(0);
    store.expect_save().times(0);

    let err = service(store, hasher)
        .register("username", "password")
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::DuplicatedUserName);
    assert_eq!(err.user_name(), Some("username"));
}

#[tokio::test]
async fn test_register_propagates_store_lookup_failure() {
    let mut store = MockStore::new();
    let mut hasher = MockHasher::new();

    store
        .expect_find_by_user_name()
        .returning(|user_name| Err(AccountError::store(user_name, "connection refused")));
    hasher.expect_hash_password().times(0);
    store.expect_save().times(0);

    let err = service(store, hasher)
        .register("username", "password")
        .await
        .unwrap_err();

    match err {
        AccountError::Store { user_name, message } => {
            assert_eq!(user_name, "username");
            assert_eq!(message, "connection refused");
        }
        other => panic!("expected store error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_register_surfaces_lost_race_from_store() {
    let mut store = MockStore::new();
    let mut hasher = MockHasher::new();

    store.expect_find_by_user_name().returning(|_| Ok(None));
    hasher
        .expect_hash_password()
        .returning(|_| Ok("encrypt_password".to_string()));
    store.expect_save().times(1).returning(|user| {
        Err(AccountError::DuplicateUserName {
            user_name: user.user_name,
        })
    });

    let err = service(store, hasher)
        .register("username", "password")
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::DuplicatedUserName);
}

#[tokio::test]
async fn test_register_propagates_hashing_failure() {
    let mut store = MockStore::new();
    let mut hasher = MockHasher::new();

    store.expect_find_by_user_name().returning(|_| Ok(None));
    hasher
        .expect_hash_password()
        .returning(|_| Err(AccountError::PasswordHashing("out of memory".to_string())));
    store.expect_save().times(0);

    let err = service(store, hasher)
        .register("username", "password")
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::PasswordHashing);
}

#[tokio::test]
async fn test_register_rejects_empty_credentials() {
    let mut store = MockStore::new();
    let mut hasher = MockHasher::new();
    store.expect_find_by_user_name().times(0);
    store.expect_save().times(0);
    hasher.expect_hash_password().times(0);

    let service = service(store, hasher);

    let err = service.register("", "password").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInput);

    let err = service.register("username", "").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInput);
}

// ============================================
// Login
// ============================================

#[tokio::test]
async fn test_authenticate_with_correct_password_succeeds() {
    let mut store = MockStore::new();
    let mut hasher = MockHasher::new();

    store
        .expect_find_by_user_name()
        .withf(|user_name: &str| user_name == "username")
        .returning(|user_name| Ok(Some(user_fixture(user_name, "encrypt_password", 1))));
    hasher
        .expect_verify_password()
        .withf(|password: &str, hash: &str| password == "password" && hash == "encrypt_password")
        .times(1)
        .returning(|_, _| Ok(true));
    store.expect_save().times(0);

    let user = service(store, hasher)
        .authenticate("username", "password")
        .await
        .expect("login should succeed");

    assert_eq!(user.id, 1);
    assert_eq!(user.user_name, "username");
}

#[tokio::test]
async fn test_authenticate_unknown_user_fails() {
    let mut store = MockStore::new();
    let mut hasher = MockHasher::new();

    store.expect_find_by_user_name().returning(|_| Ok(None));
    hasher.expect_verify_password().times(0);

    let err = service(store, hasher)
        .authenticate("userName", "password")
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::UserNotFound);
    assert_eq!(err.user_name(), Some("userName"));
}

#[tokio::test]
async fn test_authenticate_wrong_password_fails() {
    let mut store = MockStore::new();
    let mut hasher = MockHasher::new();

    store
        .expect_find_by_user_name()
        .returning(|user_name| Ok(Some(user_fixture(user_name, "encrypt_password", 1))));
    hasher
        .expect_verify_password()
        .withf(|password: &str, _hash: &str| password == "password2")
        .returning(|_, _| Ok(false));

    let err = service(store, hasher)
        .authenticate("username", "password2")
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::InvalidPassword);
    assert_eq!(err.user_name(), Some("username"));
}

#[tokio::test]
async fn test_authenticate_propagates_store_failure() {
    let mut store = MockStore::new();
    let mut hasher = MockHasher::new();

    store
        .expect_find_by_user_name()
        .returning(|user_name| Err(AccountError::store(user_name, "pool timed out")));
    hasher.expect_verify_password().times(0);

    let err = service(store, hasher)
        .authenticate("username", "password")
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::StoreError);
}
