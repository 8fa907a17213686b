//! End-to-end user flow scenarios against the in-memory store.

use std::sync::Arc;

use taskgate::domain::{AuthenticatedUser, Role};
use taskgate::store::MemoryUserStore;
use taskgate::user_auth::{TokenService, UserError, UserService, parse_bearer};

const SECRET: &str = "integration-secret";

fn build_service() -> (UserService, Arc<TokenService>) {
    let tokens = Arc::new(TokenService::new(SECRET));
    let service = UserService::new(Arc::new(MemoryUserStore::new()), tokens.clone());
    (service, tokens)
}

fn identity_from_token(tokens: &TokenService, token: &str) -> AuthenticatedUser {
    let claims = tokens.verify(token).expect("token should verify");
    AuthenticatedUser {
        email: claims.email,
        role: claims.role,
    }
}

/// The bootstrap scenario: first user is admin, second is not, the admin
/// promotes the second exactly once.
#[tokio::test]
async fn bootstrap_promote_scenario() {
    let (service, tokens) = build_service();

    let first = service.register("a@x.com", "p").await.unwrap();
    assert_eq!(first.role, Role::Admin);

    let second = service.register("b@x.com", "p").await.unwrap();
    assert_eq!(second.role, Role::User);

    let (token, _) = service.login("a@x.com", "p").await.unwrap();
    let claims = tokens.verify(&token).unwrap();
    assert_eq!(claims.role, Role::Admin);
    assert_eq!(claims.email, "a@x.com");

    let actor = identity_from_token(&tokens, &token);
    service
        .promote(&actor, &second.id.to_string())
        .await
        .expect("first promotion succeeds");

    // Promotion is one-directional and not idempotent-success: promoting an
    // admin again is a distinct, observable failure.
    let err = service
        .promote(&actor, &second.id.to_string())
        .await
        .unwrap_err();
    assert_eq!(err, UserError::AlreadyAdmin);
}

#[tokio::test]
async fn promoted_user_gains_admin_claims_on_next_login() {
    let (service, tokens) = build_service();

    service.register("a@x.com", "p").await.unwrap();
    let second = service.register("b@x.com", "p").await.unwrap();

    // Token issued before promotion carries the old role.
    let (before, _) = service.login("b@x.com", "p").await.unwrap();
    assert_eq!(tokens.verify(&before).unwrap().role, Role::User);

    let admin = AuthenticatedUser {
        email: "a@x.com".to_string(),
        role: Role::Admin,
    };
    service
        .promote(&admin, &second.id.to_string())
        .await
        .unwrap();

    let (after, _) = service.login("b@x.com", "p").await.unwrap();
    assert_eq!(tokens.verify(&after).unwrap().role, Role::Admin);
}

#[tokio::test]
async fn login_failures_are_uniform() {
    let (service, _) = build_service();
    service.register("a@x.com", "p").await.unwrap();

    let wrong_password = service.login("a@x.com", "wrong").await.unwrap_err();
    let unknown_email = service.login("nobody@x.com", "p").await.unwrap_err();

    assert_eq!(wrong_password, UserError::InvalidCredentials);
    assert_eq!(unknown_email, UserError::InvalidCredentials);
}

#[tokio::test]
async fn non_admin_cannot_promote() {
    let (service, _) = build_service();
    service.register("a@x.com", "p").await.unwrap();
    let second = service.register("b@x.com", "p").await.unwrap();

    let actor = AuthenticatedUser {
        email: "b@x.com".to_string(),
        role: Role::User,
    };
    let err = service
        .promote(&actor, &second.id.to_string())
        .await
        .unwrap_err();
    assert_eq!(err, UserError::Forbidden);
}

/// A token that survives the full header round trip still authenticates.
#[tokio::test]
async fn issued_token_round_trips_through_bearer_header() {
    let (service, tokens) = build_service();
    service.register("a@x.com", "p").await.unwrap();
    let (token, _) = service.login("a@x.com", "p").await.unwrap();

    let header = format!("Bearer {token}");
    let extracted = parse_bearer(Some(&header)).unwrap();
    let identity = identity_from_token(&tokens, extracted);
    assert_eq!(identity.role, Role::Admin);
    assert_eq!(identity.email, "a@x.com");
}

#[tokio::test]
async fn token_from_another_secret_is_rejected() {
    let (service, _) = build_service();
    service.register("a@x.com", "p").await.unwrap();

    let foreign = TokenService::new("some-other-secret");
    let forged = foreign.issue("a@x.com", Role::Admin).unwrap();

    let tokens = TokenService::new(SECRET);
    assert!(tokens.verify(&forged).is_err());
}
