use super::*;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

async fn context_with_tables() -> TestContext {
    let mut test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    // Force session initialization alongside the database.
    test.session().await.unwrap();
    test
}

/// Tests that an unauthenticated session is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() {
    let test = context_with_tables().await;
    let (db, session) = (test.db.as_ref().unwrap(), test.session.as_ref().unwrap());

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}

/// Tests that a logged-in member passes the guard without permissions.
///
/// Expected: Ok with the stored user
#[tokio::test]
async fn resolves_session_user() {
    let test = context_with_tables().await;
    let (db, session) = (test.db.as_ref().unwrap(), test.session.as_ref().unwrap());

    let user = factory::create_member(db).await.unwrap();
    AuthSession::new(session).set_user_id(user.id).await.unwrap();

    let resolved = AuthGuard::new(db, session).require(&[]).await.unwrap();

    assert_eq!(resolved.id, user.id);
}

/// Tests that the admin permission is enforced.
///
/// Expected: Err(AuthError::AccessDenied) for members, Ok for admins
#[tokio::test]
async fn enforces_admin_permission() {
    let test = context_with_tables().await;
    let (db, session) = (test.db.as_ref().unwrap(), test.session.as_ref().unwrap());

    let member = factory::create_member(db).await.unwrap();
    AuthSession::new(session)
        .set_user_id(member.id)
        .await
        .unwrap();

    let denied = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let admin = factory::create_admin(db).await.unwrap();
    AuthSession::new(session).set_user_id(admin.id).await.unwrap();

    let allowed = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;
    assert!(allowed.is_ok());
}
