use super::*;

/// Tests withdrawing an existing cover request.
///
/// Expected: Ok(1) and the row is gone
#[tokio::test]
async fn deletes_existing_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, shift) = factory::helpers::create_shift_with_assignee(db).await?;
    let coverer = factory::user::create_user(db).await?;
    factory::cover_request::create_cover_request(db, shift.id, coverer.id).await?;

    let repo = CoverRequestRepository::new(db);
    let deleted = repo.delete_by_shift_and_coverer(shift.id, coverer.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.get_by_coverer(coverer.id).await?.is_empty());

    Ok(())
}

/// Tests that deletion is idempotent.
///
/// Expected: Ok(0) when no matching request exists
#[tokio::test]
async fn succeeds_when_no_request_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, shift) = factory::helpers::create_shift_with_assignee(db).await?;
    let coverer = factory::user::create_user(db).await?;

    let repo = CoverRequestRepository::new(db);
    let deleted = repo.delete_by_shift_and_coverer(shift.id, coverer.id).await?;

    assert_eq!(deleted, 0);

    Ok(())
}

/// Tests that only the caller's own request is removed.
///
/// Expected: another coverer's request for the same shift survives
#[tokio::test]
async fn leaves_other_coverers_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, shift) = factory::helpers::create_shift_with_assignee(db).await?;
    let coverer = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::cover_request::create_cover_request(db, shift.id, coverer.id).await?;
    factory::cover_request::create_cover_request(db, shift.id, other.id).await?;

    let repo = CoverRequestRepository::new(db);
    repo.delete_by_shift_and_coverer(shift.id, coverer.id).await?;

    assert_eq!(repo.get_by_coverer(other.id).await?.len(), 1);

    Ok(())
}
