use super::*;

/// Tests creating a cover request.
///
/// Expected: Ok with the shift and coverer ids stored
#[tokio::test]
async fn creates_cover_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, shift) = factory::helpers::create_shift_with_assignee(db).await?;
    let coverer = factory::user::create_user(db).await?;

    let repo = CoverRequestRepository::new(db);
    let request = repo.create(shift.id, coverer.id).await?;

    assert_eq!(request.shift_id, shift.id);
    assert_eq!(request.coverer_id, coverer.id);

    Ok(())
}

/// Tests foreign key constraint on shift_id.
///
/// Expected: Err(DbErr) for a shift that does not exist
#[tokio::test]
async fn fails_for_nonexistent_shift() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coverer = factory::user::create_user(db).await?;

    let repo = CoverRequestRepository::new(db);
    let result = repo.create(999999, coverer.id).await;

    assert!(result.is_err());

    Ok(())
}
