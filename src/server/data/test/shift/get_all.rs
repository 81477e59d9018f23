use super::*;

/// Tests fetching all shifts.
///
/// Expected: Ok with every inserted shift returned
#[tokio::test]
async fn returns_all_shifts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::shift::create_shift(db, user.id).await?;
    factory::shift::create_shift(db, user.id).await?;
    factory::shift::create_shift(db, user.id).await?;

    let repo = ShiftRepository::new(db);
    let shifts = repo.get_all().await?;

    assert_eq!(shifts.len(), 3);

    Ok(())
}

/// Tests fetching all shifts from an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_shifts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ShiftRepository::new(db);
    let shifts = repo.get_all().await?;

    assert!(shifts.is_empty());

    Ok(())
}
