use super::*;

/// Tests fetching a shift by primary key.
///
/// Expected: Ok(Some) with the created shift's fields
#[tokio::test]
async fn finds_existing_shift() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let start_time = Utc::now() + Duration::days(2);
    let shift = factory::shift::ShiftFactory::new(db)
        .assigned_id(user.id)
        .start_time(start_time)
        .status(ShiftStatus::NeedsCover)
        .build()
        .await?;

    let repo = ShiftRepository::new(db);
    let found = repo.get_by_id(shift.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.assigned_id, user.id);
    assert_eq!(found.status, ShiftStatus::NeedsCover);
    assert_eq!(found.start_time, start_time);
    assert!(found.coverer_id.is_none());

    Ok(())
}

/// Tests fetching a nonexistent shift id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ShiftRepository::new(db);
    let found = repo.get_by_id(42).await?;

    assert!(found.is_none());

    Ok(())
}
