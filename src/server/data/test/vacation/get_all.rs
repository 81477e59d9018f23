use super::*;

/// Tests fetching all vacations.
///
/// Expected: every inserted vacation is returned, across employees
#[tokio::test]
async fn returns_all_vacations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user_a = factory::user::create_user(db).await?;
    let user_b = factory::user::create_user(db).await?;
    factory::vacation::create_vacation(db, user_a.id).await?;
    factory::vacation::create_vacation(db, user_b.id).await?;

    let repo = VacationRepository::new(db);
    let vacations = repo.get_all().await?;

    assert_eq!(vacations.len(), 2);

    Ok(())
}
