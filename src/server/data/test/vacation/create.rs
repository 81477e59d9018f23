use super::*;

/// Tests creating a vacation request.
///
/// Expected: Ok with the supplied range stored and status Pending
#[tokio::test]
async fn creates_pending_vacation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let today = Utc::now().date_naive();

    let repo = VacationRepository::new(db);
    let vacation = repo
        .create(CreateVacationParams {
            employee_id: user.id,
            start_date: today + Duration::days(1),
            end_date: today + Duration::days(7),
        })
        .await?;

    assert_eq!(vacation.employee_id, user.id);
    assert_eq!(vacation.start_date, today + Duration::days(1));
    assert_eq!(vacation.end_date, today + Duration::days(7));
    assert_eq!(vacation.status, VacationStatus::Pending);

    Ok(())
}

/// Tests foreign key constraint on employee_id.
///
/// Expected: Err(DbErr) for an employee that does not exist
#[tokio::test]
async fn fails_for_nonexistent_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let today = Utc::now().date_naive();

    let repo = VacationRepository::new(db);
    let result = repo
        .create(CreateVacationParams {
            employee_id: 999999,
            start_date: today + Duration::days(1),
            end_date: today + Duration::days(7),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
