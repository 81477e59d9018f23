use super::*;

/// Tests creating a vacation with a valid future range.
///
/// Expected: Ok, pending status, employee id taken from the caller
#[tokio::test]
async fn creates_pending_vacation_for_caller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::user::create_user(db).await.unwrap();

    let today = Utc::now().date_naive();
    let start = today + Duration::days(3);
    let end = today + Duration::days(10);

    let service = VacationService::new(db);
    let vacation = service.create(start, end, &caller).await?;

    assert_eq!(vacation.employee_id, caller.id);
    assert_eq!(vacation.start_date, start);
    assert_eq!(vacation.end_date, end);
    assert_eq!(vacation.status, VacationStatus::Pending);

    Ok(())
}

/// Tests a range where the start does not precede the end.
///
/// Expected: BadRequest for both equal and inverted ranges
#[tokio::test]
async fn rejects_start_not_before_end() {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::user::create_user(db).await.unwrap();

    let today = Utc::now().date_naive();
    let service = VacationService::new(db);

    let result = service
        .create(today + Duration::days(5), today + Duration::days(5), &caller)
        .await;
    assert_bad_request(
        result,
        "The vacation's start date must be before the end date.",
    );

    let result = service
        .create(today + Duration::days(9), today + Duration::days(5), &caller)
        .await;
    assert_bad_request(
        result,
        "The vacation's start date must be before the end date.",
    );
}

/// Tests a range starting before today.
///
/// Expected: BadRequest
#[tokio::test]
async fn rejects_start_in_the_past() {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::user::create_user(db).await.unwrap();

    let today = Utc::now().date_naive();
    let service = VacationService::new(db);
    let result = service
        .create(today - Duration::days(1), today + Duration::days(5), &caller)
        .await;

    assert_bad_request(result, "You can not create a vacation in the past.");
}

/// Tests a range starting today.
///
/// Expected: Ok, today is not in the past
#[tokio::test]
async fn accepts_start_today() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::user::create_user(db).await.unwrap();

    let today = Utc::now().date_naive();
    let service = VacationService::new(db);
    let vacation = service
        .create(today, today + Duration::days(2), &caller)
        .await?;

    assert_eq!(vacation.start_date, today);

    Ok(())
}
