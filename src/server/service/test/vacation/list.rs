use super::*;

/// Tests listing with no filters selected.
///
/// Expected: every vacation is returned
#[tokio::test]
async fn returns_everything_without_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::user::create_user(db).await.unwrap();
    let other = factory::user::create_user(db).await.unwrap();
    factory::vacation::create_vacation(db, caller.id).await.unwrap();
    factory::vacation::create_vacation(db, other.id).await.unwrap();

    let service = VacationService::new(db);
    let vacations = service.list(&VacationFilter::default(), &caller).await?;

    assert_eq!(vacations.len(), 2);

    Ok(())
}

/// Tests the status filter.
///
/// Expected: only vacations with the exact status code
#[tokio::test]
async fn status_filters_by_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::user::create_user(db).await.unwrap();

    let approved = factory::vacation::VacationFactory::new(db)
        .employee_id(caller.id)
        .status(VacationStatus::Approved)
        .build()
        .await
        .unwrap();
    factory::vacation::create_vacation(db, caller.id).await.unwrap();

    let service = VacationService::new(db);
    let filter = VacationFilter {
        status: 2,
        ..Default::default()
    };
    let vacations = service.list(&filter, &caller).await?;

    assert_eq!(vacations.len(), 1);
    assert_eq!(vacations[0].id, approved.id);

    Ok(())
}

/// Tests the `mine` filter combined with a status code.
///
/// Expected: only the caller's vacations with that status
#[tokio::test]
async fn mine_and_status_combine_conjunctively() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::user::create_user(db).await.unwrap();
    let other = factory::user::create_user(db).await.unwrap();

    let matching = factory::vacation::VacationFactory::new(db)
        .employee_id(caller.id)
        .status(VacationStatus::Denied)
        .build()
        .await
        .unwrap();
    // Right status, wrong employee
    factory::vacation::VacationFactory::new(db)
        .employee_id(other.id)
        .status(VacationStatus::Denied)
        .build()
        .await
        .unwrap();
    // Right employee, wrong status
    factory::vacation::create_vacation(db, caller.id).await.unwrap();

    let service = VacationService::new(db);
    let filter = VacationFilter {
        status: 3,
        mine: true,
    };
    let vacations = service.list(&filter, &caller).await?;

    assert_eq!(vacations.len(), 1);
    assert_eq!(vacations[0].id, matching.id);

    Ok(())
}

/// Tests a status code that maps to no known status.
///
/// Expected: empty result rather than an error
#[tokio::test]
async fn unknown_status_code_matches_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::user::create_user(db).await.unwrap();
    factory::vacation::create_vacation(db, caller.id).await.unwrap();

    let service = VacationService::new(db);
    let filter = VacationFilter {
        status: 9,
        ..Default::default()
    };
    let vacations = service.list(&filter, &caller).await?;

    assert!(vacations.is_empty());

    Ok(())
}
