use super::*;

/// Tests listing an employee's vacations across statuses.
///
/// Expected: all of that employee's vacations, nobody else's
#[tokio::test]
async fn returns_all_statuses_for_the_employee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::user::create_user(db).await.unwrap();
    let other = factory::user::create_user(db).await.unwrap();

    factory::vacation::create_vacation(db, employee.id).await.unwrap();
    factory::vacation::VacationFactory::new(db)
        .employee_id(employee.id)
        .status(VacationStatus::Approved)
        .build()
        .await
        .unwrap();
    factory::vacation::create_vacation(db, other.id).await.unwrap();

    let service = VacationService::new(db);
    let vacations = service.list_by_employee(employee.id).await?;

    assert_eq!(vacations.len(), 2);
    assert!(vacations.iter().all(|v| v.employee_id == employee.id));

    Ok(())
}

/// Tests an employee with no vacations on file.
///
/// Expected: empty list
#[tokio::test]
async fn returns_empty_without_vacations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::user::create_user(db).await.unwrap();

    let service = VacationService::new(db);
    let vacations = service.list_by_employee(employee.id).await?;

    assert!(vacations.is_empty());

    Ok(())
}
