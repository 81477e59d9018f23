use super::*;

use crate::server::data::cover_request::CoverRequestRepository;

/// Tests withdrawing an existing cover request.
///
/// Expected: the caller's request is gone, others survive
#[tokio::test]
async fn removes_only_the_callers_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, shift) = factory::helpers::create_shift_with_assignee(db).await.unwrap();
    let caller = factory::user::create_user(db).await.unwrap();

    factory::cover_request::create_cover_request(db, shift.id, caller.id)
        .await
        .unwrap();
    factory::cover_request::create_cover_request(db, shift.id, owner.id)
        .await
        .unwrap();

    let service = ShiftService::new(db);
    service.withdraw_cover(shift.id, &caller).await?;

    let repository = CoverRequestRepository::new(db);
    assert!(repository.get_by_coverer(caller.id).await?.is_empty());
    assert_eq!(repository.get_by_coverer(owner.id).await?.len(), 1);

    Ok(())
}

/// Tests withdrawing when no request exists.
///
/// Expected: Ok, the call is idempotent
#[tokio::test]
async fn succeeds_when_nothing_to_withdraw() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, shift) = factory::helpers::create_shift_with_assignee(db).await.unwrap();
    let caller = factory::user::create_user(db).await.unwrap();

    let service = ShiftService::new(db);
    service.withdraw_cover(shift.id, &caller).await?;
    service.withdraw_cover(shift.id, &caller).await?;

    Ok(())
}
