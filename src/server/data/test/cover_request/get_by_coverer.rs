use super::*;

/// Tests listing cover requests by coverer.
///
/// Expected: only the coverer's own requests are returned
#[tokio::test]
async fn returns_only_coverers_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shift_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, shift_a) = factory::helpers::create_shift_with_assignee(db).await?;
    let shift_b = factory::shift::create_shift(db, user.id).await?;
    let coverer = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    factory::cover_request::create_cover_request(db, shift_a.id, coverer.id).await?;
    factory::cover_request::create_cover_request(db, shift_b.id, coverer.id).await?;
    factory::cover_request::create_cover_request(db, shift_a.id, other.id).await?;

    let repo = CoverRequestRepository::new(db);
    let requests = repo.get_by_coverer(coverer.id).await?;

    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.coverer_id == coverer.id));

    Ok(())
}
