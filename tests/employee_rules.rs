//! Rule-engine behavior against a real (in-memory) store.

mod common;

use chrono::Local;
use staff_server::db::models::Role;
use staff_server::db::repository::{RepoError, employee};

#[tokio::test]
async fn create_persists_and_assigns_id() {
    let pool = common::test_pool().await;

    let created = employee::create(&pool, common::manager("35642145685"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.cpf, "35642145685");
    assert_eq!(created.dismissal_date, None);

    let all = employee::find_all(&pool).await.unwrap();
    assert_eq!(all.len(), 1);

    let found = employee::find_by_cpf(&pool, "35642145685").await.unwrap();
    assert_eq!(found.unwrap().id, created.id);
}

#[tokio::test]
async fn create_rejects_duplicate_cpf_before_rule_checks() {
    let pool = common::test_pool().await;
    employee::create(&pool, common::manager("35642145685"))
        .await
        .unwrap();

    // Second candidate also violates the role minimum; the duplicate must
    // still win because the existence check runs first.
    let mut second = common::manager("35642145685");
    second.salary = 1200.0;

    let err = employee::create(&pool, second).await.unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
    assert_eq!(employee::find_all(&pool).await.unwrap().len(), 1);
}

#[tokio::test]
async fn create_rejects_duplicate_cpf_of_terminated_employee() {
    let pool = common::test_pool().await;
    let created = employee::create(&pool, common::manager("35642145685"))
        .await
        .unwrap();
    employee::fire(&pool, created.id).await.unwrap();

    let err = employee::create(&pool, common::manager("35642145685"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
}

#[tokio::test]
async fn create_rejects_salary_below_role_minimum() {
    let pool = common::test_pool().await;

    let mut candidate = common::manager("11122233344");
    candidate.salary = 9999.99;

    let err = employee::create(&pool, candidate).await.unwrap_err();
    assert!(matches!(
        err,
        RepoError::SalaryBelowRoleMinimum { role: Role::Manager, minimum } if minimum == 10000.0
    ));
    assert!(employee::find_all(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_allows_salary_exactly_at_role_minimum() {
    let pool = common::test_pool().await;
    let created = employee::create(&pool, common::technician("11122233344"))
        .await
        .unwrap();
    assert_eq!(created.salary, 5000.0);
}

#[tokio::test]
async fn create_rejects_profit_share_at_or_above_cap() {
    let pool = common::test_pool().await;

    let mut candidate = common::manager("11122233344");
    candidate.profit_share = 1000.0; // equal to the cap

    let err = employee::create(&pool, candidate).await.unwrap_err();
    assert!(matches!(err, RepoError::ProfitShareAboveCap { cap } if cap == 1000.0));
}

#[tokio::test]
async fn raise_profit_share_above_cap_is_rejected_and_state_unchanged() {
    let pool = common::test_pool().await;
    let created = employee::create(&pool, common::manager("35642145685"))
        .await
        .unwrap();

    // 200 + 850 = 1050 >= cap 1000
    let err = employee::raise_profit_share(&pool, created.id, 850.0)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::ProfitShareAboveCap { cap } if cap == 1000.0));

    let unchanged = employee::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(unchanged.profit_share, 200.0);
}

#[tokio::test]
async fn raise_profit_share_below_cap_persists() {
    let pool = common::test_pool().await;
    let created = employee::create(&pool, common::manager("35642145685"))
        .await
        .unwrap();

    let updated = employee::raise_profit_share(&pool, created.id, 700.0)
        .await
        .unwrap();
    assert_eq!(updated.profit_share, 900.0);
}

#[tokio::test]
async fn lower_profit_share_below_zero_is_rejected_and_state_unchanged() {
    let pool = common::test_pool().await;
    let created = employee::create(&pool, common::manager("35642145685"))
        .await
        .unwrap();

    // 200 - 300 = -100 < 0
    let err = employee::lower_profit_share(&pool, created.id, 300.0)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::ProfitShareBelowZero));

    let unchanged = employee::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(unchanged.profit_share, 200.0);
}

#[tokio::test]
async fn lower_profit_share_to_exactly_zero_is_allowed() {
    let pool = common::test_pool().await;
    let created = employee::create(&pool, common::manager("35642145685"))
        .await
        .unwrap();

    let updated = employee::lower_profit_share(&pool, created.id, 200.0)
        .await
        .unwrap();
    assert_eq!(updated.profit_share, 0.0);
}

#[tokio::test]
async fn raise_salary_applies_negative_delta_without_floor_check() {
    let pool = common::test_pool().await;
    let created = employee::create(&pool, common::manager("35642145685"))
        .await
        .unwrap();

    // Drops well below the Manager minimum; the operation does not re-check.
    let updated = employee::raise_salary(&pool, created.id, -28000.0)
        .await
        .unwrap();
    assert_eq!(updated.salary, 2000.0);
    assert_eq!(updated.role, Role::Manager);
}

#[tokio::test]
async fn change_role_rejects_salary_below_new_role_minimum() {
    let pool = common::test_pool().await;
    let created = employee::create(&pool, common::technician("11122233344"))
        .await
        .unwrap();
    employee::raise_salary(&pool, created.id, -3000.0).await.unwrap();

    let err = employee::change_role(&pool, created.id, Role::Director)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::SalaryBelowRoleMinimum { role: Role::Director, minimum } if minimum == 30000.0
    ));

    let unchanged = employee::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(unchanged.role, Role::Technician);
}

#[tokio::test]
async fn change_role_succeeds_when_salary_meets_minimum() {
    let pool = common::test_pool().await;
    let created = employee::create(&pool, common::manager("35642145685"))
        .await
        .unwrap();

    // 30000 meets the Director minimum exactly
    let updated = employee::change_role(&pool, created.id, Role::Director)
        .await
        .unwrap();
    assert_eq!(updated.role, Role::Director);
}

#[tokio::test]
async fn fire_sets_dismissal_date_and_touches_nothing_else() {
    let pool = common::test_pool().await;
    let created = employee::create(&pool, common::manager("35642145685"))
        .await
        .unwrap();

    let fired = employee::fire(&pool, created.id).await.unwrap();
    assert_eq!(fired.dismissal_date, Some(Local::now().date_naive()));
    assert_eq!(fired.salary, created.salary);
    assert_eq!(fired.profit_share, created.profit_share);
    assert_eq!(fired.role, created.role);
    assert_eq!(fired.admission_date, created.admission_date);
}

#[tokio::test]
async fn fire_twice_overwrites_dismissal_date() {
    let pool = common::test_pool().await;
    let created = employee::create(&pool, common::manager("35642145685"))
        .await
        .unwrap();

    employee::fire(&pool, created.id).await.unwrap();
    let second = employee::fire(&pool, created.id).await.unwrap();
    assert_eq!(second.dismissal_date, Some(Local::now().date_naive()));
}

#[tokio::test]
async fn delete_removes_the_record() {
    let pool = common::test_pool().await;
    let created = employee::create(&pool, common::manager("35642145685"))
        .await
        .unwrap();

    employee::delete(&pool, created.id).await.unwrap();

    assert!(employee::find_by_id(&pool, created.id).await.unwrap().is_none());
    assert!(
        employee::find_by_cpf(&pool, "35642145685")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn operations_on_unknown_id_report_not_found() {
    let pool = common::test_pool().await;

    assert!(matches!(
        employee::fire(&pool, 42).await.unwrap_err(),
        RepoError::NotFound(_)
    ));
    assert!(matches!(
        employee::delete(&pool, 42).await.unwrap_err(),
        RepoError::NotFound(_)
    ));
    assert!(matches!(
        employee::raise_salary(&pool, 42, 100.0).await.unwrap_err(),
        RepoError::NotFound(_)
    ));
    assert!(matches!(
        employee::raise_profit_share(&pool, 42, 100.0).await.unwrap_err(),
        RepoError::NotFound(_)
    ));
    assert!(matches!(
        employee::lower_profit_share(&pool, 42, 100.0).await.unwrap_err(),
        RepoError::NotFound(_)
    ));
    assert!(matches!(
        employee::change_role(&pool, 42, Role::Owner).await.unwrap_err(),
        RepoError::NotFound(_)
    ));
}
