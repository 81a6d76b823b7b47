//! Integration tests for the card tenant modal.
//!
//! Row checkboxes and picker buttons live inside `TableBuilder` rows, where
//! kittest clicks are unreliable, so row-level interactions go through the
//! state while toolbar and footer buttons are clicked.

mod common;

use cardtenant_business::{ModalPhase, RowId, TenantOption};
use common::TestCtx;
use kittest::Queryable;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

async fn mount_tenants(ctx: &TestCtx<'_>, card_id: i64, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/dashboard-cards/{card_id}/tenants")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                {
                    "id": 1,
                    "cardId": card_id,
                    "tenantId": 101,
                    "tenantNum": "T-101",
                    "tenantName": "Acme",
                    "creationDate": "2019-05-10 08:30:00"
                },
                {
                    "id": 2,
                    "cardId": card_id,
                    "tenantId": 102,
                    "tenantNum": "T-102",
                    "tenantName": "Globex"
                }
            ],
            "number": 0,
            "size": 10,
            "totalElements": 2
        })))
        .expect(expected_calls)
        .mount(ctx.mock_server())
        .await;
}

#[tokio::test]
async fn test_open_loads_assigned_tenants() {
    let mut ctx = TestCtx::new().await;
    mount_tenants(&ctx, 42, 1).await;

    ctx.open(Some(42), false);
    assert!(
        ctx.harness_mut()
            .query_by_label_contains("Assign Tenants")
            .is_some(),
        "Modal window should be shown"
    );

    let loaded = ctx
        .wait_until(|harness| harness.query_by_label_contains("T-101").is_some())
        .await;
    assert!(loaded, "Assigned tenants should be rendered");

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label_contains("Globex").is_some());
    assert!(harness.query_by_label_contains("Total 2").is_some());
    assert_eq!(harness.state().card_tenants.modal.rows().len(), 2);
}

#[tokio::test]
async fn test_open_without_card_id_does_not_fetch() {
    let mut ctx = TestCtx::new().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(ctx.mock_server())
        .await;

    ctx.open(None, false);
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.state().card_tenants.modal.is_open());
    assert!(harness.query_by_label_contains("No tenants assigned").is_some());
}

#[tokio::test]
async fn test_search_sends_criteria() {
    let mut ctx = TestCtx::new().await;
    mount_tenants(&ctx, 42, 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/dashboard-cards/42/tenants"))
        .and(query_param("tenantName", "Acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": [] })))
        .with_priority(1)
        .expect(1)
        .mount(ctx.mock_server())
        .await;

    ctx.open(Some(42), false);
    ctx.settle().await;

    let harness = ctx.harness_mut();
    harness
        .state_mut()
        .card_tenants
        .modal
        .search_form_mut()
        .fields_mut()
        .tenant_name = "Acme".to_owned();
    harness.get_by_label("Search").click();
    harness.step();

    let emptied = ctx
        .wait_until(|harness| harness.state().card_tenants.modal.rows().is_empty())
        .await;
    assert!(emptied, "Filtered search should replace the rows");
}

#[tokio::test]
async fn test_read_only_modal_hides_editing_controls() {
    let mut ctx = TestCtx::new().await;
    mount_tenants(&ctx, 42, 1).await;

    ctx.open(Some(42), true);
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("Add").is_none());
    assert!(harness.query_by_label("Remove").is_none());

    harness.get_by_label("OK").click();
    harness.step();
    assert!(!harness.state().card_tenants.modal.is_open());
}

#[tokio::test]
async fn test_add_then_remove_draft_row() {
    let mut ctx = TestCtx::new().await;
    mount_tenants(&ctx, 42, 1).await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(ctx.mock_server())
        .await;

    ctx.open(Some(42), false);
    ctx.settle().await;

    let harness = ctx.harness_mut();
    harness.get_by_label("Add").click();
    harness.step();
    harness.step();

    assert!(harness.query_by_label_contains("Select tenant").is_some());
    assert!(harness.query_by_label_contains("Total 3").is_some());

    let draft = harness.state().card_tenants.modal.rows()[0].id();
    assert!(draft.is_draft());
    harness.state_mut().card_tenants.modal.toggle_row(draft, true);
    harness.step();

    harness.get_by_label("Remove").click();
    harness.step();
    harness.step();

    assert!(harness.query_by_label_contains("Removed 1 tenant(s)").is_some());
    assert_eq!(harness.state().card_tenants.modal.rows().len(), 2);
    ctx.settle().await;
}

#[tokio::test]
async fn test_remove_persisted_row_calls_api() {
    let mut ctx = TestCtx::new().await;
    mount_tenants(&ctx, 42, 1).await;
    Mock::given(method("DELETE"))
        .and(path("/v1/dashboard-cards/tenants"))
        .and(body_json(json!([{
            "id": 2,
            "tenantId": 102,
            "tenantNum": "T-102",
            "tenantName": "Globex",
            "cardId": 42
        }])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(ctx.mock_server())
        .await;

    ctx.open(Some(42), false);
    ctx.settle().await;

    let harness = ctx.harness_mut();
    harness
        .state_mut()
        .card_tenants
        .modal
        .toggle_row(RowId::Persisted(2), true);
    harness.step();
    harness.get_by_label("Remove").click();
    harness.step();

    let removed = ctx
        .wait_until(|harness| harness.state().card_tenants.modal.rows().len() == 1)
        .await;
    assert!(removed, "Row should be removed after the API succeeds");
}

#[tokio::test]
async fn test_confirm_blocks_incomplete_draft() {
    let mut ctx = TestCtx::new().await;
    mount_tenants(&ctx, 42, 1).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(ctx.mock_server())
        .await;

    ctx.open(Some(42), false);
    ctx.settle().await;

    let harness = ctx.harness_mut();
    harness.get_by_label("Add").click();
    harness.step();
    harness.get_by_label("OK").click();
    harness.step();
    harness.step();

    assert!(harness.state().card_tenants.modal.is_open());
    assert!(
        harness
            .query_by_label_contains("Tenant code is required")
            .is_some()
    );
    ctx.settle().await;
}

#[tokio::test]
async fn test_confirm_saves_picked_tenant_and_closes() {
    let mut ctx = TestCtx::new().await;
    mount_tenants(&ctx, 42, 1).await;
    Mock::given(method("POST"))
        .and(path("/v1/dashboard-cards/tenants"))
        .and(body_json(json!([{
            "cardId": 42,
            "tenantId": 7,
            "tenantNum": "T-007",
            "tenantName": "Initech"
        }])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 3 }])))
        .expect(1)
        .mount(ctx.mock_server())
        .await;

    ctx.open(Some(42), false);
    ctx.settle().await;

    let harness = ctx.harness_mut();
    harness.get_by_label("Add").click();
    harness.step();

    let modal = &mut harness.state_mut().card_tenants.modal;
    let draft = modal.rows()[0].id();
    modal.pick_tenant(
        draft,
        &TenantOption {
            tenant_id: 7,
            tenant_num: "T-007".to_owned(),
            tenant_name: Some("Initech".to_owned()),
            creation_date: None,
        },
    );
    harness.step();
    assert!(harness.query_by_label_contains("T-007").is_some());

    harness.get_by_label("OK").click();
    harness.step();
    assert_eq!(
        harness.state().card_tenants.modal.phase(),
        ModalPhase::Saving
    );

    let closed = ctx
        .wait_until(|harness| !harness.state().card_tenants.modal.is_open())
        .await;
    assert!(closed, "Modal should close after a successful save");
}

#[tokio::test]
async fn test_cancel_closes_and_resets_search_form() {
    let mut ctx = TestCtx::new().await;
    mount_tenants(&ctx, 42, 2).await;

    ctx.open(Some(42), false);
    ctx.settle().await;

    let harness = ctx.harness_mut();
    harness
        .state_mut()
        .card_tenants
        .modal
        .search_form_mut()
        .fields_mut()
        .tenant_num = "T-1".to_owned();
    harness.get_by_label("Cancel").click();
    harness.step();
    assert!(harness.query_by_label_contains("Assign Tenants").is_none());

    ctx.open(Some(42), false);
    ctx.settle().await;
    let criteria = ctx.harness_mut().state().card_tenants.modal.search_form().fields().clone();
    assert!(criteria.is_empty());
}

#[tokio::test]
async fn test_tenant_picker_fills_draft_row() {
    let mut ctx = TestCtx::new().await;
    mount_tenants(&ctx, 42, 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/lovs/data"))
        .and(query_param("lovCode", "HPFM.ASSIGN_TENANT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                { "tenantId": 7, "tenantNum": "T-007", "tenantName": "Initech" }
            ],
            "totalElements": 1
        })))
        .mount(ctx.mock_server())
        .await;

    ctx.open(Some(42), false);
    ctx.settle().await;

    let app_ctx = ctx.harness_mut().ctx.clone();
    let harness = ctx.harness_mut();
    harness.get_by_label("Add").click();
    harness.step();

    let panel = &mut harness.state_mut().card_tenants;
    let draft = panel.modal.rows()[0].id();
    let query = panel.picker.open_for(draft, "HPFM.ASSIGN_TENANT");
    panel.tasks.lookup(&app_ctx, draft, query);

    let listed = ctx
        .wait_until(|harness| harness.query_by_label_contains("T-007 Initech").is_some())
        .await;
    assert!(listed, "Picker should list lookup results");

    let harness = ctx.harness_mut();
    harness.get_by_label("T-007 Initech").click();
    harness.step();

    let panel = &harness.state().card_tenants;
    assert!(!panel.picker.is_open());
    let row = panel.modal.row(draft).expect("draft row still present");
    assert_eq!(row.tenant_id, Some(7));
    assert_eq!(row.tenant_num.as_deref(), Some("T-007"));
}
