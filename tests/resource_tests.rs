//! Integration tests for the resource services.
//!
//! Each test checks that a service call reaches the expected method and
//! path, with the expected query and body.

use chrono::{TimeZone, Utc};
use mailchimp_api::rest::resources::{
    BatchOperation, BatchRequest, BatchStatus, InterestCategoryRequest, InterestCategoryType,
    InterestRequest, Pagination,
};
use mailchimp_api::{
    subscriber_hash, ApiKey, EndpointDescriptor, HostUrl, HttpMethod, MailchimpConfig, NoContent,
    Payload, ResourceType, RestClient, SubResourceType,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RestClient {
    let config = MailchimpConfig::builder()
        .api_key(ApiKey::new("abcd1234-us6").unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

async fn expect_get(server: &MockServer, route: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Lists
// ============================================================================

#[tokio::test]
async fn test_lists_all_sends_default_paging() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/lists"))
        .and(query_param("offset", "0"))
        .and(query_param("count", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"lists": [], "total_items": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body: Value = client.lists().all(Pagination::default()).await.unwrap();

    assert_eq!(body["total_items"], 0);
}

#[tokio::test]
async fn test_lists_members_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/lists/l1/members"))
        .and(query_param("offset", "20"))
        .and(query_param("count", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"members": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = Pagination::new(0, 20).next();
    let _: Value = client.lists().members("l1", page).await.unwrap();
}

#[tokio::test]
async fn test_add_or_update_member_puts_to_hash_path() {
    let server = MockServer::start().await;
    let hash = subscriber_hash("Someone@Example.com");
    let member = json!({"email_address": "someone@example.com", "status_if_new": "subscribed"});
    Mock::given(method("PUT"))
        .and(path(format!("/3.0/lists/l1/members/{hash}")))
        .and(body_json(&member))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": hash})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload: Payload<Value> = client
        .lists()
        .add_or_update_member("l1", "Someone@Example.com", &member)
        .await
        .unwrap();

    assert_eq!(payload.typed().unwrap()["id"], hash.as_str());
}

#[tokio::test]
async fn test_delete_member_by_email_hash() {
    let server = MockServer::start().await;
    let hash = subscriber_hash("a@example.com");
    Mock::given(method("DELETE"))
        .and(path(format!("/3.0/lists/57afe96172/members/{hash}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let deleted = client
        .lists()
        .delete_member("57afe96172", &subscriber_hash("a@example.com"))
        .await
        .unwrap();

    assert_eq!(deleted, NoContent);
}

#[tokio::test]
async fn test_update_member_patches() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/3.0/lists/l1/members/h1"))
        .and(body_json(json!({"status": "unsubscribed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "unsubscribed"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let _: Payload<Value> = client
        .lists()
        .update_member("l1", "h1", &json!({"status": "unsubscribed"}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_interest_category_and_interest_paths() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/3.0/lists/l1/interest-categories"))
        .and(body_json(json!({"title": "Topics", "type": "dropdown"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "c1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/3.0/lists/l1/interest-categories/c1/interests"))
        .and(body_json(json!({"name": "Rust", "display_order": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "i1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/3.0/lists/l1/interest-categories/c1/interests/i1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let lists = client.lists();

    let category = InterestCategoryRequest {
        title: "Topics".to_string(),
        display_order: None,
        category_type: InterestCategoryType::Dropdown,
    };
    let _: Payload<Value> = lists.create_interest_category("l1", &category).await.unwrap();

    let interest = InterestRequest {
        name: "Rust".to_string(),
        display_order: Some(1),
    };
    let _: Payload<Value> = lists.create_interest("l1", "c1", &interest).await.unwrap();

    assert_eq!(lists.delete_interest("l1", "c1", "i1").await.unwrap(), NoContent);
}

#[tokio::test]
async fn test_list_sub_resource_reads() {
    let server = MockServer::start().await;
    for route in [
        "/3.0/lists/l1/abuse-reports",
        "/3.0/lists/l1/activity",
        "/3.0/lists/l1/clients",
        "/3.0/lists/l1/growth-history/2026-09",
        "/3.0/lists/l1/merge-fields/3",
        "/3.0/lists/l1/segments/s1",
    ] {
        expect_get(&server, route).await;
    }

    let client = client_for(&server);
    let lists = client.lists();
    let _: Value = lists.abuse_reports("l1").await.unwrap();
    let _: Value = lists.activity("l1").await.unwrap();
    let _: Value = lists.clients("l1").await.unwrap();
    let _: Value = lists.growth_history_month("l1", "2026-09").await.unwrap();
    let _: Value = lists.merge_field("l1", "3").await.unwrap();
    let _: Value = lists.segment("l1", "s1").await.unwrap();
}

// ============================================================================
// Campaigns
// ============================================================================

#[tokio::test]
async fn test_campaign_actions() {
    let server = MockServer::start().await;
    for action in ["send", "cancel-send"] {
        Mock::given(method("POST"))
            .and(path(format!("/3.0/campaigns/c1/actions/{action}")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    assert_eq!(client.campaigns().send("c1").await.unwrap(), NoContent);
    assert_eq!(client.campaigns().cancel_send("c1").await.unwrap(), NoContent);
}

#[tokio::test]
async fn test_campaign_schedule_sends_time() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/3.0/campaigns/c1/actions/schedule"))
        .and(body_json(json!({"schedule_time": "2026-11-02T14:15:00Z"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let when = Utc.with_ymd_and_hms(2026, 11, 2, 14, 15, 0).unwrap();

    client.campaigns().schedule("c1", when).await.unwrap();
}

#[tokio::test]
async fn test_campaign_content_and_feedback() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/3.0/campaigns/c1/content"))
        .and(body_json(json!({"html": "<p>Hi</p>"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"html": "<p>Hi</p>"})))
        .expect(1)
        .mount(&server)
        .await;
    expect_get(&server, "/3.0/campaigns/c1/feedback/f1").await;
    expect_get(&server, "/3.0/campaigns/c1/send-checklist").await;

    let client = client_for(&server);
    let campaigns = client.campaigns();

    let _: Payload<Value> = campaigns
        .set_content("c1", &json!({"html": "<p>Hi</p>"}))
        .await
        .unwrap();
    let _: Value = campaigns.feedback_message("c1", "f1").await.unwrap();
    let _: Value = campaigns.send_checklist("c1").await.unwrap();
}

#[tokio::test]
async fn test_campaign_folders() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/3.0/campaign-folders"))
        .and(body_json(json!({"name": "Spring"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "f1", "name": "Spring"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/3.0/campaign-folders/f1"))
        .and(body_json(json!({"name": "Summer"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "f1", "name": "Summer"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let folders = client.campaign_folders();

    let created: Payload<Value> = folders.add("Spring").await.unwrap();
    assert_eq!(created.typed().unwrap()["id"], "f1");

    let renamed: Payload<Value> = folders.update("f1", "Summer").await.unwrap();
    assert_eq!(renamed.typed().unwrap()["name"], "Summer");
}

// ============================================================================
// Automations, Reports, Conversations
// ============================================================================

#[tokio::test]
async fn test_automations() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/automations"))
        .and(query_param("count", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"automations": []})))
        .expect(1)
        .mount(&server)
        .await;
    expect_get(&server, "/3.0/automations/w1/emails/e1/queue").await;
    expect_get(&server, "/3.0/automations/w1/emails/e1/queue/h1").await;
    expect_get(&server, "/3.0/automations/w1/removed-subscribers").await;

    let client = client_for(&server);
    let automations = client.automations();

    let _: Value = automations.all(10).await.unwrap();
    let _: Value = automations.queue("w1", "e1").await.unwrap();
    let _: Value = automations.queued_subscriber("w1", "e1", "h1").await.unwrap();
    let _: Value = automations.removed_subscribers("w1").await.unwrap();
}

#[tokio::test]
async fn test_reports() {
    let server = MockServer::start().await;
    for route in [
        "/3.0/reports/c1",
        "/3.0/reports/c1/click-details/l1/members",
        "/3.0/reports/c1/click-details/l1/members/h1",
        "/3.0/reports/c1/email-activity/h1",
        "/3.0/reports/c1/sent-to",
        "/3.0/reports/c1/unsubscribed/h1",
    ] {
        expect_get(&server, route).await;
    }

    let client = client_for(&server);
    let reports = client.reports();

    let _: Value = reports.campaign("c1").await.unwrap();
    let _: Value = reports.click_detail_members("c1", "l1").await.unwrap();
    let _: Value = reports.click_detail_member("c1", "l1", "h1").await.unwrap();
    let _: Value = reports.subscriber_email_activity("c1", "h1").await.unwrap();
    let _: Value = reports.sent_to("c1").await.unwrap();
    let _: Value = reports.unsubscribed_member("c1", "h1").await.unwrap();
}

#[tokio::test]
async fn test_conversations() {
    let server = MockServer::start().await;
    expect_get(&server, "/3.0/conversations").await;
    expect_get(&server, "/3.0/conversations/cv1/messages/m1").await;

    let client = client_for(&server);

    let _: Value = client.conversations().all().await.unwrap();
    let _: Value = client.conversations().message("cv1", "m1").await.unwrap();
}

// ============================================================================
// Batches
// ============================================================================

#[tokio::test]
async fn test_batch_start_and_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/3.0/batches"))
        .and(body_json(json!({
            "operations": [
                {"method": "POST", "path": "/lists/l1/members", "body": "{\"email_address\":\"a@example.com\"}", "operation_id": "a"},
                {"method": "DELETE", "path": "/campaigns/c1"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "b1",
            "status": "pending",
            "total_operations": 2
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/3.0/batches/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "b1",
            "status": "finished",
            "total_operations": 2,
            "finished_operations": 2,
            "errored_operations": 1,
            "completed_at": "2026-10-16T09:30:00+00:00",
            "response_body_url": "https://example.com/b1.tar.gz"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let members =
        EndpointDescriptor::sub(ResourceType::Lists, SubResourceType::Members, ["l1"]).unwrap();
    let campaign = EndpointDescriptor::item(ResourceType::Campaigns, "c1").unwrap();
    let batch = BatchRequest::new()
        .push(
            BatchOperation::new(HttpMethod::Post, &members)
                .with_body(&json!({"email_address": "a@example.com"}))
                .unwrap()
                .with_operation_id("a"),
        )
        .push(BatchOperation::new(HttpMethod::Delete, &campaign));

    let client = client_for(&server);

    let started: Payload<BatchStatus> = client.batches().start(&batch).await.unwrap();
    assert_eq!(started.typed().unwrap().status, "pending");

    let status: BatchStatus = client.batches().status("b1").await.unwrap();
    assert!(status.is_finished());
    assert_eq!(status.errored_operations, 1);
    assert!(status.completed_at.is_some());
}
