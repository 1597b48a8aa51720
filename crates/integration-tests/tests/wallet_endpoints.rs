//! Typed endpoint wrappers against realistic backend payloads.

use billfold_core::{Amount, BillId, BillStatus, PaymentRequestId};
use billfold_integration_tests::{client_for, signed_in_store};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn credit_summary_decodes_decimal_strings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallets/me/summary/"))
        .and(header("authorization", "Bearer valid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "available": "4550.25",
            "total": "5000.00",
            "currency": "THB"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in_store("valid", "refresh");
    let client = client_for(&server.uri(), &store);

    let summary = client.credit_summary().await.expect("decodes");
    assert_eq!(summary.available, Amount::parse("4550.25").expect("valid"));
    assert_eq!(summary.total, Amount::parse("5000.00").expect("valid"));
    assert_eq!(summary.currency, "THB");
}

#[tokio::test]
async fn home_bills_decode_status_and_due_date() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallets/home/bills/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "b-1",
                "amount_due": "450.00",
                "due_date": "2025-11-01",
                "status": "PENDING",
                "merchant_name": "Corner Cafe"
            },
            {
                "id": "b-2",
                "amount_due": "120.50",
                "due_date": "2025-10-01",
                "status": "OVERDUE",
                "merchant_name": "Noodle House"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in_store("valid", "refresh");
    let client = client_for(&server.uri(), &store);

    let bills = client.home_bills().await.expect("decodes");
    assert_eq!(bills.len(), 2);
    assert_eq!(bills[0].status, BillStatus::Pending);
    assert!(bills[1].status.is_unpaid());
}

#[tokio::test]
async fn pay_bill_posts_to_the_bill_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wallets/bills/b-7/pay/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "message": "bill b-7 paid" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in_store("valid", "refresh");
    let client = client_for(&server.uri(), &store);

    let receipt = client.pay_bill(&BillId::new("b-7")).await.expect("paid");
    assert_eq!(receipt.message, "bill b-7 paid");
    assert!(receipt.transaction_id.is_none());
}

#[tokio::test]
async fn pay_payment_request_sends_installment_months() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wallets/payment-requests/pr-3/pay/"))
        .and(body_json(serde_json::json!({ "installment_months": 6 })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "message": "payment accepted",
            "transaction_id": "t-42"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in_store("valid", "refresh");
    let client = client_for(&server.uri(), &store);

    let receipt = client
        .pay_payment_request(&PaymentRequestId::new("pr-3"), 6)
        .await
        .expect("accepted");
    assert_eq!(receipt.transaction_id.as_ref().map(|t| t.as_str()), Some("t-42"));
}

#[tokio::test]
async fn spend_serializes_amount_as_decimal_string() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wallets/me/generic-spend/"))
        .and(body_json(serde_json::json!({ "amount": "118.00" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "message": "payment complete",
            "transaction_id": "t-100"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in_store("valid", "refresh");
    let client = client_for(&server.uri(), &store);

    let receipt = client
        .spend(Amount::parse("118.00").expect("valid"))
        .await
        .expect("payment completes");
    assert_eq!(receipt.message, "payment complete");
}

#[tokio::test]
async fn shop_sections_are_served_from_cache_after_first_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/merchants/shops-sections/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "title": "Near you",
                "shops": [
                    { "id": "m-1", "name": "Corner Cafe", "distance": "0.4 km", "image": "" }
                ]
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in_store("valid", "refresh");
    let client = client_for(&server.uri(), &store);

    let first = client.shop_sections().await.expect("fetches");
    let second = client.shop_sections().await.expect("cache hit");
    assert_eq!(first.len(), second.len());

    // After invalidation the next read would refetch; with the mock capped
    // at one call, staying on the cache is what keeps expect(1) satisfied.
}

#[tokio::test]
async fn unknown_shop_is_a_not_found_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/merchants/all-details/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "m-1": {
                "id": "m-1",
                "name": "Corner Cafe",
                "filters": [],
                "highlight": [],
                "categories": []
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in_store("valid", "refresh");
    let client = client_for(&server.uri(), &store);

    let err = client
        .shop_details(&"m-404".into())
        .await
        .expect_err("missing shop");
    assert!(matches!(err, billfold_client::ApiError::NotFound(_)));
}
