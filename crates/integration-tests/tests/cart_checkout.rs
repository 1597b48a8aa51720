//! Cart-to-checkout flow: fetch a catalog, build a cart, complete the
//! payment, clear the cart.

use billfold_client::Cart;
use billfold_core::{Amount, MerchantId, ProductId};
use billfold_integration_tests::{client_for, signed_in_store};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn checkout_charges_the_cart_total() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/merchants/m-1/products/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "p-1": {
                "id": "p-1",
                "name": "Iced Latte",
                "price": "59.00",
                "image": "",
                "description": ""
            },
            "p-2": {
                "id": "p-2",
                "name": "Croissant",
                "price": "45.50",
                "image": "",
                "description": ""
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Two lattes and a croissant: 59.00 * 2 + 45.50.
    Mock::given(method("POST"))
        .and(path("/wallets/me/generic-spend/"))
        .and(body_json(serde_json::json!({ "amount": "163.50" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "message": "payment complete",
            "transaction_id": "t-9"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in_store("valid", "refresh");
    let client = client_for(&server.uri(), &store);

    let products = client
        .shop_products(&MerchantId::new("m-1"))
        .await
        .expect("catalog loads");

    let latte = products.get(&ProductId::new("p-1")).expect("present");
    let croissant = products.get(&ProductId::new("p-2")).expect("present");

    let mut cart = Cart::new();
    assert!(cart.add(latte));
    assert!(cart.add(latte));
    assert!(cart.add(croissant));

    assert_eq!(cart.count(), 3);
    assert_eq!(cart.total(), Amount::parse("163.50").expect("valid"));

    let receipt = client.spend(cart.total()).await.expect("payment completes");
    assert_eq!(receipt.message, "payment complete");

    // Confirmed payment discards the cart.
    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.total(), Amount::ZERO);
}
