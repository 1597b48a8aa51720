//! Merchant catalog browsing commands.

use billfold_core::MerchantId;

use super::CliError;

/// List the sectioned shop directory.
#[allow(clippy::print_stdout)]
pub async fn sections() -> Result<(), CliError> {
    let client = super::authenticated_client().await?;
    let sections = client.shop_sections().await?;

    for section in sections {
        println!("{}", section.title);
        for shop in section.shops {
            println!("  {}  {}  ({})", shop.id, shop.name, shop.distance);
        }
    }
    Ok(())
}

/// List one shop's products.
#[allow(clippy::print_stdout)]
pub async fn products(merchant_id: &str) -> Result<(), CliError> {
    let client = super::authenticated_client().await?;
    let products = client
        .shop_products(&MerchantId::new(merchant_id))
        .await?;

    if products.is_empty() {
        println!("No products.");
        return Ok(());
    }

    for product in products.values() {
        println!("{}  {:>10}  {}", product.id, product.price, product.name);
    }
    Ok(())
}

/// List merchant categories.
#[allow(clippy::print_stdout)]
pub async fn categories() -> Result<(), CliError> {
    let client = super::authenticated_client().await?;
    let categories = client.merchant_categories().await?;

    for category in categories {
        println!("{}  {}", category.id, category.name);
    }
    Ok(())
}
