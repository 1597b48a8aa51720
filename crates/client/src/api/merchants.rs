//! Merchant catalog endpoints (`merchants/`).
//!
//! Read endpoints are cached in-process for five minutes; the catalog
//! changes rarely and the mobile screens re-fetch it aggressively.
//! Mutations (apply, transaction requests) are never cached.

use std::collections::HashMap;

use tracing::{debug, instrument};

use billfold_core::{Amount, MerchantId, Product, ProductId};

use crate::cache::CacheValue;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::types::{
    Category, MerchantApplication, PaymentRequest, ShopDetails, ShopDirectory, ShopSection,
};

impl ApiClient {
    /// Fetch the sectioned shop list for the "near you" screen
    /// (`GET merchants/shops-sections/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn shop_sections(&self) -> Result<Vec<ShopSection>, ApiError> {
        let cache_key = "shop-sections".to_string();

        if let Some(CacheValue::ShopSections(sections)) =
            self.inner().catalog_cache.get(&cache_key).await
        {
            debug!("cache hit for shop sections");
            return Ok(sections);
        }

        let sections: Vec<ShopSection> = self.get_json("merchants/shops-sections/").await?;

        self.inner()
            .catalog_cache
            .insert(cache_key, CacheValue::ShopSections(sections.clone()))
            .await;

        Ok(sections)
    }

    /// Fetch the full shop directory (`GET merchants/all-details/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn shop_directory(&self) -> Result<ShopDirectory, ApiError> {
        let cache_key = "shop-directory".to_string();

        if let Some(CacheValue::ShopDirectory(directory)) =
            self.inner().catalog_cache.get(&cache_key).await
        {
            debug!("cache hit for shop directory");
            return Ok(directory);
        }

        let directory: ShopDirectory = self.get_json("merchants/all-details/").await?;

        self.inner()
            .catalog_cache
            .insert(cache_key, CacheValue::ShopDirectory(directory.clone()))
            .await;

        Ok(directory)
    }

    /// Fetch the detail record for one shop.
    ///
    /// The backend serves details for all shops in one payload; this looks
    /// the requested shop up in the (cached) directory.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the shop is not in the directory, or
    /// an error if the request fails.
    #[instrument(skip(self), fields(merchant_id = %merchant_id))]
    pub async fn shop_details(&self, merchant_id: &MerchantId) -> Result<ShopDetails, ApiError> {
        let mut directory = self.shop_directory().await?;
        directory
            .remove(merchant_id)
            .ok_or_else(|| ApiError::NotFound(format!("Shop not found: {merchant_id}")))
    }

    /// Fetch one shop's products, keyed by product id
    /// (`GET merchants/{id}/products/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(merchant_id = %merchant_id))]
    pub async fn shop_products(
        &self,
        merchant_id: &MerchantId,
    ) -> Result<HashMap<ProductId, Product>, ApiError> {
        let cache_key = format!("products:{merchant_id}");

        if let Some(CacheValue::Products(products)) =
            self.inner().catalog_cache.get(&cache_key).await
        {
            debug!("cache hit for shop products");
            return Ok(products);
        }

        let products: HashMap<ProductId, Product> = self
            .get_json(&format!("merchants/{merchant_id}/products/"))
            .await?;

        self.inner()
            .catalog_cache
            .insert(cache_key, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// Fetch a single product from a shop's catalog.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the product is not in the shop's
    /// catalog, or an error if the request fails.
    #[instrument(skip(self), fields(merchant_id = %merchant_id, product_id = %product_id))]
    pub async fn shop_product(
        &self,
        merchant_id: &MerchantId,
        product_id: &ProductId,
    ) -> Result<Product, ApiError> {
        let mut products = self.shop_products(merchant_id).await?;
        products
            .remove(product_id)
            .ok_or_else(|| ApiError::NotFound(format!("Product not found: {product_id}")))
    }

    /// Fetch the merchant categories (`GET merchants/categories/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn merchant_categories(&self) -> Result<Vec<Category>, ApiError> {
        let cache_key = "categories".to_string();

        if let Some(CacheValue::Categories(categories)) =
            self.inner().catalog_cache.get(&cache_key).await
        {
            debug!("cache hit for merchant categories");
            return Ok(categories);
        }

        let categories: Vec<Category> = self.get_json("merchants/categories/").await?;

        self.inner()
            .catalog_cache
            .insert(cache_key, CacheValue::Categories(categories.clone()))
            .await;

        Ok(categories)
    }

    /// Apply to become a merchant (`POST merchants/apply/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the application is rejected (e.g. duplicate tax
    /// id) or the request fails.
    #[instrument(skip(self, application), fields(shop_name = %application.name))]
    pub async fn apply_as_merchant(
        &self,
        application: &MerchantApplication,
    ) -> Result<(), ApiError> {
        let body = serde_json::to_value(application)?;
        let response = self
            .execute(crate::http::RequestEnvelope::post(
                "merchants/apply/",
                Some(body),
            ))
            .await?;
        crate::http::check_status(response).await?;
        Ok(())
    }

    /// Create a payment request as a merchant
    /// (`POST merchants/me/transactions/request/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not a merchant or the request
    /// fails.
    #[instrument(skip(self), fields(amount = %amount))]
    pub async fn request_transaction(&self, amount: Amount) -> Result<PaymentRequest, ApiError> {
        let body = serde_json::json!({ "amount": amount });
        self.post_json("merchants/me/transactions/request/", Some(body))
            .await
    }

    /// Drop all cached catalog data, forcing the next reads to refetch.
    pub fn invalidate_catalog(&self) {
        self.inner().catalog_cache.invalidate_all();
    }
}
