#[cfg(debug_assertions)]
pub fn get_shop_url() -> &'static str {
    "http://localhost:4173/shop"  // Storefront preview when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_shop_url() -> &'static str {
    "https://shop.lomanutrition.com"
}
