use anyhow::Result;
use serde_json::json;

use minimart_cart::Cart;
use minimart_core::IdGenerator;

use crate::{fixtures, render};

/// The cart walkthrough: fill the cart to capacity, show the rejected
/// overflow add, remove two items, then report.
pub fn run(as_json: bool, year_threshold: i32) -> Result<String> {
    let ids = IdGenerator::new();
    let mut catalog = fixtures::demo_catalog(&ids);

    for product in &catalog {
        if let Some(video) = product.as_video() {
            tracing::info!(
                name = product.name(),
                release_year = video.release_year(),
                new_release = video.is_new_release(year_threshold),
                "movie in catalog"
            );
        }
    }

    let overflow = catalog.pop().expect("demo catalog is never empty");
    let paperbook_id = catalog[6].product_id();
    let music3_id = catalog[2].product_id();

    let mut cart = Cart::new(fixtures::demo_owner());
    for product in catalog {
        let added = cart.add_item(product);
        debug_assert!(added, "cart holds exactly the seven demo items");
    }

    let overflow_name = overflow.name().to_string();
    if !cart.add_item(overflow) {
        tracing::warn!(product = %overflow_name, "cart is full, add rejected");
    }

    for id in [paperbook_id, music3_id] {
        let removed = cart.remove_item(id);
        tracing::info!(product_id = %id, removed, "removed item from cart");
    }

    if as_json {
        let report = json!({
            "cart": cart,
            "summary": cart.summary(),
        });
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(render::render_cart(&cart))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_report_reflects_the_walkthrough() {
        let report = run(false, 1970).unwrap();
        // Seven added, two removed.
        assert!(report.contains("Total number of purchases: 5"));
        // 16.50 + 13.75 + 22.00 + 22.00 + 8.30
        assert!(report.contains("Total purchasing amount: $82.55"));
        assert!(report.contains("Average cost: $16.51"));
        assert!(!report.contains("Bohemian Rhapsody"));
        assert!(!report.contains("1984"));
        assert!(!report.contains("Imagine"));
    }

    #[test]
    fn json_report_has_cart_and_summary() {
        let report = run(true, 1970).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["summary"]["total_count"], 5);
        assert_eq!(value["cart"]["items"].as_array().unwrap().len(), 5);
        assert!(value["cart"]["owner"]["first"].is_string());
    }
}
