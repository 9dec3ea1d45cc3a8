//! Text rendering of the display contract.
//!
//! The domain crates expose fields and content projections; all formatting
//! lives here.

use std::fmt::Write;

use minimart_cart::Cart;
use minimart_catalog::{ContentInfo, Product};

/// One product report: category label, identity, price (two decimals),
/// review rate, then category-specific lines.
pub fn render_product(product: &Product) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}]", product.category());
    let _ = writeln!(
        out,
        "Product ID: {}   Product Name: {}",
        product.product_id(),
        product.name()
    );
    let _ = writeln!(out, "Price: ${:.2}", product.price());
    let _ = writeln!(out, "Product Review Rate: {}", product.review_rate());
    match product.contents() {
        ContentInfo::Music { singer, genre } => {
            let _ = writeln!(out, "Singer Name: {}", singer.full_name());
            let _ = writeln!(out, "Genre: {genre}");
        }
        ContentInfo::Movie { release_year, film_rating, run_time_minutes, director } => {
            let _ = writeln!(out, "Release Year: {release_year}");
            let _ = writeln!(out, "Film Rating: {film_rating}");
            let _ = writeln!(out, "Runtime: {run_time_minutes} mins");
            let _ = writeln!(out, "Director Name: {}", director.full_name());
        }
        ContentInfo::Book { author, pages } => {
            let _ = writeln!(out, "Author: {}", author.full_name());
            let _ = writeln!(out, "Pages: {pages}");
        }
    }
    out
}

/// The cart report: owner, per-item product reports, then the purchase
/// summary (amounts to two decimals, `0.00` for an empty cart).
pub fn render_cart(cart: &Cart) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "My Cart");
    let _ = writeln!(out, "======");
    let _ = writeln!(out, "Cart Owner: {}", cart.owner().full_name());
    let _ = writeln!(out);
    for item in cart.items() {
        out.push_str(&render_product(item));
        let _ = writeln!(out);
    }
    let summary = cart.summary();
    let _ = writeln!(out, "===== Summary of Purchase ======");
    let _ = writeln!(out, "Total number of purchases: {}", summary.total_count);
    let _ = writeln!(out, "Total purchasing amount: ${:.2}", summary.total_amount);
    let _ = writeln!(out, "Average cost: ${:.2}", summary.average_cost);
    out
}
