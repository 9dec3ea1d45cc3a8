use anyhow::Result;

use minimart_core::IdGenerator;

use crate::{fixtures, render};

pub fn run() -> Result<String> {
    let ids = IdGenerator::new();
    let catalog = fixtures::demo_catalog(&ids);
    tracing::info!(products = catalog.len(), "built demo catalog");

    let reports: Vec<String> = catalog.iter().map(render::render_product).collect();
    Ok(reports.join("\n"))
}
