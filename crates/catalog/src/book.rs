use serde::{Deserialize, Serialize};

use minimart_core::{IdGenerator, PersonName};

use crate::product::ProductBase;

/// Shared body of both book categories (e-book and paper book).
///
/// The two categories differ only in their reported label, which lives on
/// the [`Product`](crate::Product) variant wrapping this body, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookProduct {
    #[serde(flatten)]
    base: ProductBase,
    author: PersonName,
    pages: u32,
}

impl BookProduct {
    pub fn new(
        ids: &IdGenerator,
        name: impl Into<String>,
        price: f64,
        author: PersonName,
        pages: u32,
    ) -> Self {
        Self {
            base: ProductBase::new(ids, name, price),
            author,
            pages,
        }
    }

    pub(crate) fn base(&self) -> &ProductBase {
        &self.base
    }

    pub(crate) fn base_mut(&mut self) -> &mut ProductBase {
        &mut self.base
    }

    pub fn author(&self) -> &PersonName {
        &self.author
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn set_author(&mut self, author: PersonName) {
        self.author = author;
    }

    pub fn set_pages(&mut self, pages: u32) {
        self.pages = pages;
    }
}
