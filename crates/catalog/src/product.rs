use serde::{Deserialize, Serialize};

use minimart_core::{Entity, IdGenerator, PersonName, ProductId};

use crate::audio::{AudioProduct, Genre};
use crate::book::BookProduct;
use crate::video::{FilmRating, VideoProduct};

/// Sentinel substituted whenever an empty product name is supplied.
pub const NO_NAME_PRODUCT: &str = "!No Name Product!";

/// Lower bound of the valid price range (inclusive).
pub const MIN_PRICE: f64 = 0.0;

/// Upper bound of the valid price range (inclusive).
pub const MAX_PRICE: f64 = 1000.0;

/// Attributes and rules shared by every catalog entry.
///
/// Never constructed on its own; each category variant embeds one. The
/// identifier is issued once at construction and is immutable thereafter.
/// Name and price are normalized on every write: an empty name becomes
/// [`NO_NAME_PRODUCT`], and the price is clamped to the inclusive
/// [`MIN_PRICE`]..[`MAX_PRICE`] range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductBase {
    id: ProductId,
    name: String,
    price: f64,
    review_rate: f64,
}

impl ProductBase {
    pub(crate) fn new(ids: &IdGenerator, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: ids.next(),
            name: normalize_name(name.into()),
            price: clamp_price(price),
            review_rate: 0.0,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub(crate) fn id_ref(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn review_rate(&self) -> f64 {
        self.review_rate
    }

    /// Rename; an empty name is replaced by the sentinel, never rejected.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = normalize_name(name.into());
    }

    /// Reprice; out-of-range values are clamped, never rejected.
    pub fn set_price(&mut self, price: f64) {
        self.price = clamp_price(price);
    }

    /// Review rates are stored verbatim; callers are expected to supply
    /// 0–10 but nothing enforces it.
    pub fn set_review_rate(&mut self, rate: f64) {
        self.review_rate = rate;
    }
}

fn normalize_name(name: String) -> String {
    if name.is_empty() { NO_NAME_PRODUCT.to_string() } else { name }
}

fn clamp_price(price: f64) -> f64 {
    price.clamp(MIN_PRICE, MAX_PRICE)
}

/// Product category label.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Music,
    Movie,
    EBook,
    PaperBook,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Music => "Music",
            Category::Movie => "Movie",
            Category::EBook => "E book",
            Category::PaperBook => "Paper book",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Category-specific detail of a product, as data.
///
/// This is the `describe contents` hook of the hierarchy: the display layer
/// composes its text from this projection without reaching into variant
/// internals. Both book categories share the `Book` projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ContentInfo<'a> {
    Music {
        singer: &'a PersonName,
        genre: Genre,
    },
    Movie {
        release_year: i32,
        film_rating: FilmRating,
        run_time_minutes: u32,
        director: &'a PersonName,
    },
    Book {
        author: &'a PersonName,
        pages: u32,
    },
}

/// A purchasable catalog entry.
///
/// A closed set of category variants behind one type: only concrete
/// variants can be constructed, so there is no "base product" to misuse.
/// Shared attributes are reached through delegating accessors; variant
/// attributes through [`Product::contents`] or the `as_*` accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Product {
    Audio(AudioProduct),
    Video(VideoProduct),
    EBook(BookProduct),
    PaperBook(BookProduct),
}

impl Product {
    pub fn new_audio(
        ids: &IdGenerator,
        name: impl Into<String>,
        price: f64,
        singer: PersonName,
    ) -> Self {
        Product::Audio(AudioProduct::new(ids, name, price, singer))
    }

    pub fn new_video(
        ids: &IdGenerator,
        name: impl Into<String>,
        price: f64,
        director: PersonName,
        release_year: i32,
        run_time_minutes: u32,
    ) -> Self {
        Product::Video(VideoProduct::new(
            ids,
            name,
            price,
            director,
            release_year,
            run_time_minutes,
        ))
    }

    pub fn new_ebook(
        ids: &IdGenerator,
        name: impl Into<String>,
        price: f64,
        author: PersonName,
        pages: u32,
    ) -> Self {
        Product::EBook(BookProduct::new(ids, name, price, author, pages))
    }

    pub fn new_paper_book(
        ids: &IdGenerator,
        name: impl Into<String>,
        price: f64,
        author: PersonName,
        pages: u32,
    ) -> Self {
        Product::PaperBook(BookProduct::new(ids, name, price, author, pages))
    }

    fn base(&self) -> &ProductBase {
        match self {
            Product::Audio(p) => p.base(),
            Product::Video(p) => p.base(),
            Product::EBook(p) | Product::PaperBook(p) => p.base(),
        }
    }

    fn base_mut(&mut self) -> &mut ProductBase {
        match self {
            Product::Audio(p) => p.base_mut(),
            Product::Video(p) => p.base_mut(),
            Product::EBook(p) | Product::PaperBook(p) => p.base_mut(),
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.base().id()
    }

    pub fn name(&self) -> &str {
        self.base().name()
    }

    pub fn price(&self) -> f64 {
        self.base().price()
    }

    pub fn review_rate(&self) -> f64 {
        self.base().review_rate()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.base_mut().set_name(name);
    }

    pub fn set_price(&mut self, price: f64) {
        self.base_mut().set_price(price);
    }

    pub fn set_review_rate(&mut self, rate: f64) {
        self.base_mut().set_review_rate(rate);
    }

    pub fn category(&self) -> Category {
        match self {
            Product::Audio(_) => Category::Music,
            Product::Video(_) => Category::Movie,
            Product::EBook(_) => Category::EBook,
            Product::PaperBook(_) => Category::PaperBook,
        }
    }

    /// Category-specific detail for the display layer.
    pub fn contents(&self) -> ContentInfo<'_> {
        match self {
            Product::Audio(p) => ContentInfo::Music { singer: p.singer(), genre: p.genre() },
            Product::Video(p) => ContentInfo::Movie {
                release_year: p.release_year(),
                film_rating: p.film_rating(),
                run_time_minutes: p.run_time_minutes(),
                director: p.director(),
            },
            Product::EBook(p) | Product::PaperBook(p) => {
                ContentInfo::Book { author: p.author(), pages: p.pages() }
            }
        }
    }

    pub fn as_audio(&self) -> Option<&AudioProduct> {
        match self {
            Product::Audio(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_audio_mut(&mut self) -> Option<&mut AudioProduct> {
        match self {
            Product::Audio(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_video(&self) -> Option<&VideoProduct> {
        match self {
            Product::Video(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_video_mut(&mut self) -> Option<&mut VideoProduct> {
        match self {
            Product::Video(p) => Some(p),
            _ => None,
        }
    }

    /// Shared book body of either book category.
    pub fn as_book(&self) -> Option<&BookProduct> {
        match self {
            Product::EBook(p) | Product::PaperBook(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_book_mut(&mut self) -> Option<&mut BookProduct> {
        match self {
            Product::EBook(p) | Product::PaperBook(p) => Some(p),
            _ => None,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        self.base().id_ref()
    }
}

impl From<AudioProduct> for Product {
    fn from(value: AudioProduct) -> Self {
        Product::Audio(value)
    }
}

impl From<VideoProduct> for Product {
    fn from(value: VideoProduct) -> Self {
        Product::Video(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> IdGenerator {
        IdGenerator::new()
    }

    #[test]
    fn identifiers_are_strictly_increasing_across_categories() {
        let ids = ids();
        let products = [
            Product::new_audio(&ids, "Yesterday", 16.5, PersonName::first_only("Beetles")),
            Product::new_video(&ids, "Star Wars", 22.0, PersonName::new("George", "Lucas"), 1977, 120),
            Product::new_ebook(&ids, "1984", 12.0, PersonName::new("George", "Orwell"), 328),
            Product::new_paper_book(&ids, "1984", 12.0, PersonName::new("George", "Orwell"), 328),
        ];
        for pair in products.windows(2) {
            assert!(pair[0].product_id() < pair[1].product_id());
        }
    }

    #[test]
    fn empty_name_is_replaced_by_sentinel_at_construction() {
        let ids = ids();
        let product = Product::new_audio(&ids, "", 10.0, PersonName::first_only("Queen"));
        assert_eq!(product.name(), NO_NAME_PRODUCT);
    }

    #[test]
    fn empty_name_is_replaced_by_sentinel_on_rename() {
        let ids = ids();
        let mut product = Product::new_audio(&ids, "Yesterday", 10.0, PersonName::first_only("Beetles"));
        product.set_name("");
        assert_eq!(product.name(), NO_NAME_PRODUCT);

        product.set_name("Imagine");
        assert_eq!(product.name(), "Imagine");
    }

    #[test]
    fn price_is_clamped_at_construction() {
        let ids = ids();
        let too_high = Product::new_ebook(&ids, "Book", 1500.0, PersonName::first_only("A"), 10);
        assert_eq!(too_high.price(), MAX_PRICE);

        let too_low = Product::new_ebook(&ids, "Book", -5.0, PersonName::first_only("A"), 10);
        assert_eq!(too_low.price(), MIN_PRICE);
    }

    #[test]
    fn price_is_clamped_on_update() {
        let ids = ids();
        let mut product = Product::new_ebook(&ids, "Book", 10.0, PersonName::first_only("A"), 10);

        product.set_price(2000.0);
        assert_eq!(product.price(), MAX_PRICE);

        product.set_price(-1.0);
        assert_eq!(product.price(), MIN_PRICE);

        product.set_price(999.99);
        assert_eq!(product.price(), 999.99);
    }

    #[test]
    fn review_rate_starts_at_zero_and_is_stored_verbatim() {
        let ids = ids();
        let mut product = Product::new_audio(&ids, "Yesterday", 10.0, PersonName::first_only("Beetles"));
        assert_eq!(product.review_rate(), 0.0);

        product.set_review_rate(42.5);
        assert_eq!(product.review_rate(), 42.5);

        product.set_review_rate(-3.0);
        assert_eq!(product.review_rate(), -3.0);
    }

    #[test]
    fn category_labels_are_exact_per_variant() {
        let ids = ids();
        let audio = Product::new_audio(&ids, "A", 1.0, PersonName::first_only("S"));
        let video = Product::new_video(&ids, "V", 1.0, PersonName::first_only("D"), 2000, 90);
        let ebook = Product::new_ebook(&ids, "E", 1.0, PersonName::first_only("W"), 1);
        let paper = Product::new_paper_book(&ids, "P", 1.0, PersonName::first_only("W"), 1);

        assert_eq!(audio.category().to_string(), "Music");
        assert_eq!(video.category().to_string(), "Movie");
        assert_eq!(ebook.category().to_string(), "E book");
        assert_eq!(paper.category().to_string(), "Paper book");
    }

    #[test]
    fn both_book_categories_share_the_book_projection() {
        let ids = ids();
        let author = PersonName::new("Ernest", "Hemmingway");
        let ebook = Product::new_ebook(&ids, "The Old Man and the Sea", 8.3, author.clone(), 127);
        let paper = Product::new_paper_book(&ids, "The Old Man and the Sea", 8.3, author.clone(), 127);

        for product in [&ebook, &paper] {
            match product.contents() {
                ContentInfo::Book { author: a, pages } => {
                    assert_eq!(a, &author);
                    assert_eq!(pages, 127);
                }
                other => panic!("expected Book contents, got {other:?}"),
            }
        }
    }

    #[test]
    fn variant_access_allows_category_specific_mutation() {
        let ids = ids();
        let mut product = Product::new_audio(&ids, "Yesterday", 16.5, PersonName::first_only("Beetles"));
        assert_eq!(product.as_audio().unwrap().genre(), Genre::Pop);

        product.as_audio_mut().unwrap().set_genre(Genre::Rock);
        assert_eq!(product.as_audio().unwrap().genre(), Genre::Rock);

        assert!(product.as_video().is_none());
        assert!(product.as_book().is_none());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: set_price followed by price yields max(0, min(p, 1000)).
            #[test]
            fn price_clamp_round_trip(p in -1.0e6f64..1.0e6) {
                let ids = IdGenerator::new();
                let mut product =
                    Product::new_audio(&ids, "X", 1.0, PersonName::first_only("S"));
                product.set_price(p);
                prop_assert_eq!(product.price(), p.max(MIN_PRICE).min(MAX_PRICE));
            }

            /// Property: non-empty names survive set_name unchanged.
            #[test]
            fn non_empty_names_are_kept_verbatim(name in ".{1,40}") {
                let ids = IdGenerator::new();
                let mut product =
                    Product::new_audio(&ids, "X", 1.0, PersonName::first_only("S"));
                product.set_name(name.clone());
                prop_assert_eq!(product.name(), name.as_str());
            }

            /// Property: identifiers are pairwise unique for any creation count.
            #[test]
            fn identifiers_are_pairwise_unique(count in 1usize..50) {
                let ids = IdGenerator::new();
                let mut seen = std::collections::HashSet::new();
                for _ in 0..count {
                    let product =
                        Product::new_ebook(&ids, "B", 1.0, PersonName::first_only("A"), 1);
                    prop_assert!(seen.insert(product.product_id()));
                }
            }
        }
    }
}
