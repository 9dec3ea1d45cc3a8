//! Demo dataset: a small fixed catalog and its cart owner.

use minimart_catalog::{FilmRating, Genre, Product};
use minimart_core::{IdGenerator, PersonName};

/// Build the demo catalog: three audio products, two videos, two books, and
/// one extra audio product used to overflow the cart.
pub fn demo_catalog(ids: &IdGenerator) -> Vec<Product> {
    let mut music1 = Product::new_audio(ids, "Yesterday", 16.5, PersonName::first_only("Beetles"));
    if let Some(audio) = music1.as_audio_mut() {
        audio.set_genre(Genre::Pop);
    }
    music1.set_review_rate(9.8);

    let mut music2 = Product::new_audio(
        ids,
        "We are the World",
        13.75,
        PersonName::new("Michael", "Jackson"),
    );
    if let Some(audio) = music2.as_audio_mut() {
        audio.set_genre(Genre::Country);
    }
    music2.set_review_rate(9.1);

    let mut music3 =
        Product::new_audio(ids, "Bohemian Rhapsody", 18.0, PersonName::first_only("Queen"));
    if let Some(audio) = music3.as_audio_mut() {
        audio.set_genre(Genre::Rock);
    }
    music3.set_review_rate(9.9);

    let mut video1 = Product::new_video(
        ids,
        "Sound of Music",
        22.0,
        PersonName::new("Robert", "Wise"),
        1965,
        175,
    );
    if let Some(video) = video1.as_video_mut() {
        video.set_film_rating(FilmRating::G);
    }
    video1.set_review_rate(9.2);

    let mut video2 = Product::new_video(
        ids,
        "Star Wars",
        22.0,
        PersonName::new("George", "Lucas"),
        1977,
        120,
    );
    if let Some(video) = video2.as_video_mut() {
        video.set_film_rating(FilmRating::Pg);
    }
    video2.set_review_rate(8.5);

    let mut ebook1 = Product::new_ebook(
        ids,
        "The Old Man and the Sea",
        8.3,
        PersonName::new("Ernest", "Hemmingway"),
        127,
    );
    ebook1.set_review_rate(9.5);

    let mut paperbook1 =
        Product::new_paper_book(ids, "1984", 12.0, PersonName::new("George", "Orwell"), 328);
    paperbook1.set_review_rate(9.7);

    let mut extra_music =
        Product::new_audio(ids, "Imagine", 15.0, PersonName::new("John", "Lennon"));
    if let Some(audio) = extra_music.as_audio_mut() {
        audio.set_genre(Genre::Folk);
    }
    extra_music.set_review_rate(9.3);

    vec![music1, music2, music3, video1, video2, ebook1, paperbook1, extra_music]
}

pub fn demo_owner() -> PersonName {
    PersonName::new("John", "Smith")
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimart_catalog::Category;

    #[test]
    fn demo_catalog_has_eight_products_with_increasing_ids() {
        let ids = IdGenerator::new();
        let catalog = demo_catalog(&ids);
        assert_eq!(catalog.len(), 8);
        for pair in catalog.windows(2) {
            assert!(pair[0].product_id() < pair[1].product_id());
        }
    }

    #[test]
    fn demo_catalog_covers_every_category() {
        let ids = IdGenerator::new();
        let catalog = demo_catalog(&ids);
        for category in
            [Category::Music, Category::Movie, Category::EBook, Category::PaperBook]
        {
            assert!(catalog.iter().any(|p| p.category() == category), "missing {category}");
        }
    }
}
