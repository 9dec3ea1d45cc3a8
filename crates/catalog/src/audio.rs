use core::str::FromStr;

use serde::{Deserialize, Serialize};

use minimart_core::{DomainError, IdGenerator, PersonName};

use crate::product::ProductBase;

/// Music genre of an audio product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Blues,
    Classical,
    Country,
    Folk,
    Jazz,
    Metal,
    Pop,
    RnB,
    Rock,
}

impl Genre {
    pub fn label(&self) -> &'static str {
        match self {
            Genre::Blues => "Blues",
            Genre::Classical => "Classical",
            Genre::Country => "Country",
            Genre::Folk => "Folk",
            Genre::Jazz => "Jazz",
            Genre::Metal => "Metal",
            Genre::Pop => "Pop",
            Genre::RnB => "RnB",
            Genre::Rock => "Rock",
        }
    }

    pub const ALL: [Genre; 9] = [
        Genre::Blues,
        Genre::Classical,
        Genre::Country,
        Genre::Folk,
        Genre::Jazz,
        Genre::Metal,
        Genre::Pop,
        Genre::RnB,
        Genre::Rock,
    ];
}

impl core::fmt::Display for Genre {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::validation(format!("unknown genre: {s}")))
    }
}

/// Audio category variant: a recording with a singer and a genre.
///
/// Genre defaults to [`Genre::Pop`] at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioProduct {
    #[serde(flatten)]
    base: ProductBase,
    singer: PersonName,
    genre: Genre,
}

impl AudioProduct {
    pub fn new(
        ids: &IdGenerator,
        name: impl Into<String>,
        price: f64,
        singer: PersonName,
    ) -> Self {
        Self {
            base: ProductBase::new(ids, name, price),
            singer,
            genre: Genre::Pop,
        }
    }

    pub(crate) fn base(&self) -> &ProductBase {
        &self.base
    }

    pub(crate) fn base_mut(&mut self) -> &mut ProductBase {
        &mut self.base
    }

    pub fn singer(&self) -> &PersonName {
        &self.singer
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn set_singer(&mut self, singer: PersonName) {
        self.singer = singer;
    }

    pub fn set_genre(&mut self, genre: Genre) {
        self.genre = genre;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_defaults_to_pop() {
        let ids = IdGenerator::new();
        let audio = AudioProduct::new(&ids, "Yesterday", 16.5, PersonName::first_only("Beetles"));
        assert_eq!(audio.genre(), Genre::Pop);
    }

    #[test]
    fn genre_labels_round_trip_through_from_str() {
        for genre in Genre::ALL {
            assert_eq!(genre.label().parse::<Genre>().unwrap(), genre);
        }
    }

    #[test]
    fn genre_parsing_is_case_insensitive() {
        assert_eq!("rnb".parse::<Genre>().unwrap(), Genre::RnB);
        assert_eq!("ROCK".parse::<Genre>().unwrap(), Genre::Rock);
    }

    #[test]
    fn unknown_genre_is_a_validation_error() {
        let err = "polka".parse::<Genre>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn singer_and_genre_are_mutable() {
        let ids = IdGenerator::new();
        let mut audio = AudioProduct::new(&ids, "Imagine", 15.0, PersonName::first_only("Beetles"));
        audio.set_singer(PersonName::new("John", "Lennon"));
        audio.set_genre(Genre::Folk);
        assert_eq!(audio.singer().full_name(), "John Lennon");
        assert_eq!(audio.genre(), Genre::Folk);
    }
}
