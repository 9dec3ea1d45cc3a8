use core::str::FromStr;

use serde::{Deserialize, Serialize};

use minimart_core::{DomainError, IdGenerator, PersonName};

use crate::product::ProductBase;

/// Film rating of a video product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilmRating {
    NotRated,
    G,
    Pg,
    Pg13,
    R,
    Nc17,
}

impl FilmRating {
    pub fn label(&self) -> &'static str {
        match self {
            FilmRating::NotRated => "NotRated",
            FilmRating::G => "G",
            FilmRating::Pg => "PG",
            FilmRating::Pg13 => "PG_13",
            FilmRating::R => "R",
            FilmRating::Nc17 => "NC_17",
        }
    }

    pub const ALL: [FilmRating; 6] = [
        FilmRating::NotRated,
        FilmRating::G,
        FilmRating::Pg,
        FilmRating::Pg13,
        FilmRating::R,
        FilmRating::Nc17,
    ];
}

impl core::fmt::Display for FilmRating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilmRating {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilmRating::ALL
            .into_iter()
            .find(|rating| rating.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::validation(format!("unknown film rating: {s}")))
    }
}

/// Video category variant: a film with a director, rating, release year, and
/// runtime.
///
/// Rating defaults to [`FilmRating::NotRated`] at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoProduct {
    #[serde(flatten)]
    base: ProductBase,
    director: PersonName,
    film_rating: FilmRating,
    release_year: i32,
    run_time_minutes: u32,
}

impl VideoProduct {
    pub fn new(
        ids: &IdGenerator,
        name: impl Into<String>,
        price: f64,
        director: PersonName,
        release_year: i32,
        run_time_minutes: u32,
    ) -> Self {
        Self {
            base: ProductBase::new(ids, name, price),
            director,
            film_rating: FilmRating::NotRated,
            release_year,
            run_time_minutes,
        }
    }

    pub(crate) fn base(&self) -> &ProductBase {
        &self.base
    }

    pub(crate) fn base_mut(&mut self) -> &mut ProductBase {
        &mut self.base
    }

    pub fn director(&self) -> &PersonName {
        &self.director
    }

    pub fn film_rating(&self) -> FilmRating {
        self.film_rating
    }

    pub fn release_year(&self) -> i32 {
        self.release_year
    }

    pub fn run_time_minutes(&self) -> u32 {
        self.run_time_minutes
    }

    pub fn set_director(&mut self, director: PersonName) {
        self.director = director;
    }

    pub fn set_film_rating(&mut self, rating: FilmRating) {
        self.film_rating = rating;
    }

    pub fn set_release_year(&mut self, year: i32) {
        self.release_year = year;
    }

    pub fn set_run_time_minutes(&mut self, minutes: u32) {
        self.run_time_minutes = minutes;
    }

    /// Whether the film was released at or after the threshold year
    /// (inclusive comparison).
    pub fn is_new_release(&self, year_threshold: i32) -> bool {
        self.release_year >= year_threshold
    }
}
