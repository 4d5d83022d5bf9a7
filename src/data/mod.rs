//! Static verse content and lookup helpers

pub mod verses;

pub use verses::{
    categories_for_tier, random_verses, search_verses, verses_by_category, verses_for_tier,
    VerseEntry,
};
