// Text comparison engine — normalization, TF-IDF similarity, and missing
// keyword extraction. Everything here is pure and stateless.

pub mod clean;
pub mod keywords;
pub mod similarity;
pub mod stopwords;
pub mod vectorizer;

pub use clean::clean;
pub use keywords::{missing_keywords, ranked_terms, DEFAULT_TOP_N};
pub use similarity::similarity;
pub use vectorizer::TermWeight;
