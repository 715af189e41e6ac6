//! Search module.
//!
//! Text normalization, relevance scoring, the filter/score/sort pipeline,
//! type-ahead suggestions and popular searches. Everything here is pure
//! computation over already-loaded records.

mod filter;
mod normalize;
mod pipeline;
mod popular;
mod query;
mod results;
mod scorer;
mod suggest;

pub use filter::ProductFilter;
pub use normalize::{normalize, terms};
pub use pipeline::rank;
pub use popular::popular_searches;
pub use query::{SearchQuery, SortOption};
pub use results::{SearchHit, SearchResults};
pub use scorer::{ScoreWeights, Scorer};
pub use suggest::{suggest, Suggestion, SuggestionKind, SuggestionSources};
