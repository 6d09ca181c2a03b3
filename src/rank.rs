//! Sentiment ranking.

use crate::model::{Review, ScoredReview};
use crate::sentiment::SentimentScorer;

/// Score every review once and order by descending compound score.
///
/// The sort is stable, so reviews with equal compound scores keep their
/// input order.
pub fn rank_reviews<S>(reviews: Vec<Review>, scorer: &S) -> Vec<ScoredReview>
where
    S: SentimentScorer + ?Sized,
{
    let mut scored: Vec<ScoredReview> = reviews
        .into_iter()
        .map(|review| {
            let sentiment = scorer.score(&review.body);
            ScoredReview { review, sentiment }
        })
        .collect();
    scored.sort_by(|a, b| b.sentiment.compound.total_cmp(&a.sentiment.compound));
    scored
}
