use crate::domain::Tweet;

/// Orders tweets newest first. Equal timestamps fall back to ascending tweet id
/// so the result is reproducible.
pub fn sort_newest_first(tweets: &mut [Tweet]) {
    tweets.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}
