//! Domain Module Tests
//!
//! ## Test Scopes
//! - **Content validation**: empty/whitespace rejection and the raw-length upper bound.
//! - **Follow validation**: self-follow rejection.
//! - **Clocks**: strict monotonicity of the system clock and stepping of the manual clock.
//! - **Serialization**: the JSON shape handed to HTTP clients.

#[cfg(test)]
mod tests {
    use crate::domain::clock::{Clock, ManualClock, SystemClock};
    use crate::domain::error::DomainError;
    use crate::domain::types::*;
    use chrono::{DateTime, Duration, Utc};

    fn fixed_clock() -> ManualClock {
        let start = DateTime::parse_from_rfc3339("2024-01-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        ManualClock::new(start, Duration::seconds(1))
    }

    // ============================================================
    // CONTENT VALIDATION
    // ============================================================

    #[test]
    fn test_compose_valid_tweet() {
        let clock = fixed_clock();
        let tweet = Tweet::compose(UserId::from("user123"), "Hello, world!", &clock).unwrap();

        assert_eq!(tweet.author_id, UserId::from("user123"));
        assert_eq!(tweet.content, "Hello, world!");
        assert!(!tweet.id.0.is_empty());
    }

    #[test]
    fn test_empty_content_rejected() {
        assert_eq!(validate_content(""), Err(DomainError::EmptyContent));
    }

    #[test]
    fn test_whitespace_only_content_rejected() {
        assert_eq!(validate_content("   "), Err(DomainError::EmptyContent));
        assert_eq!(validate_content("\n\t  \r\n"), Err(DomainError::EmptyContent));
    }

    #[test]
    fn test_content_exactly_at_limit_accepted() {
        let content = "a".repeat(MAX_TWEET_LENGTH);
        assert!(validate_content(&content).is_ok());
    }

    #[test]
    fn test_content_over_limit_rejected() {
        let content = "a".repeat(MAX_TWEET_LENGTH + 1);
        assert_eq!(
            validate_content(&content),
            Err(DomainError::ContentTooLong {
                length: 281,
                max: MAX_TWEET_LENGTH
            })
        );
    }

    #[test]
    fn test_length_checked_on_raw_content() {
        // Trimming would bring this under the limit; the raw length still counts.
        let content = format!("  {}  ", "a".repeat(MAX_TWEET_LENGTH - 2));
        assert_eq!(content.len(), 282);
        assert!(matches!(
            validate_content(&content),
            Err(DomainError::ContentTooLong { .. })
        ));
    }

    #[test]
    fn test_length_counts_bytes() {
        // 71 four-byte emoji = 284 bytes, only 71 chars.
        let content = "🚀".repeat(71);
        assert!(matches!(
            validate_content(&content),
            Err(DomainError::ContentTooLong { length: 284, .. })
        ));
    }

    #[test]
    fn test_compose_keeps_untrimmed_content() {
        let clock = fixed_clock();
        let tweet = Tweet::compose(UserId::from("u"), "  padded  ", &clock).unwrap();
        assert_eq!(tweet.content, "  padded  ");
    }

    #[test]
    fn test_compose_generates_unique_ids() {
        let clock = fixed_clock();
        let a = Tweet::compose(UserId::from("u"), "one", &clock).unwrap();
        let b = Tweet::compose(UserId::from("u"), "two", &clock).unwrap();
        assert_ne!(a.id, b.id);
    }

    // ============================================================
    // FOLLOW VALIDATION
    // ============================================================

    #[test]
    fn test_valid_follow() {
        assert!(validate_follow(&UserId::from("user1"), &UserId::from("user2")).is_ok());
        let edge = FollowEdge::new(UserId::from("user1"), UserId::from("user2")).unwrap();
        assert_eq!(edge.followee_id, UserId::from("user2"));
    }

    #[test]
    fn test_self_follow_rejected() {
        assert_eq!(
            FollowEdge::new(UserId::from("user1"), UserId::from("user1")),
            Err(DomainError::SelfFollow)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DomainError::EmptyContent.to_string(),
            "tweet content cannot be empty"
        );
        assert_eq!(DomainError::SelfFollow.to_string(), "cannot follow yourself");
        assert!(
            DomainError::ContentTooLong { length: 300, max: 280 }
                .to_string()
                .starts_with("tweet exceeds character limit")
        );
    }

    // ============================================================
    // USERS
    // ============================================================

    #[test]
    fn test_provisioned_user_keeps_id() {
        let user = User::provisioned(UserId::from("newUser"));
        assert_eq!(user.id, UserId::from("newUser"));
        assert_eq!(user.name, "User-newUser");
    }

    // ============================================================
    // CLOCKS
    // ============================================================

    #[test]
    fn test_system_clock_strictly_increasing() {
        let clock = SystemClock::new();
        let mut prev = clock.now();
        for _ in 0..10_000 {
            let next = clock.now();
            assert!(next > prev, "{} should be after {}", next, prev);
            prev = next;
        }
    }

    #[test]
    fn test_system_clock_concurrent_stamps_are_unique() {
        let clock = std::sync::Arc::new(SystemClock::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let clock = clock.clone();
                std::thread::spawn(move || (0..1000).map(|_| clock.now()).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<DateTime<Utc>> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let total = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), total);
    }

    #[test]
    fn test_manual_clock_steps() {
        let clock = fixed_clock();
        let first = clock.now();
        let second = clock.now();
        assert_eq!(second - first, Duration::seconds(1));

        clock.set(first);
        assert_eq!(clock.now(), first);
    }

    // ============================================================
    // SERIALIZATION
    // ============================================================

    #[test]
    fn test_tweet_json_shape() {
        let clock = fixed_clock();
        let tweet = Tweet::compose(UserId::from("alice"), "hi", &clock).unwrap();
        let json = serde_json::to_value(&tweet).unwrap();

        assert_eq!(json["user_id"], "alice");
        assert_eq!(json["content"], "hi");
        assert_eq!(json["created_at"], "2024-01-01T12:00:00Z");
        assert!(json["id"].is_string());
    }
}
