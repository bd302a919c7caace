//! Mood arithmetic
//!
//! Recency filtering, averaging, and the symbolic representation of a score.
//! Everything here is pure.

use chrono::{DateTime, Duration, Utc};

use crate::entities::TextRecord;
use crate::value_objects::SentimentScore;

/// Default recency window for the aggregate mood
pub const RECENT_WINDOW_MINUTES: i64 = 60;

/// Emoji used when the score is unknown
pub const UNKNOWN_EMOJI: &str = "🤷";

/// Keep the records created within `window` before `now`
pub fn recent_records(records: &[TextRecord], window: Duration, now: DateTime<Utc>) -> Vec<TextRecord> {
    records
        .iter()
        .filter(|record| record.is_recent(window, now))
        .cloned()
        .collect()
}

/// Sort records by creation time, newest first
pub fn sort_newest_first(records: &mut [TextRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Mean of the known sentiment scores
///
/// Records carrying the unknown sentinel are skipped. With no known score
/// at all the result is [`SentimentScore::UNKNOWN`].
pub fn average_sentiment<'a, I>(records: I) -> SentimentScore
where
    I: IntoIterator<Item = &'a TextRecord>,
{
    let (sum, count) = records
        .into_iter()
        .filter_map(|record| record.sentiment_score.known())
        .fold((0.0_f64, 0_u32), |(sum, count), score| (sum + score, count + 1));

    if count == 0 {
        SentimentScore::UNKNOWN
    } else {
        SentimentScore::new(sum / f64::from(count))
    }
}

/// Symbolic representation of a score, used in SMS replies
pub fn sentiment_emoji(score: SentimentScore) -> &'static str {
    match score.known() {
        None => UNKNOWN_EMOJI,
        Some(s) if s < 0.4 => "😢",
        Some(s) if s <= 0.6 => "😐",
        Some(_) => "😃",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::DisplayColor;

    fn record_at(score: f64, created_at: DateTime<Utc>) -> TextRecord {
        let mut record = TextRecord::new("text", SentimentScore::new(score));
        record.created_at = created_at;
        record
    }

    #[test]
    fn test_recent_records_keeps_exactly_the_window() {
        let now = Utc::now();
        let records = vec![
            record_at(0.1, now - Duration::minutes(5)),
            record_at(0.2, now - Duration::minutes(90)),
            record_at(0.3, now - Duration::minutes(60)),
            record_at(0.4, now + Duration::minutes(1)),
            record_at(0.5, now - Duration::days(2)),
        ];

        let recent = recent_records(&records, Duration::hours(1), now);
        let ids: Vec<_> = recent.iter().map(|r| r.id).collect();

        assert_eq!(ids, vec![records[0].id, records[2].id]);
    }

    #[test]
    fn test_recent_records_empty_input() {
        assert!(recent_records(&[], Duration::hours(1), Utc::now()).is_empty());
    }

    #[test]
    fn test_sort_newest_first() {
        let now = Utc::now();
        let mut records = vec![
            record_at(0.1, now - Duration::minutes(30)),
            record_at(0.2, now - Duration::minutes(1)),
            record_at(0.3, now - Duration::minutes(10)),
        ];
        sort_newest_first(&mut records);

        assert!(records.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert_eq!(records[0].sentiment_score.known(), Some(0.2));
    }

    #[test]
    fn test_average_of_empty_list_is_unknown() {
        let empty: Vec<TextRecord> = Vec::new();
        assert_eq!(average_sentiment(&empty), SentimentScore::UNKNOWN);
    }

    #[test]
    fn test_average_skips_unknown_scores() {
        let now = Utc::now();
        let mut records = vec![record_at(0.8, now), record_at(0.2, now)];
        records.push(TextRecord::unscored("no score"));

        let average = average_sentiment(&records).known().unwrap();
        assert!((average - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_average_of_only_unknown_scores_is_unknown() {
        let records = vec![TextRecord::unscored("a"), TextRecord::unscored("b")];
        assert!(average_sentiment(&records).is_unknown());
    }

    #[test]
    fn test_average_maps_to_documented_midpoint() {
        let now = Utc::now();
        let records = vec![record_at(0.8, now), record_at(0.2, now)];
        let color = DisplayColor::from_score(average_sentiment(&records));
        assert_eq!(color.to_hex(), "#808000");
    }

    #[test]
    fn test_sentiment_emoji() {
        assert_eq!(sentiment_emoji(SentimentScore::UNKNOWN), UNKNOWN_EMOJI);
        assert_eq!(sentiment_emoji(SentimentScore::new(0.1)), "😢");
        assert_eq!(sentiment_emoji(SentimentScore::new(0.4)), "😐");
        assert_eq!(sentiment_emoji(SentimentScore::new(0.6)), "😐");
        assert_eq!(sentiment_emoji(SentimentScore::new(0.95)), "😃");
    }
}
