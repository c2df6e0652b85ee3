//! Unit tests for multi-source keyword merging

use serpshare::analysis::keywords::KeywordAggregator;
use serpshare::models::keyword::KeywordObservation;

fn obs(keyword: &str, search_volume: u64) -> KeywordObservation {
    KeywordObservation {
        keyword: keyword.to_string(),
        search_volume,
    }
}

#[test]
fn test_max_volume_wins_across_sources() {
    let aggregator = KeywordAggregator::new(false);
    let merged = aggregator.merge(
        &[vec![obs("shoes", 500)], vec![obs("shoes", 800)]],
        &[],
    );
    assert_eq!(merged.len(), 1);
    assert_eq!(merged.observations[0].search_volume, 800);
}

#[test]
fn test_max_merge_keeps_higher_earlier_volume() {
    let aggregator = KeywordAggregator::new(false);
    let merged = aggregator.merge(
        &[vec![obs("shoes", 800)], vec![obs("shoes", 500)]],
        &[],
    );
    assert_eq!(merged.observations[0].search_volume, 800);
}

#[test]
fn test_volume_floor_drops_below_ten() {
    let aggregator = KeywordAggregator::new(false);
    let merged = aggregator.merge(&[vec![obs("rare", 9), obs("common", 10)]], &[]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged.observations[0].keyword, "common");
}

#[test]
fn test_unknown_volume_kept_only_when_permitted() {
    let strict = KeywordAggregator::new(false);
    assert!(strict.merge(&[vec![obs("suggested", 0)]], &[]).is_empty());

    let permissive = KeywordAggregator::new(true);
    let merged = permissive.merge(&[vec![obs("suggested", 0)]], &[]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged.observations[0].search_volume, 0);
}

#[test]
fn test_low_but_nonzero_volume_dropped_even_when_unknown_permitted() {
    let permissive = KeywordAggregator::new(true);
    assert!(permissive.merge(&[vec![obs("rare", 5)]], &[]).is_empty());
}

#[test]
fn test_zero_volume_does_not_downgrade_known_volume() {
    let aggregator = KeywordAggregator::new(true);
    let merged = aggregator.merge(
        &[vec![obs("shoes", 800)], vec![obs("shoes", 0)]],
        &[],
    );
    assert_eq!(merged.observations[0].search_volume, 800);
}

#[test]
fn test_negative_terms_filter_observations() {
    let aggregator = KeywordAggregator::new(false);
    let merged = aggregator.merge(
        &[vec![obs("buy shoes", 500), obs("google shoes", 900)]],
        &["google".to_string()],
    );
    assert_eq!(merged.len(), 1);
    assert_eq!(merged.observations[0].keyword, "buy shoes");
}

#[test]
fn test_sorted_by_volume_descending() {
    let aggregator = KeywordAggregator::new(false);
    let merged = aggregator.merge(
        &[vec![obs("low", 20), obs("high", 900), obs("mid", 300)]],
        &[],
    );
    let keywords: Vec<&str> = merged
        .observations
        .iter()
        .map(|o| o.keyword.as_str())
        .collect();
    assert_eq!(keywords, vec!["high", "mid", "low"]);
}

#[test]
fn test_ties_keep_first_encountered_order() {
    let aggregator = KeywordAggregator::new(false);
    let merged = aggregator.merge(
        &[vec![obs("first", 100), obs("second", 100), obs("third", 100)]],
        &[],
    );
    let keywords: Vec<&str> = merged
        .observations
        .iter()
        .map(|o| o.keyword.as_str())
        .collect();
    assert_eq!(keywords, vec!["first", "second", "third"]);
}

#[test]
fn test_empty_source_contributes_nothing() {
    let aggregator = KeywordAggregator::new(false);
    let merged = aggregator.merge(&[Vec::new(), vec![obs("shoes", 500)]], &[]);
    assert_eq!(merged.len(), 1);
}
