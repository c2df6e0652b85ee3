//! Unit tests for SERP traffic aggregation

use std::collections::HashMap;

use serpshare::analysis::traffic::TrafficAggregator;
use serpshare::models::serp::{SerpItem, SerpPage};

fn item(domain: &str, rank_group: u32, item_type: &str) -> SerpItem {
    SerpItem {
        item_type: item_type.to_string(),
        domain: domain.to_string(),
        url: format!("https://{}/page", domain),
        title: format!("{} result", domain),
        rank_group,
    }
}

fn page(keyword: &str, items: Vec<SerpItem>) -> SerpPage {
    SerpPage {
        keyword: keyword.to_string(),
        items,
    }
}

fn volumes(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn test_accumulates_volume_times_ctr() {
    let pages = vec![page(
        "widgets",
        vec![item("a.com", 1, "organic"), item("b.com", 2, "organic")],
    )];
    let summary =
        TrafficAggregator::aggregate(&pages, &volumes(&[("widgets", 1000)]), &[]);

    assert_eq!(summary.domain_traffic.len(), 2);
    assert_eq!(summary.domain_traffic[0].domain, "a.com");
    assert!((summary.domain_traffic[0].estimated_traffic - 300.0).abs() < 1e-9);
    assert!((summary.domain_traffic[1].estimated_traffic - 150.0).abs() < 1e-9);
    assert!((summary.total_market_traffic - 450.0).abs() < 1e-9);
}

#[test]
fn test_total_equals_sum_over_domains() {
    let pages = vec![
        page("widgets", vec![item("a.com", 1, "organic")]),
        page(
            "blue widgets",
            vec![item("b.com", 1, "organic"), item("a.com", 3, "organic")],
        ),
    ];
    let summary = TrafficAggregator::aggregate(
        &pages,
        &volumes(&[("widgets", 1000), ("blue widgets", 500)]),
        &[],
    );

    let sum: f64 = summary
        .domain_traffic
        .iter()
        .map(|r| r.estimated_traffic)
        .sum();
    assert!((sum - summary.total_market_traffic).abs() < 1e-9);
}

#[test]
fn test_non_organic_items_are_skipped_entirely() {
    let pages = vec![page(
        "widgets",
        vec![item("ads.com", 1, "paid"), item("a.com", 1, "organic")],
    )];
    let summary =
        TrafficAggregator::aggregate(&pages, &volumes(&[("widgets", 1000)]), &[]);

    assert_eq!(summary.domain_traffic.len(), 1);
    assert_eq!(summary.detail_rows.len(), 1);
    assert_eq!(summary.detail_rows[0].domain, "a.com");
}

#[test]
fn test_excluded_domains_leave_no_detail_row() {
    let pages = vec![page(
        "widgets",
        vec![
            item("wikipedia.org", 1, "organic"),
            item("a.com", 2, "organic"),
        ],
    )];
    let summary = TrafficAggregator::aggregate(
        &pages,
        &volumes(&[("widgets", 1000)]),
        &["wikipedia.org".to_string()],
    );

    assert_eq!(summary.domain_traffic.len(), 1);
    assert_eq!(summary.domain_traffic[0].domain, "a.com");
    assert_eq!(summary.detail_rows.len(), 1);
}

#[test]
fn test_unknown_keyword_counts_as_zero_volume() {
    let pages = vec![page("unheard of", vec![item("a.com", 1, "organic")])];
    let summary = TrafficAggregator::aggregate(&pages, &HashMap::new(), &[]);

    assert_eq!(summary.total_market_traffic, 0.0);
    assert_eq!(summary.detail_rows.len(), 1);
    assert_eq!(summary.detail_rows[0].search_volume, 0);
}

#[test]
fn test_deep_positions_keep_detail_rows_at_zero_traffic() {
    let pages = vec![page("widgets", vec![item("a.com", 45, "organic")])];
    let summary =
        TrafficAggregator::aggregate(&pages, &volumes(&[("widgets", 1000)]), &[]);

    assert_eq!(summary.detail_rows.len(), 1);
    assert_eq!(summary.detail_rows[0].ctr, 0.0);
    assert_eq!(summary.detail_rows[0].estimated_traffic, 0.0);
    assert_eq!(summary.total_market_traffic, 0.0);
    assert_eq!(summary.domain_traffic.len(), 1);
}

#[test]
fn test_domain_order_is_first_encountered() {
    let pages = vec![page(
        "widgets",
        vec![
            item("c.com", 3, "organic"),
            item("a.com", 1, "organic"),
            item("b.com", 2, "organic"),
        ],
    )];
    let summary =
        TrafficAggregator::aggregate(&pages, &volumes(&[("widgets", 100)]), &[]);

    let domains: Vec<&str> = summary
        .domain_traffic
        .iter()
        .map(|r| r.domain.as_str())
        .collect();
    assert_eq!(domains, vec!["c.com", "a.com", "b.com"]);
}
