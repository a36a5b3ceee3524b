use super::*;

#[test]
fn six_features_with_distinct_titles() {
    let mut titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
    titles.sort_unstable();
    titles.dedup();
    assert_eq!(titles.len(), 6);
}

#[test]
fn features_have_copy() {
    for f in &FEATURES {
        assert!(!f.icon.is_empty());
        assert!(f.description.ends_with('.'), "{} description", f.title);
    }
}

#[test]
fn quick_stats_labels() {
    let labels: Vec<_> = QUICK_STATS.iter().map(|(_, label)| *label).collect();
    assert_eq!(labels, ["Active Players", "Games Played", "Online Matches"]);
}
