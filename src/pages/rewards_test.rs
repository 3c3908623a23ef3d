use super::*;

#[test]
fn list_heading_names_each_mode() {
    assert_eq!(list_heading(true), "Recommended Rewards (Ranked)");
    assert_eq!(list_heading(false), "All Rewards");
}

#[test]
fn rank_label_is_one_based() {
    assert_eq!(rank_label(0), "#1");
    assert_eq!(rank_label(9), "#10");
}
