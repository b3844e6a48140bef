//! Scoring rules from the environment. One test so no other test races on the env vars.

use cricket_scoreboard::ScoringRules;

#[test]
fn rules_from_env_fall_back_to_defaults() {
    std::env::remove_var("CRICKET_POINTS_PER_WIN");
    std::env::remove_var("CRICKET_POINTS_PER_TIE");
    std::env::remove_var("CRICKET_POINTS_PER_NO_RESULT");
    std::env::remove_var("CRICKET_STATS_TOLERANCE");
    assert_eq!(ScoringRules::from_env(), ScoringRules::default());

    std::env::set_var("CRICKET_POINTS_PER_WIN", " 4 ");
    std::env::set_var("CRICKET_POINTS_PER_TIE", "two");
    std::env::set_var("CRICKET_STATS_TOLERANCE", "0.001");
    let rules = ScoringRules::from_env();
    assert_eq!(rules.points_per_win, 4);
    assert_eq!(rules.points_per_tie, 1);
    assert_eq!(rules.points_per_no_result, 1);
    assert_eq!(rules.stats_tolerance, 0.001);
    assert_eq!(rules.points(2, 1, 1), 10);
}
