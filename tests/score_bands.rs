// tests/score_bands.rs
use seo_audit::audit::ScoreBand;

#[test]
fn band_thresholds() {
    assert_eq!(ScoreBand::classify(100), ScoreBand::Good);
    assert_eq!(ScoreBand::classify(90), ScoreBand::Good);
    assert_eq!(ScoreBand::classify(89), ScoreBand::Warning);
    assert_eq!(ScoreBand::classify(70), ScoreBand::Warning);
    assert_eq!(ScoreBand::classify(69), ScoreBand::Critical);
    assert_eq!(ScoreBand::classify(0), ScoreBand::Critical);
}

#[test]
fn band_labels() {
    assert_eq!(ScoreBand::classify(95).label(), "good");
    assert_eq!(ScoreBand::classify(75).label(), "warning");
    assert_eq!(ScoreBand::classify(45).label(), "critical");
}
