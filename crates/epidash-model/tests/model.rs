//! Serialization checks for the dashboard output entities.

use epidash_model::{AgeBand, AgeBandCounts, DailyCount, MainSummary, Patient, SummaryNode};
use serde_json::json;

#[test]
fn patient_serializes_with_dashboard_keys() {
    let patient = Patient {
        release_date: "2020-03-17T08:00:00".to_string(),
        residence: "大分市".to_string(),
        age_band: "10代".to_string(),
        sex: "女性".to_string(),
        discharged: String::new(),
        date: "2020-03-17".to_string(),
    };
    let value = serde_json::to_value(&patient).expect("serialize patient");
    assert_eq!(
        value,
        json!({
            "リリース日": "2020-03-17T08:00:00",
            "居住地": "大分市",
            "年代": "10代",
            "性別": "女性",
            "退院": "",
            "date": "2020-03-17"
        })
    );
}

#[test]
fn japanese_text_round_trips_unescaped() {
    let count = DailyCount::new("2020-03-17", 1);
    let text = serde_json::to_string(&count).expect("serialize daily count");
    assert!(text.contains("日付"), "non-ASCII keys must stay verbatim");
    assert!(text.contains("小計"));
    let round: DailyCount = serde_json::from_str(&text).expect("deserialize daily count");
    assert_eq!(round, count);
}

#[test]
fn age_band_counts_always_carry_all_five_keys() {
    let value = serde_json::to_value(AgeBandCounts::default()).expect("serialize counts");
    let object = value.as_object().expect("counts serialize to an object");
    assert_eq!(object.len(), 5);
    for band in AgeBand::ALL {
        assert_eq!(object.get(band.label()), Some(&json!(0)), "{band}");
    }
}

#[test]
fn age_band_counts_total_matches_increments() {
    let mut counts = AgeBandCounts::default();
    counts.increment(AgeBand::UnderTen);
    counts.increment(AgeBand::TwentiesThirties);
    counts.increment(AgeBand::TwentiesThirties);
    assert_eq!(counts.total(), 3);
    assert_eq!(counts.get(AgeBand::TwentiesThirties), 2);
    assert_eq!(counts.get(AgeBand::EightiesAndAbove), 0);
}

#[test]
fn main_summary_serializes_as_tree() {
    let summary = MainSummary {
        attr: "累計".to_string(),
        value: 19,
        children: vec![
            SummaryNode::new("入院中", 18),
            SummaryNode::new("死亡", 0),
            SummaryNode::new("退院", 1),
        ],
    };
    let value = serde_json::to_value(&summary).expect("serialize main summary");
    assert_eq!(
        value,
        json!({
            "attr": "累計",
            "value": 19,
            "children": [
                {"attr": "入院中", "value": 18},
                {"attr": "死亡", "value": 0},
                {"attr": "退院", "value": 1}
            ]
        })
    );
}
