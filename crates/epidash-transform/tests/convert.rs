//! End-to-end transform checks against the published open-data fixtures.

use chrono::NaiveDate;
use epidash_ingest::records_from_reader;
use epidash_model::{AgeBand, DailyCount, Record};
use epidash_transform::{
    FixedClock, inspections_summary, main_summary, patients, patients_summary_by_age,
    patients_summary_by_date, querents_summary, sickbeds_summary,
};
use serde_json::json;

const PATIENTS_CSV: &str = "\
No,全国地方公共団体コード,都道府県名,市区町村名,公表_年月日,曜日,発症_年月日,居住地,年代,性別,患者_属性,患者_状態,患者_症状,患者_渡航歴の有無フラグ,備考,退院済フラグ,職業
2,440001,大分県,,2020/03/17,木,,大分市,10代,女性,,,,,,\"\",自営業
2,440001,大分県,,2020/03/19,木,,臼杵市,20代,男性,,,,,,\"\",自営業
3,440001,大分県,,2020/03/19,木,,臼杵市,30代,女性,,,,,,\"\",無職
4,440001,大分県,,2020/03/20,金,,大分市,40代,女性,,,,,,\"\",医療機関職員
5,440001,大分県,,2020/03/20,金,,大分市,60代,女性,,,,,,\"\",医療機関職員
6,440001,大分県,,2020/03/20,金,,大分市,90代,女性,,,,,,\"\",医療機関職員
";

const SUMMARY_CSV: &str = "\
日付,検査実施件数,うち陽性,相談窓口相談件数,退院,死亡
3月20日,67,5,100,,
3月21日,111,7,117,,
3月22日,182,6,99,1,
3月23日,205,1,311,,
";

fn patient_rows() -> Vec<Record> {
    records_from_reader(PATIENTS_CSV.as_bytes()).expect("parse patients fixture")
}

fn summary_rows() -> Vec<Record> {
    records_from_reader(SUMMARY_CSV.as_bytes()).expect("parse summary fixture")
}

/// 21:00 on 2020-03-25: cutoff 2020-03-24, implied year 2020.
fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2020, 3, 25)
            .expect("valid date")
            .and_hms_opt(21, 0, 0)
            .expect("valid time"),
    )
}

#[test]
fn patient_list_matches_dashboard_shape() {
    let projected = patients(&patient_rows()).expect("project patients");
    let value = serde_json::to_value(&projected).expect("serialize patients");
    assert_eq!(
        value,
        json!([
            {
                "リリース日": "2020-03-17T08:00:00",
                "居住地": "大分市",
                "年代": "10代",
                "性別": "女性",
                "退院": "",
                "date": "2020-03-17"
            },
            {
                "リリース日": "2020-03-19T08:00:00",
                "居住地": "臼杵市",
                "年代": "20代",
                "性別": "男性",
                "退院": "",
                "date": "2020-03-19"
            },
            {
                "リリース日": "2020-03-19T08:00:00",
                "居住地": "臼杵市",
                "年代": "30代",
                "性別": "女性",
                "退院": "",
                "date": "2020-03-19"
            },
            {
                "リリース日": "2020-03-20T08:00:00",
                "居住地": "大分市",
                "年代": "40代",
                "性別": "女性",
                "退院": "",
                "date": "2020-03-20"
            },
            {
                "リリース日": "2020-03-20T08:00:00",
                "居住地": "大分市",
                "年代": "60代",
                "性別": "女性",
                "退院": "",
                "date": "2020-03-20"
            },
            {
                "リリース日": "2020-03-20T08:00:00",
                "居住地": "大分市",
                "年代": "90代",
                "性別": "女性",
                "退院": "",
                "date": "2020-03-20"
            }
        ])
    );
}

#[test]
fn by_date_summary_backfills_interior_and_trailing_gaps() {
    let series = patients_summary_by_date(&patient_rows(), &clock()).expect("summarize by date");
    assert_eq!(
        series,
        vec![
            DailyCount::new("2020-03-17", 1),
            DailyCount::new("2020-03-18", 0),
            DailyCount::new("2020-03-19", 2),
            DailyCount::new("2020-03-20", 3),
            DailyCount::new("2020-03-21", 0),
            DailyCount::new("2020-03-22", 0),
            DailyCount::new("2020-03-23", 0),
            DailyCount::new("2020-03-24", 0),
        ]
    );
}

#[test]
fn by_date_summary_of_no_rows_is_empty() {
    let series = patients_summary_by_date(&[], &clock()).expect("summarize by date");
    assert!(series.is_empty());
}

#[test]
fn age_summary_matches_fixture_buckets() {
    let counts = patients_summary_by_age(&patient_rows()).expect("summarize by age");
    assert_eq!(counts.get(AgeBand::UnderTen), 1);
    assert_eq!(counts.get(AgeBand::TwentiesThirties), 2);
    assert_eq!(counts.get(AgeBand::FortiesFifties), 1);
    assert_eq!(counts.get(AgeBand::SixtiesSeventies), 1);
    assert_eq!(counts.get(AgeBand::EightiesAndAbove), 1);
    assert_eq!(counts.total(), patient_rows().len() as i64);
}

#[test]
fn inspections_series_matches_fixture() {
    let series = inspections_summary(&summary_rows(), &clock()).expect("summarize inspections");
    assert_eq!(
        series,
        vec![
            DailyCount::new("2020-03-20", 67),
            DailyCount::new("2020-03-21", 111),
            DailyCount::new("2020-03-22", 182),
            DailyCount::new("2020-03-23", 205),
            DailyCount::new("2020-03-24", 0),
        ]
    );
}

#[test]
fn querents_series_matches_fixture() {
    let series = querents_summary(&summary_rows(), &clock()).expect("summarize querents");
    assert_eq!(
        series,
        vec![
            DailyCount::new("2020-03-20", 100),
            DailyCount::new("2020-03-21", 117),
            DailyCount::new("2020-03-22", 99),
            DailyCount::new("2020-03-23", 311),
            DailyCount::new("2020-03-24", 0),
        ]
    );
}

#[test]
fn sickbeds_snapshot_matches_fixture() {
    let summary = sickbeds_summary(&summary_rows()).expect("summarize sickbeds");
    let value = serde_json::to_value(summary).expect("serialize sickbeds");
    assert_eq!(value, json!({"入院患者数": 18, "残り病床数": 100}));
}

#[test]
fn main_summary_matches_fixture() {
    let summary = main_summary(&summary_rows()).expect("summarize totals");
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

#[test]
fn trailing_backfill_reaches_today_after_ten_pm() {
    let late_clock = FixedClock(
        NaiveDate::from_ymd_opt(2020, 3, 25)
            .expect("valid date")
            .and_hms_opt(22, 0, 0)
            .expect("valid time"),
    );
    let series = patients_summary_by_date(&patient_rows(), &late_clock).expect("summarize");
    assert_eq!(
        series.last(),
        Some(&DailyCount::new("2020-03-25", 0)),
        "series must extend through the current date from 22:00"
    );
}
