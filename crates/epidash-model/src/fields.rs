//! Source column labels.
//!
//! The open-data CSV files carry fixed Japanese header labels. Lookups go
//! through these constants so a renamed column fails in one place.

/// Patient list: public announcement date, `YYYY/MM/DD`.
pub const ANNOUNCEMENT_DATE: &str = "公表_年月日";
/// Patient list: residence (municipality).
pub const RESIDENCE: &str = "居住地";
/// Patient list: age band label (`10代`, `20代`, ...).
pub const AGE_BAND: &str = "年代";
/// Patient list: sex.
pub const SEX: &str = "性別";
/// Patient list: discharged flag, passed through verbatim.
pub const DISCHARGED_FLAG: &str = "退院済フラグ";

/// Daily summary: date label, `M月D日` (no year).
pub const SUMMARY_DATE: &str = "日付";
/// Daily summary: inspections performed.
pub const INSPECTIONS: &str = "検査実施件数";
/// Daily summary: positives among inspections.
pub const POSITIVES: &str = "うち陽性";
/// Daily summary: consultation hotline calls.
pub const QUERENTS: &str = "相談窓口相談件数";
/// Daily summary: discharged count.
pub const DISCHARGED: &str = "退院";
/// Daily summary: death count.
pub const DEATHS: &str = "死亡";
