//! Output entities consumed by the dashboard front end.
//!
//! Field names serialize to the exact keys the dashboard expects, Japanese
//! labels included; serde leaves non-ASCII text unescaped.

use serde::{Deserialize, Serialize};

use crate::age::AgeBand;

/// One entry of the dashboard patient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Announcement date with the fixed `T08:00:00` display time.
    #[serde(rename = "リリース日")]
    pub release_date: String,
    #[serde(rename = "居住地")]
    pub residence: String,
    #[serde(rename = "年代")]
    pub age_band: String,
    #[serde(rename = "性別")]
    pub sex: String,
    /// Discharge status, currently always empty in the source.
    #[serde(rename = "退院")]
    pub discharged: String,
    /// Announcement date as `YYYY-MM-DD`.
    pub date: String,
}

/// One day of a count series (patients, inspections, querents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    /// `YYYY-MM-DD`.
    #[serde(rename = "日付")]
    pub date: String,
    #[serde(rename = "小計")]
    pub count: i64,
}

impl DailyCount {
    pub fn new(date: impl Into<String>, count: i64) -> Self {
        Self {
            date: date.into(),
            count,
        }
    }
}

/// Patient counts per fixed age bucket; every key is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBandCounts {
    #[serde(rename = "10代以下")]
    pub under_ten: i64,
    #[serde(rename = "20代〜30代")]
    pub twenties_thirties: i64,
    #[serde(rename = "40代〜50代")]
    pub forties_fifties: i64,
    #[serde(rename = "60代〜70代")]
    pub sixties_seventies: i64,
    #[serde(rename = "80代以上")]
    pub eighties_and_above: i64,
}

impl AgeBandCounts {
    pub fn increment(&mut self, band: AgeBand) {
        *self.slot(band) += 1;
    }

    pub fn get(&self, band: AgeBand) -> i64 {
        match band {
            AgeBand::UnderTen => self.under_ten,
            AgeBand::TwentiesThirties => self.twenties_thirties,
            AgeBand::FortiesFifties => self.forties_fifties,
            AgeBand::SixtiesSeventies => self.sixties_seventies,
            AgeBand::EightiesAndAbove => self.eighties_and_above,
        }
    }

    pub fn total(&self) -> i64 {
        AgeBand::ALL.iter().map(|band| self.get(*band)).sum()
    }

    fn slot(&mut self, band: AgeBand) -> &mut i64 {
        match band {
            AgeBand::UnderTen => &mut self.under_ten,
            AgeBand::TwentiesThirties => &mut self.twenties_thirties,
            AgeBand::FortiesFifties => &mut self.forties_fifties,
            AgeBand::SixtiesSeventies => &mut self.sixties_seventies,
            AgeBand::EightiesAndAbove => &mut self.eighties_and_above,
        }
    }
}

/// Current hospitalization snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SickbedsSummary {
    #[serde(rename = "入院患者数")]
    pub hospitalized: i64,
    /// Capacity minus hospitalized; may go negative past capacity.
    #[serde(rename = "残り病床数")]
    pub remaining_beds: i64,
}

/// One labeled value in the cumulative summary tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryNode {
    pub attr: String,
    pub value: i64,
}

impl SummaryNode {
    pub fn new(attr: impl Into<String>, value: i64) -> Self {
        Self {
            attr: attr.into(),
            value,
        }
    }
}

/// Cumulative summary tree: 累計 at the root, hospitalized/deaths/discharged
/// as children, root value equal to the sum of the children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainSummary {
    pub attr: String,
    pub value: i64,
    pub children: Vec<SummaryNode>,
}
