use std::fmt;

use thiserror::Error;

/// An age band label did not match any dashboard bucket.
///
/// The aggregator treats this as a row to exclude rather than a fatal
/// failure, matching the deployed converter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized age band label `{0}`")]
pub struct UnrecognizedAgeBand(pub String);

/// The five fixed dashboard age buckets.
///
/// Membership is an exact string match against the source `年代` labels;
/// adding a band or a label is a data change here, not a logic change in
/// the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeBand {
    UnderTen,
    TwentiesThirties,
    FortiesFifties,
    SixtiesSeventies,
    EightiesAndAbove,
}

/// Bucket membership table: (band, source labels that map to it).
///
/// Blank and `不明` rows land in the youngest bucket; that is the deployed
/// behavior, reproduced as-is.
const BAND_LABELS: [(AgeBand, &[&str]); 5] = [
    (AgeBand::UnderTen, &["10歳未満", "10代", "不明", ""]),
    (AgeBand::TwentiesThirties, &["20代", "30代"]),
    (AgeBand::FortiesFifties, &["40代", "50代"]),
    (AgeBand::SixtiesSeventies, &["60代", "70代"]),
    (AgeBand::EightiesAndAbove, &["80代", "90代", "100歳以上"]),
];

impl AgeBand {
    pub const ALL: [AgeBand; 5] = [
        AgeBand::UnderTen,
        AgeBand::TwentiesThirties,
        AgeBand::FortiesFifties,
        AgeBand::SixtiesSeventies,
        AgeBand::EightiesAndAbove,
    ];

    /// The bucket key as it appears in the dashboard JSON.
    pub fn label(self) -> &'static str {
        match self {
            AgeBand::UnderTen => "10代以下",
            AgeBand::TwentiesThirties => "20代〜30代",
            AgeBand::FortiesFifties => "40代〜50代",
            AgeBand::SixtiesSeventies => "60代〜70代",
            AgeBand::EightiesAndAbove => "80代以上",
        }
    }

    /// Maps a source `年代` label to its bucket by exact match.
    pub fn from_source_label(value: &str) -> Result<Self, UnrecognizedAgeBand> {
        for (band, labels) in BAND_LABELS {
            if labels.contains(&value) {
                return Ok(band);
            }
        }
        Err(UnrecognizedAgeBand(value.to_string()))
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
