use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The eight fixed behavioral domains of the VSMS. Every scale item
/// belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum DomainCode {
    Shg,
    She,
    Shd,
    Sd,
    Occ,
    Com,
    Loc,
    Soc,
}

impl DomainCode {
    /// All domain codes in display order.
    pub const ALL: [DomainCode; 8] = [
        DomainCode::Shg,
        DomainCode::She,
        DomainCode::Shd,
        DomainCode::Sd,
        DomainCode::Occ,
        DomainCode::Com,
        DomainCode::Loc,
        DomainCode::Soc,
    ];

    /// The short code used in persisted records and reports.
    pub fn code(self) -> &'static str {
        match self {
            DomainCode::Shg => "SHG",
            DomainCode::She => "SHE",
            DomainCode::Shd => "SHD",
            DomainCode::Sd => "SD",
            DomainCode::Occ => "OCC",
            DomainCode::Com => "COM",
            DomainCode::Loc => "LOC",
            DomainCode::Soc => "SOC",
        }
    }

    /// Human-readable domain name.
    pub fn name(self) -> &'static str {
        match self {
            DomainCode::Shg => "Self-Help General",
            DomainCode::She => "Self-Help Eating",
            DomainCode::Shd => "Self-Help Dressing",
            DomainCode::Sd => "Self-Direction",
            DomainCode::Occ => "Occupation",
            DomainCode::Com => "Communication",
            DomainCode::Loc => "Locomotion",
            DomainCode::Soc => "Socialization",
        }
    }
}

impl std::fmt::Display for DomainCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
