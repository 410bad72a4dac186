//! FILENAME: core/model/src/vocab.rs
//! PURPOSE: Closed controlled vocabularies for the categorical record fields.
//! CONTEXT: Each enum fixes both the known value set and the display order
//!          used when building chart series. Aggregation tables iterate the
//!          `ALL` arrays, so adding a variant forces every table to follow.

use serde::{Deserialize, Serialize};

// ============================================================================
// UNIT STATUS
// ============================================================================

/// Sales status of an inventory unit.
///
/// The variant order here is the display order of the status chart and is
/// part of the dashboard contract - do not reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitStatus {
    Available,
    #[serde(rename = "Blocked Development")]
    BlockedDevelopment,
    Reserved,
    Contracted,
    Partner,
}

impl UnitStatus {
    /// All statuses in display order.
    pub const ALL: [UnitStatus; 5] = [
        UnitStatus::Available,
        UnitStatus::BlockedDevelopment,
        UnitStatus::Reserved,
        UnitStatus::Contracted,
        UnitStatus::Partner,
    ];

    /// The exact label used in the source data and in chart output.
    pub fn label(&self) -> &'static str {
        match self {
            UnitStatus::Available => "Available",
            UnitStatus::BlockedDevelopment => "Blocked Development",
            UnitStatus::Reserved => "Reserved",
            UnitStatus::Contracted => "Contracted",
            UnitStatus::Partner => "Partner",
        }
    }

    /// Looks up a raw label. Case-sensitive; unknown labels return `None`
    /// (a vocabulary miss, not an error).
    pub fn from_label(label: &str) -> Option<UnitStatus> {
        UnitStatus::ALL.iter().copied().find(|s| s.label() == label)
    }
}

impl std::fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// UNIT MODEL
// ============================================================================

/// Model/typology of an inventory unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitModel {
    Garden,
    Typical,
    Penthouse,
    Townhouse,
    #[serde(rename = "Twin House")]
    TwinHouse,
    Villa,
    #[serde(rename = "ST")]
    St,
    #[serde(rename = "Terrace Villa")]
    TerraceVilla,
    #[serde(rename = "Merged Unit")]
    MergedUnit,
    #[serde(rename = "Yard Villa")]
    YardVilla,
    Duplex,
    Studio,
}

impl UnitModel {
    /// All unit models in display order.
    pub const ALL: [UnitModel; 12] = [
        UnitModel::Garden,
        UnitModel::Typical,
        UnitModel::Penthouse,
        UnitModel::Townhouse,
        UnitModel::TwinHouse,
        UnitModel::Villa,
        UnitModel::St,
        UnitModel::TerraceVilla,
        UnitModel::MergedUnit,
        UnitModel::YardVilla,
        UnitModel::Duplex,
        UnitModel::Studio,
    ];

    /// The exact label used in the source data and in chart output.
    pub fn label(&self) -> &'static str {
        match self {
            UnitModel::Garden => "Garden",
            UnitModel::Typical => "Typical",
            UnitModel::Penthouse => "Penthouse",
            UnitModel::Townhouse => "Townhouse",
            UnitModel::TwinHouse => "Twin House",
            UnitModel::Villa => "Villa",
            UnitModel::St => "ST",
            UnitModel::TerraceVilla => "Terrace Villa",
            UnitModel::MergedUnit => "Merged Unit",
            UnitModel::YardVilla => "Yard Villa",
            UnitModel::Duplex => "Duplex",
            UnitModel::Studio => "Studio",
        }
    }

    /// Looks up a raw label. Case-sensitive; unknown labels return `None`.
    pub fn from_label(label: &str) -> Option<UnitModel> {
        UnitModel::ALL.iter().copied().find(|m| m.label() == label)
    }
}

impl std::fmt::Display for UnitModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// PAYMENT PLAN
// ============================================================================

/// Contract payment plan.
///
/// The order mixes month-based and year-based plans because it mirrors the
/// original dashboard's chart order, which is part of the output contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentPlan {
    Cash,
    #[serde(rename = "1 Yrs")]
    OneYear,
    #[serde(rename = "2 Yrs")]
    TwoYears,
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "4 Yrs")]
    FourYears,
    #[serde(rename = "5 Yrs")]
    FiveYears,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "7 Yrs")]
    SevenYears,
    #[serde(rename = "7months")]
    SevenMonths,
    #[serde(rename = "8 Yrs")]
    EightYears,
    #[serde(rename = "9 Yrs")]
    NineYears,
    #[serde(rename = "10 Yrs")]
    TenYears,
}

impl PaymentPlan {
    /// All payment plans in display order.
    pub const ALL: [PaymentPlan; 12] = [
        PaymentPlan::Cash,
        PaymentPlan::OneYear,
        PaymentPlan::TwoYears,
        PaymentPlan::ThreeMonths,
        PaymentPlan::FourYears,
        PaymentPlan::FiveYears,
        PaymentPlan::SixMonths,
        PaymentPlan::SevenYears,
        PaymentPlan::SevenMonths,
        PaymentPlan::EightYears,
        PaymentPlan::NineYears,
        PaymentPlan::TenYears,
    ];

    /// The exact label used in the source data and in chart output.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentPlan::Cash => "Cash",
            PaymentPlan::OneYear => "1 Yrs",
            PaymentPlan::TwoYears => "2 Yrs",
            PaymentPlan::ThreeMonths => "3months",
            PaymentPlan::FourYears => "4 Yrs",
            PaymentPlan::FiveYears => "5 Yrs",
            PaymentPlan::SixMonths => "6months",
            PaymentPlan::SevenYears => "7 Yrs",
            PaymentPlan::SevenMonths => "7months",
            PaymentPlan::EightYears => "8 Yrs",
            PaymentPlan::NineYears => "9 Yrs",
            PaymentPlan::TenYears => "10 Yrs",
        }
    }

    /// Looks up a raw label. Case-sensitive; unknown labels return `None`.
    pub fn from_label(label: &str) -> Option<PaymentPlan> {
        PaymentPlan::ALL.iter().copied().find(|p| p.label() == label)
    }
}

impl std::fmt::Display for PaymentPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
