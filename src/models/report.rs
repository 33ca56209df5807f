//! Report payload returned by the upstream finance report API
//!
//! Field names follow the camelCase wire format of the upstream service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Pre-aggregated finance report for one (type, time) pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Per-proposal spending rows, absent when the period has no detail
    #[serde(default)]
    pub report_detail: Option<Vec<ReportDetail>>,
    /// Domains to show, in display order
    #[serde(default)]
    pub domain_list: Option<Vec<String>>,
    /// Sum of all proposal spending for the period
    #[serde(default, deserialize_with = "amount")]
    pub proposal_total: f64,
    #[serde(default)]
    pub treasury_summary: Option<TreasurySummary>,
    #[serde(default)]
    pub legacy_summary: Option<TreasurySummary>,
    /// Server-supplied expiry of this payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<DateTime<Utc>>,
}

/// One proposal's spending within a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportDetail {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "amount")]
    pub expense: f64,
}

/// Inflow/outflow summary of a treasury.
///
/// The plain fields are atomic units; the `USD` siblings are already in
/// display units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreasurySummary {
    #[serde(default, deserialize_with = "atoms")]
    pub invalue: i64,
    #[serde(default, deserialize_with = "atoms")]
    pub outvalue: i64,
    #[serde(default, deserialize_with = "atoms")]
    pub difference: i64,
    #[serde(default, deserialize_with = "atoms")]
    pub total: i64,
    #[serde(default, deserialize_with = "amount", rename = "invalueUSD")]
    pub invalue_usd: f64,
    #[serde(default, deserialize_with = "amount", rename = "outvalueUSD")]
    pub outvalue_usd: f64,
    #[serde(default, deserialize_with = "amount", rename = "differenceUSD")]
    pub difference_usd: f64,
    #[serde(default, deserialize_with = "amount", rename = "totalUSD")]
    pub total_usd: f64,
}

// == Lenient Number Fields ==
// The upstream is not strict about numbers: atomic amounts sometimes arrive
// as floats (`1.5e9`) and amounts as `null`. Both decode instead of
// rejecting the whole report.

#[derive(Deserialize)]
#[serde(untagged)]
enum Number {
    Int(i64),
    Float(f64),
}

/// Atomic units: integers as-is, floats rounded, `null` as zero.
fn atoms<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(match Option::<Number>::deserialize(deserializer)? {
        Some(Number::Int(value)) => value,
        Some(Number::Float(value)) => value.round() as i64,
        None => 0,
    })
}

/// Display amounts: `null` as zero.
fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}
