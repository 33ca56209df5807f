//! Projection Module
//!
//! Turns one finance report into the four tables of the detail view.
//! Every projection is pure and yields an empty table when the report lacks
//! the data it needs.

mod format;
mod units;

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Report, ReportDetail};

pub use format::format_to_local_string;
pub use units::{SummaryKind, UnitConverter, LEGACY_DIVISOR, TREASURY_DIVISOR};

/// Prefix of every USD amount.
pub const CURRENCY_SYMBOL: &str = "$";

/// Ticker of the native coin, used in summary column labels.
pub const COIN_TICKER: &str = "DCR";

// == Report Table ==
/// Header row plus body rows of formatted cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

// == Report Projection ==
/// The fixed set of tables rendered from a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportProjection {
    ProposalByPeriod,
    DomainAggregation,
    TreasurySummary,
    LegacySummary,
}

impl ReportProjection {
    pub const ALL: [ReportProjection; 4] = [
        ReportProjection::ProposalByPeriod,
        ReportProjection::DomainAggregation,
        ReportProjection::TreasurySummary,
        ReportProjection::LegacySummary,
    ];

    /// Name of the view slot this table is rendered into.
    pub fn insertion_point(self) -> &'static str {
        match self {
            ReportProjection::ProposalByPeriod => "proposalReport",
            ReportProjection::DomainAggregation => "domainReport",
            ReportProjection::TreasurySummary => "treasuryReport",
            ReportProjection::LegacySummary => "legacyReport",
        }
    }

    pub fn project(self, report: &Report) -> ReportTable {
        match self {
            ReportProjection::ProposalByPeriod => proposal_by_period(report),
            ReportProjection::DomainAggregation => domain_aggregation(report),
            ReportProjection::TreasurySummary => summary(report, SummaryKind::Treasury),
            ReportProjection::LegacySummary => summary(report, SummaryKind::Legacy),
        }
    }
}

// == Report Tables ==
/// All four tables of the detail view, keyed by insertion point.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTables {
    pub proposal_report: ReportTable,
    pub domain_report: ReportTable,
    pub treasury_report: ReportTable,
    pub legacy_report: ReportTable,
}

impl ReportTables {
    /// Runs every projection over `report`.
    pub fn project(report: &Report) -> Self {
        Self {
            proposal_report: ReportProjection::ProposalByPeriod.project(report),
            domain_report: ReportProjection::DomainAggregation.project(report),
            treasury_report: ReportProjection::TreasurySummary.project(report),
            legacy_report: ReportProjection::LegacySummary.project(report),
        }
    }

    pub fn get(&self, projection: ReportProjection) -> &ReportTable {
        match projection {
            ReportProjection::ProposalByPeriod => &self.proposal_report,
            ReportProjection::DomainAggregation => &self.domain_report,
            ReportProjection::TreasurySummary => &self.treasury_report,
            ReportProjection::LegacySummary => &self.legacy_report,
        }
    }
}

fn usd(value: f64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_to_local_string(value, 2, 2))
}

/// One column per proposal, then a `Total` column.
pub fn proposal_by_period(report: &Report) -> ReportTable {
    let Some(details) = report.report_detail.as_deref() else {
        return ReportTable::empty();
    };

    let mut headers: Vec<String> = details.iter().map(|d| d.name.clone()).collect();
    headers.push("Total".to_string());

    let mut row: Vec<String> = details.iter().map(|d| usd(d.expense)).collect();
    row.push(usd(report.proposal_total));

    ReportTable {
        headers,
        rows: vec![row],
    }
}

/// Sums `expense` per domain.
pub fn aggregate_by_domain(details: &[ReportDetail]) -> HashMap<&str, f64> {
    let mut sums: HashMap<&str, f64> = HashMap::new();
    for detail in details {
        *sums.entry(detail.domain.as_str()).or_default() += detail.expense;
    }
    sums
}

/// One column per listed domain, in `domainList` order.
pub fn domain_aggregation(report: &Report) -> ReportTable {
    let (Some(details), Some(domains)) = (
        report.report_detail.as_deref(),
        report.domain_list.as_deref(),
    ) else {
        return ReportTable::empty();
    };

    let sums = aggregate_by_domain(details);
    let headers = domains.iter().map(|d| capitalize_first(d)).collect();
    let row = domains
        .iter()
        .map(|d| usd(sums.get(d.as_str()).copied().unwrap_or_default()))
        .collect();

    ReportTable {
        headers,
        rows: vec![row],
    }
}

/// In/out/difference/total of one treasury, in coins and USD.
pub fn summary(report: &Report, kind: SummaryKind) -> ReportTable {
    let data = match kind {
        SummaryKind::Treasury => report.treasury_summary.as_ref(),
        SummaryKind::Legacy => report.legacy_summary.as_ref(),
    };
    let Some(data) = data else {
        return ReportTable::empty();
    };

    let converter = kind.converter();
    let coin = |atoms: i64| format_to_local_string(converter.to_display(atoms), 3, 3);

    let headers = [
        kind.inflow_label(),
        kind.outflow_label(),
        "Difference",
        "Total",
    ]
    .iter()
    .flat_map(|label| [format!("{label} ({COIN_TICKER})"), format!("{label} (USD)")])
    .collect();

    let row = vec![
        coin(data.invalue),
        usd(data.invalue_usd),
        coin(data.outvalue),
        usd(data.outvalue_usd),
        coin(data.difference),
        usd(data.difference_usd),
        coin(data.total),
        usd(data.total_usd),
    ];

    ReportTable {
        headers,
        rows: vec![row],
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TreasurySummary;

    fn detail(domain: &str, name: &str, expense: f64) -> ReportDetail {
        ReportDetail {
            domain: domain.to_string(),
            name: name.to_string(),
            expense,
        }
    }

    fn sample_report() -> Report {
        Report {
            report_detail: Some(vec![
                detail("dev", "Proposal A", 10.0),
                detail("dev", "Proposal B", 5.0),
                detail("marketing", "Proposal C", 3.0),
            ]),
            domain_list: Some(vec!["dev".to_string(), "marketing".to_string()]),
            proposal_total: 18.0,
            treasury_summary: Some(TreasurySummary {
                invalue: 1_500_000_000,
                outvalue: 500_000_000,
                difference: 1_000_000_000,
                total: 2_500_000_000,
                invalue_usd: 1234.5,
                outvalue_usd: 20.0,
                difference_usd: 1214.5,
                total_usd: 5000.0,
            }),
            legacy_summary: Some(TreasurySummary {
                invalue: 1_500_000_000,
                outvalue: 200_000_000,
                difference: -100_000_000,
                total: 0,
                ..TreasurySummary::default()
            }),
            expiration: None,
        }
    }

    #[test]
    fn test_proposal_by_period() {
        let table = proposal_by_period(&sample_report());

        assert_eq!(
            table.headers,
            vec!["Proposal A", "Proposal B", "Proposal C", "Total"]
        );
        assert_eq!(table.rows, vec![vec!["$10.00", "$5.00", "$3.00", "$18.00"]]);
    }

    #[test]
    fn test_proposal_names_kept_verbatim() {
        let report = Report {
            report_detail: Some(vec![detail("dev", "lowercase name", 1.0)]),
            ..Report::default()
        };
        assert_eq!(proposal_by_period(&report).headers[0], "lowercase name");
    }

    #[test]
    fn test_domain_aggregation() {
        let report = sample_report();
        let sums = aggregate_by_domain(report.report_detail.as_deref().unwrap());
        assert_eq!(sums["dev"], 15.0);
        assert_eq!(sums["marketing"], 3.0);

        let table = domain_aggregation(&report);
        assert_eq!(table.headers, vec!["Dev", "Marketing"]);
        assert_eq!(table.rows, vec![vec!["$15.00", "$3.00"]]);
    }

    #[test]
    fn test_domain_order_follows_domain_list() {
        let mut report = sample_report();
        report.domain_list = Some(vec!["marketing".to_string(), "dev".to_string()]);

        let table = domain_aggregation(&report);
        assert_eq!(table.headers, vec!["Marketing", "Dev"]);
        assert_eq!(table.rows, vec![vec!["$3.00", "$15.00"]]);
    }

    #[test]
    fn test_domain_header_only_first_char_changes() {
        let report = Report {
            report_detail: Some(vec![detail("rEsearch", "x", 1.0)]),
            domain_list: Some(vec!["rEsearch".to_string()]),
            ..Report::default()
        };
        assert_eq!(domain_aggregation(&report).headers, vec!["REsearch"]);
    }

    #[test]
    fn test_listed_domain_without_spending() {
        let mut report = sample_report();
        report.domain_list = Some(vec!["dev".to_string(), "design".to_string()]);

        let table = domain_aggregation(&report);
        assert_eq!(table.rows, vec![vec!["$15.00", "$0.00"]]);
    }

    #[test]
    fn test_missing_detail_yields_empty_tables() {
        let report = Report {
            report_detail: None,
            domain_list: Some(vec!["dev".to_string()]),
            ..Report::default()
        };

        assert!(proposal_by_period(&report).is_empty());
        assert!(domain_aggregation(&report).is_empty());
    }

    #[test]
    fn test_missing_domain_list_yields_empty_table() {
        let mut report = sample_report();
        report.domain_list = None;
        assert!(domain_aggregation(&report).is_empty());
        assert!(!proposal_by_period(&report).is_empty());
    }

    #[test]
    fn test_treasury_summary() {
        let table = summary(&sample_report(), SummaryKind::Treasury);

        assert_eq!(
            table.headers,
            vec![
                "Incoming (DCR)",
                "Incoming (USD)",
                "Outgoing (DCR)",
                "Outgoing (USD)",
                "Difference (DCR)",
                "Difference (USD)",
                "Total (DCR)",
                "Total (USD)",
            ]
        );
        assert_eq!(
            table.rows,
            vec![vec![
                "3.000",
                "$1,234.50",
                "1.000",
                "$20.00",
                "2.000",
                "$1,214.50",
                "5.000",
                "$5,000.00",
            ]]
        );
    }

    #[test]
    fn test_legacy_summary() {
        let table = summary(&sample_report(), SummaryKind::Legacy);

        assert_eq!(table.headers[0], "Credit (DCR)");
        assert_eq!(table.headers[2], "Spent (DCR)");
        assert_eq!(table.headers[4], "Difference (DCR)");
        assert_eq!(table.headers[6], "Total (DCR)");
        assert_eq!(table.rows[0][0], "15.000");
        assert_eq!(table.rows[0][2], "2.000");
        assert_eq!(table.rows[0][4], "-1.000");
        assert_eq!(table.rows[0][6], "0.000");
        assert_eq!(table.rows[0][1], "$0.00");
    }

    #[test]
    fn test_missing_summary_yields_empty_table() {
        let report = Report::default();
        assert!(summary(&report, SummaryKind::Treasury).is_empty());
        assert!(summary(&report, SummaryKind::Legacy).is_empty());
    }

    #[test]
    fn test_project_all_matches_individual_projections() {
        let report = sample_report();
        let tables = ReportTables::project(&report);

        for projection in ReportProjection::ALL {
            assert_eq!(tables.get(projection), &projection.project(&report));
        }
    }

    #[test]
    fn test_tables_serialize_by_insertion_point() {
        let tables = ReportTables::project(&sample_report());
        let json = serde_json::to_value(&tables).unwrap();

        for projection in ReportProjection::ALL {
            assert!(json.get(projection.insertion_point()).is_some());
        }
    }
}
