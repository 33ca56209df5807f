//! Unit conversion from atomic amounts to display amounts

/// Atomic units per displayed coin in the treasury summary.
pub const TREASURY_DIVISOR: i64 = 500_000_000;

/// Atomic units per displayed coin in the legacy summary.
pub const LEGACY_DIVISOR: i64 = 100_000_000;

/// Which treasury summary of a report is being shown.
///
/// The two summaries use different atomic denominations and must not share
/// a divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    Treasury,
    Legacy,
}

impl SummaryKind {
    pub fn converter(self) -> UnitConverter {
        match self {
            SummaryKind::Treasury => UnitConverter::new(TREASURY_DIVISOR),
            SummaryKind::Legacy => UnitConverter::new(LEGACY_DIVISOR),
        }
    }

    /// Column label for money coming in.
    pub fn inflow_label(self) -> &'static str {
        match self {
            SummaryKind::Treasury => "Incoming",
            SummaryKind::Legacy => "Credit",
        }
    }

    /// Column label for money going out.
    pub fn outflow_label(self) -> &'static str {
        match self {
            SummaryKind::Treasury => "Outgoing",
            SummaryKind::Legacy => "Spent",
        }
    }
}

/// Divides atomic amounts into display amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitConverter {
    divisor: i64,
}

impl UnitConverter {
    pub fn new(divisor: i64) -> Self {
        Self { divisor }
    }

    pub fn divisor(&self) -> i64 {
        self.divisor
    }

    pub fn to_display(&self, atoms: i64) -> f64 {
        atoms as f64 / self.divisor as f64
    }
}
