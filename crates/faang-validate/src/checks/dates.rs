//! Date values against their declared units.

use chrono::NaiveDate;
use faang_model::{AnnotatedSection, FieldAddress, FieldSet};

use crate::issue::Issue;

/// Date layouts a `units` sub-key may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateUnits {
    /// `YYYY-MM-DD`
    FullDate,
    /// `YYYY-MM`
    YearMonth,
    /// `YYYY`
    Year,
}

impl DateUnits {
    /// Parse a units string. Anything but the three literal layouts is `None`.
    pub fn parse(units: &str) -> Option<Self> {
        match units {
            "YYYY-MM-DD" => Some(Self::FullDate),
            "YYYY-MM" => Some(Self::YearMonth),
            "YYYY" => Some(Self::Year),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullDate => "YYYY-MM-DD",
            Self::YearMonth => "YYYY-MM",
            Self::Year => "YYYY",
        }
    }

    /// Digit count of each `-`-separated group.
    fn group_widths(&self) -> &'static [usize] {
        match self {
            Self::FullDate => &[4, 2, 2],
            Self::YearMonth => &[4, 2],
            Self::Year => &[4],
        }
    }

    /// True when `value` has exactly this layout and is a calendar date.
    pub fn accepts(&self, value: &str) -> bool {
        let widths = self.group_widths();
        let groups: Vec<&str> = value.split('-').collect();
        let shaped = groups.len() == widths.len()
            && groups.iter().zip(widths).all(|(group, width)| {
                group.len() == *width && group.bytes().all(|byte| byte.is_ascii_digit())
            });
        if !shaped {
            return false;
        }

        let padded = match self {
            Self::FullDate => value.to_string(),
            Self::YearMonth => format!("{value}-01"),
            Self::Year => format!("{value}-01-01"),
        };
        NaiveDate::parse_from_str(&padded, "%Y-%m-%d").is_ok()
    }
}

/// Warn about date fields whose value does not parse with their units.
///
/// Only fields with "date" in the name and readings carrying both `value`
/// and `units` are looked at.
pub fn check(fields: &FieldSet, annotations: &mut AnnotatedSection) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (name, value) in fields.iter() {
        if !name.contains("date") {
            continue;
        }

        for (position, unit) in value.units() {
            let (Some(date), Some(units)) = (unit.value.as_deref(), unit.units.as_deref()) else {
                continue;
            };
            let Some(layout) = DateUnits::parse(units) else {
                continue;
            };
            if layout.accepts(date) {
                continue;
            }

            let issue = Issue::DateUnitsMismatch {
                field: name.to_string(),
                units: units.to_string(),
                value: date.to_string(),
            };
            annotations.annotate(
                &FieldAddress::element(name, position),
                issue.severity(),
                issue.message(),
            );
            issues.push(issue);
        }
    }

    issues
}
