use crate::comparison::engine::Direction;
use crate::core::year::Year;
use serde::{Deserialize, Serialize};

/// One metric as shown for both years with its comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub metric: String,
    pub label: String,
    pub year_a: String,
    pub year_b: String,
    pub change: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

/// Text/JSON summary of a two-year comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub year_a: Option<Year>,
    pub year_b: Option<Year>,
    pub direct: Vec<ReportRow>,
    pub derived: Vec<ReportRow>,
}

fn year_label(year: Option<Year>) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string())
}

fn write_section(
    f: &mut std::fmt::Formatter<'_>,
    title: &str,
    rows: &[ReportRow],
    headers: (&str, &str),
) -> std::fmt::Result {
    let label_width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0).max(title.len());
    let a_width = rows.iter().map(|r| r.year_a.len()).max().unwrap_or(0).max(headers.0.len());
    let b_width = rows.iter().map(|r| r.year_b.len()).max().unwrap_or(0).max(headers.1.len());

    writeln!(
        f,
        "{:<label_width$}  {:>a_width$}  {:>b_width$}  Change",
        title, headers.0, headers.1
    )?;
    for row in rows {
        let marker = match row.direction {
            Some(Direction::Increase) => " ▲",
            Some(Direction::Decrease) => " ▼",
            _ => "",
        };
        writeln!(
            f,
            "{:<label_width$}  {:>a_width$}  {:>b_width$}  {}{}",
            row.label, row.year_a, row.year_b, row.change, marker
        )?;
    }
    Ok(())
}

impl std::fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let a = year_label(self.year_a);
        let b = year_label(self.year_b);
        writeln!(f, "=== Work Value: {} vs {} ===", a, b)?;
        writeln!(f)?;
        write_section(f, "Indicator", &self.direct, (&a, &b))?;
        writeln!(f)?;
        write_section(f, "Hours of work", &self.derived, (&a, &b))
    }
}
