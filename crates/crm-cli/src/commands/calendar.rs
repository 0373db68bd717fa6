use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use colored::Colorize;
use crm_calendar::month_matrix;

pub fn execute(month: Option<&str>) -> Result<()> {
    let date = match month {
        Some(month) => parse_month(month)?,
        None => Local::now().date_naive(),
    };

    println!("{}", date.format("%B %Y").to_string().green().bold());
    for line in render(date) {
        println!("{}", line);
    }

    Ok(())
}

fn parse_month(month: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", month))
}

/// Header plus six rows; days outside the month are bracketed
fn render(date: NaiveDate) -> Vec<String> {
    let mut lines = vec![" Su   Mo   Tu   We   Th   Fr   Sa".to_string()];
    for week in month_matrix(date) {
        let cells: Vec<String> = week
            .iter()
            .map(|day| {
                if day.month() == date.month() {
                    format!(" {:>2} ", day.day())
                } else {
                    format!("({:>2})", day.day())
                }
            })
            .collect();
        lines.push(cells.join(" "));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-03").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("March").is_err());
    }

    #[test]
    fn test_render_march_2024() {
        let lines = render(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "(25) (26) (27) (28) (29)   1    2 ");
        assert_eq!(lines[6], " 31  ( 1) ( 2) ( 3) ( 4) ( 5) ( 6)");
    }
}
