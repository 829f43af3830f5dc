//! CSV renderer. A list of scenario results becomes one row per scenario;
//! anything nested (a stress report, an analysis) flattens into
//! `field,value` rows keyed by dotted path, e.g. `scenarios.0.new_value`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use std::io;

use super::table::{as_decimal, MONEY_FIELDS};

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = match value {
        Value::Object(map) => map.get("result").unwrap_or(value),
        _ => value,
    };

    let written = match result {
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
            write_records(&mut wtr, items)
        }
        _ => write_fields(&mut wtr, result),
    };
    if let Err(e) = written.and_then(|_| wtr.flush().map_err(csv::Error::from)) {
        eprintln!("CSV write error: {e}");
    }
}

/// One header row taken from the first record, then one row per record.
fn write_records<W: io::Write>(wtr: &mut csv::Writer<W>, items: &[Value]) -> csv::Result<()> {
    let headers: Vec<&str> = match items.first() {
        Some(Value::Object(first)) => first.keys().map(String::as_str).collect(),
        _ => return Ok(()),
    };
    wtr.write_record(&headers)?;

    for item in items {
        let row: Vec<String> = headers
            .iter()
            .map(|h| item.get(*h).map(|v| cell(h, v)).unwrap_or_default())
            .collect();
        wtr.write_record(&row)?;
    }
    Ok(())
}

fn write_fields<W: io::Write>(wtr: &mut csv::Writer<W>, value: &Value) -> csv::Result<()> {
    let mut rows = Vec::new();
    flatten("", "value", value, &mut rows);

    wtr.write_record(["field", "value"])?;
    for (field, val) in rows {
        wtr.write_record([field, val])?;
    }
    Ok(())
}

fn flatten(path: &str, key: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    let child = |name: &str| {
        if path.is_empty() {
            name.to_string()
        } else {
            format!("{path}.{name}")
        }
    };

    match value {
        Value::Object(map) => {
            for (k, v) in map {
                flatten(&child(k), k, v, rows);
            }
        }
        Value::Array(arr) if arr.iter().any(|v| v.is_object() || v.is_array()) => {
            for (i, v) in arr.iter().enumerate() {
                flatten(&child(&i.to_string()), key, v, rows);
            }
        }
        _ => {
            let field = if path.is_empty() { key.to_string() } else { path.to_string() };
            rows.push((field, cell(key, value)));
        }
    }
}

/// Rupee amounts round to whole rupees, half away from zero, with no
/// currency symbol or grouping so spreadsheets read them as numbers.
fn cell(key: &str, value: &Value) -> String {
    if MONEY_FIELDS.contains(&key) {
        if let Some(amount) = as_decimal(value) {
            let rupees = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            return if rupees.is_zero() { Decimal::ZERO } else { rupees }.to_string();
        }
    }

    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr.iter().map(|v| cell(key, v)).collect::<Vec<_>>().join("; "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(write: impl FnOnce(&mut csv::Writer<Vec<u8>>) -> csv::Result<()>) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        write(&mut wtr).unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_money_cells_round_to_whole_rupees() {
        assert_eq!(cell("new_value", &json!("3875000.000")), "3875000");
        assert_eq!(cell("value_change", &json!("-1234.5")), "-1235");
        assert_eq!(cell("value_change", &json!("-0.4")), "0");
        assert_eq!(cell("impact", &json!("-22.5")), "-22.5");
    }

    #[test]
    fn test_string_lists_join() {
        assert_eq!(cell("vulnerabilities", &json!(["a", "b"])), "a; b");
        assert_eq!(cell("warnings", &json!([])), "");
    }

    #[test]
    fn test_scenario_list_writes_one_row_each() {
        let scenarios = [
            json!({"name": "Market Crash", "impact": "-22.5", "new_value": "3875000.000"}),
            json!({"name": "Inflation Spike", "impact": "-12", "new_value": "4400000.00"}),
        ];
        let out = render(|w| write_records(w, &scenarios));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("name") && lines[0].contains("new_value"));
        assert!(lines[1].contains("Market Crash") && lines[1].contains("3875000"));
        assert!(!lines[1].contains("3875000.000"));
        assert!(lines[2].contains("4400000"));
    }

    #[test]
    fn test_nested_report_flattens_to_dotted_paths() {
        let report = json!({
            "analysis": {"risk_score": "52", "strengths": ["Good cash reserves"]},
            "scenarios": [{"name": "Market Crash", "value_change": "-1125000.00"}],
            "worst_scenario": null
        });
        let out = render(|w| write_fields(w, &report));

        assert!(out.starts_with("field,value\n"));
        assert!(out.contains("analysis.risk_score,52\n"));
        assert!(out.contains("analysis.strengths,Good cash reserves\n"));
        assert!(out.contains("scenarios.0.name,Market Crash\n"));
        assert!(out.contains("scenarios.0.value_change,-1125000\n"));
        assert!(out.contains("worst_scenario,\n"));
    }

    #[test]
    fn test_scalar_result_gets_value_field() {
        let out = render(|w| write_fields(w, &json!("0.1.0")));
        assert_eq!(out, "field,value\nvalue,0.1.0\n");
    }
}
