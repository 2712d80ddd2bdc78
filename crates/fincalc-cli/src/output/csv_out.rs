use serde_json::Value;
use std::io;

use super::{result_rows, warnings};

/// Two-column `field,value` CSV; warnings follow as `warning` rows.
pub fn print_csv(value: &Value) {
    if let Err(e) = write_csv(value, io::stdout().lock()) {
        eprintln!("CSV write error: {e}");
    }
}

fn write_csv<W: io::Write>(value: &Value, out: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["field", "value"])?;
    for (field, val) in result_rows(value) {
        wtr.write_record([field, val])?;
    }
    for w in warnings(value) {
        wtr.write_record(["warning".to_string(), w])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_csv_rows() {
        let envelope = json!({
            "result": { "value": "-49.04" },
            "warnings": ["check, this"]
        });
        let mut buf = Vec::new();
        write_csv(&envelope, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "field,value\nvalue,-49.04\nwarning,\"check, this\"\n");
    }
}
