use std::mem;

use tracing::debug;

use crate::{errors::RowShapeError, models::LogEntry};

const FIELDS_PER_ROW: usize = 5;

/// Parses a headerless CSV access log into entries, in file order.
///
/// The first row that cannot supply all five positional fields aborts the
/// parse; no partial result is returned.
pub fn parse_entries(data: &str) -> Result<Vec<LogEntry>, RowShapeError> {
    let entries = split_records(data)
        .into_iter()
        .enumerate()
        .map(|(i, fields)| parse_record(i + 1, &fields))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(rows = entries.len(), "parsed access log rows");
    Ok(entries)
}

fn parse_record(row: usize, fields: &[String]) -> Result<LogEntry, RowShapeError> {
    let [path, datetime, browser, status, size, ..] = fields else {
        return Err(RowShapeError {
            row,
            fields: fields.len(),
        });
    };
    Ok(LogEntry {
        path: path.clone(),
        datetime: datetime.clone(),
        browser: browser.clone(),
        status: status.clone(),
        size: size.clone(),
    })
}

// Quoted fields may carry commas, line breaks and doubled quotes. A blank line
// is kept as a record with no fields so the caller sees it as a short row.
fn split_records(data: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::with_capacity(FIELDS_PER_ROW);
    let mut field = String::new();
    let mut in_quotes = false;
    let mut dirty = false;
    let mut chars = data.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' if field.is_empty() => {
                in_quotes = true;
                dirty = true;
            }
            ',' => {
                record.push(mem::take(&mut field));
                dirty = true;
            }
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if dirty {
                    record.push(mem::take(&mut field));
                }
                records.push(mem::take(&mut record));
                dirty = false;
            }
            _ => {
                field.push(c);
                dirty = true;
            }
        }
    }
    if dirty {
        record.push(field);
        records.push(record);
    }
    records
}
