use std::io::{self, Write};

use crate::analytics::Analytics;

/// Writes the image share, the most popular browser and one line per hour,
/// busiest hour first.
pub fn write_report<W: Write>(analytics: &Analytics, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Image requests account for {} of all requests",
        analytics.image_hits().percentage()
    )?;
    writeln!(
        out,
        "The most popular browser is {}",
        analytics.browsers().most_popular()
    )?;
    for (hour, count) in analytics.hourly().ranked() {
        writeln!(out, "Hour {hour} has {count} hits")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LogEntry;
    use asserting::prelude::*;

    fn render(entries: &[LogEntry]) -> Vec<String> {
        let mut buffer = Vec::new();
        write_report(&Analytics::from_entries(entries), &mut buffer).unwrap();
        String::from_utf8(buffer)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn report_has_fixed_shape() {
        let entries = vec![
            LogEntry {
                path: "/img/a.gif".into(),
                datetime: "01/27/2014 13:26:04".into(),
                browser: "Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.1)".into(),
                status: "200".into(),
                size: "1024".into(),
            },
            LogEntry {
                path: "/index.html".into(),
                datetime: "01/27/2014 13:59:59".into(),
                browser: "Mozilla/5.0 Gecko/20100101 Firefox/26.0".into(),
                status: "404".into(),
                size: "0".into(),
            },
        ];
        let lines = render(&entries);
        assert_that!(lines.len()).is_equal_to(26);
        assert_eq!(lines[0], "Image requests account for 50.0% of all requests");
        assert_eq!(lines[1], "The most popular browser is Firefox");
        assert_eq!(lines[2], "Hour 13 has 2 hits");
        assert_eq!(lines[3], "Hour 00 has 0 hits");
        assert_eq!(lines[25], "Hour 23 has 0 hits");
    }

    #[test]
    fn empty_log_still_lists_every_hour() {
        let lines = render(&[]);
        assert_eq!(lines.len(), 26);
        assert_eq!(lines[0], "Image requests account for 0.0% of all requests");
        assert_eq!(lines[1], "The most popular browser is Firefox");
        assert!(lines[2..].iter().all(|l| l.ends_with(" has 0 hits")));
    }
}
