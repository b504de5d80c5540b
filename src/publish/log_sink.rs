// src/publish/log_sink.rs

use crate::common::TelemetryPacket;
use alloc::string::String;
use core::convert::Infallible;
use core::fmt::{Debug, Write};

/// Column order of a log row.
pub const LOG_COLUMNS: [&str; 18] = [
    "classification", "ax", "ay", "az", "gx", "gy", "gz", "ax2", "ay2", "az2", "gx2", "gy2",
    "gz2", "mx", "my", "mz", "steps", "temp",
];

/// Append-only flat record of every packet, one row each.
pub trait LogSink {
    type Error: Debug;

    fn append(&mut self, packet: &TelemetryPacket) -> Result<(), Self::Error>;
}

/// Placeholder sink for sessions without a log.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoLog;

impl LogSink for NoLog {
    type Error = Infallible;

    fn append(&mut self, _packet: &TelemetryPacket) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Formats one comma-separated row in [`LOG_COLUMNS`] order, without a line
/// terminator.
pub fn log_row(packet: &TelemetryPacket) -> String {
    let mut row = String::with_capacity(128);
    // Writing into a String cannot fail.
    let _ = write!(row, "{}", packet.classification);
    for value in packet.reading.fields() {
        let _ = write!(row, ",{}", value);
    }
    row
}

// --- CSV Sink (std) ---

/// Appends rows to any writer, typically a file opened in append mode.
///
/// No header is written; callers that want one write it before the first row.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct CsvLogSink<W: std::io::Write> {
    writer: W,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> CsvLogSink<W> {
    pub fn new(writer: W) -> Self {
        CsvLogSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(feature = "std")]
impl CsvLogSink<std::fs::File> {
    /// Opens (or creates) `path` for appending.
    pub fn append_to(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
        Ok(CsvLogSink::new(file))
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> LogSink for CsvLogSink<W> {
    type Error = std::io::Error;

    fn append(&mut self, packet: &TelemetryPacket) -> Result<(), Self::Error> {
        writeln!(self.writer, "{}", log_row(packet))?;
        self.writer.flush()
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::SensorReading;

    fn packet() -> TelemetryPacket {
        let reading = SensorReading {
            ax: 1, ay: 2, az: 3, gx: 4, gy: 5, gz: 6, ax2: -9, ay2: 8, az2: 9,
            gx2: 10, gy2: 11, gz2: 12, mx: 13, my: 14, mz: 15, steps: 16, temp: 3,
        };
        TelemetryPacket::new(0, reading, 6)
    }

    #[test]
    fn test_log_row_layout() {
        assert_eq!(
            log_row(&packet()),
            "6,1,2,3,4,5,6,-9,8,9,10,11,12,13,14,15,16,3"
        );
        assert_eq!(log_row(&packet()).split(',').count(), LOG_COLUMNS.len());
    }

    #[test]
    fn test_no_log_accepts_everything() {
        assert!(NoLog.append(&packet()).is_ok());
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_csv_sink_appends_lines() {
        let mut sink = CsvLogSink::new(std::vec::Vec::new());
        sink.append(&packet()).unwrap();
        sink.append(&packet()).unwrap();
        let text = std::string::String::from_utf8(sink.into_inner()).unwrap();
        let lines: std::vec::Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.starts_with("6,1,2,3,")));
        assert!(text.ends_with('\n'));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_append_to_file_keeps_earlier_rows() {
        let path = std::env::temp_dir().join(std::format!(
            "longsword-log-{}-{}.csv",
            std::process::id(),
            line!()
        ));
        let _ = std::fs::remove_file(&path);

        CsvLogSink::append_to(&path).unwrap().append(&packet()).unwrap();
        CsvLogSink::append_to(&path).unwrap().append(&packet()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().all(|l| l == log_row(&packet())));
    }
}
