use core::fmt;

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemoryReading {
    pub delta_bytes: i64,
    pub probe: &'static str,
}

/// Outcome of one demonstration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub demo: &'static str,
    pub title: &'static str,
    pub input_len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visits: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparisons: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moves: Option<u64>,
    pub elapsed_us: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryReading>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {} ({}) ---", self.title, self.demo)?;
        writeln!(f, "input:       {} elements", self.input_len)?;
        if let Some(visits) = self.visits {
            writeln!(f, "visits:      {visits}")?;
        }
        if let (Some(comparisons), Some(moves)) = (self.comparisons, self.moves) {
            writeln!(f, "comparisons: {comparisons}")?;
            writeln!(f, "moves:       {moves}")?;
        }
        writeln!(f, "time:        {:.3} ms", self.elapsed_us as f64 / 1000.0)?;
        match &self.memory {
            Some(m) => write!(f, "space:       {} bytes ({} probe)", m.delta_bytes, m.probe),
            None => write!(f, "space:       not measured"),
        }
    }
}

/// Side-by-side view of several sort reports.
pub struct Table<'a>(pub &'a [Report]);

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>16} | {:>10} | {:>12} | {:>10} | {:>10} | {:>14}",
            "Algorithm", "Size", "Comparisons", "Moves", "Time (ms)", "Space (bytes)"
        )?;
        write!(
            f,
            "{:-<16}-+-{:-<10}-+-{:-<12}-+-{:-<10}-+-{:-<10}-+-{:-<14}",
            "", "", "", "", "", ""
        )?;
        for report in self.0 {
            let space = report
                .memory
                .as_ref()
                .map_or_else(|| "N/A".to_string(), |m| m.delta_bytes.to_string());
            write!(
                f,
                "\n{:>16} | {:>10} | {:>12} | {:>10} | {:>10.3} | {:>14}",
                report.demo,
                report.input_len,
                report.comparisons.unwrap_or_default(),
                report.moves.unwrap_or_default(),
                report.elapsed_us as f64 / 1000.0,
                space
            )?;
        }
        Ok(())
    }
}
