//! ScoreReport - per-reference scores and the selected winner
//!
//! A classification produces one score per reference plus the winning
//! label. The report keeps the scores in reference iteration order and can
//! render itself as a short text log, one line per reference and a closing
//! winner line, with thousands-grouped numbers.

use std::fmt;
use std::io;

/// Score of a single reference
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    /// Reference label
    pub label: String,
    /// Inner product of the query with this reference
    pub score: f64,
}

/// Result of scoring a query against a reference set
///
/// Entries appear in reference iteration order. The winner is the entry
/// with the strictly greatest score, scanning front to back, so equal
/// scores resolve to the first-encountered label.
#[derive(Debug, Clone)]
pub struct ScoreReport {
    entries: Vec<ScoreEntry>,
    best: usize,
}

impl ScoreReport {
    /// Build a report from per-reference scores, selecting the winner.
    ///
    /// Callers guarantee `entries` is non-empty.
    pub(crate) fn new(entries: Vec<ScoreEntry>) -> Self {
        debug_assert!(!entries.is_empty());

        let mut best = 0;
        let mut best_score = entries[0].score;
        for (i, entry) in entries.iter().enumerate().skip(1) {
            // Strict comparison keeps the first of any tied maximum.
            if entry.score > best_score {
                best = i;
                best_score = entry.score;
            }
        }

        ScoreReport { entries, best }
    }

    /// Get the per-reference scores in reference iteration order.
    #[inline]
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Get the winning entry.
    #[inline]
    pub fn winner(&self) -> &ScoreEntry {
        &self.entries[self.best]
    }

    /// Get the winning label.
    #[inline]
    pub fn winning_label(&self) -> &str {
        &self.entries[self.best].label
    }

    /// Get the winning score.
    #[inline]
    pub fn winning_score(&self) -> f64 {
        self.entries[self.best].score
    }

    /// Get the number of scored references.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the report has no entries (never the case for reports
    /// produced by scoring, which rejects empty reference sets).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the rendered report to a writer.
    ///
    /// Produces the same text as the `Display` implementation.
    pub fn write_to(&self, writer: &mut impl io::Write) -> io::Result<()> {
        write!(writer, "{self}")
    }
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "score report ({} references)", self.entries.len())?;
        for entry in &self.entries {
            writeln!(f, "  {}: {}", entry.label, group_digits(entry.score))?;
        }
        writeln!(
            f,
            "winner: {} ({})",
            self.winning_label(),
            group_digits(self.winning_score())
        )
    }
}

/// Format a score with comma thousands separators.
///
/// At most two fractional digits are kept and trailing zeros are trimmed,
/// so `260100.0` renders as `260,100` and `1234.5` as `1,234.5`. Full
/// locale awareness is the presentation layer's concern; this is a fixed,
/// readable default.
fn group_digits(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let formatted = formatted.trim_end_matches('0').trim_end_matches('.');

    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
