//! # LCS Length and Choice Grids
//!
//! Dynamic-programming construction for the longest common subsequence of
//! two character sequences, recording alongside every length cell which
//! recurrence case produced it. The choice grid is what lets the
//! enumeration walk back through *every* optimal alignment instead of
//! just one: when the up and left neighbours tie, the cell is tagged
//! [`Choice::Tie`] rather than collapsed to either side.

use std::fmt;

use log::{log_enabled, trace, Level};

/// The recurrence case that produced a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// The two characters matched; the cell extends the diagonal.
    CharsEqual,
    /// The upper neighbour was strictly larger.
    PreferUp,
    /// The left neighbour was strictly larger.
    PreferLeft,
    /// Upper and left neighbours agree; both directions are optimal.
    Tie,
}

impl Choice {
    /// One-character rendering used by the diagnostic grids.
    pub fn symbol(self) -> char {
        match self {
            Choice::CharsEqual => '=',
            Choice::PreferUp => '^',
            Choice::PreferLeft => '<',
            Choice::Tie => '+',
        }
    }
}

/// Fully-populated length and choice grids for one input pair.
///
/// Both grids are `(len_b + 1) x (len_a + 1)`; `lengths[i][j]` holds the
/// LCS length of the first `j` characters of `a` against the first `i`
/// characters of `b`, so row 0 and column 0 stay zero and the bottom-right
/// cell is the full answer. The grids are filled once by
/// [`LcsTable::build`] and read-only afterwards.
///
/// # Examples
/// ```
/// use lcs_all::LcsTable;
///
/// let table = LcsTable::build("ABCBDAB", "BDCABA");
/// assert_eq!(table.longest_len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct LcsTable {
    a: Vec<char>,
    b: Vec<char>,
    lengths: Vec<Vec<usize>>,
    choices: Vec<Vec<Choice>>,
}

impl LcsTable {
    /// Builds both grids row by row.
    ///
    /// The zeroed length grid is emitted at the `trace` log level before
    /// filling starts, and the full state of both grids after each
    /// completed row.
    pub fn build(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let cols = a.len() + 1;
        let rows = b.len() + 1;

        let mut table = Self {
            lengths: vec![vec![0; cols]; rows],
            // Row 0 and column 0 are padding; the tag there is never read.
            choices: vec![vec![Choice::Tie; cols]; rows],
            a,
            b,
        };

        if log_enabled!(Level::Trace) {
            trace!("length grid before filling:\n{}", table.render_lengths());
        }

        for i in 1..rows {
            for j in 1..cols {
                if table.a[j - 1] == table.b[i - 1] {
                    table.lengths[i][j] = table.lengths[i - 1][j - 1] + 1;
                    table.choices[i][j] = Choice::CharsEqual;
                } else {
                    let up = table.lengths[i - 1][j];
                    let left = table.lengths[i][j - 1];
                    table.lengths[i][j] = up.max(left);
                    table.choices[i][j] = if up > left {
                        Choice::PreferUp
                    } else if up < left {
                        Choice::PreferLeft
                    } else {
                        Choice::Tie
                    };
                }
            }
            if log_enabled!(Level::Trace) {
                trace!("length grid after row {i}:\n{}", table.render_lengths());
                trace!("choice grid after row {i}:\n{}", table.render_choices());
            }
        }
        table
    }

    /// Length of the first input sequence (grid columns minus one).
    pub fn len_a(&self) -> usize {
        self.a.len()
    }

    /// Length of the second input sequence (grid rows minus one).
    pub fn len_b(&self) -> usize {
        self.b.len()
    }

    /// The LCS length of the full inputs: the bottom-right cell.
    pub fn longest_len(&self) -> usize {
        self.lengths[self.b.len()][self.a.len()]
    }

    /// A cell of the length grid.
    ///
    /// # Panics
    ///
    /// Panics if `i > len_b()` or `j > len_a()`.
    pub fn length_at(&self, i: usize, j: usize) -> usize {
        self.lengths[i][j]
    }

    /// A cell of the choice grid, or `None` on row 0 and column 0, where
    /// no recurrence case applies.
    ///
    /// # Panics
    ///
    /// Panics if `i > len_b()` or `j > len_a()`.
    pub fn choice_at(&self, i: usize, j: usize) -> Option<Choice> {
        if i == 0 || j == 0 {
            None
        } else {
            Some(self.choices[i][j])
        }
    }

    /// Interior choice cell, `i >= 1` and `j >= 1`.
    pub(crate) fn choice(&self, i: usize, j: usize) -> Choice {
        self.choices[i][j]
    }

    /// The first input as characters.
    pub(crate) fn seq_a(&self) -> &[char] {
        &self.a
    }

    /// Multi-line rendering of the length grid, one row per line.
    pub fn render_lengths(&self) -> String {
        let mut out = String::new();
        for row in &self.lengths {
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    out.push(' ');
                }
                out.push_str(&cell.to_string());
            }
            out.push('\n');
        }
        out
    }

    /// Multi-line rendering of the choice grid; padding cells print `.`.
    pub fn render_choices(&self) -> String {
        let mut out = String::new();
        for i in 0..=self.b.len() {
            for j in 0..=self.a.len() {
                if j > 0 {
                    out.push(' ');
                }
                out.push(match self.choice_at(i, j) {
                    Some(choice) => choice.symbol(),
                    None => '.',
                });
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for LcsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_lengths())
    }
}

/// Returns the LCS length of `a` and `b`.
///
/// One-shot convenience over [`LcsTable::build`].
///
/// # Examples
/// ```
/// use lcs_all::lcs_length;
///
/// assert_eq!(lcs_length("ABCBDAB", "BDCABA"), 4);
/// assert_eq!(lcs_length("ABC", "DEF"), 0);
/// ```
pub fn lcs_length(a: &str, b: &str) -> usize {
    LcsTable::build(a, b).longest_len()
}
