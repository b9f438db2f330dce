//! Side-by-side line diff for markdown comparison
//!
//! Produces the rows of a two-column table: each row pairs an optional
//! left line with an optional right line, numbered from 1. Adjacent
//! deletions and insertions are paired into changed rows and carry
//! character-level segments so the differing parts can be highlighted.

use similar::{Algorithm, ChangeTag, DiffTag, TextDiff};

/// How a row differs between the two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Equal,
    /// Only present on the right
    Inserted,
    /// Only present on the left
    Deleted,
    /// Present on both sides with different content
    Changed,
}

/// A piece of a changed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

/// One side of a diff row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub number: usize,
    pub segments: Vec<Segment>,
}

impl DiffLine {
    fn plain(number: usize, text: &str) -> Self {
        Self {
            number,
            segments: vec![Segment {
                text: text.to_string(),
                emphasized: false,
            }],
        }
    }

    /// The full line text with segment boundaries removed
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRow {
    pub kind: RowKind,
    pub left: Option<DiffLine>,
    pub right: Option<DiffLine>,
}

/// Complete side-by-side comparison of two texts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideBySideDiff {
    pub rows: Vec<DiffRow>,
}

impl SideBySideDiff {
    /// Compare two texts line by line
    pub fn compute(left: &str, right: &str) -> Self {
        let old_lines: Vec<&str> = left.lines().collect();
        let new_lines: Vec<&str> = right.lines().collect();
        let ops = similar::capture_diff_slices(Algorithm::Myers, &old_lines, &new_lines);

        let mut rows = Vec::new();
        for op in ops {
            let (tag, old_range, new_range) = op.as_tag_tuple();
            match tag {
                DiffTag::Equal => {
                    for (o, n) in old_range.zip(new_range) {
                        rows.push(DiffRow {
                            kind: RowKind::Equal,
                            left: Some(DiffLine::plain(o + 1, old_lines[o])),
                            right: Some(DiffLine::plain(n + 1, new_lines[n])),
                        });
                    }
                }
                DiffTag::Delete => {
                    for o in old_range {
                        rows.push(DiffRow {
                            kind: RowKind::Deleted,
                            left: Some(DiffLine::plain(o + 1, old_lines[o])),
                            right: None,
                        });
                    }
                }
                DiffTag::Insert => {
                    for n in new_range {
                        rows.push(DiffRow {
                            kind: RowKind::Inserted,
                            left: None,
                            right: Some(DiffLine::plain(n + 1, new_lines[n])),
                        });
                    }
                }
                DiffTag::Replace => {
                    push_replace(&mut rows, &old_lines, old_range, &new_lines, new_range)
                }
            }
        }

        Self { rows }
    }

    pub fn is_identical(&self) -> bool {
        self.rows.iter().all(|r| r.kind == RowKind::Equal)
    }

    /// Number of rows that are not equal
    pub fn change_count(&self) -> usize {
        self.rows.iter().filter(|r| r.kind != RowKind::Equal).count()
    }
}

fn push_replace(
    rows: &mut Vec<DiffRow>,
    old_lines: &[&str],
    old_range: std::ops::Range<usize>,
    new_lines: &[&str],
    new_range: std::ops::Range<usize>,
) {
    let paired = old_range.len().min(new_range.len());
    let mut old_iter = old_range.clone();
    let mut new_iter = new_range.clone();

    for _ in 0..paired {
        if let (Some(o), Some(n)) = (old_iter.next(), new_iter.next()) {
            let (left, right) = intraline(old_lines[o], new_lines[n]);
            rows.push(DiffRow {
                kind: RowKind::Changed,
                left: Some(DiffLine {
                    number: o + 1,
                    segments: left,
                }),
                right: Some(DiffLine {
                    number: n + 1,
                    segments: right,
                }),
            });
        }
    }
    for o in old_iter {
        rows.push(DiffRow {
            kind: RowKind::Deleted,
            left: Some(DiffLine::plain(o + 1, old_lines[o])),
            right: None,
        });
    }
    for n in new_iter {
        rows.push(DiffRow {
            kind: RowKind::Inserted,
            left: None,
            right: Some(DiffLine::plain(n + 1, new_lines[n])),
        });
    }
}

/// Character-level segments for a changed pair of lines
fn intraline(old: &str, new: &str) -> (Vec<Segment>, Vec<Segment>) {
    let diff = TextDiff::from_chars(old, new);
    let mut left = Vec::new();
    let mut right = Vec::new();

    for change in diff.iter_all_changes() {
        let value = change.value();
        match change.tag() {
            ChangeTag::Equal => {
                push_segment(&mut left, value, false);
                push_segment(&mut right, value, false);
            }
            ChangeTag::Delete => push_segment(&mut left, value, true),
            ChangeTag::Insert => push_segment(&mut right, value, true),
        }
    }

    (left, right)
}

fn push_segment(segments: &mut Vec<Segment>, text: &str, emphasized: bool) {
    match segments.last_mut() {
        Some(last) if last.emphasized == emphasized => last.text.push_str(text),
        _ => segments.push(Segment {
            text: text.to_string(),
            emphasized,
        }),
    }
}
