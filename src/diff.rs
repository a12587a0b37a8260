//! Line diff between a section body and its sorted form.

/// One step of a line diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOp {
    Equal(String),
    Delete(String),
    Insert(String),
}

impl DiffOp {
    pub fn line(&self) -> &str {
        match self {
            DiffOp::Equal(line) | DiffOp::Delete(line) | DiffOp::Insert(line) => line,
        }
    }

    /// Two-character marker used when rendering: `"  "`, `"- "` or `"+ "`.
    pub fn marker(&self) -> &'static str {
        match self {
            DiffOp::Equal(_) => "  ",
            DiffOp::Delete(_) => "- ",
            DiffOp::Insert(_) => "+ ",
        }
    }
}

/// Diff two line sequences via their longest common subsequence.
///
/// Deletions are emitted before insertions when both are possible, so a
/// moved line reads as `- line` followed later by `+ line`.
///
/// The LCS table holds `(old.len() + 1) * (new.len() + 1)` entries, so time
/// and memory are quadratic in the section length. A few thousand rows per
/// section stay well within bounds.
pub fn diff_lines<S: AsRef<str>>(old: &[S], new: &[S]) -> Vec<DiffOp> {
    let (n, m) = (old.len(), new.len());

    // lcs[i][j] = length of the LCS of old[i..] and new[j..]
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if old[i].as_ref() == new[j].as_ref() {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut ops = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if old[i].as_ref() == new[j].as_ref() {
            ops.push(DiffOp::Equal(old[i].as_ref().to_string()));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            ops.push(DiffOp::Delete(old[i].as_ref().to_string()));
            i += 1;
        } else {
            ops.push(DiffOp::Insert(new[j].as_ref().to_string()));
            j += 1;
        }
    }
    ops.extend(old[i..].iter().map(|l| DiffOp::Delete(l.as_ref().to_string())));
    ops.extend(new[j..].iter().map(|l| DiffOp::Insert(l.as_ref().to_string())));
    ops
}
