//! Line-level diff
//!
//! Myers' O(ND) algorithm in its linear-space form: instead of keeping every
//! round of the search, each step looks for the middle snake of the shortest
//! edit script by searching from both ends at once, splits the problem there
//! and recurses. Memory stays proportional to the input size.
//!
//! The script aligns both sides on a longest common subsequence. Lines on it
//! are `Equal`, the rest of the old side is `Delete` and the rest of the new
//! side is `Insert`, in the order of both inputs. Inside a run of changes the
//! deletions come before the insertions.

use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn value(&self) -> &T {
        match self {
            Edit::Delete { value } | Edit::Insert { value } | Edit::Equal { value } => value,
        }
    }
}

impl<T: Display> Display for Edit<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edit::Delete { value } => write!(f, "-{value}"),
            Edit::Insert { value } => write!(f, "+{value}"),
            Edit::Equal { value } => write!(f, " {value}"),
        }
    }
}

/// Point where the old and new sides are split for the next recursion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Split {
    old: usize,
    new: usize,
}

impl Split {
    /// Both halves are smaller than the `old_len` x `new_len` problem
    fn divides(&self, old_len: usize, new_len: usize) -> bool {
        self.old <= old_len
            && self.new <= new_len
            && (self.old, self.new) != (0, 0)
            && (self.old, self.new) != (old_len, new_len)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T: Eq + Clone> MyersDiff<'_, T> {
    /// Shortest edit script turning `a` into `b`
    pub fn diff(&self) -> Vec<Edit<T>> {
        let mut edits = Vec::with_capacity(self.a.len().max(self.b.len()));
        self.diff_range(self.a, self.b, &mut edits);

        deletions_first(edits)
    }

    fn diff_range(&self, a: &[T], b: &[T], edits: &mut Vec<Edit<T>>) {
        let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
        let (a_rest, b_rest) = (&a[prefix..], &b[prefix..]);
        let suffix = a_rest
            .iter()
            .rev()
            .zip(b_rest.iter().rev())
            .take_while(|(x, y)| x == y)
            .count();
        let (a_mid, b_mid) = (
            &a_rest[..a_rest.len() - suffix],
            &b_rest[..b_rest.len() - suffix],
        );

        edits.extend(a[..prefix].iter().cloned().map(|value| Edit::Equal { value }));

        if a_mid.is_empty() || b_mid.is_empty() {
            edits.extend(a_mid.iter().cloned().map(|value| Edit::Delete { value }));
            edits.extend(b_mid.iter().cloned().map(|value| Edit::Insert { value }));
        } else {
            let split = Self::middle_snake(a_mid, b_mid)
                .filter(|split| split.divides(a_mid.len(), b_mid.len()));

            match split {
                Some(split) => {
                    self.diff_range(&a_mid[..split.old], &b_mid[..split.new], edits);
                    self.diff_range(&a_mid[split.old..], &b_mid[split.new..], edits);
                }
                // nothing in common
                None => {
                    edits.extend(a_mid.iter().cloned().map(|value| Edit::Delete { value }));
                    edits.extend(b_mid.iter().cloned().map(|value| Edit::Insert { value }));
                }
            }
        }

        edits.extend(
            a_rest[a_rest.len() - suffix..]
                .iter()
                .cloned()
                .map(|value| Edit::Equal { value }),
        );
    }

    /// Find a point on a shortest edit path roughly halfway through it
    ///
    /// `forward[k]` holds the furthest `x` reached on diagonal `k = x - y`
    /// from the top-left corner, `backward[k]` the same measured from the
    /// bottom-right corner. Diagonals that leave the grid are dropped from
    /// the search. Returns `None` when the inputs share no element.
    fn middle_snake(a: &[T], b: &[T]) -> Option<Split> {
        let (n, m) = (a.len() as isize, b.len() as isize);
        let max_d = (n + m + 1) / 2;
        let offset = max_d;
        let len = (2 * max_d + 2) as usize;

        let mut forward = vec![-1isize; len];
        let mut backward = vec![-1isize; len];
        forward[(offset + 1) as usize] = 0;
        backward[(offset + 1) as usize] = 0;

        let delta = n - m;
        // with an odd delta the paths meet while extending forward
        let meet_forward = delta % 2 != 0;
        let (mut forward_start, mut forward_end) = (0, 0);
        let (mut backward_start, mut backward_end) = (0, 0);

        for d in 0..max_d {
            let mut k = -d + forward_start;
            while k <= d - forward_end {
                let idx = (offset + k) as usize;
                let mut x = if k == -d || (k != d && forward[idx - 1] < forward[idx + 1]) {
                    forward[idx + 1]
                } else {
                    forward[idx - 1] + 1
                };
                let mut y = x - k;
                while x < n && y < m && a[x as usize] == b[y as usize] {
                    x += 1;
                    y += 1;
                }
                forward[idx] = x;

                if x > n {
                    forward_end += 2;
                } else if y > m {
                    forward_start += 2;
                } else if meet_forward {
                    let other = offset + delta - k;
                    if (0..len as isize).contains(&other) && backward[other as usize] != -1 {
                        let reached = n - backward[other as usize];
                        if x >= reached {
                            return Some(Split {
                                old: x as usize,
                                new: y as usize,
                            });
                        }
                    }
                }
                k += 2;
            }

            let mut k = -d + backward_start;
            while k <= d - backward_end {
                let idx = (offset + k) as usize;
                let mut x = if k == -d || (k != d && backward[idx - 1] < backward[idx + 1]) {
                    backward[idx + 1]
                } else {
                    backward[idx - 1] + 1
                };
                let mut y = x - k;
                while x < n && y < m && a[(n - x - 1) as usize] == b[(m - y - 1) as usize] {
                    x += 1;
                    y += 1;
                }
                backward[idx] = x;

                if x > n {
                    backward_end += 2;
                } else if y > m {
                    backward_start += 2;
                } else if !meet_forward {
                    let other = offset + delta - k;
                    if (0..len as isize).contains(&other) && forward[other as usize] != -1 {
                        let forward_x = forward[other as usize];
                        let forward_y = forward_x - (other - offset);
                        // a forward diagonal that ran off the grid cannot be split on
                        let on_grid = forward_x <= n && (0..=m).contains(&forward_y);
                        if on_grid && forward_x >= n - x {
                            return Some(Split {
                                old: forward_x as usize,
                                new: forward_y as usize,
                            });
                        }
                    }
                }
                k += 2;
            }
        }

        None
    }
}

/// Reorder every run of changes so its deletions precede its insertions
fn deletions_first<T>(edits: Vec<Edit<T>>) -> Vec<Edit<T>> {
    let mut ordered = Vec::with_capacity(edits.len());
    let mut inserts = Vec::new();

    for edit in edits {
        match edit {
            Edit::Insert { .. } => inserts.push(edit),
            Edit::Delete { .. } => ordered.push(edit),
            Edit::Equal { .. } => {
                ordered.append(&mut inserts);
                ordered.push(edit);
            }
        }
    }
    ordered.append(&mut inserts);

    ordered
}

/// Diff two texts line by line
///
/// Lines are split on `\n` (a trailing `\r` is stripped), so a missing final
/// newline does not produce a spurious change.
pub fn diff_lines(old: &str, new: &str) -> Vec<Edit<String>> {
    let a = old.lines().map(str::to_string).collect::<Vec<_>>();
    let b = new.lines().map(str::to_string).collect::<Vec<_>>();

    MyersDiff::new(&a, &b).diff()
}
