//! Dirty-region reporting for document mutations.
//!
//! Every mutation (and every restyle sweep) reports which lines changed so
//! the renderer can repaint the minimum region. Regions from one editing
//! event merge into a single covering region.

/// Which lines were dirtied by a mutation or a restyle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirtyLines {
    /// Nothing changed visually.
    None,
    /// A single line changed (typing within one line).
    Single(usize),
    /// A half-open range of lines changed [from, to).
    Range { from: usize, to: usize },
    /// Everything from a line to the end of the document changed.
    /// Produced when lines are split or joined and everything below shifts.
    FromLineToEnd(usize),
}

impl DirtyLines {
    /// Returns true if no lines were dirtied.
    pub fn is_none(&self) -> bool {
        matches!(self, DirtyLines::None)
    }

    /// Returns the first dirty line, if any.
    pub fn start_line(&self) -> Option<usize> {
        match self {
            DirtyLines::None => None,
            DirtyLines::Single(line) => Some(*line),
            DirtyLines::Range { from, .. } => Some(*from),
            DirtyLines::FromLineToEnd(line) => Some(*line),
        }
    }

    /// Merges another dirty region into this one, producing the smallest
    /// region covering both.
    ///
    /// An edit and the resynchronization sweep it triggers each produce a
    /// region; merging them yields the one region handed to the renderer.
    pub fn merge(&mut self, other: DirtyLines) {
        *self = match (&*self, &other) {
            (DirtyLines::None, _) => other,
            (_, DirtyLines::None) => return,

            // FromLineToEnd absorbs everything below the earlier start.
            (DirtyLines::FromLineToEnd(a), DirtyLines::FromLineToEnd(b)) => {
                DirtyLines::FromLineToEnd((*a).min(*b))
            }
            (DirtyLines::FromLineToEnd(a), other) | (other, DirtyLines::FromLineToEnd(a)) => {
                let b = other.start_line().unwrap();
                DirtyLines::FromLineToEnd((*a).min(b))
            }

            (DirtyLines::Single(a), DirtyLines::Single(b)) => {
                if a == b {
                    DirtyLines::Single(*a)
                } else {
                    DirtyLines::Range {
                        from: (*a).min(*b),
                        to: (*a).max(*b) + 1,
                    }
                }
            }

            (DirtyLines::Single(a), DirtyLines::Range { from, to })
            | (DirtyLines::Range { from, to }, DirtyLines::Single(a)) => DirtyLines::Range {
                from: (*from).min(*a),
                to: (*to).max(*a + 1),
            },

            (DirtyLines::Range { from: a, to: b }, DirtyLines::Range { from: c, to: d }) => {
                DirtyLines::Range {
                    from: (*a).min(*c),
                    to: (*b).max(*d),
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_none_is_identity() {
        let mut d = DirtyLines::None;
        d.merge(DirtyLines::Single(5));
        assert_eq!(d, DirtyLines::Single(5));

        let mut d = DirtyLines::Single(5);
        d.merge(DirtyLines::None);
        assert_eq!(d, DirtyLines::Single(5));
    }

    #[test]
    fn merge_singles() {
        let mut d = DirtyLines::Single(3);
        d.merge(DirtyLines::Single(3));
        assert_eq!(d, DirtyLines::Single(3));

        let mut d = DirtyLines::Single(10);
        d.merge(DirtyLines::Single(3));
        assert_eq!(d, DirtyLines::Range { from: 3, to: 11 });
    }

    #[test]
    fn merge_ranges() {
        let mut d = DirtyLines::Range { from: 3, to: 7 };
        d.merge(DirtyLines::Range { from: 5, to: 10 });
        assert_eq!(d, DirtyLines::Range { from: 3, to: 10 });

        let mut d = DirtyLines::Range { from: 2, to: 10 };
        d.merge(DirtyLines::Range { from: 4, to: 7 });
        assert_eq!(d, DirtyLines::Range { from: 2, to: 10 });
    }

    #[test]
    fn merge_single_with_range() {
        let mut d = DirtyLines::Range { from: 5, to: 10 };
        d.merge(DirtyLines::Single(2));
        assert_eq!(d, DirtyLines::Range { from: 2, to: 10 });

        let mut d = DirtyLines::Range { from: 5, to: 10 };
        d.merge(DirtyLines::Single(15));
        assert_eq!(d, DirtyLines::Range { from: 5, to: 16 });
    }

    #[test]
    fn merge_from_line_to_end_absorbs() {
        let mut d = DirtyLines::Single(2);
        d.merge(DirtyLines::FromLineToEnd(5));
        assert_eq!(d, DirtyLines::FromLineToEnd(2));

        let mut d = DirtyLines::FromLineToEnd(5);
        d.merge(DirtyLines::Range { from: 8, to: 12 });
        assert_eq!(d, DirtyLines::FromLineToEnd(5));
    }

    #[test]
    fn merge_edit_then_resync_sweep() {
        // A newline insert on line 3 followed by a resync that restyled
        // lines 3..6 reports one region.
        let mut d = DirtyLines::FromLineToEnd(3);
        d.merge(DirtyLines::Range { from: 3, to: 6 });
        assert_eq!(d, DirtyLines::FromLineToEnd(3));

        // Typing inside line 4 with a two-line sweep.
        let mut d = DirtyLines::Single(4);
        d.merge(DirtyLines::Range { from: 4, to: 6 });
        assert_eq!(d, DirtyLines::Range { from: 4, to: 6 });
    }
}
