use super::proposition::Proposition;

/// Three-valued result of comparing two propositions under a preference
/// relation.
///
/// spec.md §9 explicitly calls for this over `Option<bool>`: `Some(false)`
/// is ambiguous between "q is greater" and "known not greater", which
/// matters once `isRebutted`/`isDefeated` need to distinguish "p does not
/// outrank q" from "q outranks p".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Greater,
    Lesser,
    Incomparable,
}

/// A partial order over propositions (spec.md §3).
///
/// `compare(p, q) = Greater` means `p` strictly outranks `q`; `Lesser`
/// means `q` outranks `p`; `Incomparable` means neither does.
pub trait Preference {
    fn compare(&self, p: &Proposition, q: &Proposition) -> Comparison;

    /// Convenience used throughout the semantics module: does `p` strictly
    /// outrank `q`?
    fn outranks(&self, p: &Proposition, q: &Proposition) -> bool {
        matches!(self.compare(p, q), Comparison::Greater)
    }
}

/// The trivial preference: no proposition ever outranks another.
pub struct NoPreference;

impl Preference for NoPreference {
    fn compare(&self, _p: &Proposition, _q: &Proposition) -> Comparison {
        Comparison::Incomparable
    }
}

/// A ranking — a sequence of `(rank, proposition)` pairs — instantiating
/// `Preference` the way spec.md §3/§9 describes: `p` outranks `q` iff
/// `rank(p) > rank(q)` and both are listed. Propositions not present in
/// the ranking are incomparable to everything, including each other.
pub struct Ranking {
    entries: Vec<(i64, Proposition)>,
}

impl Ranking {
    pub fn new(entries: Vec<(i64, Proposition)>) -> Self {
        Ranking { entries }
    }

    fn rank_of(&self, p: &Proposition) -> Option<i64> {
        self.entries
            .iter()
            .find(|(_, q)| q == p)
            .map(|(rank, _)| *rank)
    }
}

impl Preference for Ranking {
    fn compare(&self, p: &Proposition, q: &Proposition) -> Comparison {
        match (self.rank_of(p), self.rank_of(q)) {
            (Some(rp), Some(rq)) if rp > rq => Comparison::Greater,
            (Some(rp), Some(rq)) if rp < rq => Comparison::Lesser,
            _ => Comparison::Incomparable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_orders_listed_propositions() {
        let a = Proposition::var("a");
        let b = Proposition::var("b");
        let ranking = Ranking::new(vec![(2, a.clone()), (1, b.clone())]);
        assert_eq!(ranking.compare(&a, &b), Comparison::Greater);
        assert_eq!(ranking.compare(&b, &a), Comparison::Lesser);
    }

    #[test]
    fn unlisted_propositions_are_incomparable() {
        let a = Proposition::var("a");
        let c = Proposition::var("c");
        let ranking = Ranking::new(vec![(1, a.clone())]);
        assert_eq!(ranking.compare(&a, &c), Comparison::Incomparable);
    }

    #[test]
    fn no_preference_is_always_incomparable() {
        let a = Proposition::var("a");
        let b = Proposition::var("b");
        assert_eq!(NoPreference.compare(&a, &b), Comparison::Incomparable);
    }
}
