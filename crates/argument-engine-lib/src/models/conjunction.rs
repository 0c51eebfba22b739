use super::proposition::{Atom, Fact};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An ordered conjunctive clause: a sequence of facts, implicitly ANDed.
///
/// Order is not semantically significant (spec.md §4.2) but is preserved
/// for deterministic test output — this type never reorders or
/// deduplicates the facts it's built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Conjunction(pub Vec<Fact>);

impl Conjunction {
    pub fn new(facts: Vec<Fact>) -> Self {
        Conjunction(facts)
    }

    pub fn empty() -> Self {
        Conjunction(Vec::new())
    }

    pub fn single(fact: Fact) -> Self {
        Conjunction(vec![fact])
    }

    pub fn facts(&self) -> &[Fact] {
        &self.0
    }

    /// Concatenate two conjunctions (classical conjunction of clauses).
    pub fn concat(&self, other: &Conjunction) -> Conjunction {
        let mut out = self.0.clone();
        out.extend(other.0.iter().cloned());
        Conjunction(out)
    }

    /// A conjunction is consistent iff no two of its facts contradict.
    /// Duplicate facts are permitted and semantically idempotent.
    pub fn is_consistent(&self) -> bool {
        for (i, a) in self.0.iter().enumerate() {
            for b in &self.0[i + 1..] {
                if a.contradicts(b) {
                    return false;
                }
            }
        }
        true
    }

    pub fn atoms(&self) -> HashSet<Atom> {
        self.0.iter().map(|f| f.atom().clone()).collect()
    }

    /// Flip the sign of every fact in the conjunction — used by `negate`
    /// on a single conjunction before the cross product is built.
    pub fn flipped(&self) -> Conjunction {
        Conjunction(self.0.iter().map(|f| f.flipped()).collect())
    }
}

/// An ordered disjunction of conjunctions: `⋁ᵢ ⋀ⱼ fᵢⱼ`.
///
/// Invariants (spec.md §3):
/// - the empty DNF denotes `False`;
/// - a DNF containing the empty conjunction denotes `True`;
/// - a DNF is impossible iff every conjunction is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dnf(pub Vec<Conjunction>);

impl Dnf {
    pub fn new(conjunctions: Vec<Conjunction>) -> Self {
        Dnf(conjunctions)
    }

    pub fn empty() -> Self {
        Dnf(Vec::new())
    }

    /// The DNF denoting `True`: a single empty conjunction.
    pub fn tautology() -> Self {
        Dnf(vec![Conjunction::empty()])
    }

    pub fn conjunctions(&self) -> &[Conjunction] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenation of two DNFs (classical disjunction).
    pub fn concat(&self, other: &Dnf) -> Dnf {
        let mut out = self.0.clone();
        out.extend(other.0.iter().cloned());
        Dnf(out)
    }

    /// `cases(p) := filter(decompose(p), consistent)` restricted to this DNF.
    pub fn consistent_conjunctions(&self) -> Dnf {
        Dnf(self
            .0
            .iter()
            .filter(|c| c.is_consistent())
            .cloned()
            .collect())
    }

    /// A DNF is impossible iff every conjunction in it is inconsistent.
    /// The empty DNF is vacuously impossible (there is no conjunction to
    /// witness satisfiability), matching `impossible(decompose(False)) = true`.
    pub fn is_impossible(&self) -> bool {
        self.0.iter().all(|c| !c.is_consistent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistency() {
        let a = Atom::new("p");
        let c = Conjunction::new(vec![Fact::Positive(a.clone()), Fact::Negative(a.clone())]);
        assert!(!c.is_consistent());
        let c2 = Conjunction::new(vec![Fact::Positive(a.clone())]);
        assert!(c2.is_consistent());
    }

    #[test]
    fn empty_dnf_is_impossible_false_is_not() {
        assert!(Dnf::empty().is_impossible());
        assert!(!Dnf::tautology().is_impossible());
    }

    #[test]
    fn duplicate_facts_are_idempotent_for_consistency() {
        let a = Atom::new("p");
        let c = Conjunction::new(vec![Fact::Positive(a.clone()), Fact::Positive(a)]);
        assert!(c.is_consistent());
    }
}
