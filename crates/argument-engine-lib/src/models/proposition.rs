use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A propositional variable name.
///
/// Wrapping `String` instead of aliasing it keeps atom equality and
/// hashing anchored to one type even as the rest of the crate grows.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Atom(pub String);

impl Atom {
    pub fn new(name: impl Into<String>) -> Self {
        Atom(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Atom {
    fn from(s: &str) -> Self {
        Atom(s.to_string())
    }
}

/// A signed literal: an atom asserted true or asserted false.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Fact {
    Positive(Atom),
    Negative(Atom),
}

impl Fact {
    pub fn atom(&self) -> &Atom {
        match self {
            Fact::Positive(a) | Fact::Negative(a) => a,
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, Fact::Positive(_))
    }

    /// Flip the sign, keeping the atom.
    pub fn flipped(&self) -> Fact {
        match self {
            Fact::Positive(a) => Fact::Negative(a.clone()),
            Fact::Negative(a) => Fact::Positive(a.clone()),
        }
    }

    /// Two facts contradict iff they name the same atom with opposite sign.
    pub fn contradicts(&self, other: &Fact) -> bool {
        self.atom() == other.atom() && self.is_positive() != other.is_positive()
    }
}

/// A propositional formula.
///
/// Mirrors the teacher's `Formula` enum (`Atom`/`Not`/`And`/`Or`/`Implies`/
/// `Biconditional`/`Contradiction`) but names the variants after spec.md's
/// data model and adds `True` — the teacher's single-sink `Contradiction`
/// variant only ever denotes `False`, while DNF's "empty conjunction"
/// invariant (spec.md §3) needs both poles representable as formulas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Proposition {
    Variable(Atom),
    Not(Box<Proposition>),
    And(Box<Proposition>, Box<Proposition>),
    Or(Box<Proposition>, Box<Proposition>),
    Implies(Box<Proposition>, Box<Proposition>),
    Equiv(Box<Proposition>, Box<Proposition>),
    True,
    False,
}

impl Proposition {
    pub fn var(name: impl Into<String>) -> Self {
        Proposition::Variable(Atom::new(name))
    }

    pub fn not(p: Proposition) -> Self {
        Proposition::Not(Box::new(p))
    }

    pub fn and(a: Proposition, b: Proposition) -> Self {
        Proposition::And(Box::new(a), Box::new(b))
    }

    pub fn or(a: Proposition, b: Proposition) -> Self {
        Proposition::Or(Box::new(a), Box::new(b))
    }

    pub fn implies(a: Proposition, b: Proposition) -> Self {
        Proposition::Implies(Box::new(a), Box::new(b))
    }

    pub fn equiv(a: Proposition, b: Proposition) -> Self {
        Proposition::Equiv(Box::new(a), Box::new(b))
    }

    /// Structural equality. `Proposition` already derives `PartialEq`, so
    /// this is a named convenience for callers that want to spell out the
    /// spec's "structural equality" requirement explicitly.
    pub fn equals(&self, other: &Proposition) -> bool {
        self == other
    }

    /// All atoms mentioned anywhere in the formula.
    pub fn atoms(&self) -> HashSet<Atom> {
        let mut out = HashSet::new();
        self.collect_atoms(&mut out);
        out
    }

    fn collect_atoms(&self, out: &mut HashSet<Atom>) {
        match self {
            Proposition::Variable(a) => {
                out.insert(a.clone());
            }
            Proposition::Not(inner) => inner.collect_atoms(out),
            Proposition::And(l, r)
            | Proposition::Or(l, r)
            | Proposition::Implies(l, r)
            | Proposition::Equiv(l, r) => {
                l.collect_atoms(out);
                r.collect_atoms(out);
            }
            Proposition::True | Proposition::False => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fact_contradiction() {
        let a = Fact::Positive(Atom::new("p"));
        let b = Fact::Negative(Atom::new("p"));
        let c = Fact::Positive(Atom::new("q"));
        assert!(a.contradicts(&b));
        assert!(!a.contradicts(&c));
        assert!(!a.contradicts(&a));
    }

    #[test]
    fn structural_equality() {
        let p1 = Proposition::and(Proposition::var("a"), Proposition::var("b"));
        let p2 = Proposition::and(Proposition::var("a"), Proposition::var("b"));
        let p3 = Proposition::and(Proposition::var("b"), Proposition::var("a"));
        assert!(p1.equals(&p2));
        assert!(!p1.equals(&p3));
    }

    #[test]
    fn atoms_collected() {
        let p = Proposition::implies(
            Proposition::and(Proposition::var("a"), Proposition::var("b")),
            Proposition::var("c"),
        );
        let atoms = p.atoms();
        assert_eq!(atoms.len(), 3);
        assert!(atoms.contains(&Atom::new("a")));
        assert!(atoms.contains(&Atom::new("b")));
        assert!(atoms.contains(&Atom::new("c")));
    }
}
