use crate::models::conjunction::{Conjunction, Dnf};
use crate::models::proposition::{Fact, Proposition};

/// Rewrite any `Proposition` into disjunctive normal form by structural
/// recursion, without short-circuiting on tautology or contradiction
/// (spec.md §4.1).
///
/// `Not(Implies(a,b))` is deliberately rewritten as `Implies(Not(b),
/// Not(a))` rather than the classically valid `And(a, Not(b))` — this is
/// the classically-invalid rewrite spec.md §9 preserves for behavioral
/// parity with the source this engine is derived from. It is a known bug,
/// kept on purpose.
pub fn decompose(p: &Proposition) -> Dnf {
    match p {
        Proposition::Variable(a) => Dnf::new(vec![Conjunction::single(Fact::Positive(a.clone()))]),
        Proposition::True => Dnf::tautology(),
        Proposition::False => Dnf::empty(),

        Proposition::Not(inner) => decompose_not(inner),

        Proposition::And(a, b) => {
            let da = decompose(a);
            let db = decompose(b);
            cross_concat(&da, &db)
        }

        Proposition::Or(a, b) => decompose(a).concat(&decompose(b)),

        Proposition::Implies(a, b) => {
            decompose(&Proposition::or(Proposition::not((**a).clone()), (**b).clone()))
        }

        Proposition::Equiv(a, b) => decompose(&Proposition::and(
            Proposition::implies((**a).clone(), (**b).clone()),
            Proposition::implies((**b).clone(), (**a).clone()),
        )),
    }
}

fn decompose_not(inner: &Proposition) -> Dnf {
    match inner {
        Proposition::Variable(a) => Dnf::new(vec![Conjunction::single(Fact::Negative(a.clone()))]),
        Proposition::True => Dnf::empty(),
        Proposition::False => Dnf::tautology(),

        Proposition::Not(p) => decompose(p),

        Proposition::And(a, b) => decompose(&Proposition::or(
            Proposition::not((**a).clone()),
            Proposition::not((**b).clone()),
        )),

        Proposition::Or(a, b) => decompose(&Proposition::and(
            Proposition::not((**a).clone()),
            Proposition::not((**b).clone()),
        )),

        // Intentional classically-invalid rewrite, preserved for parity
        // (spec.md §4.1, §9): Not(Implies(a,b)) -> Implies(Not(b), Not(a)).
        Proposition::Implies(a, b) => decompose(&Proposition::implies(
            Proposition::not((**b).clone()),
            Proposition::not((**a).clone()),
        )),

        Proposition::Equiv(a, b) => decompose(&Proposition::or(
            Proposition::not(Proposition::implies((**a).clone(), (**b).clone())),
            Proposition::not(Proposition::implies((**b).clone(), (**a).clone())),
        )),
    }
}

fn cross_concat(a: &Dnf, b: &Dnf) -> Dnf {
    let mut out = Vec::with_capacity(a.len() * b.len());
    for ca in a.conjunctions() {
        for cb in b.conjunctions() {
            out.push(ca.concat(cb));
        }
    }
    Dnf::new(out)
}

/// `cases(p) := filter(decompose(p), consistent)`.
pub fn cases(p: &Proposition) -> Dnf {
    decompose(p).consistent_conjunctions()
}

/// A DNF is impossible iff every conjunction in it is inconsistent.
pub fn impossible(d: &Dnf) -> bool {
    d.is_impossible()
}
