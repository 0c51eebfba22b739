use crate::models::conjunction::{Conjunction, Dnf};

/// Classical conjunction of two DNFs: the cross product of their
/// conjunctions, each pair concatenated (spec.md §4.2).
pub fn combine(a: &Dnf, b: &Dnf) -> Dnf {
    let mut out = Vec::with_capacity(a.len() * b.len());
    for ca in a.conjunctions() {
        for cb in b.conjunctions() {
            out.push(ca.concat(cb));
        }
    }
    Dnf::new(out)
}

/// Classical negation of a DNF, treated as `⋁ᵢ ⋀ⱼ fᵢⱼ`: the cross product
/// of conjunctions with each fact's sign flipped (spec.md §4.2).
///
/// For a DNF of `n` conjunctions this produces the cross product of `n`
/// singleton-flip choices, i.e. negating `c1 ∨ c2 ∨ … ∨ cn` as
/// `¬c1 ∧ ¬c2 ∧ … ∧ ¬cn`, where each `¬cᵢ` is itself a disjunction over
/// the flipped facts of `cᵢ` — the cross product distributes that
/// conjunction of disjunctions back into DNF.
pub fn negate(d: &Dnf) -> Dnf {
    if d.is_empty() {
        // Negation of False (empty DNF) is True.
        return Dnf::tautology();
    }

    let mut acc = Dnf::tautology();
    for conjunction in d.conjunctions() {
        let flipped_disjuncts: Vec<Conjunction> = conjunction
            .facts()
            .iter()
            .map(|f| Conjunction::single(f.flipped()))
            .collect();
        let flipped_disjunction = if flipped_disjuncts.is_empty() {
            // Negation of the empty conjunction (True) is False.
            Dnf::empty()
        } else {
            Dnf::new(flipped_disjuncts)
        };
        acc = combine(&acc, &flipped_disjunction);
    }
    acc
}

/// The sub-DNF of `b` consisting of those conjunctions `c` such that
/// every combination of `c` with any conjunction of `a` is consistent
/// (spec.md §4.2).
pub fn consistent_cases(a: &Dnf, b: &Dnf) -> Dnf {
    Dnf::new(
        b.conjunctions()
            .iter()
            .filter(|c| {
                a.conjunctions()
                    .iter()
                    .all(|ca| ca.concat(c).is_consistent())
            })
            .cloned()
            .collect(),
    )
}
