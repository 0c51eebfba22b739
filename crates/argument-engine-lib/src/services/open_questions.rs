use crate::models::argument::{Argument, Winner, WinnersLosers};
use crate::models::preference::Preference;
use crate::models::proposition::Atom;
use std::collections::HashSet;

/// Walk the winners of an already-partitioned `WinnersLosers` and collect,
/// as a flat list of atom sets, the atoms mentioned by every `Open` leaf
/// reachable through winning arguments (spec.md §4.6). `Assumption`
/// leaves contribute nothing; `Argument(_, sub)` winners recurse into
/// their own nested `WinnersLosers`.
///
/// `preference` is threaded through for signature parity with spec.md
/// §4.6 — the partitioning that produced `winners_losers` has already
/// applied it, so this walk itself never consults it again.
pub fn open_arguments(_preference: &dyn Preference, winners_losers: &WinnersLosers) -> Vec<HashSet<Atom>> {
    let mut out = Vec::new();
    for winner in all_winners(winners_losers) {
        collect_open_atoms(winner, &mut out);
    }
    out
}

fn all_winners(wl: &WinnersLosers) -> impl Iterator<Item = &Winner> {
    wl.winners.pro.iter().chain(wl.winners.contra.iter())
}

fn collect_open_atoms(winner: &Winner, out: &mut Vec<HashSet<Atom>>) {
    match &winner.argument {
        Argument::Open(facts) => {
            out.push(facts.iter().map(|f| f.atom().clone()).collect());
        }
        Argument::Assumption(_) => {}
        Argument::Argument(_, _) => {
            if let Some(sub) = &winner.sub {
                for nested in all_winners(sub) {
                    collect_open_atoms(nested, out);
                }
            }
        }
    }
}

/// One entry per top-level winning branch that still has an open residual:
/// the candidate atom sets reachable underneath that single winner. Within
/// one branch these candidates are alternatives (any one of them would
/// close that branch); across branches every one still needs an answer.
fn open_branches(winners_losers: &WinnersLosers) -> Vec<Vec<HashSet<Atom>>> {
    let mut branches = Vec::new();
    for winner in all_winners(winners_losers) {
        let mut candidates = Vec::new();
        collect_open_atoms(winner, &mut candidates);
        if !candidates.is_empty() {
            branches.push(candidates);
        }
    }
    branches
}

/// Enumerate the minimal atom sets whose determination would close every
/// currently-open branch of `winners_losers` (spec.md §4.6). Takes the
/// cartesian product of the per-branch candidate lists (one per branch
/// that requires a decision), dedup/sorts each resulting combination,
/// discards empties, dedups the overall list, and sorts by length
/// ascending with ties broken lexicographically on the combination's
/// serialized atom names.
pub fn questions(preference: &dyn Preference, winners_losers: &WinnersLosers) -> Vec<Vec<Atom>> {
    let _ = preference;
    let branches = open_branches(winners_losers);
    if branches.is_empty() {
        return Vec::new();
    }

    let mut combinations: Vec<Vec<Atom>> = vec![Vec::new()];
    for branch in &branches {
        let mut next = Vec::with_capacity(combinations.len() * branch.len());
        for combo in &combinations {
            for candidate in branch {
                let mut merged = combo.clone();
                merged.extend(candidate.iter().cloned());
                next.push(merged);
            }
        }
        combinations = next;
    }

    let mut seen = HashSet::new();
    let mut results: Vec<Vec<Atom>> = Vec::new();
    for mut combo in combinations {
        combo.sort();
        combo.dedup();
        if combo.is_empty() {
            continue;
        }
        let key = serialize(&combo);
        if seen.insert(key) {
            results.push(combo);
        }
    }

    results.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| serialize(a).cmp(&serialize(b))));
    results
}

fn serialize(atoms: &[Atom]) -> String {
    atoms
        .iter()
        .map(|a| a.as_str().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::argument::{Support, WinnerSupport};
    use crate::models::preference::NoPreference;
    use crate::models::proposition::Fact;

    fn atom_set(names: &[&str]) -> HashSet<Atom> {
        names.iter().map(|n| Atom::new(*n)).collect()
    }

    #[test]
    fn no_open_leaves_yields_no_questions() {
        let wl = WinnersLosers::default();
        assert!(questions(&NoPreference, &wl).is_empty());
    }

    #[test]
    fn single_open_leaf_yields_one_question() {
        let wl = WinnersLosers {
            winners: WinnerSupport {
                pro: vec![Winner {
                    argument: Argument::Open(vec![Fact::Positive(Atom::new("y"))]),
                    sub: None,
                }],
                contra: vec![],
            },
            losers: Support::default(),
        };
        let qs = questions(&NoPreference, &wl);
        assert_eq!(qs, vec![vec![Atom::new("y")]]);
    }

    #[test]
    fn two_independent_branches_combine_by_union() {
        let wl = WinnersLosers {
            winners: WinnerSupport {
                pro: vec![Winner {
                    argument: Argument::Open(vec![Fact::Positive(Atom::new("a"))]),
                    sub: None,
                }],
                contra: vec![Winner {
                    argument: Argument::Open(vec![Fact::Positive(Atom::new("b"))]),
                    sub: None,
                }],
            },
            losers: Support::default(),
        };
        let qs = questions(&NoPreference, &wl);
        assert_eq!(qs, vec![vec![Atom::new("a"), Atom::new("b")]]);
    }

    #[test]
    fn open_atoms_are_deduplicated_within_a_set() {
        let set = atom_set(&["a", "a", "b"]);
        assert_eq!(set.len(), 2);
    }
}
