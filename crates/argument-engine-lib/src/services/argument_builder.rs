use crate::models::argument::{Argument, Support, WinnersLosers};
use crate::models::conjunction::Dnf;
use crate::models::preference::Preference;
use crate::models::proposition::Proposition;
use crate::services::case_algebra::{consistent_cases, negate};
use crate::services::dnf::cases;
use crate::services::semantics::winners_losers;

/// Resolution-style argument construction (spec.md §4.3). For each
/// premise `p` in `information` (considered in the order supplied),
/// decide whether `p` is relevant to `question_dnf`, and if so whether
/// it is decisive on its own or needs further argument over the residual
/// question.
///
/// Adopts the "newer" variant named in spec.md §9: `relevant` is judged
/// by `restQuestion.len() < C.len() * N.len()` (not the deprecated
/// `C.len() + N.len()` threshold), and an `Argument(p, …)` whose
/// recursive pro/contra both come back empty is dropped rather than
/// emitted with empty support.
pub fn arguments(question_dnf: &Dnf, information: &[Proposition]) -> Vec<Argument> {
    let mut out = Vec::new();
    let n = negate(question_dnf);

    for (i, p) in information.iter().enumerate() {
        let c = cases(p);
        let rest_question = consistent_cases(&c, &n).concat(&consistent_cases(&n, &c));

        let relevant = rest_question.len() < c.len() * n.len();
        if !relevant {
            continue;
        }

        let decisive = rest_question.is_empty();
        if decisive {
            out.push(Argument::Assumption(p.clone()));
            continue;
        }

        let rest_information: Vec<Proposition> = information
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, q)| q.clone())
            .collect();

        let support = pro_contra(&negate(&rest_question), &rest_information);
        if !support.is_empty() {
            out.push(Argument::Argument(p.clone(), Box::new(support)));
        }
    }

    // No premise advanced this sub-question (spec.md §3: Open). This only
    // fires when there was at least one premise to try — an empty
    // information base yields the fully empty explanation §8's boundary
    // test requires, not a synthesized Open leaf. Each surviving
    // (consistent) conjunction of the residual question becomes its own
    // Open leaf, one per disjunct still unresolved.
    if out.is_empty() && !information.is_empty() {
        for conjunction in question_dnf.consistent_conjunctions().conjunctions() {
            out.push(Argument::Open(conjunction.facts().to_vec()));
        }
    }

    out
}

/// `pro := arguments(question_dnf, information)`,
/// `contra := arguments(negate(question_dnf), information)`.
pub fn pro_contra(question_dnf: &Dnf, information: &[Proposition]) -> Support {
    let pro = arguments(question_dnf, information);
    let contra = arguments(&negate(question_dnf), information);
    Support::new(pro, contra)
}

/// Top-level entry point (spec.md §4.3, §6): build the `Support` for
/// `question` against `information`, then partition it into winners and
/// losers under `preference`.
pub fn explanation(preference: &dyn Preference, question: &Proposition, information: &[Proposition]) -> WinnersLosers {
    let support = pro_contra(&cases(question), information);
    winners_losers(preference, &support)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::preference::NoPreference;

    fn v(name: &str) -> Proposition {
        Proposition::var(name)
    }

    #[test]
    fn empty_information_base_yields_empty_explanation() {
        let result = explanation(&NoPreference, &v("c"), &[]);
        assert!(result.is_empty());
    }

    #[test]
    fn modus_ponens_produces_one_pro_winner() {
        let information = vec![
            Proposition::implies(Proposition::and(v("a"), v("b")), v("c")),
            v("a"),
            v("b"),
        ];
        let result = explanation(&NoPreference, &v("c"), &information);
        assert_eq!(result.winners.pro.len(), 1);
        match &result.winners.pro[0].argument {
            Argument::Argument(head, _) => {
                assert_eq!(head, &information[0]);
            }
            other => panic!("expected an Argument node, got {:?}", other),
        }
        // Nothing in the information base speaks against c, so the only
        // thing contra can report is the open residual Not(c) itself.
        assert!(result
            .winners
            .contra
            .iter()
            .all(|w| matches!(w.argument, Argument::Open(_))));
    }

    #[test]
    fn unrelated_premise_yields_open_branches_on_both_sides() {
        let information = vec![v("x")];
        let result = explanation(&NoPreference, &v("y"), &information);
        assert_eq!(result.winners.pro.len(), 1);
        assert_eq!(result.winners.contra.len(), 1);
        assert!(matches!(result.winners.pro[0].argument, Argument::Open(_)));
        assert!(matches!(result.winners.contra[0].argument, Argument::Open(_)));
        assert!(result.losers.is_empty());
    }

    #[test]
    fn p_and_not_p_both_appear_for_question_p() {
        let information = vec![v("p"), Proposition::not(v("p"))];
        let result = explanation(&NoPreference, &v("p"), &information);
        assert!(!result.winners.pro.is_empty() || !result.losers.pro.is_empty());
        assert!(!result.winners.contra.is_empty() || !result.losers.contra.is_empty());
    }

    #[test]
    fn double_negation_question_has_one_winner() {
        let information = vec![v("p")];
        let result = explanation(&NoPreference, &Proposition::not(Proposition::not(v("p"))), &information);
        assert_eq!(result.winners.pro.len(), 1);
        assert!(matches!(result.winners.pro[0].argument, Argument::Assumption(_)));
    }
}
