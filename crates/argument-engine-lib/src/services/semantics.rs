use crate::models::argument::{Argument, Support, Winner, WinnerSupport, WinnersLosers};
use crate::models::preference::Preference;
use std::collections::HashMap;

/// Memo table keyed by argument-node pointer identity, shared across a
/// single `winners_losers` traversal (spec.md §4.4, §9: "memoize on
/// argument identity to avoid exponential blowup in pathological cases").
type Memo = HashMap<*const Argument, bool>;

/// `Open` and `Assumption` lack a usable head for preference comparison;
/// any comparison involving a missing head defaults to "not preferred"
/// (spec.md §4.4).
fn outranks_heads(preference: &dyn Preference, b: &Argument, a: &Argument) -> bool {
    match (b.head(), a.head()) {
        (Some(hb), Some(ha)) => preference.outranks(hb, ha),
        _ => false,
    }
}

/// `a` is rebutted iff some opponent `b` that is itself not defeated
/// outranks `a` (spec.md §4.4).
pub fn is_rebutted(preference: &dyn Preference, opponents: &[Argument], a: &Argument, memo: &mut Memo) -> bool {
    opponents
        .iter()
        .any(|b| !is_defeated(preference, b, memo) && outranks_heads(preference, b, a))
}

/// `Assumption` is never defeated. `Open` is not defeated by any
/// non-`Open` argument — against concrete arguments it is treated as
/// having no support, which is handled upstream by `Open` never
/// producing a usable head, so it can never outrank or be outranked.
/// `Argument(_, {pro, contra})` is defeated iff every argument in `pro`
/// is itself defeated or rebutted by `contra`, or some argument in
/// `contra` survives (neither defeated nor rebutted by `pro`) and
/// strictly outranks `a` (spec.md §4.4).
pub fn is_defeated(preference: &dyn Preference, a: &Argument, memo: &mut Memo) -> bool {
    if let Some(&cached) = memo.get(&a.identity()) {
        return cached;
    }
    let result = match a {
        Argument::Assumption(_) => false,
        Argument::Open(_) => false,
        Argument::Argument(_, support) => {
            let pro_collapses = support
                .pro
                .iter()
                .all(|p| is_defeated(preference, p, memo) || is_rebutted(preference, &support.contra, p, memo));
            let contra_outranks = support.contra.iter().any(|c| {
                !is_defeated(preference, c, memo)
                    && !is_rebutted(preference, &support.pro, c, memo)
                    && outranks_heads(preference, c, a)
            });
            pro_collapses || contra_outranks
        }
    };
    memo.insert(a.identity(), result);
    result
}

/// Partition `{ pro, contra }` into winners and losers under `preference`
/// (spec.md §4.5). Winners that are `Argument(_, sub)` recurse into their
/// own `winners_losers`; `Assumption`s and `Open`s terminate recursion.
pub fn winners_losers(preference: &dyn Preference, support: &Support) -> WinnersLosers {
    let mut memo = Memo::new();
    winners_losers_memoized(preference, support, &mut memo)
}

fn winners_losers_memoized(preference: &dyn Preference, support: &Support, memo: &mut Memo) -> WinnersLosers {
    let (pro_winners, pro_losers) = split(preference, &support.pro, &support.contra, memo);
    let (contra_winners, contra_losers) = split(preference, &support.contra, &support.pro, memo);

    let pro_winners = pro_winners
        .into_iter()
        .map(|arg| to_winner(preference, arg, memo))
        .collect();
    let contra_winners = contra_winners
        .into_iter()
        .map(|arg| to_winner(preference, arg, memo))
        .collect();

    WinnersLosers {
        winners: WinnerSupport {
            pro: pro_winners,
            contra: contra_winners,
        },
        losers: Support::new(pro_losers, contra_losers),
    }
}

/// Split `side` into (winners, losers) against `opponents`: a member
/// loses iff it is defeated outright or rebutted by an opponent.
fn split(
    preference: &dyn Preference,
    side: &[Argument],
    opponents: &[Argument],
    memo: &mut Memo,
) -> (Vec<Argument>, Vec<Argument>) {
    let mut winners = Vec::new();
    let mut losers = Vec::new();
    for a in side {
        let loses = is_defeated(preference, a, memo) || is_rebutted(preference, opponents, a, memo);
        if loses {
            losers.push(a.clone());
        } else {
            winners.push(a.clone());
        }
    }
    (winners, losers)
}

fn to_winner(preference: &dyn Preference, argument: Argument, memo: &mut Memo) -> Winner {
    let sub = match &argument {
        Argument::Argument(_, support) => {
            Some(Box::new(winners_losers_memoized(preference, support, memo)))
        }
        Argument::Assumption(_) | Argument::Open(_) => None,
    };
    Winner { argument, sub }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::preference::{NoPreference, Ranking};
    use crate::models::proposition::Proposition;

    #[test]
    fn assumption_is_never_defeated() {
        let mut memo = Memo::new();
        let a = Argument::Assumption(Proposition::var("p"));
        assert!(!is_defeated(&NoPreference, &a, &mut memo));
    }

    #[test]
    fn open_is_never_defeated() {
        let mut memo = Memo::new();
        let a = Argument::Open(vec![]);
        assert!(!is_defeated(&NoPreference, &a, &mut memo));
    }

    #[test]
    fn mutual_rebuttal_without_preference_leaves_both_winners() {
        let pro = vec![Argument::Assumption(Proposition::var("p"))];
        let contra = vec![Argument::Assumption(Proposition::not(Proposition::var("p")))];
        let support = Support::new(pro, contra);
        let result = winners_losers(&NoPreference, &support);
        assert_eq!(result.winners.pro.len(), 1);
        assert_eq!(result.winners.contra.len(), 1);
        assert!(result.losers.pro.is_empty());
        assert!(result.losers.contra.is_empty());
    }

    #[test]
    fn strict_preference_defeats_the_weaker_side() {
        let p = Proposition::var("p");
        let not_p = Proposition::not(p.clone());
        let ranking = Ranking::new(vec![(2, not_p.clone()), (1, p.clone())]);
        let support = Support::new(
            vec![Argument::Assumption(p)],
            vec![Argument::Assumption(not_p)],
        );
        let result = winners_losers(&ranking, &support);
        assert!(result.winners.pro.is_empty());
        assert_eq!(result.winners.contra.len(), 1);
        assert_eq!(result.losers.pro.len(), 1);
    }
}
