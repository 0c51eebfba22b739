use super::proposition::{Fact, Proposition};
use serde::Serialize;

/// A justification structure for a sub-question, built from premises
/// (spec.md §3).
///
/// - `Assumption(p)`: premise `p` is decisive on its own.
/// - `Argument(p, support)`: premise `p` is relevant but not decisive;
///   `support` argues the residual sub-question.
/// - `Open(facts)`: no premise advances the sub-question; `facts` are
///   the residual question's open disjunct, reported as atoms still
///   needing resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Argument {
    Assumption(Proposition),
    Argument(Proposition, Box<Support>),
    Open(Vec<Fact>),
}

impl Argument {
    /// The argument's premise, or `None` for `Open`.
    pub fn head(&self) -> Option<&Proposition> {
        match self {
            Argument::Assumption(p) => Some(p),
            Argument::Argument(p, _) => Some(p),
            Argument::Open(_) => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Argument::Open(_))
    }

    pub fn is_assumption(&self) -> bool {
        matches!(self, Argument::Assumption(_))
    }

    /// Stable identity for memoization within a single `winners_losers`
    /// invocation (spec.md §4.4/§9 call for pointer-identity memoization
    /// of the mutually recursive `isDefeated`/`isRebutted`).
    pub fn identity(&self) -> *const Argument {
        self as *const Argument
    }
}

/// A pair of argument lists: the pro side and the contra side of a
/// question (spec.md §3).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Support {
    pub pro: Vec<Argument>,
    pub contra: Vec<Argument>,
}

impl Support {
    pub fn new(pro: Vec<Argument>, contra: Vec<Argument>) -> Self {
        Support { pro, contra }
    }

    pub fn is_empty(&self) -> bool {
        self.pro.is_empty() && self.contra.is_empty()
    }
}

/// A winning argument together with the recursive decomposition of its
/// own pro/contra support (spec.md §4.5: "winners additionally carry
/// nested WinnersLosers for their children"). `Assumption` and `Open`
/// terminate recursion, so `sub` is `None` for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Winner {
    pub argument: Argument,
    pub sub: Option<Box<WinnersLosers>>,
}

/// The winners on both sides of a question, each carrying its recursive
/// decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct WinnerSupport {
    pub pro: Vec<Winner>,
    pub contra: Vec<Winner>,
}

/// The outcome of partitioning a `Support` into winners and losers under
/// a preference (spec.md §3, §4.5). Losers are retained by head only —
/// there is no need to recurse into a loser's sub-support for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct WinnersLosers {
    pub winners: WinnerSupport,
    pub losers: Support,
}

impl WinnersLosers {
    pub fn is_empty(&self) -> bool {
        self.winners.pro.is_empty()
            && self.winners.contra.is_empty()
            && self.losers.pro.is_empty()
            && self.losers.contra.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assumption_head_is_its_premise() {
        let p = Proposition::var("a");
        let arg = Argument::Assumption(p.clone());
        assert_eq!(arg.head(), Some(&p));
    }

    #[test]
    fn open_has_no_head() {
        let arg = Argument::Open(vec![]);
        assert_eq!(arg.head(), None);
    }

    #[test]
    fn empty_winners_losers_is_empty() {
        assert!(WinnersLosers::default().is_empty());
    }
}
