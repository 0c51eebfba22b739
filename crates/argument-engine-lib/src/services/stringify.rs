use crate::models::argument::Argument;
use crate::models::proposition::{Fact, Proposition};

/// Canonical, deterministic rendering of a formula (spec.md §4.7). Infix
/// with ASCII connectives, parenthesizing every non-atomic child — this
/// favors unambiguous round-tripping over the shortest possible string.
pub fn proposition(p: &Proposition) -> String {
    match p {
        Proposition::Variable(a) => a.as_str().to_string(),
        Proposition::True => "T".to_string(),
        Proposition::False => "F".to_string(),
        Proposition::Not(inner) => format!("~{}", parenthesized(inner)),
        Proposition::And(a, b) => format!("{} & {}", parenthesized(a), parenthesized(b)),
        Proposition::Or(a, b) => format!("{} | {}", parenthesized(a), parenthesized(b)),
        Proposition::Implies(a, b) => format!("{} -> {}", parenthesized(a), parenthesized(b)),
        Proposition::Equiv(a, b) => format!("{} <-> {}", parenthesized(a), parenthesized(b)),
    }
}

fn parenthesized(p: &Proposition) -> String {
    match p {
        Proposition::Variable(_) | Proposition::True | Proposition::False => proposition(p),
        _ => format!("({})", proposition(p)),
    }
}

fn fact(f: &Fact) -> String {
    match f {
        Fact::Positive(a) => a.as_str().to_string(),
        Fact::Negative(a) => format!("~{}", a.as_str()),
    }
}

/// Canonical rendering of an argument tree (spec.md §4.7): every level
/// sorts its pro/contra children lexicographically before joining, so two
/// builds of the same logical argument serialize identically regardless
/// of the order premises were supplied in.
pub fn argument(a: &Argument) -> String {
    match a {
        Argument::Assumption(p) => format!("assume({})", proposition(p)),
        Argument::Open(facts) => {
            let mut atoms: Vec<String> = facts.iter().map(fact).collect();
            atoms.sort();
            format!("open({})", atoms.join(", "))
        }
        Argument::Argument(p, support) => {
            let mut pro: Vec<String> = support.pro.iter().map(argument).collect();
            let mut contra: Vec<String> = support.contra.iter().map(argument).collect();
            pro.sort();
            contra.sort();
            format!(
                "({}; pro: [{}], contra: [{}])",
                proposition(p),
                pro.join(", "),
                contra.join(", ")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implication_round_trips_through_ascii() {
        let p = Proposition::implies(Proposition::var("a"), Proposition::var("b"));
        assert_eq!(proposition(&p), "a -> b");
    }

    #[test]
    fn nested_connectives_are_parenthesized() {
        let p = Proposition::and(
            Proposition::or(Proposition::var("a"), Proposition::var("b")),
            Proposition::var("c"),
        );
        assert_eq!(proposition(&p), "(a | b) & c");
    }

    #[test]
    fn argument_children_are_sorted_for_determinism() {
        let built_ab = Argument::Argument(
            Proposition::var("p"),
            Box::new(crate::models::argument::Support::new(
                vec![
                    Argument::Assumption(Proposition::var("b")),
                    Argument::Assumption(Proposition::var("a")),
                ],
                vec![],
            )),
        );
        let built_ba = Argument::Argument(
            Proposition::var("p"),
            Box::new(crate::models::argument::Support::new(
                vec![
                    Argument::Assumption(Proposition::var("a")),
                    Argument::Assumption(Proposition::var("b")),
                ],
                vec![],
            )),
        );
        assert_eq!(argument(&built_ab), argument(&built_ba));
    }
}
