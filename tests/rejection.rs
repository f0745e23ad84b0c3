use otter_euf::{
    config::Config,
    context::EufContext,
    procedures::ask::Answer,
    structures::{proposition::Proposition, statement::Statement, term::Term},
    types::err::{self},
};

fn a() -> Term {
    Term::symbol("a")
}

fn b() -> Term {
    Term::symbol("b")
}

fn unhandled(proposition: &Proposition) -> Option<err::UnhandledInput> {
    let ctx = EufContext::from_config(Config::default());
    match ctx.ask(proposition, &Proposition::True) {
        Err(err::AskError::Unhandled(e)) => Some(e),
        _ => None,
    }
}

mod predicates {
    use super::*;

    #[test]
    fn ternary() {
        let q = Proposition::predicate("Q", [a(), b(), Term::symbol("c")]);
        assert!(matches!(unhandled(&q), Some(err::UnhandledInput::Predicate(_))));
    }

    #[test]
    fn binary_outside_equality() {
        let lt = Proposition::predicate("lt", [a(), b()]);
        assert_eq!(
            unhandled(&lt),
            Some(err::UnhandledInput::Predicate(Statement::predicate(
                "lt",
                [a(), b()]
            )))
        );
    }

    #[test]
    fn nullary() {
        let q = Proposition::predicate("Q", []);
        assert!(matches!(unhandled(&q), Some(err::UnhandledInput::Predicate(_))));
    }

    #[test]
    fn in_assumptions() {
        let ctx = EufContext::from_config(Config::default());
        let lt = Proposition::predicate("lt", [a(), b()]);
        assert!(matches!(
            ctx.ask(&Proposition::eq(a(), b()), &lt),
            Err(err::AskError::Unhandled(err::UnhandledInput::Predicate(_)))
        ));
    }

    #[test]
    fn in_facts() {
        let mut ctx = EufContext::from_config(Config::default());
        ctx.assume(Proposition::predicate("lt", [a(), b()]));
        assert!(matches!(
            ctx.ask(&Proposition::eq(a(), b()), &Proposition::True),
            Err(err::AskError::Unhandled(err::UnhandledInput::Predicate(_)))
        ));
    }

    #[test]
    fn in_negation_only() {
        // A tautology has no clauses, though its negation does.
        let lt = Proposition::predicate("lt", [a(), b()]);
        let tautology = lt.clone() | !lt;

        assert!(matches!(unhandled(&tautology), Some(err::UnhandledInput::Predicate(_))));

        let mut config = Config::default();
        config.validate_negation.set(true);
        let ctx = EufContext::from_config(config);
        assert!(matches!(
            ctx.ask(&tautology, &Proposition::True),
            Err(err::AskError::Unhandled(err::UnhandledInput::Predicate(_)))
        ));
    }
}

mod literals {
    use super::*;

    #[test]
    fn propositional_variable() {
        assert_eq!(
            unhandled(&Proposition::boolean("p")),
            Some(err::UnhandledInput::Literal(Statement::boolean("p")))
        );
    }

    #[test]
    fn flat_equality() {
        let flat = Proposition::atom(Statement::Equality(a(), b()));
        assert!(matches!(unhandled(&flat), Some(err::UnhandledInput::Literal(_))));
    }
}

mod arguments {
    use super::*;

    #[test]
    fn nan() {
        assert_eq!(
            unhandled(&Proposition::eq(Term::NaN, a())),
            Some(err::UnhandledInput::NaN)
        );
        assert_eq!(
            unhandled(&Proposition::unary("P", Term::NaN)),
            Some(err::UnhandledInput::NaN)
        );
    }

    #[test]
    fn matrix() {
        let m = Term::matrix("M");
        assert_eq!(
            unhandled(&Proposition::unary("invertible", m.clone())),
            Some(err::UnhandledInput::Matrix(m))
        );
    }

    #[test]
    fn matrix_inside_application() {
        let trace = Term::apply("trace", [Term::apply("mul", [Term::matrix("A"), Term::matrix("B")])]);
        assert!(matches!(
            unhandled(&Proposition::eq(trace, a())),
            Some(err::UnhandledInput::Matrix(_))
        ));
    }

    #[test]
    fn nan_nested_allowed() {
        // Only an argument which is itself NaN is rejected.
        let ctx = EufContext::from_config(Config::default());
        let f_nan = Term::apply("f", [Term::NaN]);
        assert_eq!(
            ctx.ask(&Proposition::eq(f_nan.clone(), f_nan), &Proposition::True),
            Ok(Answer::True)
        );
    }

    #[test]
    fn in_negation_only() {
        // As the tautology has no clauses, the arguments are met when abstracting the negation.
        let m_is_n = Proposition::eq(Term::matrix("M"), Term::matrix("N"));
        assert!(matches!(
            unhandled(&(m_is_n.clone() | !m_is_n)),
            Some(err::UnhandledInput::Matrix(_))
        ));

        let nan_is_a = Proposition::eq(Term::NaN, a());
        assert_eq!(
            unhandled(&(nan_is_a.clone() | !nan_is_a)),
            Some(err::UnhandledInput::NaN)
        );
    }

    #[test]
    fn predicates_checked_first() {
        let p = Proposition::eq(Term::NaN, a()) & Proposition::predicate("lt", [a(), b()]);
        assert!(matches!(unhandled(&p), Some(err::UnhandledInput::Predicate(_))));
    }
}

mod display {
    use super::*;

    #[test]
    fn messages() {
        let lt = Statement::predicate("lt", [a(), b()]);
        let e = err::AskError::from(err::UnhandledInput::Predicate(lt));
        assert!(e.to_string().contains("lt"));
        assert!(!err::AskError::InconsistentAssumptions.to_string().is_empty());
    }
}
