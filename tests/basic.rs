use otter_euf::{
    config::Config,
    context::EufContext,
    procedures::ask::Answer,
    structures::{proposition::Proposition, term::Term},
    types::err::{self},
};

fn a() -> Term {
    Term::symbol("a")
}

fn b() -> Term {
    Term::symbol("b")
}

fn f(argument: Term) -> Term {
    Term::apply("f", [argument])
}

mod basic {
    use super::*;

    #[test]
    fn reflexivity() {
        let _ = env_logger::builder().is_test(true).try_init();
        let ctx = EufContext::from_config(Config::default());

        assert_eq!(
            ctx.ask(&Proposition::eq(a(), a()), &Proposition::True),
            Ok(Answer::True)
        );
    }

    #[test]
    fn assumed_equality() {
        let ctx = EufContext::from_config(Config::default());
        let a_is_b = Proposition::eq(a(), b());

        assert_eq!(ctx.ask(&a_is_b, &a_is_b), Ok(Answer::True));
    }

    #[test]
    fn inconsistent_assumptions() {
        let ctx = EufContext::from_config(Config::default());
        let assumptions = Proposition::eq(a(), b()) & Proposition::ne(a(), b());

        assert_eq!(
            ctx.ask(&Proposition::eq(a(), b()), &assumptions),
            Err(err::AskError::InconsistentAssumptions)
        );
    }

    #[test]
    fn unary_predicate() {
        let ctx = EufContext::from_config(Config::default());
        let p_a = Proposition::unary("P", a());

        assert_eq!(ctx.ask(&p_a, &p_a), Ok(Answer::True));
        assert_eq!(ctx.ask(&p_a, &Proposition::True), Ok(Answer::Undetermined));
        assert_eq!(ctx.ask(&!p_a.clone(), &p_a), Ok(Answer::False));
    }

    #[test]
    fn congruence() {
        let ctx = EufContext::from_config(Config::default());

        assert_eq!(
            ctx.ask(&Proposition::eq(f(a()), f(b())), &Proposition::eq(a(), b())),
            Ok(Answer::True)
        );
        assert_eq!(
            ctx.ask(&Proposition::eq(f(a()), f(b())), &Proposition::True),
            Ok(Answer::Undetermined)
        );
    }

    #[test]
    fn matrix_rejected() {
        let ctx = EufContext::from_config(Config::default());
        let sum = Term::apply("add", [Term::matrix("A"), Term::matrix("B")]);

        assert_eq!(
            ctx.ask(&Proposition::eq(sum.clone(), sum.clone()), &Proposition::True),
            Err(err::AskError::Unhandled(err::UnhandledInput::Matrix(sum.clone())))
        );
        assert!(matches!(
            ctx.ask(
                &Proposition::eq(sum.clone(), sum),
                &Proposition::eq(a(), b())
            ),
            Err(err::AskError::Unhandled(err::UnhandledInput::Matrix(_)))
        ));
    }
}

mod context {
    use super::*;

    #[test]
    fn facts_persist() {
        let mut ctx = EufContext::from_config(Config::default());
        ctx.assume(Proposition::eq(a(), b()));

        assert_eq!(
            ctx.ask(&Proposition::eq(f(a()), f(b())), &Proposition::True),
            Ok(Answer::True)
        );
        assert_eq!(
            ctx.ask(&Proposition::ne(b(), a()), &Proposition::True),
            Ok(Answer::False)
        );
    }

    #[test]
    fn facts_and_assumptions_conflict() {
        let mut ctx = EufContext::from_config(Config::default());
        ctx.assume(Proposition::eq(a(), b()));

        assert_eq!(
            ctx.ask(&Proposition::unary("P", a()), &Proposition::ne(a(), b())),
            Err(err::AskError::InconsistentAssumptions)
        );
    }

    #[test]
    fn forget() {
        let mut ctx = EufContext::from_config(Config::default());
        let a_is_b = Proposition::eq(a(), b());
        ctx.assume(a_is_b.clone());
        assert!(ctx.facts_mut().forget(&a_is_b));

        assert_eq!(ctx.ask(&a_is_b, &Proposition::True), Ok(Answer::Undetermined));
    }

    #[test]
    fn chains() {
        let mut ctx = EufContext::from_config(Config::default());
        let c = Term::symbol("c");
        let d = Term::symbol("d");
        ctx.assume(Proposition::eq(a(), b()));
        ctx.assume(Proposition::eq(b(), c.clone()) | Proposition::eq(b(), d.clone()));
        ctx.assume(Proposition::ne(a(), d));

        assert_eq!(
            ctx.ask(&Proposition::eq(f(a()), f(c)), &Proposition::True),
            Ok(Answer::True)
        );
    }

    #[test]
    fn nested_and_binary_terms() {
        let ctx = EufContext::from_config(Config::default());
        let c = Term::symbol("c");
        let g = |x: Term, y: Term| Term::apply("g", [x, y]);

        assert_eq!(
            ctx.ask(
                &Proposition::eq(f(g(a(), c.clone())), f(g(b(), c))),
                &Proposition::eq(a(), b())
            ),
            Ok(Answer::True)
        );
    }

    #[test]
    fn configurations_agree() {
        let p_a = Proposition::unary("P", a());
        let p = Proposition::eq(f(a()), f(b())) & p_a.clone();
        let assumptions = Proposition::eq(a(), b()) & p_a;

        let mut config = Config::default();
        let default_answer = EufContext::from_config(config.clone()).ask(&p, &assumptions);
        assert_eq!(default_answer, Ok(Answer::True));

        config.theory_propagation.set(false);
        config.polarity_lean.set(0.5);
        config.seed.set(73);
        assert_eq!(
            EufContext::from_config(config).ask(&p, &assumptions),
            default_answer
        );
    }
}
