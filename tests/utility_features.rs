//! Tests for the always-on helpers and the macros, random and serde features

mod core_tests {
    use sugars_util::handler::{ErrorHandler, Log, Propagate, RunnableExt, Silent};
    use sugars_util::{arg, array, eq, hash, math, predicates, suppliers, text};
    use sugars_util::{ArgumentError, ArithmeticError, BoxError, SugarError};

    #[test]
    fn test_arg_checks() {
        assert_eq!(arg::require(Some(3), "x"), Ok(3));
        assert_eq!(
            arg::require::<u8>(None, "x"),
            Err(ArgumentError::Missing { name: "x".into() })
        );
        assert!(arg::require_finite(f64::NEG_INFINITY, "x").is_err());
        assert!(arg::require_not_nan(f32::NAN, "x").unwrap_err().is_strange());
        assert_eq!(arg::require_non_empty("abc", "s"), Ok("abc"));
    }

    #[test]
    fn test_bit_equality() {
        assert!(eq::equals(&f64::NAN, &f64::NAN));
        assert!(!eq::equals(&0.0f64, &-0.0f64));
        assert!(eq::equals(&vec![1.5f32, f32::NAN], &vec![1.5, f32::NAN]));
        assert_eq!(array::index_of_element(&[1.0, f64::NAN], &f64::NAN), Some(1));
    }

    #[test]
    fn test_hash_matches_equality() {
        assert_eq!(hash::hash(&f64::NAN), hash::hash(&(-1.0f64).sqrt()));
        assert_eq!(hash::hash("ab"), 31 * 97 + 98);
        assert_eq!(hash::hash_all([&1i32, &2]), hash::hash(&[1i32, 2]));
    }

    #[test]
    fn test_math() {
        assert_eq!(math::factorial_exact(20), Ok(2_432_902_008_176_640_000));
        assert!(matches!(
            math::factorial_exact(21),
            Err(ArithmeticError::Overflow { .. })
        ));
        assert_eq!(math::binomial_exact(52, 5), Ok(2_598_960));
        assert!(math::binomial_wide(3, 0).is_err());
        assert!(math::is_even(-4) && math::is_odd(7u8));
        assert!(!math::is_positive(f64::NAN) && !math::is_negative(f64::NAN));
    }

    #[test]
    fn test_text() {
        assert_eq!(text::letter_string(0), "zero");
        assert_eq!(text::letter_string(-1042), "minus one thousand forty two");
        assert_eq!(
            text::letter_string(1_000_000_015),
            "one billion fifteen"
        );
        assert_eq!(text::a_an("apple"), Ok("an"));
        assert_eq!(text::a_an("øl"), Ok("an"));
        assert_eq!(text::a_an("pear"), Ok("a"));
        assert_eq!(text::repeat("ab", 2).as_deref(), Ok("abab"));
    }

    #[test]
    fn test_predicates_and_suppliers() {
        let starts = predicates::starts_with_ignore_case("RAN");
        let words = ["range", "Random", "map"];
        assert_eq!(array::filter(&words, |w| starts(*w)), vec!["range", "Random"]);

        let one = suppliers::singleton_supplier(1);
        assert_eq!(one() + one(), 2);
        assert_eq!(suppliers::none_supplier::<String>()(), None);
    }

    #[test]
    fn test_handlers() {
        let _ = env_logger::builder().is_test(true).try_init();

        let parse = || -> Result<i32, BoxError> { Ok("x".parse::<i32>()?) };
        assert_eq!(Silent.try_call(parse), Ok(None));
        assert_eq!(Log.try_call(parse), Ok(None));
        assert!(Propagate.try_call(parse).is_err());

        let checked = || -> Result<(), BoxError> {
            arg::require_finite(f64::NAN, "ratio")?;
            Ok(())
        };
        let err = Propagate.try_run(checked).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ArgumentError>(),
            Some(&ArgumentError::NaN {
                name: "ratio".into()
            })
        );

        let first = || -> Result<(), BoxError> { Ok(()) };
        let chained = first.and_then(|| Err::<(), BoxError>("second".into()));
        assert_eq!(Propagate.try_run(chained).unwrap_err().to_string(), "second");
    }

    #[test]
    fn test_umbrella_error() {
        let err: SugarError = ArgumentError::invalid("x", "bad").into();
        assert!(matches!(err, SugarError::Argument(_)));
    }
}

#[cfg(feature = "macros")]
mod macros_tests {
    use sugars_util::enums::{self, NamedEnum};
    use sugars_util::{hash_map, hash_set, hashcode, linked_set, named_enum, range};

    named_enum! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Color { Red, Green, Blue }
    }

    #[test]
    fn test_macros_collections() {
        let set = hash_set![1, 1, 2];
        assert_eq!(set.len(), 2);
        assert_eq!(linked_set!['b', 'a', 'b'], vec!['b', 'a']);

        let map = hash_map! { "a" => 1, "b" => 2 };
        assert_eq!(map.get("b"), Some(&2));
    }

    #[test]
    fn test_macros_hashcode() {
        let r = range(0, 3);
        assert_eq!(hashcode!(r), hashcode!([0i32, 1, 2]));
        assert_eq!(hashcode!(true), 17 * 31 + 1231);
    }

    #[test]
    fn test_macros_named_enum() {
        assert_eq!(Color::Green.name(), "Green");
        assert_eq!(enums::values::<Color>(), &[Color::Red, Color::Green, Color::Blue]);
        assert_eq!(enums::value_by_name::<Color>("blue"), Some(Color::Blue));
        assert_eq!(enums::value_by_name::<Color>("purple"), None);
    }
}

#[cfg(feature = "random")]
mod random_tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sugars_util::random;

    #[test]
    fn test_random_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let i = random::random_i32_between_with(&mut rng, -10, 10).unwrap();
            assert!((-10..10).contains(&i));
            let f = random::random_f64_between_with(&mut rng, 1.0, 2.0).unwrap();
            assert!((1.0..2.0).contains(&f));
        }
        assert!(random::random_i64_between(0, 1).is_ok_and(|v| v == 0));
        assert!(random::random_f64_between(2.0, 1.0).is_err());
    }

    #[test]
    fn test_random_f64_between_never_returns_end() {
        let mut rng = StdRng::seed_from_u64(7);
        let end = 1.0 + f64::EPSILON;
        for _ in 0..1_000 {
            let f = random::random_f64_between_with(&mut rng, 1.0, end).unwrap();
            assert!(f < end, "{f}");
        }
    }
}

#[cfg(all(feature = "collections", feature = "serde"))]
mod serde_tests {
    use sugars_util::range;

    #[test]
    fn test_serde_range_serializes_as_list() {
        let json = serde_json::to_string(&range(3, 0)).unwrap();
        assert_eq!(json, "[3,2,1]");
        assert_eq!(serde_json::to_string(&range(0, 0)).unwrap(), "[]");
    }
}
