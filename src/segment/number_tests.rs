use super::*;

mod to_fixed_tests {
    use super::*;

    #[test]
    fn pads_to_requested_digits() {
        assert_eq!(to_fixed(33.0, 2), "33.00");
        assert_eq!(to_fixed(7.5, 2), "7.50");
        assert_eq!(to_fixed(0.0, 2), "0.00");
    }

    #[test]
    fn rounds_non_ties_to_nearest() {
        assert_eq!(to_fixed(33.333_333, 2), "33.33");
        assert_eq!(to_fixed(66.666_666, 2), "66.67");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        // 0.125 and 0.375 are exactly representable
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.375, 2), "0.38");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
    }

    #[test]
    fn inexact_near_ties_follow_binary_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(to_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn carry_propagates_through_integer_part() {
        assert_eq!(to_fixed(9.999, 2), "10.00");
        assert_eq!(to_fixed(9.5, 0), "10");
        assert_eq!(to_fixed(99.5, 0), "100");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(to_fixed(-4.2, 2), "-4.20");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
    }

    #[test]
    fn huge_values_fall_back_to_exponent_form() {
        assert_eq!(to_fixed(1e21, 2), "1e+21");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 2), "-Infinity");
    }
}

mod format_js_number_tests {
    use super::*;

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(format_js_number(33.0), "33");
        assert_eq!(format_js_number(100.0), "100");
        assert_eq!(format_js_number(1_234_567.0), "1234567");
    }

    #[test]
    fn fractions_use_shortest_form() {
        assert_eq!(format_js_number(33.5), "33.5");
        assert_eq!(format_js_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format_js_number(-0.0), "0");
    }

    #[test]
    fn tiny_magnitudes_use_exponent_form() {
        assert_eq!(format_js_number(1e-7), "1e-7");
        assert_eq!(format_js_number(-2.5e-7), "-2.5e-7");
        assert_eq!(
            format_js_number(9.999_999_989_999_999e-8),
            "9.999999989999999e-8"
        );
        assert_eq!(format_js_number(0.000_001), "0.000001");
    }

    #[test]
    fn huge_magnitudes_use_exponent_form() {
        assert_eq!(format_js_number(1e21), "1e+21");
        assert_eq!(format_js_number(1.5e300), "1.5e+300");
        assert_eq!(format_js_number(-1e21), "-1e+21");
        assert_eq!(format_js_number(1e20), "100000000000000000000");
    }

    #[test]
    fn non_finite_names() {
        assert_eq!(format_js_number(f64::NAN), "NaN");
        assert_eq!(format_js_number(f64::INFINITY), "Infinity");
    }
}

mod shortest_rounded_abs_tests {
    use super::*;

    #[test]
    fn short_fractions_are_untouched() {
        assert_eq!(shortest_rounded_abs(1.5, 3), "1.5");
        assert_eq!(shortest_rounded_abs(42.0, 3), "42");
    }

    #[test]
    fn rounds_the_shortest_form_not_the_binary_value() {
        assert_eq!(shortest_rounded_abs(1.0005, 3), "1.001");
        assert_eq!(shortest_rounded_abs(1.0004, 3), "1.000");
        assert_eq!(shortest_rounded_abs(2.5, 0), "3");
    }

    #[test]
    fn drops_the_sign() {
        assert_eq!(shortest_rounded_abs(-0.9996, 3), "1.000");
    }
}
