#[macro_use]
mod cases;

test_case!(
    multiplication_binds_tighter,
    input: "integer x ; x = 2 + 3 * 4 ; print x ;",
    printed: [14],
);

test_case!(
    left_to_right_subtraction,
    input: "print 20 - 5 - 3 ;",
    printed: [12],
);

test_case!(
    mixed_levels,
    input: "print 2 * 3 - 4 * 5 + 6 ;",
    printed: [-8],
);

test_case!(
    parentheses,
    input: "print ( 2 + 3 ) * ( 4 - 1 ) ;",
    printed: [15],
);

test_case!(
    nested_parentheses,
    input: "print ( ( ( 7 ) ) ) ;",
    printed: [7],
);

test_case!(
    unary_minus_literal,
    input: "print - 7 + 2 ;",
    printed: [-5],
);

test_case!(
    unary_minus_variable,
    input: "integer a ; a = 4 ; print - a * 2 ;",
    printed: [-8],
);

test_case!(
    unary_minus_group,
    input: "print - ( 1 - 4 ) ;",
    printed: [3],
);

test_case!(
    ten_digit_literal,
    input: "print 1234567890 ;",
    printed: [1234567890],
);

test_case!(
    wrapping_overflow,
    input: "integer x ; x = 9999999999 * 9999999999 ; print x ;",
    printed: [9_999_999_999i64.wrapping_mul(9_999_999_999)],
);
// Native two's complement wraparound

test_case!(
    eleven_digit_literal,
    input: "print 12345678901 ;",
    syntax_error,
);

test_case!(
    double_unary_minus,
    input: "print - - 1 ;",
    syntax_error,
);

test_case!(
    dangling_operator,
    input: "print 1 + ;",
    syntax_error,
);

test_case!(
    unbalanced_parenthesis,
    input: "print ( 1 + 2 ;",
    syntax_error,
);

test_case!(
    no_division,
    input: "print 4 / 2 ;",
    syntax_error,
);
