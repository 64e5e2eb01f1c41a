#[macro_use]
mod cases;

test_case!(
    then_branch,
    input: "integer a ; integer b ; a = 1 ; b = 0 ; \
            if ( a > b ) { print a ; } else { print b ; } ;",
    printed: [1],
);

test_case!(
    else_branch,
    input: "integer a ; integer b ; a = 1 ; b = 0 ; \
            if ( a < b ) { print a ; } else { print b ; } ;",
    printed: [0],
);

test_case!(
    equality,
    input: "integer a ; integer b ; a = 3 ; b = 3 ; \
            if ( a == b ) { print 1 ; } else { print 2 ; } ;",
    printed: [1],
);

test_case!(
    untaken_assignment_invisible,
    input: "integer a ; integer b ; \
            if ( a != b ) { a = 5 ; } else { b = 6 ; } ; print a ; print b ;",
    printed: [0, 6],
);

test_case!(
    nested_if,
    input: "integer a ; integer b ; integer c ; a = 1 ; b = 2 ; c = 3 ; \
            if ( a < b ) { if ( b > c ) { print b ; } else { print c ; } ; } \
            else { print a ; } ;",
    printed: [3],
);

test_case!(
    nested_if_in_untaken_branch,
    input: "integer a ; integer b ; a = 1 ; \
            if ( a < b ) { if ( a > b ) { print 1 ; } else { print 2 ; } ; } \
            else { print 3 ; } ;",
    printed: [3],
);

test_case!(
    if_inside_loop,
    input: "integer i ; integer n ; integer h ; n = 4 ; h = 2 ; \
            while ( i < n ) do { \
              if ( i < h ) { print 0 ; } else { print i ; } ; \
            i = i + 1 ; } ;",
    printed: [0, 0, 2, 3],
);

test_case!(
    loop_inside_if,
    input: "integer i ; integer n ; n = 3 ; \
            if ( i < n ) { while ( i < n ) do { i = i + 1 ; } ; } else { } ; print i ;",
    printed: [3],
);

test_case!(
    infinite_loop_in_untaken_branch,
    input: "integer a ; integer b ; b = 1 ; \
            if ( a > b ) { while ( a == a ) do { } ; } else { print b ; } ;",
    printed: [1],
);
// Never executed, so it cannot hang

test_case!(
    syntax_error_in_untaken_branch,
    input: "integer a ; integer b ; a = 1 ; \
            if ( a > b ) { print a ; } else { print ( b ; } ;",
    syntax_error,
);

test_case!(
    undeclared_in_untaken_branch,
    input: "integer a ; integer b ; a = 1 ; \
            if ( a > b ) { print a ; } else { print c ; } ;",
    syntax_error,
);

test_case!(
    missing_else,
    input: "integer a ; if ( a == a ) { print a ; } ;",
    syntax_error,
);

test_case!(
    undeclared_condition,
    input: "integer a ; if ( a == q ) { } else { } ;",
    syntax_error,
);
