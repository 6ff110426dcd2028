/// Declares a test evaluating `input` through the public API.
///
/// ```ignore
/// test_case!(name, input: "(+ 1 2)", value: 3);
/// test_case!(name, input: "(/ 1 0)", error: "E005", rendered: ["division by zero"]);
/// ```
macro_rules! test_case {
    ($name:ident, input: $input:expr, value: $value:expr $(,)?) => {
        #[test]
        fn $name() {
            pretty_assertions::assert_eq!(sche::eval($input), Ok($value));
        }
    };
    (
        $name:ident,
        input: $input:expr,
        error: $code:expr
        $(, rendered: [$($needle:expr),* $(,)?])?
        $(,)?
    ) => {
        #[test]
        fn $name() {
            let source = $input;
            let err = match sche::eval(source) {
                Ok(value) => panic!("expected {} for {:?}, got {}", $code, source, value),
                Err(err) => err,
            };
            pretty_assertions::assert_eq!(err.code(), $code);
            $(
                let rendered = sche::render_error_to_string_no_color(&err, source);
                $(
                    assert!(
                        rendered.contains($needle),
                        "missing {:?} in:\n{}",
                        $needle,
                        rendered
                    );
                )*
            )?
        }
    };
}
