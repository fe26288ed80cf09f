#[macro_export]
macro_rules! expect_errors {
    ($parser:expr, {$($syntax:tt)*} => [$($err:expr,)*]) => {{
        use {
            syn::parse::Parser,
            std::collections::HashSet,
            vitta_compiler::CompileError,
        };

        let syntax = stringify!($($syntax)*);
        let err_set = $parser
            .parse_str(syntax)
            .unwrap()
            .compile()
            .unwrap_err()
            .into_iter()
            .map(|err| err.to_string())
            .collect::<HashSet<_>>();
        let expected_errs: &[CompileError] = &[$($err),*];
        let expected_set = expected_errs.iter().map(|err| err.to_string()).collect::<HashSet<_>>();

        assert_eq!(err_set, expected_set, "unexpected set of errors");
    }};
}

/// Render a type the way the compiler renders the types it is given.
#[allow(dead_code)]
pub fn ty(s: &str) -> String {
    use quote::ToTokens;
    syn::parse_str::<syn::Type>(s)
        .unwrap()
        .to_token_stream()
        .to_string()
}
