//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, LitInt, parse_macro_input};

/// The first Advent of Code event
const FIRST_YEAR: u16 = 2015;

/// Derive macro that implements `Solver` by dispatching to `PartSolver<N>` impls
///
/// # Attributes
///
/// - `max_parts`: Required. Number of parts; each `1..=max_parts` must have a
///   `PartSolver<N>` impl. Other part numbers get `SolveError::PartOutOfRange`.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Day1;
///
/// impl AocParser for Day1 { /* ... */ }
/// impl PartSolver<1> for Day1 { /* ... */ }
/// impl PartSolver<2> for Day1 { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
        .ok_or_else(|| {
            syn::Error::new_spanned(name, "AocSolver requires #[aoc_solver(max_parts = N)]")
        })?;

    let mut max_parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let lit: LitInt = meta.value()?.parse()?;
            max_parts = Some(lit.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported aoc_solver property"))
        }
    })?;

    let max_parts =
        max_parts.ok_or_else(|| syn::Error::new_spanned(attr, "missing `max_parts`"))?;
    if max_parts == 0 {
        return Err(syn::Error::new_spanned(attr, "`max_parts` must be at least 1"));
    }

    let arms = (1..=max_parts).map(|part| {
        quote! {
            #part => <Self as ::aoc_solver::PartSolver<#part>>::solve(shared),
        }
    });

    Ok(quote! {
        impl ::aoc_solver::Solver for #name {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::aoc_solver::SolveError::PartOutOfRange(part)),
                }
            }
        }
    })
}

/// Submits the solver to `SolverRegistry::with_plugins` through `inventory`
///
/// # Attributes
///
/// - `year`: Required. 2015 or later.
/// - `day`: Required. 1 through 25.
///
/// The type must also implement `Solver`, usually via `#[derive(AocSolver)]`.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 1)]
/// #[aoc(year = 2023, day = 2)]
/// struct Day2Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new_spanned(name, "AutoRegisterSolver requires #[aoc(year = .., day = ..)]")
        })?;

    let mut year: Option<LitInt> = None;
    let mut day: Option<LitInt> = None;
    attr.parse_nested_meta(|meta| {
        let slot = if meta.path.is_ident("year") {
            &mut year
        } else if meta.path.is_ident("day") {
            &mut day
        } else {
            return Err(meta.error("expected `year` or `day`"));
        };
        *slot = Some(meta.value()?.parse()?);
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(attr, "missing `year`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing `day`"))?;

    let year_value: u16 = year.base10_parse()?;
    if year_value < FIRST_YEAR {
        return Err(syn::Error::new_spanned(
            &year,
            format!("`year` must be {FIRST_YEAR} or later"),
        ));
    }
    let day_value: u8 = day.base10_parse()?;
    if !(1..=25).contains(&day_value) {
        return Err(syn::Error::new_spanned(&day, "`day` must be in 1..=25"));
    }

    Ok(quote! {
        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year_value,
                day: #day_value,
                parts: <#name as ::aoc_solver::Solver>::PARTS,
                create: ::aoc_solver::instantiate::<#name>,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn auto_register_error(input: DeriveInput) -> String {
        expand_auto_register(&input).unwrap_err().to_string()
    }

    #[test]
    fn test_year_before_first_event_rejected() {
        let input = parse_quote! {
            #[aoc(year = 2014, day = 1)]
            struct Early;
        };
        assert_eq!(auto_register_error(input), "`year` must be 2015 or later");
    }

    #[test]
    fn test_day_out_of_range_rejected() {
        for day in [0u8, 26] {
            let input = parse_quote! {
                #[aoc(year = 2023, day = #day)]
                struct Late;
            };
            assert_eq!(auto_register_error(input), "`day` must be in 1..=25");
        }
    }

    #[test]
    fn test_missing_and_unknown_properties() {
        let input = parse_quote! {
            #[aoc(day = 3)]
            struct NoYear;
        };
        assert_eq!(auto_register_error(input), "missing `year`");

        let input = parse_quote! {
            #[aoc(year = 2023, day = 3, tags = ["x"])]
            struct Tagged;
        };
        assert_eq!(auto_register_error(input), "expected `year` or `day`");
    }

    #[test]
    fn test_first_event_accepted() {
        let input = parse_quote! {
            #[aoc(year = 2015, day = 25)]
            struct First;
        };
        let tokens = expand_auto_register(&input).unwrap().to_string();
        assert!(tokens.contains("2015u16"), "{tokens}");
        assert!(tokens.contains("25u8"), "{tokens}");
    }

    #[test]
    fn test_max_parts_must_be_positive() {
        let input = parse_quote! {
            #[aoc_solver(max_parts = 0)]
            struct Empty;
        };
        let err = expand_aoc_solver(&input).unwrap_err().to_string();
        assert_eq!(err, "`max_parts` must be at least 1");
    }
}
