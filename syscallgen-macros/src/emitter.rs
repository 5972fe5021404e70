//! Implementation of the emitter procedural macro
//!
//! This module turns plain emitter functions into unit structs that
//! implement the `Emitter` trait, so the selector can hold every artifact
//! behind one trait object.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{FnArg, Ident, ItemFn, PatType, ReturnType, parse_macro_input};

/// Transform a function into an emitter struct
///
/// This function takes a function definition and produces:
/// 1. A unit struct named after the artifact
/// 2. An implementation of the Emitter trait for that struct
/// 3. The original function, which the trait implementation calls
///
/// # Arguments
///
/// * `attr` - The artifact name (optional)
/// * `item` - The function to transform
pub fn handle_emitter(attr: TokenStream, item: TokenStream) -> TokenStream {
	let artifact = if attr.is_empty() {
		None
	} else {
		Some(parse_macro_input!(attr as Ident))
	};
	let input_fn = parse_macro_input!(item as ItemFn);

	let fn_name = &input_fn.sig.ident;
	let fn_vis = &input_fn.vis;

	validate_emitter_signature(&input_fn);

	let struct_ident =
		artifact.unwrap_or_else(|| format_ident!("{}", fn_name_to_struct_name(&fn_name.to_string())));

	// Only documentation travels to the generated struct
	let doc_attrs = input_fn.attrs.iter().filter(|attr| attr.path().is_ident("doc"));

	let output: TokenStream2 = quote! {
		#(#doc_attrs)*
		#[derive(Debug, Clone, Copy, Default)]
		#fn_vis struct #struct_ident;

		impl ::syscallgen::emit::Emitter for #struct_ident {
			fn artifact(&self) -> &'static str {
				stringify!(#struct_ident)
			}

			fn emit(
				&self,
				ctx: &::syscallgen::emit::EmitContext<'_>,
				out: &mut dyn ::std::io::Write,
			) -> ::syscallgen::Result<()> {
				#fn_name(ctx, out)
			}
		}

		#input_fn
	};

	output.into()
}

/// Convert a snake_case function name to a CamelCase struct name
///
/// A leading `write_` is dropped, so `write_syscall_enums` becomes
/// `SyscallEnums`.
fn fn_name_to_struct_name(name: &str) -> String {
	let name = name.strip_prefix("write_").unwrap_or(name);
	let mut result = String::new();
	for part in name.split('_') {
		let mut chars = part.chars();
		if let Some(first) = chars.next() {
			result.push_str(&first.to_uppercase().to_string());
			result.push_str(chars.as_str());
		}
	}
	result
}

/// Validate that the function has the correct signature for an emitter
///
/// An emitter must:
/// 1. Be a free function taking `(ctx: &EmitContext, out: &mut dyn Write)`
/// 2. Return a `Result`
///
/// # Panics
///
/// Panics if the function does not have the correct signature
fn validate_emitter_signature(input_fn: &ItemFn) {
	match &input_fn.sig.output {
		ReturnType::Default => {
			panic!("Emitter must return Result<()>");
		},
		ReturnType::Type(_, ty) => {
			let type_str = quote!(#ty).to_string();
			if !type_str.contains("Result") {
				panic!("Emitter must return Result<()>, got {}", type_str);
			}
		},
	}

	if input_fn.sig.inputs.len() != 2 {
		panic!("Emitter must take exactly two arguments: &EmitContext and &mut dyn Write");
	}

	let mut inputs = input_fn.sig.inputs.iter();
	let expectations = [("EmitContext", false), ("Write", true)];
	for (expected, needs_mut) in expectations {
		let Some(arg) = inputs.next() else {
			panic!("Emitter must take exactly two arguments: &EmitContext and &mut dyn Write");
		};
		match arg {
			FnArg::Receiver(_) => {
				panic!("Emitter cannot be a method");
			},
			FnArg::Typed(PatType { ty, .. }) => {
				let ty_str = quote!(#ty).to_string();
				if !ty_str.contains('&') || !ty_str.contains(expected) {
					panic!("Emitter argument must be a reference to {}, got {}", expected, ty_str);
				}
				if needs_mut && !ty_str.contains("mut") {
					panic!("Emitter output must be &mut dyn Write, got {}", ty_str);
				}
			},
		}
	}
}
