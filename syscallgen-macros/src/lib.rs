extern crate proc_macro;

use proc_macro::TokenStream;

mod emitter;

use emitter::handle_emitter;

/// Register a function as an artifact emitter
///
/// This macro turns a free function with the signature
/// `fn(ctx: &EmitContext, out: &mut dyn Write) -> Result<()>` into a
/// unit struct implementing the `Emitter` trait. The struct is named after
/// the artifact given in the attribute, or after the function in CamelCase
/// when the attribute is empty.
///
/// # Example
///
/// ```ignore
/// use syscallgen::Result;
/// use syscallgen::emit::EmitContext;
/// use std::io::Write;
///
/// #[syscallgen::emitter(SyscallCount)]
/// fn write_syscall_count(ctx: &EmitContext<'_>, out: &mut dyn Write) -> Result<()> {
///     writeln!(out, "#define SYSCALL_COUNT {}", ctx.catalogue.len())?;
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn emitter(attr: TokenStream, item: TokenStream) -> TokenStream {
	handle_emitter(attr, item)
}
