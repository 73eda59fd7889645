//! Base library to defines ADE9430 procedural macros

#![warn(missing_docs)]

mod command;

use crate::command::CommandMacro;
use proc_macro::TokenStream;
use syn::parse_macro_input;

/// Macro to compute the SPI command header of an ADE9430 register access
///
/// The register address must fit in 12 bits, the access is either `read` or `write`.
///
/// ```
/// use rs_ade9430_macros::ade9430_cmd;
///
/// assert_eq!(0x20C8u16, ade9430_cmd!(0x20C, read));
/// assert_eq!(0x4800u16, ade9430_cmd!(0x480, write));
/// ```
///
/// ```compile_fail
/// use rs_ade9430_macros::ade9430_cmd;
///
/// let _ = ade9430_cmd!(0x1000, read);
/// ```
#[proc_macro]
pub fn ade9430_cmd(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as CommandMacro);
    let output: proc_macro2::TokenStream = input.into();
    output.into()
}
