use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Error, Ident, LitInt, Result, Token};

/// Bit 3 of the command header selects a read access
const READ_BIT: u16 = 0x08;
const MAX_ADDRESS: u16 = 0x0FFF;

pub(crate) struct CommandMacro {
    address: u16,
    read: bool,
}

impl Parse for CommandMacro {
    fn parse(input: ParseStream) -> Result<Self> {
        let address_lit: LitInt = input.parse()?;
        let address = address_lit.base10_parse::<u16>()?;
        if address > MAX_ADDRESS {
            return Err(Error::new(
                address_lit.span(),
                format!("Register address {:#X} doesn't fit in 12 bits", address),
            ));
        }

        input.parse::<Token![,]>()?;
        let access: Ident = input.parse()?;
        let read = match access.to_string().as_str() {
            "read" => true,
            "write" => false,
            other => {
                return Err(Error::new(
                    access.span(),
                    format!("Unknown access `{}`, expected `read` or `write`", other),
                ))
            }
        };

        Ok(CommandMacro { address, read })
    }
}

impl From<CommandMacro> for proc_macro2::TokenStream {
    fn from(cmd: CommandMacro) -> Self {
        let mut header = cmd.address << 4;
        if cmd.read {
            header |= READ_BIT;
        }

        quote! {
            #header
        }
    }
}
