use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemFn, ReturnType, parse_macro_input};

/// Shows the terminal cursor again however the function is left: normal
/// return, early error, panic, or (for async functions) Ctrl-C.
///
/// Expects `crate::render::CursorGuard` in the calling crate. Place it above
/// `#[tokio::main]` so it sees the `async fn`.
#[proc_macro_attribute]
pub fn restores_cursor(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input_fn = parse_macro_input!(item as ItemFn);

    let attrs = &input_fn.attrs;
    let vis = &input_fn.vis;
    let sig = &input_fn.sig;
    let block = &input_fn.block;

    let output = match &sig.output {
        ReturnType::Default => quote! { () },
        ReturnType::Type(_, ty) => quote! { #ty },
    };

    let run = if sig.asyncness.is_some() {
        quote! {
            let body = async move #block;
            tokio::select! {
                result = body => result,
                Ok(()) = tokio::signal::ctrl_c() => {
                    __cursor.restore();
                    std::process::exit(130)
                }
            }
        }
    } else {
        quote! { (move || -> #output #block)() }
    };

    let expanded = quote! {
        #(#attrs)*
        #vis #sig {
            #[allow(unused_mut)]
            let mut __cursor = crate::render::CursorGuard::stdout();
            let result: #output = { #run };
            drop(__cursor);
            result
        }
    };

    TokenStream::from(expanded)
}
