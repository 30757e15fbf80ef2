use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{parse_macro_input, DeriveInput, LitInt, Token};

/// The `(width, height)` of a tile, in pixels, as given to the attribute.
struct TileSizeInput {
    tile_width: LitInt,
    tile_height: LitInt,
}

impl Parse for TileSizeInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let tile_width = input.parse()?;
        let _comma: Token![,] = input.parse()?;
        let tile_height = input.parse()?;
        Ok(Self {
            tile_width,
            tile_height,
        })
    }
}

fn impl_tile_base(input: &DeriveInput, size: &TileSizeInput) -> proc_macro2::TokenStream {
    let name = &input.ident;
    let tile_width = &size.tile_width;
    let tile_height = &size.tile_height;

    quote! {
        impl TileBase for #name {
            fn get_tile_size(&self) -> (u32, u32) {
                (#tile_width, #tile_height)
            }
        }
    }
}

/// Marks a struct as a tile encoder with the given tile size, implementing `TileBase` and
/// `TileEncoderBase` for it. Both traits have to be in scope where the attribute is used.
#[proc_macro_attribute]
pub fn tile_encoder_base(attr: TokenStream, input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let size = parse_macro_input!(attr as TileSizeInput);

    let name = &input.ident;
    let tile_base = impl_tile_base(&input, &size);

    let expanded = quote! {
        #input

        #tile_base

        impl TileEncoderBase for #name {}
    };

    TokenStream::from(expanded)
}

/// Marks a struct as a tile decoder with the given tile size, implementing `TileBase` for it.
#[proc_macro_attribute]
pub fn tile_decoder_base(attr: TokenStream, input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let size = parse_macro_input!(attr as TileSizeInput);

    let tile_base = impl_tile_base(&input, &size);

    let expanded = quote! {
        #input

        #tile_base
    };

    TokenStream::from(expanded)
}
