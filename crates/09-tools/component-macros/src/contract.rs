//! 服务契约宏实现

use crate::utils::{
    auto_bind_call, contract_supertraits, implements_calls, registration, LifetimeArg,
};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, punctuated::Punctuated, ItemTrait, Meta, Result, Token,
};

/// 服务契约参数
#[derive(Debug, Clone, Default)]
pub struct ContractArgs {
    /// 契约上的生命周期标注，实现者会继承它
    pub auto_bind: Option<LifetimeArg>,
}

impl Parse for ContractArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ContractArgs::default();

        let parsed = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        for meta in parsed {
            let Meta::Path(path) = &meta else {
                return Err(syn::Error::new_spanned(&meta, "service_contract 只接受生命周期标识"));
            };

            let lifetime = if path.is_ident("auto_bind") {
                Some(LifetimeArg::Transient)
            } else {
                path.get_ident().and_then(LifetimeArg::from_ident)
            };
            let Some(lifetime) = lifetime else {
                return Err(syn::Error::new_spanned(
                    path,
                    "生命周期必须是 singleton、scoped、transient 或 auto_bind",
                ));
            };

            if args.auto_bind.replace(lifetime).is_some() {
                return Err(syn::Error::new_spanned(path, "service_contract 只能指定一个生命周期"));
            }
        }

        Ok(args)
    }
}

/// 实现 #[service_contract] 宏
pub fn service_contract_impl(args: ContractArgs, item: ItemTrait) -> Result<TokenStream> {
    if !item.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "泛型 trait 不能作为服务契约",
        ));
    }

    let trait_name = &item.ident;
    let auto_bind = auto_bind_call(args.auto_bind);
    let implements = implements_calls(&contract_supertraits(&item.supertraits));
    let key = quote! { ::infrastructure_common::TypeKey::of::<dyn #trait_name>() };
    let register = registration(&key);

    Ok(quote! {
        #item

        const _: () = {
            fn __describe() -> ::infrastructure_common::TypeLoadResult<
                ::std::sync::Arc<::infrastructure_common::TypeDescriptor>,
            > {
                ::infrastructure_common::TypeDescriptor::interface(#key)
                #auto_bind
                #implements
                .build()
            }

            impl ::infrastructure_common::Describe for dyn #trait_name {
                fn describe() -> ::infrastructure_common::TypeLoadResult<
                    ::std::sync::Arc<::infrastructure_common::TypeDescriptor>,
                > {
                    __describe()
                }
            }

            #register
        };
    })
}
