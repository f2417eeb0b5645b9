//! 可注入类型派生宏实现

use crate::utils::{auto_bind_call, implements_calls, registration, LifetimeArg};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{punctuated::Punctuated, Attribute, DeriveInput, Path, Result, Token};

/// 可注入类型的声明参数
#[derive(Debug, Clone, Default)]
pub struct InjectableArgs {
    /// 显式生命周期标注，`#[auto_bind]` 不带参数时为瞬时
    pub auto_bind: Option<LifetimeArg>,
    /// 实现的服务契约
    pub implements: Vec<Path>,
    /// 是否为抽象类型
    pub is_abstract: bool,
}

impl InjectableArgs {
    /// 从类型上的属性解析参数
    pub fn from_attributes(attrs: &[Attribute]) -> Result<Self> {
        let mut args = Self::default();

        for attr in attrs {
            if attr.path().is_ident("auto_bind") {
                if args.auto_bind.is_some() {
                    return Err(syn::Error::new_spanned(attr, "重复的 auto_bind 标注"));
                }
                args.auto_bind = Some(parse_auto_bind(attr)?);
            } else if attr.path().is_ident("implements") {
                let paths =
                    attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)?;
                args.implements.extend(paths);
            } else if attr.path().is_ident("injectable") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("abstract_type") {
                        args.is_abstract = true;
                        Ok(())
                    } else {
                        Err(meta.error("未知的 injectable 参数，支持: abstract_type"))
                    }
                })?;
            }
        }

        Ok(args)
    }
}

fn parse_auto_bind(attr: &Attribute) -> Result<LifetimeArg> {
    if matches!(attr.meta, syn::Meta::Path(_)) {
        return Ok(LifetimeArg::Transient);
    }

    let mut lifetime = None;
    attr.parse_nested_meta(|meta| {
        let parsed = meta
            .path
            .get_ident()
            .and_then(LifetimeArg::from_ident)
            .ok_or_else(|| meta.error("生命周期必须是 singleton、scoped 或 transient"))?;
        if lifetime.replace(parsed).is_some() {
            return Err(meta.error("auto_bind 只能指定一个生命周期"));
        }
        Ok(())
    })?;

    Ok(lifetime.unwrap_or(LifetimeArg::Transient))
}

/// 实现 #[derive(Injectable)] 宏
pub fn derive_injectable_impl(input: DeriveInput) -> Result<TokenStream> {
    let args = InjectableArgs::from_attributes(&input.attrs)?;

    let type_name = &input.ident;
    let name = type_name.to_string();
    let is_abstract = args.is_abstract;
    let is_generic = !input.generics.params.is_empty();
    let auto_bind = auto_bind_call(args.auto_bind);
    let implements = implements_calls(&args.implements);
    // 泛型定义没有可用的实例化，只能按声明位置生成标识
    let key = if is_generic {
        quote! { ::infrastructure_common::TypeKey::new(::core::module_path!(), #name) }
    } else {
        quote! { ::infrastructure_common::TypeKey::of::<#type_name>() }
    };
    let register = registration(&key);
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // 泛型定义无法在这里实例化，只对非泛型类型检查契约是否真正实现
    let contract_checks = if is_generic {
        quote! {}
    } else {
        let checks = args.implements.iter().map(|contract| {
            quote! {
                {
                    fn check<T: ?Sized + #contract>() {}
                    check::<#type_name>();
                }
            }
        });
        quote! {
            #[allow(dead_code)]
            fn __assert_implements() {
                #(#checks)*
            }
        }
    };

    Ok(quote! {
        const _: () = {
            fn __describe() -> ::infrastructure_common::TypeLoadResult<
                ::std::sync::Arc<::infrastructure_common::TypeDescriptor>,
            > {
                ::infrastructure_common::TypeDescriptor::class(#key)
                .abstract_type(#is_abstract)
                .generic(#is_generic)
                #auto_bind
                #implements
                .build()
            }

            impl #impl_generics ::infrastructure_common::Describe for #type_name #ty_generics #where_clause {
                fn describe() -> ::infrastructure_common::TypeLoadResult<
                    ::std::sync::Arc<::infrastructure_common::TypeDescriptor>,
                > {
                    __describe()
                }
            }

            #contract_checks

            #register
        };
    })
}
