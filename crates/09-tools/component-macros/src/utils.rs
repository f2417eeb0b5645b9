//! 宏工具函数

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, Path, TypeParamBound};

/// 生命周期标注参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifetimeArg {
    Singleton,
    Scoped,
    Transient,
}

impl LifetimeArg {
    /// 从标识符解析生命周期
    pub fn from_ident(ident: &Ident) -> Option<Self> {
        if ident == "singleton" {
            Some(Self::Singleton)
        } else if ident == "scoped" {
            Some(Self::Scoped)
        } else if ident == "transient" {
            Some(Self::Transient)
        } else {
            None
        }
    }

    /// 生成 `Lifetime` 取值
    pub fn to_tokens(self) -> TokenStream {
        match self {
            Self::Singleton => quote! { ::infrastructure_common::Lifetime::Singleton },
            Self::Scoped => quote! { ::infrastructure_common::Lifetime::Scoped },
            Self::Transient => quote! { ::infrastructure_common::Lifetime::Transient },
        }
    }
}

/// 生成描述符构建器上的生命周期标注调用
pub fn auto_bind_call(lifetime: Option<LifetimeArg>) -> TokenStream {
    match lifetime {
        Some(lifetime) => {
            let lifetime = lifetime.to_tokens();
            quote! { .auto_bind(::infrastructure_common::AutoBind::new(#lifetime)) }
        }
        None => quote! {},
    }
}

/// 不作为服务契约的标准库 trait
const STD_TRAITS: &[&str] = &[
    "Send", "Sync", "Sized", "Unpin", "Debug", "Display", "Clone", "Copy", "Default", "Any",
    "PartialEq", "Eq", "PartialOrd", "Ord", "Hash",
];

/// 从 supertrait 约束中提取服务契约路径
///
/// 跳过生命周期约束、`?Sized` 之类的放宽约束、带泛型参数的 trait 和常见标准库 trait。
pub fn contract_supertraits<'a>(
    bounds: impl IntoIterator<Item = &'a TypeParamBound>,
) -> Vec<Path> {
    bounds
        .into_iter()
        .filter_map(|bound| match bound {
            TypeParamBound::Trait(trait_bound)
                if matches!(trait_bound.modifier, syn::TraitBoundModifier::None) =>
            {
                Some(&trait_bound.path)
            }
            _ => None,
        })
        .filter(|path| {
            path.segments.last().map_or(false, |segment| {
                segment.arguments.is_none()
                    && !STD_TRAITS.iter().any(|name| segment.ident == *name)
            })
        })
        .cloned()
        .collect()
}

/// 生成描述符构建器上的接口调用
pub fn implements_calls(contracts: &[Path]) -> TokenStream {
    quote! {
        #(
            .implements(<dyn #contracts as ::infrastructure_common::Describe>::describe()?)
        )*
    }
}

/// 生成启动时登记到全局目录的代码
///
/// `key` 是求值为 `TypeKey` 的表达式，与描述符使用同一个类型标识。
pub fn registration(key: &TokenStream) -> TokenStream {
    quote! {
        #[ctor::ctor]
        fn __register_type() {
            let key: ::infrastructure_common::TypeKey = #key;
            ::infrastructure_common::register_type(::infrastructure_common::TypeRegistration {
                module_path: key.module_path(),
                name: key.name(),
                loader: __describe,
            });
        }
    }
}
