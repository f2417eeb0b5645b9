//! # Component Macros
//!
//! 这个 crate 提供了为约定注册生成类型元数据的过程宏。
//!
//! ## 核心宏
//!
//! - [`Injectable`] - 为结构体生成类型描述符并登记到全局类型目录
//! - [`service_contract`] - 把 trait 声明为服务契约（接口）
//!
//! 生成的代码引用 `infrastructure_common` 和 `ctor`，使用方 crate 需要同时依赖它们。
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use component_macros::{service_contract, Injectable};
//! use infrastructure_common::SingletonDependency;
//!
//! #[service_contract]
//! pub trait ITaxCalculator: SingletonDependency {}
//!
//! #[derive(Injectable)]
//! #[implements(ITaxCalculator)]
//! pub struct TaxCalculator;
//!
//! impl SingletonDependency for TaxCalculator {}
//! impl ITaxCalculator for TaxCalculator {}
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput, ItemTrait};

mod contract;
mod injectable;
mod utils;

/// 可注入类型派生宏
///
/// 为结构体实现 `Describe`，并在程序启动时把类型登记到所在 crate 的类型目录中。
///
/// # 属性
///
/// - `#[auto_bind]` / `#[auto_bind(singleton|scoped|transient)]` - 显式生命周期，不带参数时为瞬时
/// - `#[implements(A, b::C)]` - 实现的服务契约，按声明顺序记录，可重复
/// - `#[injectable(abstract_type)]` - 标记为抽象类型，扫描时跳过
///
/// 非泛型类型会在编译期检查 `#[implements]` 中的契约确实已实现。
///
/// # 示例
///
/// ```rust,ignore
/// #[derive(Injectable)]
/// #[auto_bind(scoped)]
/// pub struct RequestContext;
/// ```
#[proc_macro_derive(Injectable, attributes(auto_bind, implements, injectable))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    injectable::derive_injectable_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// 服务契约宏
///
/// 把 trait 登记为接口，为 `dyn Trait` 实现 `Describe`。supertrait 中的契约
/// （包括生命周期标记 trait）按声明顺序成为父接口，标准库 trait 会被忽略。
///
/// # 参数
///
/// - `singleton` / `scoped` / `transient` - 契约上的生命周期标注，实现者会继承
/// - `auto_bind` - 等同于 `transient`
///
/// # 示例
///
/// ```rust,ignore
/// #[service_contract(singleton)]
/// pub trait IClock: Send + Sync {
///     fn now(&self) -> u64;
/// }
/// ```
#[proc_macro_attribute]
pub fn service_contract(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args as contract::ContractArgs);
    let item = parse_macro_input!(input as ItemTrait);
    contract::service_contract_impl(args, item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
