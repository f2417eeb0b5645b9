//! # 依赖注入具体实现
//! 
//! 提供按约定自动注册的具体实现：类型收集器、绑定解析器、内存服务集合，
//! 以及面向任意服务集合的注册入口 [`ServiceCollectionExt`]。
//!
//! ```rust,ignore
//! use di_impl::{ServiceCollectionExt, ServiceCollectionImpl};
//!
//! let mut services = ServiceCollectionImpl::new();
//! services.scan_for_dependency_of::<TaxCalculator, _>(|options| {
//!     options.default_conventions_binding_only = true;
//! });
//! ```

pub mod collection;
pub mod collector;
pub mod extensions;
pub mod resolver;

pub use collection::ServiceCollectionImpl;
pub use collector::{is_registration_candidate, ModuleTypeCollector};
pub use extensions::ServiceCollectionExt;
pub use resolver::ConventionBindingResolver;
