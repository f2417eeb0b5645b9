//! # Infrastructure Common
//!
//! 这个 crate 提供了 Lorn ADSP 依赖注入层共用的类型元数据和约定。
//!
//! ## 核心组件
//!
//! - [`TypeDescriptor`] - 类型的声明式元数据
//! - [`Lifetime`] / [`AutoBind`] - 生命周期及其显式标注
//! - [`TransientDependency`] / [`ScopedDependency`] / [`SingletonDependency`] - 生命周期标记接口
//! - [`NamingConventions`] - 接口与实现的命名约定
//! - [`TypeModule`] - 按 crate 划分的可扫描类型集合
//!
//! ## 设计原则
//!
//! - 元数据在类型定义处一次性构建，之后不可变
//! - 约定优于配置
//! - 全局目录只保存元数据，不保存任何扫描配置

pub mod catalog;
pub mod conventions;
pub mod errors;
pub mod lifecycle;
pub mod metadata;

pub use catalog::*;
pub use conventions::*;
pub use errors::*;
pub use lifecycle::*;
pub use metadata::*;
