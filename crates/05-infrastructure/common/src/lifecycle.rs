//! 组件生命周期定义
//!
//! 生命周期有两种来源：
//!
//! - 显式标注 [`AutoBind`]，可以挂在具体类型或接口上；
//! - 生命周期标记接口 [`TransientDependency`]、[`ScopedDependency`]、
//!   [`SingletonDependency`]，任何直接或间接实现它们的类型都会继承对应的生命周期。
//!
//! 标记接口本身就是带有 [`AutoBind`] 标注的接口，因此两种来源在解析时
//! 统一为一次沿接口层级的查找。

use crate::errors::TypeLoadResult;
use crate::metadata::{Describe, TypeDescriptor, TypeKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// 组件生命周期类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifetime {
    /// 单例模式 - 整个应用生命周期内只创建一个实例
    Singleton,
    /// 作用域模式 - 在同一作用域内共享实例
    Scoped,
    /// 瞬时模式 - 每次请求都创建新实例
    #[default]
    Transient,
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Singleton => "singleton",
            Self::Scoped => "scoped",
            Self::Transient => "transient",
        };
        f.write_str(name)
    }
}

/// 自动绑定标注
///
/// 不带参数时默认为 [`Lifetime::Transient`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AutoBind {
    lifetime: Lifetime,
}

impl AutoBind {
    /// 以指定生命周期创建标注
    pub const fn new(lifetime: Lifetime) -> Self {
        Self { lifetime }
    }

    /// 标注的生命周期
    pub const fn lifetime(&self) -> Lifetime {
        self.lifetime
    }
}

/// 瞬时生命周期标记
pub trait TransientDependency {}

/// 作用域生命周期标记
pub trait ScopedDependency {}

/// 单例生命周期标记
pub trait SingletonDependency {}

fn marker(name: &'static str, lifetime: Lifetime) -> TypeLoadResult<Arc<TypeDescriptor>> {
    TypeDescriptor::interface(TypeKey::new(module_path!(), name))
        .with_lifetime(lifetime)
        .build()
}

impl Describe for dyn TransientDependency {
    fn describe() -> TypeLoadResult<Arc<TypeDescriptor>> {
        marker("TransientDependency", Lifetime::Transient)
    }
}

impl Describe for dyn ScopedDependency {
    fn describe() -> TypeLoadResult<Arc<TypeDescriptor>> {
        marker("ScopedDependency", Lifetime::Scoped)
    }
}

impl Describe for dyn SingletonDependency {
    fn describe() -> TypeLoadResult<Arc<TypeDescriptor>> {
        marker("SingletonDependency", Lifetime::Singleton)
    }
}
