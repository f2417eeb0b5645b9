//! 服务集合抽象接口
//!
//! 外部容器只需要提供“描述”和“添加”两个操作，自动注册层不会触及
//! 容器的其他部分。

use infrastructure_common::{Lifetime, TypeDescriptor, TypeKey};
use std::fmt;
use std::sync::Arc;

/// 服务描述符
///
/// 表示“以生命周期 L 构造实现类型 T 来满足服务键 S”。
#[derive(Debug, Clone)]
pub struct ServiceDescriptor {
    /// 服务键
    pub service_type: TypeKey,
    /// 实现类型
    pub implementation_type: Arc<TypeDescriptor>,
    /// 生命周期
    pub lifetime: Lifetime,
}

impl ServiceDescriptor {
    /// 创建服务描述符
    pub fn describe(
        service_type: TypeKey,
        implementation_type: Arc<TypeDescriptor>,
        lifetime: Lifetime,
    ) -> Self {
        Self {
            service_type,
            implementation_type,
            lifetime,
        }
    }

    /// 实现类型标识
    pub fn implementation_key(&self) -> TypeKey {
        self.implementation_type.key()
    }
}

impl fmt::Display for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} => {} ({})",
            self.service_type,
            self.implementation_type.key(),
            self.lifetime
        )
    }
}

/// 服务集合 trait
///
/// 自动注册层与外部容器之间的唯一协作面
pub trait ServiceCollection {
    /// 创建服务描述符
    fn describe(
        &self,
        service_type: TypeKey,
        implementation_type: Arc<TypeDescriptor>,
        lifetime: Lifetime,
    ) -> ServiceDescriptor {
        ServiceDescriptor::describe(service_type, implementation_type, lifetime)
    }

    /// 添加服务描述符
    fn add(&mut self, descriptor: ServiceDescriptor);
}

impl ServiceCollection for Vec<ServiceDescriptor> {
    fn add(&mut self, descriptor: ServiceDescriptor) {
        self.push(descriptor);
    }
}
