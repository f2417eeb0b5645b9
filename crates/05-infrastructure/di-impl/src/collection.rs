//! 内存服务集合实现

use di_abstractions::{ServiceCollection, ServiceDescriptor};
use infrastructure_common::{Lifetime, TypeDescriptor, TypeKey};
use std::sync::Arc;
use tracing::debug;

/// 内存中的服务集合
///
/// 按添加顺序保存服务描述符。同一服务键有多个注册时，最后一个生效。
#[derive(Debug, Clone, Default)]
pub struct ServiceCollectionImpl {
    descriptors: Vec<ServiceDescriptor>,
}

impl ServiceCollectionImpl {
    /// 创建空的服务集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 所有服务描述符
    pub fn descriptors(&self) -> &[ServiceDescriptor] {
        &self.descriptors
    }

    /// 描述符数量
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// 是否注册了指定服务键
    pub fn contains(&self, service_type: TypeKey) -> bool {
        self.descriptors
            .iter()
            .any(|d| d.service_type == service_type)
    }

    /// 是否以指定生命周期注册了服务键
    pub fn contains_with_lifetime(&self, service_type: TypeKey, lifetime: Lifetime) -> bool {
        self.descriptors
            .iter()
            .any(|d| d.service_type == service_type && d.lifetime == lifetime)
    }

    /// 服务键当前生效的实现类型
    pub fn implementation_of(&self, service_type: TypeKey) -> Option<&Arc<TypeDescriptor>> {
        self.descriptors
            .iter()
            .rev()
            .find(|d| d.service_type == service_type)
            .map(|d| &d.implementation_type)
    }

    /// 服务键的全部实现类型，按注册顺序
    pub fn implementations_of(&self, service_type: TypeKey) -> Vec<TypeKey> {
        self.descriptors
            .iter()
            .filter(|d| d.service_type == service_type)
            .map(ServiceDescriptor::implementation_key)
            .collect()
    }

    /// 服务键当前生效的生命周期
    pub fn lifetime_of(&self, service_type: TypeKey) -> Option<Lifetime> {
        self.descriptors
            .iter()
            .rev()
            .find(|d| d.service_type == service_type)
            .map(|d| d.lifetime)
    }

    /// 由指定实现类型满足的服务键
    pub fn services_implemented_by(&self, implementation_type: TypeKey) -> Vec<TypeKey> {
        self.descriptors
            .iter()
            .filter(|d| d.implementation_key() == implementation_type)
            .map(|d| d.service_type)
            .collect()
    }

    /// 按 Rust 类型查找当前生效的实现类型
    pub fn get_service<T: ?Sized + 'static>(&self) -> Option<&Arc<TypeDescriptor>> {
        self.implementation_of(TypeKey::of::<T>())
    }
}

impl ServiceCollection for ServiceCollectionImpl {
    fn add(&mut self, descriptor: ServiceDescriptor) {
        debug!("添加服务: {}", descriptor);
        self.descriptors.push(descriptor);
    }
}

impl<'a> IntoIterator for &'a ServiceCollectionImpl {
    type Item = &'a ServiceDescriptor;
    type IntoIter = std::slice::Iter<'a, ServiceDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}
