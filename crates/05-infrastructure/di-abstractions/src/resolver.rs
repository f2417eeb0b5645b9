//! 绑定解析器抽象接口
//!
//! 决定一个类型是否注册、以什么生命周期注册、暴露为哪些服务键

use crate::registry::ServiceDescriptor;
use infrastructure_common::{Lifetime, TypeDescriptor, TypeKey};
use std::sync::Arc;

/// 解析出的绑定
#[derive(Debug, Clone)]
pub struct ResolvedBinding {
    /// 服务键
    pub service_type: TypeKey,
    /// 实现类型
    pub implementation_type: Arc<TypeDescriptor>,
    /// 生命周期
    pub lifetime: Lifetime,
}

impl ResolvedBinding {
    /// 转换为服务描述符
    pub fn into_descriptor(self) -> ServiceDescriptor {
        ServiceDescriptor::describe(self.service_type, self.implementation_type, self.lifetime)
    }
}

/// 绑定解析器 trait
pub trait BindingResolver {
    /// 确定类型的生命周期，没有可用标注时返回 `None`
    fn lifetime_of(&mut self, descriptor: &TypeDescriptor) -> Option<Lifetime>;

    /// 计算类型应暴露的服务键，自身总在第一位
    fn exposed_services(&self, descriptor: &TypeDescriptor) -> Vec<TypeKey>;

    /// 解析类型的全部绑定
    ///
    /// 没有生命周期的类型不产生任何绑定（包括自身绑定）。
    fn resolve(&mut self, descriptor: &Arc<TypeDescriptor>) -> Vec<ResolvedBinding> {
        let Some(lifetime) = self.lifetime_of(descriptor) else {
            return Vec::new();
        };

        self.exposed_services(descriptor)
            .into_iter()
            .map(|service_type| ResolvedBinding {
                service_type,
                implementation_type: Arc::clone(descriptor),
                lifetime,
            })
            .collect()
    }
}
