//! 按约定的绑定解析器
//!
//! 生命周期查找顺序：类型自身的标注优先；否则按声明顺序深度优先遍历
//! 实现的接口，第一个带标注的接口决定生命周期。冲突的标注不合并、不报错。

use di_abstractions::{BindingResolver, ScanOptions};
use infrastructure_common::{Lifetime, NamingConventions, TypeDescriptor, TypeKey};
use std::collections::HashMap;
use tracing::debug;

/// 按约定的绑定解析器
///
/// 只在一次注册调用内存活，接口的生命周期查找结果在此期间缓存。
#[derive(Debug)]
pub struct ConventionBindingResolver<'a> {
    options: &'a ScanOptions,
    inherited: HashMap<TypeKey, Option<Lifetime>>,
}

impl<'a> ConventionBindingResolver<'a> {
    /// 使用本次调用的扫描选项创建解析器
    pub fn new(options: &'a ScanOptions) -> Self {
        Self {
            options,
            inherited: HashMap::new(),
        }
    }

    /// 从接口层级继承的生命周期
    fn inherited_lifetime(&mut self, descriptor: &TypeDescriptor) -> Option<Lifetime> {
        descriptor
            .interfaces()
            .iter()
            .find_map(|interface| self.interface_lifetime(interface))
    }

    fn interface_lifetime(&mut self, interface: &TypeDescriptor) -> Option<Lifetime> {
        if let Some(cached) = self.inherited.get(&interface.key()) {
            return *cached;
        }

        let lifetime = match interface.auto_bind() {
            Some(auto_bind) => Some(auto_bind.lifetime()),
            None => self.inherited_lifetime(interface),
        };
        self.inherited.insert(interface.key(), lifetime);
        lifetime
    }
}

impl BindingResolver for ConventionBindingResolver<'_> {
    fn lifetime_of(&mut self, descriptor: &TypeDescriptor) -> Option<Lifetime> {
        let Some(auto_bind) = descriptor.auto_bind() else {
            return self.inherited_lifetime(descriptor);
        };

        let own = auto_bind.lifetime();
        if let Some(inherited) = self.inherited_lifetime(descriptor) {
            if inherited != own {
                debug!(
                    "类型 {} 自身标注为 {}，忽略接口继承的 {}",
                    descriptor.key(),
                    own,
                    inherited
                );
            }
        }
        Some(own)
    }

    fn exposed_services(&self, descriptor: &TypeDescriptor) -> Vec<TypeKey> {
        let mut services = vec![descriptor.key()];

        for interface in descriptor.all_interfaces() {
            if self.options.default_conventions_binding_only
                && !NamingConventions::follows_default_convention(descriptor.name(), interface.name())
            {
                continue;
            }
            services.push(interface.key());
        }

        services
    }
}
