//! 按约定自动注册的入口
//!
//! 为任意 [`ServiceCollection`] 提供扫描和注册方法。每次调用都会创建
//! 新的 [`ScanOptions`]，经由参数传递给收集器和解析器，调用之间互不影响。

use crate::collector::{is_registration_candidate, ModuleTypeCollector};
use crate::resolver::ConventionBindingResolver;
use di_abstractions::{BindingResolver, ScanOptions, ServiceCollection, TypeScanner};
use infrastructure_common::{Describe, TypeDescriptor, TypeLoadResult, TypeModule};
use std::sync::Arc;
use tracing::{debug, info};

/// 服务集合扩展 trait
pub trait ServiceCollectionExt: ServiceCollection {
    /// 扫描定义 `T` 的 crate，按约定注册其中的全部类型
    fn scan_for_dependency_of<T, F>(&mut self, configure: F) -> &mut Self
    where
        T: ?Sized + 'static,
        F: FnOnce(&mut ScanOptions),
    {
        let module = TypeModule::containing::<T>();
        self.scan_for_dependencies([&module], configure)
    }

    /// 扫描单个模块
    fn scan_for_dependency<F>(&mut self, module: &TypeModule, configure: F) -> &mut Self
    where
        F: FnOnce(&mut ScanOptions),
    {
        self.scan_for_dependencies([module], configure)
    }

    /// 扫描多个模块
    fn scan_for_dependencies<'m, I, F>(&mut self, modules: I, configure: F) -> &mut Self
    where
        I: IntoIterator<Item = &'m TypeModule>,
        F: FnOnce(&mut ScanOptions),
    {
        let options = build_options(configure);
        register_modules(self, modules, &options);
        self
    }

    /// 按约定注册单个类型
    ///
    /// 与扫描只含该类型的模块等价：接口、抽象类型和泛型定义不会注册。
    fn add_type_of<F>(&mut self, descriptor: &Arc<TypeDescriptor>, configure: F) -> &mut Self
    where
        F: FnOnce(&mut ScanOptions),
    {
        let options = build_options(configure);
        if !is_registration_candidate(descriptor) {
            debug!("类型 {} 不是可注册的具体类型，跳过", descriptor.key());
            return self;
        }
        let mut resolver = ConventionBindingResolver::new(&options);
        register_type(self, &mut resolver, descriptor);
        self
    }

    /// 按约定注册可描述类型 `T`
    fn add_type<T, F>(&mut self, configure: F) -> TypeLoadResult<&mut Self>
    where
        T: Describe + ?Sized,
        F: FnOnce(&mut ScanOptions),
    {
        let descriptor = T::describe()?;
        Ok(self.add_type_of(&descriptor, configure))
    }

    /// 使用默认选项注册定义 `T` 的 crate 中的全部类型
    fn add_assembly_of<T>(&mut self) -> &mut Self
    where
        T: ?Sized + 'static,
    {
        let module = TypeModule::containing::<T>();
        self.add_assembly(&module)
    }

    /// 使用默认选项注册模块中的全部类型
    fn add_assembly(&mut self, module: &TypeModule) -> &mut Self {
        register_modules(self, [module], &ScanOptions::default());
        self
    }
}

impl<S: ServiceCollection + ?Sized> ServiceCollectionExt for S {}

fn build_options<F>(configure: F) -> ScanOptions
where
    F: FnOnce(&mut ScanOptions),
{
    let mut options = ScanOptions::default();
    configure(&mut options);
    options
}

fn register_modules<'m, S, I>(services: &mut S, modules: I, options: &ScanOptions)
where
    S: ServiceCollection + ?Sized,
    I: IntoIterator<Item = &'m TypeModule>,
{
    let collector = ModuleTypeCollector::new();
    let mut resolver = ConventionBindingResolver::new(options);

    for module in modules {
        info!("使用 {} 扫描模块: {}", collector.name(), module.name());

        let mut registered = 0;
        for descriptor in collector.collect(module) {
            if !is_registration_candidate(&descriptor) {
                debug!("类型 {} 不是可注册的具体类型，跳过", descriptor.key());
                continue;
            }
            registered += register_type(services, &mut resolver, &descriptor);
        }

        info!("扫描模块 {} 完成，注册了 {} 个服务", module.name(), registered);
    }
}

fn register_type<S, R>(services: &mut S, resolver: &mut R, descriptor: &Arc<TypeDescriptor>) -> usize
where
    S: ServiceCollection + ?Sized,
    R: BindingResolver,
{
    let bindings = resolver.resolve(descriptor);
    if bindings.is_empty() {
        debug!("类型 {} 没有生命周期标注，跳过", descriptor.key());
        return 0;
    }

    let count = bindings.len();
    for binding in bindings {
        let service_descriptor =
            services.describe(binding.service_type, binding.implementation_type, binding.lifetime);
        services.add(service_descriptor);
    }
    count
}
