//! 类型目录与类型模块
//!
//! 全局类型目录只保存类型元数据的加载函数，由 `#[derive(Injectable)]` 和
//! `#[service_contract]` 生成的代码在程序启动时登记。[`TypeModule`] 是
//! 按 crate 划分的一组类型，是扫描的基本单位。

use crate::errors::{ModuleLoadError, TypeLoadResult};
use crate::metadata::{crate_of, Describe, TypeDescriptor, TypeKey};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// 类型加载函数
pub type TypeLoader = fn() -> TypeLoadResult<Arc<TypeDescriptor>>;

/// 类型登记信息
#[derive(Debug, Clone, Copy)]
pub struct TypeRegistration {
    /// 定义类型的模块路径
    pub module_path: &'static str,
    /// 类型简单名称
    pub name: &'static str,
    /// 加载函数
    pub loader: TypeLoader,
}

impl TypeRegistration {
    /// 所属 crate 名称
    pub fn crate_name(&self) -> &'static str {
        crate_of(self.module_path)
    }
}

/// 全局类型目录
static TYPE_CATALOG: Lazy<RwLock<Vec<TypeRegistration>>> = Lazy::new(|| RwLock::new(Vec::new()));

/// 登记类型到全局目录
pub fn register_type(registration: TypeRegistration) {
    TYPE_CATALOG.write().push(registration);
}

/// 获取全局目录中已登记的全部类型
pub fn registered_types() -> Vec<TypeRegistration> {
    TYPE_CATALOG.read().clone()
}

type SharedLoader = Arc<dyn Fn() -> TypeLoadResult<Arc<TypeDescriptor>> + Send + Sync>;

#[derive(Clone)]
struct ModuleEntry {
    name: String,
    loader: SharedLoader,
}

/// 类型模块
///
/// 一组可加载的类型。加载是逐个类型进行的，单个类型失败不影响其他类型。
#[derive(Clone, Default)]
pub struct TypeModule {
    name: String,
    entries: Vec<ModuleEntry>,
}

impl TypeModule {
    /// 创建空模块
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// 全局目录中指定 crate 的全部类型
    ///
    /// 按模块路径和名称排序，保证扫描顺序稳定。
    pub fn of_crate(crate_name: &str) -> Self {
        let mut registrations: Vec<_> = registered_types()
            .into_iter()
            .filter(|registration| registration.crate_name() == crate_name)
            .collect();
        registrations.sort_by_key(|registration| (registration.module_path, registration.name));

        debug!("从全局类型目录构建模块 {}，共 {} 个类型", crate_name, registrations.len());

        let mut module = Self::new(crate_name);
        for registration in registrations {
            let loader = registration.loader;
            module = module.with_loader(
                TypeKey::new(registration.module_path, registration.name).to_string(),
                loader,
            );
        }
        module
    }

    /// 定义 `T` 的 crate 对应的模块
    pub fn containing<T: ?Sized + 'static>() -> Self {
        Self::of_crate(TypeKey::of::<T>().crate_name())
    }

    /// 添加可描述类型
    pub fn with<T: Describe + ?Sized + 'static>(self) -> Self {
        let name = TypeKey::of::<T>().to_string();
        self.with_loader(name, T::describe)
    }

    /// 添加已构建的描述符
    pub fn with_descriptor(self, descriptor: Arc<TypeDescriptor>) -> Self {
        let name = descriptor.key().to_string();
        self.with_loader(name, move || Ok(Arc::clone(&descriptor)))
    }

    /// 添加自定义加载函数
    pub fn with_loader<F>(mut self, name: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> TypeLoadResult<Arc<TypeDescriptor>> + Send + Sync + 'static,
    {
        self.entries.push(ModuleEntry {
            name: name.into(),
            loader: Arc::new(loader),
        });
        self
    }

    /// 模块名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 模块中的类型数量（含无法加载的类型）
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 模块是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 加载模块中的全部类型
    ///
    /// 任一类型加载失败时返回 [`ModuleLoadError`]，其中包含成功加载的部分。
    pub fn load_types(&self) -> Result<Vec<Arc<TypeDescriptor>>, ModuleLoadError> {
        let mut loaded = Vec::with_capacity(self.entries.len());
        let mut failures = Vec::new();

        for entry in &self.entries {
            match (entry.loader)() {
                Ok(descriptor) => loaded.push(descriptor),
                Err(e) => failures.push(e),
            }
        }

        if failures.is_empty() {
            Ok(loaded)
        } else {
            Err(ModuleLoadError {
                module: self.name.clone(),
                loaded,
                failures,
            })
        }
    }
}

impl fmt::Debug for TypeModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeModule")
            .field("name", &self.name)
            .field(
                "types",
                &self.entries.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
