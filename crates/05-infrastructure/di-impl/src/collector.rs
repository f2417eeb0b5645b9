//! 类型收集器实现

use di_abstractions::TypeScanner;
use infrastructure_common::{TypeDescriptor, TypeModule};
use std::sync::Arc;
use tracing::{debug, warn};

/// 基于类型模块的收集器
#[derive(Debug, Default, Clone, Copy)]
pub struct ModuleTypeCollector;

impl ModuleTypeCollector {
    /// 创建新的收集器
    pub fn new() -> Self {
        Self
    }
}

impl TypeScanner for ModuleTypeCollector {
    fn collect(&self, module: &TypeModule) -> Vec<Arc<TypeDescriptor>> {
        match module.load_types() {
            Ok(types) => {
                debug!("模块 {} 加载了 {} 个类型", module.name(), types.len());
                types
            }
            Err(e) => {
                for failure in &e.failures {
                    warn!("跳过无法加载的类型: {}", failure);
                }
                warn!("{}，继续使用已加载的 {} 个类型", e, e.loaded.len());
                e.into_loaded()
            }
        }
    }

    fn name(&self) -> &str {
        "ModuleTypeCollector"
    }
}

/// 检查类型是否可以参与自动注册
///
/// 只有非抽象、非泛型的具体类型才是候选类型。
pub fn is_registration_candidate(descriptor: &TypeDescriptor) -> bool {
    descriptor.is_class() && !descriptor.is_abstract() && !descriptor.is_generic()
}
