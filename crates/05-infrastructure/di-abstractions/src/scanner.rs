//! 类型收集器抽象接口
//!
//! 提供从类型模块中发现可注册类型的能力

use infrastructure_common::{TypeDescriptor, TypeModule};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 类型收集器 trait
///
/// 枚举模块中所有可以加载的类型
pub trait TypeScanner {
    /// 收集模块中的类型
    ///
    /// 部分类型无法加载时返回成功加载的部分，不中断扫描。
    fn collect(&self, module: &TypeModule) -> Vec<Arc<TypeDescriptor>>;

    /// 获取收集器名称
    fn name(&self) -> &str;
}

/// 扫描选项
///
/// 每次注册调用独立创建，作为参数传递给收集器和解析器，不跨调用共享。
/// 可以从配置节绑定：
///
/// ```toml
/// [dependency_injection.scan]
/// default_conventions_binding_only = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanOptions {
    /// 只按命名约定绑定接口
    ///
    /// 开启后，只有类型名称以接口名称（去掉约定前缀）结尾时才暴露该接口。
    pub default_conventions_binding_only: bool,
}

impl ScanOptions {
    /// 创建默认扫描选项
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置是否只按命名约定绑定
    pub fn with_default_conventions_binding_only(mut self, enabled: bool) -> Self {
        self.default_conventions_binding_only = enabled;
        self
    }

    /// 从配置值绑定扫描选项
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
