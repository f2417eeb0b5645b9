//! 错误类型定义

use crate::metadata::TypeDescriptor;
use std::sync::Arc;
use thiserror::Error;

/// 类型加载错误
///
/// 单个类型的元数据无法构建时产生，只影响该类型本身。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeLoadError {
    #[error("类型 {type_name} 声明的契约 {interface} 不是接口")]
    NotAnInterface { type_name: String, interface: String },

    #[error("类型加载失败: {type_name}, 原因: {message}")]
    LoaderFailed { type_name: String, message: String },
}

impl TypeLoadError {
    /// 创建加载失败错误
    pub fn loader_failed(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::LoaderFailed {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// 出错的类型名称
    pub fn type_name(&self) -> &str {
        match self {
            Self::NotAnInterface { type_name, .. } | Self::LoaderFailed { type_name, .. } => {
                type_name
            }
        }
    }
}

/// 模块部分加载错误
///
/// 模块中有一个或多个类型加载失败。`loaded` 保留成功加载的类型，
/// 调用方可以据此继续工作。
#[derive(Error, Debug, Clone)]
#[error("模块 {module} 中有 {} 个类型加载失败", .failures.len())]
pub struct ModuleLoadError {
    /// 模块名称
    pub module: String,
    /// 成功加载的类型
    pub loaded: Vec<Arc<TypeDescriptor>>,
    /// 加载失败的类型
    pub failures: Vec<TypeLoadError>,
}

impl ModuleLoadError {
    /// 拆分为成功加载的类型
    pub fn into_loaded(self) -> Vec<Arc<TypeDescriptor>> {
        self.loaded
    }
}

/// 结果类型别名
pub type TypeLoadResult<T> = Result<T, TypeLoadError>;
