//! # Dependency Injection Abstractions
//! 
//! 依赖注入抽象层，定义按约定自动注册所需的核心接口。
//! 
//! ## 核心接口
//! 
//! - [`ServiceCollection`] - 服务集合接口（外部容器的注册入口）
//! - [`TypeScanner`] - 类型收集器接口
//! - [`BindingResolver`] - 绑定解析器接口
//! - [`ScanOptions`] - 单次扫描的绑定配置

pub mod registry;
pub mod scanner;
pub mod resolver;

pub use registry::*;
pub use scanner::*;
pub use resolver::*;
