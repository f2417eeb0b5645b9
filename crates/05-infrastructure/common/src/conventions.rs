//! 约定规范定义
//!
//! 接口到实现类型的命名约定：`ITaxCalculator` 约定由名称以
//! `TaxCalculator` 结尾的类型实现。

/// 接口名称的约定前缀
pub const INTERFACE_PREFIX: char = 'I';

/// 命名约定规范
#[derive(Debug)]
pub struct NamingConventions;

impl NamingConventions {
    /// 去掉接口名称开头的一个约定前缀（如果存在）
    pub fn strip_interface_prefix(interface_name: &str) -> &str {
        interface_name
            .strip_prefix(INTERFACE_PREFIX)
            .unwrap_or(interface_name)
    }

    /// 检查类型名称是否按约定派生自接口名称
    ///
    /// 字面后缀匹配，区分大小写。
    pub fn follows_default_convention(type_name: &str, interface_name: &str) -> bool {
        type_name.ends_with(Self::strip_interface_prefix(interface_name))
    }
}
