//! 元数据定义
//!
//! 提供类型的声明式元数据：类型标识、种类、实现的接口以及生命周期标注。
//! 元数据在类型定义处一次性构建（通常由 `component-macros` 生成），
//! 构建后不可变。

use crate::errors::{TypeLoadError, TypeLoadResult};
use crate::lifecycle::{AutoBind, Lifetime};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// 类型标识
///
/// 由模块路径和简单名称组成，作为服务键使用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey {
    /// 模块路径
    module_path: &'static str,
    /// 简单名称（不含模块路径和泛型参数）
    name: &'static str,
}

impl TypeKey {
    /// 创建新的类型标识
    pub const fn new(module_path: &'static str, name: &'static str) -> Self {
        Self { module_path, name }
    }

    /// 从 Rust 类型获取类型标识
    ///
    /// 支持 `dyn Trait` 形式的契约类型，会去掉 `dyn ` 前缀和泛型参数。
    /// 引用、指针、切片和数组得到元素类型的标识。只对具名类型有意义，
    /// 元组、函数指针等类型的结果不能作为服务键。
    pub fn of<T: ?Sized + 'static>() -> Self {
        let (module_path, name) = split_type_name(std::any::type_name::<T>());
        Self { module_path, name }
    }

    /// 简单名称
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// 模块路径
    pub const fn module_path(&self) -> &'static str {
        self.module_path
    }

    /// 所属 crate 名称
    pub fn crate_name(&self) -> &'static str {
        crate_of(self.module_path)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.module_path.is_empty() {
            f.write_str(self.name)
        } else {
            write!(f, "{}::{}", self.module_path, self.name)
        }
    }
}

/// 取模块路径的第一段作为 crate 名称
pub(crate) fn crate_of(module_path: &str) -> &str {
    module_path.split("::").next().unwrap_or(module_path)
}

/// 引用、指针、切片和数组取其元素类型
const TYPE_WRAPPERS: &[&str] = &["&", "mut ", "*const ", "*mut ", "[", "dyn "];

fn split_type_name(full: &'static str) -> (&'static str, &'static str) {
    let mut path = full;
    while let Some(inner) = TYPE_WRAPPERS.iter().find_map(|prefix| path.strip_prefix(prefix)) {
        path = inner;
    }
    let end = path
        .find(|c: char| matches!(c, '<' | ' ' | ';' | ']' | ',' | ')'))
        .unwrap_or(path.len());
    let path = &path[..end];

    match path.rfind("::") {
        Some(index) => (&path[..index], &path[index + 2..]),
        None => ("", path),
    }
}

/// 类型种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// 具体类型（结构体、枚举）
    Class,
    /// 接口（以 `dyn Trait` 表示的契约）
    Interface,
}

/// 类型描述符
///
/// 描述一个可加载类型的全部注册相关信息。
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    key: TypeKey,
    kind: TypeKind,
    is_abstract: bool,
    is_generic: bool,
    interfaces: Vec<Arc<TypeDescriptor>>,
    auto_bind: Option<AutoBind>,
}

impl TypeDescriptor {
    /// 开始构建具体类型描述符
    pub fn class(key: TypeKey) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new(key, TypeKind::Class)
    }

    /// 开始构建接口描述符
    pub fn interface(key: TypeKey) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new(key, TypeKind::Interface)
    }

    /// 类型标识
    pub const fn key(&self) -> TypeKey {
        self.key
    }

    /// 简单名称
    pub const fn name(&self) -> &'static str {
        self.key.name
    }

    /// 类型种类
    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    /// 是否为具体类型
    pub fn is_class(&self) -> bool {
        self.kind == TypeKind::Class
    }

    /// 是否为接口
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    /// 是否为抽象类型（接口总是抽象的）
    pub const fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// 是否为泛型定义
    pub const fn is_generic(&self) -> bool {
        self.is_generic
    }

    /// 直接声明的接口，按声明顺序
    pub fn interfaces(&self) -> &[Arc<TypeDescriptor>] {
        &self.interfaces
    }

    /// 类型自身的生命周期标注
    pub const fn auto_bind(&self) -> Option<AutoBind> {
        self.auto_bind
    }

    /// 实现的全部接口（含间接继承的接口）
    ///
    /// 深度优先前序遍历，按声明顺序展开，重复的接口只保留第一次出现。
    pub fn all_interfaces(&self) -> Vec<Arc<TypeDescriptor>> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        collect_interfaces(&self.interfaces, &mut seen, &mut result);
        result
    }
}

fn collect_interfaces(
    interfaces: &[Arc<TypeDescriptor>],
    seen: &mut HashSet<TypeKey>,
    result: &mut Vec<Arc<TypeDescriptor>>,
) {
    for interface in interfaces {
        if seen.insert(interface.key) {
            result.push(Arc::clone(interface));
            collect_interfaces(&interface.interfaces, seen, result);
        }
    }
}

/// 类型描述符构建器
#[derive(Debug)]
pub struct TypeDescriptorBuilder {
    key: TypeKey,
    kind: TypeKind,
    is_abstract: bool,
    is_generic: bool,
    interfaces: Vec<Arc<TypeDescriptor>>,
    auto_bind: Option<AutoBind>,
}

impl TypeDescriptorBuilder {
    fn new(key: TypeKey, kind: TypeKind) -> Self {
        Self {
            key,
            kind,
            is_abstract: kind == TypeKind::Interface,
            is_generic: false,
            interfaces: Vec::new(),
            auto_bind: None,
        }
    }

    /// 设置是否为抽象类型
    pub fn abstract_type(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract || self.kind == TypeKind::Interface;
        self
    }

    /// 设置是否为泛型定义
    pub fn generic(mut self, is_generic: bool) -> Self {
        self.is_generic = is_generic;
        self
    }

    /// 设置生命周期标注
    pub fn auto_bind(mut self, auto_bind: AutoBind) -> Self {
        self.auto_bind = Some(auto_bind);
        self
    }

    /// 以指定生命周期标注
    pub fn with_lifetime(self, lifetime: Lifetime) -> Self {
        self.auto_bind(AutoBind::new(lifetime))
    }

    /// 添加实现（或继承）的接口
    pub fn implements(mut self, interface: Arc<TypeDescriptor>) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// 构建描述符
    ///
    /// 声明的接口必须全部是接口类型。
    pub fn build(self) -> TypeLoadResult<Arc<TypeDescriptor>> {
        if let Some(invalid) = self.interfaces.iter().find(|i| !i.is_interface()) {
            return Err(TypeLoadError::NotAnInterface {
                type_name: self.key.to_string(),
                interface: invalid.key.to_string(),
            });
        }

        Ok(Arc::new(TypeDescriptor {
            key: self.key,
            kind: self.kind,
            is_abstract: self.is_abstract,
            is_generic: self.is_generic,
            interfaces: self.interfaces,
            auto_bind: self.auto_bind,
        }))
    }
}

/// 可描述类型 trait
///
/// 为具体类型和 `dyn Trait` 契约提供类型描述符。通常由
/// `#[derive(Injectable)]` 和 `#[service_contract]` 生成。
pub trait Describe {
    /// 构建此类型的描述符
    fn describe() -> TypeLoadResult<Arc<TypeDescriptor>>;
}
