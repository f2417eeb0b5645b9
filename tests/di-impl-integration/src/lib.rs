//! 约定注册集成测试使用的类型
//!
//! 整个 crate 作为一个被扫描的模块，其中的类型都通过过程宏登记到全局类型目录。

use component_macros::{service_contract, Injectable};
use infrastructure_common::{ScopedDependency, SingletonDependency, TransientDependency};

#[service_contract]
pub trait IHelloWorldForAbstract: SingletonDependency {}

/// 抽象类型，扫描时跳过
#[derive(Injectable)]
#[injectable(abstract_type)]
#[implements(IHelloWorldForAbstract)]
pub struct AbstractHelloWorld;

impl SingletonDependency for AbstractHelloWorld {}
impl IHelloWorldForAbstract for AbstractHelloWorld {}

/// 没有任何生命周期来源
#[derive(Injectable)]
pub struct NoDependencyClass;

#[service_contract]
pub trait IHelloWorldTransientInterface: TransientDependency {}

#[service_contract]
pub trait IHelloWorldSingletonInterface: SingletonDependency {}

#[service_contract]
pub trait IHelloWorldScopedInterface: ScopedDependency {}

#[derive(Injectable)]
#[implements(IHelloWorldTransientInterface)]
pub struct MyTransientClass;

impl TransientDependency for MyTransientClass {}
impl IHelloWorldTransientInterface for MyTransientClass {}

#[derive(Injectable)]
#[implements(IHelloWorldSingletonInterface)]
pub struct MySingletonClass;

impl SingletonDependency for MySingletonClass {}
impl IHelloWorldSingletonInterface for MySingletonClass {}

#[derive(Injectable)]
#[implements(IHelloWorldScopedInterface)]
pub struct MyScopedClass;

impl ScopedDependency for MyScopedClass {}
impl IHelloWorldScopedInterface for MyScopedClass {}

#[service_contract]
pub trait ITaxCalculator: SingletonDependency {
    fn tax(&self, amount: u64) -> u64;
}

#[service_contract]
pub trait ICalculator: SingletonDependency {}

#[service_contract]
pub trait ICanCalculate: SingletonDependency {}

/// 实现三个契约的计算器，只有前两个符合命名约定
#[derive(Injectable)]
#[implements(ITaxCalculator, ICalculator, ICanCalculate)]
pub struct TaxCalculator {
    pub rate_percent: u64,
}

impl SingletonDependency for TaxCalculator {}

impl ITaxCalculator for TaxCalculator {
    fn tax(&self, amount: u64) -> u64 {
        amount * self.rate_percent / 100
    }
}

impl ICalculator for TaxCalculator {}
impl ICanCalculate for TaxCalculator {}

/// 只有自身标注，没有实现任何契约
#[derive(Injectable)]
#[auto_bind(scoped)]
pub struct RequestContext;

/// 泛型定义不参与自动注册
#[derive(Injectable)]
#[auto_bind(singleton)]
pub struct Repository<T> {
    pub items: Vec<T>,
}

#[service_contract]
pub trait IGreeter: SingletonDependency {}

/// 自身标注优先于契约继承的生命周期
#[derive(Injectable)]
#[auto_bind]
#[implements(IGreeter)]
pub struct PerCallGreeter;

impl SingletonDependency for PerCallGreeter {}
impl IGreeter for PerCallGreeter {}
