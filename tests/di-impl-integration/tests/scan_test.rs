//! 按约定扫描注册的端到端测试

use di_impl::{ServiceCollectionExt, ServiceCollectionImpl};
use di_impl_integration_tests::*;
use infrastructure_common::{
    Lifetime, SingletonDependency, TypeDescriptor, TypeKey, TypeLoadError, TypeModule,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// 初始化测试日志系统（只初始化一次）
fn init_test_logger() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// 使用默认选项扫描整个夹具 crate
fn scanned() -> ServiceCollectionImpl {
    init_test_logger();
    let mut services = ServiceCollectionImpl::new();
    services.scan_for_dependency_of::<TaxCalculator, _>(|options| {
        options.default_conventions_binding_only = false;
    });
    services
}

fn implementation_name(services: &ServiceCollectionImpl, key: TypeKey) -> Option<&'static str> {
    services.implementation_of(key).map(|d| d.name())
}

#[test]
fn test_module_contains_declared_types() {
    let module = TypeModule::containing::<TaxCalculator>();
    assert_eq!(module.name(), "di_impl_integration_tests");

    let types = module.load_types().expect("所有夹具类型都应能加载");
    let names: Vec<_> = types.iter().map(|t| t.name()).collect();
    for expected in ["TaxCalculator", "ITaxCalculator", "NoDependencyClass", "Repository"] {
        assert!(names.contains(&expected), "缺少类型 {expected}");
    }
}

#[test]
fn test_scan_ignores_abstract_type() {
    let services = scanned();
    assert!(services.get_service::<AbstractHelloWorld>().is_none());
    assert!(services.get_service::<dyn IHelloWorldForAbstract>().is_none());
}

#[test]
fn test_registers_transient() {
    let services = scanned();
    assert!(services.contains_with_lifetime(TypeKey::of::<MyTransientClass>(), Lifetime::Transient));
}

#[test]
fn test_registers_singleton() {
    let services = scanned();
    assert!(services.contains_with_lifetime(TypeKey::of::<MySingletonClass>(), Lifetime::Singleton));
}

#[test]
fn test_registers_scoped() {
    let services = scanned();
    assert!(services.contains_with_lifetime(TypeKey::of::<MyScopedClass>(), Lifetime::Scoped));
}

#[test]
fn test_type_without_lifetime_is_not_registered() {
    let services = scanned();
    assert!(!services.contains(TypeKey::of::<NoDependencyClass>()));
}

#[test]
fn test_contracts_resolve_to_implementations() {
    let services = scanned();

    let scoped = services.get_service::<dyn IHelloWorldScopedInterface>();
    let singleton = services.get_service::<dyn IHelloWorldSingletonInterface>();
    let transient = services.get_service::<dyn IHelloWorldTransientInterface>();

    assert_eq!(scoped.map(|d| d.key()), Some(TypeKey::of::<MyScopedClass>()));
    assert_eq!(singleton.map(|d| d.key()), Some(TypeKey::of::<MySingletonClass>()));
    assert_eq!(transient.map(|d| d.key()), Some(TypeKey::of::<MyTransientClass>()));
}

#[test]
fn test_default_conventions_only() {
    init_test_logger();
    let mut services = ServiceCollectionImpl::new();
    services.scan_for_dependency_of::<TaxCalculator, _>(|options| {
        options.default_conventions_binding_only = true;
    });

    let calculator = Some("TaxCalculator");
    assert_eq!(implementation_name(&services, TypeKey::of::<dyn ITaxCalculator>()), calculator);
    assert_eq!(implementation_name(&services, TypeKey::of::<dyn ICalculator>()), calculator);
    assert_eq!(implementation_name(&services, TypeKey::of::<dyn ICanCalculate>()), None);
    assert_eq!(implementation_name(&services, TypeKey::of::<TaxCalculator>()), calculator);
    assert_eq!(services.services_implemented_by(TypeKey::of::<TaxCalculator>()).len(), 3);
}

#[test]
fn test_without_default_conventions() {
    let services = scanned();

    let calculator = Some("TaxCalculator");
    assert_eq!(implementation_name(&services, TypeKey::of::<dyn ITaxCalculator>()), calculator);
    assert_eq!(implementation_name(&services, TypeKey::of::<dyn ICalculator>()), calculator);
    assert_eq!(implementation_name(&services, TypeKey::of::<dyn ICanCalculate>()), calculator);
    assert_eq!(implementation_name(&services, TypeKey::of::<TaxCalculator>()), calculator);
    assert_eq!(
        services.services_implemented_by(TypeKey::of::<TaxCalculator>()),
        vec![
            TypeKey::of::<TaxCalculator>(),
            TypeKey::of::<dyn ITaxCalculator>(),
            TypeKey::of::<dyn SingletonDependency>(),
            TypeKey::of::<dyn ICalculator>(),
            TypeKey::of::<dyn ICanCalculate>(),
        ]
    );
}

#[test]
fn test_add_assembly_uses_default_options() {
    init_test_logger();
    let mut services = ServiceCollectionImpl::new();
    services.add_assembly_of::<TaxCalculator>();

    // 默认选项不启用命名约定过滤，所有契约都会注册
    assert_eq!(implementation_name(&services, TypeKey::of::<dyn ITaxCalculator>()), Some("TaxCalculator"));
    assert_eq!(implementation_name(&services, TypeKey::of::<dyn ICanCalculate>()), Some("TaxCalculator"));
    assert!(services.contains_with_lifetime(TypeKey::of::<RequestContext>(), Lifetime::Scoped));
}

#[test]
fn test_add_type() -> anyhow::Result<()> {
    init_test_logger();
    let mut services = ServiceCollectionImpl::new();
    services.add_type::<TaxCalculator, _>(|options| options.default_conventions_binding_only = true)?;

    assert_eq!(implementation_name(&services, TypeKey::of::<dyn ITaxCalculator>()), Some("TaxCalculator"));
    assert_eq!(implementation_name(&services, TypeKey::of::<dyn ICalculator>()), Some("TaxCalculator"));
    assert_eq!(implementation_name(&services, TypeKey::of::<dyn ICanCalculate>()), None);
    assert_eq!(services.len(), 3);
    Ok(())
}

#[test]
fn test_add_type_without_default_conventions() -> anyhow::Result<()> {
    init_test_logger();
    let mut services = ServiceCollectionImpl::new();
    services.add_type::<TaxCalculator, _>(|options| options.default_conventions_binding_only = false)?;

    assert_eq!(implementation_name(&services, TypeKey::of::<dyn ICanCalculate>()), Some("TaxCalculator"));
    assert_eq!(services.len(), 5);
    Ok(())
}

#[test]
fn test_add_type_skips_non_candidates() -> anyhow::Result<()> {
    init_test_logger();
    let mut services = ServiceCollectionImpl::new();
    services
        .add_type::<AbstractHelloWorld, _>(|_| {})?
        .add_type::<dyn SingletonDependency, _>(|_| {})?
        .add_type::<dyn ITaxCalculator, _>(|_| {})?
        .add_type::<Repository<u8>, _>(|_| {})?;
    assert!(services.is_empty());

    let mut scanned = ServiceCollectionImpl::new();
    scanned.scan_for_dependency(&TypeModule::new("one").with::<AbstractHelloWorld>(), |_| {});
    assert!(scanned.is_empty());
    Ok(())
}

#[test]
fn test_scans_do_not_share_options() {
    init_test_logger();
    let mut strict = ServiceCollectionImpl::new();
    strict.scan_for_dependency_of::<TaxCalculator, _>(|options| {
        options.default_conventions_binding_only = true;
    });

    let mut relaxed = ServiceCollectionImpl::new();
    relaxed.scan_for_dependency_of::<TaxCalculator, _>(|_| {});

    assert!(!strict.contains(TypeKey::of::<dyn ICanCalculate>()));
    assert!(relaxed.contains(TypeKey::of::<dyn ICanCalculate>()));
}

#[test]
fn test_generic_definition_is_not_registered() {
    let services = scanned();
    assert!(services
        .services_implemented_by(TypeKey::new("di_impl_integration_tests", "Repository"))
        .is_empty());
}

#[test]
fn test_own_annotation_without_contracts() {
    let services = scanned();
    assert_eq!(
        services.services_implemented_by(TypeKey::of::<RequestContext>()),
        vec![TypeKey::of::<RequestContext>()]
    );
    assert_eq!(services.lifetime_of(TypeKey::of::<RequestContext>()), Some(Lifetime::Scoped));
}

#[test]
fn test_own_annotation_overrides_contract_lifetime() {
    let services = scanned();
    assert_eq!(services.lifetime_of(TypeKey::of::<PerCallGreeter>()), Some(Lifetime::Transient));
    assert_eq!(services.lifetime_of(TypeKey::of::<dyn IGreeter>()), Some(Lifetime::Transient));
}

#[test]
fn test_partial_module_still_registers_loadable_types() {
    init_test_logger();
    let module = TypeModule::new("partial")
        .with::<MySingletonClass>()
        .with_loader("partial::Broken", || {
            Err(TypeLoadError::loader_failed("partial::Broken", "dependency not linked"))
        })
        .with::<MyScopedClass>();

    let mut services = ServiceCollectionImpl::new();
    services.scan_for_dependency(&module, |_| {});

    assert!(services.contains(TypeKey::of::<MySingletonClass>()));
    assert!(services.contains(TypeKey::of::<MyScopedClass>()));
    assert!(!services.contains(TypeKey::new("partial", "Broken")));
}

#[test]
fn test_descriptor_from_macro_matches_declaration() {
    let calculator: std::sync::Arc<TypeDescriptor> =
        <TaxCalculator as infrastructure_common::Describe>::describe().unwrap();

    assert!(calculator.is_class());
    assert!(!calculator.is_abstract());
    assert!(calculator.auto_bind().is_none());
    let declared: Vec<_> = calculator.interfaces().iter().map(|i| i.name()).collect();
    assert_eq!(declared, vec!["ITaxCalculator", "ICalculator", "ICanCalculate"]);
}

#[test]
fn test_function_local_type_is_found_by_rust_type() -> anyhow::Result<()> {
    use component_macros::Injectable;

    #[derive(Injectable)]
    #[auto_bind(singleton)]
    struct LocalCache;

    init_test_logger();
    let mut services = ServiceCollectionImpl::new();
    services.add_type::<LocalCache, _>(|_| {})?;

    assert_eq!(services.get_service::<LocalCache>().map(|d| d.name()), Some("LocalCache"));
    assert_eq!(
        services.services_implemented_by(TypeKey::of::<LocalCache>()),
        vec![TypeKey::of::<LocalCache>()]
    );
    Ok(())
}
