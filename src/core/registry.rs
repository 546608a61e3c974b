//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! `singleton_macro`의 `#[service]` / `#[repository]` 매크로가 생성하는 코드가
//! 의존하는 레지스트리입니다. 매크로는 각 컴포넌트를 `inventory`로 등록하고,
//! `Arc<T>` 필드는 [`ServiceLocator::get`]을 통해 주입받습니다.
//!
//! ## 구성 요소
//!
//! | 구성 요소 | 역할 |
//! |-----------|------|
//! | [`ServiceLocator`] | 타입별 싱글톤 인스턴스 보관소 |
//! | [`ServiceRegistration`] | `#[service]` 가 제출하는 생성자 |
//! | [`RepositoryRegistration`] | `#[repository]` 가 제출하는 생성자 |
//!
//! ## 초기화 순서
//!
//! ```text
//! main()
//!  ├─ ServiceLocator::set(Arc<Database>)       인프라 컴포넌트는 직접 등록
//!  ├─ ServiceLocator::set(Arc<RedisClient>)
//!  └─ ServiceLocator::initialize_all()
//!       ├─ IntegrationRepository::instance()    db/redis 필드 주입
//!       └─ OAuthLoginService::instance()        Arc<IntegrationRepository> 주입
//! ```
//!
//! 리포지토리 조회는 타입 이름에서 `Repository` 접미사를 뗀 소문자 이름과
//! 등록 이름(`{name}_repository`)을 비교합니다.
//! 예: `IntegrationRepository` ↔ `#[repository(name = "integration")]`
//!
//! ## 순환 참조
//!
//! 생성 중인 타입을 다시 요청하면 즉시 패닉합니다. 서비스끼리 `Arc` 필드로
//! 서로를 참조하지 말고, 공통 로직은 리포지토리나 함수로 분리하세요.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use log::{debug, error};

use crate::utils::display_terminal::{print_boxed_title, print_component, print_registry_summary};

/// `#[service]` 매크로가 구현하는 서비스 trait
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[repository]` 매크로가 구현하는 리포지토리 trait
#[async_trait]
pub trait Repository: Send + Sync {
    fn name(&self) -> &str;
    fn collection_name(&self) -> &str;
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보 (`{name}_service`)
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보 (`{name}_repository`)
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 컴포넌트 종류별 조회 규칙
#[derive(Clone, Copy)]
enum ComponentKind {
    Repository,
    Service,
}

impl ComponentKind {
    fn suffix(self) -> &'static str {
        match self {
            ComponentKind::Repository => "Repository",
            ComponentKind::Service => "Service",
        }
    }

    fn registration_suffix(self) -> &'static str {
        match self {
            ComponentKind::Repository => "_repository",
            ComponentKind::Service => "_service",
        }
    }

    /// 타입 이름(`IntegrationRepository`)의 컴포넌트 종류를 판별합니다.
    fn of(type_name: &str) -> Option<Self> {
        if type_name.ends_with("Repository") {
            Some(ComponentKind::Repository)
        } else if type_name.ends_with("Service") {
            Some(ComponentKind::Service)
        } else {
            None
        }
    }

    /// 등록 이름 → 생성자 테이블
    fn constructors(self) -> &'static HashMap<String, fn() -> Box<dyn Any + Send + Sync>> {
        match self {
            ComponentKind::Repository => &REPOSITORY_CONSTRUCTORS,
            ComponentKind::Service => &SERVICE_CONSTRUCTORS,
        }
    }
}

static REPOSITORY_CONSTRUCTORS: Lazy<HashMap<String, fn() -> Box<dyn Any + Send + Sync>>> = Lazy::new(|| {
    inventory::iter::<RepositoryRegistration>()
        .map(|r| (registration_key(r.name, ComponentKind::Repository), r.constructor))
        .collect()
});

static SERVICE_CONSTRUCTORS: Lazy<HashMap<String, fn() -> Box<dyn Any + Send + Sync>>> = Lazy::new(|| {
    inventory::iter::<ServiceRegistration>()
        .map(|r| (registration_key(r.name, ComponentKind::Service), r.constructor))
        .collect()
});

/// `integration_repository` → `integration`
fn registration_key(name: &str, kind: ComponentKind) -> String {
    name.strip_suffix(kind.registration_suffix())
        .unwrap_or(name)
        .to_string()
}

/// `crate::repositories::IntegrationRepository` → `IntegrationRepository`
fn short_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// 타입별 싱글톤 인스턴스 보관소
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    resolving: RwLock<HashSet<TypeId>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(|| ServiceLocator {
    instances: RwLock::new(HashMap::new()),
    resolving: RwLock::new(HashSet::new()),
});

impl ServiceLocator {
    fn instances() -> RwLockReadGuard<'static, HashMap<TypeId, Arc<dyn Any + Send + Sync>>> {
        LOCATOR.instances.read().unwrap_or_else(|e| e.into_inner())
    }

    fn instances_mut() -> RwLockWriteGuard<'static, HashMap<TypeId, Arc<dyn Any + Send + Sync>>> {
        LOCATOR.instances.write().unwrap_or_else(|e| e.into_inner())
    }

    fn resolving_mut() -> RwLockWriteGuard<'static, HashSet<TypeId>> {
        LOCATOR.resolving.write().unwrap_or_else(|e| e.into_inner())
    }

    fn cached<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        Self::instances()
            .get(&TypeId::of::<T>())
            .and_then(|instance| instance.clone().downcast::<T>().ok())
    }

    /// 타입 `T`의 싱글톤 인스턴스를 반환합니다.
    ///
    /// 1. `set`으로 등록되었거나 이미 생성된 인스턴스가 있으면 그대로 반환
    /// 2. 없으면 매크로가 등록한 생성자를 찾아 생성 후 캐시
    ///
    /// # Panics
    ///
    /// 등록되지 않은 타입이거나 순환 참조가 감지되면 패닉합니다.
    /// 모두 기동 시점의 배선 오류입니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        if let Some(instance) = Self::cached::<T>() {
            return instance;
        }

        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if !Self::resolving_mut().insert(type_id) {
            error!("❌ 순환 의존성 감지: {}", type_name);
            panic!("Circular dependency detected: {} is already being initialized", type_name);
        }

        // 생성자 안에서 다른 의존성을 get 하므로 락을 잡지 않은 상태로 호출
        let created = Self::construct::<T>(type_name);
        Self::resolving_mut().remove(&type_id);

        match created {
            Ok(instance) => {
                Self::instances_mut()
                    .entry(type_id)
                    .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>);
                debug!("🔗 주입 완료: {}", short_type_name(type_name));
                instance
            }
            Err(message) => {
                error!("❌ {}", message);
                panic!("{}", message);
            }
        }
    }

    fn construct<T: 'static + Send + Sync>(type_name: &str) -> Result<Arc<T>, String> {
        let short_name = short_type_name(type_name);
        let kind = ComponentKind::of(short_name).ok_or_else(|| {
            format!(
                "Component not found: {}. Register it with #[service]/#[repository] or ServiceLocator::set()",
                type_name
            )
        })?;

        let key = short_name
            .strip_suffix(kind.suffix())
            .unwrap_or(short_name)
            .to_lowercase();

        let constructor = kind
            .constructors()
            .get(&key)
            .ok_or_else(|| format!("No {} registered for '{}' ({})", kind.suffix(), key, type_name))?;

        constructor()
            .downcast::<Arc<T>>()
            .map(|boxed| *boxed)
            .map_err(|_| format!("Type mismatch while constructing {}", type_name))
    }

    /// 인프라 컴포넌트(Database, RedisClient 등)를 직접 등록합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        print_component(short_type_name(type_name), "registered");
        Self::instances_mut().insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리와 서비스를 미리 생성합니다.
    ///
    /// 리포지토리를 먼저 만들어 서비스 생성 시 주입될 수 있도록 합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 SERVICE REGISTRY");

        let mut repositories = 0;
        for registration in inventory::iter::<RepositoryRegistration>() {
            let _ = (registration.constructor)();
            print_component(registration.name, "created");
            repositories += 1;
        }

        let mut services = 0;
        for registration in inventory::iter::<ServiceRegistration>() {
            let _ = (registration.constructor)();
            print_component(registration.name, "created");
            services += 1;
        }

        print_registry_summary(repositories, services);
        Ok(())
    }
}
