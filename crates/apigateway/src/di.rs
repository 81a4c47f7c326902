use shared::{
    abstract_trait::{
        auth::DynAuthService,
        company::service::stats::DynCompanyStatsService,
        purchase::{
            repository::{query::DynPurchaseQueryRepository, stats::DynPurchaseStatsRepository},
            service::query::DynPurchaseQueryService,
        },
        user::repository::query::DynUserQueryRepository,
    },
    config::ConnectionPool,
    repository::{
        purchase::{PurchaseQueryRepository, PurchaseStatsRepository},
        user::UserQueryRepository,
    },
    service::{auth::AuthService, company::CompanyStatsService, purchase::PurchaseQueryService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub purchase_query_service: DynPurchaseQueryService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"AuthService")
            .field("purchase_query_service", &"PurchaseQueryService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let user_query =
            Arc::new(UserQueryRepository::new(pool.clone())) as DynUserQueryRepository;
        let purchase_query =
            Arc::new(PurchaseQueryRepository::new(pool.clone())) as DynPurchaseQueryRepository;
        let purchase_stats =
            Arc::new(PurchaseStatsRepository::new(pool)) as DynPurchaseStatsRepository;

        Self::from_repositories(user_query, purchase_query, purchase_stats)
    }

    /// Wires the services over any repository implementation, such as the
    /// in-memory store used by the tests.
    pub fn from_repositories(
        user_query: DynUserQueryRepository,
        purchase_query: DynPurchaseQueryRepository,
        purchase_stats: DynPurchaseStatsRepository,
    ) -> Self {
        let auth_service = Arc::new(AuthService::new(user_query)) as DynAuthService;

        let company_stats_service =
            Arc::new(CompanyStatsService::new(purchase_stats)) as DynCompanyStatsService;

        let purchase_query_service = Arc::new(PurchaseQueryService::new(
            purchase_query,
            company_stats_service,
        )) as DynPurchaseQueryService;

        Self {
            auth_service,
            purchase_query_service,
        }
    }
}
