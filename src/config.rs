// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        CampaignsRepository, DashboardRepository, InvoicesRepository, MessagesRepository,
        NotificationsRepository, OrdersRepository, PaymentsRepository, QuotesRepository,
        SettingsRepository, UserRepository,
    },
    services::{
        auth::AuthService, campaigns_service::CampaignsService, invoices_service::InvoicesService,
        messages_service::MessagesService, notifications_service::NotificationsService,
        orders_service::OrdersService, payments_service::PaymentsService,
        quotes_service::QuotesService,
    },
};

// El estado compartido, accesible en toda la aplicación
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,

    pub auth_service: AuthService,
    pub orders_service: OrdersService,
    pub payments_service: PaymentsService,
    pub quotes_service: QuotesService,
    pub invoices_service: InvoicesService,
    pub messages_service: MessagesService,
    pub campaigns_service: CampaignsService,
    pub notifications_service: NotificationsService,

    // Las áreas sin reglas de negocio hablan directo con su repositorio
    pub user_repo: UserRepository,
    pub dashboard_repo: DashboardRepository,
    pub settings_repo: SettingsRepository,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL debe estar definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET debe estar definido");

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexión con la base de datos establecida");

        // --- Arma el grafo de dependencias ---
        let user_repo = UserRepository::new(db_pool.clone());
        let orders_repo = OrdersRepository::new(db_pool.clone());
        let payments_repo = PaymentsRepository::new(db_pool.clone());
        let quotes_repo = QuotesRepository::new(db_pool.clone());
        let invoices_repo = InvoicesRepository::new(db_pool.clone());
        let messages_repo = MessagesRepository::new(db_pool.clone());
        let campaigns_repo = CampaignsRepository::new(db_pool.clone());
        let notifications_repo = NotificationsRepository::new(db_pool.clone());
        let dashboard_repo = DashboardRepository::new(db_pool.clone());
        let settings_repo = SettingsRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo.clone(), jwt_secret);
        let orders_service = OrdersService::new(orders_repo.clone());
        let payments_service = PaymentsService::new(payments_repo, orders_repo.clone());
        let quotes_service = QuotesService::new(quotes_repo.clone(), db_pool.clone());
        let invoices_service =
            InvoicesService::new(invoices_repo, orders_repo, quotes_repo, db_pool.clone());
        let messages_service = MessagesService::new(messages_repo);
        let campaigns_service = CampaignsService::new(campaigns_repo);
        let notifications_service =
            NotificationsService::new(notifications_repo, user_repo.clone());

        Ok(Self {
            db_pool,
            auth_service,
            orders_service,
            payments_service,
            quotes_service,
            invoices_service,
            messages_service,
            campaigns_service,
            notifications_service,
            user_repo,
            dashboard_repo,
            settings_repo,
        })
    }
}
