pub mod campaigns_repo;
pub mod dashboard_repo;
pub mod invoices_repo;
pub mod messages_repo;
pub mod notifications_repo;
pub mod orders_repo;
pub mod payments_repo;
pub mod quotes_repo;
pub mod settings_repo;
pub mod user_repo;

pub use campaigns_repo::CampaignsRepository;
pub use dashboard_repo::DashboardRepository;
pub use invoices_repo::InvoicesRepository;
pub use messages_repo::MessagesRepository;
pub use notifications_repo::NotificationsRepository;
pub use orders_repo::OrdersRepository;
pub use payments_repo::PaymentsRepository;
pub use quotes_repo::QuotesRepository;
pub use settings_repo::SettingsRepository;
pub use user_repo::UserRepository;
