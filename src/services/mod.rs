pub mod auth;
pub mod campaigns_service;
pub mod invoices_service;
pub mod messages_service;
pub mod notifications_service;
pub mod orders_service;
pub mod payments_service;
pub mod quotes_service;
