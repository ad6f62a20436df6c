pub mod auth;
pub mod campaigns;
pub mod dashboard;
pub mod invoices;
pub mod messages;
pub mod notifications;
pub mod orders;
pub mod payments;
pub mod quotes;
pub mod settings;
