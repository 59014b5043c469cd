pub use super::build_request::Entity as BuildRequest;
pub use super::building::Entity as Building;
pub use super::cash_audit_record::Entity as CashAuditRecord;
pub use super::colony::Entity as Colony;
pub use super::empire::Entity as Empire;
pub use super::star::Entity as Star;
