pub mod prelude;

pub mod build_request;
pub mod building;
pub mod cash_audit_record;
pub mod colony;
pub mod empire;
pub mod star;
