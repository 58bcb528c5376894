pub mod certificates;
pub mod companies;
pub mod feedback_reports;
pub mod profiles;
pub mod user_roles;
