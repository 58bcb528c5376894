use sea_orm_migration::prelude::*;

mod m20250101_000001_create_profiles;
mod m20250101_000002_create_user_roles;
mod m20250101_000003_create_companies;
mod m20250101_000004_create_certificates;
mod m20250101_000005_create_feedback_reports;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_profiles::Migration),
            Box::new(m20250101_000002_create_user_roles::Migration),
            Box::new(m20250101_000003_create_companies::Migration),
            Box::new(m20250101_000004_create_certificates::Migration),
            Box::new(m20250101_000005_create_feedback_reports::Migration),
        ]
    }
}
