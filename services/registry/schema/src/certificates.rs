use sea_orm::entity::prelude::*;

/// Export certificate for one mineral batch. Read-only from the public surface.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "certificates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub batch_code: String,
    pub mineral_type: String,
    pub origin_district: String,
    pub mine_site: String,
    pub export_date: chrono::NaiveDate,
    pub weight_kg: Option<f64>,
    /// `active`, `expired` or `suspended`.
    pub certification_status: String,
    pub verified_by_rema: bool,
    pub icglr_compliant: bool,
    pub tamper_hash: Option<String>,
    pub company_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::companies::Entity",
        from = "Column::CompanyId",
        to = "super::companies::Column::Id"
    )]
    Company,
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
