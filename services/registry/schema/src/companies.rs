use sea_orm::entity::prelude::*;

/// Licensed mining company.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub registration_number: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub mine_location_lat: Option<f64>,
    pub mine_location_lng: Option<f64>,
    pub certification_status: String,
    pub certification_start_date: Option<chrono::NaiveDate>,
    pub certification_end_date: Option<chrono::NaiveDate>,
    /// `{"AU": bool, "REMA": bool, "ICGLR": bool, "COMESA": bool}`
    pub regional_compliance: Json,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::certificates::Entity")]
    Certificates,
}

impl Related<super::certificates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Certificates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
