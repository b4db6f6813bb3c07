//! `heroes` table mapping.

use crate::model::HeroPublic;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "heroes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub name: String,
    #[sea_orm(indexed)]
    pub age: Option<i32>,
    pub secret_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for HeroPublic {
    fn from(m: Model) -> Self {
        HeroPublic {
            id: m.id,
            name: m.name,
            age: m.age,
        }
    }
}
