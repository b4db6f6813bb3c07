//! Static response bodies.

use serde::Serialize;

pub const ORM_PREFIX: &str = "heroes";
pub const SQL_PREFIX: &str = "heroes_sql";

#[derive(Debug, Serialize)]
pub struct RouteMap {
    pub heroes_orm: String,
    pub heroes_sql: String,
    pub openapi: String,
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct RootDescriptor {
    pub message: &'static str,
    pub endpoints: RouteMap,
    pub learning: &'static str,
}

pub fn root_descriptor() -> RootDescriptor {
    RootDescriptor {
        message: "Welcome to Heroes API",
        endpoints: RouteMap {
            heroes_orm: format!("/{}", ORM_PREFIX),
            heroes_sql: format!("/{}", SQL_PREFIX),
            openapi: "/openapi.json".into(),
        },
        learning: "Compare /heroes vs /heroes_sql to see ORM vs SQL differences",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_lists_both_surfaces() {
        let v = serde_json::to_value(root_descriptor()).unwrap();
        assert_eq!(v["endpoints"]["heroes_orm"], "/heroes");
        assert_eq!(v["endpoints"]["heroes_sql"], "/heroes_sql");
    }
}
