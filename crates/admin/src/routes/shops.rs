//! Shop list route handlers.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use tower_sessions::Session;
use tracing::instrument;

use superadmin_core::{RecordStore, Shop, ShopFacet, ShopId, ShopSortField, project};

use crate::{
    components::{
        DataTableConfig, ListQuery, ListState, Pager, ViewMode,
        data_table::shops_table_config,
        list_state::{Controls, ViewToggle, view_toggles},
    },
    error::AppError,
    filters,
    navigation::Destination,
    services::screen_store,
    state::AppState,
};

/// Path of the shop list.
pub const SHOPS_PATH: &str = "/shops";

/// Shop row view for templates.
#[derive(Debug, Clone)]
pub struct ShopView {
    pub id: i32,
    pub name: String,
    pub owner_name: String,
    pub location: String,
    pub shop_type: String,
    pub package_type: &'static str,
    pub view_href: String,
    pub update_href: String,
    /// Delete form action, carrying the current list controls.
    pub delete_action: String,
}

impl ShopView {
    fn new(shop: &Shop, router_base: &str, list_query: &str) -> Self {
        let delete_path = format!("{SHOPS_PATH}/{}/delete", shop.id);
        Self {
            id: shop.id.as_i32(),
            name: shop.name.clone(),
            owner_name: shop.owner_name.clone(),
            location: shop.location.clone(),
            shop_type: shop.shop_type.to_string(),
            package_type: shop.package_type.as_str(),
            view_href: Destination::ViewShop(shop.id).href(router_base),
            update_href: Destination::UpdateShop(shop.id).href(router_base),
            delete_action: if list_query.is_empty() {
                delete_path
            } else {
                format!("{delete_path}?{list_query}")
            },
        }
    }
}

/// Shops list page template.
#[derive(Template)]
#[template(path = "shops/index.html")]
pub struct ShopsIndexTemplate {
    pub current_path: String,
    pub table: DataTableConfig,
    pub controls: Controls,
    pub shops: Vec<ShopView>,
    pub pager: Pager,
    pub view_toggles: Vec<ViewToggle>,
    pub card_view: bool,
    pub error_message: Option<String>,
}

/// Facet filters set on a shop list.
fn facets(list: &ListState<ShopSortField>) -> Vec<(ShopFacet, String)> {
    let mut facets = Vec::new();
    if let Some(category) = &list.category {
        facets.push((ShopFacet::Category, category.clone()));
    }
    if let Some(package) = &list.package {
        facets.push((ShopFacet::Package, package.clone()));
    }
    facets
}

/// Shops list page handler.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let list: ListState<ShopSortField> = ListState::from_query(&query);

    let (store, error_message) = match screen_store::mount(&session, state.shop_source()).await {
        Ok(store) => (store, None),
        Err(AppError::Backend(e)) => {
            tracing::error!("Failed to fetch shops: {e}");
            (
                RecordStore::new(),
                Some("Error: Unable to load shops.".to_string()),
            )
        }
        Err(e) => return Err(e),
    };

    let page = project(store.records(), &list.view_query(facets(&list)));
    let list_query = list.query_string();
    let router_base = &state.config().router_base;
    let shops = page
        .items
        .iter()
        .map(|s| ShopView::new(s, router_base, &list_query))
        .collect();

    let table = shops_table_config(&state.config().shop_categories);
    let template = ShopsIndexTemplate {
        current_path: SHOPS_PATH.to_string(),
        controls: list.controls(&table),
        table,
        shops,
        pager: Pager::new(&page, &list, SHOPS_PATH),
        view_toggles: view_toggles(&list, SHOPS_PATH),
        card_view: list.view == ViewMode::Card,
        error_message,
    };

    Ok(Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    })))
}

/// Remove a shop from this session's list.
///
/// Local only; the backend is never told.
#[instrument(skip(state, session, query))]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<ShopId>,
    Query(query): Query<ListQuery>,
) -> Result<Redirect, AppError> {
    match screen_store::remove(&session, state.shop_source(), id).await? {
        Some(shop) => tracing::info!(shop_id = %id, name = %shop.name, "Shop removed"),
        None => tracing::debug!(shop_id = %id, "Shop already absent"),
    }

    let list: ListState<ShopSortField> = ListState::from_query(&query);
    Ok(Redirect::to(&list.href(SHOPS_PATH)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facets_from_list_state() {
        let list: ListState<ShopSortField> = ListState::from_query(&ListQuery {
            category: Some("Medical".to_string()),
            package: Some("Standard".to_string()),
            ..ListQuery::default()
        });
        assert_eq!(
            facets(&list),
            vec![
                (ShopFacet::Category, "Medical".to_string()),
                (ShopFacet::Package, "Standard".to_string()),
            ]
        );

        assert!(facets(&ListState::default()).is_empty());
    }
}
