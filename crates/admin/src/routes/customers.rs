//! Customer list and add-customer route handlers.

use askama::Template;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use superadmin_core::{Customer, CustomerId, CustomerSortField, RecordStore, project};

use crate::{
    components::{
        DataTableConfig, ListQuery, ListState, Pager, ViewMode,
        data_table::customers_table_config,
        list_state::{Controls, ViewToggle, view_toggles},
    },
    error::AppError,
    filters,
    navigation::Destination,
    services::{CustomerForm, CustomerFormInput, SubmitError, screen_store},
    state::AppState,
};

/// Path of the customer list.
pub const CUSTOMERS_PATH: &str = "/customers";

/// Customer row view for templates.
#[derive(Debug, Clone)]
pub struct CustomerView {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub view_href: String,
    pub update_href: String,
    /// Delete form action, carrying the current list controls.
    pub delete_action: String,
}

impl CustomerView {
    fn new(customer: &Customer, router_base: &str, list_query: &str) -> Self {
        let delete_path = format!("{CUSTOMERS_PATH}/{}/delete", customer.id);
        Self {
            id: customer.id.as_i32(),
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            view_href: Destination::ViewCustomer(customer.id).href(router_base),
            update_href: Destination::UpdateCustomer(customer.id).href(router_base),
            delete_action: if list_query.is_empty() {
                delete_path
            } else {
                format!("{delete_path}?{list_query}")
            },
        }
    }
}

/// Customers list page template.
#[derive(Template)]
#[template(path = "customers/index.html")]
pub struct CustomersIndexTemplate {
    pub current_path: String,
    pub table: DataTableConfig,
    pub controls: Controls,
    pub customers: Vec<CustomerView>,
    pub pager: Pager,
    pub view_toggles: Vec<ViewToggle>,
    pub card_view: bool,
    pub error_message: Option<String>,
}

/// Customers list page handler.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let list: ListState<CustomerSortField> = ListState::from_query(&query);

    let (store, error_message) =
        match screen_store::mount(&session, state.customer_source()).await {
            Ok(store) => (store, None),
            Err(AppError::Backend(e)) => {
                tracing::error!("Failed to fetch customers: {e}");
                (
                    RecordStore::new(),
                    Some("Error: Unable to load customers.".to_string()),
                )
            }
            Err(e) => return Err(e),
        };

    let page = project(store.records(), &list.view_query(vec![]));
    let list_query = list.query_string();
    let router_base = &state.config().router_base;
    let customers = page
        .items
        .iter()
        .map(|c| CustomerView::new(c, router_base, &list_query))
        .collect();

    let table = customers_table_config();
    let template = CustomersIndexTemplate {
        current_path: CUSTOMERS_PATH.to_string(),
        controls: list.controls(&table),
        table,
        customers,
        pager: Pager::new(&page, &list, CUSTOMERS_PATH),
        view_toggles: view_toggles(&list, CUSTOMERS_PATH),
        card_view: list.view == ViewMode::Card,
        error_message,
    };

    Ok(Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    })))
}

/// Remove a customer from this session's list.
///
/// Local only; the backend is never told. Redirects back to the list with
/// the same controls.
#[instrument(skip(state, session, query))]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<CustomerId>,
    Query(query): Query<ListQuery>,
) -> Result<Redirect, AppError> {
    match screen_store::remove(&session, state.customer_source(), id).await? {
        Some(customer) => {
            tracing::info!(customer_id = %id, name = %customer.name, "Customer removed");
        }
        None => tracing::debug!(customer_id = %id, "Customer already absent"),
    }

    let list: ListState<CustomerSortField> = ListState::from_query(&query);
    Ok(Redirect::to(&list.href(CUSTOMERS_PATH)))
}

/// Add-customer page template.
#[derive(Template)]
#[template(path = "customers/new.html")]
pub struct CustomerNewTemplate {
    pub current_path: String,
    pub form: CustomerForm,
    pub message: Option<String>,
    pub message_is_error: bool,
    /// Name of the field a validation error points at, or empty.
    pub error_field: &'static str,
}

impl CustomerNewTemplate {
    fn new(form: CustomerForm) -> Self {
        let (message, message_is_error) = form
            .outcome()
            .map_or((None, false), |o| (Some(o.message().to_string()), o.is_error()));

        Self {
            current_path: format!("{CUSTOMERS_PATH}/new"),
            error_field: form.error_field().unwrap_or_default(),
            form,
            message,
            message_is_error,
        }
    }

    fn respond(self, status: StatusCode) -> Response {
        let body = self.render().unwrap_or_else(|e| {
            tracing::error!("Template render error: {}", e);
            "Internal Server Error".to_string()
        });
        (status, Html(body)).into_response()
    }
}

/// Add-customer form page handler.
#[instrument]
pub async fn new_form() -> Response {
    CustomerNewTemplate::new(CustomerForm::new()).respond(StatusCode::OK)
}

/// Add-customer form submission handler.
///
/// Validates, posts to the backend once per in-flight form id and re-renders
/// the form with the outcome. Nothing is added to the customer list.
#[instrument(skip(state, input), fields(form_id = tracing::field::Empty))]
pub async fn create(
    State(state): State<AppState>,
    Form(input): Form<CustomerFormInput>,
) -> Response {
    let mut form = CustomerForm::from_input(input);
    tracing::Span::current().record("form_id", tracing::field::display(form.form_id));

    let status = match form.submit() {
        Ok(customer) => match state.submissions().begin(form.form_id) {
            Some(_guard) => {
                let result = state.backend().create_customer(&customer).await;
                let status = match &result {
                    Ok(()) => {
                        tracing::info!(email = %customer.email, "Customer added");
                        StatusCode::OK
                    }
                    Err(e) => {
                        tracing::error!("Failed to add customer: {e}");
                        StatusCode::BAD_GATEWAY
                    }
                };
                form.complete(result.as_ref().copied());
                status
            }
            None => {
                tracing::warn!("Duplicate add-customer submission refused");
                form.refuse_duplicate();
                StatusCode::CONFLICT
            }
        },
        Err(SubmitError::Invalid(e)) => {
            tracing::info!(field = e.field(), "Add-customer input rejected: {e}");
            StatusCode::UNPROCESSABLE_ENTITY
        }
        Err(SubmitError::InFlight) => StatusCode::CONFLICT,
    };

    CustomerNewTemplate::new(form).respond(status)
}
