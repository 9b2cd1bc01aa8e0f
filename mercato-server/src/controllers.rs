use axum::{
    extract::{Extension, Path, Query},
    http::{StatusCode, Uri},
    Json,
};
use mercato_core::{
    CreateProductRequest, CreateUserRequest, Envelope, HealthStatus, Product, User,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::AppError;
use crate::store::{NewProduct, NewUser, DEFAULT_LIST_LIMIT};
use crate::{health_snapshot, AppState};

/// Politica di coercizione di `limite`: assente vale DEFAULT_LIST_LIMIT;
/// qualunque valore che non sia un usize valido (non numerico, negativo,
/// vuoto) degrada a 0, cioè risultato vuoto, mai un errore.
fn parse_limit(params: &HashMap<String, String>) -> usize {
    match params.get("limite") {
        None => DEFAULT_LIST_LIMIT,
        Some(raw) => raw.parse().unwrap_or(0),
    }
}

/// Handler per GET /
pub async fn root_info() -> Json<Value> {
    Json(json!({
        "message": "🚀 API Mercato funcionando!",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": mercato_core::now_timestamp(),
        "endpoints": {
            "products": "/api/products",
            "users": "/api/users",
            "health": "/health"
        }
    }))
}

/// Handler per GET /health
pub async fn health(Extension(state): Extension<Arc<AppState>>) -> Json<HealthStatus> {
    Json(health_snapshot(&state).await)
}

/// Handler per GET /api/products?category=..&limite=..
pub async fn list_products(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Envelope<Vec<Product>>>, AppError> {
    let category = params.get("category").map(|s| s.as_str());
    let limit = parse_limit(&params);
    let products = state.store.list_products(category, limit).await;
    Ok(Json(Envelope::ok(
        products,
        "Produtos encontrados com sucesso",
    )))
}

/// Handler per GET /api/products/:id. Ricerca reale nello store: 404 se assente.
pub async fn get_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Envelope<Product>>, AppError> {
    let product = state
        .store
        .get_product(id)
        .await
        .ok_or(AppError::NotFound("Produto não encontrado"))?;
    Ok(Json(Envelope::ok(product, "Produto encontrado com sucesso")))
}

/// Handler per POST /api/products. La presenza dei campi obbligatori si
/// verifica sul wire (Option), non sulla "veridicità" del valore:
/// stockQuantity: 0 è presente e valido.
pub async fn create_product(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Envelope<Product>>), AppError> {
    const REQUIRED: &str = "Nome, descrição, preço, categoria e estoque são obrigatórios";

    let name = req.name.ok_or(AppError::Validation(REQUIRED))?;
    let description = req.description.ok_or(AppError::Validation(REQUIRED))?;
    let price = req.price.ok_or(AppError::Validation(REQUIRED))?;
    let category = req.category.ok_or(AppError::Validation(REQUIRED))?;
    let stock_quantity = req.stock_quantity.ok_or(AppError::Validation(REQUIRED))?;

    if name.trim().is_empty() {
        return Err(AppError::Validation("Nome não pode ser vazio"));
    }
    if price < 0.0 {
        return Err(AppError::Validation("Preço não pode ser negativo"));
    }
    if stock_quantity < 0 {
        return Err(AppError::Validation("Estoque não pode ser negativo"));
    }
    // niente troncamento silenzioso: un estoque oltre u32::MAX è 400, non 201
    let stock_quantity =
        u32::try_from(stock_quantity).map_err(|_| AppError::Validation("Estoque inválido"))?;

    let product = state
        .store
        .insert_product(NewProduct {
            name,
            description,
            price,
            category,
            stock_quantity,
            image: req.image,
        })
        .await;
    tracing::info!("produto {} criado", product.id);

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(product, "Produto criado com sucesso")),
    ))
}

/// Handler per GET /api/users (nessun filtro né limite nel contratto).
pub async fn list_users(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Envelope<Vec<User>>>, AppError> {
    let users = state.store.list_users().await;
    Ok(Json(Envelope::ok(users, "Usuários encontrados com sucesso")))
}

/// Handler per GET /api/users/:id
pub async fn get_user(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Envelope<User>>, AppError> {
    let user = state
        .store
        .get_user(id)
        .await
        .ok_or(AppError::NotFound("Usuário não encontrado"))?;
    Ok(Json(Envelope::ok(user, "Usuário encontrado com sucesso")))
}

/// Handler per POST /api/users. La password è obbligatoria sul wire ma
/// viene scartata qui: NewUser non ha alcun campo dove metterla.
pub async fn create_user(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<Envelope<User>>), AppError> {
    const REQUIRED: &str = "Nome, email e senha são obrigatórios";

    let name = req.name.ok_or(AppError::Validation(REQUIRED))?;
    let email = req.email.ok_or(AppError::Validation(REQUIRED))?;
    let _password = req.password.ok_or(AppError::Validation(REQUIRED))?;

    if name.trim().is_empty() {
        return Err(AppError::Validation("Nome não pode ser vazio"));
    }

    let user = state
        .store
        .insert_user(NewUser {
            name,
            email,
            phone: req.phone,
            address: req.address,
        })
        .await;
    tracing::info!("usuário {} criado", user.id);

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(user, "Usuário criado com sucesso")),
    ))
}

/// Fallback per le rotte non registrate: 404 con la busta di errore che
/// nomina l'URL richiesto per intero, query string compresa.
pub async fn not_found(uri: Uri) -> (StatusCode, Json<Envelope<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(Envelope::fail(format!(
            "A rota {} não existe nesta API",
            uri
        ))),
    )
}
