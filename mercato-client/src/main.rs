use anyhow::Context;
use std::sync::Arc;

use mercato_client::{CatalogApi, Display, HttpCatalogClient, ProductBrowser};

/// Driver minimo della pipeline: un ciclo fetch → filtro → stampa.
/// Uso: mercato-client [categoria] [busca]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_url = std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:3001".to_string());
    let mut args = std::env::args().skip(1);
    let categoria = args.next();
    let busca = args.next().unwrap_or_default();

    // Client costruito esplicitamente e iniettato: nessun singleton globale
    let api: Arc<dyn CatalogApi> = Arc::new(HttpCatalogClient::new(&base_url));

    let health = api.health().await.context("probe de /health")?;
    println!(
        "Servidor {}: {} (banco: {})",
        base_url, health.status, health.database
    );

    let mut browser = ProductBrowser::new(api);
    let ticket = match browser.select_category(categoria) {
        Some(t) => t,
        // nessuna categoria scelta: primo caricamento esplicito
        None => browser.reload(),
    };
    browser.fetch(ticket).await;
    browser.set_query(busca);

    match browser.display() {
        Display::Loading => println!("Carregando produtos..."),
        Display::Failed(message) => println!("Erro ao carregar produtos: {}", message),
        Display::Empty => println!("Nenhum produto encontrado"),
        Display::Showing(products) => {
            println!("{} produto(s):", products.len());
            for p in &products {
                let image = p.image.as_deref().unwrap_or("(sem imagem)");
                println!(
                    "  #{} {} | R$ {:.2} | {} | estoque: {} | {}",
                    p.id, p.name, p.price, p.category, p.stock_quantity, image
                );
            }
        }
    }

    Ok(())
}
